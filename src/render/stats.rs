//! Plan statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Page};

/// Counts collected from a plan's blocks and, optionally, its pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    /// Number of headings
    pub heading_count: u32,

    /// Number of bold lines
    pub bold_count: u32,

    /// Number of bulleted and numbered items
    pub list_item_count: u32,

    /// Number of plain paragraphs
    pub paragraph_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Number of blank lines
    pub blank_line_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,

    /// Number of exported pages, once laid out
    pub page_count: Option<u32>,
}

impl PlanStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a block sequence.
    pub fn from_blocks<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Self {
        let mut stats = Self::new();
        for block in blocks {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::Bold { .. } => self.bold_count += 1,
            Block::BulletItem { .. } | Block::NumberedItem { .. } => self.list_item_count += 1,
            Block::Paragraph { .. } => self.paragraph_count += 1,
            Block::HorizontalRule => self.horizontal_rule_count += 1,
            Block::BlankLine => self.blank_line_count += 1,
        }
        if let Some(text) = block.text() {
            self.count_text(text);
        }
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Record the page count of a layout pass.
    pub fn with_pages(mut self, pages: &[Page]) -> Self {
        self.page_count = Some(pages.len() as u32);
        self
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.bold_count
            + self.list_item_count
            + self.paragraph_count
            + self.horizontal_rule_count
            + self.blank_line_count
    }
}
