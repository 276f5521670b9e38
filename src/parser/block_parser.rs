//! Block parser implementation.

use regex::Regex;
use std::str::Split;

use crate::model::{Block, HeadingLevel};

const NUMBERED_PATTERN: &str = r"^([0-9]+)\.\s";

const BULLET_MARKERS: [&str; 3] = ["• ", "* ", "- "];

/// Classifies lines of plan text into blocks.
///
/// Rules are tried in a fixed order and the first match wins:
///
/// 1. `### `, `## `, `# ` headings (deepest marker first)
/// 2. a trimmed line wrapped in `**` (at least four characters)
/// 3. `• `, `* ` or `- ` bullet items
/// 4. `N. ` numbered items
/// 5. a trimmed line starting with `---`
/// 6. empty or whitespace-only lines
/// 7. everything else as a verbatim paragraph
///
/// Because the bold check precedes the bullet check, `**• item**` is bold.
#[derive(Debug, Clone)]
pub struct BlockParser {
    numbered: Regex,
}

impl BlockParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self {
            numbered: Regex::new(NUMBERED_PATTERN).expect("numbered item pattern is valid"),
        }
    }

    /// Parse the whole text eagerly.
    pub fn parse(&self, text: &str) -> Vec<Block> {
        self.blocks(text).collect()
    }

    /// Lazily classify the lines of `text`.
    ///
    /// Lines are split on `\n` with a trailing `\r` removed, so an empty
    /// input yields a single [`Block::BlankLine`].
    pub fn blocks<'a>(&'a self, text: &'a str) -> Blocks<'a> {
        Blocks {
            parser: self,
            lines: text.split('\n'),
        }
    }

    /// Classify a single line.
    pub fn classify(&self, line: &str) -> Block {
        if let Some(block) = classify_heading(line) {
            return block;
        }

        let trimmed = line.trim();

        if trimmed.len() >= 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
            return Block::Bold {
                text: trimmed.replace("**", ""),
            };
        }

        if let Some(text) = BULLET_MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(*marker))
        {
            return Block::BulletItem {
                text: text.to_string(),
            };
        }

        if let Some(block) = self.classify_numbered(line) {
            return block;
        }

        if trimmed.starts_with("---") {
            return Block::HorizontalRule;
        }

        if trimmed.is_empty() {
            return Block::BlankLine;
        }

        Block::Paragraph {
            text: line.to_string(),
        }
    }

    fn classify_numbered(&self, line: &str) -> Option<Block> {
        let caps = self.numbered.captures(line)?;
        let whole = caps.get(0)?;
        Some(Block::NumberedItem {
            number: caps.get(1)?.as_str().to_string(),
            text: line[whole.end()..].to_string(),
        })
    }
}

impl Default for BlockParser {
    fn default() -> Self {
        Self::new()
    }
}

fn classify_heading(line: &str) -> Option<Block> {
    let (level, text) = if let Some(text) = line.strip_prefix("### ") {
        (HeadingLevel::H3, text)
    } else if let Some(text) = line.strip_prefix("## ") {
        (HeadingLevel::H2, text)
    } else if let Some(text) = line.strip_prefix("# ") {
        (HeadingLevel::H1, text)
    } else {
        return None;
    };

    Some(Block::Heading {
        level,
        text: text.to_string(),
    })
}

/// Lazy iterator over the blocks of a plan.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    parser: &'a BlockParser,
    lines: Split<'a, char>,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let line = self.lines.next()?;
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some(self.parser.classify(line))
    }
}
