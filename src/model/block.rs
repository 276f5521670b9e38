//! Block-level types produced by the parser.

use serde::{Deserialize, Serialize};

/// Heading depth supported by the plan markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// `# ` heading
    H1,
    /// `## ` heading
    H2,
    /// `### ` heading
    H3,
}

impl HeadingLevel {
    /// Numeric level (1-3).
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Level from its numeric form, if it is one of 1-3.
    pub fn from_u8(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingLevel::H1),
            2 => Some(HeadingLevel::H2),
            3 => Some(HeadingLevel::H3),
            _ => None,
        }
    }
}

/// A classified line of plan text.
///
/// Every input line maps to exactly one block; the full plan is an ordered
/// sequence of blocks in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading with its marker stripped
    Heading {
        /// Heading depth
        level: HeadingLevel,
        /// Heading text
        text: String,
    },

    /// A line wrapped in `**`, with every `**` removed
    Bold {
        /// Emphasised text
        text: String,
    },

    /// A `• `, `* ` or `- ` list item
    BulletItem {
        /// Item text without its marker
        text: String,
    },

    /// A `N. ` list item
    NumberedItem {
        /// Digits of the prefix as written
        number: String,
        /// Item text after the prefix
        text: String,
    },

    /// A `---` separator
    HorizontalRule,

    /// An empty or whitespace-only line
    BlankLine,

    /// Any other line, verbatim
    Paragraph {
        /// Line text
        text: String,
    },
}

impl Block {
    /// Create a heading block.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Create a bullet item block.
    pub fn bullet(text: impl Into<String>) -> Self {
        Block::BulletItem { text: text.into() }
    }

    /// Create a numbered item block.
    pub fn numbered(number: impl ToString, text: impl Into<String>) -> Self {
        Block::NumberedItem {
            number: number.to_string(),
            text: text.into(),
        }
    }

    /// Create a bold block.
    pub fn bold(text: impl Into<String>) -> Self {
        Block::Bold { text: text.into() }
    }

    /// The style-relevant kind of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { level, .. } => BlockKind::Heading(*level),
            Block::Bold { .. } => BlockKind::Bold,
            Block::BulletItem { .. } => BlockKind::BulletItem,
            Block::NumberedItem { .. } => BlockKind::NumberedItem,
            Block::HorizontalRule => BlockKind::HorizontalRule,
            Block::BlankLine => BlockKind::BlankLine,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Text content of the block, if it carries any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading { text, .. }
            | Block::Bold { text }
            | Block::BulletItem { text }
            | Block::NumberedItem { text, .. }
            | Block::Paragraph { text } => Some(text),
            Block::HorizontalRule | Block::BlankLine => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this block is a list item (bulleted or numbered).
    pub fn is_list_item(&self) -> bool {
        matches!(self, Block::BulletItem { .. } | Block::NumberedItem { .. })
    }

    /// Check if this block is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::BlankLine)
    }
}

/// Closed set of block kinds used for style lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Heading of the given level
    Heading(HeadingLevel),
    /// Bold line
    Bold,
    /// Bulleted item
    BulletItem,
    /// Numbered item
    NumberedItem,
    /// Separator rule
    HorizontalRule,
    /// Blank line
    BlankLine,
    /// Plain paragraph
    Paragraph,
}

impl BlockKind {
    /// Every kind, in table order.
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Heading(HeadingLevel::H1),
        BlockKind::Heading(HeadingLevel::H2),
        BlockKind::Heading(HeadingLevel::H3),
        BlockKind::Bold,
        BlockKind::BulletItem,
        BlockKind::NumberedItem,
        BlockKind::HorizontalRule,
        BlockKind::Paragraph,
        BlockKind::BlankLine,
    ];

    /// Whether blocks of this kind emit text.
    pub fn has_text(self) -> bool {
        !matches!(self, BlockKind::HorizontalRule | BlockKind::BlankLine)
    }
}
