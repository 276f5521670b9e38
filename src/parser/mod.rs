//! Line classification for plan text.
//!
//! The parser is total: every line becomes exactly one [`Block`], and
//! anything that matches no rule falls through to [`Block::Paragraph`].

mod block_parser;

pub use block_parser::{BlockParser, Blocks};

use crate::model::Block;

/// Parse plan text into its block sequence.
pub fn parse_plan(text: &str) -> Vec<Block> {
    BlockParser::new().parse(text)
}
