//! On-screen rendering of a block sequence.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::model::{Block, HeadingLevel, StyleSpec};
use crate::style::{StyleSheet, Theme};

/// Structural role of a display node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Heading
    Heading {
        /// Heading depth
        level: HeadingLevel,
    },
    /// Emphasised line
    Strong,
    /// List item
    ListItem {
        /// Item number for numbered items, as written
        number: Option<String>,
    },
    /// Separator
    Rule,
    /// Empty line
    LineBreak,
    /// Plain paragraph
    Paragraph,
}

/// One styled, unpositioned element of the on-screen rendering.
///
/// Wrapping and vertical placement are left to the display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayNode {
    /// Structural role
    pub kind: NodeKind,
    /// Text as parsed (empty for rules and line breaks)
    pub text: String,
    /// Resolved screen style
    pub style: StyleSpec,
}

/// Re-styles blocks for interactive display.
///
/// The renderer never re-parses: it consumes the same block sequence the
/// paginator uses and yields exactly one node per block.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRenderer {
    styles: StyleSheet,
}

impl ScreenRenderer {
    /// Create a renderer for the given theme.
    pub fn new(theme: Theme) -> Self {
        Self::with_styles(StyleSheet::screen(theme))
    }

    /// Create a renderer with an explicit style table.
    pub fn with_styles(styles: StyleSheet) -> Self {
        Self { styles }
    }

    /// Style table in use.
    pub fn styles(&self) -> &StyleSheet {
        &self.styles
    }

    /// Render a single block.
    pub fn render_block(&self, block: &Block) -> DisplayNode {
        let kind = match block {
            Block::Heading { level, .. } => NodeKind::Heading { level: *level },
            Block::Bold { .. } => NodeKind::Strong,
            Block::BulletItem { .. } => NodeKind::ListItem { number: None },
            Block::NumberedItem { number, .. } => NodeKind::ListItem {
                number: Some(number.clone()),
            },
            Block::HorizontalRule => NodeKind::Rule,
            Block::BlankLine => NodeKind::LineBreak,
            Block::Paragraph { .. } => NodeKind::Paragraph,
        };

        DisplayNode {
            kind,
            text: block.text().unwrap_or_default().to_string(),
            style: self.styles.resolve(block.kind()),
        }
    }

    /// Render a block sequence eagerly.
    pub fn render<I>(&self, blocks: I) -> Vec<DisplayNode>
    where
        I: IntoIterator,
        I::Item: Borrow<Block>,
    {
        self.nodes(blocks).collect()
    }

    /// Lazily render a block sequence.
    pub fn nodes<'a, I>(&'a self, blocks: I) -> impl Iterator<Item = DisplayNode> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: Borrow<Block>,
    {
        blocks
            .into_iter()
            .map(move |block| self.render_block(block.borrow()))
    }
}

impl Default for ScreenRenderer {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontWeight;

    #[test]
    fn test_one_node_per_block() {
        let blocks = vec![
            Block::heading(HeadingLevel::H1, "Launch Plan"),
            Block::BlankLine,
            Block::bullet("Set up analytics"),
            Block::numbered(2, "Ship"),
            Block::HorizontalRule,
            Block::paragraph("Done."),
        ];
        let nodes = ScreenRenderer::default().render(&blocks);
        assert_eq!(nodes.len(), blocks.len());
        assert_eq!(nodes[0].kind, NodeKind::Heading { level: HeadingLevel::H1 });
        assert_eq!(nodes[0].text, "Launch Plan");
        assert_eq!(nodes[1].kind, NodeKind::LineBreak);
        assert_eq!(nodes[3].kind, NodeKind::ListItem { number: Some("2".to_string()) });
        assert_eq!(nodes[4].text, "");
    }

    #[test]
    fn test_heading_uses_largest_screen_style() {
        let renderer = ScreenRenderer::default();
        let h1 = renderer.render_block(&Block::heading(HeadingLevel::H1, "A"));
        let p = renderer.render_block(&Block::paragraph("b"));
        assert!(h1.style.font_size > p.style.font_size);
        assert_eq!(h1.style.weight, FontWeight::Bold);
    }

    #[test]
    fn test_bullet_indented_on_screen() {
        let node = ScreenRenderer::default().render_block(&Block::bullet("Set up analytics"));
        assert!(node.style.indent > 0.0);
        assert_eq!(node.text, "Set up analytics");
    }

    #[test]
    fn test_dark_theme_colors() {
        let light = ScreenRenderer::new(Theme::Light).render_block(&Block::paragraph("x"));
        let dark = ScreenRenderer::new(Theme::Dark).render_block(&Block::paragraph("x"));
        assert_ne!(light.style.color, dark.style.color);
    }
}
