//! Style resolution for block kinds.
//!
//! Two profiles are supported. [`Profile::Print`] is measured in
//! millimetres with point font sizes and drives the paginator;
//! [`Profile::Screen`] is measured in CSS pixels and drives the screen
//! renderer. Both keep the same ordering of sizes and spacing so the two
//! outputs stay visually analogous.

mod theme;

pub use theme::Theme;

use serde::{Deserialize, Serialize};

use crate::model::{BlockKind, FontWeight, HeadingLevel, Profile, Rgb, StyleSpec};

/// Grey used for printed rules.
pub const PRINT_RULE_COLOR: Rgb = Rgb(200, 200, 200);

/// Resolve the style of a block kind under a profile.
///
/// The screen profile uses the light theme; use
/// [`StyleSheet::screen`] for a themed table.
pub fn resolve(kind: BlockKind, profile: Profile) -> StyleSpec {
    StyleSheet::for_profile(profile).resolve(kind)
}

/// A complete style table for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Profile the table belongs to
    pub profile: Profile,
    /// `#` heading
    pub heading1: StyleSpec,
    /// `##` heading
    pub heading2: StyleSpec,
    /// `###` heading
    pub heading3: StyleSpec,
    /// Bold line
    pub bold: StyleSpec,
    /// Bulleted and numbered items
    pub list_item: StyleSpec,
    /// Horizontal rule (colour and gap; no text)
    pub rule: StyleSpec,
    /// Plain paragraph
    pub paragraph: StyleSpec,
    /// Blank line (gap only)
    pub blank: StyleSpec,
}

impl StyleSheet {
    /// Default table for a profile.
    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Print => Self::print(),
            Profile::Screen => Self::screen(Theme::default()),
        }
    }

    /// Print table: millimetres, point font sizes, black text.
    pub fn print() -> Self {
        let body = StyleSpec::new(10.0, FontWeight::Normal).with_line_height(4.0);
        Self {
            profile: Profile::Print,
            heading1: StyleSpec::new(18.0, FontWeight::Bold)
                .with_line_height(8.0)
                .with_spacing(0.0, 5.0),
            heading2: StyleSpec::new(14.0, FontWeight::Bold)
                .with_line_height(6.0)
                .with_spacing(0.0, 4.0),
            heading3: StyleSpec::new(12.0, FontWeight::Bold)
                .with_line_height(5.0)
                .with_spacing(0.0, 3.0),
            bold: StyleSpec::new(10.0, FontWeight::Bold)
                .with_line_height(4.0)
                .with_spacing(0.0, 2.0),
            list_item: body.with_indent(3.0).with_spacing(0.0, 1.0),
            rule: StyleSpec::new(0.0, FontWeight::Normal)
                .with_spacing(0.0, 6.0)
                .with_color(PRINT_RULE_COLOR),
            paragraph: body.with_spacing(0.0, 2.0),
            blank: StyleSpec::new(0.0, FontWeight::Normal).with_spacing(0.0, 3.0),
        }
    }

    /// Screen table: CSS pixels, colours from `theme`.
    pub fn screen(theme: Theme) -> Self {
        let color = |kind| theme.color_for(kind);
        Self {
            profile: Profile::Screen,
            heading1: StyleSpec::new(24.0, FontWeight::Bold)
                .with_line_height(32.0)
                .with_spacing(24.0, 16.0)
                .with_color(color(BlockKind::Heading(HeadingLevel::H1))),
            heading2: StyleSpec::new(20.0, FontWeight::Semibold)
                .with_line_height(28.0)
                .with_spacing(20.0, 12.0)
                .with_color(color(BlockKind::Heading(HeadingLevel::H2))),
            heading3: StyleSpec::new(18.0, FontWeight::Medium)
                .with_line_height(28.0)
                .with_spacing(16.0, 8.0)
                .with_color(color(BlockKind::Heading(HeadingLevel::H3))),
            bold: StyleSpec::new(16.0, FontWeight::Semibold)
                .with_line_height(24.0)
                .with_spacing(0.0, 8.0)
                .with_color(color(BlockKind::Bold)),
            list_item: StyleSpec::new(16.0, FontWeight::Normal)
                .with_line_height(24.0)
                .with_indent(16.0)
                .with_spacing(0.0, 4.0)
                .with_color(color(BlockKind::BulletItem)),
            rule: StyleSpec::new(0.0, FontWeight::Normal)
                .with_spacing(24.0, 24.0)
                .with_color(color(BlockKind::HorizontalRule)),
            paragraph: StyleSpec::new(16.0, FontWeight::Normal)
                .with_line_height(26.0)
                .with_spacing(0.0, 8.0)
                .with_color(color(BlockKind::Paragraph)),
            blank: StyleSpec::new(0.0, FontWeight::Normal).with_spacing(0.0, 16.0),
        }
    }

    /// Style for a block kind.
    pub fn resolve(&self, kind: BlockKind) -> StyleSpec {
        match kind {
            BlockKind::Heading(HeadingLevel::H1) => self.heading1,
            BlockKind::Heading(HeadingLevel::H2) => self.heading2,
            BlockKind::Heading(HeadingLevel::H3) => self.heading3,
            BlockKind::Bold => self.bold,
            BlockKind::BulletItem | BlockKind::NumberedItem => self.list_item,
            BlockKind::HorizontalRule => self.rule,
            BlockKind::Paragraph => self.paragraph,
            BlockKind::BlankLine => self.blank,
        }
    }

    /// Tallest line height of any text-bearing kind.
    pub fn max_line_height(&self) -> f32 {
        BlockKind::ALL
            .iter()
            .filter(|kind| kind.has_text())
            .map(|kind| self.resolve(*kind).line_height)
            .fold(0.0, f32::max)
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::print()
    }
}
