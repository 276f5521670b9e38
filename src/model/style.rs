//! Resolved visual attributes for blocks.

use serde::{Deserialize, Serialize};

/// Named style table a block is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Interactive on-screen display (CSS pixels)
    #[default]
    Screen,
    /// Paginated export (millimetres, font sizes in points)
    Print,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Regular text
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Semibold (600)
    Semibold,
    /// Bold (700)
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
        }
    }

    /// Whether a two-face font family (regular/bold) should use the bold face.
    pub fn is_bold(self) -> bool {
        matches!(self, FontWeight::Semibold | FontWeight::Bold)
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Hex form, e.g. `#1f2937`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Components scaled to 0.0-1.0.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        )
    }
}

/// Concrete style for one block kind under one profile.
///
/// Lengths are in the profile's unit: millimetres for print, CSS pixels for
/// screen. `font_size` is in points for print and pixels for screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleSpec {
    /// Font size
    pub font_size: f32,

    /// Font weight
    pub weight: FontWeight,

    /// Left indent from the content edge
    pub indent: f32,

    /// Height of one wrapped line
    pub line_height: f32,

    /// Vertical space before the block
    pub space_before: f32,

    /// Vertical space after the block
    pub space_after: f32,

    /// Text or stroke colour
    pub color: Rgb,
}

impl StyleSpec {
    /// Style with a given size and weight and no spacing.
    pub fn new(font_size: f32, weight: FontWeight) -> Self {
        Self {
            font_size,
            weight,
            indent: 0.0,
            line_height: 0.0,
            space_before: 0.0,
            space_after: 0.0,
            color: Rgb::BLACK,
        }
    }

    /// Set the line height.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the left indent.
    pub fn with_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// Set spacing before and after.
    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    /// Set the colour.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    /// Whether the bold face applies.
    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self::new(10.0, FontWeight::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(31, 41, 55).to_hex(), "#1f2937");
        assert_eq!(Rgb::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_font_weight_bold_face() {
        assert!(!FontWeight::Normal.is_bold());
        assert!(!FontWeight::Medium.is_bold());
        assert!(FontWeight::Semibold.is_bold());
        assert_eq!(FontWeight::Bold.css_weight(), 700);
    }

    #[test]
    fn test_style_builder() {
        let style = StyleSpec::new(18.0, FontWeight::Bold)
            .with_line_height(8.0)
            .with_spacing(0.0, 5.0)
            .with_indent(3.0);
        assert_eq!(style.line_height, 8.0);
        assert_eq!(style.space_after, 5.0);
        assert_eq!(style.indent, 3.0);
        assert!(style.is_bold());
    }
}
