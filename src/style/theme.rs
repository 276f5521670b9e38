//! Screen colour themes.

use serde::{Deserialize, Serialize};

use crate::model::{BlockKind, HeadingLevel, Rgb};

const WHITE: Rgb = Rgb(255, 255, 255);
const GRAY_200: Rgb = Rgb(229, 231, 235);
const GRAY_300: Rgb = Rgb(209, 213, 219);
const GRAY_600: Rgb = Rgb(75, 85, 99);
const GRAY_700: Rgb = Rgb(55, 65, 81);
const GRAY_800: Rgb = Rgb(31, 41, 55);
const GRAY_900: Rgb = Rgb(17, 24, 39);

/// Colour scheme of the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Light,
    /// Light text on a dark background
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Colour used for a block kind on screen.
    pub fn color_for(self, kind: BlockKind) -> Rgb {
        match (self, kind) {
            (Theme::Light, BlockKind::Heading(HeadingLevel::H1)) => GRAY_900,
            (Theme::Dark, BlockKind::Heading(HeadingLevel::H1)) => WHITE,
            (Theme::Light, BlockKind::Heading(HeadingLevel::H2) | BlockKind::Bold) => GRAY_800,
            (Theme::Dark, BlockKind::Heading(HeadingLevel::H2) | BlockKind::Bold) => GRAY_200,
            (Theme::Light, BlockKind::Heading(HeadingLevel::H3)) => GRAY_700,
            (Theme::Light, BlockKind::HorizontalRule) => GRAY_300,
            (Theme::Dark, BlockKind::HorizontalRule) => GRAY_700,
            (Theme::Light, _) => GRAY_600,
            (Theme::Dark, _) => GRAY_300,
        }
    }
}
