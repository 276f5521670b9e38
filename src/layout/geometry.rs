//! Page size and margins.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Physical page size, portrait, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// ISO A4 (210 x 297 mm)
    #[default]
    A4,
    /// US Letter (215.9 x 279.4 mm)
    Letter,
    /// Arbitrary size
    Custom {
        /// Width in millimetres
        width: f32,
        /// Height in millimetres
        height: f32,
    },
}

impl PageSize {
    /// Page dimensions as (width, height).
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

/// Page margins in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    /// Top margin
    pub top: f32,
    /// Right margin
    pub right: f32,
    /// Bottom margin
    pub bottom: f32,
    /// Left margin
    pub left: f32,
}

impl Margins {
    /// The same margin on every side.
    pub fn all(margin: f32) -> Self {
        Self {
            top: margin,
            right: margin,
            bottom: margin,
            left: margin,
        }
    }

    /// Left plus right.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::all(20.0)
    }
}

/// Page size plus margins.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page size
    #[serde(default)]
    pub size: PageSize,
    /// Margins
    #[serde(default)]
    pub margins: Margins,
}

impl PageGeometry {
    /// Create a geometry from a size and margins.
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// A4 portrait with 20 mm margins.
    pub fn a4() -> Self {
        Self::default()
    }

    /// Page width.
    pub fn page_width(&self) -> f32 {
        self.size.dimensions().0
    }

    /// Page height.
    pub fn page_height(&self) -> f32 {
        self.size.dimensions().1
    }

    /// Width available for text.
    pub fn content_width(&self) -> f32 {
        self.page_width() - self.margins.horizontal()
    }

    /// Height available for text.
    pub fn content_height(&self) -> f32 {
        self.page_height() - self.margins.vertical()
    }

    /// Lowest y a line may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height() - self.margins.bottom
    }

    /// Reject geometry that cannot hold a line of height `max_line_height`.
    pub fn validate(&self, max_line_height: f32) -> Result<()> {
        let (width, height) = self.size.dimensions();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "page size {width} x {height} mm is not positive"
            )));
        }

        let margins = [
            self.margins.top,
            self.margins.right,
            self.margins.bottom,
            self.margins.left,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(Error::InvalidGeometry("margins must be non-negative".into()));
        }

        if self.content_width() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "content width {} mm is not positive",
                self.content_width()
            )));
        }

        if self.content_height() <= 0.0 {
            return Err(Error::InvalidGeometry(format!(
                "content height {} mm is not positive",
                self.content_height()
            )));
        }

        if self.content_height() < max_line_height {
            return Err(Error::InvalidGeometry(format!(
                "content height {} mm cannot hold a {} mm line",
                self.content_height(),
                max_line_height
            )));
        }

        Ok(())
    }
}
