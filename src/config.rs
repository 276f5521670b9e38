//! Plan rendering options and configuration loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::export::DEFAULT_PREFIX;
use crate::layout::{check_text_room, HelveticaMetrics, Margins, PageGeometry, PageSize};
use crate::style::{StyleSheet, Theme};

/// Options shared by screen rendering and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanOptions {
    /// Page size and margins for export
    pub geometry: PageGeometry,

    /// Screen colour theme
    pub theme: Theme,

    /// Prefix of the exported file name
    pub filename_prefix: String,
}

impl PlanOptions {
    /// Create options with defaults (A4, 20 mm margins, light theme).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the page size, keeping the margins.
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.geometry.size = size;
        self
    }

    /// Set the page margins, keeping the size.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.geometry.margins = margins;
        self
    }

    /// Set the screen theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the export file name prefix.
    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    /// Check that the options can be used for layout and export.
    pub fn validate(&self) -> Result<()> {
        if self.filename_prefix.trim().is_empty() || self.filename_prefix.contains(['/', '\\']) {
            return Err(Error::Config(format!(
                "invalid filename prefix: {:?}",
                self.filename_prefix
            )));
        }
        let styles = StyleSheet::print();
        self.geometry.validate(styles.max_line_height())?;
        check_text_room(&self.geometry, &styles, &HelveticaMetrics)
    }

    /// Parse options from a JSON string.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    /// Serialize options to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::a4(),
            theme: Theme::Light,
            filename_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PlanOptions::default();
        assert_eq!(options.geometry.size, PageSize::A4);
        assert_eq!(options.geometry.margins, Margins::all(20.0));
        assert_eq!(options.theme, Theme::Light);
        assert_eq!(options.filename_prefix, "marketing-plan");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let options = PlanOptions::new()
            .with_page_size(PageSize::Letter)
            .with_margins(Margins::all(15.0))
            .with_theme(Theme::Dark)
            .with_filename_prefix("q3-plan");
        assert_eq!(options.geometry.size, PageSize::Letter);
        assert_eq!(options.geometry.margins.left, 15.0);
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.filename_prefix, "q3-plan");
    }

    #[test]
    fn test_from_json_partial() {
        let options = PlanOptions::from_json_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(options.theme, Theme::Dark);
        assert_eq!(options.geometry, PageGeometry::a4());
    }

    #[test]
    fn test_from_json_custom_size() {
        let json = r#"{
            "geometry": {
                "size": {"custom": {"width": 148.0, "height": 210.0}},
                "margins": {"top": 10.0, "right": 10.0, "bottom": 10.0, "left": 10.0}
            }
        }"#;
        let options = PlanOptions::from_json_str(json).unwrap();
        assert_eq!(options.geometry.content_width(), 128.0);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = PlanOptions::from_json_str(r#"{"colour": "red"}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_json_roundtrip() {
        let options = PlanOptions::new().with_theme(Theme::Dark);
        let parsed = PlanOptions::from_json_str(&options.to_json().unwrap()).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_validate() {
        assert!(PlanOptions::new().with_filename_prefix("").validate().is_err());
        assert!(PlanOptions::new().with_filename_prefix("a/b").validate().is_err());
        let degenerate = PlanOptions::new().with_margins(Margins::all(150.0));
        assert!(matches!(degenerate.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_validate_rejects_sliver_of_width() {
        // 3.5 mm of content: wider than the list indent, too narrow for a glyph.
        let narrow = PlanOptions::new().with_page_size(PageSize::Custom {
            width: 43.5,
            height: 297.0,
        });
        assert!(matches!(narrow.validate(), Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = PlanOptions::from_file("/nonexistent/plandoc.json");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
