//! # plandoc
//!
//! Rendering and export engine for plain-text marketing plans.
//!
//! Plan text written in a small markdown subset is classified once into a
//! sequence of [`Block`]s. The same sequence feeds two outputs: styled
//! display nodes for the screen, and fixed-size pages that are serialized
//! to a dated PDF artifact.
//!
//! ## Quick Start
//!
//! ```no_run
//! use plandoc::{DirectorySink, ExportStatus, PlanOptions, PlanSession};
//!
//! fn main() -> plandoc::Result<()> {
//!     let mut session = PlanSession::new(PlanOptions::default())?;
//!     session.load("# Launch Plan\n- Set up analytics\n---\nShip it.");
//!
//!     // Screen output
//!     println!("{}", session.html());
//!
//!     // Export marketing-plan-<date>.pdf into the current directory
//!     let today = chrono::Local::now().date_naive();
//!     let mut sink = DirectorySink::new(".");
//!     if let ExportStatus::Failed(notice) = session.export(&mut sink, today) {
//!         eprintln!("{}", notice);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Supported markup
//!
//! - `#`, `##`, `###` headings
//! - `**whole line**` bold lines
//! - `-`, `*`, `•` bulleted items and `1.` numbered items
//! - `---` horizontal rules
//! - everything else is a paragraph

pub mod config;
pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;
pub mod style;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use config::PlanOptions;
pub use error::{Error, Result};
pub use export::{
    export_filename, ArtifactSink, DirectorySink, Exporter, MemorySink, PdfDocument,
    SavedArtifact,
};
pub use layout::{paginate, Margins, PageGeometry, PageSize, Paginator};
pub use model::{Block, BlockKind, HeadingLevel, Page, Profile, StyleSpec};
pub use parser::{parse_plan, BlockParser};
pub use render::{DisplayNode, JsonFormat, PlanStats, ScreenRenderer};
pub use session::{Clipboard, ExportStatus, MemoryClipboard, Notice, PlanSession};
pub use style::{resolve, StyleSheet, Theme};

use chrono::NaiveDate;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render plan text to display nodes.
///
/// # Example
///
/// ```
/// use plandoc::{render_screen, Theme};
///
/// let nodes = render_screen("# Launch Plan", Theme::Light);
/// assert_eq!(nodes[0].text, "Launch Plan");
/// ```
pub fn render_screen(text: &str, theme: Theme) -> Vec<DisplayNode> {
    ScreenRenderer::new(theme).render(parse_plan(text))
}

/// Render plan text to an HTML fragment.
pub fn render_html(text: &str, theme: Theme) -> String {
    render::to_html(&render_screen(text, theme))
}

/// Lay plan text out on pages.
///
/// Fails only when the geometry in `options` cannot hold content.
pub fn render_pages(text: &str, options: &PlanOptions) -> Result<Vec<Page>> {
    paginate(parse_plan(text), options.geometry)
}

/// Lay out and serialize plan text as a PDF document.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use plandoc::{export_pdf, PlanOptions};
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let doc = export_pdf("# Plan", &PlanOptions::default(), date)?;
/// assert_eq!(doc.filename, "marketing-plan-2024-06-01.pdf");
/// # Ok::<(), plandoc::Error>(())
/// ```
pub fn export_pdf(text: &str, options: &PlanOptions, date: NaiveDate) -> Result<PdfDocument> {
    options.validate()?;
    let pages = render_pages(text, options)?;
    Exporter::with_prefix(options.filename_prefix.clone()).render(&pages, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_screen_one_node_per_line() {
        let nodes = render_screen("# A\n\nB", Theme::Dark);
        assert_eq!(nodes.len(), 3);
    }

    #[test]
    fn test_render_html() {
        let html = render_html("**Key message**", Theme::Light);
        assert!(html.starts_with("<p style=\"font-size:16px;font-weight:600"));
        assert!(html.contains(">Key message</p>"));
    }

    #[test]
    fn test_render_pages_invalid_geometry() {
        let options = PlanOptions::new().with_margins(Margins::all(110.0));
        let result = render_pages("text", &options);
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_export_pdf_uses_prefix() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let options = PlanOptions::new().with_filename_prefix("launch");
        let doc = export_pdf("# Plan", &options, date).unwrap();
        assert_eq!(doc.filename, "launch-2024-06-01.pdf");
        assert!(doc.bytes.starts_with(b"%PDF-1.4"));
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
