//! Document export.
//!
//! The [`Exporter`] serializes laid-out pages into a PDF artifact and hands
//! it to an [`ArtifactSink`] under a dated file name. It carries a single
//! busy flag: a request made while an export is in flight is ignored, and
//! the flag is released on every exit path.

mod encoding;
mod pdf;
mod sink;

pub use encoding::{encode_winansi, is_winansi, REPLACEMENT};
pub use pdf::{write_pdf, DocumentInfo};
pub use sink::{ArtifactSink, DirectorySink, MemorySink, SavedArtifact};

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::NaiveDate;
use log::{error, info, warn};

use crate::error::Result;
use crate::model::Page;

/// Default file name prefix.
pub const DEFAULT_PREFIX: &str = "marketing-plan";

/// Build the artifact name `<prefix>-<YYYY-MM-DD>.pdf`.
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", prefix, date.format("%Y-%m-%d"))
}

/// A serialized document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfDocument {
    /// Artifact file name
    pub filename: String,
    /// PDF bytes
    pub bytes: Vec<u8>,
    /// Number of pages written
    pub page_count: usize,
}

/// Serializes pages and saves them through a sink, one export at a time.
#[derive(Debug)]
pub struct Exporter {
    prefix: String,
    busy: AtomicBool,
}

/// Holds the busy flag for the duration of one export.
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Exporter {
    /// Create an exporter using the default file name prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create an exporter with a custom file name prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            busy: AtomicBool::new(false),
        }
    }

    /// File name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether an export is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Artifact name for an export made on `date`.
    pub fn filename_for(&self, date: NaiveDate) -> String {
        export_filename(&self.prefix, date)
    }

    /// Serialize pages without saving them.
    pub fn render(&self, pages: &[Page], date: NaiveDate) -> Result<PdfDocument> {
        let info = DocumentInfo {
            creation_date: Some(date),
            ..DocumentInfo::default()
        };
        let bytes = write_pdf(pages, &info)?;
        Ok(PdfDocument {
            filename: self.filename_for(date),
            bytes,
            page_count: pages.len(),
        })
    }

    /// Serialize pages and save them through `sink`.
    ///
    /// Returns `Ok(None)` without touching the sink when another export is
    /// already in flight. The sink is called at most once.
    pub fn export<S>(&self, pages: &[Page], sink: &mut S, date: NaiveDate) -> Result<Option<SavedArtifact>>
    where
        S: ArtifactSink + ?Sized,
    {
        let Some(_guard) = self.try_begin() else {
            warn!("export already in progress; request ignored");
            return Ok(None);
        };

        let result = self
            .render(pages, date)
            .and_then(|document| sink.save(&document.filename, &document.bytes));

        match result {
            Ok(saved) => {
                info!("exported {} page(s) to {} ({} bytes)", pages.len(), saved.filename, saved.size);
                Ok(Some(saved))
            }
            Err(e) => {
                error!("export failed: {}", e);
                Err(e)
            }
        }
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard { flag: &self.busy })
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
