//! Explicit state container for the plan being shown.
//!
//! A [`PlanSession`] owns the raw plan text, its single parse, the options
//! and the exporter. Screen rendering, pagination, copy and export all read
//! from the same block sequence; nothing here is global.

use std::fmt;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PlanOptions;
use crate::error::{Error, Result};
use crate::export::{ArtifactSink, Exporter, SavedArtifact};
use crate::layout::Paginator;
use crate::model::{Block, Page};
use crate::parser::BlockParser;
use crate::render::{to_html, DisplayNode, PlanStats, ScreenRenderer};
use crate::style::{StyleSheet, Theme};

/// Message shown to the user when an export fails.
pub const EXPORT_FAILED_MESSAGE: &str = "Error generating PDF. Please try again.";

/// Platform clipboard.
pub trait Clipboard {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    /// Last copied text
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// A visible, non-fatal notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Text shown to the user
    pub message: String,
    /// Underlying cause, for logs
    pub detail: String,
}

impl Notice {
    fn export_failed(detail: impl fmt::Display) -> Self {
        Self {
            message: EXPORT_FAILED_MESSAGE.to_string(),
            detail: detail.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of an export request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// The artifact was handed to the sink
    Saved(SavedArtifact),
    /// Another export was in flight; nothing happened
    Busy,
    /// The export failed; show the notice and let the user retry
    Failed(Notice),
}

impl ExportStatus {
    /// Whether the artifact was saved.
    pub fn is_saved(&self) -> bool {
        matches!(self, ExportStatus::Saved(_))
    }
}

#[derive(Debug, Clone)]
struct LoadedPlan {
    text: String,
    blocks: Vec<Block>,
}

/// The current plan plus everything needed to show, copy and export it.
#[derive(Debug)]
pub struct PlanSession {
    options: PlanOptions,
    parser: BlockParser,
    exporter: Exporter,
    plan: Option<LoadedPlan>,
}

impl PlanSession {
    /// Create an empty session; options are validated up front.
    pub fn new(options: PlanOptions) -> Result<Self> {
        options.validate()?;
        let exporter = Exporter::with_prefix(options.filename_prefix.clone());
        Ok(Self {
            options,
            parser: BlockParser::new(),
            exporter,
            plan: None,
        })
    }

    /// Options in use.
    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    /// Switch the screen theme. Export output is unaffected.
    pub fn set_theme(&mut self, theme: Theme) {
        self.options.theme = theme;
    }

    /// Replace the current plan, parsing it once.
    pub fn load(&mut self, text: impl Into<String>) {
        let text = text.into();
        let blocks = self.parser.parse(&text);
        debug!("loaded plan: {} bytes, {} blocks", text.len(), blocks.len());
        self.plan = Some(LoadedPlan { text, blocks });
    }

    /// Discard the current plan.
    pub fn clear(&mut self) {
        self.plan = None;
    }

    /// Whether a plan is loaded.
    pub fn is_loaded(&self) -> bool {
        self.plan.is_some()
    }

    /// Raw plan text as received.
    pub fn plan_text(&self) -> Option<&str> {
        self.plan.as_ref().map(|plan| plan.text.as_str())
    }

    /// Block sequence of the current plan (empty when nothing is loaded).
    pub fn blocks(&self) -> &[Block] {
        self.plan
            .as_ref()
            .map(|plan| plan.blocks.as_slice())
            .unwrap_or_default()
    }

    /// Display nodes for the screen, in the current theme.
    pub fn display_nodes(&self) -> Vec<DisplayNode> {
        ScreenRenderer::new(self.options.theme).render(self.blocks())
    }

    /// HTML fragment for the screen.
    pub fn html(&self) -> String {
        to_html(&self.display_nodes())
    }

    /// Lay the current plan out on pages.
    pub fn pages(&self) -> Result<Vec<Page>> {
        let mut paginator = Paginator::new(self.options.geometry, StyleSheet::print())?;
        paginator.layout_all(self.blocks());
        Ok(paginator.finish())
    }

    /// Statistics for the current plan, including its page count.
    pub fn stats(&self) -> Result<PlanStats> {
        let pages = self.pages()?;
        Ok(PlanStats::from_blocks(self.blocks()).with_pages(&pages))
    }

    /// Copy the raw plan text, verbatim, to `clipboard`.
    pub fn copy_to(&self, clipboard: &mut dyn Clipboard) -> Result<()> {
        let text = self
            .plan_text()
            .ok_or_else(|| Error::Other("no plan loaded".to_string()))?;
        clipboard.set_text(text)
    }

    /// Whether an export is in flight.
    pub fn is_exporting(&self) -> bool {
        self.exporter.is_busy()
    }

    /// Export the current plan through `sink`.
    ///
    /// Failures are turned into a [`Notice`]; they never propagate.
    pub fn export(&self, sink: &mut dyn ArtifactSink, date: NaiveDate) -> ExportStatus {
        if self.plan.is_none() {
            return ExportStatus::Failed(Notice::export_failed("no plan loaded"));
        }

        let result = self
            .pages()
            .and_then(|pages| self.exporter.export(&pages, sink, date));

        match result {
            Ok(Some(saved)) => ExportStatus::Saved(saved),
            Ok(None) => ExportStatus::Busy,
            Err(e) => ExportStatus::Failed(Notice::export_failed(e)),
        }
    }
}

impl Default for PlanSession {
    fn default() -> Self {
        Self {
            options: PlanOptions::default(),
            parser: BlockParser::new(),
            exporter: Exporter::new(),
            plan: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MemorySink;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[test]
    fn test_load_and_clear() {
        let mut session = PlanSession::default();
        assert!(!session.is_loaded());
        assert!(session.blocks().is_empty());

        session.load("# Plan\n- item");
        assert_eq!(session.blocks().len(), 2);
        assert_eq!(session.plan_text(), Some("# Plan\n- item"));

        session.clear();
        assert!(session.plan_text().is_none());
        assert!(session.display_nodes().is_empty());
    }

    #[test]
    fn test_copy_is_verbatim() {
        let mut session = PlanSession::default();
        let text = "**Goal**  \n•  keep  spacing\r\n";
        session.load(text);

        let mut clipboard = MemoryClipboard::default();
        session.copy_to(&mut clipboard).unwrap();
        assert_eq!(clipboard.contents.as_deref(), Some(text));
    }

    #[test]
    fn test_copy_without_plan() {
        let mut clipboard = MemoryClipboard::default();
        assert!(PlanSession::default().copy_to(&mut clipboard).is_err());
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_export_saved() {
        let mut session = PlanSession::default();
        session.load("# Plan");
        let mut sink = MemorySink::new();
        match session.export(&mut sink, date()) {
            ExportStatus::Saved(saved) => assert_eq!(saved.filename, "marketing-plan-2025-01-31.pdf"),
            other => panic!("unexpected status: {:?}", other),
        }
        assert!(!session.is_exporting());
    }

    #[test]
    fn test_export_without_plan_fails_with_notice() {
        let mut sink = MemorySink::new();
        let status = PlanSession::default().export(&mut sink, date());
        match status {
            ExportStatus::Failed(notice) => assert_eq!(notice.to_string(), EXPORT_FAILED_MESSAGE),
            other => panic!("unexpected status: {:?}", other),
        }
        assert!(sink.artifacts().is_empty());
    }

    #[test]
    fn test_theme_only_changes_screen() {
        let mut session = PlanSession::default();
        session.load("Body");
        let light = session.display_nodes();
        let pages_before = session.pages().unwrap();

        session.set_theme(Theme::Dark);
        assert_ne!(session.display_nodes(), light);
        assert_eq!(session.pages().unwrap(), pages_before);
    }

    #[test]
    fn test_stats() {
        let mut session = PlanSession::default();
        session.load("# Plan\n1. First\n2. Second");
        let stats = session.stats().unwrap();
        assert_eq!(stats.list_item_count, 2);
        assert_eq!(stats.page_count, Some(1));
    }
}
