//! Document model types for plan rendering.
//!
//! This module defines the values that flow through the pipeline: the
//! classified [`Block`] sequence produced once per plan, the resolved
//! [`StyleSpec`] for each block kind, and the positioned [`Page`]s that the
//! paginator hands to the exporter.

mod block;
mod page;
mod style;

pub use block::{Block, BlockKind, HeadingLevel};
pub use page::{Page, PageElement, RuleStroke, TextRun};
pub use style::{FontWeight, Profile, Rgb, StyleSpec};
