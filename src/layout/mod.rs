//! Print layout: text measurement, wrapping and pagination.
//!
//! All lengths in this module are millimetres measured from the top-left
//! corner of the page. Font sizes stay in points and are converted with
//! [`MM_PER_PT`] when text is measured.

mod geometry;
mod metrics;
mod paginator;
mod wrap;

pub use geometry::{Margins, PageGeometry, PageSize};
pub use metrics::{HelveticaMetrics, MonospaceMetrics, TextMeasurer, MM_PER_PT};
pub use paginator::{
    check_text_room, paginate, print_text, ChunkStatus, LayoutState, PageStatus, Paginator,
};
pub use wrap::wrap_text;
