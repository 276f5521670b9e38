//! Rendering module for on-screen output.
//!
//! The screen renderer turns a block sequence into styled display nodes;
//! the nodes can then be serialized to an HTML fragment or JSON for the
//! hosting display surface.

mod html;
mod json;
mod screen;
mod stats;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use screen::{DisplayNode, NodeKind, ScreenRenderer};
pub use stats::PlanStats;
