//! Page-level types.

use super::{Rgb, StyleSpec};
use serde::{Deserialize, Serialize};

/// A single laid-out page.
///
/// Coordinates are millimetres measured from the top-left corner of the
/// page; `y` of a text run is the top of its line box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in millimetres
    pub width: f32,

    /// Page height in millimetres
    pub height: f32,

    /// Positioned elements in placement order
    pub elements: Vec<PageElement>,
}

impl Page {
    /// Create a new empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 210.0, 297.0)
    }

    /// Add a text run to the page.
    pub fn add_text(&mut self, run: TextRun) {
        self.elements.push(PageElement::Text(run));
    }

    /// Add a rule stroke to the page.
    pub fn add_rule(&mut self, rule: RuleStroke) {
        self.elements.push(PageElement::Rule(rule));
    }

    /// Iterate over the text runs on the page.
    pub fn runs(&self) -> impl Iterator<Item = &TextRun> {
        self.elements.iter().filter_map(|e| match e {
            PageElement::Text(run) => Some(run),
            PageElement::Rule(_) => None,
        })
    }

    /// Iterate over the rule strokes on the page.
    pub fn rules(&self) -> impl Iterator<Item = &RuleStroke> {
        self.elements.iter().filter_map(|e| match e {
            PageElement::Rule(rule) => Some(rule),
            PageElement::Text(_) => None,
        })
    }

    /// Get the text of every run, one line per run.
    pub fn plain_text(&self) -> String {
        self.runs()
            .map(|run| run.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Lowest vertical extent reached by any element (0.0 when empty).
    pub fn content_bottom(&self) -> f32 {
        self.elements
            .iter()
            .map(|e| match e {
                PageElement::Text(run) => run.bottom(),
                PageElement::Rule(rule) => rule.y,
            })
            .fold(0.0, f32::max)
    }

    /// Check if the page is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of text runs on the page.
    pub fn line_count(&self) -> usize {
        self.runs().count()
    }
}

/// Something drawn on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageElement {
    /// One wrapped line of text
    Text(TextRun),
    /// A horizontal rule
    Rule(RuleStroke),
}

/// One wrapped line placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Line text
    pub text: String,

    /// Left edge in millimetres
    pub x: f32,

    /// Top of the line box in millimetres
    pub y: f32,

    /// Style the line was laid out with
    pub style: StyleSpec,
}

impl TextRun {
    /// Bottom of the line box.
    pub fn bottom(&self) -> f32 {
        self.y + self.style.line_height
    }
}

/// A horizontal stroke across the content width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleStroke {
    /// Start x in millimetres
    pub x1: f32,

    /// End x in millimetres
    pub x2: f32,

    /// Vertical position in millimetres
    pub y: f32,

    /// Stroke colour
    pub color: Rgb,
}

impl RuleStroke {
    /// Stroke length.
    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }
}
