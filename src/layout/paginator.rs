//! Block-to-page layout.

use std::borrow::{Borrow, Cow};

use log::{debug, trace};

use super::{wrap_text, HelveticaMetrics, PageGeometry, TextMeasurer};
use crate::error::{Error, Result};
use crate::model::{Block, BlockKind, Page, RuleStroke, StyleSpec, TextRun};
use crate::style::StyleSheet;

const FIT_TOLERANCE: f32 = 1e-4;

/// Whether the current page can take another line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    /// The next line fits above the bottom margin
    Accepting,
    /// The next line would cross the bottom margin
    Exhausted,
}

/// Cursor bookkeeping for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    /// Vertical cursor in millimetres from the top of the page
    pub cursor: f32,

    /// Index of the page being filled (0-based)
    pub page_index: usize,

    top: f32,
    bottom: f32,
}

impl LayoutState {
    fn new(geometry: &PageGeometry) -> Self {
        Self {
            cursor: geometry.margins.top,
            page_index: 0,
            top: geometry.margins.top,
            bottom: geometry.bottom_limit(),
        }
    }

    /// Space left above the bottom margin.
    pub fn remaining(&self) -> f32 {
        (self.bottom - self.cursor).max(0.0)
    }

    /// Page status for a line of the given height.
    pub fn status_for(&self, line_height: f32) -> PageStatus {
        if self.cursor + line_height > self.bottom + FIT_TOLERANCE {
            PageStatus::Exhausted
        } else {
            PageStatus::Accepting
        }
    }

    fn advance(&mut self, amount: f32) {
        self.cursor += amount;
    }

    fn next_page(&mut self) {
        self.page_index += 1;
        self.cursor = self.top;
    }
}

/// Check that every text-bearing kind has room for its widest glyph
/// once its indent is taken from the content width.
pub fn check_text_room<M>(geometry: &PageGeometry, styles: &StyleSheet, measurer: &M) -> Result<()>
where
    M: TextMeasurer + ?Sized,
{
    let content_width = geometry.content_width();
    for kind in BlockKind::ALL.into_iter().filter(|kind| kind.has_text()) {
        let style = styles.resolve(kind);
        let room = content_width - style.indent;
        let glyph = measurer.max_glyph_width(&style);
        if room < glyph {
            return Err(Error::InvalidGeometry(format!(
                "content width {content_width} mm leaves {room} mm for {kind:?} text, narrower than its widest glyph ({glyph} mm)"
            )));
        }
    }
    Ok(())
}

/// Progress of a chunked layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkStatus {
    /// The input may hold more blocks
    Pending,
    /// The input is exhausted
    Complete,
}

/// Lays blocks onto fixed-size pages.
///
/// Every wrapped line is checked against the bottom margin before it is
/// placed, so a block whose lines cross a page boundary is split between
/// pages without re-measuring; lines already placed are never revisited.
/// After a block's lines the cursor advances by its spacing-after.
///
/// Blocks can be fed all at once or in chunks; the resulting pages are the
/// same either way.
pub struct Paginator<M = HelveticaMetrics> {
    geometry: PageGeometry,
    styles: StyleSheet,
    measurer: M,
    state: LayoutState,
    pages: Vec<Page>,
    current: Page,
}

impl Paginator<HelveticaMetrics> {
    /// Create a paginator using the built-in Helvetica metrics.
    pub fn new(geometry: PageGeometry, styles: StyleSheet) -> Result<Self> {
        Self::with_measurer(geometry, styles, HelveticaMetrics)
    }
}

impl<M: TextMeasurer> Paginator<M> {
    /// Create a paginator with a custom text measurer.
    ///
    /// The geometry is validated here so that a bad configuration is
    /// reported before any page is produced.
    pub fn with_measurer(geometry: PageGeometry, styles: StyleSheet, measurer: M) -> Result<Self> {
        geometry.validate(styles.max_line_height())?;
        check_text_room(&geometry, &styles, &measurer)?;

        let (width, height) = geometry.size.dimensions();
        Ok(Self {
            geometry,
            styles,
            measurer,
            state: LayoutState::new(&geometry),
            pages: Vec::new(),
            current: Page::new(1, width, height),
        })
    }

    /// Current cursor state.
    pub fn state(&self) -> LayoutState {
        self.state
    }

    /// Number of pages started so far, including the one being filled.
    pub fn page_count(&self) -> usize {
        self.pages.len() + 1
    }

    /// Lay out every block of `blocks`.
    pub fn layout_all<I>(&mut self, blocks: I)
    where
        I: IntoIterator,
        I::Item: Borrow<Block>,
    {
        for block in blocks {
            self.layout_block(block.borrow());
        }
    }

    /// Lay out at most `max_blocks` blocks from `blocks`.
    ///
    /// Returns [`ChunkStatus::Complete`] once `blocks` has run dry, so a
    /// caller can yield between chunks and resume with the same iterator.
    /// A `max_blocks` of zero is treated as one so every call makes progress.
    pub fn layout_chunk<I>(&mut self, blocks: &mut I, max_blocks: usize) -> ChunkStatus
    where
        I: Iterator,
        I::Item: Borrow<Block>,
    {
        for _ in 0..max_blocks.max(1) {
            match blocks.next() {
                Some(block) => self.layout_block(block.borrow()),
                None => return ChunkStatus::Complete,
            }
        }
        ChunkStatus::Pending
    }

    /// Lay out a single block.
    pub fn layout_block(&mut self, block: &Block) {
        let style = self.styles.resolve(block.kind());

        match block {
            Block::HorizontalRule => self.place_rule(&style),
            Block::BlankLine => self.state.advance(style.space_after),
            _ => {
                self.state.advance(style.space_before);
                let text = print_text(block);
                let x = self.geometry.margins.left + style.indent;
                let width = self.geometry.content_width() - style.indent;

                for line in wrap_text(&text, width, &style, &self.measurer) {
                    self.place_line(line, x, &style);
                }
                self.state.advance(style.space_after);
            }
        }
    }

    /// Finish the pass and return the pages; the last page is always kept.
    pub fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        debug!("layout finished with {} page(s)", self.pages.len());
        self.pages
    }

    fn place_line(&mut self, text: String, x: f32, style: &StyleSpec) {
        if self.state.status_for(style.line_height) == PageStatus::Exhausted {
            self.break_page();
        }
        trace!(
            "page {} y={:.2}: {:?}",
            self.state.page_index + 1,
            self.state.cursor,
            text
        );
        self.current.add_text(TextRun {
            text,
            x,
            y: self.state.cursor,
            style: *style,
        });
        self.state.advance(style.line_height);
    }

    fn place_rule(&mut self, style: &StyleSpec) {
        if self.state.status_for(0.0) == PageStatus::Exhausted {
            self.break_page();
        }
        let left = self.geometry.margins.left;
        self.current.add_rule(RuleStroke {
            x1: left,
            x2: left + self.geometry.content_width(),
            y: self.state.cursor,
            color: style.color,
        });
        self.state.advance(style.space_after);
    }

    fn break_page(&mut self) {
        debug!(
            "page {} exhausted at {:.2} mm; starting page {}",
            self.state.page_index + 1,
            self.state.cursor,
            self.state.page_index + 2
        );
        self.state.next_page();
        let (width, height) = self.geometry.size.dimensions();
        let next = Page::new(self.state.page_index as u32 + 1, width, height);
        let full = std::mem::replace(&mut self.current, next);
        self.pages.push(full);
    }
}

/// Text of a block as it is printed, with list markers restored.
pub fn print_text(block: &Block) -> Cow<'_, str> {
    match block {
        Block::BulletItem { text } => Cow::Owned(format!("• {}", text)),
        Block::NumberedItem { number, text } => Cow::Owned(format!("{}. {}", number, text)),
        other => Cow::Borrowed(other.text().unwrap_or("")),
    }
}

/// Paginate blocks with the default print styles and Helvetica metrics.
pub fn paginate<I>(blocks: I, geometry: PageGeometry) -> Result<Vec<Page>>
where
    I: IntoIterator,
    I::Item: Borrow<Block>,
{
    let mut paginator = Paginator::new(geometry, StyleSheet::print())?;
    paginator.layout_all(blocks);
    Ok(paginator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Margins, MonospaceMetrics, PageSize};
    use crate::model::HeadingLevel;

    fn mono(geometry: PageGeometry) -> Paginator<MonospaceMetrics> {
        Paginator::with_measurer(geometry, StyleSheet::print(), MonospaceMetrics::new(2.0)).unwrap()
    }

    #[test]
    fn test_heading_cursor_advance() {
        let mut p = mono(PageGeometry::a4());
        p.layout_block(&Block::heading(HeadingLevel::H1, "Launch Plan"));
        // one 8 mm line plus 5 mm spacing-after
        assert!((p.state().cursor - (20.0 + 8.0 + 5.0)).abs() < 1e-4);
        let pages = p.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].plain_text(), "Launch Plan");
    }

    #[test]
    fn test_bullet_is_indented_with_marker() {
        let mut p = mono(PageGeometry::a4());
        p.layout_block(&Block::bullet("Set up analytics"));
        let pages = p.finish();
        let run = pages[0].runs().next().unwrap();
        assert_eq!(run.text, "• Set up analytics");
        assert_eq!(run.x, 23.0);
        assert_eq!(run.style.font_size, 10.0);
    }

    #[test]
    fn test_numbered_item_keeps_number() {
        let mut p = mono(PageGeometry::a4());
        p.layout_block(&Block::numbered(4, "Measure"));
        assert_eq!(p.finish()[0].plain_text(), "4. Measure");
    }

    #[test]
    fn test_rule_and_blank_emit_no_text() {
        let mut p = mono(PageGeometry::a4());
        p.layout_block(&Block::HorizontalRule);
        assert!((p.state().cursor - 26.0).abs() < 1e-4);
        p.layout_block(&Block::BlankLine);
        assert!((p.state().cursor - 29.0).abs() < 1e-4);

        let pages = p.finish();
        assert_eq!(pages[0].line_count(), 0);
        let rule = pages[0].rules().next().unwrap();
        assert_eq!(rule.y, 20.0);
        assert_eq!(rule.width(), 170.0);
    }

    #[test]
    fn test_rejects_indent_wider_than_content() {
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 42.0,
                height: 100.0,
            },
            Margins::all(20.0),
        );
        let result = Paginator::new(geometry, StyleSheet::print());
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_rejects_width_below_widest_glyph() {
        // 3.5 mm of content clears the 3 mm list indent but not one glyph.
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 43.5,
                height: 100.0,
            },
            Margins::all(20.0),
        );
        let result = Paginator::new(geometry, StyleSheet::print());
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));

        // 2 mm glyphs: 4.5 mm of content is short of indent plus glyph for lists.
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 44.5,
                height: 100.0,
            },
            Margins::all(20.0),
        );
        let result =
            Paginator::with_measurer(geometry, StyleSheet::print(), MonospaceMetrics::new(2.0));
        assert!(matches!(result, Err(Error::InvalidGeometry(_))));
    }

    #[test]
    fn test_glyph_wide_column_wraps_within_width() {
        // 5 mm of content fits one 2 mm list glyph after the indent.
        let geometry = PageGeometry::new(
            PageSize::Custom {
                width: 45.0,
                height: 100.0,
            },
            Margins::all(20.0),
        );
        let mut p = mono(geometry);
        p.layout_block(&Block::bullet("Wide"));
        let pages = p.finish();
        let runs: Vec<&str> = pages[0].runs().map(|run| run.text.as_str()).collect();
        assert_eq!(runs, vec!["•", "W", "i", "d", "e"]);
    }

    #[test]
    fn test_zero_sized_chunk_still_progresses() {
        let blocks = [Block::paragraph("one"), Block::paragraph("two")];
        let mut p = mono(PageGeometry::a4());
        let mut iter = blocks.iter();
        let mut calls = 0;
        while p.layout_chunk(&mut iter, 0) == ChunkStatus::Pending {
            calls += 1;
            assert!(calls <= blocks.len());
        }
        assert_eq!(p.finish()[0].plain_text(), "one\ntwo");
    }

    #[test]
    fn test_status_for() {
        let p = mono(PageGeometry::a4());
        let state = p.state();
        assert_eq!(state.status_for(4.0), PageStatus::Accepting);
        assert_eq!(state.status_for(257.0), PageStatus::Accepting);
        assert_eq!(state.status_for(257.5), PageStatus::Exhausted);
        assert_eq!(state.remaining(), 257.0);
    }

    #[test]
    fn test_empty_input_keeps_one_page() {
        let pages = paginate(Vec::<Block>::new(), PageGeometry::a4()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }
}
