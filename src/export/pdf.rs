//! PDF serialization of laid-out pages.

use std::io::Write;

use chrono::{Datelike, NaiveDate};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use log::debug;
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};

use super::encoding::encode_winansi;
use crate::error::{Error, Result};
use crate::layout::MM_PER_PT;
use crate::model::{Page, PageElement, RuleStroke, StyleSpec, TextRun};

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");

/// Helvetica ascender as a fraction of the font size.
const ASCENT: f32 = 0.718;

/// Stroke width of a printed rule, in points.
const RULE_WIDTH_PT: f32 = 0.57;

/// Document information dictionary entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    /// Document title
    pub title: String,
    /// Producing application
    pub producer: String,
    /// Creation date
    pub creation_date: Option<NaiveDate>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: "Marketing Plan".to_string(),
            producer: format!("plandoc {}", crate::VERSION),
            creation_date: None,
        }
    }
}

/// Serialize pages into a PDF 1.4 file.
///
/// Text uses the standard Helvetica faces in WinAnsiEncoding, so no font
/// program is embedded. Each page gets one FlateDecode content stream.
pub fn write_pdf(pages: &[Page], info: &DocumentInfo) -> Result<Vec<u8>> {
    if pages.is_empty() {
        return Err(Error::Serialize("no pages to write".to_string()));
    }

    let mut pdf = Pdf::new();
    pdf.set_version(1, 4);

    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let page_tree_id = alloc();
    let info_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();
    let page_ids: Vec<(Ref, Ref)> = pages.iter().map(|_| (alloc(), alloc())).collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    for (page, (page_id, content_id)) in pages.iter().zip(&page_ids) {
        {
            let mut pdf_page = pdf.page(*page_id);
            pdf_page
                .media_box(Rect::new(0.0, 0.0, mm_to_pt(page.width), mm_to_pt(page.height)))
                .parent(page_tree_id)
                .contents(*content_id);
            pdf_page
                .resources()
                .fonts()
                .pair(REGULAR_FONT, regular_id)
                .pair(BOLD_FONT, bold_id);
        }

        let raw = page_content(page);
        let compressed = deflate(&raw)?;
        pdf.stream(*content_id, &compressed)
            .filter(Filter::FlateDecode);
    }

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    {
        let mut doc_info = pdf.document_info(info_id);
        doc_info
            .title(TextStr(&info.title))
            .producer(TextStr(&info.producer));
        if let Some(date) = info.creation_date {
            doc_info.creation_date(pdf_date(date));
        }
    }

    let bytes = pdf.finish();
    debug!("serialized {} page(s) into {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

fn page_content(page: &Page) -> Vec<u8> {
    let height = mm_to_pt(page.height);
    let mut content = Content::new();

    for element in &page.elements {
        match element {
            PageElement::Text(run) => draw_text(&mut content, run, height),
            PageElement::Rule(rule) => draw_rule(&mut content, rule, height),
        }
    }

    content.finish().to_vec()
}

fn draw_text(content: &mut Content, run: &TextRun, page_height: f32) {
    let (r, g, b) = run.style.color.to_unit();
    let baseline = mm_to_pt(run.y) + run.style.font_size * ASCENT;

    content.set_fill_rgb(r, g, b);
    content.begin_text();
    content.set_font(font_for(&run.style), run.style.font_size);
    content.next_line(mm_to_pt(run.x), page_height - baseline);
    content.show(Str(&encode_winansi(&run.text)));
    content.end_text();
}

fn draw_rule(content: &mut Content, rule: &RuleStroke, page_height: f32) {
    let (r, g, b) = rule.color.to_unit();
    let y = page_height - mm_to_pt(rule.y);

    content.set_stroke_rgb(r, g, b);
    content.set_line_width(RULE_WIDTH_PT);
    content.move_to(mm_to_pt(rule.x1), y);
    content.line_to(mm_to_pt(rule.x2), y);
    content.stroke();
}

fn font_for(style: &StyleSpec) -> Name<'static> {
    if style.is_bold() {
        BOLD_FONT
    } else {
        REGULAR_FONT
    }
}

fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_PT
}

fn pdf_date(date: NaiveDate) -> Date {
    let year = u16::try_from(date.year()).unwrap_or(0);
    Date::new(year).month(date.month() as u8).day(date.day() as u8)
}

fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
