//! Page layout: a cursor-driven A4 document with automatic page breaks
//!
//! Positions are in millimetres from the top-left corner of the page and
//! converted to PDF points (bottom-left origin) when content is emitted.
//! Every piece of text passes through [`sanitize::to_latin1`] before it is
//! measured or written.

use super::fonts::FontStyle;
use super::writer::{escape_literal, PdfError, PdfResult, PdfWriter};
use crate::domain::sanitize;
use std::io::Write;
use tracing::debug;

/// Points per millimetre
const K: f64 = 72.0 / 25.4;

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
/// Left, top and right page margin
const MARGIN: f64 = 10.0;
/// Padding between a cell's edge and its text
const CELL_PADDING: f64 = 1.0;
/// Distance from the bottom edge at which a new page starts
const BOTTOM_MARGIN: f64 = 25.0;
const LINE_WIDTH: f64 = 0.2;
/// Default page limit; exceeding it is a render failure
pub const MAX_PAGES: usize = 10_000;

/// An RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    fn components(&self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }
}

/// Horizontal text alignment inside a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// Metadata written to the document information dictionary
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    /// PDF date string, e.g. "D:20250214100500"
    pub creation_date: String,
}

/// A document under construction
pub struct Document {
    pages: Vec<Vec<u8>>,
    x: f64,
    y: f64,
    style: FontStyle,
    size_pt: f64,
    text_color: Rgb,
    draw_color: Rgb,
    max_pages: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_page_limit(MAX_PAGES)
    }

    /// A document that refuses to grow past `max_pages` pages
    pub fn with_page_limit(max_pages: usize) -> Self {
        Document {
            pages: Vec::new(),
            x: MARGIN,
            y: MARGIN,
            style: FontStyle::Regular,
            size_pt: 12.0,
            text_color: Rgb::BLACK,
            draw_color: Rgb::BLACK,
            max_pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Current vertical position in millimetres
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Start a new page and move the cursor to its top-left margin
    pub fn add_page(&mut self) -> PdfResult<()> {
        if self.pages.len() >= self.max_pages {
            return Err(PdfError::PageLimit {
                limit: self.max_pages,
            });
        }
        self.pages.push(Vec::new());
        self.x = MARGIN;
        self.y = MARGIN;
        debug!(page = self.pages.len(), "page added");
        Ok(())
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f64) {
        self.style = style;
        self.size_pt = size_pt;
    }

    pub fn set_text_color(&mut self, color: Rgb) {
        self.text_color = color;
    }

    pub fn set_draw_color(&mut self, color: Rgb) {
        self.draw_color = color;
    }

    /// Move to the left margin and down by `h`
    pub fn ln(&mut self, h: f64) {
        self.x = MARGIN;
        self.y += h;
    }

    /// Draw a straight line in the current draw colour
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> PdfResult<()> {
        let (r, g, b) = self.draw_color.components();
        let op = format!(
            "q {:.3} {:.3} {:.3} RG {:.2} w {:.2} {:.2} m {:.2} {:.2} l S Q\n",
            r,
            g,
            b,
            LINE_WIDTH * K,
            x1 * K,
            (PAGE_HEIGHT - y1) * K,
            x2 * K,
            (PAGE_HEIGHT - y2) * K
        );
        self.emit(op.as_bytes())
    }

    /// Print one line of text in a cell of height `h`, then move to the
    /// start of the next line. A width of 0 extends to the right margin.
    pub fn cell(&mut self, w: f64, h: f64, text: &str, align: Align) -> PdfResult<()> {
        self.cell_encoded(w, h, &sanitize::to_latin1(text), align)
    }

    /// Print a paragraph, wrapping at spaces and explicit line breaks.
    /// Lines that run past the bottom margin continue on a new page.
    pub fn multi_cell(&mut self, w: f64, h: f64, text: &str) -> PdfResult<()> {
        let w = self.resolve_width(w);
        let encoded = sanitize::to_latin1(text);
        let max_width = (w - 2.0 * CELL_PADDING) * 1000.0 / self.font_size();

        for line in wrap_lines(&encoded, self.style, max_width) {
            self.cell_encoded(w, h, line, Align::Left)?;
        }
        Ok(())
    }

    /// Serialize the document, consuming it
    pub fn output(self, info: &DocumentInfo) -> PdfResult<Vec<u8>> {
        let mut writer = PdfWriter::new()?;
        let page_count = self.pages.len().max(1);

        // Fixed object layout: catalog, page tree, three fonts, shared
        // resources, info, then a (page, contents) pair per page.
        let catalog_id = 1;
        let pages_id = 2;
        let resources_id = 3 + FontStyle::ALL.len();
        let info_id = resources_id + 1;
        let first_page_id = info_id + 1;

        writer.object(format!("<< /Type /Catalog /Pages {} 0 R >>", pages_id).as_bytes())?;

        let kids: Vec<String> = (0..page_count)
            .map(|i| format!("{} 0 R", first_page_id + 2 * i))
            .collect();
        writer.object(
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_count
            )
            .as_bytes(),
        )?;

        for style in FontStyle::ALL {
            writer.object(
                format!(
                    "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
                    style.base_font()
                )
                .as_bytes(),
            )?;
        }

        let fonts: Vec<String> = FontStyle::ALL
            .iter()
            .enumerate()
            .map(|(i, style)| format!("/{} {} 0 R", style.resource_name(), 3 + i))
            .collect();
        writer.object(
            format!(
                "<< /ProcSet [/PDF /Text] /Font << {} >> >>",
                fonts.join(" ")
            )
            .as_bytes(),
        )?;

        let mut info_dict = Vec::new();
        info_dict.extend_from_slice(b"<< /Title (");
        info_dict.extend_from_slice(&escape_literal(&sanitize::to_latin1(&info.title)));
        info_dict.extend_from_slice(b") /Producer (");
        info_dict.extend_from_slice(&escape_literal(&sanitize::to_latin1(&info.producer)));
        write!(info_dict, ") /CreationDate ({}) >>", info.creation_date)?;
        writer.object(&info_dict)?;

        let empty = Vec::new();
        for i in 0..page_count {
            let page = format!(
                "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources {} 0 R /Contents {} 0 R >>",
                pages_id,
                PAGE_WIDTH * K,
                PAGE_HEIGHT * K,
                resources_id,
                writer.next_id() + 1
            );
            writer.object(page.as_bytes())?;
            writer.stream(self.pages.get(i).unwrap_or(&empty))?;
        }

        writer.finish(catalog_id, info_id)
    }

    fn font_size(&self) -> f64 {
        self.size_pt / K
    }

    fn resolve_width(&self, w: f64) -> f64 {
        if w == 0.0 {
            PAGE_WIDTH - MARGIN - self.x
        } else {
            w
        }
    }

    fn encoded_width(&self, text: &[u8]) -> f64 {
        f64::from(self.style.text_width(text)) * self.font_size() / 1000.0
    }

    fn page_break_trigger(&self) -> f64 {
        PAGE_HEIGHT - BOTTOM_MARGIN
    }

    fn cell_encoded(&mut self, w: f64, h: f64, text: &[u8], align: Align) -> PdfResult<()> {
        if self.pages.is_empty() || self.y + h > self.page_break_trigger() {
            self.add_page()?;
        }
        let w = self.resolve_width(w);

        if !text.is_empty() {
            let dx = match align {
                Align::Left => CELL_PADDING,
                Align::Center => (w - self.encoded_width(text)) / 2.0,
            };
            let baseline = self.y + 0.5 * h + 0.3 * self.font_size();
            let (r, g, b) = self.text_color.components();

            let mut op = Vec::with_capacity(text.len() + 64);
            write!(
                op,
                "BT /{} {:.2} Tf {:.3} {:.3} {:.3} rg {:.2} {:.2} Td (",
                self.style.resource_name(),
                self.size_pt,
                r,
                g,
                b,
                (self.x + dx) * K,
                (PAGE_HEIGHT - baseline) * K
            )?;
            op.extend_from_slice(&escape_literal(text));
            op.extend_from_slice(b") Tj ET\n");
            self.emit(&op)?;
        }

        self.x = MARGIN;
        self.y += h;
        Ok(())
    }

    fn emit(&mut self, op: &[u8]) -> PdfResult<()> {
        if self.pages.is_empty() {
            self.add_page()?;
        }
        if let Some(page) = self.pages.last_mut() {
            page.extend_from_slice(op);
        }
        Ok(())
    }
}

/// Greedy line wrapping of encoded text.
///
/// Breaks at the last space that fits within `max_width` (in 1/1000 em
/// units scaled to the font size), and always at line feeds. A word wider
/// than a whole line is split between characters. The breaking space is
/// consumed; no other byte is ever dropped.
fn wrap_lines(text: &[u8], style: FontStyle, max_width: f64) -> Vec<&[u8]> {
    let mut end = text.len();
    if end > 0 && text[end - 1] == b'\n' {
        end -= 1;
    }

    let mut lines = Vec::new();
    let mut sep: Option<usize> = None;
    let mut start = 0;
    let mut width = 0.0;
    let mut i = 0;

    while i < end {
        let c = text[i];
        if c == b'\n' {
            lines.push(&text[start..i]);
            i += 1;
            sep = None;
            start = i;
            width = 0.0;
            continue;
        }
        if c == b' ' {
            sep = Some(i);
        }
        width += f64::from(style.glyph_width(c));
        if width > max_width {
            match sep {
                Some(s) => {
                    lines.push(&text[start..s]);
                    i = s + 1;
                }
                None => {
                    if i == start {
                        i += 1;
                    }
                    lines.push(&text[start..i]);
                }
            }
            sep = None;
            start = i;
            width = 0.0;
        } else {
            i += 1;
        }
    }
    lines.push(&text[start..end.max(start)]);
    lines
}
