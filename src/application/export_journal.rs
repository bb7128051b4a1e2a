//! Export journal use case
//!
//! [`render`] is the document exporter: a pure function of the two entries
//! and a timestamp. [`ExportService`] wraps it with the file handling the
//! command line needs.

use crate::domain::export::{ExportRequest, CLOSING_LINE, SUBTITLE, TITLE};
use crate::domain::JournalEntry;
use crate::error::{LettersError, Result};
use crate::infrastructure::pdf::{Align, Document, DocumentInfo, FontStyle, PdfError, Rgb};
use crate::infrastructure::{Config, ViewerSession};
use chrono::NaiveDateTime;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const MOSS: Rgb = Rgb(107, 143, 78);
const TERRACOTTA: Rgb = Rgb(196, 137, 110);
const CLAY: Rgb = Rgb(160, 120, 100);
const MUTED_GRAY: Rgb = Rgb(130, 130, 130);
const CAPTION_GRAY: Rgb = Rgb(150, 150, 150);
const INK: Rgb = Rgb(50, 50, 50);

const DIVIDER_START: f64 = 30.0;
const DIVIDER_END: f64 = 180.0;

/// Render both entries into PDF bytes
pub fn export(imprint: &str, letter: &str, generated_at: NaiveDateTime) -> Result<Vec<u8>> {
    render(&ExportRequest::new(imprint, letter, generated_at))
}

/// Render an export request into PDF bytes.
///
/// Blank entries are left out. A divider separates the two sections only
/// when both are present. The title block and closing line are always there.
pub fn render(request: &ExportRequest) -> Result<Vec<u8>> {
    render_into(Document::new(), request)
}

fn render_into(mut doc: Document, request: &ExportRequest) -> Result<Vec<u8>> {
    let imprint = request.imprint.present();
    let letter = request.letter.present();

    lay_out(&mut doc, request, imprint, letter).map_err(render_failure)?;
    let pages = doc.page_count();

    let info = DocumentInfo {
        title: TITLE.to_string(),
        producer: format!("letters {}", env!("CARGO_PKG_VERSION")),
        creation_date: request.generated_at.format("D:%Y%m%d%H%M%S").to_string(),
    };
    let bytes = doc.output(&info).map_err(render_failure)?;

    info!(
        pages,
        bytes = bytes.len(),
        imprint = imprint.is_some(),
        letter = letter.is_some(),
        "journal rendered"
    );
    Ok(bytes)
}

fn render_failure(err: PdfError) -> LettersError {
    LettersError::RenderFailure(err.to_string())
}

fn lay_out(
    doc: &mut Document,
    request: &ExportRequest,
    imprint: Option<&str>,
    letter: Option<&str>,
) -> std::result::Result<(), PdfError> {
    doc.add_page()?;

    // Title block
    doc.set_font(FontStyle::Bold, 24.0);
    doc.cell(0.0, 15.0, TITLE, Align::Center)?;
    doc.set_font(FontStyle::Regular, 11.0);
    doc.set_text_color(CLAY);
    doc.cell(0.0, 8.0, SUBTITLE, Align::Center)?;
    doc.set_text_color(MUTED_GRAY);
    doc.cell(0.0, 8.0, &request.written_on(), Align::Center)?;
    doc.ln(12.0);

    divider(doc)?;
    doc.ln(10.0);

    if let Some(body) = imprint {
        section(doc, &request.imprint, body)?;
    }

    if imprint.is_some() && letter.is_some() {
        divider(doc)?;
        doc.ln(10.0);
    }

    if let Some(body) = letter {
        section(doc, &request.letter, body)?;
    }

    // Closing
    doc.ln(5.0);
    divider(doc)?;
    doc.ln(8.0);
    doc.set_font(FontStyle::Italic, 10.0);
    doc.set_text_color(MOSS);
    doc.cell(0.0, 8.0, CLOSING_LINE, Align::Center)?;

    Ok(())
}

fn section(
    doc: &mut Document,
    entry: &JournalEntry,
    body: &str,
) -> std::result::Result<(), PdfError> {
    doc.set_text_color(TERRACOTTA);
    doc.set_font(FontStyle::Bold, 14.0);
    doc.cell(0.0, 10.0, entry.prompt.heading(), Align::Left)?;
    doc.set_font(FontStyle::Italic, 9.0);
    doc.set_text_color(CAPTION_GRAY);
    doc.cell(0.0, 6.0, entry.prompt.subheading(), Align::Left)?;
    doc.ln(4.0);
    doc.set_text_color(INK);
    doc.set_font(FontStyle::Regular, 11.0);
    doc.multi_cell(0.0, 6.0, body)?;
    doc.ln(10.0);
    Ok(())
}

fn divider(doc: &mut Document) -> std::result::Result<(), PdfError> {
    doc.set_draw_color(MOSS);
    let y = doc.y();
    doc.line(DIVIDER_START, y, DIVIDER_END, y)
}

/// Options for exporting to a file
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub imprint: String,
    pub letter: String,
    /// Output file (None = <output_dir>/<suggested file name>)
    pub output: Option<PathBuf>,
    /// Open the written file in the configured viewer
    pub open: bool,
}

/// Service for exporting journal entries to a PDF file
pub struct ExportService {
    config: Config,
    root: PathBuf,
}

impl ExportService {
    /// Create a new export service; relative paths resolve against `root`
    pub fn new(config: Config, root: PathBuf) -> Self {
        ExportService { config, root }
    }

    /// Render and write the journal, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both entries are blank
    /// - Rendering fails
    /// - The file cannot be written, or the viewer cannot be launched
    pub fn execute(&self, options: ExportOptions, now: NaiveDateTime) -> Result<PathBuf> {
        // 1. Only export when something was written
        let request = ExportRequest::new(&options.imprint, &options.letter, now);
        if !request.has_content() {
            return Err(LettersError::NothingToExport);
        }

        // 2. Render before touching the filesystem
        let bytes = render(&request)?;

        // 3. Determine output path
        let path = match options.output {
            Some(path) if path.is_absolute() => path,
            Some(path) => self.root.join(path),
            None => self
                .config
                .resolve_output_dir(&self.root)
                .join(request.suggested_filename()),
        };

        // 4. Write file
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, &bytes)?;
        info!(path = %path.display(), "journal exported");

        // 5. Open in viewer when requested
        if options.open {
            ViewerSession::new(self.config.viewer.clone()).open(&path)?;
        }

        Ok(path)
    }
}
