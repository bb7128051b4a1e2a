//! Minimal PDF engine
//!
//! - `fonts`: the built-in Helvetica faces and their glyph widths
//! - `document`: cursor-based page layout with wrapping and auto page breaks
//! - `writer`: object serialization, cross-reference table and trailer
//!
//! Content streams are left uncompressed, so the literal text of every
//! line can be read straight out of the file.

mod document;
mod fonts;
mod writer;

pub use document::{Align, Document, DocumentInfo, Rgb};
pub use fonts::FontStyle;
pub use writer::{PdfError, PdfResult};
