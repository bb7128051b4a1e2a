//! Low-level PDF file serialization: objects, streams, xref and trailer

use std::io::Write;
use thiserror::Error;

/// Errors raised by the PDF engine
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("document exceeds the {limit}-page limit")]
    PageLimit { limit: usize },

    #[error("failed to write PDF data: {0}")]
    Io(#[from] std::io::Error),
}

pub type PdfResult<T> = std::result::Result<T, PdfError>;

/// Escape encoded text for a PDF literal string
pub fn escape_literal(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() + 2);
    for &b in text {
        match b {
            b'\\' | b'(' | b')' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\r' => out.extend_from_slice(b"\\r"),
            _ => out.push(b),
        }
    }
    out
}

/// Sequential object writer.
///
/// Objects must be written in ascending number order starting at 1, so
/// the byte offset of object `n` is `offsets[n - 1]`.
pub struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    pub fn new() -> PdfResult<Self> {
        let mut buf = Vec::new();
        buf.write_all(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n")?;
        Ok(PdfWriter {
            buf,
            offsets: Vec::new(),
        })
    }

    /// Number the next object will receive
    pub fn next_id(&self) -> usize {
        self.offsets.len() + 1
    }

    /// Write a dictionary (or any direct) object and return its number
    pub fn object(&mut self, body: &[u8]) -> PdfResult<usize> {
        let id = self.begin()?;
        self.buf.write_all(body)?;
        self.buf.write_all(b"\nendobj\n")?;
        Ok(id)
    }

    /// Write a stream object with an uncompressed payload
    pub fn stream(&mut self, data: &[u8]) -> PdfResult<usize> {
        let id = self.begin()?;
        write!(self.buf, "<< /Length {} >>\nstream\n", data.len())?;
        self.buf.write_all(data)?;
        self.buf.write_all(b"\nendstream\nendobj\n")?;
        Ok(id)
    }

    /// Write the cross-reference table and trailer, consuming the writer
    pub fn finish(mut self, root: usize, info: usize) -> PdfResult<Vec<u8>> {
        let xref_offset = self.buf.len();
        write!(self.buf, "xref\n0 {}\n", self.offsets.len() + 1)?;
        self.buf.write_all(b"0000000000 65535 f \n")?;
        for offset in &self.offsets {
            write!(self.buf, "{:010} 00000 n \n", offset)?;
        }
        write!(
            self.buf,
            "trailer\n<< /Size {} /Root {} 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            self.offsets.len() + 1,
            root,
            info,
            xref_offset
        )?;
        Ok(self.buf)
    }

    fn begin(&mut self) -> PdfResult<usize> {
        self.offsets.push(self.buf.len());
        let id = self.offsets.len();
        write!(self.buf, "{} 0 obj\n", id)?;
        Ok(id)
    }
}
