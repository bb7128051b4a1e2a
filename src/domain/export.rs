//! Export request and the fixed document text

use super::entry::{JournalEntry, Prompt};
use chrono::{NaiveDate, NaiveDateTime};

pub const TITLE: &str = "Letters to the Living";
pub const SUBTITLE: &str = "A Valentine's Nature Walk & Writing Workshop";
pub const CLOSING_LINE: &str =
    "In the forest, love is not a transaction; it is a shared circular system.";

/// Prefix of the suggested download file name
pub const FILE_PREFIX: &str = "letters_to_the_living";

/// Everything one export needs: both entries and the generation time
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub imprint: JournalEntry,
    pub letter: JournalEntry,
    pub generated_at: NaiveDateTime,
}

impl ExportRequest {
    pub fn new(imprint: &str, letter: &str, generated_at: NaiveDateTime) -> Self {
        ExportRequest {
            imprint: JournalEntry::new(Prompt::Imprint, imprint),
            letter: JournalEntry::new(Prompt::Letter, letter),
            generated_at,
        }
    }

    /// True when at least one entry has text after trimming
    pub fn has_content(&self) -> bool {
        self.imprint.present().is_some() || self.letter.present().is_some()
    }

    /// Human-readable "written on" line for the title block
    pub fn written_on(&self) -> String {
        format!(
            "Written on {}",
            self.generated_at.format("%B %d, %Y at %I:%M %p")
        )
    }

    /// Suggested file name for this export (e.g., "letters_to_the_living_20250214.pdf")
    pub fn suggested_filename(&self) -> String {
        suggested_filename(self.generated_at.date())
    }
}

/// Suggested file name for an export made on the given date
pub fn suggested_filename(date: NaiveDate) -> String {
    format!("{}_{}.pdf", FILE_PREFIX, date.format("%Y%m%d"))
}
