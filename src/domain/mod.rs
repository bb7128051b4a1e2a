//! Domain layer - Session content, entries and text rules

pub mod countdown;
pub mod entry;
pub mod export;
pub mod guide;
pub mod sanitize;

pub use countdown::Countdown;
pub use entry::{JournalEntry, Prompt};
pub use export::ExportRequest;
pub use guide::{session_guide, GuideSection, Part};
