//! Application layer - Use cases and orchestration

pub mod export_journal;
pub mod manage_config;
pub mod run_timer;

pub use export_journal::{export, render, ExportOptions, ExportService};
pub use manage_config::ConfigService;
pub use run_timer::run_timer;
