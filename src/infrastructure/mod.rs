//! Infrastructure layer - PDF engine and external I/O

pub mod config;
pub mod input;
pub mod pdf;
pub mod viewer;

pub use config::Config;
pub use viewer::ViewerSession;
