//! letters - Letters to the Living
//!
//! A guided nature walk and writing session for the terminal. Participants
//! follow the walk, answer two journaling prompts and export their writing
//! as a styled PDF.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::export;
pub use error::LettersError;
