//! Error types for letters

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the letters application
#[derive(Debug, Error)]
pub enum LettersError {
    #[error("Could not generate PDF: {0}")]
    RenderFailure(String),

    #[error("Nothing to export: both prompts are empty")]
    NothingToExport,

    #[error("Invalid timer duration: {0}")]
    InvalidDuration(String),

    #[error("Failed to read '{}': {source}", .path.display())]
    ReadEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Viewer error: {0}")]
    Viewer(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl LettersError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            LettersError::NothingToExport => 2,
            LettersError::InvalidDuration(_) => 3,
            LettersError::RenderFailure(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            LettersError::NothingToExport => "Nothing to export yet.\n\n\
                Write something in at least one of the prompts, then export:\n\
                • letters export -a imprint.txt\n\
                • letters export -b letter.txt\n\
                • cat letter.txt | letters export -b -"
                .to_string(),
            LettersError::InvalidDuration(input) => {
                format!(
                    "Invalid timer duration: '{}'\n\n\
                    Valid durations:\n\
                    • Minutes: 5 or 5m\n\
                    • Seconds: 90s\n\n\
                    Examples:\n\
                    letters timer 15\n\
                    letters timer 20m",
                    input
                )
            }
            LettersError::RenderFailure(msg) => {
                format!(
                    "Could not generate PDF: {}\n\n\
                    Your writing has not been lost. Suggestions:\n\
                    • Save your text to a file before trying again\n\
                    • Split very long entries and export them separately",
                    msg
                )
            }
            LettersError::Viewer(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your PDF viewer is installed and in PATH\n\
                    • Configure a viewer: letters config viewer 'xdg-open'\n\
                    • Export without --open and open the file yourself",
                    msg
                )
            }
            LettersError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: letters config output_dir ~/Documents/letters",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using LettersError
pub type Result<T> = std::result::Result<T, LettersError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(LettersError::NothingToExport.exit_code(), 2);
        assert_eq!(LettersError::InvalidDuration("x".to_string()).exit_code(), 3);
        assert_eq!(LettersError::RenderFailure("oom".to_string()).exit_code(), 4);
        assert_eq!(LettersError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_nothing_to_export_suggestions() {
        let msg = LettersError::NothingToExport.display_with_suggestions();
        assert!(msg.contains("letters export -a"));
        assert!(msg.contains("stdin") || msg.contains("cat letter.txt"));
    }

    #[test]
    fn test_invalid_duration_examples() {
        let err = LettersError::InvalidDuration("soon".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'soon'"));
        assert!(msg.contains("90s"));
        assert!(msg.contains("letters timer 15"));
    }

    #[test]
    fn test_render_failure_message() {
        let err = LettersError::RenderFailure("page limit exceeded".to_string());
        assert_eq!(err.to_string(), "Could not generate PDF: page limit exceeded");
        let msg = err.display_with_suggestions();
        assert!(msg.contains("not been lost"));
    }

    #[test]
    fn test_viewer_error_suggestions() {
        let err = LettersError::Viewer("Viewer not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("PATH"));
        assert!(msg.contains("letters config viewer"));
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = LettersError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("letters config output_dir"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = LettersError::Config("Failed to parse config.toml".to_string());
        assert_eq!(err.display_with_suggestions(), "Failed to parse config.toml");
    }
}
