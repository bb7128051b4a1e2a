//! Viewer integration for opening exported PDFs

use crate::error::{LettersError, Result};
use std::path::Path;
use std::process::Command;

/// Session for opening files in an external PDF viewer
pub struct ViewerSession {
    command: String,
}

impl ViewerSession {
    /// Create a viewer session; `None` uses the platform's default opener
    pub fn new(viewer_command: Option<String>) -> Self {
        ViewerSession {
            command: viewer_command.unwrap_or_default(),
        }
    }

    /// Open a file in the viewer and return immediately
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(file_path.to_string_lossy().to_string());

        Command::new(&program).args(&args).spawn().map_err(|e| {
            LettersError::Viewer(format!("Failed to launch viewer '{}': {}", program, e))
        })?;

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            return default_opener();
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

fn default_opener() -> (String, Vec<String>) {
    if cfg!(windows) {
        (
            "cmd".to_string(),
            vec!["/C".to_string(), "start".to_string(), String::new()],
        )
    } else if cfg!(target_os = "macos") {
        ("open".to_string(), vec![])
    } else {
        ("xdg-open".to_string(), vec![])
    }
}
