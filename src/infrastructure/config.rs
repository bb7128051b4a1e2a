//! Configuration management

use crate::error::{LettersError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the config file, relative to the config root
pub const CONFIG_DIR: &str = ".letters";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where exported PDFs are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Command used to open exported PDFs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            viewer: None,
        }
    }
}

impl Config {
    /// Directory the config lives under: LETTERS_ROOT if set, else the current directory
    pub fn root() -> Result<PathBuf> {
        match std::env::var("LETTERS_ROOT") {
            Ok(root) => Ok(PathBuf::from(root)),
            Err(_) => Ok(std::env::current_dir()?),
        }
    }

    /// Load config from .letters/config.toml in the given directory.
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(LettersError::Io(e)),
        };

        toml::from_str(&contents)
            .map_err(|e| LettersError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .letters/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| LettersError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Output directory, with LETTERS_OUTPUT_DIR taking precedence.
    /// Relative paths resolve against `root`.
    pub fn resolve_output_dir(&self, root: &Path) -> PathBuf {
        let dir = std::env::var("LETTERS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| self.output_dir.clone());
        if dir.is_absolute() {
            dir
        } else {
            root.join(dir)
        }
    }
}
