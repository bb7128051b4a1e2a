//! Config management use case

use crate::error::{LettersError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for managing presentation settings
pub struct ConfigService {
    root: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the config stored under `root`
    pub fn new(root: PathBuf) -> Self {
        ConfigService { root }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from_dir(&self.root)?;

        match key {
            "output_dir" => Ok(config.output_dir.display().to_string()),
            "viewer" => Ok(config.viewer.unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value; an empty viewer resets to the platform default
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from_dir(&self.root)?;

        match key {
            "output_dir" => {
                if value.trim().is_empty() {
                    return Err(LettersError::Config(
                        "output_dir cannot be empty".to_string(),
                    ));
                }
                config.output_dir = PathBuf::from(value);
            }
            "viewer" => {
                let value = value.trim();
                config.viewer = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to_dir(&self.root)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }
}

fn unknown_key(key: &str) -> LettersError {
    LettersError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: output_dir, viewer",
        key
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_defaults() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert_eq!(service.get("output_dir").unwrap(), ".");
        assert_eq!(service.get("viewer").unwrap(), "");
    }

    #[test]
    fn test_set_and_get() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("output_dir", "exports").unwrap();
        service.set("viewer", "evince").unwrap();

        assert_eq!(service.get("output_dir").unwrap(), "exports");
        assert_eq!(service.get("viewer").unwrap(), "evince");
    }

    #[test]
    fn test_set_empty_viewer_resets() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        service.set("viewer", "evince").unwrap();
        service.set("viewer", "").unwrap();

        assert!(service.list().unwrap().viewer.is_none());
    }

    #[test]
    fn test_set_empty_output_dir_fails() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());
        assert!(service.set("output_dir", " ").is_err());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().to_path_buf());

        let err = service.get("colour").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'colour'"));
        assert!(service.set("colour", "green").is_err());
    }
}
