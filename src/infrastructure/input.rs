//! Reading journal text from files or stdin

use crate::error::{LettersError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Path value meaning "read from standard input"
pub const STDIN_MARKER: &str = "-";

/// Read an entry body. No source means an empty entry.
pub fn read_entry(source: Option<&Path>) -> Result<String> {
    match source {
        None => Ok(String::new()),
        Some(path) if path == Path::new(STDIN_MARKER) => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .map_err(|source| LettersError::ReadEntry {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok(decode(&bytes))
        }
        Some(path) => {
            let bytes = fs::read(path).map_err(|source| LettersError::ReadEntry {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(decode(&bytes))
        }
    }
}

/// Decode entry bytes as UTF-8; invalid sequences become U+FFFD and are
/// later rendered as the placeholder glyph
fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Reject reading both entries from stdin
pub fn check_sources(a: Option<&Path>, b: Option<&Path>) -> Result<()> {
    let stdin = Path::new(STDIN_MARKER);
    if a == Some(stdin) && b == Some(stdin) {
        return Err(LettersError::Config(
            "Only one prompt can be read from stdin".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_none_is_empty() {
        assert_eq!(read_entry(None).unwrap(), "");
    }

    #[test]
    fn test_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("imprint.txt");
        fs::write(&path, "moss and light\n").unwrap();
        assert_eq!(read_entry(Some(&path)).unwrap(), "moss and light\n");
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_entry(Some(Path::new("/nonexistent/letter.txt"))).unwrap_err();
        assert!(matches!(err, LettersError::ReadEntry { .. }));
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_read_latin1_file_is_lossy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("imprint.txt");
        fs::write(&path, b"caf\xe9 au lait").unwrap();
        assert_eq!(read_entry(Some(&path)).unwrap(), "caf\u{FFFD} au lait");
    }

    #[test]
    fn test_check_sources() {
        let stdin = Path::new("-");
        let file = Path::new("a.txt");
        assert!(check_sources(Some(stdin), Some(file)).is_ok());
        assert!(check_sources(None, Some(stdin)).is_ok());
        assert!(check_sources(Some(stdin), Some(stdin)).is_err());
    }
}
