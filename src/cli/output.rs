//! Output formatting utilities

use crate::domain::{GuideSection, Part};
use crate::infrastructure::Config;
use std::path::Path;

/// Format the session guide for the terminal
pub fn format_guide(sections: &[GuideSection]) -> String {
    let mut output = String::new();
    let mut current_part: Option<Part> = None;

    for section in sections {
        if current_part != Some(section.part) {
            if current_part.is_some() {
                output.push('\n');
            }
            let title = section.part.title();
            output.push_str(&format!("{}\n{}\n", title, "=".repeat(title.len())));
            current_part = Some(section.part);
        }

        output.push('\n');
        match section.minutes {
            Some(minutes) => output.push_str(&format!("{} ({} min)\n", section.title, minutes)),
            None => output.push_str(&format!("{}\n", section.title)),
        }
        for line in &section.lines {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}

/// Format the confirmation shown after an export
pub fn format_export_summary(path: &Path) -> String {
    format!("Saved your journal to {}", path.display())
}

/// Format all config values, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "output_dir = {}\nviewer = {}\n",
        config.output_dir.display(),
        config.viewer.as_deref().unwrap_or("(system default)")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session_guide;
    use std::path::PathBuf;

    #[test]
    fn test_format_guide_parts_and_timers() {
        let output = format_guide(&session_guide());
        assert!(output.starts_with("The Invitation\n=============="));
        assert!(output.contains("Part I: The Walk"));
        assert!(output.contains("Part II: The Writing"));
        assert!(output.contains("1. Walking with Presence (48 steps) (15 min)"));
        assert!(output.contains("Prompt B \u{2014} A Letter to the Living (20 min)"));
        assert!(output.contains("  Stop walking. Stand still."));
    }

    #[test]
    fn test_format_guide_each_part_once() {
        let output = format_guide(&session_guide());
        assert_eq!(output.matches("Part I: The Walk").count(), 1);
        assert_eq!(output.matches("Part II: The Writing").count(), 1);
    }

    #[test]
    fn test_format_guide_empty() {
        assert_eq!(format_guide(&[]), "");
    }

    #[test]
    fn test_format_export_summary() {
        let path = PathBuf::from("letters_to_the_living_20250214.pdf");
        assert_eq!(
            format_export_summary(&path),
            "Saved your journal to letters_to_the_living_20250214.pdf"
        );
    }

    #[test]
    fn test_format_config() {
        let config = Config::default();
        assert_eq!(
            format_config(&config),
            "output_dir = .\nviewer = (system default)\n"
        );
    }
}
