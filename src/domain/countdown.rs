//! Countdown timer values and duration parsing

use crate::error::{LettersError, Result};

/// Message shown once a countdown reaches zero
pub const DONE_MESSAGE: &str = "Time's up! Well done.";

/// A countdown of whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u64,
}

impl Countdown {
    pub fn from_minutes(minutes: u32) -> Self {
        Countdown {
            total_secs: u64::from(minutes) * 60,
        }
    }

    pub fn from_secs(total_secs: u64) -> Self {
        Countdown { total_secs }
    }

    /// Parse a duration argument: "5" and "5m" are minutes, "90s" is seconds
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || LettersError::InvalidDuration(input.to_string());

        let countdown = if let Some(secs) = normalized.strip_suffix('s') {
            Countdown::from_secs(secs.trim().parse().map_err(|_| invalid())?)
        } else {
            let minutes = normalized.strip_suffix('m').unwrap_or(&normalized);
            Countdown::from_minutes(minutes.trim().parse().map_err(|_| invalid())?)
        };

        if countdown.total_secs == 0 {
            return Err(invalid());
        }
        Ok(countdown)
    }

    pub fn total_secs(&self) -> u64 {
        self.total_secs
    }

    /// Remaining seconds at each tick, from the total down to 1
    pub fn ticks(&self) -> impl Iterator<Item = u64> {
        (1..=self.total_secs).rev()
    }
}

/// Format remaining seconds as "MM:SS remaining"
pub fn format_remaining(secs: u64) -> String {
    format!("{:02}:{:02} remaining", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_minutes() {
        assert_eq!(Countdown::parse("15").unwrap().total_secs(), 900);
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(Countdown::parse("20m").unwrap().total_secs(), 1200);
        assert_eq!(Countdown::parse("90s").unwrap().total_secs(), 90);
        assert_eq!(Countdown::parse(" 5M ").unwrap().total_secs(), 300);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "soon", "0", "0s", "-5", "5h", "1.5"] {
            let err = Countdown::parse(input).unwrap_err();
            assert!(
                matches!(err, LettersError::InvalidDuration(_)),
                "expected InvalidDuration for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_ticks_count_down() {
        let ticks: Vec<u64> = Countdown::from_secs(3).ticks().collect();
        assert_eq!(ticks, vec![3, 2, 1]);
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(900), "15:00 remaining");
        assert_eq!(format_remaining(61), "01:01 remaining");
        assert_eq!(format_remaining(5), "00:05 remaining");
    }
}
