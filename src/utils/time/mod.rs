// Clock time utility functions
// Slot boundaries and event times are plain wall-clock times ("HH:MM")

use chrono::NaiveTime;

pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a `HH:MM` clock time.
pub fn parse_clock(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_FORMAT)
}

pub fn format_clock(time: NaiveTime) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

/// Format a `start–end` range the way slot labels are shown.
pub fn format_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{}–{}", format_clock(start), format_clock(end))
}

/// Serde adapter for `NaiveTime` fields stored as `HH:MM`.
pub mod clock_format {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_clock(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock() {
        assert_eq!(
            parse_clock("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_clock(" 13:00 ").unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert!(parse_clock("9.30").is_err());
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("").is_err());
    }

    #[test]
    fn test_format_range() {
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let end = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        assert_eq!(format_range(start, end), "09:00–10:00");
    }
}
