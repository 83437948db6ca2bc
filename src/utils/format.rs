use chrono::{DateTime, Datelike, Utc};
use serde::{self, Deserialize};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize Option<String> as empty string when None
pub fn serialize_option_string<S>(option: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match option {
        Some(value) => serializer.serialize_str(value),
        None => serializer.serialize_str(""),
    }
}

/// Deserialize empty string as None
pub fn deserialize_option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() { Ok(None) } else { Ok(Some(s)) }
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(FORMAT).to_string()
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = s.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Pad to `width` display characters; `format!` width counts bytes for
/// colored strings so padding is applied before coloring
pub fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// Parse `#rrggbb` (or `rrggbb`) into an RGB triple
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Whole years between a founding year and `now`
pub fn years_since(founded: i32, now: &DateTime<Utc>) -> i32 {
    now.year().saturating_sub(founded).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_string("Gonçalo Silva", 20), "Gonçalo Silva");
        assert_eq!(truncate_string("Experiência em Jogo", 10), "Experiê...");
        assert_eq!(truncate_string("abc", 2), "...");
    }

    #[test]
    fn test_pad_right_uses_characters() {
        assert_eq!(pad_right("Físico", 8), "Físico  ");
        assert_eq!(pad_right("Pivot", 3), "Pivot");
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#FF6B6B"), Some((255, 107, 107)));
        assert_eq!(hex_to_rgb("1e3a8a"), Some((30, 58, 138)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
        assert_eq!(hex_to_rgb("#éé1234"), None);
    }

    #[test]
    fn test_years_since_never_negative() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(years_since(1904, &now), 122);
        assert_eq!(years_since(2030, &now), 0);
        assert_eq!(years_since(i32::MIN, &now), i32::MAX);
        assert_eq!(years_since(i32::MAX, &now), 0);
    }

    #[test]
    fn test_format_datetime() {
        let dt = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_datetime(&dt), "2025-01-02 03:04:05");
    }
}
