//! Interpretation of attribute record values
//!
//! Values are stored as display strings ("8/10", "1.85m", "156"). This module
//! reads them back as typed values without ever failing: anything that does
//! not look like a score, measurement, or count stays as text.

use crate::core::data::{AttributeRecord, ScoreBand};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*/\s*(\d+)\s*$").expect("score pattern is valid"));
static MEASURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*([[:alpha:]]+)\s*$").expect("measure pattern is valid")
});
static COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*$").expect("count pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Score { value: u32, out_of: u32 },
    Measure { amount: f64, unit: String },
    Count(u64),
    Text(String),
}

impl AttributeValue {
    pub fn parse(raw: &str) -> Self {
        if let Some(caps) = SCORE_RE.captures(raw)
            && let (Ok(value), Ok(out_of)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>())
        {
            return AttributeValue::Score { value, out_of };
        }

        if let Some(caps) = COUNT_RE.captures(raw)
            && let Ok(count) = caps[1].parse::<u64>()
        {
            return AttributeValue::Count(count);
        }

        if let Some(caps) = MEASURE_RE.captures(raw)
            && let Ok(amount) = caps[1].replace(',', ".").parse::<f64>()
        {
            return AttributeValue::Measure {
                amount,
                unit: caps[2].to_string(),
            };
        }

        AttributeValue::Text(raw.trim().to_string())
    }

    /// Score band for scores out of ten; other values have no band
    pub fn band(&self) -> Option<ScoreBand> {
        match self {
            AttributeValue::Score { value, out_of: 10 } => {
                Some(ScoreBand::from_score(u8::try_from(*value).unwrap_or(u8::MAX)))
            }
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Score { value, out_of } => write!(f, "{}/{}", value, out_of),
            AttributeValue::Measure { amount, unit } => write!(f, "{}{}", amount, unit),
            AttributeValue::Count(count) => write!(f, "{}", count),
            AttributeValue::Text(text) => f.write_str(text),
        }
    }
}

impl AttributeRecord {
    pub fn parsed_value(&self) -> AttributeValue {
        AttributeValue::parse(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(
            AttributeValue::parse("8/10"),
            AttributeValue::Score { value: 8, out_of: 10 }
        );
        assert_eq!(
            AttributeValue::parse(" 7 / 10 "),
            AttributeValue::Score { value: 7, out_of: 10 }
        );
    }

    #[test]
    fn test_parse_measure() {
        assert_eq!(
            AttributeValue::parse("1.85m"),
            AttributeValue::Measure {
                amount: 1.85,
                unit: "m".to_string()
            }
        );
        assert_eq!(
            AttributeValue::parse("78kg"),
            AttributeValue::Measure {
                amount: 78.0,
                unit: "kg".to_string()
            }
        );
    }

    #[test]
    fn test_parse_count_and_text() {
        assert_eq!(AttributeValue::parse("156"), AttributeValue::Count(156));
        assert_eq!(
            AttributeValue::parse("esquerdino"),
            AttributeValue::Text("esquerdino".to_string())
        );
        assert_eq!(AttributeValue::parse(""), AttributeValue::Text(String::new()));
    }

    #[test]
    fn test_band_only_for_scores_out_of_ten() {
        assert_eq!(AttributeValue::parse("9/10").band(), Some(ScoreBand::Elite));
        assert_eq!(AttributeValue::parse("6/10").band(), Some(ScoreBand::Low));
        assert_eq!(AttributeValue::parse("4/5").band(), None);
        assert_eq!(AttributeValue::parse("156").band(), None);
    }

    #[test]
    fn test_display_round_trips_common_shapes() {
        for raw in ["8/10", "1.85m", "78kg", "3"] {
            assert_eq!(AttributeValue::parse(raw).to_string(), raw);
        }
    }
}
