//! Timestamp parsing and formatting.
//!
//! Parsing tries an ordered list of [`TimePattern`]s and keeps the first one
//! that matches. Formatting defaults to RFC 3339 at seconds precision with `Z`
//! for UTC (`2006-01-02T15:04:05Z07:00` in layout terms).

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat};

use crate::error::{ConfigError, Result};
use crate::types::{ScalarType, Timestamp};

const DATE_LAYOUT: &str = "%Y-%m-%d";
const DATE_TIME_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S";

/// One candidate layout for timestamp parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimePattern {
    /// Full offset-aware ISO-8601, e.g. `2020-01-02T03:04:05+08:00`.
    Rfc3339,
    /// `2020-01-02`, read as midnight UTC.
    DateOnly,
    /// `2020-01-02T03:04:05`, read as UTC.
    DateTimeNoOffset,
    /// A chrono strftime layout. Layouts without an offset are read as UTC.
    Custom(String),
}

impl TimePattern {
    /// Default order: full ISO-8601, then date-only, then date-time without offset.
    pub fn defaults() -> Vec<TimePattern> {
        vec![
            TimePattern::Rfc3339,
            TimePattern::DateOnly,
            TimePattern::DateTimeNoOffset,
        ]
    }

    pub fn parse(&self, text: &str) -> Option<Timestamp> {
        match self {
            TimePattern::Rfc3339 => DateTime::parse_from_rfc3339(text).ok(),
            TimePattern::DateOnly => parse_date(text, DATE_LAYOUT),
            TimePattern::DateTimeNoOffset => parse_naive(text, DATE_TIME_LAYOUT),
            TimePattern::Custom(layout) => DateTime::parse_from_str(text, layout)
                .ok()
                .or_else(|| parse_naive(text, layout))
                .or_else(|| parse_date(text, layout)),
        }
    }

    fn label(&self) -> &str {
        match self {
            TimePattern::Rfc3339 => "rfc3339",
            TimePattern::DateOnly => DATE_LAYOUT,
            TimePattern::DateTimeNoOffset => DATE_TIME_LAYOUT,
            TimePattern::Custom(layout) => layout,
        }
    }
}

fn parse_naive(text: &str, layout: &str) -> Option<Timestamp> {
    NaiveDateTime::parse_from_str(text, layout)
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

fn parse_date(text: &str, layout: &str) -> Option<Timestamp> {
    let date = NaiveDate::parse_from_str(text, layout).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset())
}

/// Output layout for timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    Rfc3339,
    /// A chrono strftime layout.
    Custom(String),
}

/// Parse `text` with the first matching pattern.
pub fn parse_timestamp(text: &str, patterns: &[TimePattern]) -> Result<Timestamp> {
    patterns
        .iter()
        .find_map(|pattern| pattern.parse(text))
        .ok_or_else(|| {
            let tried: Vec<&str> = patterns.iter().map(TimePattern::label).collect();
            ConfigError::format(
                text,
                ScalarType::Timestamp,
                format!("no pattern matched (tried {})", tried.join(", ")),
            )
        })
}

pub fn format_timestamp(value: &Timestamp, format: &TimeFormat) -> Result<String> {
    match format {
        TimeFormat::Rfc3339 => Ok(value.to_rfc3339_opts(SecondsFormat::Secs, true)),
        TimeFormat::Custom(layout) => {
            if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
                return Err(ConfigError::format(
                    layout,
                    ScalarType::Timestamp,
                    "invalid strftime layout",
                ));
            }
            let mut out = String::new();
            write!(out, "{}", value.format(layout)).map_err(|_| {
                ConfigError::format(layout, ScalarType::Timestamp, "layout cannot render this timestamp")
            })?;
            Ok(out)
        }
    }
}

/// The zero sentinel: the Unix epoch. Such timestamps count as unset.
pub fn is_zero_timestamp(value: &Timestamp) -> bool {
    *value == Timestamp::default()
}
