// Short time-of-day formatting
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use std::fmt::Write;
use thiserror::Error;

/// Short time style without a date component, e.g. "5:09 PM"
pub const SHORT_TIME_PATTERN: &str = "%-I:%M %p";

const TWELVE_HOUR_PARSE_PATTERN: &str = "%I:%M %p";

#[derive(Debug, Error, PartialEq)]
pub enum DisplayError {
    #[error("invalid time pattern: {0}")]
    InvalidTimePattern(String),
}

/// AM/PM convention used to disambiguate 12-hour input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn symbol(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeFormatter {
    pattern: String,
    meridiem: Meridiem,
}

impl TimeFormatter {
    pub fn new(pattern: impl Into<String>, meridiem: Meridiem) -> Result<Self, DisplayError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(DisplayError::InvalidTimePattern(pattern));
        }

        // Unknown specifiers and offset items (%z, %Z) fail for a naive time
        let sample = NaiveDateTime::default();
        if write!(String::new(), "{}", sample.format(&pattern)).is_err() {
            return Err(DisplayError::InvalidTimePattern(pattern));
        }
        Ok(Self { pattern, meridiem })
    }

    pub fn format(&self, time: &NaiveDateTime) -> String {
        time.format(&self.pattern).to_string()
    }

    /// Format a present time, or return `fallback` when absent
    pub fn format_or(&self, time: Option<&NaiveDateTime>, fallback: &str) -> String {
        match time {
            Some(time) => self.format(time),
            None => fallback.to_string(),
        }
    }

    /// Build `date` at hour:minute, reading the hour on a 12-hour clock with
    /// the configured meridiem. Returns None when the pair is not a valid time.
    pub fn time_of_day(&self, date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
        let text = format!("{}:{} {}", hour, minute, self.meridiem.symbol());
        NaiveTime::parse_from_str(&text, TWELVE_HOUR_PARSE_PATTERN)
            .ok()
            .map(|time| date.and_time(time))
    }
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self {
            pattern: SHORT_TIME_PATTERN.to_string(),
            meridiem: Meridiem::Am,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2019, 5, 30).unwrap()
    }

    #[test]
    fn test_short_time_has_no_date() {
        let formatter = TimeFormatter::default();
        let time = date().and_hms_opt(17, 9, 20).unwrap();

        assert_eq!(formatter.format(&time), "5:09 PM");
        assert_eq!(formatter.format_or(Some(&time), "TBD"), "5:09 PM");
        assert_eq!(formatter.format_or(None, "TBD"), "TBD");
        assert_eq!(formatter.format_or(None, ""), "");
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        assert_eq!(
            TimeFormatter::new("%Q", Meridiem::Am),
            Err(DisplayError::InvalidTimePattern("%Q".to_string()))
        );
        assert!(TimeFormatter::new("", Meridiem::Am).is_err());
        assert!(TimeFormatter::new("%H:%M", Meridiem::Pm).is_ok());
    }

    #[test]
    fn test_offset_pattern_is_rejected() {
        assert_eq!(
            TimeFormatter::new("%-I:%M %Z", Meridiem::Am),
            Err(DisplayError::InvalidTimePattern("%-I:%M %Z".to_string()))
        );
        assert!(TimeFormatter::new("%H:%M %z", Meridiem::Am).is_err());
    }

    #[test]
    fn test_time_of_day_uses_meridiem() {
        let am = TimeFormatter::default();
        let pm = TimeFormatter::new(SHORT_TIME_PATTERN, Meridiem::Pm).unwrap();

        assert_eq!(am.time_of_day(date(), 8, 30), date().and_hms_opt(8, 30, 0));
        assert_eq!(pm.time_of_day(date(), 8, 30), date().and_hms_opt(20, 30, 0));
        assert_eq!(am.time_of_day(date(), 12, 0), date().and_hms_opt(0, 0, 0));
    }

    #[test]
    fn test_time_of_day_rejects_out_of_range() {
        let formatter = TimeFormatter::default();

        assert_eq!(formatter.time_of_day(date(), 0, 30), None);
        assert_eq!(formatter.time_of_day(date(), 13, 0), None);
        assert_eq!(formatter.time_of_day(date(), 8, 60), None);
        assert_eq!(formatter.time_of_day(date(), 100, 0), None);
    }
}
