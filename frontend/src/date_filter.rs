//! Inclusive, day-granular date range filtering.
//!
//! Bounds are whole days: `start` counts from its first millisecond, `end`
//! through its last. Record timestamps keep their full precision.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AppError, Result};

/// Records carrying a timestamp string.
pub trait Timestamped {
    fn timestamp(&self) -> &str;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parses `YYYY-MM-DD` bounds as they come from date inputs. Empty means unset.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date_input(start)?, parse_date_input(end)?))
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn lower_bound(&self) -> NaiveDateTime {
        // NaiveDate::default() is 1970-01-01
        start_of_day(self.start.unwrap_or_default())
    }

    /// Without an `end`, the range runs through the end of `today`.
    pub fn upper_bound(&self, today: NaiveDate) -> NaiveDateTime {
        end_of_day(self.end.unwrap_or(today))
    }
}

/// `YYYY-MM-DD` from a date input; empty is `None`.
pub fn parse_date_input(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|source| AppError::InvalidDate {
            input: raw.to_string(),
            source,
        })
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last_milli = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    date.and_time(last_milli)
}

/// Parses a record timestamp. Offsets are converted to local wall time.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&chrono::Local).naive_local());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateFiltered<T> {
    pub records: Vec<T>,
    /// Records dropped because their timestamp did not parse
    pub skipped: usize,
}

pub fn filter_by_date_range<T: Timestamped + Clone>(
    records: &[T],
    range: &DateRange,
    today: NaiveDate,
) -> DateFiltered<T> {
    if range.is_unbounded() {
        return DateFiltered {
            records: records.to_vec(),
            skipped: 0,
        };
    }

    let lower = range.lower_bound();
    let upper = range.upper_bound(today);
    let mut skipped = 0;
    let kept = records
        .iter()
        .filter(|record| match parse_timestamp(record.timestamp()) {
            Some(at) => lower <= at && at <= upper,
            None => {
                skipped += 1;
                false
            }
        })
        .cloned()
        .collect();

    if skipped > 0 {
        log::warn!("skipped {} record(s) with unparseable timestamps", skipped);
    }

    DateFiltered {
        records: kept,
        skipped,
    }
}
