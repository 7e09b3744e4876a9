//! Calendar date/time value types.
//!
//! Scheduling collaborators (form fields, calendar pickers, list displays)
//! exchange dates with this library as plain numeric field tuples. The types
//! here are unchecked: a [`CalendarDateTime`] holds whatever fields it was
//! built with, and calendar validity is a separate question answered by
//! [`CalendarDateTime::is_valid`] or the chrono conversions, which return
//! `None` for dates that do not exist. Months are always 1-based at this
//! boundary.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A wall-clock time at minute granularity, 24-hour convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Minute of hour, 0-59
    pub minute: u32,
}

impl ClockTime {
    /// Start of day, used when a date-only value needs a time component.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

/// A calendar date with an optional clock time.
///
/// Field ranges are documented, not enforced: construction never fails, and
/// out-of-range fields are a precondition violation of the caller. Parsing
/// likewise produces whatever numbers the input carried; see
/// [`Self::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDateTime {
    pub year: i32,
    /// Month of year, 1-12
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Clock time when the value has minute granularity
    pub time: Option<ClockTime>,
}

impl CalendarDateTime {
    /// Create a date-only value.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            time: None,
        }
    }

    /// Create a value with minute granularity.
    pub fn with_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            time: Some(ClockTime::new(hour, minute)),
        }
    }

    /// Whether the value carries a clock time.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Whether the fields name a real calendar date (and, when present, a
    /// real clock time).
    pub fn is_valid(&self) -> bool {
        match self.time {
            Some(_) => self.to_naive_date_time().is_some(),
            None => self.to_naive_date().is_some(),
        }
    }

    /// Convert the date fields to a [`NaiveDate`], `None` when they do not
    /// name a real calendar date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Convert to a [`NaiveDateTime`], treating a missing time as midnight.
    /// `None` when the date or time fields are out of range.
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        let time = self.time.unwrap_or(ClockTime::MIDNIGHT);
        let date = self.to_naive_date()?;
        let time = NaiveTime::from_hms_opt(time.hour, time.minute, 0)?;
        Some(NaiveDateTime::new(date, time))
    }
}

impl From<NaiveDate> for CalendarDateTime {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl From<NaiveDateTime> for CalendarDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::with_time(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}
