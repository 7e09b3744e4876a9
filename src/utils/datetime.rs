//! Date and time utility functions
//!
//! This module converts between [`CalendarDateTime`] values and the display
//! strings used on Brazilian scheduling screens ("dd/mm/aaaa", 24-hour
//! times), and provides human-readable formatting for calendar views
//! (e.g., "ontem", "hoje", "amanhã").
//!
//! Parsing only checks the separator structure of its input. A string such
//! as "31/02/2024" parses into a value whose fields do not name a real
//! date; collaborators that need calendar validity ask the value itself
//! (see [`CalendarDateTime::is_valid`]).

use chrono::{Datelike, Duration, Local, Weekday};
use log::debug;
use std::str::FromStr;

use crate::calendar::{CalendarDateTime, ClockTime};
use crate::locale;

/// chrono layout for dates shown in lists, matching the dd/mm/aaaa convention
pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// chrono layout for appointment times, 24-hour clock
pub const BR_TIME_FORMAT: &str = "%H:%M";

/// Error raised when a display string does not match the expected layout.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected a 'dd/mm/aaaa' date, got '{0}'")]
    MalformedDate(String),

    #[error("expected a 'dd/mm/aaaa hh:mm' date-time, got '{0}'")]
    MalformedDateTime(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),
}

/// Format a date value as "dd/mm/aaaa", zero-padded.
pub fn format_date(value: &CalendarDateTime) -> String {
    format!("{:02}/{:02}/{:04}", value.day, value.month, value.year)
}

/// Format a clock time as "hh:mm", 24-hour, zero-padded.
pub fn format_time(time: ClockTime) -> String {
    format!("{:02}:{:02}", time.hour, time.minute)
}

/// Format a value as "dd-mm-aaaa hh:mm".
///
/// The date part uses "-" instead of "/" so the combined string stays
/// unambiguous where "/" already means something (file paths, query
/// strings). A value without a time component renders as midnight.
pub fn format_date_time(value: &CalendarDateTime) -> String {
    let time = value.time.unwrap_or(ClockTime::MIDNIGHT);
    format!(
        "{:02}-{:02}-{:04} {}",
        value.day,
        value.month,
        value.year,
        format_time(time)
    )
}

/// Parse a "dd/mm/aaaa" string into a date-only value.
///
/// Field values are taken as written, without zero-padding requirements or
/// calendar validation.
///
/// # Errors
/// [`ParseError`] when the string does not split into exactly three "/"
/// parts or a part is not a valid integer.
pub fn parse_date(date_str: &str) -> Result<CalendarDateTime, ParseError> {
    let (year, month, day) = parse_date_fields(date_str)?;
    Ok(CalendarDateTime::new(year, month, day))
}

/// Parse a "dd/mm/aaaa hh:mm" string into a value with minute granularity.
///
/// # Errors
/// [`ParseError`] when the space split does not yield exactly a date part
/// and a time part, or either sub-split has the wrong shape.
pub fn parse_date_time(text: &str) -> Result<CalendarDateTime, ParseError> {
    let parts: Vec<&str> = text.split(' ').collect();
    if parts.len() != 2 {
        return Err(ParseError::MalformedDateTime(text.to_string()));
    }

    let (year, month, day) = parse_date_fields(parts[0])?;

    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if time_parts.len() != 2 {
        return Err(ParseError::MalformedDateTime(text.to_string()));
    }
    let hour = parse_field(time_parts[0])?;
    let minute = parse_field(time_parts[1])?;

    Ok(CalendarDateTime::with_time(year, month, day, hour, minute))
}

/// Split a "dd/mm/aaaa" string into its numeric fields.
fn parse_date_fields(date_str: &str) -> Result<(i32, u32, u32), ParseError> {
    let parts: Vec<&str> = date_str.split('/').collect();
    if parts.len() != 3 {
        return Err(ParseError::MalformedDate(date_str.to_string()));
    }

    let day = parse_field(parts[0])?;
    let month = parse_field(parts[1])?;
    let year = parse_field(parts[2])?;
    Ok((year, month, day))
}

fn parse_field<T>(field: &str) -> Result<T, ParseError>
where
    T: FromStr,
{
    field.parse().map_err(|_| ParseError::InvalidNumber(field.to_string()))
}

/// Current local date as a date-only value.
pub fn today() -> CalendarDateTime {
    CalendarDateTime::from(Local::now().date_naive())
}

/// Format the current local date as "dd/mm/aaaa".
pub fn format_today() -> String {
    format_date(&today())
}

/// Format the date `days_offset` days from today as "dd/mm/aaaa".
///
/// # Arguments
/// * `days_offset` - Number of days to add/subtract from today
pub fn format_date_with_offset(days_offset: i64) -> String {
    let target_date = Local::now().date_naive() + Duration::days(days_offset);
    format_date(&CalendarDateTime::from(target_date))
}

/// Calculate the next occurrence of a target weekday after a given date.
///
/// Returns `None` when `from` does not name a real calendar date.
pub fn next_weekday(from: &CalendarDateTime, target: Weekday) -> Option<CalendarDateTime> {
    let from = from.to_naive_date()?;
    let from_w = from.weekday().num_days_from_monday() as i64;
    let tgt_w = target.num_days_from_monday() as i64;
    let mut delta = (7 + tgt_w - from_w) % 7;
    if delta == 0 {
        delta = 7;
    }
    Some(CalendarDateTime::from(from + Duration::days(delta)))
}

/// Format a "dd/mm/aaaa" string in human-readable Brazilian Portuguese.
///
/// # Arguments
/// * `date_str` - Date string in dd/mm/aaaa format
///
/// # Returns
/// * `String` - Human-readable date, or the input verbatim when it cannot
///   be read as a calendar date
pub fn format_human_date(date_str: &str) -> String {
    // Parse the input date string
    let input_date = match parse_date(date_str).ok().and_then(|d| d.to_naive_date()) {
        Some(date) => date,
        None => {
            debug!("cannot display '{date_str}' as a calendar date");
            return date_str.to_string();
        }
    };

    // Get current local date
    let today = Local::now().date_naive();

    // Calculate the difference in days
    let days_diff = (input_date - today).num_days();

    match days_diff {
        -1 => "ontem".to_string(),
        0 => "hoje".to_string(),
        1 => "amanhã".to_string(),
        diff if diff > 1 && diff <= 7 => {
            // Within the next week - show day name
            next_weekday_label(input_date.weekday())
        }
        diff if (-7..-1).contains(&diff) => {
            // Within the past week - show day name
            last_weekday_label(input_date.weekday())
        }
        diff if diff > 7 && diff <= 30 => {
            // Within the next month - show "in X days"
            format!("em {} dias", diff)
        }
        diff if (-30..-7).contains(&diff) => {
            // Within the past month - show "X days ago"
            format!("há {} dias", -diff)
        }
        _ => {
            // For dates further out, show the actual date,
            // as "15 de mar" or "15 de mar de 2025" if different year
            let abbrev = locale::month_abbrev(input_date.month()).unwrap_or_default();

            if input_date.year() == today.year() {
                format!("{} de {}", input_date.day(), abbrev)
            } else {
                format!("{} de {} de {}", input_date.day(), abbrev, input_date.year())
            }
        }
    }
}

/// Format a "dd/mm/aaaa hh:mm" string in human-readable Brazilian Portuguese.
///
/// # Arguments
/// * `datetime_str` - Date-time string in dd/mm/aaaa hh:mm format
///
/// # Returns
/// * `String` - Human-readable date-time, e.g. "amanhã às 09:00"
pub fn format_human_date_time(datetime_str: &str) -> String {
    match parse_date_time(datetime_str) {
        Ok(value) => {
            let time = value.time.unwrap_or(ClockTime::MIDNIGHT);
            let human_date = format_human_date(&format_date(&value));

            // Always show time for date-time strings
            format!("{} às {}", human_date, format_time(time))
        }
        // Fallback to date-only formatting
        Err(_) => format_human_date(datetime_str),
    }
}

/// Format a date value spelled out for document headers,
/// e.g. "15 de março de 2024".
pub fn format_long_date(value: &CalendarDateTime) -> String {
    match locale::month_name(value.month) {
        Some(name) => format!("{} de {} de {}", value.day, name, value.year),
        None => format_date(value),
    }
}

/// "próxima segunda-feira", "próximo sábado"
fn next_weekday_label(weekday: Weekday) -> String {
    match weekday {
        Weekday::Sat | Weekday::Sun => format!("próximo {}", locale::weekday_name(weekday)),
        _ => format!("próxima {}", locale::weekday_name(weekday)),
    }
}

/// "segunda-feira passada", "sábado passado"
fn last_weekday_label(weekday: Weekday) -> String {
    match weekday {
        Weekday::Sat | Weekday::Sun => format!("{} passado", locale::weekday_name(weekday)),
        _ => format!("{} passada", locale::weekday_name(weekday)),
    }
}
