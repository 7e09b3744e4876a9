//! Brazilian Portuguese month and weekday names.
//!
//! The locale is fixed: scheduling screens for Brazilian clinics always use
//! day-month-year ordering and the 24-hour clock, so these tables are
//! constants rather than configuration. Month lookups take the 1-based
//! month number used everywhere else in the library.

use chrono::Weekday;

/// Full month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Three-letter month abbreviations, January first.
pub const MONTH_ABBREVS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Get the full name of a 1-based month, `None` when out of range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Get the abbreviation of a 1-based month, `None` when out of range.
pub fn month_abbrev(month: u32) -> Option<&'static str> {
    MONTH_ABBREVS.get(month.checked_sub(1)? as usize).copied()
}

/// Get the weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}
