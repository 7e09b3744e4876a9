use agendista::utils::datetime::*;
use agendista::{CalendarDateTime, ClockTime};
use chrono::{Datelike, Duration, Local, Weekday};

#[test]
fn test_format_date() {
    let date = CalendarDateTime::new(2024, 3, 5);
    assert_eq!(format_date(&date), "05/03/2024");
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(ClockTime::new(9, 5)), "09:05");
    assert_eq!(format_time(ClockTime::new(23, 59)), "23:59");
}

#[test]
fn test_format_date_time() {
    let value = CalendarDateTime::with_time(2024, 12, 31, 23, 59);
    assert_eq!(format_date_time(&value), "31-12-2024 23:59");
}

#[test]
fn test_format_date_time_without_time() {
    // Date-only values render as midnight
    let value = CalendarDateTime::new(2024, 3, 5);
    assert_eq!(format_date_time(&value), "05-03-2024 00:00");
}

#[test]
fn test_parse_date() {
    let parsed = parse_date("05/03/2024").unwrap();
    assert_eq!(parsed, CalendarDateTime::new(2024, 3, 5));
}

#[test]
fn test_parse_date_accepts_unpadded_fields() {
    let parsed = parse_date("5/3/2024").unwrap();
    assert_eq!(parsed, CalendarDateTime::new(2024, 3, 5));
}

#[test]
fn test_parse_date_skips_calendar_validation() {
    // Structural parsing only; validity is the value's own question
    let parsed = parse_date("31/02/2024").unwrap();
    assert_eq!(parsed, CalendarDateTime::new(2024, 2, 31));
    assert!(!parsed.is_valid());
}

#[test]
fn test_parse_date_rejects_wrong_shape() {
    assert!(parse_date("05-03-2024").is_err());
    assert!(parse_date("05/03").is_err());
    assert!(parse_date("05/03/2024/1").is_err());
    assert!(parse_date("dd/mm/aaaa").is_err());
    assert!(parse_date("").is_err());
}

#[test]
fn test_parse_error_message_names_expected_layout() {
    let err = parse_date("2024-03-05").unwrap_err();
    assert!(err.to_string().contains("dd/mm/aaaa"));
}

#[test]
fn test_parse_date_time() {
    let parsed = parse_date_time("05/03/2024 08:30").unwrap();
    assert_eq!(parsed, CalendarDateTime::with_time(2024, 3, 5, 8, 30));
}

#[test]
fn test_parse_date_time_rejects_wrong_shape() {
    assert!(parse_date_time("05/03/2024").is_err());
    assert!(parse_date_time("05/03/2024  08:30").is_err());
    assert!(parse_date_time("05/03/2024 08:30:00").is_err());
    // The dash layout is output-only
    assert!(parse_date_time("31-12-2024 23:59").is_err());
}

#[test]
fn test_date_round_trip() {
    let value = CalendarDateTime::new(2025, 1, 15);
    assert_eq!(parse_date(&format_date(&value)).unwrap(), value);
}

#[test]
fn test_date_time_round_trip_with_slash_layout() {
    let value = CalendarDateTime::with_time(2025, 1, 15, 14, 0);
    let text = format!("{} {}", format_date(&value), format_time(ClockTime::new(14, 0)));
    assert_eq!(parse_date_time(&text).unwrap(), value);
}

#[test]
fn test_canonical_string_round_trip() {
    let text = "28/02/2025";
    assert_eq!(format_date(&parse_date(text).unwrap()), text);
}

#[test]
fn test_format_today() {
    let expected = Local::now().format("%d/%m/%Y").to_string();
    assert_eq!(format_today(), expected);
}

#[test]
fn test_format_date_with_offset() {
    let expected = (Local::now() + Duration::days(3)).format("%d/%m/%Y").to_string();
    assert_eq!(format_date_with_offset(3), expected);
}

#[test]
fn test_next_weekday() {
    let friday = CalendarDateTime::new(2023, 12, 22); // Friday
    let next_monday = next_weekday(&friday, Weekday::Mon).unwrap();
    assert_eq!(next_monday, CalendarDateTime::new(2023, 12, 25));
}

#[test]
fn test_next_weekday_same_day() {
    let monday = CalendarDateTime::new(2023, 12, 25); // Monday
    let next_monday = next_weekday(&monday, Weekday::Mon).unwrap();
    assert_eq!(next_monday, CalendarDateTime::new(2024, 1, 1)); // 7 days later
}

#[test]
fn test_next_weekday_invalid_date() {
    assert!(next_weekday(&CalendarDateTime::new(2024, 2, 31), Weekday::Mon).is_none());
}

#[test]
fn test_format_human_date_today() {
    let today = Local::now().format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date(&today), "hoje");
}

#[test]
fn test_format_human_date_tomorrow() {
    let tomorrow = (Local::now() + Duration::days(1)).format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date(&tomorrow), "amanhã");
}

#[test]
fn test_format_human_date_yesterday() {
    let yesterday = (Local::now() - Duration::days(1)).format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date(&yesterday), "ontem");
}

#[test]
fn test_format_human_date_within_next_week() {
    let text = (Local::now() + Duration::days(4)).format("%d/%m/%Y").to_string();
    let formatted = format_human_date(&text);
    assert!(formatted.starts_with("próxim"), "got '{formatted}'");
}

#[test]
fn test_format_human_date_within_next_month() {
    let text = (Local::now() + Duration::days(15)).format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date(&text), "em 15 dias");
}

#[test]
fn test_format_human_date_within_past_month() {
    let text = (Local::now() - Duration::days(15)).format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date(&text), "há 15 dias");
}

#[test]
fn test_format_human_date_far_dates_show_month() {
    // More than 30 days out, in a different year
    let date = (Local::now() + Duration::days(400)).date_naive();
    let formatted = format_human_date(&date.format("%d/%m/%Y").to_string());
    assert!(formatted.contains(" de "));
    assert!(formatted.contains(&date.year().to_string()));
}

#[test]
fn test_format_human_date_returns_unreadable_input_verbatim() {
    assert_eq!(format_human_date("notadate"), "notadate");
    assert_eq!(format_human_date("31/02/2024"), "31/02/2024");
}

#[test]
fn test_format_human_date_time() {
    let tomorrow = (Local::now() + Duration::days(1)).format("%d/%m/%Y").to_string();
    let formatted = format_human_date_time(&format!("{tomorrow} 09:00"));
    assert_eq!(formatted, "amanhã às 09:00");
}

#[test]
fn test_format_human_date_time_falls_back_to_date() {
    let today = Local::now().format("%d/%m/%Y").to_string();
    assert_eq!(format_human_date_time(&today), "hoje");
}

#[test]
fn test_format_long_date() {
    let value = CalendarDateTime::new(2024, 3, 15);
    assert_eq!(format_long_date(&value), "15 de março de 2024");
}

#[test]
fn test_format_long_date_out_of_range_month() {
    // Falls back to the numeric layout
    let value = CalendarDateTime::new(2024, 13, 1);
    assert_eq!(format_long_date(&value), "01/13/2024");
}
