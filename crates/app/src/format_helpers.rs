/// Shared formatting utilities for the UI layer.
use chrono::{NaiveDate, NaiveTime};

/// Format a date as "Oct 30, 2023".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date as "Monday, Oct 30".
pub fn format_weekday_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// Convert a 24-hour "HH:MM" string to "9:00 AM".
///
/// Falls back to the input if it does not parse.
pub fn format_time_12h(time: &str) -> String {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time.to_string())
}

/// Convert an UPPERCASE status string to Title Case (e.g. "OVERDUE" → "Overdue").
pub fn format_status_title(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Time-of-day greeting for a 24-hour clock hour.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        _ => "Good Evening",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn dates_are_short_month_day_year() {
        assert_eq!(format_date_human(d(2023, 10, 30)), "Oct 30, 2023");
        assert_eq!(format_date_human(d(2023, 11, 2)), "Nov 2, 2023");
    }

    #[test]
    fn weekday_dates() {
        assert_eq!(format_weekday_date(d(2023, 10, 2)), "Monday, Oct 2");
    }

    #[test]
    fn twelve_hour_times() {
        assert_eq!(format_time_12h("09:00"), "9:00 AM");
        assert_eq!(format_time_12h("12:15"), "12:15 PM");
        assert_eq!(format_time_12h("00:30"), "12:30 AM");
        assert_eq!(format_time_12h("14:05"), "2:05 PM");
    }

    #[test]
    fn unparseable_time_is_returned_unchanged() {
        assert_eq!(format_time_12h("after lunch"), "after lunch");
    }

    #[test]
    fn status_title_case() {
        assert_eq!(format_status_title("OVERDUE"), "Overdue");
        assert_eq!(format_status_title(""), "");
    }

    #[test]
    fn greetings_follow_the_clock() {
        assert_eq!(greeting_for_hour(8), "Good Morning");
        assert_eq!(greeting_for_hour(13), "Good Afternoon");
        assert_eq!(greeting_for_hour(19), "Good Evening");
    }
}
