// Date utility functions
// Wall-clock helpers for HH:MM strings and day headers

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

const TIME_FORMAT: &str = "%H:%M";

/// Parse a wall-clock `HH:MM` string. Surrounding whitespace is ignored.
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Format a time as `HH:MM`, dropping seconds.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Truncate to whole minutes.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

/// Add minutes on a 24h wall clock. Wraps past midnight.
pub fn add_minutes(time: NaiveTime, minutes: i64) -> NaiveTime {
    let (shifted, _) = time.overflowing_add_signed(Duration::minutes(minutes));
    shifted
}

pub fn combine(day: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    NaiveDateTime::new(day, time)
}

/// Header text for a day, e.g. "Sunday, March 10"
pub fn format_day_header(day: NaiveDate) -> String {
    day.format("%A, %B %d").to_string()
}
