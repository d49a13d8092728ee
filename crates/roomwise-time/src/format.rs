//! Display strings for the calendar views.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;

/// Full timestamp in the display zone, e.g. `"04/09/2025, 06:00:00 AM"`.
#[must_use]
pub fn format_full(instant: DateTime<Utc>, zone: Tz) -> String {
    instant
        .with_timezone(&zone)
        .format("%m/%d/%Y, %I:%M:%S %p")
        .to_string()
}

/// Clock time in the display zone, e.g. `"10:45 AM"`.
#[must_use]
pub fn format_clock(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format("%I:%M %p").to_string()
}

/// Date part of [`format_full`], e.g. `"04/09/2025"`.
#[must_use]
pub fn format_date(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format("%m/%d/%Y").to_string()
}

/// Label for an hour row of the day grid: `"12 AM"`, `"1 AM"`, ..., `"11 PM"`.
#[must_use]
pub fn hour_label(hour: u32) -> String {
    let hour = hour % 24;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{display} {period}")
}

/// Upper-case three letter weekday, e.g. `"MON"`.
#[must_use]
pub fn day_header(date: NaiveDate) -> String {
    weekday_short(date.weekday()).to_uppercase()
}

#[must_use]
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

const fn weekday_short(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
