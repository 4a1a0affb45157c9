//! Gregorian calendar helpers.

use chrono::{Datelike, NaiveDate};

/// Determines whether a year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

/// Gets the number of days in a year.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Gets the number of days in a month (1 = January). `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return None,
    };
    Some(days)
}

/// 1-based day of the year.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Whole calendar days from `past` to `today`.
///
/// Negative when `past` is after `today`. Only the dates matter, so any time
/// yesterday is exactly one day before any time today.
pub fn days_between(past: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(past).num_days()
}
