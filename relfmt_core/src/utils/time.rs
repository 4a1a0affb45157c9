//! Time utilities for relfmt
//!
//! Provides human-readable relative timestamps ("5 minutes ago",
//! "yesterday at 3:07 PM", "2 weeks ago").
//!
//! Day-level distances are counted in local calendar days, not in 24 hour
//! blocks: 11pm yesterday and 1am yesterday are both "yesterday", and
//! anything earlier today stays in minutes or hours.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::utils::calendar::days_between;
use crate::utils::error::{RelfmtError, RelfmtResult};
use crate::utils::locale::{TimeFormat, TimeOfDayFormat};

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.0;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// System clock (production)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Elapsed time bucketed into the unit it is displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    Now,
    Minutes(i64),
    Hours(i64),
    /// Previous calendar day, with the local time of day it happened at.
    Yesterday(NaiveTime),
    Days(i64),
    Weeks(i64),
    Months(i64),
    Years(i64),
}

impl RelativeTime {
    /// Classify `past` against `now`, both local wall-clock values.
    ///
    /// Rules are checked in order and the first match wins. Anything at or
    /// after `now` is `Now`.
    pub fn classify(past: NaiveDateTime, now: NaiveDateTime) -> Self {
        let elapsed = now.signed_duration_since(past);
        let days_ago = days_between(past.date(), now.date());

        if elapsed.num_minutes() < 1 || days_ago < 0 {
            return RelativeTime::Now;
        }

        if days_ago == 0 {
            return if elapsed.num_hours() < 1 {
                RelativeTime::Minutes(elapsed.num_minutes())
            } else {
                RelativeTime::Hours(elapsed.num_hours())
            };
        }

        let days = days_ago as f64;
        match days_ago {
            1 => RelativeTime::Yesterday(past.time()),
            2..=6 => RelativeTime::Days(days_ago),
            7..=29 => RelativeTime::Weeks((days / DAYS_PER_WEEK).round() as i64),
            30..=364 => RelativeTime::Months((days / DAYS_PER_MONTH).round() as i64),
            _ => RelativeTime::Years((days / DAYS_PER_YEAR).round() as i64),
        }
    }

    /// Render as English text, using `time_format` for the "yesterday at" form.
    pub fn render(&self, time_format: &dyn TimeOfDayFormat) -> String {
        match *self {
            RelativeTime::Now => "now".to_string(),
            RelativeTime::Minutes(n) => ago_with_article(n, "minute"),
            RelativeTime::Hours(n) => ago_with_article(n, "hour"),
            RelativeTime::Yesterday(time) => {
                format!("yesterday at {}", time_format.format_time(time))
            }
            RelativeTime::Days(n) => format!("{} days ago", n),
            RelativeTime::Weeks(n) => ago(n, "week"),
            RelativeTime::Months(n) => ago(n, "month"),
            RelativeTime::Years(n) => ago(n, "year"),
        }
    }
}

/// "1 week ago", "3 weeks ago"
fn ago(value: i64, singular: &str) -> String {
    if value == 1 {
        format!("{} {} ago", value, singular)
    } else {
        format!("{} {}s ago", value, singular)
    }
}

/// "a minute ago", "an hour ago", "5 minutes ago"
fn ago_with_article(value: i64, singular: &str) -> String {
    if value == 1 {
        format!("{} {} ago", indefinite_article(singular), singular)
    } else {
        ago(value, singular)
    }
}

/// Words that start with a silent "h".
const SILENT_H: &[&str] = &["hour", "honest", "honor", "heir"];

fn indefinite_article(noun: &str) -> &'static str {
    let lower = noun.to_lowercase();
    if SILENT_H.iter().any(|prefix| lower.starts_with(prefix)) {
        return "an";
    }
    match lower.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Formats past timestamps relative to a clock.
pub struct RelativeTimeFormatter<C = SystemClock, F = TimeFormat> {
    clock: C,
    time_format: F,
}

impl RelativeTimeFormatter {
    /// System clock with the time-of-day style taken from the environment locale.
    pub fn system() -> Self {
        Self::new(SystemClock, TimeFormat::from_env())
    }
}

impl<C: Clock, F: TimeOfDayFormat> RelativeTimeFormatter<C, F> {
    pub fn new(clock: C, time_format: F) -> Self {
        Self { clock, time_format }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Describe `past` relative to the clock's current time.
    pub fn format<Tz: TimeZone>(&self, past: &DateTime<Tz>) -> String {
        let past = past.with_timezone(&Local).naive_local();
        let now = self.clock.now().naive_local();
        self.format_between(past, now)
    }

    /// Same as [`format`](Self::format) for epoch milliseconds. Values chrono
    /// cannot represent are treated as "now".
    pub fn format_millis(&self, epoch_ms: i64) -> String {
        match DateTime::from_timestamp_millis(epoch_ms) {
            Some(past) => self.format(&past),
            None => {
                tracing::warn!(epoch_ms, "timestamp out of range, treating as now");
                RelativeTime::Now.render(&self.time_format)
            }
        }
    }

    /// Pure core: both arguments are local wall-clock times.
    pub fn format_between(&self, past: NaiveDateTime, now: NaiveDateTime) -> String {
        if past > now {
            tracing::warn!(%past, %now, "timestamp is in the future, treating as now");
        }
        let relative = RelativeTime::classify(past, now);
        tracing::debug!(?relative, %past, %now, "classified relative time");
        relative.render(&self.time_format)
    }
}

/// Describe `past` relative to the system clock, e.g. "3 days ago".
pub fn relative<Tz: TimeZone>(past: &DateTime<Tz>) -> String {
    RelativeTimeFormatter::system().format(past)
}

/// [`relative`] for epoch milliseconds.
pub fn relative_millis(epoch_ms: i64) -> String {
    RelativeTimeFormatter::system().format_millis(epoch_ms)
}

const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse a timestamp given as epoch milliseconds, RFC 3339, or a local
/// `YYYY-MM-DD[ HH:MM[:SS]]`.
pub fn parse_timestamp(input: &str) -> RelfmtResult<DateTime<Local>> {
    let input = input.trim();
    let invalid = || RelfmtError::InvalidTimestamp(input.to_string());

    if let Ok(epoch_ms) = input.parse::<i64>() {
        return DateTime::from_timestamp_millis(epoch_ms)
            .map(|utc| utc.with_timezone(&Local))
            .ok_or_else(invalid);
    }

    if let Ok(fixed) = DateTime::parse_from_rfc3339(input) {
        return Ok(fixed.with_timezone(&Local));
    }

    let naive = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(invalid)?;

    // Wall-clock times inside a DST gap do not exist locally.
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(invalid)
}
