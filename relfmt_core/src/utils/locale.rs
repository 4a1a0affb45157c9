//! Time-of-day formatting for the "yesterday at ..." form.
//!
//! The relative formatter only needs "render this wall-clock time the way the
//! user expects", so that capability is the [`TimeOfDayFormat`] trait. The
//! stock implementation is [`TimeFormat`], which picks a 12 or 24 hour clock
//! from a locale tag or accepts a custom strftime pattern.

use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;

use crate::utils::error::{RelfmtError, RelfmtResult};

const TWELVE_HOUR_PATTERN: &str = "%-I:%M %p";
const TWENTY_FOUR_HOUR_PATTERN: &str = "%H:%M";

/// English locales that conventionally use a 12 hour clock.
const TWELVE_HOUR_LOCALES: &[&str] = &["en", "en_us", "en_ca", "en_au", "en_nz", "en_ph", "en_in"];

/// Renders a wall-clock time of day.
pub trait TimeOfDayFormat: Send + Sync {
    fn format_time(&self, time: NaiveTime) -> String;
}

impl<F> TimeOfDayFormat for F
where
    F: Fn(NaiveTime) -> String + Send + Sync,
{
    fn format_time(&self, time: NaiveTime) -> String {
        self(time)
    }
}

/// Time-of-day style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// "3:07 PM"
    TwelveHour,
    /// "15:07"
    #[default]
    TwentyFourHour,
    /// A validated strftime pattern, e.g. `"%H:%M:%S"`.
    Custom(String),
}

impl TimeFormat {
    /// Build a custom pattern, rejecting anything chrono would fail to render.
    ///
    /// Date and offset specifiers (`%Y`, `%d`, `%Z`, ...) parse fine but have
    /// nothing to draw from a bare time of day, so the pattern is test-rendered.
    pub fn custom(pattern: impl Into<String>) -> RelfmtResult<Self> {
        let pattern = pattern.into();
        if pattern.trim().is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error))
            || render(NaiveTime::default(), &pattern).is_err()
        {
            return Err(RelfmtError::InvalidTimeFormat(pattern));
        }
        Ok(TimeFormat::Custom(pattern))
    }

    /// Pick a clock style from a POSIX or BCP 47 locale tag such as
    /// `en_US.UTF-8`, `de-DE` or `C`.
    pub fn for_locale(tag: &str) -> Self {
        let base = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_")
            .to_lowercase();

        if TWELVE_HOUR_LOCALES.contains(&base.as_str()) {
            TimeFormat::TwelveHour
        } else {
            TimeFormat::TwentyFourHour
        }
    }

    /// Resolve from `LC_ALL`, `LC_TIME` then `LANG`. Falls back to 24 hour.
    pub fn from_env() -> Self {
        match locale_from_env() {
            Some(tag) => Self::for_locale(&tag),
            None => TimeFormat::default(),
        }
    }

    fn pattern(&self) -> &str {
        match self {
            TimeFormat::TwelveHour => TWELVE_HOUR_PATTERN,
            TimeFormat::TwentyFourHour => TWENTY_FOUR_HOUR_PATTERN,
            TimeFormat::Custom(pattern) => pattern,
        }
    }
}

/// First non-empty locale variable, in POSIX precedence order.
pub fn locale_from_env() -> Option<String> {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

fn render(time: NaiveTime, pattern: &str) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{}", time.format(pattern))?;
    Ok(out)
}

impl TimeOfDayFormat for TimeFormat {
    fn format_time(&self, time: NaiveTime) -> String {
        // `Custom` can be built directly, bypassing `custom()`
        render(time, self.pattern()).unwrap_or_else(|_| {
            tracing::warn!(pattern = self.pattern(), "time format cannot render a time of day");
            time.format(TWENTY_FOUR_HOUR_PATTERN).to_string()
        })
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFormat::TwelveHour => write!(f, "12h"),
            TimeFormat::TwentyFourHour => write!(f, "24h"),
            TimeFormat::Custom(pattern) => write!(f, "{}", pattern),
        }
    }
}

impl FromStr for TimeFormat {
    type Err = RelfmtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "12h" | "12" => Ok(TimeFormat::TwelveHour),
            "24h" | "24" => Ok(TimeFormat::TwentyFourHour),
            _ => TimeFormat::custom(s),
        }
    }
}
