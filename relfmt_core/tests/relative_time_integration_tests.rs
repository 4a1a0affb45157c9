//! Integration tests for relative time formatting through the public API

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};
use pretty_assertions::assert_eq;
use relfmt_core::prelude::*;

fn local(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
    Local
        .from_local_datetime(
            &NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, mi, 0)
                .unwrap(),
        )
        .earliest()
        .unwrap()
}

fn formatter_at(now: DateTime<Local>) -> RelativeTimeFormatter<FixedClock, TimeFormat> {
    RelativeTimeFormatter::new(FixedClock(now), TimeFormat::TwelveHour)
}

#[test]
fn test_listed_examples() {
    let now = local(2024, 6, 15, 12, 0);
    let f = formatter_at(now);

    assert_eq!(f.format(&now), "now");
    assert_eq!(f.format(&(now - Duration::seconds(30))), "now");
    assert_eq!(f.format(&(now - Duration::minutes(5))), "5 minutes ago");
    assert_eq!(f.format(&(now - Duration::minutes(1))), "a minute ago");
    assert_eq!(f.format(&(now - Duration::days(10))), "1 week ago");
    assert_eq!(f.format(&(now - Duration::days(400))), "1 year ago");
}

#[test]
fn test_late_yesterday_is_never_hours() {
    let start_of_yesterday = local(2024, 6, 14, 0, 0);
    let past = local(2024, 6, 14, 23, 0);
    assert_eq!(past.naive_local() - start_of_yesterday.naive_local(), Duration::hours(23));

    for hour in [1, 6, 12, 23] {
        let f = formatter_at(local(2024, 6, 15, hour, 0));
        assert_eq!(f.format(&past), "yesterday at 11:00 PM");
    }
}

#[test]
fn test_earlier_today_never_uses_days() {
    let now = local(2024, 6, 15, 23, 30);
    let f = formatter_at(now);

    for hour in 0..23 {
        let text = f.format(&local(2024, 6, 15, hour, 15));
        assert!(
            text.ends_with("hours ago") || text == "an hour ago",
            "{}:15 gave {:?}",
            hour,
            text
        );
    }
}

#[test]
fn test_other_time_zones_are_converted() {
    let now = local(2024, 6, 15, 12, 0);
    let past_utc = (now - Duration::minutes(42)).with_timezone(&chrono::Utc);
    assert_eq!(formatter_at(now).format(&past_utc), "42 minutes ago");
}

#[test]
fn test_epoch_millis() {
    let now = local(2024, 6, 15, 12, 0);
    let f = formatter_at(now);
    let three_days = (now - Duration::days(3)).timestamp_millis();
    assert_eq!(f.format_millis(three_days), "3 days ago");
    assert_eq!(f.format_millis(now.timestamp_millis() + 60_000), "now");
}

#[test]
fn test_idempotent_with_fixed_clock() {
    let now = local(2024, 6, 15, 12, 0);
    let f = formatter_at(now);
    let past = now - Duration::days(47);
    let first = f.format(&past);
    assert_eq!(first, "2 months ago");
    assert_eq!(f.format(&past), first);
}

#[test]
fn test_classify_then_render_with_custom_time_format() {
    let now = local(2024, 6, 15, 8, 0).naive_local();
    let past = local(2024, 6, 14, 17, 45).naive_local();

    let relative = RelativeTime::classify(past, now);
    assert_eq!(relative, RelativeTime::Yesterday(NaiveTime::from_hms_opt(17, 45, 0).unwrap()));

    let dotted = TimeFormat::custom("%H.%M").unwrap();
    assert_eq!(relative.render(&dotted), "yesterday at 17.45");
}

#[test]
fn test_parse_then_format() {
    let now = local(2024, 6, 15, 12, 0);
    let past = parse_timestamp("2024-06-13 09:00").unwrap();
    assert_eq!(formatter_at(now).format(&past), "2 days ago");
}

#[test]
fn test_system_relative_helpers() {
    assert_eq!(relative(&Local::now()), "now");
    assert_eq!(relative_millis(Local::now().timestamp_millis()), "now");
}
