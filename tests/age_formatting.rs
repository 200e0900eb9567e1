//! Age formatting tests

use chrono::{Duration, TimeZone, Utc};
use kubectl_tekton_imagebuild::format_age;
use kubectl_tekton_imagebuild::report::format_elapsed;

#[test]
fn test_age_units() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let cases = [
        (Duration::seconds(30), "30s"),
        (Duration::minutes(5), "5m"),
        (Duration::hours(3), "3h"),
        (Duration::days(2), "2d"),
        (Duration::days(45), "1mo"),
        (Duration::days(400), "1y"),
    ];

    for (elapsed, expected) in cases {
        assert_eq!(format_age(now - elapsed, now), expected, "{:?}", elapsed);
    }
}

#[test]
fn test_age_against_wall_clock() {
    let now = Utc::now();
    assert_eq!(format_age(now - Duration::minutes(5), now), "5m");
}

#[test]
fn test_exact_thresholds_fall_through() {
    assert_eq!(format_elapsed(Duration::minutes(1)), "60s");
    assert_eq!(format_elapsed(Duration::hours(1)), "60m");
    assert_eq!(format_elapsed(Duration::hours(24)), "24h");
    assert_eq!(format_elapsed(Duration::days(30)), "30d");
    assert_eq!(format_elapsed(Duration::days(365)), "12mo");

    assert_eq!(format_elapsed(Duration::hours(24) + Duration::seconds(1)), "1d");
    assert_eq!(format_elapsed(Duration::days(365) + Duration::seconds(1)), "1y");
}

#[test]
fn test_monotonic_within_bucket() {
    fn magnitude(s: &str) -> i64 {
        s.trim_end_matches(char::is_alphabetic).parse().unwrap()
    }

    // Walk the days bucket in 7 hour steps
    let mut previous = 0;
    let mut elapsed = Duration::hours(25);
    while elapsed <= Duration::days(30) {
        let formatted = format_elapsed(elapsed);
        assert!(formatted.ends_with('d'), "{}", formatted);
        let current = magnitude(&formatted);
        assert!(current >= previous);
        previous = current;
        elapsed = elapsed + Duration::hours(7);
    }
}
