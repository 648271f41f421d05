use chrono::{Datelike, Duration, Local, NaiveDate};
use proptest::prelude::*;
use taqwim::arithmetic::gregorian_to_jdn;
use taqwim::prelude::*;

/// About fifty years either side, in days.
const FIFTY_YEARS: i64 = 18_262;

fn jdn_of(date: NaiveDate) -> i64 {
    gregorian_to_jdn(date.year(), date.month(), date.day())
}

fn around_today(offset: i64) -> NaiveDate {
    Local::now().date_naive() + Duration::days(offset)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Invariant: conversion is a pure function of the date.
    #[test]
    fn conversion_is_deterministic(offset in -FIFTY_YEARS..FIFTY_YEARS) {
        let date = around_today(offset);
        prop_assert_eq!(gregorian_to_hijri(date), gregorian_to_hijri(date));
        prop_assert_eq!(get_major_events_for_date(date), get_major_events_for_date(date));
    }

    /// Invariant: hijri_to_gregorian(gregorian_to_hijri(d)) lands within one day of d.
    #[test]
    fn round_trip_within_one_day(offset in -FIFTY_YEARS..FIFTY_YEARS) {
        let date = around_today(offset);
        let h = gregorian_to_hijri(date);
        let back = hijri_to_gregorian(h.year, h.month, h.day);
        let drift = gregorian_to_jdn(back.year, back.month, back.day) - jdn_of(date);
        prop_assert!(drift.abs() <= 1, "{} -> {} -> {} drifted {} days", date, h, back, drift);
    }

    /// Invariant: later Gregorian dates never map to earlier Hijri dates;
    /// going backwards in (month, day) only happens with a year increment.
    #[test]
    fn conversion_is_monotonic(offset in -FIFTY_YEARS..FIFTY_YEARS, gap in 1i64..400) {
        let d1 = around_today(offset);
        let d2 = d1 + Duration::days(gap);
        let h1 = gregorian_to_hijri(d1);
        let h2 = gregorian_to_hijri(d2);

        if h2.year == h1.year {
            prop_assert!((h2.month, h2.day) > (h1.month, h1.day), "{} !> {}", h2, h1);
        } else {
            prop_assert!(h2.year > h1.year, "{} before {}", h2, h1);
        }
    }

    /// Invariant: converted dates are always in range.
    #[test]
    fn output_is_in_range(offset in -FIFTY_YEARS..FIFTY_YEARS, adjustment in -30i64..=30) {
        let cal = HijriCalendar::new(CalendarConfig::new().adjustment(adjustment));
        let h = cal.to_hijri(around_today(offset));
        prop_assert!((1..=12).contains(&h.month));
        prop_assert!(h.day >= 1 && h.day <= taqwim::days_in_month(h.year, h.month).unwrap_or(0));
    }

    /// Invariant: an adjusted calendar inverts its own adjustment exactly.
    #[test]
    fn adjusted_round_trip(offset in -FIFTY_YEARS..FIFTY_YEARS, adjustment in -30i64..=30) {
        let date = around_today(offset);
        let cal = HijriCalendar::new(CalendarConfig::new().adjustment(adjustment));
        let h = cal.to_hijri(date);
        prop_assert_eq!(cal.to_gregorian(h.year, h.month, h.day), GregorianDate::from(date));
    }

    /// Invariant: every event label returned matches the converted (month, day).
    #[test]
    fn events_match_their_key(offset in -FIFTY_YEARS..FIFTY_YEARS) {
        let date = around_today(offset);
        let h = gregorian_to_hijri(date);
        let labels = get_major_events_for_date(date);
        for rule in taqwim::EVENT_RULES {
            let listed = labels.contains(&rule.label());
            prop_assert_eq!(listed, rule.matches(h.month, h.day));
        }
    }
}

#[test]
fn consecutive_days_step_by_one() {
    let mut date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    let mut prev = gregorian_to_hijri(date);

    while date < end {
        date = date.succ_opt().unwrap();
        let h = gregorian_to_hijri(date);
        let expected = if h.year == prev.year + 1 {
            HijriDate::new(h.year, 1, 1)
        } else if h.month == prev.month + 1 {
            HijriDate::new(prev.year, h.month, 1)
        } else {
            HijriDate::new(prev.year, prev.month, prev.day + 1)
        };
        assert_eq!(h, expected, "after {prev} on {date}");
        prev = h;
    }
}
