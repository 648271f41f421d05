//! Julian Day Number arithmetic for the proleptic Gregorian calendar.
//!
//! JDN values are whole days; day `n` is the day whose noon is Julian Date
//! `n.0`. All arithmetic is `i64` with floor division, so astronomical
//! years (year 0 = 1 BCE, negative years before that) are handled.

use chrono::Weekday;
use taqwim_types::GregorianDate;

/// Days between JDN 0 and 0000-03-01 in the March-based year count.
const MARCH_EPOCH_OFFSET: i64 = 1_721_119;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Converts a Gregorian calendar date to its Julian Day Number.
///
/// January and February count as months 13 and 14 of the previous year so
/// the leap day lands at the end of the computational year. Inputs are not
/// validated: day 31 of a 30-day month yields the JDN of the next month's
/// first day, and out-of-range months give a consistent but meaningless
/// result.
pub fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let mut y = i64::from(year);
    let mut m = i64::from(month);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + (153 * (m - 3) + 2).div_euclid(5)
        + i64::from(day)
        + MARCH_EPOCH_OFFSET
}

/// Converts a Julian Day Number back to a Gregorian date.
pub fn jdn_to_gregorian(jdn: i64) -> GregorianDate {
    let a = jdn + 32_044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    let d = (4 * c + 3).div_euclid(1_461);
    let e = c - (1_461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);

    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = 100 * b + d - 4_800 + m.div_euclid(10);

    // day is 1..=31 and month 1..=12 by construction
    GregorianDate::new(saturate_i32(year), month as u32, day as u32)
}

/// Day of the week for a JDN.
pub fn weekday(jdn: i64) -> Weekday {
    WEEKDAYS[jdn.rem_euclid(7) as usize]
}

pub(crate) fn saturate_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_reference_jdns() {
        assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(gregorian_to_jdn(2024, 1, 1), 2_460_311);
        assert_eq!(gregorian_to_jdn(1858, 11, 17), 2_400_001);
        assert_eq!(gregorian_to_jdn(-4713, 11, 24), 0);
    }

    #[test]
    fn test_leap_day_handling() {
        assert_eq!(gregorian_to_jdn(2024, 3, 1) - gregorian_to_jdn(2024, 2, 28), 2);
        assert_eq!(gregorian_to_jdn(2023, 3, 1) - gregorian_to_jdn(2023, 2, 28), 1);
        assert_eq!(gregorian_to_jdn(1900, 3, 1) - gregorian_to_jdn(1900, 2, 28), 1);
        assert_eq!(gregorian_to_jdn(2000, 3, 1) - gregorian_to_jdn(2000, 2, 28), 2);
    }

    #[test]
    fn test_unchecked_day_overflows_into_next_month() {
        assert_eq!(gregorian_to_jdn(2023, 4, 31), gregorian_to_jdn(2023, 5, 1));
    }

    #[test]
    fn test_total_for_garbage_inputs() {
        let _ = gregorian_to_jdn(i32::MAX, u32::MAX, u32::MAX);
        let _ = gregorian_to_jdn(i32::MIN, 0, 0);
        let _ = jdn_to_gregorian(i64::from(i32::MIN) * 400);
    }

    #[test]
    fn test_inverse_matches_chrono() {
        let mut d = NaiveDate::from_ymd_opt(1600, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2400, 12, 31).unwrap();
        while d <= end {
            let jdn = gregorian_to_jdn(d.year(), d.month(), d.day());
            assert_eq!(jdn_to_gregorian(jdn), GregorianDate::from(d), "JDN {jdn}");
            d = d + chrono::Duration::days(37);
        }
    }

    #[test]
    fn test_negative_years_round_trip() {
        for jdn in [0, 1, 59, 60, 1_000_000, 1_721_059, 1_721_060] {
            let g = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(g.year, g.month, g.day), jdn);
        }
        assert_eq!(jdn_to_gregorian(0), GregorianDate::new(-4713, 11, 24));
    }

    #[test]
    fn test_weekday() {
        assert_eq!(weekday(2_451_545), Weekday::Sat);
        assert_eq!(weekday(gregorian_to_jdn(2024, 3, 11)), Weekday::Mon);
    }
}
