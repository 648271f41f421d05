//! Tabular Islamic calendar.
//!
//! Months alternate 30 and 29 days starting with Muharram at 30; Dhu
//! al-Hijjah gains a 30th day in leap years. Years 2, 5, 7, 10, 13, 16, 18,
//! 21, 24, 26 and 29 of every 30-year cycle are leap years, which puts
//! 10631 days in each cycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use taqwim_types::{CalendarError, HijriDate};

use crate::jdn::saturate_i32;

/// JDN of 1 Muharram 1 AH under the civil epoch (Friday 16 July 622 Julian).
pub const CIVIL_EPOCH_JDN: i64 = 1_948_440;
/// JDN of 1 Muharram 1 AH under the astronomical epoch (Thursday 15 July 622 Julian).
pub const ASTRONOMICAL_EPOCH_JDN: i64 = 1_948_439;
/// Days in one 30-year cycle.
pub const CYCLE_DAYS: i64 = 10_631;

/// Anchor day of the tabular calendar.
///
/// Switching epoch shifts every Hijri date by exactly one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HijriEpoch {
    /// Friday epoch, the common civil convention.
    #[default]
    Civil,
    /// Thursday epoch used by astronomers.
    Astronomical,
}

impl HijriEpoch {
    pub fn jdn(self) -> i64 {
        match self {
            HijriEpoch::Civil => CIVIL_EPOCH_JDN,
            HijriEpoch::Astronomical => ASTRONOMICAL_EPOCH_JDN,
        }
    }
}

impl fmt::Display for HijriEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HijriEpoch::Civil => f.write_str("civil"),
            HijriEpoch::Astronomical => f.write_str("astronomical"),
        }
    }
}

impl FromStr for HijriEpoch {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "civil" => Ok(HijriEpoch::Civil),
            "astronomical" => Ok(HijriEpoch::Astronomical),
            _ => Err(CalendarError::parse(s, "expected 'civil' or 'astronomical'")),
        }
    }
}

/// Whether `year` AH has 355 days.
pub fn is_leap_year(year: i32) -> bool {
    (14 + 11 * i64::from(year)).rem_euclid(30) < 11
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 355 } else { 354 }
}

/// Length of a Hijri month, `None` for a month outside 1-12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        12 => Some(if is_leap_year(year) { 30 } else { 29 }),
        1..=11 => Some(if month % 2 == 1 { 30 } else { 29 }),
        _ => None,
    }
}

/// Validating constructor for a tabular Hijri date.
///
/// # Errors
/// `InvalidHijriDate` if the month is outside 1-12 or the day is 0 or past
/// the end of that month in that year.
pub fn checked_hijri_date(year: i32, month: u32, day: u32) -> Result<HijriDate, CalendarError> {
    match days_in_month(year, month) {
        Some(len) if (1..=len).contains(&day) => Ok(HijriDate::new(year, month, day)),
        _ => Err(CalendarError::InvalidHijriDate { year, month, day }),
    }
}

/// Days from 1 Muharram 1 AH to 1 Muharram of `year`.
fn year_start_offset(year: i64) -> i64 {
    354 * (year - 1) + (3 + 11 * year).div_euclid(30)
}

/// Days from 1 Muharram to the first of `month`, i.e. ceil(29.5 * (month - 1)).
fn month_start_offset(month: i64) -> i64 {
    (59 * (month - 1) + 1).div_euclid(2)
}

/// Converts a Hijri date to its Julian Day Number.
///
/// Unchecked: a day past the end of a month continues into the next one.
pub fn hijri_to_jdn(year: i32, month: u32, day: u32, epoch: HijriEpoch) -> i64 {
    epoch.jdn() - 1
        + year_start_offset(i64::from(year))
        + month_start_offset(i64::from(month))
        + i64::from(day)
}

/// Converts a Julian Day Number to a tabular Hijri date.
pub fn jdn_to_hijri(jdn: i64, epoch: HijriEpoch) -> HijriDate {
    let year_start = |year: i64| epoch.jdn() + year_start_offset(year);

    let elapsed = jdn - epoch.jdn();
    let mut year = (30 * elapsed + 10_646).div_euclid(CYCLE_DAYS);
    while jdn < year_start(year) {
        year -= 1;
    }
    while jdn >= year_start(year + 1) {
        year += 1;
    }

    let day_of_year = jdn - year_start(year);
    let month = ((2 * day_of_year).div_euclid(59) + 1).min(12);
    let day = day_of_year - month_start_offset(month) + 1;

    // month is 1..=12 and day 1..=30 by construction
    HijriDate::new(saturate_i32(year), month as u32, day as u32)
}
