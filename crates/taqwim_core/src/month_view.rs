//! Day-by-day view of one Hijri month, as needed by calendar grids and the
//! date converter.

use chrono::Weekday;
use serde::Serialize;
use taqwim_calendar::jdn::{jdn_to_gregorian, weekday};
use taqwim_calendar::tabular::hijri_to_jdn;
use taqwim_calendar::{days_in_month, HijriCalendar};
use taqwim_events::events_on;
use taqwim_types::{CalendarError, GregorianDate, HijriDate};

/// One day of a Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthDay {
    pub hijri: HijriDate,
    pub gregorian: GregorianDate,
    pub weekday: Weekday,
    /// Whether a major event falls on this day.
    pub has_event: bool,
}

/// Iterator over the days of a Hijri month.
#[derive(Debug, Clone)]
pub struct HijriMonthDays {
    year: i32,
    month: u32,
    next_day: u32,
    len: u32,
    first_jdn: i64,
}

impl Iterator for HijriMonthDays {
    type Item = MonthDay;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_day > self.len {
            return None;
        }
        let day = self.next_day;
        self.next_day += 1;

        let jdn = self.first_jdn + i64::from(day - 1);
        Some(MonthDay {
            hijri: HijriDate::new(self.year, self.month, day),
            gregorian: jdn_to_gregorian(jdn),
            weekday: weekday(jdn),
            has_event: !events_on(self.month, day).is_empty(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len + 1).saturating_sub(self.next_day) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HijriMonthDays {}

/// Days of Hijri `month` of `year` under `calendar`.
///
/// # Errors
/// `InvalidHijriDate` if `month` is outside 1-12.
pub fn month_days(calendar: &HijriCalendar, year: i32, month: u32) -> Result<HijriMonthDays, CalendarError> {
    let len = days_in_month(year, month)
        .ok_or(CalendarError::InvalidHijriDate { year, month, day: 1 })?;
    let config = calendar.config();
    let first_jdn = hijri_to_jdn(year, month, 1, config.epoch) - config.adjustment;

    Ok(HijriMonthDays { year, month, next_day: 1, len, first_jdn })
}
