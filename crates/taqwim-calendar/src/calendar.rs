use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use taqwim_types::{CalendarError, GregorianDate, HijriDate};

use crate::config::CalendarConfig;
use crate::jdn::{gregorian_to_jdn, jdn_to_gregorian};
use crate::tabular::{checked_hijri_date, hijri_to_jdn, jdn_to_hijri};

/// Tabular Hijri calendar with a fixed epoch and sighting adjustment.
///
/// Every method is a pure function of its arguments and the configuration,
/// so a calendar can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HijriCalendar {
    config: CalendarConfig,
}

impl HijriCalendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config: config.normalized() }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Converts a Gregorian date to its approximate Hijri date.
    ///
    /// Only the calendar fields of `date` are read, so any time-of-day or
    /// timezone attached to it cannot move the result across a day boundary.
    pub fn to_hijri<D: Datelike>(&self, date: D) -> HijriDate {
        self.hijri_of(GregorianDate::from_datelike(&date))
    }

    /// Converts a plain Gregorian triple. Unchecked, total.
    pub fn hijri_of(&self, date: GregorianDate) -> HijriDate {
        let jdn = gregorian_to_jdn(date.year, date.month, date.day) + self.config.adjustment;
        jdn_to_hijri(jdn, self.config.epoch)
    }

    /// Best-effort Gregorian equivalent of a Hijri date. Unchecked, total.
    pub fn to_gregorian(&self, year: i32, month: u32, day: u32) -> GregorianDate {
        let jdn = hijri_to_jdn(year, month, day, self.config.epoch) - self.config.adjustment;
        jdn_to_gregorian(jdn)
    }

    /// Validating variant of [`HijriCalendar::to_gregorian`] returning a chrono date.
    ///
    /// # Errors
    /// `InvalidHijriDate` for a day that does not exist in the tabular
    /// calendar, `InvalidGregorianDate` if the result is outside chrono's range.
    pub fn to_naive_date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        let hijri = checked_hijri_date(year, month, day)?;
        self.to_gregorian(hijri.year, hijri.month, hijri.day).to_naive_date()
    }
}

impl From<CalendarConfig> for HijriCalendar {
    fn from(config: CalendarConfig) -> Self {
        Self::new(config)
    }
}

/// Converts a Gregorian date to its approximate Hijri date using the civil
/// tabular calendar with no adjustment.
pub fn gregorian_to_hijri<D: Datelike>(date: D) -> HijriDate {
    HijriCalendar::default().to_hijri(date)
}

/// Best-effort inverse of [`gregorian_to_hijri`].
///
/// Inputs are not validated; a day past the end of a Hijri month rolls into
/// the following month.
pub fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> GregorianDate {
    HijriCalendar::default().to_gregorian(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabular::HijriEpoch;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    #[test]
    fn test_golden_anchor() {
        let h = gregorian_to_hijri(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(h, HijriDate::new(1445, 6, 19));
        assert_eq!(h.month_name(), "Jumada al-thani");
    }

    #[test]
    fn test_time_of_day_is_irrelevant() {
        let midnight = NaiveDateTime::parse_from_str("2024-03-11 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let noon = NaiveDateTime::parse_from_str("2024-03-11 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let late = Utc.with_ymd_and_hms(2024, 3, 11, 23, 59, 59).unwrap();
        assert_eq!(gregorian_to_hijri(midnight), gregorian_to_hijri(noon));
        assert_eq!(gregorian_to_hijri(late), HijriDate::new(1445, 9, 1));
    }

    #[test]
    fn test_inverse() {
        assert_eq!(hijri_to_gregorian(1445, 6, 19), GregorianDate::new(2024, 1, 1));
        assert_eq!(hijri_to_gregorian(1445, 9, 1), GregorianDate::new(2024, 3, 11));
    }

    #[test]
    fn test_adjustment_shifts_both_ways() {
        let cal = HijriCalendar::new(CalendarConfig::new().adjustment(-1));
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(cal.to_hijri(date), HijriDate::new(1445, 8, 29));
        assert_eq!(cal.to_gregorian(1445, 9, 1), GregorianDate::new(2024, 3, 12));
    }

    #[test]
    fn test_epoch_choice() {
        let cal = HijriCalendar::new(CalendarConfig::new().epoch(HijriEpoch::Astronomical));
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(cal.to_hijri(date), HijriDate::new(1445, 6, 20));
    }

    #[test]
    fn test_new_normalizes_out_of_range_adjustment() {
        let config = CalendarConfig { adjustment: 500, ..Default::default() };
        assert_eq!(HijriCalendar::new(config).config().adjustment, 30);
    }

    #[test]
    fn test_deserialized_calendar_is_clamped() {
        let cal: HijriCalendar =
            serde_json::from_str(r#"{"config":{"adjustment":500,"epoch":"civil"}}"#).unwrap();
        assert_eq!(cal.config().adjustment, 30);

        let json = format!(r#"{{"config":{{"adjustment":{}}}}}"#, i64::MAX);
        let cal: HijriCalendar = serde_json::from_str(&json).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(cal.to_hijri(date), gregorian_to_hijri(date + chrono::Duration::days(30)));
    }

    #[test]
    fn test_to_naive_date_validates() {
        let cal = HijriCalendar::default();
        assert_eq!(
            cal.to_naive_date(1445, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 4, 10).unwrap()
        );
        assert!(matches!(
            cal.to_naive_date(1445, 2, 30),
            Err(CalendarError::InvalidHijriDate { .. })
        ));
    }

    #[test]
    fn test_unchecked_inverse_rolls_over() {
        assert_eq!(hijri_to_gregorian(1445, 2, 30), hijri_to_gregorian(1445, 3, 1));
    }
}
