//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use taqwim_calendar::HijriCalendar;
use taqwim_events::{events_on, major_events_with, EventOccurrence};
use taqwim_types::{HijriDate, IslamicEvent};

/// How far ahead [`HijriDateExt::next_event`] searches. Longer than a Hijri year.
pub const EVENT_SEARCH_DAYS: u32 = 400;

/// Extends `NaiveDate` with Hijri calendar queries.
pub trait HijriDateExt {
    /// Hijri date under the default civil tabular calendar.
    fn to_hijri(&self) -> HijriDate;

    /// Hijri date under a configured calendar.
    fn to_hijri_with(&self, calendar: &HijriCalendar) -> HijriDate;

    /// Labels of the major events on this date (default calendar).
    fn major_events(&self) -> Vec<&'static str>;

    /// Returns true inside Ramadan (default calendar).
    fn is_ramadan(&self) -> bool;

    /// Finds the next date strictly after this one carrying an event
    /// (up to 400 days ahead).
    fn next_event(&self, calendar: &HijriCalendar) -> Option<EventOccurrence>;

    /// Finds the next occurrence of a specific event strictly after this date.
    fn next_occurrence_of(&self, event: IslamicEvent, calendar: &HijriCalendar) -> Option<NaiveDate>;
}

impl HijriDateExt for NaiveDate {
    fn to_hijri(&self) -> HijriDate {
        taqwim_calendar::gregorian_to_hijri(*self)
    }

    fn to_hijri_with(&self, calendar: &HijriCalendar) -> HijriDate {
        calendar.to_hijri(*self)
    }

    fn major_events(&self) -> Vec<&'static str> {
        major_events_with(&HijriCalendar::default(), *self)
    }

    fn is_ramadan(&self) -> bool {
        self.to_hijri().is_ramadan()
    }

    fn next_event(&self, calendar: &HijriCalendar) -> Option<EventOccurrence> {
        let mut d = *self;
        for _ in 0..EVENT_SEARCH_DAYS {
            d = d.succ_opt()?;
            let hijri = calendar.to_hijri(d);
            if let Some(event) = events_on(hijri.month, hijri.day).first() {
                return Some(EventOccurrence { event: *event, hijri, gregorian: d.into() });
            }
        }
        tracing::debug!(from = %self, "no event within search window");
        None
    }

    fn next_occurrence_of(&self, event: IslamicEvent, calendar: &HijriCalendar) -> Option<NaiveDate> {
        let mut d = *self;
        for _ in 0..EVENT_SEARCH_DAYS {
            d = d.succ_opt()?;
            let hijri = calendar.to_hijri(d);
            if events_on(hijri.month, hijri.day).contains(&event) {
                return Some(d);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taqwim_calendar::CalendarConfig;

    #[test]
    fn test_extension_trait() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(date.to_hijri(), HijriDate::new(1445, 9, 1));
        assert!(date.is_ramadan());
        assert_eq!(date.major_events(), vec!["Start of Ramadan"]);
    }

    #[test]
    fn test_to_hijri_with_custom_calendar() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let cal = HijriCalendar::new(CalendarConfig::new().adjustment(-1));
        assert_eq!(date.to_hijri_with(&cal), HijriDate::new(1445, 8, 29));
    }

    #[test]
    fn test_next_event_is_strictly_after() {
        let ramadan = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let next = ramadan.next_event(&HijriCalendar::default()).unwrap();
        assert_eq!(next.event, IslamicEvent::LaylatAlQadr);
        assert_eq!(next.hijri, HijriDate::new(1445, 9, 27));
    }

    #[test]
    fn test_next_occurrence_of() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let eid = date.next_occurrence_of(IslamicEvent::EidAlFitr, &HijriCalendar::default());
        assert_eq!(eid, NaiveDate::from_ymd_opt(2024, 4, 10));
    }

    #[test]
    fn test_next_event_at_end_of_range() {
        assert!(NaiveDate::MAX.next_event(&HijriCalendar::default()).is_none());
    }
}
