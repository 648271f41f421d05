use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use smallvec::SmallVec;
use taqwim_calendar::HijriCalendar;
use taqwim_types::{GregorianDate, HijriDate, IslamicEvent, IslamicEventRule};

use crate::table::EVENT_RULES;

/// Events whose (month, day) key matches, in table order.
pub fn events_on(hijri_month: u32, hijri_day: u32) -> SmallVec<[IslamicEvent; 2]> {
    EVENT_RULES
        .iter()
        .filter(|rule| rule.matches(hijri_month, hijri_day))
        .map(|rule| rule.event)
        .collect()
}

/// Labels of the major events falling on `date` under `calendar`.
pub fn major_events_with<D: Datelike>(calendar: &HijriCalendar, date: D) -> Vec<&'static str> {
    let hijri = calendar.to_hijri(date);
    EVENT_RULES
        .iter()
        .filter(|rule| rule.matches(hijri.month, hijri.day))
        .map(IslamicEventRule::label)
        .collect()
}

/// Labels of the major events falling on `date`, using the default civil
/// tabular calendar. Empty when the date carries no event.
pub fn get_major_events_for_date<D: Datelike>(date: D) -> Vec<&'static str> {
    major_events_with(&HijriCalendar::default(), date)
}

/// An event placed on both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventOccurrence {
    pub event: IslamicEvent,
    pub hijri: HijriDate,
    pub gregorian: GregorianDate,
}

impl EventOccurrence {
    pub fn label(&self) -> &'static str {
        self.event.label()
    }
}

/// Every table event of Hijri `year` with its Gregorian date, in table order.
pub fn occurrences_in_year(calendar: &HijriCalendar, year: i32) -> Vec<EventOccurrence> {
    let occurrences: Vec<EventOccurrence> = EVENT_RULES
        .iter()
        .map(|rule| EventOccurrence {
            event: rule.event,
            hijri: HijriDate::new(year, rule.hijri_month, rule.hijri_day),
            gregorian: calendar.to_gregorian(year, rule.hijri_month, rule.hijri_day),
        })
        .collect();
    tracing::debug!(year, count = occurrences.len(), "event occurrences resolved");
    occurrences
}

/// Lazy iterator over the events in a Gregorian date range, oldest first.
#[derive(Debug)]
pub struct UpcomingEvents {
    calendar: HijriCalendar,
    current: Option<NaiveDate>,
    end: NaiveDate,
    pending: smallvec::IntoIter<[EventOccurrence; 2]>,
}

impl Iterator for UpcomingEvents {
    type Item = EventOccurrence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(occurrence) = self.pending.next() {
                return Some(occurrence);
            }

            let date = self.current.filter(|d| *d <= self.end)?;
            self.current = date.succ_opt();

            let hijri = self.calendar.to_hijri(date);
            let found: SmallVec<[EventOccurrence; 2]> = events_on(hijri.month, hijri.day)
                .into_iter()
                .map(|event| EventOccurrence { event, hijri, gregorian: date.into() })
                .collect();
            self.pending = found.into_iter();
        }
    }
}

/// Events between `start` and `end`, both inclusive.
pub fn upcoming_events(calendar: HijriCalendar, start: NaiveDate, end: NaiveDate) -> UpcomingEvents {
    UpcomingEvents {
        calendar,
        current: Some(start),
        end,
        pending: SmallVec::new().into_iter(),
    }
}
