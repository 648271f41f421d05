//! Hijri calendar engine: Gregorian <-> tabular Hijri conversion and the
//! major Islamic events lookup, with a chrono extension trait and a month
//! view for calendar grids.

pub mod extension;
pub mod month_view;

pub use taqwim_calendar::{
    checked_hijri_date, days_in_month, days_in_year, gregorian_to_hijri, hijri_to_gregorian,
    is_leap_year, CalendarConfig, CalendarConfigBuilder, HijriCalendar, HijriEpoch,
    MAX_ADJUSTMENT, STRICT_ADJUSTMENT,
};
pub use taqwim_events::{
    events_on, get_major_events_for_date, major_events_with, occurrences_in_year,
    upcoming_events, EventOccurrence, UpcomingEvents, EVENT_RULES,
};
pub use taqwim_types::{
    CalendarError, GregorianDate, HijriDate, HijriMonth, IslamicEvent, IslamicEventRule,
};

pub use extension::HijriDateExt;
pub use month_view::{month_days, HijriMonthDays, MonthDay};

/// Low-level JDN and tabular arithmetic.
pub mod arithmetic {
    pub use taqwim_calendar::jdn::{gregorian_to_jdn, jdn_to_gregorian, weekday};
    pub use taqwim_calendar::tabular::{
        hijri_to_jdn, jdn_to_hijri, ASTRONOMICAL_EPOCH_JDN, CIVIL_EPOCH_JDN, CYCLE_DAYS,
    };
}

pub mod prelude {
    pub use crate::extension::HijriDateExt;
    pub use crate::{gregorian_to_hijri, get_major_events_for_date, hijri_to_gregorian};
    pub use crate::{CalendarConfig, CalendarError, HijriCalendar, HijriEpoch};
    pub use crate::{GregorianDate, HijriDate, HijriMonth, IslamicEvent};
}
