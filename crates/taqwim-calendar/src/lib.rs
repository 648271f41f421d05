//! Gregorian <-> Hijri conversion.
//!
//! The Hijri side is the tabular (arithmetical) Islamic calendar: a 30-year
//! cycle with 11 leap years, anchored by default on the civil epoch
//! (JDN 1948440, Friday 16 July 622 Julian). Results are approximations of
//! the observed calendar and can differ from locally announced dates by one
//! or two days. A per-calendar [`CalendarConfig::adjustment`] lets callers
//! compensate.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taqwim_calendar::gregorian_to_hijri;
//!
//! let h = gregorian_to_hijri(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//! assert_eq!((h.year, h.month, h.day), (1445, 6, 19));
//! assert_eq!(h.month_name(), "Jumada al-thani");
//! ```

pub mod calendar;
pub mod config;
pub mod jdn;
pub mod tabular;

pub use calendar::{gregorian_to_hijri, hijri_to_gregorian, HijriCalendar};
pub use config::{CalendarConfig, CalendarConfigBuilder, MAX_ADJUSTMENT, STRICT_ADJUSTMENT};
pub use jdn::{gregorian_to_jdn, jdn_to_gregorian};
pub use tabular::{
    checked_hijri_date, days_in_month, days_in_year, hijri_to_jdn, is_leap_year, jdn_to_hijri,
    HijriEpoch,
};
pub use taqwim_types::{CalendarError, GregorianDate, HijriDate, HijriMonth};
