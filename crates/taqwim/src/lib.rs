//! # Taqwim
//!
//! Gregorian <-> Hijri calendar conversion and a lookup of major Islamic
//! observances (start of Ramadan, the two Eids, Ashura, ...).
//!
//! The Hijri side is the arithmetical (tabular) Islamic calendar, so dates
//! are approximations that may differ from locally announced ones by a day
//! or two. A [`HijriCalendar`] with an adjustment compensates.
//!
//! This crate is a facade that re-exports functionality from the `taqwim` ecosystem.
//!
//! ## Usage
//!
//! ```rust
//! use taqwim::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let hijri = gregorian_to_hijri(date);
//! assert_eq!(hijri.to_string(), "1 Ramadan 1445 AH");
//! assert_eq!(get_major_events_for_date(date), vec!["Start of Ramadan"]);
//! ```

pub use taqwim_core::*;
