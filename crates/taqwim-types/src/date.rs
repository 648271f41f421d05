use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;
use crate::month::{month_name, HijriMonth};

/// A proleptic Gregorian calendar date as a plain (year, month, day) triple.
///
/// No time-of-day or timezone is carried, so conversions built on this type
/// cannot drift across a day boundary. Fields are not validated; use
/// [`GregorianDate::to_naive_date`] to check a triple against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl GregorianDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Reads the calendar fields of any chrono date or datetime.
    ///
    /// For a zoned `DateTime` this is the local calendar date; the clock time
    /// is ignored entirely.
    pub fn from_datelike<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Converts to a chrono date.
    ///
    /// # Errors
    /// `InvalidGregorianDate` if the triple is not a real day or is outside
    /// chrono's supported range.
    pub fn to_naive_date(&self) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).ok_or(
            CalendarError::InvalidGregorianDate {
                year: self.year,
                month: self.month,
                day: self.day,
            },
        )
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_datelike(&date)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD`, rejecting days that do not exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(GregorianDate::from)
            .map_err(|e| CalendarError::parse(s, e.to_string()))
    }
}

/// An approximate Hijri (Islamic lunar) date.
///
/// A computed projection of a Gregorian date: month is 1-12 and day 1-30
/// when produced by the converter. Serializes with its `month_name`; the
/// name is ignored when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Builds a Hijri date without validation.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Typed month, `None` for an out-of-range month number.
    pub fn hijri_month(&self) -> Option<HijriMonth> {
        HijriMonth::from_number(self.month)
    }

    pub fn is_ramadan(&self) -> bool {
        self.month == HijriMonth::Ramadan.number()
    }
}

impl Serialize for HijriDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HijriDate", 4)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day", &self.day)?;
        state.serialize_field("month_name", self.month_name())?;
        state.end()
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} AH", self.day, self.month_name(), self.year)
    }
}
