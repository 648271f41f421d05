use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the fallible taqwim operations.
///
/// The core conversions are total and never produce these; they come from
/// validating constructors, configuration and parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarError {
    /// Hijri month outside 1-12 or day past the end of the month.
    #[error("Invalid Hijri date {year}-{month:02}-{day:02}")]
    InvalidHijriDate { year: i32, month: u32, day: u32 },

    /// Gregorian triple that does not name a real (or chrono-representable) day.
    #[error("Invalid Gregorian date {year}-{month:02}-{day:02}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Unparseable textual input.
    #[error("Failed to parse '{input}': {reason}")]
    Parse { input: String, reason: String },
}

impl CalendarError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates a `Parse` error.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse { input: input.into(), reason: reason.into() }
    }
}
