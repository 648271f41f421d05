//! Core value types shared by the taqwim crates.

pub mod date;
pub mod error;
pub mod event;
pub mod month;

pub use date::{GregorianDate, HijriDate};
pub use error::CalendarError;
pub use event::{IslamicEvent, IslamicEventRule};
pub use month::{month_name, HijriMonth};
