//! Major Islamic observances on the Hijri calendar.
//!
//! Events are fixed to a Hijri (month, day) pair and looked up by a linear
//! scan of [`EVENT_RULES`] in declaration order.

pub mod lookup;
pub mod table;

pub use lookup::{
    events_on, get_major_events_for_date, major_events_with, occurrences_in_year,
    upcoming_events, EventOccurrence, UpcomingEvents,
};
pub use table::EVENT_RULES;
pub use taqwim_types::{IslamicEvent, IslamicEventRule};
