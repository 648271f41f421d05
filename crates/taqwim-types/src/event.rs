use serde::{Deserialize, Serialize};
use std::fmt;

/// A major observance fixed to a Hijri month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IslamicEvent {
    /// 1 Muharram.
    IslamicNewYear,
    /// 10 Muharram.
    Ashura,
    /// 12 Rabi' al-awwal.
    Mawlid,
    /// 27 Rajab.
    IsraMiraj,
    /// 15 Sha'ban.
    MidShaban,
    /// 1 Ramadan.
    RamadanStart,
    /// 27 Ramadan.
    LaylatAlQadr,
    /// 1 Shawwal.
    EidAlFitr,
    /// 9 Dhu al-Hijjah.
    Arafah,
    /// 10 Dhu al-Hijjah.
    EidAlAdha,
}

impl IslamicEvent {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            IslamicEvent::IslamicNewYear => "Islamic New Year",
            IslamicEvent::Ashura => "Day of Ashura",
            IslamicEvent::Mawlid => "Mawlid an-Nabi",
            IslamicEvent::IsraMiraj => "Isra and Mi'raj",
            IslamicEvent::MidShaban => "Mid-Sha'ban",
            IslamicEvent::RamadanStart => "Start of Ramadan",
            IslamicEvent::LaylatAlQadr => "Laylat al-Qadr",
            IslamicEvent::EidAlFitr => "Eid al-Fitr",
            IslamicEvent::Arafah => "Day of Arafah",
            IslamicEvent::EidAlAdha => "Eid al-Adha",
        }
    }
}

impl fmt::Display for IslamicEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Table entry: an event and the Hijri month/day it falls on every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IslamicEventRule {
    pub hijri_month: u32,
    pub hijri_day: u32,
    pub event: IslamicEvent,
}

impl IslamicEventRule {
    pub const fn new(hijri_month: u32, hijri_day: u32, event: IslamicEvent) -> Self {
        Self { hijri_month, hijri_day, event }
    }

    pub fn label(&self) -> &'static str {
        self.event.label()
    }

    pub fn matches(&self, hijri_month: u32, hijri_day: u32) -> bool {
        self.hijri_month == hijri_month && self.hijri_day == hijri_day
    }
}
