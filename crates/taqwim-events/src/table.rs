use taqwim_types::{HijriMonth, IslamicEvent, IslamicEventRule};

/// Major observances, in display order. (month, day) keys are unique.
pub static EVENT_RULES: &[IslamicEventRule] = &[
    IslamicEventRule::new(HijriMonth::Muharram.number(), 1, IslamicEvent::IslamicNewYear),
    IslamicEventRule::new(HijriMonth::Muharram.number(), 10, IslamicEvent::Ashura),
    IslamicEventRule::new(HijriMonth::RabiAlAwwal.number(), 12, IslamicEvent::Mawlid),
    IslamicEventRule::new(HijriMonth::Rajab.number(), 27, IslamicEvent::IsraMiraj),
    IslamicEventRule::new(HijriMonth::Shaban.number(), 15, IslamicEvent::MidShaban),
    IslamicEventRule::new(HijriMonth::Ramadan.number(), 1, IslamicEvent::RamadanStart),
    IslamicEventRule::new(HijriMonth::Ramadan.number(), 27, IslamicEvent::LaylatAlQadr),
    IslamicEventRule::new(HijriMonth::Shawwal.number(), 1, IslamicEvent::EidAlFitr),
    IslamicEventRule::new(HijriMonth::DhuAlHijjah.number(), 9, IslamicEvent::Arafah),
    IslamicEventRule::new(HijriMonth::DhuAlHijjah.number(), 10, IslamicEvent::EidAlAdha),
];
