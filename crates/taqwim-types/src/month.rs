use serde::{Deserialize, Serialize};
use std::fmt;

/// The twelve months of the Hijri year, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HijriMonth {
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    /// Month for a 1-based month number, `None` outside 1-12.
    pub fn from_number(month: u32) -> Option<Self> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// 1-based month number.
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Transliterated, non-localized month name.
    pub fn name(self) -> &'static str {
        match self {
            HijriMonth::Muharram => "Muharram",
            HijriMonth::Safar => "Safar",
            HijriMonth::RabiAlAwwal => "Rabi' al-awwal",
            HijriMonth::RabiAlThani => "Rabi' al-thani",
            HijriMonth::JumadaAlAwwal => "Jumada al-awwal",
            HijriMonth::JumadaAlThani => "Jumada al-thani",
            HijriMonth::Rajab => "Rajab",
            HijriMonth::Shaban => "Sha'ban",
            HijriMonth::Ramadan => "Ramadan",
            HijriMonth::Shawwal => "Shawwal",
            HijriMonth::DhuAlQidah => "Dhu al-Qi'dah",
            HijriMonth::DhuAlHijjah => "Dhu al-Hijjah",
        }
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the Hijri month name, or "Unknown" outside 1-12.
pub fn month_name(month: u32) -> &'static str {
    HijriMonth::from_number(month).map_or("Unknown", HijriMonth::name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_round_trip() {
        for (i, m) in HijriMonth::ALL.iter().enumerate() {
            assert_eq!(m.number() as usize, i + 1);
            assert_eq!(HijriMonth::from_number(m.number()), Some(*m));
        }
    }

    #[test]
    fn test_number_in_const_context() {
        const RAMADAN: u32 = HijriMonth::Ramadan.number();
        assert_eq!(RAMADAN, 9);
        assert_eq!(HijriMonth::DhuAlHijjah.number(), 12);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(HijriMonth::from_number(0), None);
        assert_eq!(HijriMonth::from_number(13), None);
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn test_names() {
        assert_eq!(month_name(6), "Jumada al-thani");
        assert_eq!(month_name(9), "Ramadan");
        assert_eq!(HijriMonth::DhuAlHijjah.to_string(), "Dhu al-Hijjah");
    }
}
