//! Muhurta activity types and their auspiciousness rules.

use crate::nakshatra::Nakshatra;

/// The activities a muhurta can be found for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuhurtaActivity {
    Marriage,
    Travel,
    Business,
    Education,
}

/// All configured activities.
pub const ALL_ACTIVITIES: [MuhurtaActivity; 4] = [
    MuhurtaActivity::Marriage,
    MuhurtaActivity::Travel,
    MuhurtaActivity::Business,
    MuhurtaActivity::Education,
];

/// Nakshatras considered inauspicious for any activity.
pub const INAUSPICIOUS_NAKSHATRAS: [Nakshatra; 4] = [
    Nakshatra::Ashlesha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::Magha,
];

/// Tithi ids on which no muhurta window is offered.
pub const INAUSPICIOUS_TITHI_IDS: [u8; 7] = [4, 6, 8, 9, 12, 14, 30];

impl MuhurtaActivity {
    /// Stable identifier ("marriage", "travel", ...).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::Travel => "travel",
            Self::Business => "business",
            Self::Education => "education",
        }
    }

    /// Traditional muhurta name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "Vivaha Muhurta",
            Self::Travel => "Yatra Muhurta",
            Self::Business => "Vyapara Muhurta",
            Self::Education => "Vidyarambha Muhurta",
        }
    }

    /// What the muhurta is for.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Marriage => "Auspicious time for marriage ceremonies.",
            Self::Travel => "Auspicious time for beginning journeys.",
            Self::Business => "Auspicious time for starting a business or signing contracts.",
            Self::Education => "Auspicious time for beginning education.",
        }
    }

    /// Traditional requirements for the muhurta.
    pub const fn requirements(self) -> &'static [&'static str] {
        match self {
            Self::Marriage => &[
                "Avoid Rahu Kalam and Yamaganda",
                "Avoid Bhadra",
                "Moon should be waxing",
                "Avoid 4th, 6th, 8th, 9th, and 12th lunar days",
                "Avoid Ashlesha, Jyeshtha, Mula, and Magha nakshatras",
            ],
            Self::Travel => &[
                "Avoid Rahu Kalam",
                "Moon should be strong",
                "Day should be ruled by a benefic planet",
                "Avoid 4th, 8th, and 12th lunar days",
                "Avoid Ashlesha, Jyeshtha, and Mula nakshatras",
            ],
            Self::Business => &[
                "Mercury and Jupiter should be strong",
                "Avoid Rahu Kalam and Yamaganda",
                "Avoid 4th, 8th, and 14th lunar days",
                "Lagna should be fixed or movable",
            ],
            Self::Education => &[
                "Jupiter, Mercury, and Venus should be strong",
                "Avoid Rahu Kalam",
                "Wednesday, Thursday, and Friday are preferred",
                "Avoid 4th, 6th, 8th, and 14th lunar days",
            ],
        }
    }

    /// Nakshatras that make a window `excellent` for this activity.
    pub const fn excellent_nakshatras(self) -> &'static [Nakshatra] {
        match self {
            Self::Marriage => &[
                Nakshatra::Rohini,
                Nakshatra::UttaraPhalguni,
                Nakshatra::UttaraAshadha,
                Nakshatra::UttaraBhadrapada,
            ],
            Self::Travel => &[
                Nakshatra::Pushya,
                Nakshatra::Hasta,
                Nakshatra::Anuradha,
                Nakshatra::Shravana,
                Nakshatra::Revati,
            ],
            Self::Business => &[
                Nakshatra::Pushya,
                Nakshatra::Hasta,
                Nakshatra::UttaraPhalguni,
                Nakshatra::UttaraAshadha,
            ],
            Self::Education => &[
                Nakshatra::Hasta,
                Nakshatra::Pushya,
                Nakshatra::Shravana,
                Nakshatra::Dhanishta,
            ],
        }
    }

    /// Note attached to an `excellent` window for this activity.
    pub const fn excellent_note(self) -> &'static str {
        match self {
            Self::Marriage => "Highly auspicious nakshatra for marriage",
            Self::Travel => "Excellent nakshatra for travel",
            Self::Business => "Auspicious nakshatra for business ventures",
            Self::Education => "Excellent nakshatra for beginning education",
        }
    }
}

/// Look up an activity by id.
pub fn activity_from_id(id: &str) -> Option<MuhurtaActivity> {
    ALL_ACTIVITIES.iter().copied().find(|a| a.id() == id)
}
