//! Dosha (affliction pattern) definitions.
//!
//! The chart calculator only ever flags `mangal` and `kaal_sarpa`; the other
//! two entries exist for presentation lookups (`dosha_details`).

/// Definition of one dosha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoshaInfo {
    /// Stable identifier ("mangal", "kaal_sarpa", ...).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Devanagari name.
    pub sanskrit: &'static str,
    /// What the dosha is.
    pub description: &'static str,
    /// Typical effects.
    pub effects: &'static str,
    /// Traditional remedies; always non-empty.
    pub remedies: &'static [&'static str],
}

/// All configured doshas.
pub const ALL_DOSHAS: [DoshaInfo; 4] = [
    DoshaInfo {
        id: "mangal",
        name: "Mangal Dosha",
        sanskrit: "\u{092E}\u{0902}\u{0917}\u{0932} \u{0926}\u{094B}\u{0937}",
        description: "Also known as Kuja Dosha or Mars Dosha, it occurs when Mars is placed in the 1st, 4th, 7th, 8th, or 12th house from the Lagna or Moon.",
        effects: "Can affect marital harmony and happiness if not remedied.",
        remedies: &[
            "Worship of Lord Hanuman",
            "Recitation of Hanuman Chalisa",
            "Wearing red coral",
        ],
    },
    DoshaInfo {
        id: "kaal_sarpa",
        name: "Kaal Sarpa Dosha",
        sanskrit: "\u{0915}\u{093E}\u{0932} \u{0938}\u{0930}\u{094D}\u{092A} \u{0926}\u{094B}\u{0937}",
        description: "Occurs when all planets are positioned between Rahu and Ketu, forming a snake-like pattern in the chart.",
        effects: "Can cause delays, obstacles, and sudden reversals in life.",
        remedies: &[
            "Performing Kaal Sarpa Shanti puja",
            "Worship of Lord Shiva",
            "Naga Pratishtha",
        ],
    },
    DoshaInfo {
        id: "pitra",
        name: "Pitra Dosha",
        sanskrit: "\u{092A}\u{093F}\u{0924}\u{0943} \u{0926}\u{094B}\u{0937}",
        description: "Caused by the curse of ancestors due to improper funeral rites or disrespect to elders.",
        effects: "Can manifest as chronic health issues, financial problems, or obstacles in progeny.",
        remedies: &[
            "Performing Shraddha ceremony",
            "Tarpan ritual",
            "Donating to the poor",
        ],
    },
    DoshaInfo {
        id: "shani_sade_sati",
        name: "Shani Sade Sati",
        sanskrit: "\u{0936}\u{0928}\u{093F} \u{0938}\u{093E}\u{0922}\u{093C}\u{0947} \u{0938}\u{093E}\u{0924}\u{0940}",
        description: "Occurs when Saturn transits the 12th, 1st, and 2nd houses from the natal Moon, lasting approximately 7.5 years.",
        effects: "Can bring challenges, delays, and lessons through hardship.",
        remedies: &[
            "Worship of Lord Hanuman",
            "Recitation of Hanuman Chalisa",
            "Feeding crows on Saturdays",
        ],
    },
];

/// Dosha definition by id; `None` for unconfigured ids.
pub fn dosha_details(id: &str) -> Option<&'static DoshaInfo> {
    ALL_DOSHAS.iter().find(|d| d.id == id)
}
