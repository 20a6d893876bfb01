//! Yoga tables: the 27 panchang (luni-solar) yogas, plus the chart yoga
//! combinations (Raja, Dhana, Gajakesari, Budhaditya) used for presentation
//! lookups.

/// One panchang yoga table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaEntry {
    /// 1-based yoga id (1..27).
    pub id: u8,
    /// Yoga name.
    pub name: &'static str,
    /// Presiding deity.
    pub deity: &'static str,
}

const fn y(id: u8, name: &'static str, deity: &'static str) -> YogaEntry {
    YogaEntry { id, name, deity }
}

/// The 27 panchang yogas from Vishkumbha to Vaidhriti. Index = id - 1.
pub const YOGA_TABLE: [YogaEntry; 27] = [
    y(1, "Vishkumbha", "Agni"),
    y(2, "Preeti", "Indra"),
    y(3, "Ayushman", "Brahma"),
    y(4, "Saubhagya", "Surya"),
    y(5, "Shobhana", "Indra"),
    y(6, "Atiganda", "Yama"),
    y(7, "Sukarma", "Brahma"),
    y(8, "Dhriti", "Vishnu"),
    y(9, "Shula", "Agni"),
    y(10, "Ganda", "Varuna"),
    y(11, "Vriddhi", "Kubera"),
    y(12, "Dhruva", "Vayu"),
    y(13, "Vyaghata", "Agni"),
    y(14, "Harshana", "Surya"),
    y(15, "Vajra", "Indra"),
    y(16, "Siddhi", "Ganesha"),
    y(17, "Vyatipata", "Rudra"),
    y(18, "Variyana", "Surya"),
    y(19, "Parigha", "Shiva"),
    y(20, "Shiva", "Shiva"),
    y(21, "Siddha", "Brahma"),
    y(22, "Sadhya", "Indra"),
    y(23, "Shubha", "Ganesha"),
    y(24, "Shukla", "Vishnu"),
    y(25, "Brahma", "Brahma"),
    y(26, "Indra", "Indra"),
    y(27, "Vaidhriti", "Yama"),
];

/// A named chart yoga combination (distinct from the daily panchang yogas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaCombination {
    /// Stable identifier ("raj", "dhana", ...).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// How the combination forms.
    pub description: &'static str,
    /// Traditional effects.
    pub effects: &'static str,
}

/// The configured chart yoga combinations.
pub const YOGA_COMBINATIONS: [YogaCombination; 4] = [
    YogaCombination {
        id: "raj",
        name: "Raja Yoga",
        description: "Formed when lords of auspicious houses (1, 4, 5, 7, 9, 10) combine or aspect each other.",
        effects: "Brings power, authority, and success in life.",
    },
    YogaCombination {
        id: "dhana",
        name: "Dhana Yoga",
        description: "Formed when lords of 2nd, 5th, 9th, and 11th houses combine or aspect each other.",
        effects: "Brings wealth and financial prosperity.",
    },
    YogaCombination {
        id: "gajakesari",
        name: "Gajakesari Yoga",
        description: "Formed when Jupiter is in a kendra (1, 4, 7, 10) from the Moon.",
        effects: "Brings fame, wisdom, and success in endeavors.",
    },
    YogaCombination {
        id: "budhaditya",
        name: "Budhaditya Yoga",
        description: "Formed when Sun and Mercury are conjunct.",
        effects: "Brings intelligence, communication skills, and success in education.",
    },
];

/// Chart yoga combination by id; `None` for unconfigured ids.
pub fn yoga_combination_details(id: &str) -> Option<&'static YogaCombination> {
    YOGA_COMBINATIONS.iter().find(|c| c.id == id)
}
