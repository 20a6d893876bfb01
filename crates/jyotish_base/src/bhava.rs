//! Bhava (house) archetypes and significations.

/// One of the 12 house archetypes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BhavaInfo {
    /// 1-based house number.
    pub id: u8,
    /// English name ("First House").
    pub name: &'static str,
    /// Sanskrit name ("Tanu Bhava").
    pub sanskrit: &'static str,
    /// What the house signifies.
    pub significations: &'static [&'static str],
}

/// The 12 houses in order.
pub const ALL_BHAVAS: [BhavaInfo; 12] = [
    BhavaInfo {
        id: 1,
        name: "First House",
        sanskrit: "Tanu Bhava",
        significations: &["Self", "Physical body", "Personality", "Appearance"],
    },
    BhavaInfo {
        id: 2,
        name: "Second House",
        sanskrit: "Dhana Bhava",
        significations: &["Wealth", "Family", "Speech", "Food"],
    },
    BhavaInfo {
        id: 3,
        name: "Third House",
        sanskrit: "Sahaja Bhava",
        significations: &["Siblings", "Courage", "Communication", "Short journeys"],
    },
    BhavaInfo {
        id: 4,
        name: "Fourth House",
        sanskrit: "Sukha Bhava",
        significations: &["Mother", "Home", "Happiness", "Education"],
    },
    BhavaInfo {
        id: 5,
        name: "Fifth House",
        sanskrit: "Putra Bhava",
        significations: &["Children", "Intelligence", "Creativity", "Romance"],
    },
    BhavaInfo {
        id: 6,
        name: "Sixth House",
        sanskrit: "Ripu Bhava",
        significations: &["Enemies", "Disease", "Service", "Debt"],
    },
    BhavaInfo {
        id: 7,
        name: "Seventh House",
        sanskrit: "Yuvati Bhava",
        significations: &["Spouse", "Partnership", "Business", "Travel"],
    },
    BhavaInfo {
        id: 8,
        name: "Eighth House",
        sanskrit: "Randhra Bhava",
        significations: &["Longevity", "Obstacles", "Hidden things", "Inheritance"],
    },
    BhavaInfo {
        id: 9,
        name: "Ninth House",
        sanskrit: "Dharma Bhava",
        significations: &["Fortune", "Religion", "Teacher", "Higher learning"],
    },
    BhavaInfo {
        id: 10,
        name: "Tenth House",
        sanskrit: "Karma Bhava",
        significations: &["Career", "Status", "Father", "Authority"],
    },
    BhavaInfo {
        id: 11,
        name: "Eleventh House",
        sanskrit: "Labha Bhava",
        significations: &["Gains", "Friends", "Hopes", "Aspirations"],
    },
    BhavaInfo {
        id: 12,
        name: "Twelfth House",
        sanskrit: "Vyaya Bhava",
        significations: &["Loss", "Spirituality", "Isolation", "Foreign lands"],
    },
];

/// Significations of a house by 1-based number; empty slice off-range.
pub fn house_significations(house_number: u8) -> &'static [&'static str] {
    match ALL_BHAVAS.get(house_number.wrapping_sub(1) as usize) {
        Some(b) => b.significations,
        None => &[],
    }
}

/// House archetype by 1-based number.
pub fn bhava_info(house_number: u8) -> Option<&'static BhavaInfo> {
    ALL_BHAVAS.get(house_number.wrapping_sub(1) as usize)
}
