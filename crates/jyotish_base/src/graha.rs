//! The 9 grahas (planets) used throughout the engine.
//!
//! Table order matters: the birth-chart calculator derives each planet's
//! placeholder longitude from its position in [`ALL_GRAHAS`].

/// The 9 grahas in traditional chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Budha,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in table order (Surya=0 .. Ketu=8).
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Budha,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Short identifier used in chart output ("su", "mo", ...).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Surya => "su",
            Self::Chandra => "mo",
            Self::Mangal => "ma",
            Self::Budha => "me",
            Self::Guru => "ju",
            Self::Shukra => "ve",
            Self::Shani => "sa",
            Self::Rahu => "ra",
            Self::Ketu => "ke",
        }
    }

    /// English name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Budha => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit name of the graha.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangala",
            Self::Budha => "Budha",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Astronomical symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Surya => "\u{2609}",
            Self::Chandra => "\u{263D}",
            Self::Mangal => "\u{2642}",
            Self::Budha => "\u{263F}",
            Self::Guru => "\u{2643}",
            Self::Shukra => "\u{2640}",
            Self::Shani => "\u{2644}",
            Self::Rahu => "\u{260A}",
            Self::Ketu => "\u{260B}",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Budha => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }
}

/// Look up a graha by its short identifier.
pub fn graha_from_id(id: &str) -> Option<Graha> {
    ALL_GRAHAS.iter().copied().find(|g| g.id() == id)
}

/// English planet name for a short identifier, or "Unknown".
pub fn planet_name(id: &str) -> &'static str {
    match graha_from_id(id) {
        Some(g) => g.name(),
        None => "Unknown",
    }
}
