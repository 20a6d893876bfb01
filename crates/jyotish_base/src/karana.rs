//! Karana (half-tithi) table: the 11 named types.

/// Fixed or movable karana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KaranaNature {
    Fixed,
    Movable,
}

impl KaranaNature {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fixed => "Fixed",
            Self::Movable => "Movable",
        }
    }
}

/// One karana table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaEntry {
    /// 1-based karana id (1..11).
    pub id: u8,
    /// Karana name.
    pub name: &'static str,
    /// Presiding deity.
    pub deity: &'static str,
    /// Fixed or movable.
    pub nature: KaranaNature,
}

const fn k(id: u8, name: &'static str, deity: &'static str, nature: KaranaNature) -> KaranaEntry {
    KaranaEntry {
        id,
        name,
        deity,
        nature,
    }
}

/// The 11 karanas. Index = id - 1.
pub const KARANA_TABLE: [KaranaEntry; 11] = [
    k(1, "Bava", "Vishnu", KaranaNature::Fixed),
    k(2, "Balava", "Brahma", KaranaNature::Movable),
    k(3, "Kaulava", "Shiva", KaranaNature::Fixed),
    k(4, "Taitila", "Ganesha", KaranaNature::Movable),
    k(5, "Garija", "Vishnu", KaranaNature::Fixed),
    k(6, "Vanija", "Brahma", KaranaNature::Movable),
    k(7, "Vishti", "Yama", KaranaNature::Fixed),
    k(8, "Shakuni", "Indra", KaranaNature::Movable),
    k(9, "Chatushpada", "Brahma", KaranaNature::Fixed),
    k(10, "Naga", "Serpents", KaranaNature::Movable),
    k(11, "Kimstughna", "Yama", KaranaNature::Fixed),
];
