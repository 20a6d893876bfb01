//! Tithi (lunar day) table: 30 entries across the two pakshas.

/// Waxing or waning fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// One tithi table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiEntry {
    /// 1-based tithi id (1..30).
    pub id: u8,
    /// Tithi name ("Pratipada", "Purnima", ...).
    pub name: &'static str,
    /// Paksha the tithi belongs to.
    pub paksha: Paksha,
    /// Presiding deity.
    pub deity: &'static str,
}

const fn t(id: u8, name: &'static str, paksha: Paksha, deity: &'static str) -> TithiEntry {
    TithiEntry {
        id,
        name,
        paksha,
        deity,
    }
}

/// The 30 tithis: 15 Shukla (ending in Purnima) then 15 Krishna (ending in
/// Amavasya). Index = id - 1.
pub const TITHI_TABLE: [TithiEntry; 30] = [
    t(1, "Pratipada", Paksha::Shukla, "Agni"),
    t(2, "Dwitiya", Paksha::Shukla, "Brahma"),
    t(3, "Tritiya", Paksha::Shukla, "Gauri"),
    t(4, "Chaturthi", Paksha::Shukla, "Ganesha"),
    t(5, "Panchami", Paksha::Shukla, "Serpents"),
    t(6, "Shashthi", Paksha::Shukla, "Karttikeya"),
    t(7, "Saptami", Paksha::Shukla, "Surya"),
    t(8, "Ashtami", Paksha::Shukla, "Shiva"),
    t(9, "Navami", Paksha::Shukla, "Durga"),
    t(10, "Dashami", Paksha::Shukla, "Yama"),
    t(11, "Ekadashi", Paksha::Shukla, "Vishnu"),
    t(12, "Dwadashi", Paksha::Shukla, "Vishnu"),
    t(13, "Trayodashi", Paksha::Shukla, "Kamadeva"),
    t(14, "Chaturdashi", Paksha::Shukla, "Shiva"),
    t(15, "Purnima", Paksha::Shukla, "Soma"),
    t(16, "Pratipada", Paksha::Krishna, "Agni"),
    t(17, "Dwitiya", Paksha::Krishna, "Brahma"),
    t(18, "Tritiya", Paksha::Krishna, "Gauri"),
    t(19, "Chaturthi", Paksha::Krishna, "Ganesha"),
    t(20, "Panchami", Paksha::Krishna, "Serpents"),
    t(21, "Shashthi", Paksha::Krishna, "Karttikeya"),
    t(22, "Saptami", Paksha::Krishna, "Surya"),
    t(23, "Ashtami", Paksha::Krishna, "Shiva"),
    t(24, "Navami", Paksha::Krishna, "Durga"),
    t(25, "Dashami", Paksha::Krishna, "Yama"),
    t(26, "Ekadashi", Paksha::Krishna, "Vishnu"),
    t(27, "Dwadashi", Paksha::Krishna, "Vishnu"),
    t(28, "Trayodashi", Paksha::Krishna, "Kamadeva"),
    t(29, "Chaturdashi", Paksha::Krishna, "Shiva"),
    t(30, "Amavasya", Paksha::Krishna, "Pitris"),
];
