//! Rashi (zodiac sign) table and degree lookup.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries (Mesha) at 0 deg. Chart output uses 1-based rashi
//! ids (1 = Aries .. 12 = Pisces).

use crate::graha::Graha;
use crate::util::normalize_360;

/// The 12 rashis from Aries (Mesha) to Pisces (Meena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (id 1 = Mesha .. id 12 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Classical element of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

impl Rashi {
    /// 1-based rashi id (1 = Mesha .. 12 = Meena).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// 0-based index into ALL_RASHIS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Western (English) name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Sanskrit name of the rashi.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Classical element of the rashi.
    pub const fn element(self) -> Element {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Element::Fire,
            Self::Vrishabha | Self::Kanya | Self::Makara => Element::Earth,
            Self::Mithuna | Self::Tula | Self::Kumbha => Element::Air,
            Self::Karka | Self::Vrishchika | Self::Meena => Element::Water,
        }
    }

    /// Planetary lord of the rashi (standard Vedic lordship).
    pub const fn ruler(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrishchika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Budha,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }

    /// Zodiac symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mesha => "\u{2648}",
            Self::Vrishabha => "\u{2649}",
            Self::Mithuna => "\u{264A}",
            Self::Karka => "\u{264B}",
            Self::Simha => "\u{264C}",
            Self::Kanya => "\u{264D}",
            Self::Tula => "\u{264E}",
            Self::Vrishchika => "\u{264F}",
            Self::Dhanu => "\u{2650}",
            Self::Makara => "\u{2651}",
            Self::Kumbha => "\u{2652}",
            Self::Meena => "\u{2653}",
        }
    }
}

/// Determine rashi from an ecliptic longitude in degrees.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60),
/// etc. Input is normalized to [0, 360) first; the index is clamped to 11 in
/// case of a floating point edge at exactly 360.
pub fn rashi_from_degree(deg: f64) -> Rashi {
    let lon = normalize_360(deg);
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

/// 1-based rashi id for a longitude: `floor(lon/30) + 1`.
pub fn rashi_id_from_degree(deg: f64) -> u8 {
    rashi_from_degree(deg).id()
}

/// Western rashi name for a longitude.
pub fn rashi_name_from_degree(deg: f64) -> &'static str {
    rashi_from_degree(deg).name()
}
