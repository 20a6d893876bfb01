//! Nakshatra (lunar mansion) table and degree lookup.
//!
//! The 27 nakshatras partition the ecliptic. The angular boundaries here are
//! the engine's fixed reference values (13.20, 26.40, 40, ...), not the
//! uniform 13 deg 20' astronomical division; the lookup must reproduce them
//! exactly.
//!
//! A longitude that no `[start, end)` range contains (only possible at
//! exactly 360 deg) falls back to Ashwini, tagged so callers can tell a
//! genuine match from the fallback.

use crate::graha::Graha;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (id 1 = Ashwini .. id 27 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Angular boundaries: nakshatra i spans [BOUNDS[i], BOUNDS[i+1]).
const NAKSHATRA_BOUNDS: [f64; 28] = [
    0.0, 13.20, 26.40, 40.0, 53.20, 66.40, 80.0, 93.20, 106.40, 120.0, 133.20, 146.40, 160.0,
    173.20, 186.40, 200.0, 213.20, 226.40, 240.0, 253.20, 266.40, 280.0, 293.20, 306.40, 320.0,
    333.20, 346.40, 360.0,
];

impl Nakshatra {
    /// 1-based nakshatra id (1 = Ashwini .. 27 = Revati).
    pub const fn id(self) -> u8 {
        self.index() + 1
    }

    /// 0-based index into ALL_NAKSHATRAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Ashwini => 0,
            Self::Bharani => 1,
            Self::Krittika => 2,
            Self::Rohini => 3,
            Self::Mrigashira => 4,
            Self::Ardra => 5,
            Self::Punarvasu => 6,
            Self::Pushya => 7,
            Self::Ashlesha => 8,
            Self::Magha => 9,
            Self::PurvaPhalguni => 10,
            Self::UttaraPhalguni => 11,
            Self::Hasta => 12,
            Self::Chitra => 13,
            Self::Swati => 14,
            Self::Vishakha => 15,
            Self::Anuradha => 16,
            Self::Jyeshtha => 17,
            Self::Mula => 18,
            Self::PurvaAshadha => 19,
            Self::UttaraAshadha => 20,
            Self::Shravana => 21,
            Self::Dhanishta => 22,
            Self::Shatabhisha => 23,
            Self::PurvaBhadrapada => 24,
            Self::UttaraBhadrapada => 25,
            Self::Revati => 26,
        }
    }

    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Presiding deity of the nakshatra.
    pub const fn deity(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini Kumaras",
            Self::Bharani => "Yama",
            Self::Krittika => "Agni",
            Self::Rohini => "Brahma",
            Self::Mrigashira => "Soma",
            Self::Ardra => "Rudra",
            Self::Punarvasu => "Aditi",
            Self::Pushya => "Brihaspati",
            Self::Ashlesha => "Nagas",
            Self::Magha => "Pitris",
            Self::PurvaPhalguni => "Bhaga",
            Self::UttaraPhalguni => "Aryaman",
            Self::Hasta => "Savitar",
            Self::Chitra => "Vishwakarma",
            Self::Swati => "Vayu",
            Self::Vishakha => "Indra-Agni",
            Self::Anuradha => "Mitra",
            Self::Jyeshtha => "Indra",
            Self::Mula => "Nirrti",
            Self::PurvaAshadha => "Apas",
            Self::UttaraAshadha => "Vishvedevas",
            Self::Shravana => "Vishnu",
            Self::Dhanishta => "Vasus",
            Self::Shatabhisha => "Varuna",
            Self::PurvaBhadrapada => "Ajaikapada",
            Self::UttaraBhadrapada => "Ahirbudhnya",
            Self::Revati => "Pushan",
        }
    }

    /// Ruling graha (Vimshottari dasha lord) of the nakshatra.
    ///
    /// The 9-lord cycle repeats exactly three times across the 27 mansions.
    pub const fn ruler(self) -> Graha {
        match self {
            Self::Ashwini | Self::Magha | Self::Mula => Graha::Ketu,
            Self::Bharani | Self::PurvaPhalguni | Self::PurvaAshadha => Graha::Shukra,
            Self::Krittika | Self::UttaraPhalguni | Self::UttaraAshadha => Graha::Surya,
            Self::Rohini | Self::Hasta | Self::Shravana => Graha::Chandra,
            Self::Mrigashira | Self::Chitra | Self::Dhanishta => Graha::Mangal,
            Self::Ardra | Self::Swati | Self::Shatabhisha => Graha::Rahu,
            Self::Punarvasu | Self::Vishakha | Self::PurvaBhadrapada => Graha::Guru,
            Self::Pushya | Self::Anuradha | Self::UttaraBhadrapada => Graha::Shani,
            Self::Ashlesha | Self::Jyeshtha | Self::Revati => Graha::Budha,
        }
    }

    /// Traditional symbol of the nakshatra.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ashwini => "Horse's head",
            Self::Bharani => "Yoni",
            Self::Krittika => "Razor",
            Self::Rohini => "Chariot",
            Self::Mrigashira => "Deer's head",
            Self::Ardra => "Teardrop",
            Self::Punarvasu => "Bow",
            Self::Pushya => "Flower",
            Self::Ashlesha => "Serpent",
            Self::Magha => "Throne",
            Self::PurvaPhalguni => "Front of bed",
            Self::UttaraPhalguni => "Back of bed",
            Self::Hasta => "Hand",
            Self::Chitra => "Pearl",
            Self::Swati => "Coral",
            Self::Vishakha => "Potter's wheel",
            Self::Anuradha => "Lotus",
            Self::Jyeshtha => "Umbrella",
            Self::Mula => "Lion's tail",
            Self::PurvaAshadha => "Fan",
            Self::UttaraAshadha => "Elephant tusk",
            Self::Shravana => "Three footprints",
            Self::Dhanishta => "Drum",
            Self::Shatabhisha => "Empty circle",
            Self::PurvaBhadrapada => "Front of funeral cot",
            Self::UttaraBhadrapada => "Back of funeral cot",
            Self::Revati => "Fish",
        }
    }

    /// Angular range [start, end) in degrees.
    pub fn degrees(self) -> (f64, f64) {
        let i = self.index() as usize;
        (NAKSHATRA_BOUNDS[i], NAKSHATRA_BOUNDS[i + 1])
    }
}

/// Result of a nakshatra-by-degree lookup.
///
/// `fallback` is true when no range contained the input and Ashwini was
/// returned by default, so callers can distinguish a genuine match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraLookup {
    /// The nakshatra (Ashwini when `fallback` is set).
    pub nakshatra: Nakshatra,
    /// Whether the default fired instead of a range match.
    pub fallback: bool,
}

/// Determine nakshatra from a longitude by `[start, end)` range containment.
///
/// The input is not normalized: chart longitudes are already reduced to
/// [0, 360), and an input of exactly 360 deliberately misses every range
/// and takes the Ashwini fallback.
pub fn nakshatra_from_degree(deg: f64) -> NakshatraLookup {
    for nak in ALL_NAKSHATRAS {
        let (start, end) = nak.degrees();
        if deg >= start && deg < end {
            return NakshatraLookup {
                nakshatra: nak,
                fallback: false,
            };
        }
    }
    NakshatraLookup {
        nakshatra: Nakshatra::Ashwini,
        fallback: true,
    }
}

/// Nakshatra name for a longitude, or "Unknown" when no range matches.
pub fn nakshatra_name_from_degree(deg: f64) -> &'static str {
    let lookup = nakshatra_from_degree(deg);
    if lookup.fallback {
        "Unknown"
    } else {
        lookup.nakshatra.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nakshatras_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn nakshatra_indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(n.id() as usize, i + 1);
        }
    }

    #[test]
    fn bounds_contiguous() {
        for n in ALL_NAKSHATRAS {
            let (start, end) = n.degrees();
            assert!(start < end, "{} has empty range", n.name());
        }
        for i in 0..26 {
            let (_, end) = ALL_NAKSHATRAS[i].degrees();
            let (start, _) = ALL_NAKSHATRAS[i + 1].degrees();
            assert!((end - start).abs() < 1e-12);
        }
    }

    #[test]
    fn lookup_range_starts() {
        for n in ALL_NAKSHATRAS {
            let (start, _) = n.degrees();
            let lookup = nakshatra_from_degree(start);
            assert_eq!(lookup.nakshatra, n);
            assert!(!lookup.fallback);
        }
    }

    #[test]
    fn lookup_mid_range() {
        let lookup = nakshatra_from_degree(45.0);
        assert_eq!(lookup.nakshatra, Nakshatra::Rohini);
        assert!(!lookup.fallback);
    }

    #[test]
    fn lookup_360_falls_back() {
        let lookup = nakshatra_from_degree(360.0);
        assert_eq!(lookup.nakshatra, Nakshatra::Ashwini);
        assert!(lookup.fallback);
    }

    #[test]
    fn name_lookup_fallback_is_unknown() {
        assert_eq!(nakshatra_name_from_degree(360.0), "Unknown");
        assert_eq!(nakshatra_name_from_degree(100.0), "Pushya");
        assert_eq!(nakshatra_name_from_degree(110.0), "Ashlesha");
    }

    #[test]
    fn ruler_cycle_repeats() {
        // The 9-lord cycle repeats at offsets 0, 9, 18
        for i in 0..9 {
            let a = ALL_NAKSHATRAS[i].ruler();
            let b = ALL_NAKSHATRAS[i + 9].ruler();
            let c = ALL_NAKSHATRAS[i + 18].ruler();
            assert_eq!(a, b);
            assert_eq!(b, c);
        }
    }

    #[test]
    fn rohini_ruled_by_moon() {
        assert_eq!(Nakshatra::Rohini.ruler(), Graha::Chandra);
    }
}
