//! Types for birth chart (kundali) calculation results.

use jyotish_base::{ClockTime, Graha, LocalDate, Nakshatra, Rashi};

/// Birth particulars supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthData {
    /// Civil birth date.
    pub date: LocalDate,
    /// Local birth time of day.
    pub time: ClockTime,
    /// Birthplace latitude in degrees.
    pub latitude: f64,
    /// Birthplace longitude in degrees.
    pub longitude: f64,
    /// Timezone label; recorded only, never used in arithmetic.
    pub timezone: String,
}

/// One planet's placement in the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    /// The graha.
    pub graha: Graha,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude: f64,
    /// Occupied rashi.
    pub rashi: Rashi,
    /// Occupied nakshatra (Ashwini when the range lookup fell back).
    pub nakshatra: Nakshatra,
    /// Occupied house, 1-12, counted from the ascendant rashi.
    pub house: u8,
    /// Retrograde flag.
    pub retrograde: bool,
}

/// Current Vimshottari major/sub period for the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaBalance {
    /// Lord of the running mahadasha.
    pub major_lord: Graha,
    /// End of the mahadasha, truncated to January 1 of the end year.
    pub major_end: LocalDate,
    /// Lord of the running bhukti (sub-period).
    pub sub_lord: Graha,
    /// End of the bhukti, truncated to January 1 of the end year.
    pub sub_end: LocalDate,
}

/// Complete birth chart result.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    /// Ascendant (lagna) degree in [0, 360).
    pub ascendant: f64,
    /// Exactly one position per graha, in table order.
    pub positions: [PlanetPosition; 9],
    /// 12 house cusp degrees, each in [0, 360).
    pub houses: [f64; 12],
    /// Running dasha/bhukti balance at the query year.
    pub dasha_balance: DashaBalance,
    /// Ids of doshas detected in the chart ("mangal", "kaal_sarpa").
    pub doshas: Vec<&'static str>,
}
