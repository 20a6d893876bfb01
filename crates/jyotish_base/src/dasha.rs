//! Vimshottari dasha reference data: the fixed 9-lord sequence and each
//! lord's period length within the 120-year cycle.

use crate::graha::Graha;

/// Total length of one Vimshottari cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The fixed lord sequence, starting from Ketu.
pub const DASHA_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Budha,
];

/// Mahadasha length in years for a lord.
pub const fn dasha_years(lord: Graha) -> f64 {
    match lord {
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Budha => 17.0,
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
    }
}

/// Position of a lord in [`DASHA_SEQUENCE`].
pub fn dasha_sequence_index(lord: Graha) -> usize {
    DASHA_SEQUENCE
        .iter()
        .position(|&g| g == lord)
        .unwrap_or(0)
}
