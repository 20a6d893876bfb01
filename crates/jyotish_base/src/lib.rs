//! Reference tables and shared value types for the Vedic calculation engine.
//!
//! This crate provides:
//! - The fixed astrological datasets: rashis, nakshatras, grahas, bhavas,
//!   doshas, tithis, karanas, yogas, weekday kalam windows, Vimshottari
//!   dasha periods, and muhurta activity rules
//! - Civil calendar arithmetic (dates, clock times, weekdays)
//! - Degree-based table lookups with documented fallbacks
//!
//! All tables are process-wide immutable constants; every function is a pure
//! transformation of its inputs.

pub mod activity;
pub mod bhava;
pub mod calendar;
pub mod dasha;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod kalam;
pub mod karana;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use activity::{
    ALL_ACTIVITIES, INAUSPICIOUS_NAKSHATRAS, INAUSPICIOUS_TITHI_IDS, MuhurtaActivity,
    activity_from_id,
};
pub use bhava::{ALL_BHAVAS, BhavaInfo, bhava_info, house_significations};
pub use calendar::{ALL_VAARS, ClockTime, LocalDate, Vaar, is_leap_year};
pub use dasha::{DASHA_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, dasha_sequence_index, dasha_years};
pub use dosha::{ALL_DOSHAS, DoshaInfo, dosha_details};
pub use error::JyotishError;
pub use graha::{ALL_GRAHAS, Graha, graha_from_id, planet_name};
pub use kalam::{GULIKA, KalamRange, RAHU_KALAM, YAMAGANDA, gulika, rahu_kalam, yamaganda};
pub use karana::{KARANA_TABLE, KaranaEntry, KaranaNature};
pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, NakshatraLookup, nakshatra_from_degree, nakshatra_name_from_degree,
};
pub use rashi::{
    ALL_RASHIS, Element, Rashi, rashi_from_degree, rashi_id_from_degree, rashi_name_from_degree,
};
pub use tithi::{Paksha, TITHI_TABLE, TithiEntry};
pub use util::{format_hm, normalize_360};
pub use yoga::{
    YOGA_COMBINATIONS, YOGA_TABLE, YogaCombination, YogaEntry, yoga_combination_details,
};
