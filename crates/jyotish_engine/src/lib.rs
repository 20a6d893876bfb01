//! Jyotish calculation engine.
//!
//! Builds on the static tables in [`jyotish_base`] to produce birth
//! charts, daily panchangs, activity recommendations and muhurta
//! windows. The underlying astronomy is a simplified date-derived
//! model; everything layered on it follows the classical rules.

pub mod kundali;
pub mod kundali_types;
pub mod muhurta;
pub mod muhurta_types;
pub mod panchang;
pub mod panchang_types;

pub use kundali::calculate_birth_chart;
pub use kundali_types::{BirthChart, BirthData, DashaBalance, PlanetPosition};
pub use muhurta::find_muhurta;
pub use muhurta_types::{MuhurtaData, MuhurtaQuality, MuhurtaWindow};
pub use panchang::{calculate_panchang, get_daily_recommendations};
pub use panchang_types::{
    GeoLocation, InauspiciousPeriods, KaranaDetail, NakshatraDetail, PanchangData, TithiDetail,
    YogaDetail,
};

// Presentation lookups, re-exported so engine consumers need only one crate.
pub use jyotish_base::{
    dosha_details, house_significations, nakshatra_name_from_degree, planet_name,
    rashi_name_from_degree, yoga_combination_details,
};
