//! Result types for the daily panchang.

use jyotish_base::{KalamRange, KaranaNature, LocalDate, Nakshatra, Paksha, Vaar};

/// Observer location attached to a panchang or muhurta result.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Timezone label; recorded only, never used in arithmetic.
    pub timezone: String,
}

/// The day's tithi with its end time.
#[derive(Debug, Clone, PartialEq)]
pub struct TithiDetail {
    /// 1-based tithi id (1..30 across both pakshas).
    pub id: u8,
    pub name: &'static str,
    pub paksha: Paksha,
    pub deity: &'static str,
    /// "HH:MM" local time at which the tithi ends.
    pub end_time: String,
}

/// The day's nakshatra with its end time.
#[derive(Debug, Clone, PartialEq)]
pub struct NakshatraDetail {
    pub nakshatra: Nakshatra,
    /// "HH:MM" local time at which the nakshatra ends.
    pub end_time: String,
}

/// The day's yoga with its end time.
#[derive(Debug, Clone, PartialEq)]
pub struct YogaDetail {
    pub id: u8,
    pub name: &'static str,
    pub deity: &'static str,
    /// "HH:MM" local time at which the yoga ends.
    pub end_time: String,
}

/// The day's karana with its end time.
#[derive(Debug, Clone, PartialEq)]
pub struct KaranaDetail {
    pub id: u8,
    pub name: &'static str,
    pub deity: &'static str,
    pub nature: KaranaNature,
    /// "HH:MM" local time at which the karana ends.
    pub end_time: String,
}

/// The day's three inauspicious windows, as fractional-hour ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InauspiciousPeriods {
    pub rahu_kalam: KalamRange,
    pub yamaganda: KalamRange,
    pub gulika: KalamRange,
}

/// Full panchang for one date and location.
#[derive(Debug, Clone, PartialEq)]
pub struct PanchangData {
    pub date: LocalDate,
    pub location: GeoLocation,
    /// "HH:MM" local times.
    pub sunrise: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonset: String,
    pub tithi: TithiDetail,
    pub nakshatra: NakshatraDetail,
    pub yoga: YogaDetail,
    pub karana: KaranaDetail,
    pub inauspicious: InauspiciousPeriods,
    /// "HH:00 - HH:00" windows favorable for general activity.
    pub auspicious_periods: Vec<String>,
    pub vaar: Vaar,
    /// Fasting or lunar observance falling on this date, if any.
    pub special_observance: Option<&'static str>,
}
