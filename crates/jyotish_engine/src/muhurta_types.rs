//! Result types for the muhurta finder.

use jyotish_base::{LocalDate, MuhurtaActivity};

use crate::panchang_types::GeoLocation;

/// Suitability grade of a muhurta window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuhurtaQuality {
    Excellent,
    Good,
    Average,
}

impl MuhurtaQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
        }
    }
}

/// One candidate window within the day.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaWindow {
    /// "HH:MM" local start time.
    pub start_time: String,
    /// "HH:MM" local end time.
    pub end_time: String,
    pub quality: MuhurtaQuality,
    /// Present only on excellent windows.
    pub note: Option<&'static str>,
}

/// Auspicious windows found for an activity on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct MuhurtaData {
    pub activity: MuhurtaActivity,
    pub date: LocalDate,
    pub location: GeoLocation,
    /// Windows that survived the inauspicious filters, in day order.
    /// Empty when the whole day is ruled out.
    pub windows: Vec<MuhurtaWindow>,
}
