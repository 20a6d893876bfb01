//! Inauspicious daily periods: Rahu Kalam, Yamaganda, and Gulika Kalam.
//!
//! Each is a fixed 1.5-hour window per weekday, stored as fractional clock
//! hours exactly as the engine's reference tables give them (so Wednesday's
//! Rahu Kalam is literally "12 to 1.5"). [`KalamRange::contains_hour`]
//! treats start > end as a wrap past midnight, which for those afternoon
//! entries means every hour from the start onward counts as inside; the
//! muhurta filter depends on that reading.

use std::fmt::{Display, Formatter};

use crate::calendar::Vaar;

/// A daily inauspicious window in fractional clock hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KalamRange {
    /// Start hour (e.g. 4.5 = 04:30).
    pub start_hour: f64,
    /// End hour.
    pub end_hour: f64,
}

impl KalamRange {
    const fn new(start_hour: f64, end_hour: f64) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether a clock hour falls inside the window.
    ///
    /// start <= end: `[start, end)`. start > end: wraps, `h >= start || h < end`.
    pub fn contains_hour(&self, hour: f64) -> bool {
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

fn fmt_hour(f: &mut Formatter<'_>, h: f64) -> std::fmt::Result {
    if h.fract() == 0.0 {
        write!(f, "{}", h as i64)
    } else {
        write!(f, "{h:.1}")
    }
}

impl Display for KalamRange {
    /// Renders in the table form "4.5 to 6".
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        fmt_hour(f, self.start_hour)?;
        write!(f, " to ")?;
        fmt_hour(f, self.end_hour)
    }
}

/// Rahu Kalam by weekday (Sunday first).
pub const RAHU_KALAM: [KalamRange; 7] = [
    KalamRange::new(4.5, 6.0),
    KalamRange::new(7.5, 9.0),
    KalamRange::new(3.0, 4.5),
    KalamRange::new(12.0, 1.5),
    KalamRange::new(1.5, 3.0),
    KalamRange::new(10.5, 12.0),
    KalamRange::new(9.0, 10.5),
];

/// Yamaganda by weekday (Sunday first).
pub const YAMAGANDA: [KalamRange; 7] = [
    KalamRange::new(12.0, 1.5),
    KalamRange::new(10.5, 12.0),
    KalamRange::new(9.0, 10.5),
    KalamRange::new(7.5, 9.0),
    KalamRange::new(6.0, 7.5),
    KalamRange::new(3.0, 4.5),
    KalamRange::new(1.5, 3.0),
];

/// Gulika Kalam by weekday (Sunday first).
pub const GULIKA: [KalamRange; 7] = [
    KalamRange::new(1.5, 3.0),
    KalamRange::new(3.0, 4.5),
    KalamRange::new(12.0, 1.5),
    KalamRange::new(10.5, 12.0),
    KalamRange::new(9.0, 10.5),
    KalamRange::new(7.5, 9.0),
    KalamRange::new(6.0, 7.5),
];

/// Rahu Kalam window for a weekday.
pub fn rahu_kalam(vaar: Vaar) -> KalamRange {
    RAHU_KALAM[vaar.index() as usize]
}

/// Yamaganda window for a weekday.
pub fn yamaganda(vaar: Vaar) -> KalamRange {
    YAMAGANDA[vaar.index() as usize]
}

/// Gulika Kalam window for a weekday.
pub fn gulika(vaar: Vaar) -> KalamRange {
    GULIKA[vaar.index() as usize]
}
