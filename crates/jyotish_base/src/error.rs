//! Error types for jyotish calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from jyotish calculations and input validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JyotishError {
    /// Muhurta activity id does not match any configured activity.
    UnknownActivity(String),
    /// Calendar date is out of range or malformed.
    InvalidDate(&'static str),
    /// Clock time is out of range or malformed.
    InvalidTime(&'static str),
}

impl Display for JyotishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownActivity(id) => write!(f, "unknown activity: {id}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::InvalidTime(msg) => write!(f, "invalid time: {msg}"),
        }
    }
}

impl Error for JyotishError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_activity() {
        let e = JyotishError::UnknownActivity("housewarming".to_string());
        assert_eq!(e.to_string(), "unknown activity: housewarming");
    }

    #[test]
    fn display_invalid_date() {
        let e = JyotishError::InvalidDate("month out of range");
        assert_eq!(e.to_string(), "invalid date: month out of range");
    }
}
