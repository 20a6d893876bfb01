//! Civil calendar date, clock time, and weekday arithmetic.
//!
//! The engine works entirely in local civil time: a date is a plain
//! year/month/day triple and a clock time is an hour/minute pair. There is
//! no timezone conversion; the timezone label supplied by callers is carried
//! through to the output untouched.

use crate::error::JyotishError;

/// The 7 vaars (weekdays), Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All 7 vaars in order, Sunday = 0.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Sunday,
    Vaar::Monday,
    Vaar::Tuesday,
    Vaar::Wednesday,
    Vaar::Thursday,
    Vaar::Friday,
    Vaar::Saturday,
];

impl Vaar {
    /// English name, capitalized ("Sunday").
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Sanskrit name of the vaar.
    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sunday => "Ravivar",
            Self::Monday => "Somvar",
            Self::Tuesday => "Mangalvar",
            Self::Wednesday => "Budhvar",
            Self::Thursday => "Guruvar",
            Self::Friday => "Shukravar",
            Self::Saturday => "Shanivar",
        }
    }

    /// 0-based index (Sunday=0 .. Saturday=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sunday => 0,
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }
}

/// Days in each month of a non-leap year.
const MONTH_DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// A validated civil calendar date (proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalDate {
    year: i32,
    month: u32,
    day: u32,
}

impl LocalDate {
    /// Construct a date, validating month and day ranges.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, JyotishError> {
        if !(1..=12).contains(&month) {
            return Err(JyotishError::InvalidDate("month out of range"));
        }
        let mut max_day = MONTH_DAYS[(month - 1) as usize];
        if month == 2 && is_leap_year(year) {
            max_day = 29;
        }
        if day < 1 || day > max_day {
            return Err(JyotishError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// January 1 of a year. Always valid, so no fallible constructor needed.
    pub const fn first_of_year(year: i32) -> Self {
        Self {
            year,
            month: 1,
            day: 1,
        }
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    /// 1-based day of year (Jan 1 = 1, Dec 31 = 365/366).
    pub fn day_of_year(self) -> u32 {
        let mut doy = self.day;
        for m in 0..(self.month - 1) as usize {
            doy += MONTH_DAYS[m];
        }
        if self.month > 2 && is_leap_year(self.year) {
            doy += 1;
        }
        doy
    }

    /// Weekday of this date (Sakamoto's method, Sunday = 0).
    pub fn vaar(self) -> Vaar {
        const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
        let mut y = self.year;
        if self.month < 3 {
            y -= 1;
        }
        let idx = (y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            + T[(self.month - 1) as usize]
            + self.day as i32)
            .rem_euclid(7);
        ALL_VAARS[idx as usize]
    }
}

/// A validated clock time of day (hour/minute, no seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Construct a clock time, validating hour and minute ranges.
    pub fn new(hour: u32, minute: u32) -> Result<Self, JyotishError> {
        if hour >= 24 {
            return Err(JyotishError::InvalidTime("hour out of range"));
        }
        if minute >= 60 {
            return Err(JyotishError::InvalidTime("minute out of range"));
        }
        Ok(Self { hour, minute })
    }

    /// Parse a "HH:MM" string.
    pub fn parse(s: &str) -> Result<Self, JyotishError> {
        let (h, m) = s
            .split_once(':')
            .ok_or(JyotishError::InvalidTime("expected HH:MM"))?;
        let hour: u32 = h
            .trim()
            .parse()
            .map_err(|_| JyotishError::InvalidTime("hour is not a number"))?;
        let minute: u32 = m
            .trim()
            .parse()
            .map_err(|_| JyotishError::InvalidTime("minute is not a number"))?;
        Self::new(hour, minute)
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight, 0..1439.
    pub const fn minutes_since_midnight(self) -> u32 {
        self.hour * 60 + self.minute
    }
}
