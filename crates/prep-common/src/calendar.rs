//! CF model-calendar handling for climate time axes.
//!
//! Climate model output uses simplified calendars (no leap days, fixed
//! 360-day years) that chrono cannot represent, so time coordinates are
//! carried as [`CfDate`] values tagged with a [`Calendar`]. Conversion
//! between calendars is date-aware: a source date that does not exist in
//! the target calendar (e.g. Feb 29 into `noleap`) is dropped, never
//! truncated to a neighboring day.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PrepError, PrepResult};

/// Month lengths for real-year calendars.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Model calendar systems as named by the CF conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calendar {
    /// 365-day years, no leap days ("noleap" / "365_day").
    NoLeap,
    /// 366-day years ("all_leap" / "366_day").
    AllLeap,
    /// Twelve 30-day months ("360_day").
    Day360,
    /// Gregorian rules applied for all years ("proleptic_gregorian").
    ProlepticGregorian,
    /// Mixed Julian/Gregorian ("standard" / "gregorian"). Treated as
    /// proleptic Gregorian for the post-1582 dates this pipeline handles.
    Standard,
}

impl Calendar {
    /// Parse a CF calendar attribute value.
    pub fn parse(name: &str) -> PrepResult<Self> {
        match name.to_lowercase().as_str() {
            "noleap" | "365_day" => Ok(Calendar::NoLeap),
            "all_leap" | "366_day" => Ok(Calendar::AllLeap),
            "360_day" => Ok(Calendar::Day360),
            "proleptic_gregorian" => Ok(Calendar::ProlepticGregorian),
            "standard" | "gregorian" => Ok(Calendar::Standard),
            other => Err(PrepError::InvalidDate(format!(
                "unknown calendar '{}'",
                other
            ))),
        }
    }

    /// CF name for this calendar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Calendar::NoLeap => "noleap",
            Calendar::AllLeap => "all_leap",
            Calendar::Day360 => "360_day",
            Calendar::ProlepticGregorian => "proleptic_gregorian",
            Calendar::Standard => "standard",
        }
    }

    /// Whether `year` is a leap year under this calendar.
    pub fn is_leap_year(&self, year: i32) -> bool {
        match self {
            Calendar::NoLeap | Calendar::Day360 => false,
            Calendar::AllLeap => true,
            Calendar::ProlepticGregorian | Calendar::Standard => {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            }
        }
    }

    /// Number of days in the given month of the given year.
    pub fn days_in_month(&self, year: i32, month: u8) -> u8 {
        debug_assert!((1..=12).contains(&month));
        match self {
            Calendar::Day360 => 30,
            _ => {
                if month == 2 && self.is_leap_year(year) {
                    29
                } else {
                    MONTH_DAYS[(month - 1) as usize]
                }
            }
        }
    }

    /// Number of days in the given year.
    pub fn days_in_year(&self, year: i32) -> u32 {
        (1..=12u8)
            .map(|m| self.days_in_month(year, m) as u32)
            .sum()
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A date-time under a model calendar.
///
/// Ordering is chronological within a single calendar; comparing dates from
/// different calendars compares the raw fields, which is what positional
/// time-axis checks need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CfDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CfDate {
    /// Construct a date, validating against the given calendar.
    pub fn new(calendar: Calendar, year: i32, month: u8, day: u8) -> PrepResult<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > calendar.days_in_month(year, month) {
            return Err(PrepError::InvalidDate(format!(
                "{:04}-{:02}-{:02} does not exist in the {} calendar",
                year, month, day, calendar
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        })
    }

    /// Set the time-of-day fields.
    pub fn at(mut self, hour: u8, minute: u8, second: u8) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Whether this date exists under `calendar`.
    pub fn exists_in(&self, calendar: Calendar) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= calendar.days_in_month(self.year, self.month)
    }

    /// Convert to another calendar, preserving the (year, month, day) label.
    ///
    /// Returns None when the labeled date has no counterpart in the target
    /// calendar; the caller drops the corresponding data row.
    pub fn convert(&self, target: Calendar) -> Option<CfDate> {
        if self.exists_in(target) {
            Some(*self)
        } else {
            None
        }
    }
}

impl fmt::Display for CfDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Synthesize one timestamp per day of `year` at 12:00:00 under `calendar`.
///
/// This is the index used to rebind bare day-number dimensions on pattern
/// model files.
pub fn daily_range(calendar: Calendar, year: i32) -> Vec<CfDate> {
    let mut dates = Vec::with_capacity(calendar.days_in_year(year) as usize);
    for month in 1..=12u8 {
        for day in 1..=calendar.days_in_month(year, month) {
            dates.push(
                CfDate {
                    year,
                    month,
                    day,
                    hour: 12,
                    minute: 0,
                    second: 0,
                },
            );
        }
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_parse() {
        assert_eq!(Calendar::parse("noleap").unwrap(), Calendar::NoLeap);
        assert_eq!(Calendar::parse("365_day").unwrap(), Calendar::NoLeap);
        assert_eq!(Calendar::parse("360_day").unwrap(), Calendar::Day360);
        assert_eq!(
            Calendar::parse("Gregorian").unwrap(),
            Calendar::Standard
        );
        assert!(Calendar::parse("lunar").is_err());
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(Calendar::NoLeap.days_in_year(2000), 365);
        assert_eq!(Calendar::AllLeap.days_in_year(2001), 366);
        assert_eq!(Calendar::Day360.days_in_year(2000), 360);
        assert_eq!(Calendar::ProlepticGregorian.days_in_year(2000), 366);
        assert_eq!(Calendar::ProlepticGregorian.days_in_year(1900), 365);
    }

    #[test]
    fn test_daily_range_noleap() {
        let dates = daily_range(Calendar::NoLeap, 1950);
        assert_eq!(dates.len(), 365);
        assert_eq!(dates[0], CfDate::new(Calendar::NoLeap, 1950, 1, 1).unwrap().at(12, 0, 0));
        assert_eq!(
            *dates.last().unwrap(),
            CfDate::new(Calendar::NoLeap, 1950, 12, 31).unwrap().at(12, 0, 0)
        );
        // Strictly ascending
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_convert_drops_missing_dates() {
        let feb29 = CfDate::new(Calendar::ProlepticGregorian, 2000, 2, 29).unwrap();
        assert!(feb29.convert(Calendar::NoLeap).is_none());
        let feb28 = CfDate::new(Calendar::ProlepticGregorian, 2000, 2, 28).unwrap();
        assert_eq!(feb28.convert(Calendar::NoLeap), Some(feb28));
    }

    #[test]
    fn test_invalid_date_rejected() {
        assert!(CfDate::new(Calendar::NoLeap, 1999, 2, 29).is_err());
        assert!(CfDate::new(Calendar::Day360, 1999, 1, 31).is_err());
        assert!(CfDate::new(Calendar::Day360, 1999, 2, 30).is_ok());
    }
}
