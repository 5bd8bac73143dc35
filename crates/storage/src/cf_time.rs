//! CF-convention time encoding for NetCDF and Zarr time coordinates.
//!
//! Time axes are persisted as numeric offsets from a base date named in a
//! `units` attribute ("days since 1950-01-01 00:00:00"), interpreted under
//! the model calendar. All arithmetic here is calendar-aware; chrono never
//! sees these dates.

use prep_common::{Calendar, CfDate, PrepError, PrepResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// Units string written for encoded time coordinates.
pub const ENCODE_UNITS: &str = "days since 1850-01-01 00:00:00";

/// Base date matching [`ENCODE_UNITS`].
const ENCODE_BASE: CfDate = CfDate {
    year: 1850,
    month: 1,
    day: 1,
    hour: 0,
    minute: 0,
    second: 0,
};

/// Days from the calendar's year-1 origin to the given date.
fn ordinal_day(calendar: Calendar, date: &CfDate) -> i64 {
    let mut days: i64 = 0;
    for year in 1..date.year {
        days += calendar.days_in_year(year) as i64;
    }
    for month in 1..date.month {
        days += calendar.days_in_month(date.year, month) as i64;
    }
    days + date.day as i64 - 1
}

/// Inverse of [`ordinal_day`], with midnight time-of-day.
fn from_ordinal_day(calendar: Calendar, ordinal: i64) -> PrepResult<CfDate> {
    if ordinal < 0 {
        return Err(PrepError::InvalidDate(format!(
            "time offset resolves to {} days before year 1",
            -ordinal
        )));
    }
    let mut days = ordinal;
    let mut year = 1i32;
    loop {
        let len = calendar.days_in_year(year) as i64;
        if days < len {
            break;
        }
        days -= len;
        year += 1;
    }
    let mut month = 1u8;
    loop {
        let len = calendar.days_in_month(year, month) as i64;
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }
    CfDate::new(calendar, year, month, days as u8 + 1)
}

fn seconds_of_day(date: &CfDate) -> i64 {
    date.hour as i64 * 3600 + date.minute as i64 * 60 + date.second as i64
}

/// Encode dates as fractional days since the standard base.
pub fn encode_days(dates: &[CfDate], calendar: Calendar) -> Vec<f64> {
    let base = ordinal_day(calendar, &ENCODE_BASE);
    dates
        .iter()
        .map(|d| {
            let whole = (ordinal_day(calendar, d) - base) as f64;
            whole + seconds_of_day(d) as f64 / SECONDS_PER_DAY as f64
        })
        .collect()
}

/// Parse a CF units string into seconds-per-unit and the base date.
pub fn parse_units(units: &str, calendar: Calendar) -> PrepResult<(i64, CfDate)> {
    let mut parts = units.split_whitespace();
    let unit = parts
        .next()
        .ok_or_else(|| PrepError::InvalidDate(format!("empty time units: '{}'", units)))?;
    let unit_seconds = match unit.to_lowercase().as_str() {
        "days" | "day" | "d" => SECONDS_PER_DAY,
        "hours" | "hour" | "h" => 3600,
        "minutes" | "minute" | "min" => 60,
        "seconds" | "second" | "s" => 1,
        other => {
            return Err(PrepError::InvalidDate(format!(
                "unsupported time unit '{}'",
                other
            )))
        }
    };

    if parts.next() != Some("since") {
        return Err(PrepError::InvalidDate(format!(
            "unexpected time units format: '{}'",
            units
        )));
    }

    let date_part = parts
        .next()
        .ok_or_else(|| PrepError::InvalidDate(format!("time units without a base: '{}'", units)))?;
    let mut ymd = date_part.split('-');
    let (year, month, day) = match (ymd.next(), ymd.next(), ymd.next()) {
        (Some(y), Some(m), Some(d)) => {
            let parse = |s: &str, field: &str| {
                s.parse::<i64>().map_err(|_| {
                    PrepError::InvalidDate(format!("bad {} in time base '{}'", field, date_part))
                })
            };
            (parse(y, "year")?, parse(m, "month")?, parse(d, "day")?)
        }
        _ => {
            return Err(PrepError::InvalidDate(format!(
                "bad time base date '{}'",
                date_part
            )))
        }
    };
    let mut base = CfDate::new(calendar, year as i32, month as u8, day as u8)?;

    // Optional HH:MM:SS part; a trailing timezone marker is ignored.
    if let Some(time_part) = parts.next() {
        let mut hms = time_part.split(':');
        if let (Some(h), Some(m)) = (hms.next(), hms.next()) {
            let h = h.parse::<u8>().unwrap_or(0);
            let m = m.parse::<u8>().unwrap_or(0);
            let s = hms
                .next()
                .and_then(|s| s.split('.').next())
                .and_then(|s| s.parse::<u8>().ok())
                .unwrap_or(0);
            base = base.at(h, m, s);
        }
    }

    Ok((unit_seconds, base))
}

/// Decode numeric offsets under a CF units string into dates.
pub fn decode(offsets: &[f64], units: &str, calendar: Calendar) -> PrepResult<Vec<CfDate>> {
    let (unit_seconds, base) = parse_units(units, calendar)?;
    let base_seconds = ordinal_day(calendar, &base) * SECONDS_PER_DAY + seconds_of_day(&base);

    offsets
        .iter()
        .map(|&offset| {
            let total = base_seconds + (offset * unit_seconds as f64).round() as i64;
            let date = from_ordinal_day(calendar, total.div_euclid(SECONDS_PER_DAY))?;
            let secs = total.rem_euclid(SECONDS_PER_DAY);
            Ok(date.at(
                (secs / 3600) as u8,
                (secs % 3600 / 60) as u8,
                (secs % 60) as u8,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_common::calendar::daily_range;

    #[test]
    fn test_decode_noon_offsets() {
        let dates = decode(&[0.5, 1.5], "days since 2006-01-01", Calendar::NoLeap).unwrap();
        assert_eq!(
            dates[0],
            CfDate::new(Calendar::NoLeap, 2006, 1, 1).unwrap().at(12, 0, 0)
        );
        assert_eq!(
            dates[1],
            CfDate::new(Calendar::NoLeap, 2006, 1, 2).unwrap().at(12, 0, 0)
        );
    }

    #[test]
    fn test_decode_crosses_year_boundary() {
        let dates = decode(&[365.0], "days since 1950-01-01", Calendar::NoLeap).unwrap();
        assert_eq!(dates[0], CfDate::new(Calendar::NoLeap, 1951, 1, 1).unwrap());

        // Leap-aware calendars land a day earlier.
        let dates = decode(
            &[365.0],
            "days since 1952-01-01",
            Calendar::ProlepticGregorian,
        )
        .unwrap();
        assert_eq!(
            dates[0],
            CfDate::new(Calendar::ProlepticGregorian, 1952, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_decode_360_day() {
        let dates = decode(&[30.0], "days since 2000-01-01", Calendar::Day360).unwrap();
        assert_eq!(dates[0], CfDate::new(Calendar::Day360, 2000, 2, 1).unwrap());
    }

    #[test]
    fn test_decode_hours_with_base_time() {
        let dates = decode(
            &[36.0],
            "hours since 2000-01-01 00:00:00",
            Calendar::NoLeap,
        )
        .unwrap();
        assert_eq!(
            dates[0],
            CfDate::new(Calendar::NoLeap, 2000, 1, 2).unwrap().at(12, 0, 0)
        );
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let dates = daily_range(Calendar::NoLeap, 2050);
        let encoded = encode_days(&dates, Calendar::NoLeap);
        let decoded = decode(&encoded, ENCODE_UNITS, Calendar::NoLeap).unwrap();
        assert_eq!(decoded, dates);
    }

    #[test]
    fn test_bad_units_rejected() {
        assert!(decode(&[0.0], "fortnights since 2000-01-01", Calendar::NoLeap).is_err());
        assert!(decode(&[0.0], "days after 2000-01-01", Calendar::NoLeap).is_err());
        assert!(decode(&[0.0], "days since someday", Calendar::NoLeap).is_err());
    }
}
