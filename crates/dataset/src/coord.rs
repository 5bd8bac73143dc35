//! Coordinate vectors.

use prep_common::{Calendar, CfDate, PrepError, PrepResult};

/// One-dimensional coordinate values for a named dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum Coord {
    /// String labels (region ids, age cohorts, covariate names).
    Str(Vec<String>),
    /// Integer labels (polynomial degree, sample index).
    Int(Vec<i64>),
    /// Floating labels (latitude, longitude).
    Float(Vec<f64>),
    /// Timestamps under a model calendar.
    Time {
        dates: Vec<CfDate>,
        calendar: Calendar,
    },
}

impl Coord {
    pub fn len(&self) -> usize {
        match self {
            Coord::Str(v) => v.len(),
            Coord::Int(v) => v.len(),
            Coord::Float(v) => v.len(),
            Coord::Time { dates, .. } => dates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate coordinate vectors positionally, in input order.
    ///
    /// Time coordinates must share a calendar; mixing variants is an error.
    pub fn concat<'a>(inputs: impl IntoIterator<Item = &'a Coord>) -> PrepResult<Coord> {
        let mut iter = inputs.into_iter();
        let first = iter
            .next()
            .ok_or_else(|| PrepError::DimensionMismatch("concat of zero coords".to_string()))?;
        let mut out = first.clone();
        for coord in iter {
            match (&mut out, coord) {
                (Coord::Str(a), Coord::Str(b)) => a.extend(b.iter().cloned()),
                (Coord::Int(a), Coord::Int(b)) => a.extend(b.iter().copied()),
                (Coord::Float(a), Coord::Float(b)) => a.extend(b.iter().copied()),
                (
                    Coord::Time { dates, calendar },
                    Coord::Time {
                        dates: other,
                        calendar: other_cal,
                    },
                ) => {
                    if calendar != other_cal {
                        return Err(PrepError::DimensionMismatch(format!(
                            "cannot concat time coords with calendars {} and {}",
                            calendar, other_cal
                        )));
                    }
                    dates.extend(other.iter().copied());
                }
                _ => {
                    return Err(PrepError::DimensionMismatch(
                        "cannot concat coordinate vectors of different kinds".to_string(),
                    ))
                }
            }
        }
        Ok(out)
    }

    /// Keep only the given positions, in the given order.
    pub fn select(&self, indices: &[usize]) -> Coord {
        match self {
            Coord::Str(v) => Coord::Str(indices.iter().map(|&i| v[i].clone()).collect()),
            Coord::Int(v) => Coord::Int(indices.iter().map(|&i| v[i]).collect()),
            Coord::Float(v) => Coord::Float(indices.iter().map(|&i| v[i]).collect()),
            Coord::Time { dates, calendar } => Coord::Time {
                dates: indices.iter().map(|&i| dates[i]).collect(),
                calendar: *calendar,
            },
        }
    }

    /// Time-coordinate accessor.
    pub fn as_time(&self) -> Option<(&[CfDate], Calendar)> {
        match self {
            Coord::Time { dates, calendar } => Some((dates, *calendar)),
            _ => None,
        }
    }

    /// String-label accessor.
    pub fn as_str_labels(&self) -> Option<&[String]> {
        match self {
            Coord::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Float-value accessor.
    pub fn as_float(&self) -> Option<&[f64]> {
        match self {
            Coord::Float(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_common::calendar::daily_range;

    #[test]
    fn test_concat_time_coords() {
        let a = Coord::Time {
            dates: daily_range(Calendar::NoLeap, 1950),
            calendar: Calendar::NoLeap,
        };
        let b = Coord::Time {
            dates: daily_range(Calendar::NoLeap, 1951),
            calendar: Calendar::NoLeap,
        };
        let combined = Coord::concat([&a, &b]).unwrap();
        assert_eq!(combined.len(), 730);
        let (dates, _) = combined.as_time().unwrap();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_concat_calendar_mismatch() {
        let a = Coord::Time {
            dates: daily_range(Calendar::NoLeap, 1950),
            calendar: Calendar::NoLeap,
        };
        let b = Coord::Time {
            dates: daily_range(Calendar::Day360, 1951),
            calendar: Calendar::Day360,
        };
        assert!(Coord::concat([&a, &b]).is_err());
    }

    #[test]
    fn test_select() {
        let c = Coord::Str(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(
            c.select(&[2, 0]),
            Coord::Str(vec!["c".into(), "a".into()])
        );
    }
}
