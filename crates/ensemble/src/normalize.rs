//! Per-file normalization applied before any merging.
//!
//! Source files are inconsistent: pattern models index by bare day number
//! instead of time, some files put lat/lon under nlat/nlon dimensions, and
//! calendars differ across models. Every file is pushed through the same
//! normalization so downstream concat and merge see a uniform shape.

use dataset::Dataset;
use prep_common::{daily_range, Calendar, PrepResult};
use tracing::debug;

use crate::resolver::year_from_uri;

/// Calendar all members are converted to.
pub const TARGET_CALENDAR: Calendar = Calendar::NoLeap;

/// Normalize one freshly opened source dataset.
///
/// The file's own location is the only record of which year a pattern
/// model file covers, so it rides along for the day-to-time rebinding.
pub fn normalize(mut ds: Dataset, source_uri: &str, calendar: Calendar) -> PrepResult<Dataset> {
    // Most likely a pattern model with "day" instead of "time". It needs
    // time based on a proper compatible calendar, synthesized from the
    // year encoded in the source location.
    if ds.has_dim("day") && !ds.has_dim("time") {
        let year = year_from_uri(source_uri)? as i32;
        let dates = daily_range(calendar, year);
        debug!(source_uri, year, "rebinding day index to synthesized time");
        ds.rebind_time("day", dates, calendar)?;
    }

    // Some files have nlat/nlon dims with lat/lon as plain variables, but
    // it's inconsistent across files. Fix it so it's consistent.
    if ds.coord("lat").is_none() && ds.has_dim("nlat") {
        ds.promote_coord("lat", "nlat")?;
    }
    if ds.coord("lon").is_none() && ds.has_dim("nlon") {
        ds.promote_coord("lon", "nlon")?;
    }

    ds.convert_time_calendar(calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Coord, DataArray, Values};
    use ndarray::ArrayD;
    use prep_common::CfDate;

    fn pattern_model_file() -> Dataset {
        // 365 bare day numbers, lat/lon as variables over nlat/nlon.
        let mut ds = Dataset::new();
        ds.add_coord("day", Coord::Int((0..365).collect())).unwrap();
        ds.add_var(
            "lat",
            DataArray::new(
                vec!["nlat".to_string()],
                Values::F64(ArrayD::from_shape_vec(vec![2], vec![10.0, 11.0]).unwrap()),
            )
            .unwrap(),
        )
        .unwrap();
        ds.add_var(
            "lon",
            DataArray::new(
                vec!["nlon".to_string()],
                Values::F64(ArrayD::from_shape_vec(vec![3], vec![0.0, 1.0, 2.0]).unwrap()),
            )
            .unwrap(),
        )
        .unwrap();
        ds.add_var(
            "tas",
            DataArray::new(
                vec!["day".to_string(), "nlat".to_string(), "nlon".to_string()],
                Values::F32(ArrayD::zeros(vec![365, 2, 3])),
            )
            .unwrap(),
        )
        .unwrap();
        ds
    }

    #[test]
    fn test_pattern_model_normalization() {
        let uri = "gs://b/tas_day_BCSD_rcp45_r1i1p1_pattern3_2010/1.1.nc4";
        let ds = normalize(pattern_model_file(), uri, TARGET_CALENDAR).unwrap();

        assert!(ds.has_dim("time"));
        assert!(!ds.has_dim("day"));
        let (dates, calendar) = ds.coord("time").unwrap().as_time().unwrap();
        assert_eq!(calendar, Calendar::NoLeap);
        assert_eq!(dates.len(), 365);
        assert_eq!(
            dates[0],
            CfDate::new(Calendar::NoLeap, 2010, 1, 1).unwrap().at(12, 0, 0)
        );

        // lat/lon promoted to coordinates over their own dimensions.
        assert!(ds.coord("lat").is_some());
        assert!(ds.coord("lon").is_some());
        assert_eq!(
            ds.var("tas").unwrap().dims,
            vec!["time", "lat", "lon"]
        );
    }

    #[test]
    fn test_time_indexed_file_passes_through() {
        let mut ds = Dataset::new();
        let dates = daily_range(Calendar::NoLeap, 1999);
        ds.add_coord(
            "time",
            Coord::Time {
                dates: dates.clone(),
                calendar: Calendar::NoLeap,
            },
        )
        .unwrap();
        ds.add_var(
            "tas",
            DataArray::new(
                vec!["time".to_string()],
                Values::F32(ArrayD::zeros(vec![dates.len()])),
            )
            .unwrap(),
        )
        .unwrap();

        // No year in this location; should not be consulted.
        let out = normalize(ds, "gs://b/whatever.nc4", TARGET_CALENDAR).unwrap();
        assert_eq!(out.dim_len("time"), Some(365));
    }

    #[test]
    fn test_leap_calendar_converted() {
        let mut ds = Dataset::new();
        let dates = daily_range(Calendar::Standard, 2000);
        assert_eq!(dates.len(), 366);
        ds.add_coord(
            "time",
            Coord::Time {
                dates: dates.clone(),
                calendar: Calendar::Standard,
            },
        )
        .unwrap();
        ds.add_var(
            "tas",
            DataArray::new(
                vec!["time".to_string()],
                Values::F32(ArrayD::zeros(vec![366])),
            )
            .unwrap(),
        )
        .unwrap();

        let out = normalize(ds, "gs://b/x_2000/1.0.nc4", TARGET_CALENDAR).unwrap();
        // Feb 29 dropped on conversion to noleap.
        assert_eq!(out.dim_len("time"), Some(365));
        let (_, calendar) = out.coord("time").unwrap().as_time().unwrap();
        assert_eq!(calendar, Calendar::NoLeap);
    }

    #[test]
    fn test_bad_year_in_uri_is_fatal() {
        let uri = "gs://b/tas_day_BCSD_rcp45_r1i1p1_pattern3_99999/1.1.nc4";
        assert!(normalize(pattern_model_file(), uri, TARGET_CALENDAR).is_err());
    }
}
