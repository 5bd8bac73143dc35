//! Population-weighted segment weights.
//!
//! The source table maps census tracts to climate-grid cells with a
//! population weight per pair. A tract appears once per grid cell it
//! touches, so region labels repeat; the dataset keeps the rows as-is
//! under a repeated `region` index.

use dataset::{Coord, DataArray, Dataset, Values};
use ndarray::ArrayD;
use prep_common::{PrepError, PrepResult};

use crate::table::Table;

/// Wrap a 0..360 longitude into the -180..180 convention.
///
/// rem_euclid keeps the intermediate non-negative before the shift.
fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Clean the segment-weights table into a dataset.
///
/// GEOID becomes the `region` labels, longitude/latitude become `lon` and
/// `lat` with longitudes wrapped to -180..180, and every other numeric
/// column passes through under its own name.
pub fn clean_segment_weights(table: &Table) -> PrepResult<Dataset> {
    let regions = table.column("GEOID")?.to_vec();
    let n = regions.len();

    let mut ds = Dataset::new();
    ds.add_coord("region", Coord::Str(regions))?;

    let lon: Vec<f64> = table
        .float_column("longitude")?
        .into_iter()
        .map(wrap_longitude)
        .collect();
    add_column(&mut ds, "lon", lon, n)?;
    add_column(&mut ds, "lat", table.float_column("latitude")?, n)?;

    for header in table.headers() {
        if matches!(header.as_str(), "GEOID" | "longitude" | "latitude") {
            continue;
        }
        add_column(&mut ds, header, table.float_column(header)?, n)?;
    }

    Ok(ds)
}

fn add_column(ds: &mut Dataset, name: &str, values: Vec<f64>, n: usize) -> PrepResult<()> {
    let array = ArrayD::from_shape_vec(vec![n], values)
        .map_err(|e| PrepError::DimensionMismatch(e.to_string()))?;
    ds.add_var(
        name.to_string(),
        DataArray::new(vec!["region".to_string()], Values::F64(array))?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(240.0), -120.0);
        assert_eq!(wrap_longitude(200.0), -160.0);
        assert_eq!(wrap_longitude(120.0), 120.0);
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(360.0), 0.0);
        // 180 lands on the negative edge of the half-open interval.
        assert_eq!(wrap_longitude(180.0), -180.0);
        assert_eq!(wrap_longitude(-10.0), -10.0);
        // Already-western longitudes are unchanged.
        assert_eq!(wrap_longitude(-120.0), -120.0);
    }

    #[test]
    fn test_clean_segment_weights() {
        let table = Table::from_str(
            "GEOID,longitude,latitude,weight\n\
             06001400100,240.125,37.875,0.6\n\
             06001400100,240.375,37.875,0.4\n\
             06002400200,241.125,38.125,1.0\n",
        )
        .unwrap();

        let ds = clean_segment_weights(&table).unwrap();

        // Repeated tract labels are preserved row-for-row.
        assert_eq!(
            ds.coord("region").unwrap().as_str_labels().unwrap(),
            &["06001400100", "06001400100", "06002400200"]
        );
        match &ds.var("lon").unwrap().values {
            Values::F64(a) => {
                assert_eq!(a[[0]], -119.875);
                assert_eq!(a[[2]], -118.875);
            }
            _ => panic!("expected f64"),
        }
        match &ds.var("weight").unwrap().values {
            Values::F64(a) => assert_eq!(a[[1]], 0.4),
            _ => panic!("expected f64"),
        }
        assert!(ds.has_var("lat"));
        assert!(!ds.has_var("longitude"));
    }

    #[test]
    fn test_missing_geoid_is_fatal() {
        let table = Table::from_str("id,longitude,latitude\n1,240.0,37.0\n").unwrap();
        assert!(clean_segment_weights(&table).is_err());
    }
}
