//! Source location resolution for the NASA NEX CMIP5 archive.

use prep_common::{PrepError, PrepResult};

/// Layout of the reformatted NEX-GDDP BCSD archive.
///
/// This was originally in the rhg-data GCS bucket in the original
/// analysis but it appears to have moved to impactlab-data.
pub const FILE_PATTERN: &str = "gs://impactlab-data/climate/source_data/NASA/NEX-GDDP/BCSD/reformatted/{scenario_id}/{source_id}/{variable_id}/{variable_id}_day_BCSD_{scenario_id}_r1i1p1_{source_id}_{year}/{version}.nc4";

/// Fill a `{placeholder}` template with the member's identifiers.
pub fn format_uri(
    pattern: &str,
    scenario_id: &str,
    source_id: &str,
    variable_id: &str,
    version: &str,
    year: i32,
) -> String {
    pattern
        .replace("{scenario_id}", scenario_id)
        .replace("{source_id}", source_id)
        .replace("{variable_id}", variable_id)
        .replace("{version}", version)
        .replace("{year}", &year.to_string())
}

/// Figure out what year a source file covers from its location alone.
///
/// Assumes the location ends like
/// `.../tasmax_day_BCSD_rcp45_r1i1p1_pattern30_2010/1.0.nc4`. Working
/// backwards from the path because the front changes based on bucket name
/// or access method. Years outside (1000, 3000) are rejected as a sanity
/// check.
pub fn year_from_uri(uri: &str) -> PrepResult<i64> {
    let parent = uri
        .rsplit('/')
        .nth(1)
        .ok_or_else(|| PrepError::YearFromUri(uri.to_string()))?;
    let token = parent
        .rsplit('_')
        .next()
        .ok_or_else(|| PrepError::YearFromUri(uri.to_string()))?;
    let year: i64 = token
        .parse()
        .map_err(|_| PrepError::YearFromUri(uri.to_string()))?;
    if !(1000 < year && year < 3000) {
        return Err(PrepError::YearOutOfRange {
            year,
            uri: uri.to_string(),
        });
    }
    Ok(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uri() {
        let uri = format_uri(FILE_PATTERN, "rcp45", "pattern30", "tasmax", "1.0", 2010);
        assert_eq!(
            uri,
            "gs://impactlab-data/climate/source_data/NASA/NEX-GDDP/BCSD/reformatted/\
             rcp45/pattern30/tasmax/tasmax_day_BCSD_rcp45_r1i1p1_pattern30_2010/1.0.nc4"
        );
    }

    #[test]
    fn test_year_from_uri() {
        let uri = "/gcs/bucket/tasmax_day_BCSD_rcp45_r1i1p1_pattern30_2010/1.0.nc4";
        assert_eq!(year_from_uri(uri).unwrap(), 2010);
    }

    #[test]
    fn test_year_survives_prefix_change() {
        // Same trailing layout under a different access prefix.
        let a = "gs://impactlab-data/x/tas_day_BCSD_historical_r1i1p1_CCSM4_1987/1.1.nc4";
        let b = "/gcs/impactlab-data/x/tas_day_BCSD_historical_r1i1p1_CCSM4_1987/1.1.nc4";
        assert_eq!(year_from_uri(a).unwrap(), year_from_uri(b).unwrap());
    }

    #[test]
    fn test_unparseable_year_is_fatal() {
        let uri = "gs://bucket/no_year_here/1.0.nc4";
        assert!(matches!(
            year_from_uri(uri),
            Err(PrepError::YearFromUri(_))
        ));
    }

    #[test]
    fn test_year_out_of_range_is_fatal() {
        let uri = "gs://bucket/tas_day_BCSD_rcp45_r1i1p1_CCSM4_20100/1.0.nc4";
        assert!(matches!(
            year_from_uri(uri),
            Err(PrepError::YearOutOfRange { year: 20100, .. })
        ));
    }
}
