//! End-to-end assembly and merge of a small synthetic ensemble.

use async_trait::async_trait;
use dataset::{Coord, DataArray, Dataset, Values};
use ensemble::{
    assemble_tree, merge_scenarios, year_from_uri, DatasetOpener, EnsembleMember,
};
use ndarray::ArrayD;
use prep_common::{daily_range, Calendar, PrepResult};

/// Serves a one-variable yearly file for whatever year the URI names.
struct SyntheticArchive;

#[async_trait]
impl DatasetOpener for SyntheticArchive {
    async fn open(&self, uri: &str) -> PrepResult<Dataset> {
        let year = year_from_uri(uri)? as i32;
        let dates = daily_range(Calendar::NoLeap, year);
        let len = dates.len();

        let mut ds = Dataset::new();
        ds.add_coord(
            "time",
            Coord::Time {
                dates,
                calendar: Calendar::NoLeap,
            },
        )?;
        ds.add_var(
            "tas",
            DataArray::new(
                vec!["time".to_string()],
                Values::F32(
                    ArrayD::from_shape_vec(vec![len], vec![year as f32; len])
                        .expect("shape matches data"),
                ),
            )?,
        )?;
        Ok(ds)
    }
}

fn yearly_uri(scenario: &str, year: i32) -> String {
    format!(
        "gs://archive/{scenario}/CCSM4/tas/tas_day_BCSD_{scenario}_r1i1p1_CCSM4_{year}/1.1.nc4"
    )
}

fn member(scenario: &str, years: impl Iterator<Item = i32>) -> EnsembleMember {
    EnsembleMember {
        name: "CCSM4".to_string(),
        source_id: "CCSM4".to_string(),
        scenario_id: scenario.to_string(),
        variable_id: "tas".to_string(),
        source_uris: years.map(|y| yearly_uri(scenario, y)).collect(),
    }
}

#[tokio::test]
async fn test_assembles_three_years_into_one_series() {
    // Years supplied out of order; the assembled axis must still ascend.
    let member = member("historical", [1951, 1950, 1952].into_iter());
    let tree = assemble_tree(&[member], &SyntheticArchive, "cmip5")
        .await
        .unwrap();

    let ds = tree.get("/historical/CCSM4/tas").unwrap();
    assert_eq!(ds.dim_len("time"), Some(365 * 3));
    assert_eq!(ds.attrs.get_str("source_id"), Some("CCSM4"));
    assert_eq!(ds.attrs.get_str("scenario_id"), Some("historical"));

    let (dates, _) = ds.coord("time").unwrap().as_time().unwrap();
    assert_eq!(dates[0].year, 1950);
    assert_eq!(dates[365].year, 1951);
    assert_eq!(dates.last().unwrap().year, 1952);
}

#[tokio::test]
async fn test_merge_splices_history_onto_projection() {
    let members = vec![
        member("historical", 1950..1953),
        member("rcp45", 2006..2008),
    ];
    let tree = assemble_tree(&members, &SyntheticArchive, "cmip5")
        .await
        .unwrap();
    let merged = merge_scenarios(&tree).unwrap();

    assert!(merged.get("/historical/CCSM4").is_none());
    let ds = merged.get("/rcp45/CCSM4").unwrap();
    assert_eq!(ds.dim_len("time"), Some(365 * 5));

    let (dates, _) = ds.coord("time").unwrap().as_time().unwrap();
    assert_eq!(dates[0].year, 1950);
    assert_eq!(dates.last().unwrap().year, 2007);
}
