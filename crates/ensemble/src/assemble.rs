//! Ensemble member assembly.
//!
//! If the ensemble is a tree, each member is a leaf: one scenario, one
//! model, one variable, backed by a list of yearly source files.

use async_trait::async_trait;
use dataset::{CombineAttrs, DataTree, Dataset};
use prep_common::PrepResult;
use tracing::info;

use crate::catalog::Cmip5Catalog;
use crate::normalize::{normalize, TARGET_CALENDAR};
use crate::resolver::{format_uri, year_from_uri};

/// Opens a dataset from a source location.
///
/// Backends differ per job (NetCDF objects, Zarr stores); members only
/// care that a location turns into a dataset.
#[async_trait]
pub trait DatasetOpener: Send + Sync {
    async fn open(&self, uri: &str) -> PrepResult<Dataset>;
}

/// One leaf of the ensemble tree.
#[derive(Debug, Clone)]
pub struct EnsembleMember {
    /// Model name as it appears in the tree, e.g. `pattern30`.
    pub name: String,
    /// Real model behind this member; differs from `name` for patterns.
    pub source_id: String,
    pub scenario_id: String,
    pub variable_id: String,
    pub source_uris: Vec<String>,
}

impl EnsembleMember {
    /// Tree path for this member: `/scenario/model/variable`.
    pub fn tree_path(&self) -> String {
        format!("/{}/{}/{}", self.scenario_id, self.name, self.variable_id)
    }

    /// Source locations sorted ascending by the year each one covers.
    ///
    /// Concatenation is positional, so ordering here is what makes the
    /// member's time axis monotonic.
    fn ordered_uris(&self) -> PrepResult<Vec<&str>> {
        let mut keyed: Vec<(i64, &str)> = self
            .source_uris
            .iter()
            .map(|uri| year_from_uri(uri).map(|y| (y, uri.as_str())))
            .collect::<PrepResult<_>>()?;
        keyed.sort_by_key(|(year, _)| *year);
        Ok(keyed.into_iter().map(|(_, uri)| uri).collect())
    }

    /// Open, normalize, and concatenate this member's files along time.
    ///
    /// Provenance rides along in the result's attributes.
    pub async fn to_dataset(&self, opener: &dyn DatasetOpener) -> PrepResult<Dataset> {
        let mut parts = Vec::with_capacity(self.source_uris.len());
        for uri in self.ordered_uris()? {
            let ds = opener.open(uri).await?;
            parts.push(normalize(ds, uri, TARGET_CALENDAR)?);
        }

        let mut ds = Dataset::concat(&parts, "time", CombineAttrs::DropConflicts)?;
        ds.attrs.insert(
            "source_uris",
            serde_json::Value::from(self.source_uris.clone()),
        );
        ds.attrs.insert("source_id", self.source_id.as_str());
        ds.attrs.insert("scenario_id", self.scenario_id.as_str());
        ds.attrs.insert("name", self.name.as_str());
        Ok(ds)
    }
}

/// Expand the catalog into all ensemble members, keyed by tree path.
///
/// Pattern mappings are resolved here, before any data is opened, so a
/// pattern model with no historical source fails the whole run up front.
pub fn expand_members(
    catalog: &Cmip5Catalog,
    file_pattern: &str,
) -> PrepResult<Vec<EnsembleMember>> {
    catalog.validate()?;

    let mut members = Vec::new();
    for variable in &catalog.variables {
        for scenario in &catalog.scenarios {
            for model in &scenario.models {
                let source_id = catalog.source_for(&scenario.scenario_id, model)?;
                let uris: Vec<String> = scenario
                    .years
                    .clone()
                    .map(|year| {
                        format_uri(
                            file_pattern,
                            &scenario.scenario_id,
                            model,
                            &variable.variable_id,
                            &variable.version,
                            year,
                        )
                    })
                    .collect();
                members.push(EnsembleMember {
                    name: model.clone(),
                    source_id: source_id.to_string(),
                    scenario_id: scenario.scenario_id.clone(),
                    variable_id: variable.variable_id.clone(),
                    source_uris: uris,
                });
            }
        }
    }
    Ok(members)
}

/// Assemble every member into a flat tree of `/scenario/model/variable`
/// leaves.
pub async fn assemble_tree(
    members: &[EnsembleMember],
    opener: &dyn DatasetOpener,
    name: &str,
) -> PrepResult<DataTree> {
    let mut tree = DataTree::new(Some(name.to_string()));
    for member in members {
        let path = member.tree_path();
        info!(path, files = member.source_uris.len(), "assembling member");
        tree.insert(&path, member.to_dataset(opener).await?);
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Coord, DataArray, Values};
    use ndarray::ArrayD;
    use prep_common::{daily_range, Calendar};

    struct YearStub;

    #[async_trait]
    impl DatasetOpener for YearStub {
        async fn open(&self, uri: &str) -> PrepResult<Dataset> {
            // Value encodes the year so ordering is observable after concat.
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
                    Values::F32(ArrayD::from_elem(vec![len], year as f32)),
                )?,
            )?;
            Ok(ds)
        }
    }

    fn member() -> EnsembleMember {
        // Deliberately unordered source list.
        EnsembleMember {
            name: "CCSM4".to_string(),
            source_id: "CCSM4".to_string(),
            scenario_id: "historical".to_string(),
            variable_id: "tas".to_string(),
            source_uris: vec![
                "gs://b/tas_day_BCSD_historical_r1i1p1_CCSM4_1951/1.1.nc4".to_string(),
                "gs://b/tas_day_BCSD_historical_r1i1p1_CCSM4_1950/1.1.nc4".to_string(),
            ],
        }
    }

    #[tokio::test]
    async fn test_member_concat_ordered_by_year() {
        let ds = member().to_dataset(&YearStub).await.unwrap();
        assert_eq!(ds.dim_len("time"), Some(730));

        let (dates, _) = ds.coord("time").unwrap().as_time().unwrap();
        assert_eq!(dates[0].year, 1950);
        assert_eq!(dates[729].year, 1951);

        match &ds.var("tas").unwrap().values {
            Values::F32(a) => {
                assert_eq!(a[[0]], 1950.0);
                assert_eq!(a[[729]], 1951.0);
            }
            _ => panic!("expected f32"),
        }
    }

    #[tokio::test]
    async fn test_member_provenance_attrs() {
        let ds = member().to_dataset(&YearStub).await.unwrap();
        assert_eq!(ds.attrs.get_str("source_id"), Some("CCSM4"));
        assert_eq!(ds.attrs.get_str("scenario_id"), Some("historical"));
        assert_eq!(ds.attrs.get_str("name"), Some("CCSM4"));
        // Original (unsorted) list is recorded as given.
        let uris = ds.attrs.get("source_uris").unwrap();
        assert_eq!(uris.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_expand_members_counts() {
        let catalog = Cmip5Catalog::nasa_nex();
        let members = expand_members(&catalog, crate::resolver::FILE_PATTERN).unwrap();
        // 3 variables x (21 + 32 + 33) scenario-model combinations.
        assert_eq!(members.len(), 3 * (21 + 32 + 33));

        let historical = members
            .iter()
            .find(|m| m.tree_path() == "/historical/CCSM4/tas")
            .unwrap();
        assert_eq!(historical.source_uris.len(), 56);
        assert!(historical.source_uris[0].ends_with(
            "historical/CCSM4/tas/tas_day_BCSD_historical_r1i1p1_CCSM4_1950/1.1.nc4"
        ));

        let pattern = members
            .iter()
            .find(|m| m.tree_path() == "/rcp45/pattern30/tasmax")
            .unwrap();
        assert_eq!(pattern.source_id, "CanESM2");
        assert_eq!(pattern.source_uris.len(), 94);
    }
}
