//! Second-stage tree merging.
//!
//! The assembled tree keeps every `/scenario/model/variable` leaf
//! separate. This pass splices each projection onto its historical run
//! and folds the variables of a model into one dataset per
//! `/scenario/model` node.

use dataset::{CombineAttrs, DataTree, Dataset};
use prep_common::{PrepError, PrepResult};
use tracing::info;

/// Merge historical runs into the projection scenarios.
///
/// For every non-historical leaf, the matching historical run is found
/// through the leaf's `source_id` attribute rather than its tree name, so
/// pattern models pick up the real model's history. A projection with no
/// historical counterpart is fatal.
pub fn merge_scenarios(tree: &DataTree) -> PrepResult<DataTree> {
    let mut merged = DataTree::new(tree.name.clone());

    for scenario in tree.child_names() {
        if scenario.eq_ignore_ascii_case("historical") {
            continue;
        }

        // Group this scenario's leaves by model.
        let mut by_model: Vec<(String, Vec<(String, &Dataset)>)> = Vec::new();
        for (rest, ds) in tree.children_of(&scenario) {
            let (model, variable) = rest
                .split_once('/')
                .ok_or_else(|| {
                    PrepError::InternalError(format!(
                        "expected model/variable under '{}', got '{}'",
                        scenario, rest
                    ))
                })?;
            match by_model.iter_mut().find(|(m, _)| m == model) {
                Some((_, leaves)) => leaves.push((variable.to_string(), ds)),
                None => by_model.push((
                    model.to_string(),
                    vec![(variable.to_string(), ds)],
                )),
            }
        }

        for (model, leaves) in by_model {
            let path = format!("/{}/{}", scenario, model);
            info!(path, "splicing historical run");

            let mut variable_dss = Vec::with_capacity(leaves.len());
            for (variable, future_ds) in leaves {
                // Pattern models have a different name in future and
                // historical projections; the real model is in the attrs.
                let source_id = future_ds
                    .attrs
                    .get_str("source_id")
                    .ok_or_else(|| {
                        PrepError::MissingAttribute(format!(
                            "source_id on {}/{}",
                            path, variable
                        ))
                    })?;

                let hist_path = format!("/historical/{}/{}", source_id, variable);
                let hist_ds = tree.get(&hist_path).ok_or_else(|| {
                    PrepError::MissingHistorical(hist_path.clone())
                })?;

                variable_dss.push(Dataset::concat(
                    [hist_ds, future_ds],
                    "time",
                    CombineAttrs::DropConflicts,
                )?);
            }

            merged.insert(
                &path,
                Dataset::merge(&variable_dss, CombineAttrs::DropConflicts)?,
            );
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dataset::{Coord, DataArray, Values};
    use ndarray::ArrayD;
    use prep_common::{daily_range, Calendar};

    fn leaf(variable: &str, year: i32, source_id: &str, value: f32) -> Dataset {
        let dates = daily_range(Calendar::NoLeap, year);
        let len = dates.len();
        let mut ds = Dataset::new();
        ds.add_coord(
            "time",
            Coord::Time {
                dates,
                calendar: Calendar::NoLeap,
            },
        )
        .unwrap();
        ds.add_var(
            variable,
            DataArray::new(
                vec!["time".to_string()],
                Values::F32(ArrayD::from_elem(vec![len], value)),
            )
            .unwrap(),
        )
        .unwrap();
        ds.attrs.insert("source_id", source_id);
        ds
    }

    #[test]
    fn test_merge_splices_history_and_variables() {
        let mut tree = DataTree::new(Some("cmip5".to_string()));
        tree.insert("/historical/CCSM4/tas", leaf("tas", 2005, "CCSM4", 1.0));
        tree.insert("/historical/CCSM4/tasmax", leaf("tasmax", 2005, "CCSM4", 2.0));
        tree.insert("/rcp45/CCSM4/tas", leaf("tas", 2006, "CCSM4", 3.0));
        tree.insert("/rcp45/CCSM4/tasmax", leaf("tasmax", 2006, "CCSM4", 4.0));

        let merged = merge_scenarios(&tree).unwrap();
        assert_eq!(merged.len(), 1);

        let ds = merged.get("/rcp45/CCSM4").unwrap();
        assert!(ds.has_var("tas"));
        assert!(ds.has_var("tasmax"));
        assert_eq!(ds.dim_len("time"), Some(730));

        let (dates, _) = ds.coord("time").unwrap().as_time().unwrap();
        assert_eq!(dates[0].year, 2005);
        assert_eq!(dates[729].year, 2006);
    }

    #[test]
    fn test_pattern_model_uses_source_history() {
        let mut tree = DataTree::new(None);
        tree.insert("/historical/CanESM2/tas", leaf("tas", 2005, "CanESM2", 1.0));
        tree.insert("/rcp45/pattern30/tas", leaf("tas", 2006, "CanESM2", 2.0));

        let merged = merge_scenarios(&tree).unwrap();
        let ds = merged.get("/rcp45/pattern30").unwrap();
        assert_eq!(ds.dim_len("time"), Some(730));
    }

    #[test]
    fn test_missing_historical_is_fatal() {
        let mut tree = DataTree::new(None);
        tree.insert("/rcp45/CCSM4/tas", leaf("tas", 2006, "CCSM4", 1.0));

        assert!(matches!(
            merge_scenarios(&tree),
            Err(PrepError::MissingHistorical(_))
        ));
    }

    #[test]
    fn test_missing_source_id_is_fatal() {
        let mut tree = DataTree::new(None);
        tree.insert("/historical/CCSM4/tas", leaf("tas", 2005, "CCSM4", 1.0));
        let mut future = leaf("tas", 2006, "CCSM4", 2.0);
        future.attrs = Default::default();
        tree.insert("/rcp45/CCSM4/tas", future);

        assert!(matches!(
            merge_scenarios(&tree),
            Err(PrepError::MissingAttribute(_))
        ));
    }

    #[test]
    fn test_historical_not_in_output() {
        let mut tree = DataTree::new(None);
        tree.insert("/historical/CCSM4/tas", leaf("tas", 2005, "CCSM4", 1.0));
        tree.insert("/rcp45/CCSM4/tas", leaf("tas", 2006, "CCSM4", 2.0));

        let merged = merge_scenarios(&tree).unwrap();
        assert!(merged.get("/historical/CCSM4").is_none());
        assert_eq!(merged.child_names(), vec!["rcp45".to_string()]);
    }
}
