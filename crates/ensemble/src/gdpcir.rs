//! CMIP6 GDPCIR ensemble: combine tasmax and tasmin members and derive a
//! daily-mean tas estimate.

use dataset::{CombineAttrs, DataTree, Dataset, DataArray, Values};
use prep_common::{PrepError, PrepResult};
use tracing::info;

use crate::assemble::DatasetOpener;

/// Source locations for one model run: its historical store and the SSP
/// experiment stores to concatenate onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GdpcirRun {
    pub historical: &'static str,
    pub ssps: &'static [&'static str],
}

/// Splice every run's history onto each of its SSP projections and group
/// the results into a `/experiment_id/source_id` tree.
///
/// Variables from the same model and experiment land in one dataset, so a
/// tasmax run and its tasmin twin merge into a two-variable node. The
/// `experiment_id` comes from the projection; the `source_id` must agree
/// between history and projection, which is what lets it survive the
/// attribute-dropping concat. Either attribute missing is fatal.
pub async fn build_gdpcir_ensemble(
    target_runs: &[GdpcirRun],
    opener: &dyn DatasetOpener,
) -> PrepResult<DataTree> {
    let mut tree = DataTree::new(None);

    for run in target_runs {
        let hist_ds = opener.open(run.historical).await?;

        for ssp_url in run.ssps {
            let proj_ds = opener.open(ssp_url).await?;

            let experiment_id = proj_ds
                .attrs
                .get_str("experiment_id")
                .ok_or_else(|| {
                    PrepError::MissingAttribute(format!("experiment_id on {}", ssp_url))
                })?
                .to_string();

            let concat_ds =
                Dataset::concat([&hist_ds, &proj_ds], "time", CombineAttrs::DropConflicts)?;

            // source_id should match in hist and proj, thus get preserved
            // by the drop-conflicts concat above.
            let source_id = concat_ds
                .attrs
                .get_str("source_id")
                .ok_or_else(|| {
                    PrepError::MissingAttribute(format!("source_id on {}", ssp_url))
                })?;

            let path = format!("/{}/{}", experiment_id, source_id);
            info!(path, ssp_url, "adding run to ensemble");

            let node = match tree.get(&path) {
                Some(existing) => {
                    Dataset::merge([existing, &concat_ds], CombineAttrs::DropConflicts)?
                }
                None => concat_ds,
            };
            tree.insert(&path, node);
        }
    }

    Ok(tree)
}

/// Replace a node's variables with a daily-mean tas estimate.
///
/// Nodes without both tasmax and tasmin pass through untouched; empty
/// intermediate nodes show up in practice and are not an error.
pub fn estimate_tas(ds: &Dataset) -> PrepResult<Dataset> {
    if !(ds.has_var("tasmax") && ds.has_var("tasmin")) {
        return Ok(ds.clone());
    }

    let tasmax = ds.var("tasmax").ok_or_else(|| PrepError::MissingVariable("tasmax".into()))?;
    let tasmin = ds.var("tasmin").ok_or_else(|| PrepError::MissingVariable("tasmin".into()))?;
    if tasmax.dims != tasmin.dims {
        return Err(PrepError::DimensionMismatch(format!(
            "tasmax dims {:?} vs tasmin dims {:?}",
            tasmax.dims, tasmin.dims
        )));
    }

    let values = match (&tasmax.values, &tasmin.values) {
        (Values::F32(max), Values::F32(min)) => Values::F32((max + min) / 2.0),
        (Values::F64(max), Values::F64(min)) => {
            Values::F32(((max + min) / 2.0).mapv(|v| v as f32))
        }
        _ => {
            return Err(PrepError::DimensionMismatch(
                "tasmax and tasmin have different dtypes".to_string(),
            ))
        }
    };

    let mut out = ds.clone();
    out.add_var("tas", DataArray::new(tasmax.dims.clone(), values)?)?;
    out.keep_vars(&["tas"])
}
