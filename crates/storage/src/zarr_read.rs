//! Zarr v3 reading back into the in-memory dataset model.
//!
//! Structure discovery is filesystem-level: a directory with `zarr.json`
//! is a node, and a group whose immediate children include arrays is a
//! leaf dataset. Dimension names come from the `_ARRAY_DIMENSIONS`
//! attribute written alongside every array.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use zarrs::array::{Array, DataType};
use zarrs::array_subset::ArraySubset;
use zarrs_filesystem::FilesystemStore;

use dataset::{Attrs, Coord, DataArray, DataTree, Dataset, Values};
use prep_common::{Calendar, PrepError, PrepResult};

use crate::cf_time;
use crate::zarr_write::DIMENSIONS_ATTR;

/// Read the Zarr group at `group_path` within `dir` as a dataset.
pub fn read_zarr_dataset(dir: &Path, group_path: &str) -> PrepResult<Dataset> {
    let store = open_store(dir)?;
    let fs_group = dir.join(group_path.trim_matches('/'));
    read_node(&store, &fs_group, group_path)
}

/// Read a whole Zarr hierarchy under `dir` as a tree.
///
/// Every group that directly holds arrays becomes a leaf keyed by its
/// path from the root.
pub fn read_zarr_tree(dir: &Path) -> PrepResult<DataTree> {
    let store = open_store(dir)?;

    let mut root_attrs = group_attrs(dir)?;
    let name = root_attrs
        .remove("name")
        .and_then(|v| v.as_str().map(String::from));
    let mut tree = DataTree::new(name);
    tree.attrs = Attrs::from_json_map(&root_attrs);

    let mut leaves = Vec::new();
    collect_leaf_groups(dir, "", &mut leaves)?;
    for rel in &leaves {
        let path = format!("/{}", rel);
        let ds = read_node(&store, &dir.join(rel), &path)?;
        tree.insert(&path, ds);
    }

    debug!(path = %dir.display(), leaves = tree.len(), "read zarr tree");
    Ok(tree)
}

fn open_store(dir: &Path) -> PrepResult<Arc<FilesystemStore>> {
    let store = FilesystemStore::new(dir)
        .map_err(|e| PrepError::ZarrError(format!("Failed to open store: {}", e)))?;
    Ok(Arc::new(store))
}

/// The `node_type` of the Zarr node rooted at `dir`, if it is one.
fn node_type(dir: &Path) -> PrepResult<Option<String>> {
    let metadata_path = dir.join("zarr.json");
    if !metadata_path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(&metadata_path)?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(value
        .get("node_type")
        .and_then(Value::as_str)
        .map(String::from))
}

fn group_attrs(dir: &Path) -> PrepResult<serde_json::Map<String, Value>> {
    let raw = std::fs::read_to_string(dir.join("zarr.json")).map_err(|e| {
        PrepError::ZarrError(format!("no group metadata in {}: {}", dir.display(), e))
    })?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(value
        .get("attributes")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default())
}

/// Child node directories of a group, split into (arrays, groups).
fn children(dir: &Path) -> PrepResult<(Vec<String>, Vec<String>)> {
    let mut arrays = Vec::new();
    let mut groups = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let child_name = entry.file_name().to_string_lossy().to_string();
        match node_type(&entry.path())?.as_deref() {
            Some("array") => arrays.push(child_name),
            Some("group") => groups.push(child_name),
            _ => {}
        }
    }
    arrays.sort();
    groups.sort();
    Ok((arrays, groups))
}

/// Depth-first search for groups that directly hold arrays.
fn collect_leaf_groups(dir: &Path, rel: &str, leaves: &mut Vec<String>) -> PrepResult<()> {
    let (arrays, groups) = children(dir)?;
    if !arrays.is_empty() && !rel.is_empty() {
        leaves.push(rel.to_string());
    }
    for group in groups {
        let child_rel = if rel.is_empty() {
            group.clone()
        } else {
            format!("{}/{}", rel, group)
        };
        collect_leaf_groups(&dir.join(&group), &child_rel, leaves)?;
    }
    Ok(())
}

/// Read one group's arrays as a dataset, coordinates first.
fn read_node(store: &Arc<FilesystemStore>, fs_group: &Path, group_path: &str) -> PrepResult<Dataset> {
    let mut ds = Dataset::new();
    ds.attrs = Attrs::from_json_map(&group_attrs(fs_group)?);

    let (array_names, _) = children(fs_group)?;
    let mut vars: Vec<(String, DataArray)> = Vec::new();

    for name in array_names {
        let array_path = if group_path == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", group_path.trim_end_matches('/'), name)
        };
        let array = Array::open(store.clone(), &array_path)
            .map_err(|e| PrepError::ZarrError(format!("Failed to open {}: {}", array_path, e)))?;

        let dims = array_dims(&array, &array_path)?;
        if dims.len() == 1 && dims[0] == name {
            ds.add_coord(name, read_coord(&array, &array_path)?)?;
        } else {
            vars.push((name, read_var(&array, dims, &array_path)?));
        }
    }
    for (name, var) in vars {
        ds.add_var(name, var)?;
    }
    Ok(ds)
}

fn array_dims(array: &Array<FilesystemStore>, path: &str) -> PrepResult<Vec<String>> {
    array
        .attributes()
        .get(DIMENSIONS_ATTR)
        .and_then(Value::as_array)
        .map(|dims| {
            dims.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .ok_or_else(|| {
            PrepError::ZarrError(format!("array {} has no dimension names", path))
        })
}

fn full_subset(array: &Array<FilesystemStore>) -> ArraySubset {
    ArraySubset::new_with_shape(array.shape().to_vec())
}

fn read_coord(array: &Array<FilesystemStore>, path: &str) -> PrepResult<Coord> {
    let read_err =
        |e: zarrs::array::ArrayError| PrepError::ZarrError(format!("Failed to read {}: {}", path, e));

    match array.data_type() {
        DataType::String => {
            let labels: Vec<String> = array
                .retrieve_array_subset_elements(&full_subset(array))
                .map_err(read_err)?;
            Ok(Coord::Str(labels))
        }
        DataType::Int64 => {
            let values: Vec<i64> = array
                .retrieve_array_subset_elements(&full_subset(array))
                .map_err(read_err)?;
            Ok(Coord::Int(values))
        }
        DataType::Float64 => {
            let values: Vec<f64> = array
                .retrieve_array_subset_elements(&full_subset(array))
                .map_err(read_err)?;
            let attrs = array.attributes();
            match attrs.get("units").and_then(Value::as_str) {
                Some(units) if units.contains(" since ") => {
                    let calendar = match attrs.get("calendar").and_then(Value::as_str) {
                        Some(name) => Calendar::parse(name)?,
                        None => Calendar::Standard,
                    };
                    let dates = cf_time::decode(&values, units, calendar)?;
                    Ok(Coord::Time { dates, calendar })
                }
                _ => Ok(Coord::Float(values)),
            }
        }
        other => Err(PrepError::ZarrError(format!(
            "unsupported coordinate data type {} for {}",
            other, path
        ))),
    }
}

fn read_var(
    array: &Array<FilesystemStore>,
    dims: Vec<String>,
    path: &str,
) -> PrepResult<DataArray> {
    let shape: Vec<usize> = array.shape().iter().map(|&s| s as usize).collect();
    let read_err =
        |e: zarrs::array::ArrayError| PrepError::ZarrError(format!("Failed to read {}: {}", path, e));
    let shape_err = |e: ndarray::ShapeError| PrepError::ZarrError(e.to_string());

    let values = match array.data_type() {
        DataType::Float32 => {
            let data: Vec<f32> = array
                .retrieve_array_subset_elements(&full_subset(array))
                .map_err(read_err)?;
            Values::F32(ndarray::ArrayD::from_shape_vec(shape, data).map_err(shape_err)?)
        }
        DataType::Float64 => {
            let data: Vec<f64> = array
                .retrieve_array_subset_elements(&full_subset(array))
                .map_err(read_err)?;
            Values::F64(ndarray::ArrayD::from_shape_vec(shape, data).map_err(shape_err)?)
        }
        other => {
            return Err(PrepError::ZarrError(format!(
                "unsupported variable data type {} for {}",
                other, path
            )))
        }
    };
    DataArray::new(dims, values)
}
