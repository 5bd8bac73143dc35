//! Zarr v3 writing of datasets and trees to a local staging directory.
//!
//! Output is written locally with `zarrs` and uploaded file-by-file
//! afterwards; nothing here talks to object storage. Arrays carry their
//! dimension names both in Zarr metadata and under the `_ARRAY_DIMENSIONS`
//! attribute so other readers can reattach coordinates.

use std::path::Path;
use std::sync::Arc;

use serde_json::Map;
use tracing::debug;
use zarrs::array::codec::bytes_to_bytes::blosc::{
    BloscCodec, BloscCompressionLevel, BloscCompressor, BloscShuffleMode,
};
use zarrs::array::{ArrayBuilder, DataType, DimensionName, FillValue};
use zarrs::array_subset::ArraySubset;
use zarrs::group::GroupBuilder;
use zarrs_filesystem::FilesystemStore;

use dataset::{ChunkSpec, Coord, DataTree, Dataset, Values};
use prep_common::{PrepError, PrepResult};

use crate::cf_time;

/// Attribute naming an array's dimensions, as written by common Zarr
/// tooling.
pub const DIMENSIONS_ATTR: &str = "_ARRAY_DIMENSIONS";

const COMPRESSION_LEVEL: u8 = 5;

/// Write a dataset as a Zarr group at the root of `dir`.
pub fn write_zarr_dataset(ds: &Dataset, dir: &Path, chunks: &ChunkSpec) -> PrepResult<()> {
    let store = open_store(dir)?;
    write_node(&store, "/", ds, chunks)?;
    debug!(path = %dir.display(), vars = ds.var_names().len(), "wrote zarr dataset");
    Ok(())
}

/// Write a tree as nested Zarr groups under `dir`, one group per leaf.
pub fn write_zarr_tree(tree: &DataTree, dir: &Path, chunks: &ChunkSpec) -> PrepResult<()> {
    let store = open_store(dir)?;

    let mut root_attrs = tree.attrs.to_json_map();
    if let Some(name) = &tree.name {
        root_attrs.insert("name".to_string(), serde_json::json!(name));
    }
    write_group(&store, "/", root_attrs)?;

    // Every ancestor of a leaf needs its own group metadata.
    for path in ancestor_paths(tree) {
        write_group(&store, &path, Map::new())?;
    }
    for (path, ds) in tree.leaves() {
        write_node(&store, path, ds, chunks)?;
    }

    debug!(path = %dir.display(), leaves = tree.len(), "wrote zarr tree");
    Ok(())
}

fn open_store(dir: &Path) -> PrepResult<Arc<FilesystemStore>> {
    std::fs::create_dir_all(dir)?;
    let store = FilesystemStore::new(dir)
        .map_err(|e| PrepError::ZarrError(format!("Failed to open store: {}", e)))?;
    Ok(Arc::new(store))
}

/// Intermediate group paths between the root and the leaves, sorted.
fn ancestor_paths(tree: &DataTree) -> Vec<String> {
    let mut paths: Vec<String> = Vec::new();
    for (leaf, _) in tree.leaves() {
        let segments: Vec<&str> = leaf.trim_matches('/').split('/').collect();
        for depth in 1..segments.len() {
            paths.push(format!("/{}", segments[..depth].join("/")));
        }
    }
    paths.sort();
    paths.dedup();
    paths
}

fn write_group(
    store: &Arc<FilesystemStore>,
    path: &str,
    attrs: Map<String, serde_json::Value>,
) -> PrepResult<()> {
    GroupBuilder::new()
        .attributes(attrs)
        .build(store.clone(), path)
        .map_err(|e| PrepError::ZarrError(format!("Failed to build group {}: {}", path, e)))?
        .store_metadata()
        .map_err(|e| PrepError::ZarrError(format!("Failed to write group {}: {}", path, e)))?;
    Ok(())
}

/// Write one dataset: its group, its coordinate arrays, then its variables.
fn write_node(
    store: &Arc<FilesystemStore>,
    path: &str,
    ds: &Dataset,
    chunks: &ChunkSpec,
) -> PrepResult<()> {
    write_group(store, path, ds.attrs.to_json_map())?;

    for (name, coord) in ds.coords() {
        write_coord(store, &join(path, name), name, coord, chunks)?;
    }
    for (name, var) in ds.vars() {
        let shape: Vec<u64> = var.shape().iter().map(|&s| s as u64).collect();
        let chunk_shape = chunks.chunk_shape(&var.dims, var.shape());
        match &var.values {
            Values::F32(a) => {
                let data: Vec<f32> = a.iter().copied().collect();
                write_elements(
                    store,
                    &join(path, name),
                    &var.dims,
                    shape,
                    chunk_shape,
                    DataType::Float32,
                    FillValue::from(f32::NAN),
                    &data,
                    Map::new(),
                )?;
            }
            Values::F64(a) => {
                let data: Vec<f64> = a.iter().copied().collect();
                write_elements(
                    store,
                    &join(path, name),
                    &var.dims,
                    shape,
                    chunk_shape,
                    DataType::Float64,
                    FillValue::from(f64::NAN),
                    &data,
                    Map::new(),
                )?;
            }
        }
    }
    Ok(())
}

fn write_coord(
    store: &Arc<FilesystemStore>,
    array_path: &str,
    dim: &str,
    coord: &Coord,
    chunks: &ChunkSpec,
) -> PrepResult<()> {
    let dims = vec![dim.to_string()];
    let shape = vec![coord.len() as u64];
    let chunk_shape = chunks.chunk_shape(&dims, &[coord.len()]);

    match coord {
        Coord::Str(labels) => write_elements(
            store,
            array_path,
            &dims,
            shape,
            chunk_shape,
            DataType::String,
            FillValue::from(""),
            labels,
            Map::new(),
        ),
        Coord::Int(values) => write_elements(
            store,
            array_path,
            &dims,
            shape,
            chunk_shape,
            DataType::Int64,
            FillValue::from(0i64),
            values,
            Map::new(),
        ),
        Coord::Float(values) => write_elements(
            store,
            array_path,
            &dims,
            shape,
            chunk_shape,
            DataType::Float64,
            FillValue::from(f64::NAN),
            values,
            Map::new(),
        ),
        Coord::Time { dates, calendar } => {
            let encoded = cf_time::encode_days(dates, *calendar);
            let mut attrs = Map::new();
            attrs.insert("units".to_string(), serde_json::json!(cf_time::ENCODE_UNITS));
            attrs.insert(
                "calendar".to_string(),
                serde_json::json!(calendar.as_str()),
            );
            write_elements(
                store,
                array_path,
                &dims,
                shape,
                chunk_shape,
                DataType::Float64,
                FillValue::from(f64::NAN),
                &encoded,
                attrs,
            )
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn write_elements<T: zarrs::array::Element + Clone>(
    store: &Arc<FilesystemStore>,
    array_path: &str,
    dims: &[String],
    shape: Vec<u64>,
    chunk_shape: Vec<u64>,
    data_type: DataType,
    fill_value: FillValue,
    data: &[T],
    mut attrs: Map<String, serde_json::Value>,
) -> PrepResult<()> {
    attrs.insert(DIMENSIONS_ATTR.to_string(), serde_json::json!(dims));

    let chunk_grid: zarrs::array::ChunkGrid = chunk_shape
        .try_into()
        .map_err(|e| PrepError::ZarrError(format!("{:?}", e)))?;
    let dim_names: Vec<DimensionName> = dims.iter().map(|d| d.as_str().into()).collect();

    let array = ArrayBuilder::new(shape.clone(), data_type, chunk_grid, fill_value)
        .attributes(attrs)
        .dimension_names(Some(dim_names))
        .bytes_to_bytes_codecs(vec![compression_codec()?])
        .build(store.clone(), array_path)
        .map_err(|e| {
            PrepError::ZarrError(format!("Failed to build array {}: {}", array_path, e))
        })?;

    array
        .store_metadata()
        .map_err(|e| PrepError::ZarrError(format!("Failed to write {}: {}", array_path, e)))?;

    let subset = ArraySubset::new_with_shape(shape);
    array
        .store_array_subset_elements(&subset, data)
        .map_err(|e| PrepError::ZarrError(format!("Failed to write {}: {}", array_path, e)))?;

    Ok(())
}

fn compression_codec() -> PrepResult<Arc<dyn zarrs::array::codec::BytesToBytesCodecTraits>> {
    let level = BloscCompressionLevel::try_from(COMPRESSION_LEVEL)
        .map_err(|_| PrepError::ZarrError("Invalid compression level".to_string()))?;
    let codec = BloscCodec::new(
        BloscCompressor::Zstd,
        level,
        None,
        BloscShuffleMode::Shuffle,
        Some(4),
    )
    .map_err(|e| PrepError::ZarrError(e.to_string()))?;
    Ok(Arc::new(codec))
}

fn join(group: &str, name: &str) -> String {
    if group == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", group.trim_end_matches('/'), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(join("/", "tas"), "/tas");
        assert_eq!(join("/historical/CCSM4/tas", "tas"), "/historical/CCSM4/tas/tas");
    }

    #[test]
    fn test_ancestor_paths() {
        let mut tree = DataTree::new(None);
        tree.insert("/historical/CCSM4/tas", Dataset::new());
        tree.insert("/rcp45/CCSM4/tas", Dataset::new());

        assert_eq!(
            ancestor_paths(&tree),
            vec![
                "/historical".to_string(),
                "/historical/CCSM4".to_string(),
                "/rcp45".to_string(),
                "/rcp45/CCSM4".to_string(),
            ]
        );
    }
}
