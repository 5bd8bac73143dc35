//! TIGER census-tract shapefile cleaning.
//!
//! Reads tract polygons, duplicates the GEOID under the `region` name the
//! projection system joins on, and writes geometry as WKB so any Parquet
//! reader with geospatial support can consume it.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, BinaryArray, RecordBatch, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use prep_common::{PrepError, PrepResult};
use shapefile::dbase::FieldValue;
use shapefile::{Polygon, PolygonRing, Shape};
use tracing::info;

/// One cleaned census tract.
#[derive(Debug, Clone, PartialEq)]
pub struct Tract {
    pub geoid: String,
    /// Geometry as a WKB MultiPolygon.
    pub geometry_wkb: Vec<u8>,
}

/// Read and clean a tract shapefile.
///
/// Non-polygon shapes and records without a GEOID field are fatal; the
/// TIGER layout guarantees both.
pub fn read_tracts(shp_path: &Path) -> PrepResult<Vec<Tract>> {
    let mut reader = shapefile::Reader::from_path(shp_path)
        .map_err(|e| PrepError::TabularError(e.to_string()))?;

    let mut tracts = Vec::new();
    for pair in reader.iter_shapes_and_records() {
        let (shape, record) = pair.map_err(|e| PrepError::TabularError(e.to_string()))?;

        let geoid = match record.get("GEOID") {
            Some(FieldValue::Character(Some(s))) => s.trim().to_string(),
            _ => {
                return Err(PrepError::TabularError(
                    "record without a GEOID field".to_string(),
                ))
            }
        };

        let polygon = match shape {
            Shape::Polygon(p) => p,
            other => {
                return Err(PrepError::TabularError(format!(
                    "expected polygon geometry for tract {}, found {}",
                    geoid, other
                )))
            }
        };

        tracts.push(Tract {
            geoid,
            geometry_wkb: polygon_to_wkb(&polygon),
        });
    }

    info!(count = tracts.len(), "read tract geometries");
    Ok(tracts)
}

/// Encode a shapefile polygon as a WKB MultiPolygon.
///
/// Shapefile polygons are a flat ring list where each outer ring implicitly
/// starts a new polygon and subsequent inner rings are its holes.
pub fn polygon_to_wkb(polygon: &Polygon) -> Vec<u8> {
    const LITTLE_ENDIAN: u8 = 1;
    const WKB_POLYGON: u32 = 3;
    const WKB_MULTIPOLYGON: u32 = 6;

    // Group the flat ring list into polygons.
    let mut polygons: Vec<Vec<&PolygonRing<shapefile::Point>>> = Vec::new();
    for ring in polygon.rings() {
        match ring {
            PolygonRing::Outer(_) => polygons.push(vec![ring]),
            PolygonRing::Inner(_) => match polygons.last_mut() {
                Some(current) => current.push(ring),
                None => polygons.push(vec![ring]),
            },
        }
    }

    let mut wkb = Vec::new();
    wkb.push(LITTLE_ENDIAN);
    wkb.extend_from_slice(&WKB_MULTIPOLYGON.to_le_bytes());
    wkb.extend_from_slice(&(polygons.len() as u32).to_le_bytes());

    for rings in polygons {
        wkb.push(LITTLE_ENDIAN);
        wkb.extend_from_slice(&WKB_POLYGON.to_le_bytes());
        wkb.extend_from_slice(&(rings.len() as u32).to_le_bytes());
        for ring in rings {
            let points = ring.points();
            wkb.extend_from_slice(&(points.len() as u32).to_le_bytes());
            for point in points {
                wkb.extend_from_slice(&point.x.to_le_bytes());
                wkb.extend_from_slice(&point.y.to_le_bytes());
            }
        }
    }
    wkb
}

/// Lay cleaned tracts out as an Arrow batch: GEOID, region, geometry.
pub fn tracts_to_batch(tracts: &[Tract]) -> PrepResult<RecordBatch> {
    let schema = Schema::new(vec![
        Field::new("GEOID", DataType::Utf8, false),
        Field::new("region", DataType::Utf8, false),
        Field::new("geometry", DataType::Binary, false),
    ]);

    let geoids: Vec<&str> = tracts.iter().map(|t| t.geoid.as_str()).collect();
    let geometry: Vec<&[u8]> = tracts.iter().map(|t| t.geometry_wkb.as_slice()).collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(geoids.clone())),
        // region is the GEOID under the name downstream joins use.
        Arc::new(StringArray::from(geoids)),
        Arc::new(BinaryArray::from_vec(geometry)),
    ];

    RecordBatch::try_new(Arc::new(schema), columns)
        .map_err(|e| PrepError::TabularError(e.to_string()))
}

/// Write cleaned tracts as a Parquet file.
pub fn write_tracts_parquet<W: Write + Send>(tracts: &[Tract], writer: W) -> PrepResult<()> {
    let batch = tracts_to_batch(tracts)?;
    let props = WriterProperties::builder().build();
    let mut parquet_writer = ArrowWriter::try_new(writer, batch.schema(), Some(props))
        .map_err(|e| PrepError::TabularError(e.to_string()))?;
    parquet_writer
        .write(&batch)
        .map_err(|e| PrepError::TabularError(e.to_string()))?;
    parquet_writer
        .close()
        .map_err(|e| PrepError::TabularError(e.to_string()))?;
    Ok(())
}
