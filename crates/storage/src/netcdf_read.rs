//! NetCDF reading into the in-memory dataset model.
//!
//! The netcdf library wraps libnetcdf/HDF5 and needs a real file handle,
//! so byte buffers fetched from object storage are staged through a temp
//! file before opening.

use std::path::Path;

use ndarray::ArrayD;
use netcdf::types::{FloatType, NcVariableType};
use netcdf::AttributeValue;
use tracing::debug;

use dataset::{Coord, DataArray, Dataset, Values};
use prep_common::{Calendar, PrepError, PrepResult};

use crate::cf_time;

/// Calendar assumed when a time variable carries no `calendar` attribute.
const DEFAULT_CALENDAR: Calendar = Calendar::Standard;

/// Stage a NetCDF byte buffer to a temp file and read it.
pub fn read_netcdf_bytes(data: &[u8]) -> PrepResult<Dataset> {
    let staged = tempfile::Builder::new()
        .prefix("prep_")
        .suffix(".nc")
        .tempfile()?;
    std::fs::write(staged.path(), data)?;
    read_netcdf_file(staged.path())
}

/// Read a NetCDF file into a [`Dataset`].
///
/// One-dimensional variables named after their dimension become
/// coordinates; a coordinate whose `units` attribute is a CF time base is
/// decoded into dates under its `calendar` attribute. Numeric variables
/// get `scale_factor`/`add_offset` applied and `_FillValue` mapped to NaN.
pub fn read_netcdf_file(path: &Path) -> PrepResult<Dataset> {
    let file = netcdf::open(path).map_err(to_err)?;
    let mut ds = Dataset::new();

    for attr in file.attributes() {
        if let Some(value) = attr_to_json(&attr.value().map_err(to_err)?) {
            ds.attrs.insert(attr.name(), value);
        }
    }

    // Coordinates first so variable dimension checks see their lengths.
    for var in file.variables() {
        if is_coord_var(&var) {
            ds.add_coord(var.name(), read_coord(&var)?)?;
        }
    }
    for var in file.variables() {
        if is_coord_var(&var) {
            continue;
        }
        let dims: Vec<String> = var.dimensions().iter().map(|d| d.name()).collect();
        ds.add_var(var.name(), DataArray::new(dims, read_values(&var)?)?)?;
    }

    debug!(
        vars = ds.var_names().len(),
        path = %path.display(),
        "read netcdf file"
    );
    Ok(ds)
}

fn is_coord_var(var: &netcdf::Variable) -> bool {
    let dims = var.dimensions();
    dims.len() == 1 && dims[0].name() == var.name()
}

fn read_coord(var: &netcdf::Variable) -> PrepResult<Coord> {
    match var.vartype() {
        NcVariableType::String => {
            let len = var.dimensions()[0].len();
            let labels = (0..len)
                .map(|i| var.get_string(i).map_err(to_err))
                .collect::<PrepResult<Vec<String>>>()?;
            Ok(Coord::Str(labels))
        }
        NcVariableType::Int(_) => {
            let values = var.get_values::<i64, _>(..).map_err(to_err)?;
            Ok(Coord::Int(values))
        }
        NcVariableType::Float(_) => {
            let values = var.get_values::<f64, _>(..).map_err(to_err)?;
            match str_attr(var, "units") {
                Some(units) if units.contains(" since ") => {
                    let calendar = match str_attr(var, "calendar") {
                        Some(name) => Calendar::parse(&name)?,
                        None => DEFAULT_CALENDAR,
                    };
                    let dates = cf_time::decode(&values, &units, calendar)?;
                    Ok(Coord::Time { dates, calendar })
                }
                _ => Ok(Coord::Float(values)),
            }
        }
        other => Err(PrepError::NetCdfError(format!(
            "unsupported coordinate type {:?} for '{}'",
            other,
            var.name()
        ))),
    }
}

fn read_values(var: &netcdf::Variable) -> PrepResult<Values> {
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let scale = num_attr(var, "scale_factor");
    let offset = num_attr(var, "add_offset");
    let fill = num_attr(var, "_FillValue");

    match var.vartype() {
        NcVariableType::Float(FloatType::F32) => {
            let scale = scale.unwrap_or(1.0) as f32;
            let offset = offset.unwrap_or(0.0) as f32;
            let fill = fill.map(|f| f as f32);
            let data: Vec<f32> = var
                .get_values::<f32, _>(..)
                .map_err(to_err)?
                .into_iter()
                .map(|v| match fill {
                    Some(f) if v == f => f32::NAN,
                    _ => v * scale + offset,
                })
                .collect();
            Ok(Values::F32(
                ArrayD::from_shape_vec(shape, data).map_err(shape_err)?,
            ))
        }
        NcVariableType::Float(FloatType::F64) | NcVariableType::Int(_) => {
            let scale = scale.unwrap_or(1.0);
            let offset = offset.unwrap_or(0.0);
            let data: Vec<f64> = var
                .get_values::<f64, _>(..)
                .map_err(to_err)?
                .into_iter()
                .map(|v| match fill {
                    Some(f) if v == f => f64::NAN,
                    _ => v * scale + offset,
                })
                .collect();
            Ok(Values::F64(
                ArrayD::from_shape_vec(shape, data).map_err(shape_err)?,
            ))
        }
        other => Err(PrepError::NetCdfError(format!(
            "unsupported variable type {:?} for '{}'",
            other,
            var.name()
        ))),
    }
}

fn str_attr(var: &netcdf::Variable, name: &str) -> Option<String> {
    match var.attribute_value(name)?.ok()? {
        AttributeValue::Str(s) => Some(s),
        _ => None,
    }
}

fn num_attr(var: &netcdf::Variable, name: &str) -> Option<f64> {
    let value = var.attribute_value(name)?.ok()?;
    f64::try_from(value).ok()
}

fn attr_to_json(value: &AttributeValue) -> Option<serde_json::Value> {
    match value {
        AttributeValue::Str(s) => Some(serde_json::json!(s)),
        AttributeValue::Strs(v) => Some(serde_json::json!(v)),
        AttributeValue::Double(v) => Some(serde_json::json!(v)),
        AttributeValue::Float(v) => Some(serde_json::json!(v)),
        AttributeValue::Int(v) => Some(serde_json::json!(v)),
        AttributeValue::Uint(v) => Some(serde_json::json!(v)),
        AttributeValue::Longlong(v) => Some(serde_json::json!(v)),
        AttributeValue::Ulonglong(v) => Some(serde_json::json!(v)),
        AttributeValue::Short(v) => Some(serde_json::json!(v)),
        AttributeValue::Ushort(v) => Some(serde_json::json!(v)),
        AttributeValue::Schar(v) => Some(serde_json::json!(v)),
        AttributeValue::Uchar(v) => Some(serde_json::json!(v)),
        _ => None,
    }
}

fn to_err(e: netcdf::Error) -> PrepError {
    PrepError::NetCdfError(e.to_string())
}

fn shape_err(e: ndarray::ShapeError) -> PrepError {
    PrepError::NetCdfError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prep_common::CfDate;

    /// Write a small daily file the way the source archives lay theirs out.
    fn write_sample(path: &Path) {
        let mut file = netcdf::create(path).unwrap();
        file.add_dimension("time", 3).unwrap();
        file.add_dimension("lat", 2).unwrap();

        let mut time = file.add_variable::<f64>("time", &["time"]).unwrap();
        time.put_values(&[0.5, 1.5, 2.5], ..).unwrap();
        time.put_attribute("units", "days since 2006-01-01")
            .unwrap();
        time.put_attribute("calendar", "noleap").unwrap();

        let mut lat = file.add_variable::<f64>("lat", &["lat"]).unwrap();
        lat.put_values(&[10.0, 20.0], ..).unwrap();

        let mut tas = file.add_variable::<f32>("tas", &["time", "lat"]).unwrap();
        // _FillValue must be defined before any data is written (NC_ELATEFILL)
        tas.put_attribute("_FillValue", -9999.0f32).unwrap();
        tas.put_values(&[280.0, 281.0, -9999.0, 283.0, 284.0, 285.0], ..)
            .unwrap();
    }

    #[test]
    fn test_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.nc");
        write_sample(&path);

        let ds = read_netcdf_file(&path).unwrap();

        assert_eq!(ds.dim_len("time"), Some(3));
        assert_eq!(ds.dim_len("lat"), Some(2));
        let (dates, calendar) = ds.coord("time").unwrap().as_time().unwrap();
        assert_eq!(calendar, Calendar::NoLeap);
        assert_eq!(
            dates[0],
            CfDate::new(Calendar::NoLeap, 2006, 1, 1).unwrap().at(12, 0, 0)
        );
        assert_eq!(ds.coord("lat").unwrap().as_float().unwrap(), &[10.0, 20.0]);

        match &ds.var("tas").unwrap().values {
            Values::F32(a) => {
                assert_eq!(a[[0, 0]], 280.0);
                assert!(a[[1, 0]].is_nan());
                assert_eq!(a[[2, 1]], 285.0);
            }
            _ => panic!("expected f32"),
        }
    }

    #[test]
    fn test_read_bytes_stages_through_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.nc");
        write_sample(&path);
        let bytes = std::fs::read(&path).unwrap();

        let ds = read_netcdf_bytes(&bytes).unwrap();
        assert!(ds.has_var("tas"));
        assert_eq!(ds.dim_len("time"), Some(3));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        assert!(read_netcdf_file(Path::new("/nonexistent/no.nc")).is_err());
    }
}
