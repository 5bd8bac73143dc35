//! Dimension-labeled arrays.

use ndarray::{concatenate, ArrayD, Axis};
use prep_common::{PrepError, PrepResult};

/// Array payload; climate fields are f32, regression products are f64.
#[derive(Debug, Clone, PartialEq)]
pub enum Values {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

impl Values {
    pub fn shape(&self) -> &[usize] {
        match self {
            Values::F32(a) => a.shape(),
            Values::F64(a) => a.shape(),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Zarr data type name.
    pub fn dtype_name(&self) -> &'static str {
        match self {
            Values::F32(_) => "float32",
            Values::F64(_) => "float64",
        }
    }

    /// Concatenate along the given axis, positionally.
    pub fn concat_axis<'a>(
        inputs: impl IntoIterator<Item = &'a Values>,
        axis: usize,
    ) -> PrepResult<Values> {
        let inputs: Vec<&Values> = inputs.into_iter().collect();
        match inputs.first() {
            None => Err(PrepError::DimensionMismatch(
                "concat of zero arrays".to_string(),
            )),
            Some(Values::F32(_)) => {
                let views = inputs
                    .iter()
                    .map(|v| match v {
                        Values::F32(a) => Ok(a.view()),
                        Values::F64(_) => Err(PrepError::DimensionMismatch(
                            "cannot concat float32 with float64".to_string(),
                        )),
                    })
                    .collect::<PrepResult<Vec<_>>>()?;
                concatenate(Axis(axis), &views)
                    .map(Values::F32)
                    .map_err(|e| PrepError::DimensionMismatch(e.to_string()))
            }
            Some(Values::F64(_)) => {
                let views = inputs
                    .iter()
                    .map(|v| match v {
                        Values::F64(a) => Ok(a.view()),
                        Values::F32(_) => Err(PrepError::DimensionMismatch(
                            "cannot concat float64 with float32".to_string(),
                        )),
                    })
                    .collect::<PrepResult<Vec<_>>>()?;
                concatenate(Axis(axis), &views)
                    .map(Values::F64)
                    .map_err(|e| PrepError::DimensionMismatch(e.to_string()))
            }
        }
    }

    /// Keep only the given positions along `axis`, in the given order.
    pub fn select_axis(&self, axis: usize, indices: &[usize]) -> Values {
        match self {
            Values::F32(a) => Values::F32(a.select(Axis(axis), indices)),
            Values::F64(a) => Values::F64(a.select(Axis(axis), indices)),
        }
    }

    /// Whether the slice at `index` along `axis` contains any NaN.
    pub fn has_nan_at(&self, axis: usize, index: usize) -> bool {
        match self {
            Values::F32(a) => a.index_axis(Axis(axis), index).iter().any(|v| v.is_nan()),
            Values::F64(a) => a.index_axis(Axis(axis), index).iter().any(|v| v.is_nan()),
        }
    }
}

/// An array with named dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    /// Dimension names, one per array axis, in axis order.
    pub dims: Vec<String>,
    pub values: Values,
}

impl DataArray {
    pub fn new(dims: Vec<String>, values: Values) -> PrepResult<Self> {
        if dims.len() != values.ndim() {
            return Err(PrepError::DimensionMismatch(format!(
                "{} dims for {}-dimensional array",
                dims.len(),
                values.ndim()
            )));
        }
        Ok(Self { dims, values })
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    /// Axis index of the named dimension.
    pub fn axis_of(&self, dim: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == dim)
    }

    /// Length of the named dimension, if present.
    pub fn dim_len(&self, dim: &str) -> Option<usize> {
        self.axis_of(dim).map(|i| self.shape()[i])
    }

    /// Concatenate arrays along the named dimension, positionally.
    ///
    /// No reordering or label-based alignment happens here: inputs are
    /// assumed pre-sorted and are joined in the order given.
    pub fn concat<'a>(
        inputs: impl IntoIterator<Item = &'a DataArray>,
        dim: &str,
    ) -> PrepResult<DataArray> {
        let inputs: Vec<&DataArray> = inputs.into_iter().collect();
        let first = inputs.first().ok_or_else(|| {
            PrepError::DimensionMismatch("concat of zero arrays".to_string())
        })?;
        let axis = first.axis_of(dim).ok_or_else(|| {
            PrepError::DimensionMismatch(format!("no dimension '{}' to concat along", dim))
        })?;
        for other in &inputs[1..] {
            if other.dims != first.dims {
                return Err(PrepError::DimensionMismatch(format!(
                    "dims {:?} vs {:?}",
                    other.dims, first.dims
                )));
            }
        }
        let values = Values::concat_axis(inputs.iter().map(|a| &a.values), axis)?;
        Ok(DataArray {
            dims: first.dims.clone(),
            values,
        })
    }

    /// Rename a dimension, keeping data untouched.
    pub fn rename_dim(&mut self, old: &str, new: &str) {
        for d in &mut self.dims {
            if d == old {
                *d = new.to_string();
            }
        }
    }

    /// Keep only the given positions along the named dimension.
    pub fn select(&self, dim: &str, indices: &[usize]) -> PrepResult<DataArray> {
        let axis = self.axis_of(dim).ok_or_else(|| {
            PrepError::DimensionMismatch(format!("no dimension '{}' to select along", dim))
        })?;
        Ok(DataArray {
            dims: self.dims.clone(),
            values: self.values.select_axis(axis, indices),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayD;

    fn arr(dims: &[&str], shape: &[usize], fill: f32) -> DataArray {
        DataArray::new(
            dims.iter().map(|s| s.to_string()).collect(),
            Values::F32(ArrayD::from_elem(shape.to_vec(), fill)),
        )
        .unwrap()
    }

    #[test]
    fn test_concat_along_time() {
        let a = arr(&["time", "lat", "lon"], &[365, 4, 4], 1.0);
        let b = arr(&["time", "lat", "lon"], &[366, 4, 4], 2.0);
        let combined = DataArray::concat([&a, &b], "time").unwrap();
        assert_eq!(combined.shape(), &[731, 4, 4]);
    }

    #[test]
    fn test_concat_dim_order_mismatch() {
        let a = arr(&["time", "lat"], &[3, 4], 1.0);
        let b = arr(&["lat", "time"], &[4, 3], 1.0);
        assert!(DataArray::concat([&a, &b], "time").is_err());
    }

    #[test]
    fn test_concat_mixed_dtypes_rejected() {
        let a = arr(&["x"], &[2], 1.0);
        let b = DataArray::new(
            vec!["x".to_string()],
            Values::F64(ArrayD::from_elem(vec![2], 1.0f64)),
        )
        .unwrap();
        assert!(DataArray::concat([&a, &b], "x").is_err());
    }

    #[test]
    fn test_select() {
        let mut data = ArrayD::zeros(vec![3, 2]);
        data[[1, 0]] = 7.0f32;
        let a = DataArray::new(
            vec!["time".to_string(), "lat".to_string()],
            Values::F32(data),
        )
        .unwrap();
        let picked = a.select("time", &[1]).unwrap();
        assert_eq!(picked.shape(), &[1, 2]);
        match picked.values {
            Values::F32(v) => assert_eq!(v[[0, 0]], 7.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_has_nan_at() {
        let mut data = ArrayD::zeros(vec![2, 2]);
        data[[1, 1]] = f32::NAN;
        let values = Values::F32(data);
        assert!(!values.has_nan_at(0, 0));
        assert!(values.has_nan_at(0, 1));
    }
}
