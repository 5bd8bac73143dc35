//! Collections of labeled arrays sharing dimensions and coordinates.

use std::collections::BTreeMap;

use ndarray::ArrayD;
use prep_common::{Calendar, CfDate, PrepError, PrepResult};

use crate::array::{DataArray, Values};
use crate::attrs::Attrs;
use crate::coord::Coord;

/// How to combine attributes when joining datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineAttrs {
    /// Discard all attributes.
    Drop,
    /// Keep the union of attributes, silently dropping conflicting keys.
    DropConflicts,
}

/// A set of named arrays over shared named dimensions, with optional
/// one-dimensional coordinates and provenance attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    dims: BTreeMap<String, usize>,
    coords: BTreeMap<String, Coord>,
    vars: BTreeMap<String, DataArray>,
    pub attrs: Attrs,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    // === Accessors ===

    pub fn dim_len(&self, dim: &str) -> Option<usize> {
        self.dims.get(dim).copied()
    }

    pub fn has_dim(&self, dim: &str) -> bool {
        self.dims.contains_key(dim)
    }

    pub fn dims(&self) -> impl Iterator<Item = (&String, usize)> {
        self.dims.iter().map(|(k, &v)| (k, v))
    }

    pub fn coord(&self, name: &str) -> Option<&Coord> {
        self.coords.get(name)
    }

    pub fn coords(&self) -> impl Iterator<Item = (&String, &Coord)> {
        self.coords.iter()
    }

    pub fn var(&self, name: &str) -> Option<&DataArray> {
        self.vars.get(name)
    }

    pub fn vars(&self) -> impl Iterator<Item = (&String, &DataArray)> {
        self.vars.iter()
    }

    pub fn var_names(&self) -> Vec<&str> {
        self.vars.keys().map(String::as_str).collect()
    }

    pub fn has_var(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    // === Construction ===

    /// Register a dimension length, checking consistency with prior uses.
    fn check_dim(&mut self, dim: &str, len: usize) -> PrepResult<()> {
        match self.dims.get(dim) {
            None => {
                self.dims.insert(dim.to_string(), len);
                Ok(())
            }
            Some(&existing) if existing == len => Ok(()),
            Some(&existing) => Err(PrepError::DimensionMismatch(format!(
                "conflicting sizes for dimension '{}': {} and {}",
                dim, existing, len
            ))),
        }
    }

    /// Attach a coordinate; the coordinate name is also a dimension name.
    pub fn add_coord(&mut self, name: impl Into<String>, coord: Coord) -> PrepResult<()> {
        let name = name.into();
        self.check_dim(&name, coord.len())?;
        self.coords.insert(name, coord);
        Ok(())
    }

    /// Attach a data variable; its dims must agree with known sizes.
    pub fn add_var(&mut self, name: impl Into<String>, array: DataArray) -> PrepResult<()> {
        let name = name.into();
        for (dim, &len) in array.dims.iter().zip(array.shape().iter()) {
            self.check_dim(dim, len)?;
        }
        self.vars.insert(name, array);
        Ok(())
    }

    /// Remove a data variable.
    pub fn remove_var(&mut self, name: &str) -> Option<DataArray> {
        self.vars.remove(name)
    }

    /// Keep only the named variables, in catalog order; missing names are
    /// fatal.
    pub fn keep_vars(&self, names: &[&str]) -> PrepResult<Dataset> {
        let mut out = Dataset {
            attrs: self.attrs.clone(),
            ..Dataset::new()
        };
        for (name, coord) in &self.coords {
            out.add_coord(name.clone(), coord.clone())?;
        }
        for &name in names {
            let var = self
                .vars
                .get(name)
                .ok_or_else(|| PrepError::MissingVariable(name.to_string()))?;
            out.add_var(name.to_string(), var.clone())?;
        }
        out.prune_dims();
        Ok(out)
    }

    /// Drop dimensions (and their coords) no variable uses.
    fn prune_dims(&mut self) {
        let used: Vec<String> = self
            .vars
            .values()
            .flat_map(|v| v.dims.iter().cloned())
            .collect();
        self.dims.retain(|d, _| used.iter().any(|u| u == d));
        let dims = self.dims.clone();
        self.coords.retain(|c, _| dims.contains_key(c));
    }

    // === Renames and reshapes (per-file schema fixes) ===

    /// Rename a data variable.
    pub fn rename_var(&mut self, old: &str, new: &str) -> PrepResult<()> {
        let var = self
            .vars
            .remove(old)
            .ok_or_else(|| PrepError::MissingVariable(old.to_string()))?;
        self.vars.insert(new.to_string(), var);
        Ok(())
    }

    /// Rename a dimension along with its coordinate and every variable axis
    /// over it.
    pub fn rename_dim(&mut self, old: &str, new: &str) -> PrepResult<()> {
        let len = self.dims.remove(old).ok_or_else(|| {
            PrepError::DimensionMismatch(format!("no dimension '{}' to rename", old))
        })?;
        self.dims.insert(new.to_string(), len);
        if let Some(coord) = self.coords.remove(old) {
            self.coords.insert(new.to_string(), coord);
        }
        for var in self.vars.values_mut() {
            var.rename_dim(old, new);
        }
        Ok(())
    }

    /// Rebind a bare day-number dimension to a synthesized time index.
    ///
    /// The provided dates become the `time` coordinate; the old dimension
    /// (and any coordinate under its name) is replaced in every variable.
    /// Fatal when the date count disagrees with the dimension length.
    pub fn rebind_time(
        &mut self,
        old_dim: &str,
        dates: Vec<CfDate>,
        calendar: Calendar,
    ) -> PrepResult<()> {
        let len = self.dims.get(old_dim).copied().ok_or_else(|| {
            PrepError::DimensionMismatch(format!("no dimension '{}' to rebind", old_dim))
        })?;
        if dates.len() != len {
            return Err(PrepError::DimensionMismatch(format!(
                "synthesized {} timestamps for dimension '{}' of length {}",
                dates.len(),
                old_dim,
                len
            )));
        }
        self.dims.remove(old_dim);
        self.coords.remove(old_dim);
        for var in self.vars.values_mut() {
            var.rename_dim(old_dim, "time");
        }
        self.dims.insert("time".to_string(), len);
        self.coords
            .insert("time".to_string(), Coord::Time { dates, calendar });
        Ok(())
    }

    /// Promote a plain variable to the coordinate of its dimension.
    ///
    /// E.g. variable `lat` over dimension `nlat` becomes the `lat`
    /// coordinate of a dimension renamed `lat`.
    pub fn promote_coord(&mut self, var_name: &str, old_dim: &str) -> PrepResult<()> {
        let var = self
            .vars
            .remove(var_name)
            .ok_or_else(|| PrepError::MissingVariable(var_name.to_string()))?;
        if var.dims.as_slice() != [old_dim.to_string()].as_slice() {
            return Err(PrepError::DimensionMismatch(format!(
                "variable '{}' is not one-dimensional over '{}'",
                var_name, old_dim
            )));
        }
        let values: Vec<f64> = match &var.values {
            Values::F32(a) => a.iter().map(|&v| v as f64).collect(),
            Values::F64(a) => a.iter().cloned().collect(),
        };
        let len = values.len();
        self.dims.remove(old_dim);
        for v in self.vars.values_mut() {
            v.rename_dim(old_dim, var_name);
        }
        self.dims.insert(var_name.to_string(), len);
        self.coords
            .insert(var_name.to_string(), Coord::Float(values));
        Ok(())
    }

    // === Selection ===

    /// Keep only the given positions along the named dimension.
    pub fn select_indices(&self, dim: &str, indices: &[usize]) -> PrepResult<Dataset> {
        let mut out = Dataset {
            attrs: self.attrs.clone(),
            ..Dataset::new()
        };
        for (name, coord) in &self.coords {
            let coord = if name == dim {
                coord.select(indices)
            } else {
                coord.clone()
            };
            out.add_coord(name.clone(), coord)?;
        }
        for (name, var) in &self.vars {
            let var = if var.axis_of(dim).is_some() {
                var.select(dim, indices)?
            } else {
                var.clone()
            };
            out.add_var(name.clone(), var)?;
        }
        Ok(out)
    }

    /// Convert the `time` coordinate to `target` with calendar-aware date
    /// conversion; dates with no counterpart are dropped with their rows.
    pub fn convert_time_calendar(&self, target: Calendar) -> PrepResult<Dataset> {
        let (dates, calendar) = self
            .coords
            .get("time")
            .and_then(Coord::as_time)
            .ok_or_else(|| PrepError::MissingCoordinate("time".to_string()))?;

        if calendar == target {
            return Ok(self.clone());
        }

        let kept: Vec<usize> = dates
            .iter()
            .enumerate()
            .filter(|(_, d)| d.convert(target).is_some())
            .map(|(i, _)| i)
            .collect();

        let mut out = if kept.len() == dates.len() {
            self.clone()
        } else {
            self.select_indices("time", &kept)?
        };

        // Retag with the target calendar.
        if let Some(Coord::Time { calendar, .. }) = out.coords.get_mut("time") {
            *calendar = target;
        }
        Ok(out)
    }

    /// Drop every position along `dim` at which any variable holds NaN.
    pub fn dropna(&self, dim: &str) -> PrepResult<Dataset> {
        let len = self
            .dims
            .get(dim)
            .copied()
            .ok_or_else(|| PrepError::DimensionMismatch(format!("no dimension '{}'", dim)))?;

        let kept: Vec<usize> = (0..len)
            .filter(|&i| {
                !self.vars.values().any(|var| {
                    var.axis_of(dim)
                        .map(|axis| var.values.has_nan_at(axis, i))
                        .unwrap_or(false)
                })
            })
            .collect();

        self.select_indices(dim, &kept)
    }

    // === Combination ===

    /// Concatenate datasets positionally along `dim`.
    ///
    /// Inputs must share variable names; variables lacking `dim` must agree
    /// and are taken from the first input. No reordering or label-based
    /// joining happens: inputs are joined in the order given.
    pub fn concat<'a>(
        inputs: impl IntoIterator<Item = &'a Dataset>,
        dim: &str,
        combine_attrs: CombineAttrs,
    ) -> PrepResult<Dataset> {
        let inputs: Vec<&Dataset> = inputs.into_iter().collect();
        let first = *inputs
            .first()
            .ok_or_else(|| PrepError::DimensionMismatch("concat of zero datasets".to_string()))?;

        let mut names: Vec<&String> = first.vars.keys().collect();
        names.sort();
        for other in &inputs[1..] {
            let mut other_names: Vec<&String> = other.vars.keys().collect();
            other_names.sort();
            if other_names != names {
                return Err(PrepError::DimensionMismatch(format!(
                    "cannot concat datasets with variables {:?} and {:?}",
                    other_names, names
                )));
            }
        }

        let mut out = Dataset::new();
        out.attrs = Self::combine_attrs(&inputs, combine_attrs);

        for (name, coord) in &first.coords {
            let coord = if name == dim {
                Coord::concat(inputs.iter().filter_map(|ds| ds.coords.get(name.as_str())))?
            } else {
                coord.clone()
            };
            out.add_coord(name.clone(), coord)?;
        }

        for (name, var) in &first.vars {
            let var = if var.axis_of(dim).is_some() {
                DataArray::concat(
                    inputs
                        .iter()
                        .filter_map(|ds| ds.vars.get(name.as_str())),
                    dim,
                )?
            } else {
                var.clone()
            };
            out.add_var(name.clone(), var)?;
        }

        Ok(out)
    }

    /// Merge datasets with identical coordinates into one multi-variable
    /// dataset. A variable name appearing twice is a fatal error.
    pub fn merge<'a>(
        inputs: impl IntoIterator<Item = &'a Dataset>,
        combine_attrs: CombineAttrs,
    ) -> PrepResult<Dataset> {
        let inputs: Vec<&Dataset> = inputs.into_iter().collect();
        let mut out = Dataset::new();
        out.attrs = Self::combine_attrs(&inputs, combine_attrs);

        for ds in &inputs {
            for (name, coord) in &ds.coords {
                match out.coords.get(name) {
                    None => out.add_coord(name.clone(), coord.clone())?,
                    Some(existing) if existing == coord => {}
                    Some(_) => {
                        return Err(PrepError::DimensionMismatch(format!(
                            "conflicting values for coordinate '{}'",
                            name
                        )))
                    }
                }
            }
            for (name, var) in &ds.vars {
                if out.vars.contains_key(name) {
                    return Err(PrepError::DimensionMismatch(format!(
                        "variable '{}' present in more than one merge input",
                        name
                    )));
                }
                out.add_var(name.clone(), var.clone())?;
            }
        }

        Ok(out)
    }

    /// Outer-join datasets on the string labels of `dim`.
    ///
    /// The output labels are the sorted union; positions a source does not
    /// cover are filled with NaN. Used for tabular sources that index by
    /// region and only partially overlap.
    pub fn merge_outer<'a>(
        inputs: impl IntoIterator<Item = &'a Dataset>,
        dim: &str,
        combine_attrs: CombineAttrs,
    ) -> PrepResult<Dataset> {
        let inputs: Vec<&Dataset> = inputs.into_iter().collect();

        let mut union: Vec<String> = Vec::new();
        for ds in &inputs {
            let labels = ds
                .coords
                .get(dim)
                .and_then(Coord::as_str_labels)
                .ok_or_else(|| PrepError::MissingCoordinate(dim.to_string()))?;
            union.extend(labels.iter().cloned());
        }
        union.sort();
        union.dedup();
        let position: BTreeMap<&str, usize> = union
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();

        let mut out = Dataset::new();
        out.attrs = Self::combine_attrs(&inputs, combine_attrs);
        out.add_coord(dim.to_string(), Coord::Str(union.clone()))?;

        for ds in &inputs {
            let labels = ds
                .coords
                .get(dim)
                .and_then(Coord::as_str_labels)
                .ok_or_else(|| PrepError::MissingCoordinate(dim.to_string()))?;
            let targets: Vec<usize> = labels.iter().map(|l| position[l.as_str()]).collect();

            for (name, coord) in &ds.coords {
                if name == dim || out.coords.contains_key(name) {
                    continue;
                }
                out.add_coord(name.clone(), coord.clone())?;
            }

            for (name, var) in &ds.vars {
                if out.vars.contains_key(name) {
                    return Err(PrepError::DimensionMismatch(format!(
                        "variable '{}' present in more than one merge input",
                        name
                    )));
                }
                let axis = var.axis_of(dim).ok_or_else(|| {
                    PrepError::DimensionMismatch(format!(
                        "variable '{}' lacks join dimension '{}'",
                        name, dim
                    ))
                })?;
                let mut shape: Vec<usize> = var.shape().to_vec();
                shape[axis] = union.len();
                let scattered = match &var.values {
                    Values::F64(a) => {
                        let mut full = ArrayD::from_elem(shape, f64::NAN);
                        for (src, &dst) in targets.iter().enumerate() {
                            full.index_axis_mut(ndarray::Axis(axis), dst)
                                .assign(&a.index_axis(ndarray::Axis(axis), src));
                        }
                        Values::F64(full)
                    }
                    Values::F32(a) => {
                        let mut full = ArrayD::from_elem(shape, f32::NAN);
                        for (src, &dst) in targets.iter().enumerate() {
                            full.index_axis_mut(ndarray::Axis(axis), dst)
                                .assign(&a.index_axis(ndarray::Axis(axis), src));
                        }
                        Values::F32(full)
                    }
                };
                out.add_var(name.clone(), DataArray::new(var.dims.clone(), scattered)?)?;
            }
        }

        Ok(out)
    }

    fn combine_attrs(inputs: &[&Dataset], mode: CombineAttrs) -> Attrs {
        match mode {
            CombineAttrs::Drop => Attrs::new(),
            CombineAttrs::DropConflicts => {
                Attrs::drop_conflicts(inputs.iter().map(|ds| &ds.attrs))
            }
        }
    }
}
