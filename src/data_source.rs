//! Grid source abstraction for the parent grid
//!
//! The selector only needs three things from a parent grid: its shape, whether
//! a field exists, and the data inside a window. [`GridSource`] captures that,
//! so the same extraction code runs against a NetCDF file
//! ([`crate::netcdf_io::NetcdfGrid`]) or a synthetic in-memory grid
//! ([`MemoryGrid`]).

use crate::errors::{OrcaCutError, Result};
use crate::grid::Window;
use ndarray::{s, Array2};
use std::collections::HashMap;

/// Read-only access to a parent grid
pub trait GridSource {
    /// Shape `(rows, cols)` shared by all fields
    fn shape(&self) -> (usize, usize);

    /// Whether the grid holds a field called `name`
    fn contains_field(&self, name: &str) -> bool;

    /// Read the data of `name` inside `window`
    fn read_window(&self, name: &str, window: &Window) -> Result<Array2<f64>>;
}

/// Parent grid held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryGrid {
    shape: (usize, usize),
    fields: HashMap<String, Array2<f64>>,
}

impl MemoryGrid {
    /// Create an empty grid of the given `(rows, cols)` shape
    pub fn new(shape: (usize, usize)) -> Self {
        Self {
            shape,
            fields: HashMap::new(),
        }
    }

    /// Add a field, replacing any previous field of the same name
    pub fn insert(&mut self, name: &str, data: Array2<f64>) -> Result<()> {
        if data.dim() != self.shape {
            return Err(OrcaCutError::ShapeMismatch {
                field: name.to_string(),
                expected: self.shape,
                actual: data.dim(),
            });
        }
        self.fields.insert(name.to_string(), data);
        Ok(())
    }

    /// Builder form of [`MemoryGrid::insert`]
    pub fn with_field(mut self, name: &str, data: Array2<f64>) -> Result<Self> {
        self.insert(name, data)?;
        Ok(self)
    }

    pub fn field(&self, name: &str) -> Option<&Array2<f64>> {
        self.fields.get(name)
    }
}

impl GridSource for MemoryGrid {
    fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn read_window(&self, name: &str, window: &Window) -> Result<Array2<f64>> {
        let data = self
            .fields
            .get(name)
            .ok_or_else(|| OrcaCutError::UnknownField {
                field: name.to_string(),
            })?;

        Ok(data
            .slice(s![window.rows.clone(), window.cols.clone()])
            .to_owned())
    }
}
