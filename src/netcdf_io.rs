//! NetCDF I/O: windowed reads from the parent grid and regional grid output
//!
//! [`NetcdfGrid`] reads only the requested window of each field, so a global
//! grid never has to fit in memory. [`RegionalGridWriter`] writes an assembled
//! [`RegionalGrid`] with the parent's variable attributes copied across.

use crate::assembler::RegionalGrid;
use crate::data_source::GridSource;
use crate::errors::{OrcaCutError, Result};
use crate::grid::{Window, COL_DIM, ROW_DIM};
use chrono::Utc;
use ndarray::Array2;
use netcdf::{create, AttributeValue, Extent, File, VariableMut};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Parent grid backed by an open NetCDF file
pub struct NetcdfGrid {
    file: File,
    path: PathBuf,
    shape: (usize, usize),
}

impl NetcdfGrid {
    /// Open a NetCDF file as a parent grid
    pub fn open(path: &Path) -> Result<Self> {
        let file = netcdf::open(path)?;
        info!("Opened parent grid {}", path.display());
        Self::from_file(file, path)
    }

    /// Wrap an already opened NetCDF file
    pub fn from_file(file: File, path: &Path) -> Result<Self> {
        let dim_len = |dim: &str| {
            file.dimension(dim)
                .map(|d| d.len())
                .ok_or_else(|| OrcaCutError::MissingDimension {
                    dim: dim.to_string(),
                })
        };
        let shape = (dim_len(ROW_DIM)?, dim_len(COL_DIM)?);
        debug!("Parent grid shape: {}={} {}={}", ROW_DIM, shape.0, COL_DIM, shape.1);

        Ok(Self {
            file,
            path: path.to_path_buf(),
            shape,
        })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GridSource for NetcdfGrid {
    fn shape(&self) -> (usize, usize) {
        self.shape
    }

    fn contains_field(&self, name: &str) -> bool {
        self.file.variable(name).is_some()
    }

    /// Singleton dimensions such as `time_counter` are squeezed away; what
    /// remains must be exactly `(y, x)`.
    fn read_window(&self, name: &str, window: &Window) -> Result<Array2<f64>> {
        let var = self
            .file
            .variable(name)
            .ok_or_else(|| OrcaCutError::UnknownField {
                field: name.to_string(),
            })?;

        let mut extents: Vec<Extent> = Vec::new();
        let mut kept: Vec<String> = Vec::new();
        for dim in var.dimensions() {
            let dim_name = dim.name();
            if dim_name == ROW_DIM {
                extents.push(window.rows.clone().into());
                kept.push(dim_name);
            } else if dim_name == COL_DIM {
                extents.push(window.cols.clone().into());
                kept.push(dim_name);
            } else if dim.len() == 1 {
                extents.push(0usize.into());
            } else {
                return Err(OrcaCutError::InvalidLayout {
                    field: name.to_string(),
                    message: format!(
                        "dimension '{}' has length {} and cannot be squeezed",
                        dim_name,
                        dim.len()
                    ),
                });
            }
        }

        if kept != [ROW_DIM, COL_DIM] {
            return Err(OrcaCutError::InvalidLayout {
                field: name.to_string(),
                message: format!(
                    "expected dimensions ({}, {}) after squeezing, found ({})",
                    ROW_DIM,
                    COL_DIM,
                    kept.join(", ")
                ),
            });
        }

        let values: Vec<f64> = var.get_values::<f64, _>(extents)?;
        Ok(Array2::from_shape_vec(window.shape(), values)?)
    }
}

/// Writes a regional grid to a NetCDF file
pub struct RegionalGridWriter<'a> {
    output_path: &'a Path,
    attribute_source: Option<&'a NetcdfGrid>,
}

impl<'a> RegionalGridWriter<'a> {
    /// Create a new writer for `output_path`
    pub fn new(output_path: &'a Path) -> Self {
        Self {
            output_path,
            attribute_source: None,
        }
    }

    /// Copy variable attributes (units, long_name, ...) from the parent grid
    pub fn with_attributes_from(mut self, parent: &'a NetcdfGrid) -> Self {
        self.attribute_source = Some(parent);
        self
    }

    /// Write every field of `grid` on dims `(y, x)`, replacing any existing file
    pub fn write(&self, grid: &RegionalGrid) -> Result<()> {
        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        let (rows, cols) = grid.shape();
        file.add_dimension(ROW_DIM, rows)?;
        file.add_dimension(COL_DIM, cols)?;

        for field in grid.fields() {
            let mut var = file.add_variable::<f64>(&field.name, &RegionalGrid::DIMS)?;

            if let Some(parent) = self.attribute_source {
                copy_attributes(parent.file(), &field.name, &mut var)?;
            }

            let data = field.data.as_standard_layout();
            var.put(data.view(), ..)?;
            debug!("Wrote field {} {:?}", field.name, field.data.dim());
        }

        file.add_attribute("title", "Regional cut of a global ORCA coordinate grid")?;
        if let Some(parent) = self.attribute_source {
            file.add_attribute("source", parent.path().display().to_string())?;
        }
        file.add_attribute(
            "history",
            format!("Created by orca_cut on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}

/// Copy the attributes of `name` in `parent` onto `target`.
///
/// `_FillValue` is converted to `f64` to match the output variable type and
/// written first; everything else is copied as-is.
fn copy_attributes(parent: &File, name: &str, target: &mut VariableMut<'_>) -> Result<()> {
    let Some(orig_var) = parent.variable(name) else {
        return Ok(());
    };

    let fill_value = orig_var
        .attribute("_FillValue")
        .and_then(|attr| match attr.value().ok()? {
            AttributeValue::Double(v) => Some(v),
            AttributeValue::Float(v) => Some(f64::from(v)),
            AttributeValue::Int(v) => Some(f64::from(v)),
            AttributeValue::Short(v) => Some(f64::from(v)),
            _ => None,
        });
    if let Some(fv) = fill_value {
        target.put_attribute("_FillValue", fv)?;
    }

    for attr in orig_var.attributes().filter(|a| a.name() != "_FillValue") {
        match attr.value() {
            Ok(value) => {
                target.put_attribute(attr.name(), value)?;
            }
            Err(e) => {
                warn!(
                    "Skipped unsupported attribute '{}' of '{}': {}",
                    attr.name(),
                    name,
                    e
                );
            }
        }
    }

    Ok(())
}
