//! Dataset assembler: builds regional grids from the parent grid
//!
//! A [`RegionalGrid`] is the collection of every configured field cut for one
//! patch. All its fields share one shape, which makes two regional grids
//! stackable along the row axis.

use crate::data_source::GridSource;
use crate::errors::{OrcaCutError, Result};
use crate::grid::{Extent, FieldTable, Hemisphere, COL_DIM, ROW_DIM};
use crate::selector::select_field;
use ndarray::{concatenate, Array2, Axis};
use tracing::info;

/// One named 2-D field of a regional grid
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalField {
    pub name: String,
    pub data: Array2<f64>,
}

/// Fields of one patch, all on dims `(y, x)` with a common shape
#[derive(Debug, Clone, PartialEq)]
pub struct RegionalGrid {
    fields: Vec<RegionalField>,
    shape: (usize, usize),
}

impl RegionalGrid {
    /// Dimension names of every field
    pub const DIMS: [&'static str; 2] = [ROW_DIM, COL_DIM];

    /// Build a regional grid, checking that every field has the same shape
    pub fn new(fields: Vec<RegionalField>) -> Result<Self> {
        let first = fields.first().ok_or_else(|| {
            OrcaCutError::ConfigError("a regional grid needs at least one field".to_string())
        })?;
        let shape = first.data.dim();

        for field in &fields {
            if field.data.dim() != shape {
                return Err(OrcaCutError::ShapeMismatch {
                    field: field.name.clone(),
                    expected: shape,
                    actual: field.data.dim(),
                });
            }
        }

        Ok(Self { fields, shape })
    }

    /// Common `(rows, cols)` shape of the fields
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn field(&self, name: &str) -> Option<&Array2<f64>> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.data)
    }

    pub fn fields(&self) -> &[RegionalField] {
        &self.fields
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stack `other` below `self` along the row axis.
    ///
    /// # Errors
    ///
    /// Both grids must hold the same fields in the same order
    /// (`FieldSetMismatch`) and the same number of columns (`ShapeMismatch`).
    pub fn concat_rows(&self, other: &RegionalGrid) -> Result<RegionalGrid> {
        if !self.names().eq(other.names()) {
            return Err(OrcaCutError::FieldSetMismatch {
                left: self.names().collect::<Vec<_>>().join(", "),
                right: other.names().collect::<Vec<_>>().join(", "),
            });
        }

        let fields = self
            .fields
            .iter()
            .zip(&other.fields)
            .map(|(top, bottom)| {
                if top.data.ncols() != bottom.data.ncols() {
                    return Err(OrcaCutError::ShapeMismatch {
                        field: bottom.name.clone(),
                        expected: (bottom.data.nrows(), top.data.ncols()),
                        actual: bottom.data.dim(),
                    });
                }
                let data = concatenate(Axis(0), &[top.data.view(), bottom.data.view()])?;
                Ok(RegionalField {
                    name: top.name.clone(),
                    data,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        RegionalGrid::new(fields)
    }
}

/// Cut every field of `table` for one extent and hemisphere.
///
/// # Errors
///
/// Fails on the first field that cannot be selected; no partial grid is
/// returned.
pub fn assemble<S: GridSource + ?Sized>(
    source: &S,
    table: &FieldTable,
    extent: &Extent,
    hemisphere: Hemisphere,
) -> Result<RegionalGrid> {
    let fields = table
        .names()
        .map(|name| {
            let data = select_field(source, table, name, extent, hemisphere)?;
            Ok(RegionalField {
                name: name.to_string(),
                data,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let grid = RegionalGrid::new(fields)?;
    info!(
        "Assembled {} patch: {} fields, shape {:?}",
        hemisphere,
        grid.len(),
        grid.shape()
    );
    Ok(grid)
}
