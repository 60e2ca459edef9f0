//! Grid selector: cuts one field of the parent grid for one patch
//!
//! The Atlantic patch is cut exactly as requested. The Pacific patch lies on
//! the other side of the ORCA north fold, so each field is first shifted by
//! the half-cell offset of its grid family and the result is then reversed
//! along both axes.

use crate::data_source::GridSource;
use crate::errors::{OrcaCutError, Result};
use crate::grid::{Extent, FieldTable, Hemisphere, Window};
use ndarray::{s, Array2};
use tracing::debug;

/// Resolve the window used for `field` under `hemisphere`.
///
/// # Errors
///
/// Returns `UnknownField` if the source has no such field,
/// `UnclassifiedField` if the mirrored policy needs a family the table does
/// not know, and `ExtentOutOfRange`/`EmptyExtent` for windows outside the grid.
pub fn field_window<S: GridSource + ?Sized>(
    source: &S,
    table: &FieldTable,
    field: &str,
    extent: &Extent,
    hemisphere: Hemisphere,
) -> Result<Window> {
    if !source.contains_field(field) {
        return Err(OrcaCutError::UnknownField {
            field: field.to_string(),
        });
    }

    let offsets = if hemisphere.is_mirrored() {
        table
            .family_of(field)
            .ok_or_else(|| OrcaCutError::UnclassifiedField {
                field: field.to_string(),
            })?
            .offsets()
    } else {
        (0, 0)
    };

    extent.resolve(field, source.shape(), offsets)
}

/// Select the 2-D sub-array of `field` for one patch.
///
/// # Arguments
///
/// * `source` - Parent grid
/// * `table` - Field-to-family lookup table
/// * `field` - Field to cut
/// * `extent` - Inclusive index bounds of the patch
/// * `hemisphere` - `Atlantic` cuts as-is, `Pacific` applies family offsets
///   and mirrors both axes
///
/// # Errors
///
/// Same as [`field_window`], plus any read error of the source.
pub fn select_field<S: GridSource + ?Sized>(
    source: &S,
    table: &FieldTable,
    field: &str,
    extent: &Extent,
    hemisphere: Hemisphere,
) -> Result<Array2<f64>> {
    let window = field_window(source, table, field, extent, hemisphere)?;
    debug!("{} {}: reading {}", hemisphere, field, window);

    let data = source.read_window(field, &window)?;
    if hemisphere.is_mirrored() {
        Ok(mirror(&data))
    } else {
        Ok(data)
    }
}

/// Reverse row order and column order at once
#[must_use]
pub fn mirror(data: &Array2<f64>) -> Array2<f64> {
    data.slice(s![..;-1, ..;-1])
        .as_standard_layout()
        .into_owned()
}
