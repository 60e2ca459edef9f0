//! Staggered-grid data model
//!
//! NEMO/ORCA grids store each quantity at one of four point families (T, U, V
//! and F points). This module defines those families, the table mapping field
//! names to families, index extents and the hemisphere policy used when a
//! patch is cut out of the parent grid.

use crate::errors::{OrcaCutError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Range;

/// Row dimension name of parent and regional grids
pub const ROW_DIM: &str = "y";

/// Column dimension name of parent and regional grids
pub const COL_DIM: &str = "x";

/// Point family of a field on the staggered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridFamily {
    /// Cell centres (T points)
    Center,
    /// Eastern cell faces (U points)
    EastFace,
    /// Northern cell faces (V points)
    NorthFace,
    /// Cell corners (F points)
    Corner,
}

impl GridFamily {
    /// All families in table order
    pub const ALL: [GridFamily; 4] = [
        GridFamily::Center,
        GridFamily::EastFace,
        GridFamily::NorthFace,
        GridFamily::Corner,
    ];

    /// Offsets `(row, col)` applied to the extent bounds under the mirrored policy
    #[must_use]
    pub const fn offsets(self) -> (i64, i64) {
        match self {
            Self::Center => (0, 0),
            Self::EastFace => (0, -1),
            Self::NorthFace => (-1, 0),
            Self::Corner => (-1, -1),
        }
    }

    /// NEMO point letter
    #[must_use]
    pub const fn point(self) -> char {
        match self {
            Self::Center => 'T',
            Self::EastFace => 'U',
            Self::NorthFace => 'V',
            Self::Corner => 'F',
        }
    }
}

impl fmt::Display for GridFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-point", self.point())
    }
}

/// A field name tagged with its grid family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub family: GridFamily,
}

/// Ordered lookup table from field name to grid family
///
/// Order is preserved and determines the variable order of regional grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FamilyLists", into = "FamilyLists")]
pub struct FieldTable {
    fields: Vec<FieldSpec>,
}

impl FieldTable {
    /// Create a table, rejecting duplicate names and empty tables
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        if fields.is_empty() {
            return Err(OrcaCutError::ConfigError(
                "field table must contain at least one field".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for spec in &fields {
            if !seen.insert(spec.name.as_str()) {
                return Err(OrcaCutError::ConfigError(format!(
                    "field '{}' is listed more than once",
                    spec.name
                )));
            }
        }

        Ok(Self { fields })
    }

    /// The sixteen coordinate and scale-factor fields of an ORCA coordinate file
    #[must_use]
    pub fn orca_default() -> Self {
        let groups: [(GridFamily, &[&str]); 4] = [
            (
                GridFamily::Center,
                &["nav_lon", "nav_lat", "glamt", "gphit", "e1t", "e2t"],
            ),
            (GridFamily::EastFace, &["glamu", "gphiu", "e1u", "e2u"]),
            (GridFamily::NorthFace, &["glamv", "gphiv", "e1v", "e2v"]),
            (GridFamily::Corner, &["glamf", "gphif", "e1f", "e2f"]),
        ];

        let fields = groups
            .iter()
            .flat_map(|(family, names)| {
                names.iter().map(move |name| FieldSpec {
                    name: (*name).to_string(),
                    family: *family,
                })
            })
            .collect();

        Self { fields }
    }

    /// Family of `name`, if the table knows it
    #[must_use]
    pub fn family_of(&self, name: &str) -> Option<GridFamily> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| spec.family)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Default for FieldTable {
    fn default() -> Self {
        Self::orca_default()
    }
}

/// Serialized form of a [`FieldTable`]: one name list per family
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyLists {
    #[serde(default)]
    pub center: Vec<String>,
    #[serde(default)]
    pub east_face: Vec<String>,
    #[serde(default)]
    pub north_face: Vec<String>,
    #[serde(default)]
    pub corner: Vec<String>,
}

impl FamilyLists {
    fn list(&self, family: GridFamily) -> &[String] {
        match family {
            GridFamily::Center => &self.center,
            GridFamily::EastFace => &self.east_face,
            GridFamily::NorthFace => &self.north_face,
            GridFamily::Corner => &self.corner,
        }
    }
}

impl TryFrom<FamilyLists> for FieldTable {
    type Error = OrcaCutError;

    fn try_from(lists: FamilyLists) -> Result<Self> {
        let fields = GridFamily::ALL
            .iter()
            .flat_map(|&family| {
                lists.list(family).iter().map(move |name| FieldSpec {
                    name: name.clone(),
                    family,
                })
            })
            .collect();
        FieldTable::new(fields)
    }
}

impl From<FieldTable> for FamilyLists {
    fn from(table: FieldTable) -> Self {
        let mut lists = FamilyLists::default();
        for spec in table.fields {
            match spec.family {
                GridFamily::Center => lists.center.push(spec.name),
                GridFamily::EastFace => lists.east_face.push(spec.name),
                GridFamily::NorthFace => lists.north_face.push(spec.name),
                GridFamily::Corner => lists.corner.push(spec.name),
            }
        }
        lists
    }
}

/// Extraction policy for one patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// Cut as-is
    Atlantic,
    /// Apply family offsets, then mirror both axes
    Pacific,
}

impl Hemisphere {
    #[must_use]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, Self::Pacific)
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atlantic => write!(f, "Atlantic"),
            Self::Pacific => write!(f, "Pacific"),
        }
    }
}

/// Inclusive index window into the parent grid
///
/// Negative bounds count from the end of the axis, so `-1` is the last index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub row_min: i64,
    pub row_max: i64,
    pub col_min: i64,
    pub col_max: i64,
}

impl Extent {
    #[must_use]
    pub const fn new(row_min: i64, row_max: i64, col_min: i64, col_max: i64) -> Self {
        Self {
            row_min,
            row_max,
            col_min,
            col_max,
        }
    }

    /// Resolve the extent against a grid of `shape` (rows, cols).
    ///
    /// Negative bounds are resolved first, then `offsets` (row, col) are added.
    /// Any bound that ends up outside the grid is an error; nothing is
    /// truncated.
    pub fn resolve(
        &self,
        field: &str,
        shape: (usize, usize),
        offsets: (i64, i64),
    ) -> Result<Window> {
        let rows = resolve_axis(field, ROW_DIM, self.row_min, self.row_max, offsets.0, shape.0)?;
        let cols = resolve_axis(field, COL_DIM, self.col_min, self.col_max, offsets.1, shape.1)?;
        Ok(Window { rows, cols })
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}..={}, {}={}..={}",
            ROW_DIM, self.row_min, self.row_max, COL_DIM, self.col_min, self.col_max
        )
    }
}

fn resolve_axis(
    field: &str,
    axis: &'static str,
    min: i64,
    max: i64,
    offset: i64,
    len: usize,
) -> Result<Range<usize>> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    // Saturated bounds still land outside the grid and are reported below
    let shift = |bound: i64| {
        let wrapped = if bound < 0 {
            bound.saturating_add(len_i)
        } else {
            bound
        };
        wrapped.saturating_add(offset)
    };
    let start = shift(min);
    let end = shift(max);

    if start < 0 || end < 0 || start >= len_i || end >= len_i {
        return Err(OrcaCutError::ExtentOutOfRange {
            field: field.to_string(),
            axis,
            start,
            end,
            len,
        });
    }

    let (start, end) = (start as usize, end as usize);
    if start > end {
        return Err(OrcaCutError::EmptyExtent {
            field: field.to_string(),
            axis,
            start,
            end,
        });
    }

    Ok(start..end + 1)
}

/// Extent resolved against a concrete grid: half-open row and column ranges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Window {
    /// Shape `(rows, cols)` of the data this window selects
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}:{}] {}[{}:{}]",
            ROW_DIM, self.rows.start, self.rows.end, COL_DIM, self.cols.start, self.cols.end
        )
    }
}
