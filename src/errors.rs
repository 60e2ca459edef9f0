//! Centralized error handling for orca_cut
//!
//! Every fallible operation in the crate returns [`Result`], so failures from
//! NetCDF access, configuration loading and grid selection all surface as one
//! structured [`OrcaCutError`].

use thiserror::Error;

/// Main error type for orca_cut operations
#[derive(Debug, Error)]
pub enum OrcaCutError {
    /// NetCDF file operation errors
    #[error("NetCDF error: {0}")]
    NetCDFError(#[from] netcdf::Error),

    /// I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Array shape or dimension error
    #[error("Array error: {0}")]
    ArrayError(#[from] ndarray::ShapeError),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {0}")]
    ConfigParseError(#[from] serde_json::Error),

    /// Field not present in the parent grid
    #[error("Field '{field}' not found in parent grid")]
    UnknownField { field: String },

    /// Field present in the parent grid but not assigned to a grid family
    #[error("Field '{field}' is not assigned to any grid family")]
    UnclassifiedField { field: String },

    /// Extent bound outside the parent grid
    #[error(
        "Extent {start}..={end} for field '{field}' is out of range along '{axis}' (length {len})"
    )]
    ExtentOutOfRange {
        field: String,
        axis: &'static str,
        start: i64,
        end: i64,
        len: usize,
    },

    /// Extent whose lower bound lies past its upper bound
    #[error("Extent {start}..={end} for field '{field}' selects nothing along '{axis}'")]
    EmptyExtent {
        field: String,
        axis: &'static str,
        start: usize,
        end: usize,
    },

    /// Parent file lacks one of the grid dimensions
    #[error("Dimension '{dim}' not found in parent grid")]
    MissingDimension { dim: String },

    /// Field stored with dimensions other than (y, x)
    #[error("Field '{field}' has an unsupported layout: {message}")]
    InvalidLayout { field: String, message: String },

    /// Field shape differs from the rest of its regional grid
    #[error("Shape mismatch for field '{field}': expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        field: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Regional grids holding different field sets cannot be concatenated
    #[error("Cannot concatenate regional grids with different fields: [{left}] vs [{right}]")]
    FieldSetMismatch { left: String, right: String },
}

/// Result type alias for orca_cut operations
pub type Result<T> = std::result::Result<T, OrcaCutError>;
