//! orca_cut: regional coordinate grids from global ORCA grids
//!
//! Cuts an Atlantic and a Pacific patch out of a global NEMO/ORCA coordinate
//! file and stitches them into one regional coordinate grid. The Pacific patch
//! sits across the north fold, so its fields are shifted by the half-cell
//! offset of their staggered-grid family and mirrored along both axes before
//! being stacked below the Atlantic patch.
//!
//! ## Module Organization
//!
//! - [`grid`]: grid families, field table, extents and windows
//! - [`data_source`]: the [`GridSource`] trait and an in-memory grid
//! - [`selector`]: cutting one field for one patch
//! - [`assembler`]: building and stacking regional grids
//! - [`netcdf_io`]: NetCDF parent grid reads and regional grid output
//! - [`config`]: cut configuration and JSON loading
//! - [`pipeline`]: extent computation and the full cut
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use orca_cut::prelude::*;
//!
//! let config = CutConfig::default();
//! let written = orca_cut::pipeline::run(&config).unwrap();
//! println!("Regional grid written to {}", written.display());
//! ```

pub mod assembler;
pub mod cli;
pub mod config;
pub mod data_source;
pub mod errors;
pub mod grid;
pub mod netcdf_io;
pub mod pipeline;
pub mod selector;

pub use assembler::{assemble, RegionalField, RegionalGrid};
pub use config::CutConfig;
pub use data_source::{GridSource, MemoryGrid};
pub use errors::{OrcaCutError, Result};
pub use grid::{Extent, FieldSpec, FieldTable, GridFamily, Hemisphere, Window};
pub use netcdf_io::{NetcdfGrid, RegionalGridWriter};
pub use selector::select_field;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::assembler::{assemble, RegionalGrid};
    pub use crate::config::CutConfig;
    pub use crate::data_source::{GridSource, MemoryGrid};
    pub use crate::errors::{OrcaCutError, Result};
    pub use crate::grid::{Extent, FieldTable, GridFamily, Hemisphere};
    pub use crate::netcdf_io::{NetcdfGrid, RegionalGridWriter};
    pub use crate::selector::select_field;
}
