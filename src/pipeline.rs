//! Orchestration of a full regional cut
//!
//! Computes the Atlantic and Pacific extents from the configuration and the
//! parent grid width, assembles both patches, stacks them along `y` and writes
//! the result.

use crate::assembler::{assemble, RegionalGrid};
use crate::config::CutConfig;
use crate::data_source::GridSource;
use crate::errors::{OrcaCutError, Result};
use crate::grid::{Extent, Hemisphere};
use crate::netcdf_io::{NetcdfGrid, RegionalGridWriter};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Extent of the Pacific patch, taken straight from the configuration
#[must_use]
pub fn pacific_extent(config: &CutConfig) -> Extent {
    Extent::new(
        config.pacific_rows.0,
        config.pacific_rows.1,
        config.pacific_cols.0,
        config.pacific_cols.1,
    )
}

/// Extent of the Atlantic patch for a parent grid `nx` columns wide.
///
/// The Atlantic columns are the Pacific columns reflected about the grid
/// midpoint `nx / 2`, which is where the ORCA north fold joins the two halves.
///
/// # Errors
///
/// Returns `ConfigError` when the Pacific columns are so large that the
/// reflected bounds overflow.
pub fn atlantic_extent(config: &CutConfig, nx: usize) -> Result<Extent> {
    let (pac_first, pac_last) = config.pacific_cols;
    let overflow = || {
        OrcaCutError::ConfigError(format!(
            "pacific_cols {:?} cannot be reflected about the midpoint of {} columns",
            config.pacific_cols, nx
        ))
    };

    let nx = i64::try_from(nx).map_err(|_| overflow())?;
    let x_middle = nx / 2;

    let col_min = x_middle
        .checked_sub(pac_last)
        .and_then(|d| d.checked_mul(2))
        .and_then(|d| d.checked_add(pac_last))
        .and_then(|v| v.checked_add(1))
        .ok_or_else(overflow)?;
    let col_max = nx
        .checked_sub(pac_first)
        .and_then(|v| v.checked_add(1))
        .ok_or_else(overflow)?;

    Ok(Extent::new(
        config.atlantic_rows.0,
        config.atlantic_rows.1,
        col_min,
        col_max,
    ))
}

/// Extents and output shape of a cut, computed without reading any data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutPlan {
    pub atlantic: Extent,
    pub pacific: Extent,
    pub parent_shape: (usize, usize),
}

impl CutPlan {
    pub fn new(config: &CutConfig, parent_shape: (usize, usize)) -> Result<Self> {
        Ok(Self {
            atlantic: atlantic_extent(config, parent_shape.1)?,
            pacific: pacific_extent(config),
            parent_shape,
        })
    }

    /// Shape `(rows, cols)` of the stacked output grid.
    ///
    /// Family offsets shift a window without resizing it, so the un-offset
    /// windows give the size of every field.
    pub fn output_shape(&self) -> Result<(usize, usize)> {
        let (atl_rows, atl_cols) = self
            .atlantic
            .resolve("Atlantic patch", self.parent_shape, (0, 0))?
            .shape();
        let (pac_rows, _) = self
            .pacific
            .resolve("Pacific patch", self.parent_shape, (0, 0))?
            .shape();
        Ok((atl_rows + pac_rows, atl_cols))
    }

    /// Log the plan
    pub fn log(&self) {
        info!(
            "Parent grid: {} rows x {} cols",
            self.parent_shape.0, self.parent_shape.1
        );
        info!("Atlantic extent: {}", self.atlantic);
        info!("Pacific extent:  {}", self.pacific);
    }
}

/// Assemble both patches and stack the Pacific patch below the Atlantic one
pub fn build_output_grid<S: GridSource + ?Sized>(
    source: &S,
    config: &CutConfig,
) -> Result<RegionalGrid> {
    let plan = CutPlan::new(config, source.shape())?;
    plan.log();

    let atlantic = assemble(source, &config.fields, &plan.atlantic, Hemisphere::Atlantic)?;
    let pacific = assemble(source, &config.fields, &plan.pacific, Hemisphere::Pacific)?;

    let combined = atlantic.concat_rows(&pacific)?;
    info!("Combined regional grid shape: {:?}", combined.shape());
    Ok(combined)
}

/// Run a complete cut: read the parent grid, build the regional grid, write it.
///
/// Returns the path of the written file.
pub fn run(config: &CutConfig) -> Result<PathBuf> {
    config.validate()?;

    let parent = NetcdfGrid::open(&config.input_path)?;
    let combined = build_output_grid(&parent, config)?;

    if !config.output_dir.exists() {
        fs::create_dir_all(&config.output_dir)?;
        info!("Created output directory {}", config.output_dir.display());
    }

    let output_path = config.output_path();
    RegionalGridWriter::new(&output_path)
        .with_attributes_from(&parent)
        .write(&combined)?;
    info!("Saved regional grid to {}", output_path.display());

    Ok(output_path)
}

/// Open the parent grid and compute the plan without extracting anything
pub fn dry_run(config: &CutConfig) -> Result<CutPlan> {
    config.validate()?;

    let parent = NetcdfGrid::open(&config.input_path)?;
    let plan = CutPlan::new(config, parent.shape())?;
    plan.log();
    info!("Output grid shape: {:?}", plan.output_shape()?);
    Ok(plan)
}
