//! Cut configuration
//!
//! Holds the patch bounds, file locations and field table that drive a run.
//! [`CutConfig::default`] reproduces the ORCA36 Arctic cut; a JSON file can
//! override any subset of the values.

use crate::errors::{OrcaCutError, Result};
use crate::grid::FieldTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of one regional cut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CutConfig {
    /// Global parent coordinate file
    pub input_path: PathBuf,
    /// Directory receiving the regional file, created when absent
    pub output_dir: PathBuf,
    /// File name of the regional file
    pub output_name: String,
    /// Inclusive row bounds of the Pacific patch
    pub pacific_rows: (i64, i64),
    /// Inclusive row bounds of the Atlantic patch
    pub atlantic_rows: (i64, i64),
    /// Inclusive column bounds of the Pacific patch; the Atlantic columns are
    /// derived from these by reflection about the grid midpoint
    pub pacific_cols: (i64, i64),
    /// Fields to cut and their grid families
    pub fields: FieldTable,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(
                "/mnt/localssd/Data_nemo/Meshes_domains/Coordinates/Global/ORCA_R36_coord_new.nc",
            ),
            output_dir: PathBuf::from(
                "/mnt/localssd/Data_nemo/Meshes_domains/Coordinates/Regional",
            ),
            output_name: "arct_cutorca36_coord.nc".to_string(),
            pacific_rows: (7550, -2),
            atlantic_rows: (7350, -1),
            pacific_cols: (1500, 5900),
            fields: FieldTable::orca_default(),
        }
    }
}

impl CutConfig {
    /// Parse a configuration from JSON; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Serialize the configuration as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Full path of the regional output file
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_name)
    }

    /// Check values that cannot be caught by the grid bounds alone
    pub fn validate(&self) -> Result<()> {
        if self.output_name.trim().is_empty() {
            return Err(OrcaCutError::ConfigError(
                "output_name must not be empty".to_string(),
            ));
        }
        if self.pacific_cols.0 < 0 || self.pacific_cols.1 < 0 {
            return Err(OrcaCutError::ConfigError(format!(
                "pacific_cols must be non-negative to mirror about the midpoint, got {:?}",
                self.pacific_cols
            )));
        }
        if self.pacific_cols.0 > self.pacific_cols.1 {
            return Err(OrcaCutError::ConfigError(format!(
                "pacific_cols lower bound exceeds upper bound: {:?}",
                self.pacific_cols
            )));
        }
        Ok(())
    }
}
