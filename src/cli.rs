//! Defines command-line interface options using `clap` for the orcacut binary.
//!
//! Every option is optional: without arguments the built-in ORCA36 Arctic cut
//! configuration is used.

use crate::config::CutConfig;
use crate::errors::Result;
use clap::Parser;
use std::path::PathBuf;

/// Cut Atlantic and Pacific patches out of a global ORCA coordinate file
#[derive(Parser, Debug, Default)]
#[command(
    version,
    name = "orcacut",
    about = "Builds a regional coordinate grid from a global ORCA coordinate file"
)]
pub struct Args {
    /// JSON configuration file; keys left out keep their built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parent global coordinate file
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory for the regional file, created when missing
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// File name of the regional file
    #[arg(long)]
    pub output_name: Option<String>,

    /// Only compute and print the patch extents
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long, default_value_t = false)]
    pub print_config: bool,

    /// Enable verbose output.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Build the effective configuration: file (or defaults), then overrides
    pub fn resolve_config(&self) -> Result<CutConfig> {
        let mut config = match &self.config {
            Some(path) => CutConfig::from_json_file(path)?,
            None => CutConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(output_name) = &self.output_name {
            config.output_name = output_name.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
