//! Entry point for the orcacut application.
//! Parses the CLI, sets up logging, and runs the regional cut.

use clap::Parser;
use orca_cut::cli::Args;
use orca_cut::pipeline;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_target(false).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> orca_cut::Result<()> {
    let config = args.resolve_config()?;

    if args.print_config {
        println!("{}", config.to_json_string()?);
        return Ok(());
    }

    if args.dry_run {
        pipeline::dry_run(&config)?;
        return Ok(());
    }

    let written = pipeline::run(&config)?;
    info!("Done");
    println!("✅ Saved regional grid to {}", written.display());
    Ok(())
}
