//! The `exoscope` binary: reads a saved exoplanet archive response, places and
//! scores every planet, and prints a table or JSON.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p exoscope-cli -- --input rows.json --rank 10`.

mod app;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use exoscope_config::{CliArgs, Config, ConfigError};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let (mut config, log_dir) = match load_config(&args) {
        Ok((config, dir)) => (config, Some(dir.join("logs"))),
        Err(e) => {
            eprintln!("{e}; using default configuration");
            (Config::default(), None)
        }
    };
    config.apply_cli_overrides(&args);

    exoscope_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    let stdout = std::io::stdout();
    match app::run(&args, &config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(args: &CliArgs) -> Result<(Config, PathBuf), ConfigError> {
    let dir = match &args.config {
        Some(dir) => dir.clone(),
        None => Config::default_dir()?,
    };
    let config = Config::load_or_create(&dir)?;
    Ok((config, dir))
}
