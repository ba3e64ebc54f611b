//! Command-line argument parsing for Exoscope.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Exoscope command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "exoscope",
    about = "Project exoplanet archive rows into scene coordinates and score their habitability"
)]
pub struct CliArgs {
    /// Saved archive JSON response (an array of `pscomppars` rows).
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Which rows to use: all, top10, top<N>, or single.
    #[arg(long, default_value = "all")]
    pub view: String,

    /// Planet name for the single view (implies --view single).
    #[arg(long)]
    pub planet: Option<String>,

    /// Print name suggestions matching this term instead of the full list.
    #[arg(long)]
    pub search: Option<String>,

    /// Print only the N most habitable planets.
    #[arg(long)]
    pub rank: Option<usize>,

    /// Emit normalized planets as JSON. Missing values are `null`, and so are
    /// x/y/z when a planet's sky position was unusable.
    #[arg(long)]
    pub json: bool,

    /// Print the archive request URL for the selected view and exit.
    #[arg(long)]
    pub print_url: bool,

    /// Query the archive directly instead of through the CORS proxy.
    #[arg(long)]
    pub no_proxy: bool,

    /// Fallback projection distance for rows without one.
    #[arg(long)]
    pub default_distance: Option<f64>,

    /// Maximum number of search suggestions.
    #[arg(long)]
    pub suggestion_limit: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(d) = args.default_distance {
            self.catalog.default_distance = d;
        }
        if let Some(limit) = args.suggestion_limit {
            self.search.suggestion_limit = limit;
        }
        if args.no_proxy {
            self.archive.cors_proxy = None;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
