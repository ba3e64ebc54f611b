//! Configuration system for Exoscope.
//!
//! Provides settings that persist to disk as RON files. Supports CLI overrides
//! via clap, hot-reload detection, and forward/backward compatible
//! serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{ArchiveConfig, CatalogConfig, Config, DebugConfig, SearchConfig};
pub use error::ConfigError;
