//! Where archive rows come from.
//!
//! Fetching over HTTP (proxying, retries, timeouts) lives outside this crate.
//! Whatever does it hands rows in through [`CatalogSource`].

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::archive::ViewMode;
use crate::error::CatalogError;
use crate::record::RawCatalogRecord;

/// A provider of decoded archive rows.
pub trait CatalogSource {
    /// Rows for the given view, in archive order.
    fn fetch(&self, view: &ViewMode) -> Result<Vec<RawCatalogRecord>, CatalogError>;

    /// The row for one planet, or `None` if the source has no such planet.
    fn fetch_planet(&self, name: &str) -> Result<Option<RawCatalogRecord>, CatalogError> {
        let rows = self.fetch(&ViewMode::Single(name.to_string()))?;
        if rows.is_empty() {
            tracing::info!("No data found for exoplanet: {name}");
        }
        Ok(rows.into_iter().next())
    }
}

/// Rows from a saved archive JSON response (`format=json`).
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a response body. Must be a JSON array; each element becomes one row.
    pub fn parse(contents: &str) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        let document: Value = serde_json::from_str(contents)?;
        match document {
            Value::Array(rows) => Ok(rows.iter().map(RawCatalogRecord::from_json).collect()),
            other => Err(CatalogError::NotAnArray {
                found: json_kind(&other),
            }),
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch(&self, view: &ViewMode) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let rows = Self::parse(&contents)?;
        tracing::info!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(view.select(rows))
    }
}

/// Rows already held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    rows: Vec<RawCatalogRecord>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RawCatalogRecord>) -> Self {
        Self { rows }
    }
}

impl CatalogSource for InMemorySource {
    fn fetch(&self, view: &ViewMode) -> Result<Vec<RawCatalogRecord>, CatalogError> {
        Ok(view.select(self.rows.clone()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
