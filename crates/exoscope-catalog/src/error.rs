//! Catalog source error types.

use std::path::PathBuf;

/// Errors raised while obtaining archive rows.
///
/// Individual malformed rows are never errors; only a response that cannot be
/// read as a list of rows is.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading a saved response failed.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The response is not valid JSON.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response is valid JSON but not an array of rows.
    #[error("catalog response is a JSON {found}, expected an array of rows")]
    NotAnArray { found: &'static str },
}
