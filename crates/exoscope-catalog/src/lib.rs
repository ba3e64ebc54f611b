//! Exoplanet archive rows to normalized, placed, and scored planets.
//!
//! [`RawCatalogRecord`] is one decoded archive row with every column optional.
//! [`transform`] turns it into a [`NormalizedExoplanet`]; [`transform_all`] does
//! the same for a whole response in parallel. [`ArchiveQuery`] builds the TAP
//! request an external fetcher would send, and [`CatalogSource`] is the seam
//! through which already-decoded rows reach this crate.

mod archive;
mod batch;
mod catalog;
mod error;
mod planet;
mod record;
mod source;
mod transform;

pub use archive::{ArchiveQuery, PLANET_FIELDS, ViewMode};
pub use batch::{transform_all, transform_all_with};
pub use catalog::{Catalog, SEARCH_SUGGESTION_LIMIT};
pub use error::CatalogError;
pub use planet::NormalizedExoplanet;
pub use record::{RawCatalogRecord, RawField};
pub use source::{CatalogSource, InMemorySource, JsonFileSource};
pub use transform::{TransformOptions, transform, transform_with};
