//! Whole-response transformation.

use rayon::prelude::*;

use crate::planet::NormalizedExoplanet;
use crate::record::RawCatalogRecord;
use crate::transform::{TransformOptions, transform_with};

/// Normalize every row with default options. Output order matches input order.
pub fn transform_all(records: &[RawCatalogRecord]) -> Vec<NormalizedExoplanet> {
    transform_all_with(records, &TransformOptions::default())
}

/// Normalize every row in parallel. Output order matches input order.
pub fn transform_all_with(
    records: &[RawCatalogRecord],
    options: &TransformOptions,
) -> Vec<NormalizedExoplanet> {
    let planets: Vec<NormalizedExoplanet> = records
        .par_iter()
        .map(|raw| transform_with(raw, options))
        .collect();

    let scored = planets.iter().filter(|p| p.habitability > 0.0).count();
    tracing::info!(
        "Transformed {} catalog records ({} with a non-zero habitability score)",
        planets.len(),
        scored
    );

    planets
}
