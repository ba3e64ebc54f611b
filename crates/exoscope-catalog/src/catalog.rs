//! An in-memory set of normalized planets with lookup, search, and ranking.

use crate::batch::transform_all_with;
use crate::planet::NormalizedExoplanet;
use crate::record::RawCatalogRecord;
use crate::transform::TransformOptions;

/// Default number of name suggestions returned by [`Catalog::search`].
pub const SEARCH_SUGGESTION_LIMIT: usize = 5;

/// Normalized planets in archive order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    planets: Vec<NormalizedExoplanet>,
}

impl Catalog {
    pub fn new(planets: Vec<NormalizedExoplanet>) -> Self {
        Self { planets }
    }

    /// Transform rows and collect them.
    pub fn from_records(records: &[RawCatalogRecord], options: &TransformOptions) -> Self {
        Self::new(transform_all_with(records, options))
    }

    pub fn planets(&self) -> &[NormalizedExoplanet] {
        &self.planets
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Exact name lookup.
    pub fn get(&self, name: &str) -> Option<&NormalizedExoplanet> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// Case-insensitive substring match on names, first `limit` hits in catalog order.
    ///
    /// An empty term matches nothing.
    pub fn search(&self, term: &str, limit: usize) -> Vec<&NormalizedExoplanet> {
        if term.is_empty() {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.planets
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// The `n` highest habitability scores, best first. Ties keep catalog order.
    pub fn most_habitable(&self, n: usize) -> Vec<&NormalizedExoplanet> {
        let mut ranked: Vec<&NormalizedExoplanet> = self.planets.iter().collect();
        ranked.sort_by(|a, b| b.habitability.total_cmp(&a.habitability));
        ranked.truncate(n);
        ranked
    }
}

impl FromIterator<NormalizedExoplanet> for Catalog {
    fn from_iter<I: IntoIterator<Item = NormalizedExoplanet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
