/// 1 parsec ≈ 3.26156 light-years
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26156;

/// Distance substituted when a record has no usable distance.
///
/// Same unit as the catalog's `sy_dist` column. Projection treats it like
/// light-years even though the archive reports parsecs.
pub const DEFAULT_DISTANCE: f64 = 100.0;

/// Convert parsecs to light-years.
pub fn parsecs_to_light_years(parsecs: f64) -> f64 {
    parsecs * LIGHT_YEARS_PER_PARSEC
}
