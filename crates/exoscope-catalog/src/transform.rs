//! Archive row to [`NormalizedExoplanet`].

use exoscope_astro::{
    DEFAULT_DISTANCE, PhysicalFields, parsecs_to_light_years, project_with_default, score,
};

use crate::planet::NormalizedExoplanet;
use crate::record::{RawCatalogRecord, integer, measure, text};

/// Knobs for [`transform_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOptions {
    /// Projection distance for rows without a positive `sy_dist`.
    pub default_distance: f64,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            default_distance: DEFAULT_DISTANCE,
        }
    }
}

impl From<&exoscope_config::CatalogConfig> for TransformOptions {
    fn from(config: &exoscope_config::CatalogConfig) -> Self {
        Self {
            default_distance: config.default_distance,
        }
    }
}

/// Normalize one row with default options.
pub fn transform(raw: &RawCatalogRecord) -> NormalizedExoplanet {
    transform_with(raw, &TransformOptions::default())
}

/// Normalize one row. Never fails; unusable fields become `Missing`.
///
/// Position comes from `ra`, `dec`, and the raw `sy_dist`. The archive gives
/// `sy_dist` in parsecs but it is projected as-is, the same scale the scene
/// labels as light-years; only `distance_light_years` is converted.
pub fn transform_with(raw: &RawCatalogRecord, options: &TransformOptions) -> NormalizedExoplanet {
    let name = raw.name().unwrap_or_default();
    let ra = measure(&raw.ra);
    let dec = measure(&raw.dec);
    let distance = measure(&raw.sy_dist);

    let position = project_with_default(
        ra.value_or(f64::NAN),
        dec.value_or(f64::NAN),
        distance,
        options.default_distance,
    );

    let physical = PhysicalFields {
        equilibrium_temperature: measure(&raw.pl_eqt),
        radius_earth: measure(&raw.pl_rade),
        insolation_flux: measure(&raw.pl_insol),
        density: measure(&raw.pl_dens),
        orbital_period: measure(&raw.pl_orbper),
    };
    let habitability = score(&physical);

    tracing::debug!(planet = %name, habitability, "Transformed catalog record");

    NormalizedExoplanet {
        id: name.clone(),
        name,
        x: position.x,
        y: position.y,
        z: position.z,
        ra,
        dec,
        distance,
        distance_light_years: distance.map(parsecs_to_light_years),
        radius_earth: physical.radius_earth,
        radius_jupiter: measure(&raw.pl_radj),
        mass_earth: measure(&raw.pl_bmasse),
        mass_jupiter: measure(&raw.pl_bmassj),
        equilibrium_temperature: physical.equilibrium_temperature,
        density: physical.density,
        orbital_period: physical.orbital_period,
        orbital_semi_major_axis: measure(&raw.pl_orbsmax),
        orbital_eccentricity: measure(&raw.pl_orbeccen),
        insolation_flux: physical.insolation_flux,
        transit_depth: measure(&raw.pl_trandep),
        hostname: text(&raw.hostname),
        star_spectral_type: text(&raw.st_spectype),
        star_effective_temperature: measure(&raw.st_teff),
        star_luminosity: measure(&raw.st_lum),
        star_radius: measure(&raw.st_rad),
        star_mass: measure(&raw.st_mass),
        discovery_year: integer(&raw.disc_year),
        discovery_method: text(&raw.discoverymethod),
        size: physical.radius_earth.value_or(1.0),
        habitability,
    }
}
