//! The normalized planet entity handed to display and query code.

use exoscope_astro::{HabitabilityBreakdown, Measurement, PhysicalFields, breakdown};
use glam::DVec3;
use serde::Serialize;

/// One exoplanet, normalized from an archive row.
///
/// Built once per row and never mutated. Numeric fields that the row did not
/// resolve are [`Measurement::Missing`] and serialize as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedExoplanet {
    pub id: String,
    pub name: String,

    /// Scene position. Always numeric; NaN when ra/dec were unusable. JSON has
    /// no NaN, so serialized output writes such a coordinate as `null`.
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Right ascension, degrees.
    pub ra: Measurement,
    /// Declination, degrees.
    pub dec: Measurement,
    /// Archive `sy_dist`, reported in parsecs.
    pub distance: Measurement,
    pub distance_light_years: Measurement,

    pub radius_earth: Measurement,
    pub radius_jupiter: Measurement,
    pub mass_earth: Measurement,
    pub mass_jupiter: Measurement,
    /// Kelvin.
    pub equilibrium_temperature: Measurement,
    /// g/cm³.
    pub density: Measurement,
    /// Days.
    pub orbital_period: Measurement,
    /// AU.
    pub orbital_semi_major_axis: Measurement,
    pub orbital_eccentricity: Measurement,
    /// Relative to Earth.
    pub insolation_flux: Measurement,
    pub transit_depth: Measurement,

    pub hostname: Option<String>,
    pub star_spectral_type: Option<String>,
    pub star_effective_temperature: Measurement,
    pub star_luminosity: Measurement,
    pub star_radius: Measurement,
    pub star_mass: Measurement,

    pub discovery_year: Option<i32>,
    pub discovery_method: Option<String>,

    /// Render size hint: Earth radii, or 1 when unknown.
    pub size: f64,
    /// Composite score in [0, 1].
    pub habitability: f64,
}

impl NormalizedExoplanet {
    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// The fields the habitability score is computed from.
    pub fn physical_fields(&self) -> PhysicalFields {
        PhysicalFields {
            equilibrium_temperature: self.equilibrium_temperature,
            radius_earth: self.radius_earth,
            insolation_flux: self.insolation_flux,
            density: self.density,
            orbital_period: self.orbital_period,
        }
    }

    /// Per-factor explanation of [`habitability`](Self::habitability).
    pub fn habitability_breakdown(&self) -> HabitabilityBreakdown {
        breakdown(&self.physical_fields())
    }
}
