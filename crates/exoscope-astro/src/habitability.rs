//! Composite habitability score from five Earth-similarity factors.
//!
//! Each factor decays linearly from 1.0 at its Earth value to 0.0 at one
//! tolerance away. The composite is a weighted average over the factors that
//! are actually known, so a partially-measured planet is not diluted by the
//! weights of its missing fields.

use crate::Measurement;

/// One of the five inputs to the habitability score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HabitabilityFactor {
    /// Equilibrium temperature, Kelvin.
    EquilibriumTemperature,
    /// Planet radius, Earth radii.
    Radius,
    /// Insolation flux, Earth flux.
    Insolation,
    /// Bulk density, g/cm³.
    Density,
    /// Orbital period, days.
    OrbitalPeriod,
}

impl HabitabilityFactor {
    pub const ALL: [Self; 5] = [
        Self::EquilibriumTemperature,
        Self::Radius,
        Self::Insolation,
        Self::Density,
        Self::OrbitalPeriod,
    ];

    /// Earth's value for this factor.
    pub fn optimum(self) -> f64 {
        match self {
            Self::EquilibriumTemperature => 278.0,
            Self::Radius => 1.0,
            Self::Insolation => 1.0,
            Self::Density => 5.51,
            Self::OrbitalPeriod => 365.0,
        }
    }

    /// Distance from the optimum at which the sub-score reaches zero.
    pub fn tolerance(self) -> f64 {
        match self {
            Self::EquilibriumTemperature => 100.0,
            Self::Radius => 1.0,
            Self::Insolation => 2.0,
            Self::Density => 3.0,
            Self::OrbitalPeriod => 365.0,
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::EquilibriumTemperature => 0.30,
            Self::Radius => 0.20,
            Self::Insolation => 0.20,
            Self::Density => 0.15,
            Self::OrbitalPeriod => 0.15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::EquilibriumTemperature => "eqt",
            Self::Radius => "radius",
            Self::Insolation => "insolation",
            Self::Density => "density",
            Self::OrbitalPeriod => "orbitalPeriod",
        }
    }

    /// Sub-score in [0, 1], or `Missing` when the input is missing or not finite.
    pub fn score(self, value: Measurement) -> Measurement {
        match value {
            Measurement::Present(v) if v.is_finite() => {
                Measurement::Present((1.0 - (v - self.optimum()).abs() / self.tolerance()).max(0.0))
            }
            _ => Measurement::Missing,
        }
    }
}

/// The planet fields the habitability score reads.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PhysicalFields {
    pub equilibrium_temperature: Measurement,
    pub radius_earth: Measurement,
    pub insolation_flux: Measurement,
    pub density: Measurement,
    pub orbital_period: Measurement,
}

impl PhysicalFields {
    pub fn get(&self, factor: HabitabilityFactor) -> Measurement {
        match factor {
            HabitabilityFactor::EquilibriumTemperature => self.equilibrium_temperature,
            HabitabilityFactor::Radius => self.radius_earth,
            HabitabilityFactor::Insolation => self.insolation_flux,
            HabitabilityFactor::Density => self.density,
            HabitabilityFactor::OrbitalPeriod => self.orbital_period,
        }
    }
}

/// Per-factor sub-scores alongside the composite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HabitabilityBreakdown {
    /// Sub-scores in [`HabitabilityFactor::ALL`] order.
    pub factors: [(HabitabilityFactor, Measurement); 5],
    /// Composite score in [0, 1].
    pub score: f64,
}

impl HabitabilityBreakdown {
    /// Number of factors that contributed to the composite.
    pub fn known_factors(&self) -> usize {
        self.factors.iter().filter(|(_, s)| s.is_present()).count()
    }

    pub fn sub_score(&self, factor: HabitabilityFactor) -> Measurement {
        self.factors
            .iter()
            .find(|(f, _)| *f == factor)
            .map_or(Measurement::Missing, |(_, s)| *s)
    }
}

/// Score every factor and combine the known ones.
///
/// The composite is `Σ(score·weight) / Σ(weight)` over present sub-scores.
/// With no present sub-score it is exactly `0.0`.
pub fn breakdown(fields: &PhysicalFields) -> HabitabilityBreakdown {
    let factors = HabitabilityFactor::ALL.map(|factor| (factor, factor.score(fields.get(factor))));

    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    for (factor, sub_score) in &factors {
        if let Measurement::Present(s) = sub_score {
            total_score += s * factor.weight();
            total_weight += factor.weight();
        }
    }

    let score = if total_weight > 0.0 {
        total_score / total_weight
    } else {
        0.0
    };

    HabitabilityBreakdown { factors, score }
}

/// Composite habitability score in [0, 1].
pub fn score(fields: &PhysicalFields) -> f64 {
    breakdown(fields).score
}
