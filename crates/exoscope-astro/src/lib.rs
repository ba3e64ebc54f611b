//! Present-or-missing measurements, sky-position projection, and habitability scoring
//! for exoplanet catalog data.

mod habitability;
mod measurement;
mod projection;
mod units;

pub use habitability::{HabitabilityBreakdown, HabitabilityFactor, PhysicalFields, breakdown, score};
pub use measurement::Measurement;
pub use projection::{project, project_with_default};
pub use units::{DEFAULT_DISTANCE, LIGHT_YEARS_PER_PARSEC, parsecs_to_light_years};
