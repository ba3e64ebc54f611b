//! Plain-text rendering of normalized planets.

use std::fmt::Write;

use exoscope_astro::Measurement;
use exoscope_catalog::NormalizedExoplanet;

const MISSING: &str = "-";

/// One row per planet: name, host, distance, equilibrium temperature, radius,
/// habitability, and scene position.
pub fn format_table(planets: &[&NormalizedExoplanet]) -> String {
    let mut table = format!(
        "{:<28} {:<20} {:>10} {:>8} {:>8} {:>6} {:>26}\n",
        "name", "host", "dist (ly)", "eqt (K)", "R (R⊕)", "hab", "position (x, y, z)"
    );
    for planet in planets {
        let _ = writeln!(
            table,
            "{:<28} {:<20} {:>10} {:>8} {:>8} {:>6.3} {:>26}",
            planet.name,
            planet.hostname.as_deref().unwrap_or(MISSING),
            measurement(planet.distance_light_years, 2),
            measurement(planet.equilibrium_temperature, 0),
            measurement(planet.radius_earth, 2),
            planet.habitability,
            format!("({:.1}, {:.1}, {:.1})", planet.x, planet.y, planet.z),
        );
    }
    table
}

/// Each habitability factor's sub-score for one planet.
pub fn format_breakdown(planet: &NormalizedExoplanet) -> String {
    let breakdown = planet.habitability_breakdown();
    let mut out = format!("\nhabitability of {}:\n", planet.name);
    for (factor, sub_score) in breakdown.factors {
        let _ = writeln!(
            out,
            "  {:<14} weight {:.2}  input {:>10}  score {}",
            factor.label(),
            factor.weight(),
            measurement(planet.physical_fields().get(factor), 3),
            measurement(sub_score, 3),
        );
    }
    let _ = writeln!(
        out,
        "  {} of 5 factors known, composite {:.3}",
        breakdown.known_factors(),
        breakdown.score
    );
    out
}

fn measurement(value: Measurement, precision: usize) -> String {
    match value {
        Measurement::Present(v) => format!("{v:.precision$}"),
        Measurement::Missing => MISSING.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exoscope_catalog::{RawCatalogRecord, transform};
    use serde_json::json;

    fn planet() -> NormalizedExoplanet {
        transform(&RawCatalogRecord::from_json(&json!({
            "pl_name": "Kepler-62 f",
            "ra": 283.2,
            "dec": 45.3,
            "sy_dist": 300.9,
            "pl_rade": 1.41,
            "pl_eqt": 208,
        })))
    }

    #[test]
    fn test_table_marks_missing_values() {
        let p = planet();
        let table = format_table(&[&p]);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("Kepler-62 f"));
        assert!(row.contains("981.40"));
        assert!(row.contains(" - "));
    }

    #[test]
    fn test_table_header_only_when_empty() {
        assert_eq!(format_table(&[]).lines().count(), 1);
    }

    #[test]
    fn test_breakdown_lists_all_factors() {
        let text = format_breakdown(&planet());
        for label in ["eqt", "radius", "insolation", "density", "orbitalPeriod"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("2 of 5 factors known"));
    }

    #[test]
    fn test_measurement_precision() {
        assert_eq!(measurement(Measurement::Present(1.23456), 2), "1.23");
        assert_eq!(measurement(Measurement::Missing, 2), "-");
    }
}
