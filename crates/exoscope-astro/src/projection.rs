//! Sky position (right ascension, declination, distance) to scene Cartesian coordinates.

use glam::DVec3;

use crate::{DEFAULT_DISTANCE, Measurement};

/// Project a sky position onto Cartesian scene coordinates.
///
/// `x = d·cos(dec)·cos(ra)`, `y = d·cos(dec)·sin(ra)`, `z = d·sin(dec)`, with
/// both angles in degrees. A distance that is missing, not finite, zero, or
/// negative is replaced by [`DEFAULT_DISTANCE`].
///
/// Never fails: NaN angles come back as NaN components.
pub fn project(ra_deg: f64, dec_deg: f64, distance: Measurement) -> DVec3 {
    project_with_default(ra_deg, dec_deg, distance, DEFAULT_DISTANCE)
}

/// [`project`] with a caller-chosen fallback distance.
pub fn project_with_default(
    ra_deg: f64,
    dec_deg: f64,
    distance: Measurement,
    default_distance: f64,
) -> DVec3 {
    let d = match distance {
        Measurement::Present(d) if d.is_finite() && d > 0.0 => d,
        _ => default_distance,
    };

    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let cos_dec = dec.cos();

    DVec3::new(d * cos_dec * ra.cos(), d * cos_dec * ra.sin(), d * dec.sin())
}
