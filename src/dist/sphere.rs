//! The great-circle distance over the mean sphere,
//! computed with the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).

use crate::coord::Point;

use super::consts::EARTH_RADIUS;

/// The great-circle distance between the points, in meters.
///
/// The intermediate haversine term is clamped into `[0, 1]`:
/// floating-point rounding can push it slightly outside the range
/// for near-identical or near-antipodal points, which would poison
/// the square roots.
pub fn great_circle(from: Point, to: Point) -> f64 {
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let delta_phi = (to.lat() - from.lat()).to_radians();
    let delta_lambda = (to.lon() - from.lon()).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS * c
}

/// The great-circle distance between `(lat1, lon1)` and `(lat2, lon2)`,
/// both in signed decimal degrees, in meters.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    great_circle(Point::new(lat1, lon1), Point::new(lat2, lon2))
}
