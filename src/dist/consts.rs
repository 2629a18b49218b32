/// The idealized Earth circumference, in meters.
///
/// Deliberately the round 40 000 000 rather than the WGS84 value:
/// the flat model's output is defined in terms of this scale.
pub(crate) const EARTH_CIRCUMFERENCE: f64 = 40_000_000.0;

/// The linear scale of one degree of arc under the flat model, in meters
pub(crate) const METERS_PER_DEGREE: f64 = EARTH_CIRCUMFERENCE / 360.0;

/// The mean spherical Earth radius, in meters
pub(crate) const EARTH_RADIUS: f64 = 6_371_000.0;
