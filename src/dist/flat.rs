//! The flat-Earth approximation: latitude/longitude displacement
//! treated as Cartesian under a constant meters-per-degree scale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Point;

use super::consts::METERS_PER_DEGREE;

/// The planar displacement between two points:
/// east/north components in meters with the derived
/// distance and bearing.
///
/// Only meaningful for small displacements. No bound is enforced:
/// a large input produces a mathematically consistent
/// but geodetically meaningless result.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlaneVector {
    east: f64,
    north: f64,
}

impl PlaneVector {
    /// Decompose the displacement from `from` to `to`
    /// into the planar components.
    ///
    /// Non-finite coordinates are not guarded against and propagate
    /// into the components.
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            east: (to.lon() - from.lon()) * METERS_PER_DEGREE,
            north: (to.lat() - from.lat()) * METERS_PER_DEGREE,
        }
    }

    /// The eastward component of the displacement, in meters (west negative)
    pub fn east(self) -> f64 {
        self.east
    }

    /// The northward component of the displacement, in meters (south negative)
    pub fn north(self) -> f64 {
        self.north
    }

    /// The straight-line length of the displacement, in meters
    pub fn distance(self) -> f64 {
        self.east.hypot(self.north)
    }

    /// The direction of the displacement in degrees within `[0, 360)`,
    /// measured counter-clockwise from east (so 90 is north).
    ///
    /// This is the mathematical convention, not a compass bearing.
    pub fn bearing(self) -> f64 {
        let bearing = self.north.atan2(self.east).to_degrees();
        if bearing < 0.0 {
            bearing + 360.0
        } else {
            bearing
        }
    }
}

/// The planar displacement between `(lat1, lon1)` and `(lat2, lon2)`,
/// both in signed decimal degrees.
pub fn flat_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> PlaneVector {
    PlaneVector::between(Point::new(lat1, lon1), Point::new(lat2, lon2))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn zero_displacement() {
        let v = flat_distance(0.0, 0.0, 0.0, 0.0);
        assert_eq!(v.east(), 0.0);
        assert_eq!(v.north(), 0.0);
        assert_eq!(v.distance(), 0.0);
    }

    #[test]
    fn one_degree_east() {
        let v = flat_distance(0.0, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(v.east(), 111_111.11, epsilon = 1e-2);
        assert_eq!(v.north(), 0.0);
        assert_eq!(v.distance(), v.east());
        assert_eq!(v.bearing(), 0.0);
    }

    #[test]
    fn pure_north() {
        let v = flat_distance(0.0, 0.0, 1.0, 0.0);
        assert_eq!(v.east(), 0.0);
        assert_abs_diff_eq!(v.north(), 111_111.11, epsilon = 1e-2);
        assert_abs_diff_eq!(v.bearing(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn pure_west() {
        let v = flat_distance(0.0, 0.0, 0.0, -1.0);
        assert_abs_diff_eq!(v.east(), -111_111.11, epsilon = 1e-2);
        assert_abs_diff_eq!(v.bearing(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn pure_south() {
        let v = flat_distance(0.0, 0.0, -1.0, 0.0);
        assert_abs_diff_eq!(v.north(), -111_111.11, epsilon = 1e-2);
        assert_abs_diff_eq!(v.bearing(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn north_east_diagonal() {
        let v = flat_distance(0.0, 0.0, 1.0, 1.0);
        assert_abs_diff_eq!(v.bearing(), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(v.distance(), 111_111.11 * 2_f64.sqrt(), epsilon = 1e-2);
    }

    #[test]
    fn south_west_diagonal() {
        let v = flat_distance(10.0, 10.0, 9.0, 9.0);
        assert_abs_diff_eq!(v.bearing(), 225.0, epsilon = 1e-9);
    }

    #[test]
    fn magnitude_does_not_depend_on_the_direction() {
        let p1 = Point::new(40.748_611, -73.986_389);
        let p2 = Point::new(40.758, -73.9855);

        let forth = PlaneVector::between(p1, p2);
        let back = PlaneVector::between(p2, p1);

        assert_eq!(forth.distance(), back.distance());
        assert_eq!(forth.east(), -back.east());
        assert_eq!(forth.north(), -back.north());
    }

    #[test]
    fn components_follow_the_sign_convention() {
        // moving north-west: east negative, north positive
        let v = flat_distance(50.0, 10.0, 51.0, 8.0);
        assert!(v.east() < 0.0);
        assert!(v.north() > 0.0);
    }

    #[test]
    fn non_finite_input_propagates() {
        let v = flat_distance(f64::NAN, 0.0, 0.0, 0.0);
        assert!(v.north().is_nan());
        assert!(v.distance().is_nan());
    }
}
