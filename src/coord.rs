use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::dms::Dms;

/// The point on the surface of the sphere, represented as the pair
/// of signed decimal degrees (latitude, longitude).
///
/// The values are not constrained to the usual ±90/±180 ranges:
/// the distance models accept any displacement and leave the range
/// policy to the caller.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Construct a point from the given latitude and longitude
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in signed decimal degrees (north positive)
    pub fn lat(self) -> f64 {
        self.lat
    }

    /// Longitude in signed decimal degrees (east positive)
    pub fn lon(self) -> f64 {
        self.lon
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Lat: {}, Long: {}",
                Dms::latitude(self.lat),
                Dms::longitude(self.lon)
            )
        } else {
            write!(f, "({},{})", self.lat, self.lon)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_point() {
        let origin = Point::default();
        assert_eq!(origin.lat(), 0.0);
        assert_eq!(origin.lon(), 0.0);

        assert_eq!(format!("{}", origin), "(0,0)");
        assert_eq!(format!("{:#}", origin), "Lat: 0 0 0 N, Long: 0 0 0 E");
    }

    #[test]
    fn north_east() {
        let saint_petersburg = Point::new(59.9375, 30.5);
        assert_eq!(format!("{}", saint_petersburg), "(59.9375,30.5)");
        assert_eq!(
            format!("{:#}", saint_petersburg),
            "Lat: 59 56 15 N, Long: 30 30 0 E"
        );
    }

    #[test]
    fn south_west() {
        let santiago = Point::new(-33.25, -70.5);
        assert_eq!(format!("{}", santiago), "(-33.25,-70.5)");
        assert_eq!(
            format!("{:#}", santiago),
            "Lat: 33 15 0 S, Long: 70 30 0 W"
        );
    }

    #[test]
    fn from_pair() {
        let point = Point::from((40.748_611, -73.986_389));
        assert_eq!(point, Point::new(40.748_611, -73.986_389));
    }
}
