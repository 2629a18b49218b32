//! The whitespace-separated Degree-Minute-Second notation, e.g. `"40 44 55 N"`:
//! a value type for its four fields, parsing with a per-field failure taxonomy,
//! and the conversion to and from signed decimal degrees.

use std::{convert::TryFrom, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::ToUnsigned;

use super::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE, SECONDS_IN_MINUTE},
    errors::{OutOfRange, ParseDmsError, ParseHemisphereError},
};

/// One of the four cardinal directions marking the sign context of a coordinate.
///
/// `North`/`South` mark latitudes and `East`/`West` mark longitudes,
/// but the conversion applies the sign only: the letter is not
/// cross-checked against the axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Northern latitudes (positive)
    North,
    /// Southern latitudes (negative)
    South,
    /// Eastern longitudes (positive)
    East,
    /// Western longitudes (negative)
    West,
}

impl Hemisphere {
    /// The sign the hemisphere imposes on a decimal degree value
    pub fn sign(self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

impl TryFrom<char> for Hemisphere {
    type Error = ParseHemisphereError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'N' => Ok(Self::North),
            'S' => Ok(Self::South),
            'E' => Ok(Self::East),
            'W' => Ok(Self::West),
            _ => Err(ParseHemisphereError {
                failed: c.to_string(),
            }),
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ParseHemisphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(ParseHemisphereError {
                failed: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        };
        write!(f, "{}", symbol)
    }
}

/// An angle in Degree-Minute-Second notation
/// with the hemisphere letter carrying the sign.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl Dms {
    /// Construct a value from its four fields.
    ///
    /// # Errors
    /// `OutOfRange` when minutes or seconds fall outside `[0, 60)`.
    /// The degrees field is not constrained.
    pub fn new(
        degrees: f64,
        minutes: f64,
        seconds: f64,
        hemisphere: Hemisphere,
    ) -> Result<Self, OutOfRange> {
        Self::check_parts(minutes, seconds)?;
        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }

    fn check_parts(minutes: f64, seconds: f64) -> Result<(), OutOfRange> {
        // NaN fails both checks
        if !(0.0..MINUTES_IN_DEGREE).contains(&minutes) {
            return Err(OutOfRange::ArcMinutes);
        }

        if !(0.0..SECONDS_IN_MINUTE).contains(&seconds) {
            return Err(OutOfRange::ArcSeconds);
        }

        Ok(())
    }

    /// Decompose a latitude given in decimal degrees into its DMS parts.
    /// Negative values fall into the southern hemisphere.
    pub fn latitude(value: f64) -> Self {
        Self::with_hemispheres(value, Hemisphere::North, Hemisphere::South)
    }

    /// Decompose a longitude given in decimal degrees into its DMS parts.
    /// Negative values fall into the western hemisphere.
    pub fn longitude(value: f64) -> Self {
        Self::with_hemispheres(value, Hemisphere::East, Hemisphere::West)
    }

    fn with_hemispheres(value: f64, positive: Hemisphere, negative: Hemisphere) -> Self {
        let (value, is_positive) = value.unsigned_abs();
        let hemisphere = if is_positive { positive } else { negative };

        let degrees = value.trunc();
        let rest = (value - degrees) * MINUTES_IN_DEGREE;
        let minutes = rest.trunc();
        let seconds = (rest - minutes) * SECONDS_IN_MINUTE;

        // the parts are in range by construction
        Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        }
    }

    /// The degrees field, as given (not sign-adjusted)
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// The arc minutes field, in `[0, 60)`
    pub fn minutes(self) -> f64 {
        self.minutes
    }

    /// The arc seconds field, in `[0, 60)`
    pub fn seconds(self) -> f64 {
        self.seconds
    }

    /// The hemisphere letter of the value
    pub fn hemisphere(self) -> Hemisphere {
        self.hemisphere
    }

    /// Convert into the signed decimal degrees representation,
    /// negative for the `S` and `W` hemispheres.
    pub fn to_decimal(self) -> f64 {
        let unsigned =
            self.degrees + self.minutes / MINUTES_IN_DEGREE + self.seconds / SECONDS_IN_DEGREE;
        unsigned * self.hemisphere.sign()
    }
}

lazy_static! {
    static ref RE_DMS: Regex = Regex::new(
        r"(?x)              # enables verbose mode (to allow these comments)
        ^\s*                    # surrounding whitespace is tolerated
        (?P<deg>\S+)            # degrees field
        \s+
        (?P<min>\S+)            # minutes field
        \s+
        (?P<sec>\S+)            # seconds field
        \s+
        (?P<hem>\S+)            # hemisphere letter
        \s*$
        ",
    )
    .expect("DMS regex is valid");
}

impl FromStr for Dms {
    type Err = ParseDmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // the regex only checks the four-field shape;
        // field values are validated separately to tell the failure classes apart
        let capture = RE_DMS.captures(s).ok_or(ParseDmsError::Notation)?;

        let degrees = capture
            .name("deg")
            .ok_or(ParseDmsError::Notation)?
            .as_str()
            .parse()?;
        let minutes = capture
            .name("min")
            .ok_or(ParseDmsError::Notation)?
            .as_str()
            .parse()?;
        let seconds = capture
            .name("sec")
            .ok_or(ParseDmsError::Notation)?
            .as_str()
            .parse()?;
        Self::check_parts(minutes, seconds)?;

        let hemisphere = capture
            .name("hem")
            .ok_or(ParseDmsError::Notation)?
            .as_str()
            .parse::<Hemisphere>()?;

        Ok(Self {
            degrees,
            minutes,
            seconds,
            hemisphere,
        })
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.degrees, self.minutes, self.seconds, self.hemisphere
        )
    }
}

/// Convert a `"D M S C"` string into signed decimal degrees.
///
/// # Errors
/// [`ParseDmsError`] describing the malformed part of the input:
/// a wrong field count, a non-numeric field, minutes or seconds
/// outside `[0, 60)`, or an unknown hemisphere letter.
pub fn dms_to_decimal(dms: &str) -> Result<f64, ParseDmsError> {
    dms.parse::<Dms>().map(Dms::to_decimal)
}
