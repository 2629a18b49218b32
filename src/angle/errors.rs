use std::{error::Error, fmt, num::ParseFloatError};

use crate::enum_trivial_from_impl;

/// The sexagesimal part of the notation which left its valid range
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutOfRange {
    /// min >= 60 (or negative)
    ArcMinutes,
    /// sec >= 60 (or negative)
    ArcSeconds,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ArcMinutes => "Arc minute value not in range [0..60)",
            Self::ArcSeconds => "Arc second value not in range [0..60)",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

/// The direction letter is not one of the four cardinal directions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHemisphereError {
    pub(crate) failed: String,
}

impl fmt::Display for ParseHemisphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot parse Hemisphere from {:?}: must be N, S, E or W",
            self.failed
        )
    }
}

impl Error for ParseHemisphereError {}

/// Every way the `"D M S C"` notation can be malformed,
/// one variant per failure class
#[derive(Debug)]
pub enum ParseDmsError {
    /// The input does not split into the four expected fields
    Notation,
    /// A degree, minute or second field is not a valid number
    Float(ParseFloatError),
    /// The minute or second value is out of its sexagesimal range
    Range(OutOfRange),
    /// The direction letter is not a valid hemisphere
    Hemisphere(ParseHemisphereError),
}

enum_trivial_from_impl!(ParseFloatError => ParseDmsError:Float);
enum_trivial_from_impl!(OutOfRange => ParseDmsError:Range);
enum_trivial_from_impl!(ParseHemisphereError => ParseDmsError:Hemisphere);

impl fmt::Display for ParseDmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinate: ")?;
        match self {
            Self::Notation => write!(f, "expected 'D M S C' notation (e.g. '73 59 11 W')"),
            Self::Float(inner) => write!(f, "{inner}"),
            Self::Range(inner) => write!(f, "{inner}"),
            Self::Hemisphere(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ParseDmsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_message_shows_the_expected_shape() {
        let msg = ParseDmsError::Notation.to_string();
        assert_eq!(
            msg,
            "Cannot parse coordinate: expected 'D M S C' notation (e.g. '73 59 11 W')"
        );
    }

    #[test]
    fn range_message_names_the_part() {
        let minutes = ParseDmsError::from(OutOfRange::ArcMinutes).to_string();
        assert!(minutes.contains("Arc minute"));

        let seconds = ParseDmsError::from(OutOfRange::ArcSeconds).to_string();
        assert!(seconds.contains("Arc second"));
    }

    #[test]
    fn hemisphere_message_shows_the_failed_token() {
        let err = ParseDmsError::from(ParseHemisphereError {
            failed: "X".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Cannot parse coordinate: Cannot parse Hemisphere from \"X\": must be N, S, E or W"
        );
    }
}
