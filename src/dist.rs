//! The two distance models over decimal-degree coordinates:
//! the flat-plane approximation and the spherical great-circle.
//!
//! The models are independent; they share only the Earth-size constants.

mod consts;
pub mod flat;
pub mod sphere;
