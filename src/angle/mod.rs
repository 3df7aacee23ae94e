//! # Angle Representation Module
//!
//! Angles arrive from the control surface as a bare number plus a unit
//! selection. This module keeps the two concerns typed: [`AngleUnit`] is the
//! strict two-variant unit selector, and [`Angle`] stores the numeric value
//! in the unit it was supplied in, converting only when the other
//! representation is requested.
//!
//! ## Internal Storage
//!
//! `Angle` uses enum-based storage:
//! - Values provided in degrees are stored exactly as degrees
//! - Values provided in radians are stored exactly as radians
//! - Conversion only occurs via `to_degrees()` / `to_radians()`
//!
//! Storing the original representation means the value the user typed is
//! returned bit-for-bit, and the degree↔radian round trip costs exactly one
//! multiplication by a `std::f64::consts::PI`-derived factor.
//!
//! ## Examples
//!
//! ```rust
//! use unitcircle::{Angle, AngleUnit};
//!
//! let a = Angle::from_degrees(45.0);
//! assert_eq!(a.to_degrees(), 45.0);
//!
//! let b = Angle::new(std::f64::consts::PI / 4.0, AngleUnit::Radians);
//! assert!((b.to_degrees() - 45.0).abs() < 1e-13);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::UnitCircleError;

/// Unit in which an angle value is expressed
///
/// Exactly two modes exist. Parsing accepts the tokens `"deg"` and `"rad"`
/// and rejects anything else with [`UnitCircleError::InvalidUnit`], so an
/// unknown unit can never be silently reinterpreted downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    /// Degrees, 360 to the full circle
    #[serde(rename = "deg")]
    Degrees,
    /// Radians, 2π to the full circle
    #[serde(rename = "rad")]
    Radians,
}

impl AngleUnit {
    /// Short token for this unit, matching the parse format
    pub fn token(&self) -> &'static str {
        match self {
            AngleUnit::Degrees => "deg",
            AngleUnit::Radians => "rad",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AngleUnit {
    type Err = UnitCircleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deg" => Ok(AngleUnit::Degrees),
            "rad" => Ok(AngleUnit::Radians),
            other => Err(UnitCircleError::InvalidUnit(other.to_string())),
        }
    }
}

/// Internal storage keeping the value in its original unit
#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
    Degrees(f64),
    Radians(f64),
}

/// An angular value that remembers the unit it was given in
///
/// The stored representation is returned exactly by the matching accessor;
/// the other accessor performs a single high-precision conversion.
///
/// # Examples
///
/// ```rust
/// use unitcircle::Angle;
///
/// let right = Angle::from_degrees(90.0);
/// assert_eq!(right.to_degrees(), 90.0); // exact, no round trip
/// assert!((right.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    repr: Repr,
}

impl Angle {
    /// Creates an angle from a value expressed in the given unit
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(value),
            AngleUnit::Radians => Self::from_radians(value),
        }
    }

    /// Creates an angle from a value in degrees
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            repr: Repr::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            repr: Repr::Radians(radians),
        }
    }

    /// Unit the angle was originally expressed in
    pub fn unit(&self) -> AngleUnit {
        match self.repr {
            Repr::Degrees(_) => AngleUnit::Degrees,
            Repr::Radians(_) => AngleUnit::Radians,
        }
    }

    /// Returns the angle in degrees
    ///
    /// Exact when the angle was constructed from degrees; otherwise a single
    /// multiplication by `180/π`.
    pub fn to_degrees(&self) -> f64 {
        match self.repr {
            Repr::Degrees(deg) => deg,
            Repr::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle in radians
    ///
    /// Exact when the angle was constructed from radians; otherwise a single
    /// multiplication by `π/180`.
    pub fn to_radians(&self) -> f64 {
        match self.repr {
            Repr::Degrees(deg) => deg * DEG2RAD,
            Repr::Radians(rad) => rad,
        }
    }
}
