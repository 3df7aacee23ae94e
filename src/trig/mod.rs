//! Trigonometric evaluation of a single angle
//!
//! The evaluator is the pure core of the crate: one angle in, one
//! [`AngleResult`] out, no state and no side effects. The only special case
//! is the tangent at its asymptotes, reported as [`Tangent::Undefined`]
//! rather than an error or a NaN.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{Angle, AngleUnit};
use crate::constants::COS_EPSILON;

/// Tangent of an angle, or the sentinel for its undefined points
///
/// The tangent is undefined exactly when `|cos θ| < COS_EPSILON`; the
/// threshold (rather than an exact-zero test) absorbs floating-point
/// near-misses at ±90°, ±270° and their periodic repeats. `Undefined` is an
/// ordinary, expected result, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tangent {
    /// A finite tangent value
    Defined(f64),
    /// The angle sits on a tangent asymptote (cos θ ≈ 0)
    Undefined,
}

impl Tangent {
    /// True unless the angle sits on an asymptote
    pub fn is_defined(&self) -> bool {
        matches!(self, Tangent::Defined(_))
    }

    /// The tangent value, if defined
    pub fn value(&self) -> Option<f64> {
        match self {
            Tangent::Defined(t) => Some(*t),
            Tangent::Undefined => None,
        }
    }
}

impl fmt::Display for Tangent {
    /// Full-precision value, or the literal word `undefined`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tangent::Defined(t) => write!(f, "{}", t),
            Tangent::Undefined => f.write_str("undefined"),
        }
    }
}

/// Trigonometric state of one evaluated angle
///
/// A transient value object, recomputed on every evaluation and never
/// mutated in place. `angle_degrees` and `angle_radians` always denote the
/// same angle; `sine` and `cosine` lie in `[-1, 1]` for finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    /// The angle in degrees
    pub angle_degrees: f64,
    /// The angle in radians
    pub angle_radians: f64,
    /// Sine of the angle
    pub sine: f64,
    /// Cosine of the angle
    pub cosine: f64,
    /// Tangent of the angle, or undefined at the asymptotes
    pub tangent: Tangent,
}

impl AngleResult {
    /// Evaluates the trigonometric state of an [`Angle`]
    pub fn from_angle(angle: Angle) -> Self {
        let angle_radians = angle.to_radians();
        let angle_degrees = angle.to_degrees();

        let cosine = angle_radians.cos();
        let sine = angle_radians.sin();

        let tangent = if cosine.abs() < COS_EPSILON {
            Tangent::Undefined
        } else {
            Tangent::Defined(angle_radians.tan())
        };

        debug!(
            "evaluated {}° ({} rad): sin={} cos={} tan={}",
            angle_degrees, angle_radians, sine, cosine, tangent
        );

        AngleResult {
            angle_degrees,
            angle_radians,
            sine,
            cosine,
            tangent,
        }
    }
}

/// Evaluates an angle given as a raw value plus unit
///
/// Pure function; calling it twice with the same input yields bit-identical
/// results. Any finite `f64` is a valid angle (large and negative values
/// included). Non-finite input is not rejected and propagates as NaN through
/// the underlying trigonometric functions.
///
/// # Examples
///
/// ```rust
/// use unitcircle::{evaluate, AngleUnit, Tangent};
///
/// let result = evaluate(45.0, AngleUnit::Degrees);
/// assert!((result.sine - result.cosine).abs() < 1e-15);
/// assert!(result.tangent.is_defined());
///
/// assert_eq!(evaluate(90.0, AngleUnit::Degrees).tangent, Tangent::Undefined);
/// ```
pub fn evaluate(angle: f64, unit: AngleUnit) -> AngleResult {
    AngleResult::from_angle(Angle::new(angle, unit))
}
