//! Unitcircle: unit-circle trigonometry diagrams
//!
//! This crate evaluates the trigonometric state of a single angle and builds
//! the classical unit-circle picture from it: the circle, the radius vector
//! to `(cos θ, sin θ)`, dashed projections onto the axes, and the tangent
//! construction on the line `x = 1`. Evaluation and rendering are pure
//! functions; the declarative [`Scene`](diagram::Scene) output keeps the
//! core independent of any drawing surface.
//!
//! ```rust
//! use unitcircle::{evaluate, render, AngleUnit};
//!
//! let result = evaluate(45.0, AngleUnit::Degrees);
//! let diagram = render(&result);
//! println!("{}", diagram.summary);
//! ```

use thiserror::Error;

pub mod angle;
pub mod constants;
pub mod controls;
pub mod diagram;
pub mod trig;

// Re-export commonly used types
pub use angle::{Angle, AngleUnit};
pub use controls::{reset_bounds, ControlBounds};
pub use diagram::{render, Diagram, DrawCommand, Scene};
pub use trig::{evaluate, AngleResult, Tangent};

/// Main error type for the unitcircle library
///
/// The only recognized failure is an unknown unit token at the parse
/// boundary. An undefined tangent is not an error; it is the ordinary
/// [`Tangent::Undefined`] result.
#[derive(Debug, Error)]
pub enum UnitCircleError {
    /// The unit token was something other than `"deg"` or `"rad"`
    #[error("invalid angle unit {0:?} (expected \"deg\" or \"rad\")")]
    InvalidUnit(String),
}

/// Result type for unitcircle operations
pub type Result<T> = std::result::Result<T, UnitCircleError>;
