//! Constants for angle conversion and diagram layout

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Tangent guard
/// Cosine magnitude below which the tangent is reported as undefined.
/// Guards the asymptotes at ±90°, ±270°, ... against floating-point
/// near-misses rather than testing for exact zero.
pub const COS_EPSILON: f64 = 1e-12;

// Diagram layout
/// Number of samples used to trace the unit circle outline
pub const CIRCLE_SAMPLES: usize = 400;
/// Half-width of the square plotting window; keeps the tangent
/// construction at x = 1 on-canvas for typical magnitudes
pub const AXIS_LIMIT: f64 = 1.6;

// Control surface defaults, per unit
/// Angle control bounds in degree mode
pub const DEG_CONTROL_RANGE: (f64, f64) = (-360.0, 360.0);
/// Angle control step in degree mode
pub const DEG_CONTROL_STEP: f64 = 1.0;
/// Angle control default value in degree mode
pub const DEG_CONTROL_DEFAULT: f64 = 45.0;
/// Angle control bounds in radian mode
pub const RAD_CONTROL_RANGE: (f64, f64) = (-TAU, TAU);
/// Angle control step in radian mode
pub const RAD_CONTROL_STEP: f64 = 0.01;
/// Angle control default value in radian mode
pub const RAD_CONTROL_DEFAULT: f64 = PI / 4.0;
