//! Control-surface bounds for the angle input
//!
//! The interactive layer owns the widgets; this module only answers the one
//! question it needs on a unit switch: what range, step, default and caption
//! should the angle control take. Expressed as a pure function instead of a
//! callback mutating shared widget state, so the rule is testable on its own.

use serde::{Deserialize, Serialize};

use crate::angle::AngleUnit;
use crate::constants::{
    DEG_CONTROL_DEFAULT, DEG_CONTROL_RANGE, DEG_CONTROL_STEP, RAD_CONTROL_DEFAULT,
    RAD_CONTROL_RANGE, RAD_CONTROL_STEP,
};

/// Valid range, step and default for the angle input control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlBounds {
    /// Smallest accepted angle value
    pub min: f64,
    /// Largest accepted angle value
    pub max: f64,
    /// Increment of the control
    pub step: f64,
    /// Value the control resets to on a unit switch
    pub value: f64,
    /// Caption for the control in this unit
    pub label: String,
}

/// Bounds the angle control takes when the unit selector changes
///
/// Degree mode covers ±360° in whole-degree steps defaulting to 45°; radian
/// mode covers ±2π in 0.01 steps defaulting to π/4.
pub fn reset_bounds(unit: AngleUnit) -> ControlBounds {
    match unit {
        AngleUnit::Degrees => ControlBounds {
            min: DEG_CONTROL_RANGE.0,
            max: DEG_CONTROL_RANGE.1,
            step: DEG_CONTROL_STEP,
            value: DEG_CONTROL_DEFAULT,
            label: "Angle (°)".to_string(),
        },
        AngleUnit::Radians => ControlBounds {
            min: RAD_CONTROL_RANGE.0,
            max: RAD_CONTROL_RANGE.1,
            step: RAD_CONTROL_STEP,
            value: RAD_CONTROL_DEFAULT,
            label: "Angle (rad)".to_string(),
        },
    }
}
