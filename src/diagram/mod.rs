//! # Diagram Construction Module
//!
//! Turns one evaluated angle into the classical unit-circle picture: the
//! circle itself, the axis reference lines, the radius vector to
//! `(cos θ, sin θ)` with its dashed projections onto the axes, and the
//! tangent-line construction on the vertical line `x = 1`.
//!
//! ## Design Philosophy
//!
//! Rendering here is purely declarative. [`render`] maps an
//! [`AngleResult`] to a [`Diagram`]: a short text summary plus a [`Scene`],
//! which is an ordered list of [`DrawCommand`]s with fixed bounds and
//! aspect. Nothing in this module touches a drawing surface, so the whole
//! construction is testable as data; backends (such as [`svg`]) consume the
//! scene separately.
//!
//! Paint order is list order: commands later in the scene draw on top of
//! earlier ones, which is how the tangent ray stays underneath the circle
//! while the point markers sit above everything.

pub mod format;
pub mod svg;

use log::debug;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_LIMIT, CIRCLE_SAMPLES, TAU};
use crate::trig::{AngleResult, Tangent};

use self::format::sig;

/// Palette of the construction; semantic rather than stylable
///
/// Each element of the diagram keeps its traditional color: black circle,
/// gray axes, red radius, blue projections, green tangent construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Gray,
    Red,
    Blue,
    Green,
}

/// Line rendering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// Stroke parameters shared by the line-type commands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    fn solid(color: Color, width: f64) -> Self {
        Stroke {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    fn dashed(color: Color, width: f64) -> Self {
        Stroke {
            color,
            width,
            style: LineStyle::Dashed,
        }
    }
}

/// Vertical alignment of a label relative to its anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Baseline,
    Center,
}

/// One declarative drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Connected line through a list of points
    Polyline {
        points: Vec<Point2<f64>>,
        stroke: Stroke,
    },
    /// Straight line between two points
    Segment {
        from: Point2<f64>,
        to: Point2<f64>,
        stroke: Stroke,
    },
    /// Point marker
    Marker { at: Point2<f64>, color: Color },
    /// Text anchored at a point in diagram coordinates
    Label {
        at: Point2<f64>,
        text: String,
        color: Color,
        valign: VAlign,
    },
}

/// Declarative description of the finished plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Plot title, carrying the angle in degrees to two decimals
    pub title: String,
    /// Horizontal axis caption
    pub x_label: String,
    /// Vertical axis caption
    pub y_label: String,
    /// Both axes span `[-axis_limit, axis_limit]`
    pub axis_limit: f64,
    /// 1:1 aspect ratio so the circle is never distorted
    pub equal_aspect: bool,
    /// Drawing instructions in paint order
    pub commands: Vec<DrawCommand>,
}

/// Rendered output for one evaluated angle
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    /// Text summary of the evaluation, six significant digits
    pub summary: String,
    /// The geometric construction
    pub scene: Scene,
}

/// Builds the summary text and unit-circle scene for an evaluated angle
///
/// Pure function of its input; each call produces a fresh [`Diagram`] that
/// replaces any previously rendered one.
///
/// # Examples
///
/// ```rust
/// use unitcircle::{evaluate, render, AngleUnit};
///
/// let diagram = render(&evaluate(45.0, AngleUnit::Degrees));
/// assert!(diagram.summary.starts_with("Angle: 45°"));
/// assert_eq!(diagram.scene.title, "Unit circle — θ = 45.00°");
/// ```
pub fn render(result: &AngleResult) -> Diagram {
    debug!(
        "rendering diagram for {}° (tangent {})",
        result.angle_degrees,
        if result.tangent.is_defined() {
            "defined"
        } else {
            "undefined"
        }
    );

    Diagram {
        summary: summary_text(result),
        scene: build_scene(result),
    }
}

/// Formats degrees, radians, sine, cosine and tangent to six significant
/// digits; an undefined tangent prints as the literal word `undefined`
fn summary_text(result: &AngleResult) -> String {
    let tan_str = match result.tangent {
        Tangent::Defined(t) => sig(t, 6),
        Tangent::Undefined => "undefined".to_string(),
    };

    format!(
        "Angle: {}° ({} rad)\nsin: {}  cos: {}  tan: {}",
        sig(result.angle_degrees, 6),
        sig(result.angle_radians, 6),
        sig(result.sine, 6),
        sig(result.cosine, 6),
        tan_str
    )
}

fn build_scene(result: &AngleResult) -> Scene {
    let c = result.cosine;
    let s = result.sine;
    let origin = Point2::new(0.0, 0.0);

    let mut commands = Vec::new();

    // Tangent ray first so it stays underneath the circle and radius
    if let Tangent::Defined(t) = result.tangent {
        commands.push(DrawCommand::Segment {
            from: origin,
            to: Point2::new(1.0, t),
            stroke: Stroke::dashed(Color::Green, 1.0),
        });
    }

    commands.push(unit_circle_outline());

    // Axis reference lines through the origin, spanning the full window
    commands.push(DrawCommand::Segment {
        from: Point2::new(-AXIS_LIMIT, 0.0),
        to: Point2::new(AXIS_LIMIT, 0.0),
        stroke: Stroke::solid(Color::Gray, 0.6),
    });
    commands.push(DrawCommand::Segment {
        from: Point2::new(0.0, -AXIS_LIMIT),
        to: Point2::new(0.0, AXIS_LIMIT),
        stroke: Stroke::solid(Color::Gray, 0.6),
    });

    // Dashed projections from (cos, sin) onto each axis
    commands.push(DrawCommand::Segment {
        from: Point2::new(c, 0.0),
        to: Point2::new(c, s),
        stroke: Stroke::dashed(Color::Blue, 1.0),
    });
    commands.push(DrawCommand::Segment {
        from: Point2::new(0.0, s),
        to: Point2::new(c, s),
        stroke: Stroke::dashed(Color::Blue, 1.0),
    });

    // Radius vector to the point on the circle
    commands.push(DrawCommand::Segment {
        from: origin,
        to: Point2::new(c, s),
        stroke: Stroke::solid(Color::Red, 2.0),
    });

    match result.tangent {
        Tangent::Defined(t) => {
            // Segment cut off on the line x = 1; its length is the tangent
            commands.push(DrawCommand::Segment {
                from: Point2::new(1.0, 0.0),
                to: Point2::new(1.0, t),
                stroke: Stroke::solid(Color::Green, 2.0),
            });
            commands.push(DrawCommand::Marker {
                at: Point2::new(c, s),
                color: Color::Red,
            });
            commands.push(DrawCommand::Marker {
                at: Point2::new(1.0, t),
                color: Color::Green,
            });
            commands.push(DrawCommand::Label {
                at: Point2::new(1.05, t),
                text: format!("tan={}", sig(t, 3)),
                color: Color::Green,
                valign: VAlign::Center,
            });
        }
        Tangent::Undefined => {
            commands.push(DrawCommand::Marker {
                at: Point2::new(c, s),
                color: Color::Red,
            });
            commands.push(DrawCommand::Label {
                at: Point2::new(0.1, 1.15),
                text: "tan undefined (cos ≈ 0)".to_string(),
                color: Color::Green,
                valign: VAlign::Baseline,
            });
        }
    }

    Scene {
        title: format!("Unit circle — θ = {:.2}°", result.angle_degrees),
        x_label: "cos(θ)".to_string(),
        y_label: "sin(θ)".to_string(),
        axis_limit: AXIS_LIMIT,
        equal_aspect: true,
        commands,
    }
}

/// The circle outline, traced by evenly spaced samples over a full turn
fn unit_circle_outline() -> DrawCommand {
    let points = (0..CIRCLE_SAMPLES)
        .map(|i| {
            let theta = TAU * i as f64 / (CIRCLE_SAMPLES - 1) as f64;
            Point2::new(theta.cos(), theta.sin())
        })
        .collect();

    DrawCommand::Polyline {
        points,
        stroke: Stroke::solid(Color::Black, 1.0),
    }
}
