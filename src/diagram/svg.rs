//! SVG backend for rendered scenes
//!
//! Maps a [`Scene`] onto a square SVG viewport. Pure string construction;
//! callers decide where the document goes. The core never depends on this
//! module, it only consumes scenes.

use crate::diagram::{Color, DrawCommand, LineStyle, Scene, VAlign};

/// Dash pattern for dashed strokes, in pixels
const DASH_PATTERN: &str = "6 4";
/// Point marker radius in pixels
const MARKER_RADIUS: f64 = 4.0;
/// Label font size in pixels
const FONT_SIZE: u32 = 13;
/// Title font size in pixels
const TITLE_FONT_SIZE: u32 = 15;

/// Maps world coordinates (both axes spanning ±limit) to pixel coordinates
struct Viewport {
    side: f64,
    limit: f64,
}

impl Viewport {
    fn x(&self, wx: f64) -> f64 {
        (wx + self.limit) / (2.0 * self.limit) * self.side
    }

    /// Pixel y grows downward, world y grows upward
    fn y(&self, wy: f64) -> f64 {
        (self.limit - wy) / (2.0 * self.limit) * self.side
    }
}

fn css_color(color: Color) -> &'static str {
    match color {
        Color::Black => "black",
        Color::Gray => "gray",
        Color::Red => "red",
        Color::Blue => "blue",
        Color::Green => "green",
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn stroke_attrs(stroke: &crate::diagram::Stroke) -> String {
    let dash = match stroke.style {
        LineStyle::Solid => String::new(),
        LineStyle::Dashed => format!(" stroke-dasharray=\"{}\"", DASH_PATTERN),
    };
    format!(
        "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"{}",
        css_color(stroke.color),
        stroke.width,
        dash
    )
}

/// Renders a scene to a standalone square SVG document
///
/// `side_px` is the pixel side length of the (always square) viewport; the
/// scene's equal-aspect requirement holds by construction.
pub fn scene_to_svg(scene: &Scene, side_px: u32) -> String {
    let side = side_px as f64;
    let vp = Viewport {
        side,
        limit: scene.axis_limit,
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{side_px}\" height=\"{side_px}\" viewBox=\"0 0 {side_px} {side_px}\">\n"
    ));
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    for command in &scene.commands {
        match command {
            DrawCommand::Polyline { points, stroke } => {
                let coords: Vec<String> = points
                    .iter()
                    .map(|p| format!("{:.2},{:.2}", vp.x(p.x), vp.y(p.y)))
                    .collect();
                out.push_str(&format!(
                    "<polyline points=\"{}\" {}/>\n",
                    coords.join(" "),
                    stroke_attrs(stroke)
                ));
            }
            DrawCommand::Segment { from, to, stroke } => {
                out.push_str(&format!(
                    "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>\n",
                    vp.x(from.x),
                    vp.y(from.y),
                    vp.x(to.x),
                    vp.y(to.y),
                    stroke_attrs(stroke)
                ));
            }
            DrawCommand::Marker { at, color } => {
                out.push_str(&format!(
                    "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\"/>\n",
                    vp.x(at.x),
                    vp.y(at.y),
                    MARKER_RADIUS,
                    css_color(*color)
                ));
            }
            DrawCommand::Label {
                at,
                text,
                color,
                valign,
            } => {
                let baseline = match valign {
                    VAlign::Baseline => "",
                    VAlign::Center => " dominant-baseline=\"middle\"",
                };
                out.push_str(&format!(
                    "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" font-family=\"sans-serif\" fill=\"{}\"{}>{}</text>\n",
                    vp.x(at.x),
                    vp.y(at.y),
                    FONT_SIZE,
                    css_color(*color),
                    baseline,
                    xml_escape(text)
                ));
            }
        }
    }

    // Title and axis captions around the construction
    out.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{}\" font-size=\"{}\" font-family=\"sans-serif\" text-anchor=\"middle\">{}</text>\n",
        side / 2.0,
        TITLE_FONT_SIZE + 5,
        TITLE_FONT_SIZE,
        xml_escape(&scene.title)
    ));
    out.push_str(&format!(
        "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" font-family=\"sans-serif\" text-anchor=\"middle\">{}</text>\n",
        side / 2.0,
        side - 6.0,
        FONT_SIZE,
        xml_escape(&scene.x_label)
    ));
    out.push_str(&format!(
        "<text x=\"14\" y=\"{:.2}\" font-size=\"{}\" font-family=\"sans-serif\" text-anchor=\"middle\" transform=\"rotate(-90 14 {:.2})\">{}</text>\n",
        side / 2.0,
        FONT_SIZE,
        side / 2.0,
        xml_escape(&scene.y_label)
    ));
    out.push_str("</svg>\n");
    out
}
