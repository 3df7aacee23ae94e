//! Unit Circle Diagram Tool
//!
//! Evaluates a single angle, prints its trigonometric summary, and can emit
//! the diagram as a JSON scene description or an SVG file.
//!
//! Usage:
//!   cargo run --bin unit_circle -- --angle 45 --unit deg --output circle.svg

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use unitcircle::diagram::svg::scene_to_svg;
use unitcircle::{evaluate, render, AngleUnit};

/// Type alias for the error type used throughout this module
type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Unit Circle Diagram Tool
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Evaluates an angle and renders its unit-circle diagram",
    long_about = None
)]
struct Args {
    /// Angle value to evaluate
    #[arg(short, long, default_value_t = 45.0)]
    angle: f64,

    /// Unit of the angle value ("deg" or "rad")
    #[arg(short, long, default_value = "deg")]
    unit: String,

    /// Print the evaluation and scene as JSON instead of the text summary
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Write the diagram to an SVG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Side length of the emitted SVG in pixels
    #[arg(long, default_value_t = 640)]
    size: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let unit: AngleUnit = args.unit.parse()?;
    let result = evaluate(args.angle, unit);
    let diagram = render(&result);

    if args.json {
        let doc = serde_json::json!({
            "result": result,
            "scene": diagram.scene,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!("{}", diagram.summary);
    }

    if let Some(path) = args.output {
        let svg = scene_to_svg(&diagram.scene, args.size);
        let stamped = format!(
            "<!-- generated by unit_circle on {} -->\n{}",
            chrono::Local::now().format("%Y-%m-%d"),
            svg
        );
        fs::write(&path, stamped)?;
        println!("Wrote diagram to {}", path.display());
    }

    Ok(())
}
