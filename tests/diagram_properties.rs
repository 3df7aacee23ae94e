//! End-to-end properties of the angle evaluator and diagram renderer

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fs;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;
use unitcircle::diagram::svg::scene_to_svg;
use unitcircle::{evaluate, render, reset_bounds, AngleResult, AngleUnit, Tangent};

#[rstest]
#[case(0.0)]
#[case(30.0)]
#[case(45.0)]
#[case(135.0)]
#[case(-60.0)]
#[case(-359.0)]
#[case(719.5)]
fn unit_representations_agree(#[case] degrees: f64) {
    let from_deg = evaluate(degrees, AngleUnit::Degrees);
    let from_rad = evaluate(degrees.to_radians(), AngleUnit::Radians);

    assert_abs_diff_eq!(
        from_deg.angle_radians,
        from_rad.angle_radians,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(from_deg.sine, from_rad.sine, epsilon = 1e-12);
    assert_abs_diff_eq!(from_deg.cosine, from_rad.cosine, epsilon = 1e-12);
}

#[rstest]
#[case(0.0)]
#[case(17.0)]
#[case(90.0)]
#[case(180.0)]
#[case(270.0)]
#[case(-123.4)]
#[case(100_000.0)]
fn pythagorean_identity_holds(#[case] degrees: f64) {
    let result = evaluate(degrees, AngleUnit::Degrees);
    let norm = result.sine * result.sine + result.cosine * result.cosine;
    assert_relative_eq!(norm, 1.0, max_relative = 1e-13);
}

#[rstest]
#[case(90.0)]
#[case(270.0)]
#[case(-90.0)]
#[case(450.0)]
fn tangent_undefined_at_asymptotes(#[case] degrees: f64) {
    assert_eq!(
        evaluate(degrees, AngleUnit::Degrees).tangent,
        Tangent::Undefined
    );
}

#[test]
fn tangent_of_forty_five_degrees_is_one() {
    let tan = evaluate(45.0, AngleUnit::Degrees)
        .tangent
        .value()
        .expect("tan(45°) is defined");
    assert_abs_diff_eq!(tan, 1.0, epsilon = 1e-6);
}

#[test]
fn zero_angle_is_exact() {
    let result = evaluate(0.0, AngleUnit::Degrees);
    assert_eq!(result.angle_degrees, 0.0);
    assert_eq!(result.angle_radians, 0.0);
    assert_eq!(result.sine, 0.0);
    assert_eq!(result.cosine, 1.0);
    assert_eq!(result.tangent, Tangent::Defined(0.0));
}

#[test]
fn half_turn_keeps_tangent_defined() {
    let result = evaluate(180.0, AngleUnit::Degrees);
    assert_abs_diff_eq!(result.sine, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.cosine, -1.0, epsilon = 1e-15);
    let tan = result.tangent.value().expect("tan(180°) is defined");
    assert_abs_diff_eq!(tan, 0.0, epsilon = 1e-12);
}

#[test]
fn cutoff_boundary_splits_where_documented() {
    // cos(π/2 - δ) ≈ δ, one decade on each side of the 1e-12 cutoff
    assert_eq!(
        evaluate(FRAC_PI_2 - 1e-13, AngleUnit::Radians).tangent,
        Tangent::Undefined
    );
    assert!(evaluate(FRAC_PI_2 - 1e-11, AngleUnit::Radians)
        .tangent
        .is_defined());
}

#[test]
fn evaluation_is_idempotent() {
    let a = evaluate(-271.25, AngleUnit::Degrees);
    let b = evaluate(-271.25, AngleUnit::Degrees);
    assert_eq!(a, b);
    assert_eq!(a.sine.to_bits(), b.sine.to_bits());
    assert_eq!(a.cosine.to_bits(), b.cosine.to_bits());
}

#[test]
fn summary_and_scene_agree_on_undefined_tangent() {
    let diagram = render(&evaluate(90.0, AngleUnit::Degrees));

    assert!(diagram.summary.ends_with("tan: undefined"));
    let svg = scene_to_svg(&diagram.scene, 480);
    assert!(svg.contains("tan undefined"));
    assert!(!svg.contains("stroke=\"green\""));
}

#[test]
fn result_serializes_and_round_trips() {
    let result = evaluate(60.0, AngleUnit::Degrees);
    let json = serde_json::to_string(&result).unwrap();
    let back: AngleResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);

    // The undefined sentinel crosses the boundary as null
    let undefined = evaluate(90.0, AngleUnit::Degrees);
    let json = serde_json::to_string(&undefined).unwrap();
    assert!(json.contains("\"tangent\":null"));
    let back: AngleResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.tangent, Tangent::Undefined);
}

#[test]
fn control_bounds_reset_per_unit() {
    let deg = reset_bounds(AngleUnit::Degrees);
    assert_eq!((deg.min, deg.max, deg.step, deg.value), (-360.0, 360.0, 1.0, 45.0));

    let rad = reset_bounds(AngleUnit::Radians);
    assert_eq!(rad.min, -2.0 * PI);
    assert_eq!(rad.max, 2.0 * PI);
    assert_eq!(rad.step, 0.01);
    assert_eq!(rad.value, FRAC_PI_4);
}

#[test]
fn svg_artifact_is_writable_and_complete() {
    let diagram = render(&evaluate(45.0, AngleUnit::Degrees));
    let svg = scene_to_svg(&diagram.scene, 640);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circle.svg");
    fs::write(&path, &svg).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<svg"));
    assert!(written.trim_end().ends_with("</svg>"));
    assert!(written.contains("Unit circle — θ = 45.00°"));
    assert!(written.contains("tan=1"));
}
