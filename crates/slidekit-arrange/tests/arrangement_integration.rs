// Integration tests for arrangement planning

use slidekit_arrange::{
    footprint, plan, ArrangementPlanner, ArrangementSpec, ArrangementType,
    CircularAngleStepParams, CircularArrayParams, GridArrayParams, LinearArrayParams,
    PathArrayParams, PlannerConfig, RadiusSource,
};
use slidekit_core::{ArrangementError, BoundingBox, Point2D};

const TOL: f64 = 1e-6;

fn source_at(center: Point2D) -> BoundingBox {
    BoundingBox::from_rect(center.x - 5.0, center.y - 5.0, 10.0, 10.0).unwrap()
}

#[test]
fn test_grid_two_by_two_scenario() {
    let spec: ArrangementSpec = GridArrayParams::new(2, 2, 50.0, 30.0, 0.0).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();

    let expected = [
        Point2D::new(0.0, 0.0),
        Point2D::new(50.0, 0.0),
        Point2D::new(0.0, 30.0),
        Point2D::new(50.0, 30.0),
    ];
    assert_eq!(out.len(), expected.len());
    for (t, e) in out.iter().zip(expected.iter()) {
        assert!(t.position.approx_eq(*e, TOL), "{:?} != {:?}", t.position, e);
        assert_eq!(t.rotation_degrees, None);
    }
}

#[test]
fn test_untilted_grid_is_exact() {
    let origin = Point2D::new(12.5, -3.25);
    let params = GridArrayParams::new(4, 5, 17.5, 9.0, 0.0);
    let spec: ArrangementSpec = params.clone().into();
    let out = plan(&spec, &source_at(origin)).unwrap();

    for r in 0..params.rows {
        for c in 0..params.columns {
            let t = out[(r * params.columns + c) as usize];
            assert_eq!(
                t.position,
                Point2D::new(origin.x + c as f64 * 17.5, origin.y + r as f64 * 9.0)
            );
        }
    }
}

#[test]
fn test_tilted_grid_keeps_cell_spacing() {
    let params = GridArrayParams::new(2, 3, 20.0, 10.0, 30.0);
    let spec: ArrangementSpec = params.into();
    let out = plan(&spec, &source_at(Point2D::new(100.0, 100.0))).unwrap();

    assert!(out[0].position.approx_eq(Point2D::new(100.0, 100.0), TOL));
    // Neighbouring columns stay 20pt apart, neighbouring rows 10pt apart
    assert!((out[0].position.distance_to(out[1].position) - 20.0).abs() < TOL);
    assert!((out[0].position.distance_to(out[3].position) - 10.0).abs() < TOL);
    // The row direction is the column direction turned a quarter clockwise
    let col_dir = out[0].position.angle_to(out[1].position);
    let row_dir = out[0].position.angle_to(out[3].position);
    assert!((col_dir - 30.0).abs() < TOL);
    assert!((row_dir - 120.0).abs() < TOL);
    assert!(out.iter().all(|t| t.rotation_degrees == Some(30.0)));
}

#[test]
fn test_equal_division_quarter_angles() {
    let spec: ArrangementSpec =
        CircularArrayParams::new(Point2D::new(50.0, 50.0), 30.0, 4, 0.0, true).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();

    let angles: Vec<f64> = out
        .iter()
        .map(|t| Point2D::new(50.0, 50.0).angle_to(t.position))
        .collect();
    let expected = [0.0, 90.0, 180.0, 270.0];
    for (a, e) in angles.iter().zip(expected.iter()) {
        assert!((a - e).abs() < TOL, "angle {a} != {e}");
    }

    let rotations: Vec<f64> = out.iter().map(|t| t.rotation_degrees.unwrap()).collect();
    assert_eq!(rotations, vec![90.0, 180.0, 270.0, 0.0]);
}

#[test]
fn test_single_circular_copy_has_no_division() {
    let equal: ArrangementSpec =
        CircularArrayParams::new(Point2D::ORIGIN, 10.0, 1, 45.0, false).into();
    let step: ArrangementSpec = CircularAngleStepParams::new(
        Point2D::ORIGIN,
        RadiusSource::Explicit(10.0),
        30.0,
        1,
        45.0,
        false,
    )
    .into();

    for spec in [equal, step] {
        let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();
        assert_eq!(out.len(), 1);
        assert!(out[0].position.approx_eq(Point2D::polar(Point2D::ORIGIN, 10.0, 45.0), TOL));
        assert!(out[0].position.x.is_finite());
    }
}

#[test]
fn test_angle_step_radius_from_source() {
    let center = Point2D::new(0.0, 0.0);
    let source_center = Point2D::new(30.0, 40.0);
    let spec: ArrangementSpec = CircularAngleStepParams::new(
        center,
        RadiusSource::FromSource,
        15.0,
        6,
        0.0,
        false,
    )
    .into();

    let out = plan(&spec, &source_at(source_center)).unwrap();
    assert_eq!(out.len(), 6);
    for t in &out {
        assert!((center.distance_to(t.position) - 50.0).abs() < TOL);
    }
}

#[test]
fn test_rotation_copy_through_planner() {
    let center = Point2D::new(200.0, 150.0);
    let source_center = Point2D::new(250.0, 150.0);
    let spec: ArrangementSpec =
        CircularAngleStepParams::rotation_copy(center, source_center, 180.0, true).into();
    assert_eq!(spec.array_type(), ArrangementType::CircularAngleStep);

    let out = plan(&spec, &source_at(source_center)).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[0].position.approx_eq(source_center, TOL));
    assert!(out[1].position.approx_eq(Point2D::new(150.0, 150.0), TOL));
    assert_eq!(out[1].rotation_degrees, Some(270.0));
}

#[test]
fn test_path_equal_spacing_two_copies_hits_endpoints() {
    let path = vec![
        Point2D::new(0.1, 0.3),
        Point2D::new(37.7, -12.9),
        Point2D::new(-4.4, 88.8),
        Point2D::new(61.3, 44.2),
    ];
    let spec: ArrangementSpec = PathArrayParams::equal(path.clone(), 2, false).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].position, path[0]);
    assert_eq!(out[1].position, path[3]);
}

#[test]
fn test_path_equal_spacing_uniform_arc_length() {
    let path = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(30.0, 0.0),
        Point2D::new(30.0, 30.0),
    ];
    let spec: ArrangementSpec = PathArrayParams::equal(path, 4, true).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();

    let expected = [
        (Point2D::new(0.0, 0.0), 0.0),
        (Point2D::new(20.0, 0.0), 0.0),
        (Point2D::new(30.0, 10.0), 90.0),
        (Point2D::new(30.0, 30.0), 90.0),
    ];
    for (t, (p, angle)) in out.iter().zip(expected.iter()) {
        assert!(t.position.approx_eq(*p, TOL), "{:?} != {:?}", t.position, p);
        assert!((t.rotation_degrees.unwrap() - angle).abs() < TOL);
    }
}

#[test]
fn test_path_corner_sample_uses_incoming_direction() {
    let path = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(10.0, 0.0),
        Point2D::new(10.0, 10.0),
    ];
    // Three equal samples: the middle one lands on the corner
    let spec: ArrangementSpec = PathArrayParams::equal(path, 3, true).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();
    assert!(out[1].position.approx_eq(Point2D::new(10.0, 0.0), TOL));
    assert!(out[1].rotation_degrees.unwrap().abs() < TOL);
}

fn ring(center: Point2D, radius: f64, start: f64) -> CircularArrayParams {
    CircularArrayParams {
        center,
        radius,
        count: 4,
        start_angle_degrees: start,
        rotate_shapes: true,
    }
}

fn step_ring(center: Point2D, radius: RadiusSource, start: f64) -> CircularAngleStepParams {
    CircularAngleStepParams {
        center,
        radius,
        angle_step_degrees: 30.0,
        count: 4,
        start_angle_degrees: start,
        rotate_shapes: true,
    }
}

#[test]
fn test_invalid_specs_are_rejected() {
    let source = source_at(Point2D::ORIGIN);
    let bad: Vec<(ArrangementSpec, &str)> = vec![
        (LinearArrayParams::new(0.0, 0, 10.0).into(), "count"),
        (GridArrayParams::new(2, 0, 10.0, 10.0, 0.0).into(), "columns"),
        (GridArrayParams::new(0, 2, 10.0, 10.0, 0.0).into(), "rows"),
        (GridArrayParams::new(65_536, 65_537, 1.0, 1.0, 0.0).into(), "rows"),
        (
            CircularArrayParams::new(Point2D::ORIGIN, 10.0, 0, 0.0, false).into(),
            "count",
        ),
        (ring(Point2D::new(f64::NAN, 0.0), 10.0, 0.0).into(), "center"),
        (ring(Point2D::ORIGIN, f64::INFINITY, 0.0).into(), "radius"),
        (ring(Point2D::ORIGIN, -1.0, 0.0).into(), "radius"),
        (ring(Point2D::ORIGIN, 10.0, f64::NAN).into(), "start_angle_degrees"),
        (
            step_ring(Point2D::new(0.0, f64::INFINITY), RadiusSource::FromSource, 0.0).into(),
            "center",
        ),
        (
            step_ring(Point2D::ORIGIN, RadiusSource::Explicit(f64::NAN), 0.0).into(),
            "radius",
        ),
        (
            step_ring(Point2D::ORIGIN, RadiusSource::Explicit(5.0), f64::NEG_INFINITY).into(),
            "start_angle_degrees",
        ),
        (PathArrayParams::equal(Vec::new(), 3, false).into(), "path_points"),
        (PathArrayParams::equal(vec![Point2D::ORIGIN], 0, false).into(), "count"),
        (
            PathArrayParams {
                path_points: vec![Point2D::ORIGIN, Point2D::new(10.0, 0.0)],
                count: 3,
                equal_spacing: false,
                custom_spacing: f64::NAN,
                rotate_along_path: false,
            }
            .into(),
            "custom_spacing",
        ),
        (
            LinearArrayParams {
                angle_degrees: 0.0,
                count: 3,
                spacing: f64::NAN,
            }
            .into(),
            "spacing",
        ),
    ];

    for (spec, expected_field) in bad {
        let err = plan(&spec, &source).unwrap_err();
        assert!(
            matches!(err, ArrangementError::InvalidSpec { field, .. } if field == expected_field),
            "{spec:?} gave {err:?}"
        );
    }
}

#[test]
fn test_negative_angle_step_rotates_copies_tangent() {
    let spec: ArrangementSpec = CircularAngleStepParams::new(
        Point2D::ORIGIN,
        RadiusSource::Explicit(10.0),
        -90.0,
        4,
        0.0,
        true,
    )
    .into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();

    // Counter-clockwise on screen: right, up, left, down
    let expected = [
        Point2D::new(10.0, 0.0),
        Point2D::new(0.0, -10.0),
        Point2D::new(-10.0, 0.0),
        Point2D::new(0.0, 10.0),
    ];
    for (t, e) in out.iter().zip(expected.iter()) {
        assert!(t.position.approx_eq(*e, TOL), "{:?} != {:?}", t.position, e);
    }
    let rotations: Vec<f64> = out.iter().map(|t| t.rotation_degrees.unwrap()).collect();
    assert_eq!(rotations, vec![90.0, 0.0, 270.0, 180.0]);
}

#[test]
fn test_path_corner_with_rounded_arc_length() {
    let path = vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(0.1, 0.0),
        Point2D::new(0.1, 0.2),
    ];
    let spec: ArrangementSpec = PathArrayParams::equal(path, 4, true).into();
    let out = plan(&spec, &source_at(Point2D::ORIGIN)).unwrap();
    assert!(out[1].position.approx_eq(Point2D::new(0.1, 0.0), TOL));
    assert!(out[1].rotation_degrees.unwrap().abs() < TOL);
}

#[test]
fn test_footprint_of_planned_ring() {
    let source = BoundingBox::from_rect(-5.0, -5.0, 10.0, 10.0).unwrap();
    let spec: ArrangementSpec =
        CircularArrayParams::new(Point2D::ORIGIN, 20.0, 4, 0.0, false).into();
    let out = plan(&spec, &source).unwrap();
    let bounds = footprint(&out, &source);

    assert!((bounds.left() + 25.0).abs() < TOL);
    assert!((bounds.right() - 25.0).abs() < TOL);
    assert!((bounds.top() + 25.0).abs() < TOL);
    assert!((bounds.bottom() - 25.0).abs() < TOL);
}

#[test]
fn test_planner_config_round_trips_through_json() {
    let config = PlannerConfig {
        tangent_rotation_offset_degrees: -90.0,
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: PlannerConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(ArrangementPlanner::new(back).config(), &config);
}
