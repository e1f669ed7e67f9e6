use glam::DVec2;
use smooth_chart::curve::{
    self, augment, natural_segments, CubicBezier, CurveMode, OUTLIER_OFFSET,
};
use smooth_chart::data_types::PointSet;
use smooth_chart::transform::Viewport;

fn scenario_screen() -> Vec<DVec2> {
    PointSet::new(vec![
        DVec2::new(0.0, 17.0),
        DVec2::new(1.0, 23.0),
        DVec2::new(2.0, 60.0),
        DVec2::new(3.0, 32.0),
    ])
    .to_screen(Viewport::new(300.0, 200.0))
}

fn wavy_screen() -> Vec<DVec2> {
    let ys = [17.0, 23.0, 60.0, 32.0, 12.0, 37.0, 0.0, 23.0, 60.0];
    PointSet::new(ys.iter().enumerate().map(|(i, &y)| DVec2::new(i as f64, y)).collect())
        .to_screen(Viewport::new(350.0, 230.0))
}

#[test]
fn test_augment_adds_outliers() {
    let points = scenario_screen();
    let augmented = augment(&points);
    assert_eq!(augmented.len(), points.len() + 2);
    assert_eq!(augmented[0], points[0] - DVec2::new(OUTLIER_OFFSET, 0.0));
    assert_eq!(augmented[augmented.len() - 1], points[3] + DVec2::new(OUTLIER_OFFSET, 0.0));
    assert_eq!(&augmented[1..5], &points[..]);
    assert!(augment(&[]).is_empty());
}

#[test]
fn test_adaptive_offsets_are_step_times_width() {
    let points = scenario_screen();
    let segments = curve::segments(&points, CurveMode::Adaptive { step: 0.1 }, 300.0);
    let augmented = augment(&points);
    assert_eq!(segments.len(), augmented.len() - 1);

    for (i, segment) in segments.iter().enumerate() {
        let c1 = segment.control1 - augmented[i];
        let c2 = augmented[i + 1] - segment.control2;
        assert!((c1.x - 30.0).abs() < 1e-9, "segment {i}: {c1:?}");
        assert_eq!(c1.y, 0.0);
        assert!((c2.x - 30.0).abs() < 1e-9, "segment {i}: {c2:?}");
        assert_eq!(c2.y, 0.0);
    }
}

#[test]
fn test_adaptive_controls_between_vertices() {
    let points = scenario_screen();
    let path = curve::build_path(&points, CurveMode::Adaptive { step: 0.1 }, 300.0);
    for c in path.curves() {
        assert!(c.from.x < c.control1.x && c.control1.x < c.to.x);
        assert!(c.from.x < c.control2.x && c.control2.x < c.to.x);
    }
}

#[test]
fn test_path_visits_every_vertex() {
    let modes = [CurveMode::default(), CurveMode::bounded(), CurveMode::Natural];
    for points in [scenario_screen(), wavy_screen()] {
        for mode in modes {
            let path = curve::build_path(&points, mode, 350.0);
            // Outliers never become vertices
            assert_eq!(path.vertices(), points, "{mode:?}");
            assert_eq!(path.curves().len(), points.len() - 1);
            for (curve, pair) in path.curves().iter().zip(points.windows(2)) {
                assert_eq!(curve.eval(0.0), pair[0]);
                assert_eq!(curve.eval(1.0), pair[1]);
            }
        }
    }
}

#[test]
fn test_path_uses_matching_segments() {
    let points = scenario_screen();
    let mode = CurveMode::Natural;
    let segments = curve::segments(&points, mode, 300.0);
    let path = curve::build_path(&points, mode, 300.0);
    for (k, curve) in path.curves().iter().enumerate() {
        assert_eq!(curve.control1, segments[k + 1].control1);
        assert_eq!(curve.control2, segments[k + 1].control2);
    }
}

#[test]
fn test_natural_is_c1_continuous() {
    let points = wavy_screen();
    let path = curve::build_path(&points, CurveMode::Natural, 350.0);
    for pair in path.curves().windows(2) {
        let end = pair[0].derivative(1.0);
        let start = pair[1].derivative(0.0);
        assert!(
            (end - start).length() < 1e-6 * end.length().max(1.0),
            "derivative jump {end:?} vs {start:?}"
        );
    }
}

#[test]
fn test_natural_has_zero_curvature_at_ends() {
    let knots = augment(&wavy_screen());
    let segments = natural_segments(&knots);
    let n = segments.len();
    assert_eq!(n, knots.len() - 1);

    let first = CubicBezier::new(knots[0], segments[0].control1, segments[0].control2, knots[1]);
    let last = CubicBezier::new(knots[n - 1], segments[n - 1].control1, segments[n - 1].control2, knots[n]);
    assert!(first.second_derivative(0.0).length() < 1e-6);
    assert!(last.second_derivative(1.0).length() < 1e-6);
}

#[test]
fn test_natural_two_knots_is_straight() {
    let segments = natural_segments(&[DVec2::new(0.0, 0.0), DVec2::new(30.0, 60.0)]);
    assert_eq!(segments.len(), 1);
    assert!((segments[0].control1 - DVec2::new(10.0, 20.0)).length() < 1e-9);
    assert!((segments[0].control2 - DVec2::new(20.0, 40.0)).length() < 1e-9);
}

#[test]
fn test_too_few_points_give_no_curve() {
    for mode in [CurveMode::default(), CurveMode::Natural] {
        assert!(curve::segments(&[], mode, 300.0).is_empty());
        assert!(curve::segments(&[DVec2::new(1.0, 1.0)], mode, 300.0).is_empty());
        assert!(curve::build_path(&[], mode, 300.0).is_empty());
        assert!(curve::build_path(&[DVec2::new(1.0, 1.0)], mode, 300.0).is_empty());
    }
}

#[test]
fn test_non_positive_width_gives_no_curve() {
    let points = scenario_screen();
    for mode in [CurveMode::default(), CurveMode::Natural] {
        for width in [0.0, -100.0, f64::NAN] {
            assert!(curve::build_path(&points, mode, width).is_empty());
        }
    }
}

#[test]
fn test_flatten_covers_path() {
    let points = wavy_screen();
    let path = curve::build_path(&points, CurveMode::default(), 350.0);
    let samples = path.flatten(1.0);

    assert_eq!(samples.first(), points.first());
    assert_eq!(samples.last(), points.last());
    for vertex in &points {
        assert!(samples.contains(vertex));
    }
    for pair in samples.windows(2) {
        assert!(pair[0].distance(pair[1]) <= 1.0 + 1e-9);
    }
    assert_eq!(samples, path.flatten(1.0));
}

#[test]
fn test_trim_follows_arc_length() {
    let points = scenario_screen();
    let path = curve::build_path(&points, CurveMode::default(), 300.0);
    let total = path.length(1.0);

    assert!(path.trim(0.0, 1.0).is_empty());
    assert_eq!(path.trim(1.0, 1.0), path.flatten(1.0));

    let half = path.trim(0.5, 1.0);
    let half_length: f64 = half.windows(2).map(|p| p[0].distance(p[1])).sum();
    assert!((half_length - total / 2.0).abs() < 1e-6);
    assert_eq!(half[0], points[0]);
}
