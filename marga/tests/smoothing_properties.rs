//! Invariants of the smoothing loop.

mod common;

use approx::assert_relative_eq;
use common::{init_logging, random_path, straight_path, unit_weights, zigzag_path};
use marga::smoothing::{curvature_term, max_curvature, roughness, smoothness_term};
use marga::{MapBounds, PathSmoother, Point2D, SmoothingConfig, Waypoint, is_on_grid};

#[test]
fn endpoints_and_length_are_invariant() {
    init_logging();
    let bounds = MapBounds::new(64, 48);
    let smoother = PathSmoother::new(bounds, &SmoothingConfig::default());

    for seed in 0..20 {
        let path = random_path(seed, 3 + seed as usize % 9, 64.0, 48.0);
        let out = smoother.smooth(&path);

        assert_eq!(out.len(), path.len());
        assert_eq!(out[0].position(), path[0].position());
        assert_eq!(out.last(), path.last());
    }
}

#[test]
fn short_paths_are_returned_unchanged() {
    let bounds = MapBounds::new(10, 10);
    let configs = [
        SmoothingConfig::default(),
        unit_weights(1000),
        SmoothingConfig {
            step_size: 5.0,
            max_iterations: 0,
            ..SmoothingConfig::default()
        },
    ];

    for config in &configs {
        let smoother = PathSmoother::new(bounds, config);
        for n in 0..3 {
            let path: Vec<Waypoint> = (0..n)
                .map(|i| Waypoint::new(i as f32 * 3.0 + 1.0, 2.0, 0.7))
                .collect();
            assert_eq!(smoother.smooth(&path), path);
        }
    }
}

#[test]
fn outputs_stay_on_grid_or_keep_their_input_position() {
    let bounds = MapBounds::new(30, 30);
    let smoother = PathSmoother::new(bounds, &unit_weights(50));

    for seed in 100..130 {
        let path = random_path(seed, 8, 30.0, 30.0);
        let out = smoother.smooth(&path);

        for (before, after) in path.iter().zip(&out) {
            assert!(
                is_on_grid(after.position(), &bounds) || after.position() == before.position(),
                "seed {}: {:?} left the map",
                seed,
                after
            );
        }
    }
}

#[test]
fn straight_line_is_a_fixed_point() {
    let bounds = MapBounds::new(20, 20);
    let path = straight_path(Point2D::new(2.0, 5.0), 8, 1.0);

    for config in [SmoothingConfig::default(), unit_weights(25)] {
        let smoother = PathSmoother::new(bounds, &config);
        assert_eq!(smoother.smooth(&path), path);
    }
}

#[test]
fn smoothing_is_deterministic() {
    let bounds = MapBounds::new(80, 80);
    let smoother = PathSmoother::new(bounds, &unit_weights(200));
    let path = random_path(7, 12, 80.0, 80.0);

    let a = smoother.smooth(&path);
    let b = smoother.smooth(&path);

    for (p, q) in a.iter().zip(&b) {
        assert_eq!(p.x.to_bits(), q.x.to_bits());
        assert_eq!(p.y.to_bits(), q.y.to_bits());
        assert_eq!(p.theta.to_bits(), q.theta.to_bits());
    }
}

#[test]
fn zigzag_gets_smoother_and_straighter() {
    let bounds = MapBounds::new(100, 100);
    let smoother = PathSmoother::new(bounds, &SmoothingConfig::default());
    let path = zigzag_path(Point2D::new(10.0, 50.0), 11, 5.0, 3.0);

    let (out, stats) = smoother.smooth_with_stats(&path);

    assert_eq!(stats.iterations, 500);
    assert_eq!(stats.rejected_updates, 0);
    assert!(roughness(&out) < 0.1 * roughness(&path));
    assert!(max_curvature(&out) < max_curvature(&path));
}

#[test]
fn sweep_uses_updated_previous_point() {
    let bounds = MapBounds::new(100, 100);
    let config = unit_weights(1);
    let smoother = PathSmoother::new(bounds, &config);
    let input = [
        Point2D::new(10.0, 60.0),
        Point2D::new(20.0, 64.0),
        Point2D::new(30.0, 58.0),
        Point2D::new(40.0, 62.0),
    ];

    let (out, stats) = smoother.smooth_with_stats(&marga::core::waypoints_from_points(&input));
    assert_eq!(stats.accepted_updates, 2);

    // One reference pass, in place.
    let mut expected = input;
    for i in 1..expected.len() - 1 {
        let (a, b, c) = (expected[i - 1], expected[i], expected[i + 1]);
        let mut correction = Point2D::ZERO;
        correction -= smoothness_term(a, b, c, 1.0);
        assert!(is_on_grid(b + correction, &bounds));
        correction -= curvature_term(a, b, c, 1.0, 0.1);
        assert!(is_on_grid(b + correction, &bounds));
        expected[i] = b + 0.1 * correction / 2.0;
    }

    for (got, want) in out.iter().zip(&expected) {
        assert_eq!(got.position(), *want);
    }

    // A synchronous update of point 2 (from the original point 1) differs.
    let (a, b, c) = (input[1], input[2], input[3]);
    let jacobi = b + 0.1 * (-smoothness_term(a, b, c, 1.0) - curvature_term(a, b, c, 1.0, 0.1)) / 2.0;
    assert_ne!(out[2].position(), jacobi);
}

#[test]
fn headings_follow_the_path_except_the_last_two() {
    let bounds = MapBounds::new(100, 100);
    let smoother = PathSmoother::new(bounds, &SmoothingConfig::default());
    let mut path = zigzag_path(Point2D::new(10.0, 50.0), 6, 5.0, 2.0);
    let n = path.len();
    path[n - 2].theta = 0.5;
    path[n - 1].theta = 1.0;

    let out = smoother.smooth(&path);

    for i in 0..n - 2 {
        let expected = (out[i + 1].position() - out[i].position()).angle();
        assert_relative_eq!(out[i].theta, expected, epsilon = 1e-6);
    }
    assert_eq!(out[n - 2].theta, 0.5);
    assert_eq!(out[n - 1].theta, 1.0);
}
