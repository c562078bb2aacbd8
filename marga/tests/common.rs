//! Test utilities for marga integration tests.
//!
//! Helpers for building paths and configurations.

#![allow(dead_code)]

use marga::{Point2D, SmoothingConfig, Waypoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Equally spaced collinear waypoints along +X, zero heading.
pub fn straight_path(start: Point2D, n: usize, spacing: f32) -> Vec<Waypoint> {
    (0..n)
        .map(|i| Waypoint::new(start.x + i as f32 * spacing, start.y, 0.0))
        .collect()
}

/// Zig-zag along +X alternating between `y` and `y + amplitude`.
pub fn zigzag_path(start: Point2D, n: usize, spacing: f32, amplitude: f32) -> Vec<Waypoint> {
    (0..n)
        .map(|i| {
            let dy = if i % 2 == 0 { 0.0 } else { amplitude };
            Waypoint::new(start.x + i as f32 * spacing, start.y + dy, 0.0)
        })
        .collect()
}

/// Random waypoints inside `[0, width) × [0, height)` from a fixed seed.
pub fn random_path(seed: u64, n: usize, width: f32, height: f32) -> Vec<Waypoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Waypoint::new(
                rng.gen_range(0.0..width),
                rng.gen_range(0.0..height),
                rng.gen_range(-3.0..3.0),
            )
        })
        .collect()
}

/// Unit weights with a tight curvature limit, so both terms are active.
pub fn unit_weights(iterations: usize) -> SmoothingConfig {
    SmoothingConfig {
        smoothness_weight: 1.0,
        curvature_weight: 1.0,
        step_size: 0.1,
        max_curvature: 0.1,
        max_iterations: iterations,
    }
}

/// Initialize logging once for tests that want to see trace output.
pub fn init_logging() {
    env_logger::builder().is_test(true).try_init().ok();
}
