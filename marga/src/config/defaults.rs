//! Default value functions for serde deserialization.

pub fn smoothness_weight() -> f32 {
    0.2
}

pub fn curvature_weight() -> f32 {
    0.2
}

pub fn step_size() -> f32 {
    0.1
}

/// Minimum turning radius in cells
pub fn min_turn_radius() -> f32 {
    6.0
}

pub fn max_iterations() -> usize {
    500
}

pub fn obstacle_weight() -> f32 {
    0.2
}

pub fn obstacle_max_distance() -> f32 {
    2.0
}
