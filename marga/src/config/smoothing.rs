//! Smoothing configuration sections.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Gradient-descent smoothing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSection {
    /// Weight of the smoothness (second-difference) term
    #[serde(default = "defaults::smoothness_weight")]
    pub smoothness_weight: f32,

    /// Weight of the curvature term
    #[serde(default = "defaults::curvature_weight")]
    pub curvature_weight: f32,

    /// Learning rate
    #[serde(default = "defaults::step_size")]
    pub step_size: f32,

    /// Vehicle minimum turning radius (cells); ignored if `max_curvature` is set
    #[serde(default = "defaults::min_turn_radius")]
    pub min_turn_radius: f32,

    /// Explicit curvature limit (1/cells), overrides `min_turn_radius`
    #[serde(default)]
    pub max_curvature: Option<f32>,

    /// Number of full passes
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for SmoothingSection {
    fn default() -> Self {
        Self {
            smoothness_weight: defaults::smoothness_weight(),
            curvature_weight: defaults::curvature_weight(),
            step_size: defaults::step_size(),
            min_turn_radius: defaults::min_turn_radius(),
            max_curvature: None,
            max_iterations: defaults::max_iterations(),
        }
    }
}

/// Optional obstacle-clearance term settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObstacleSection {
    /// Add the obstacle term when an occupancy grid is available
    #[serde(default)]
    pub enabled: bool,

    /// Term weight
    #[serde(default = "defaults::obstacle_weight")]
    pub weight: f32,

    /// Clearance (cells) beyond which obstacles are ignored
    #[serde(default = "defaults::obstacle_max_distance")]
    pub max_distance: f32,
}

impl Default for ObstacleSection {
    fn default() -> Self {
        Self {
            enabled: false,
            weight: defaults::obstacle_weight(),
            max_distance: defaults::obstacle_max_distance(),
        }
    }
}
