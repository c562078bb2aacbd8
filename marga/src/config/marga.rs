//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::ObstacleField;
use crate::smoothing::{ObstacleTerm, SmoothingConfig};

use super::smoothing::{ObstacleSection, SmoothingSection};

/// Full marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Smoothing settings
    #[serde(default)]
    pub smoothing: SmoothingSection,

    /// Obstacle term settings (off by default)
    #[serde(default)]
    pub obstacle: ObstacleSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            log::info!("Loading configuration from {:?}", path);
            Self::load(path)
        } else {
            log::debug!("No configs/config.yaml, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: MargaConfig = serde_yaml::from_str(yaml)?;
        config.to_smoothing_config().validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Convert to SmoothingConfig
    pub fn to_smoothing_config(&self) -> SmoothingConfig {
        let section = &self.smoothing;
        SmoothingConfig {
            smoothness_weight: section.smoothness_weight,
            curvature_weight: section.curvature_weight,
            step_size: section.step_size,
            max_curvature: section
                .max_curvature
                .unwrap_or_else(|| 1.0 / (section.min_turn_radius * 1.1)),
            max_iterations: section.max_iterations,
        }
    }

    /// Build the obstacle term if enabled
    pub fn obstacle_term<'a>(&self, field: &'a ObstacleField) -> Option<ObstacleTerm<'a>> {
        self.obstacle.enabled.then(|| {
            ObstacleTerm::new(field, self.obstacle.weight, self.obstacle.max_distance)
        })
    }
}
