//! Unified configuration loading for marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = MargaConfig::load_default()?;
//!
//! // Convert to the runtime smoothing config
//! let smoothing = config.to_smoothing_config();
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! smoothing:
//!   smoothness_weight: 0.2
//!   curvature_weight: 0.2
//!   step_size: 0.1
//!   min_turn_radius: 6.0   # cells; kappa_max = 1 / (r * 1.1)
//!   max_iterations: 500
//!
//! obstacle:
//!   enabled: false
//!   weight: 0.2
//!   max_distance: 2.0
//! ```

mod defaults;
mod marga;
mod smoothing;

pub use marga::MargaConfig;
pub use smoothing::{ObstacleSection, SmoothingSection};
