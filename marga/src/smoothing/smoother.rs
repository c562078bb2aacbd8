//! Gradient-descent path smoother.
//!
//! Post-processes grid-planner paths into low-curvature trajectories by:
//! - Pulling each interior waypoint toward the chord of its neighbors
//! - Penalizing turns sharper than the vehicle's minimum turning radius
//! - Rejecting any update that would leave the map
//!
//! Each pass is a Gauss–Seidel sweep over the interior points: point `i` sees
//! the already-updated point `i-1` and the not-yet-updated point `i+1`.
//! Reordering or parallelizing the sweep changes the numerical result.

use serde::{Deserialize, Serialize};

use super::terms::{CorrectionTerm, CurvatureTerm, SmoothnessTerm};
use crate::core::{MapBounds, Point2D, Waypoint, is_on_grid, waypoints_from_points};
use crate::error::{MargaError, Result};

/// Configuration for path smoothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Weight of the smoothness (second-difference) term
    pub smoothness_weight: f32,
    /// Weight of the curvature term
    pub curvature_weight: f32,
    /// Learning rate applied to the normalized correction
    pub step_size: f32,
    /// Maximum discrete curvature (1 / minimum turning radius, per cell)
    pub max_curvature: f32,
    /// Number of full passes over the path
    pub max_iterations: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smoothness_weight: 0.2,
            curvature_weight: 0.2,
            step_size: 0.1,
            max_curvature: 1.0 / (6.0 * 1.1), // 6-cell turning radius + 10%
            max_iterations: 500,
        }
    }
}

impl SmoothingConfig {
    /// Configuration for a vehicle with the given minimum turning radius.
    ///
    /// A 10% margin is applied to the radius, so the curvature term engages
    /// slightly before the hard limit.
    pub fn for_turning_radius(min_turn_radius: f32) -> Self {
        Self {
            max_curvature: 1.0 / (min_turn_radius * 1.1),
            ..Self::default()
        }
    }

    /// Sum of the term weights; the step normalizer.
    pub fn total_weight(&self) -> f32 {
        self.smoothness_weight + self.curvature_weight
    }

    /// Check that the parameters describe a usable run.
    pub fn validate(&self) -> Result<()> {
        if !(self.smoothness_weight.is_finite() && self.smoothness_weight >= 0.0) {
            return Err(MargaError::InvalidParameter(format!(
                "smoothness_weight must be finite and non-negative, got {}",
                self.smoothness_weight
            )));
        }
        if !(self.curvature_weight.is_finite() && self.curvature_weight >= 0.0) {
            return Err(MargaError::InvalidParameter(format!(
                "curvature_weight must be finite and non-negative, got {}",
                self.curvature_weight
            )));
        }
        if self.total_weight() <= 0.0 {
            return Err(MargaError::InvalidParameter(
                "smoothness_weight + curvature_weight must be positive".to_string(),
            ));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(MargaError::InvalidParameter(format!(
                "step_size must be finite and positive, got {}",
                self.step_size
            )));
        }
        if self.max_curvature.is_nan() || self.max_curvature < 0.0 {
            return Err(MargaError::InvalidParameter(format!(
                "max_curvature must be non-negative, got {}",
                self.max_curvature
            )));
        }
        Ok(())
    }
}

/// Counters collected during one smoothing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SmoothingStats {
    /// Full passes performed
    pub iterations: usize,
    /// Point updates applied
    pub accepted_updates: usize,
    /// Point updates skipped because a partial correction left the map
    pub rejected_updates: usize,
}

/// Gradient-descent path smoother.
///
/// Owns an ordered list of correction terms and the map extent. The default
/// term set is smoothness followed by curvature.
pub struct PathSmoother<'a> {
    bounds: MapBounds,
    terms: Vec<Box<dyn CorrectionTerm + 'a>>,
    step_size: f32,
    max_iterations: usize,
}

impl<'a> PathSmoother<'a> {
    /// Create a smoother with the default smoothness and curvature terms.
    pub fn new(bounds: MapBounds, config: &SmoothingConfig) -> Self {
        let terms: Vec<Box<dyn CorrectionTerm + 'a>> = vec![
            Box::new(SmoothnessTerm::new(config.smoothness_weight)),
            Box::new(CurvatureTerm::new(
                config.curvature_weight,
                config.max_curvature,
            )),
        ];
        Self::with_terms(bounds, terms, config.step_size, config.max_iterations)
    }

    /// Create with default configuration.
    pub fn with_defaults(bounds: MapBounds) -> Self {
        Self::new(bounds, &SmoothingConfig::default())
    }

    /// Create a smoother with an explicit, ordered term set.
    pub fn with_terms(
        bounds: MapBounds,
        terms: Vec<Box<dyn CorrectionTerm + 'a>>,
        step_size: f32,
        max_iterations: usize,
    ) -> Self {
        Self {
            bounds,
            terms,
            step_size,
            max_iterations,
        }
    }

    /// Append a correction term, evaluated after the existing ones.
    pub fn push_term(&mut self, term: Box<dyn CorrectionTerm + 'a>) {
        self.terms.push(term);
    }

    /// Insert a correction term ahead of the existing ones.
    pub fn prepend_term(&mut self, term: Box<dyn CorrectionTerm + 'a>) {
        self.terms.insert(0, term);
    }

    /// Names of the active terms, in evaluation order.
    pub fn term_names(&self) -> Vec<&str> {
        self.terms.iter().map(|t| t.name()).collect()
    }

    /// Map extent used by the bounds guard.
    pub fn bounds(&self) -> MapBounds {
        self.bounds
    }

    /// Sum of the active term weights.
    pub fn total_weight(&self) -> f32 {
        self.terms.iter().map(|t| t.weight()).sum()
    }

    /// Smooth a path. Output has the same length and endpoint positions.
    pub fn smooth(&self, path: &[Waypoint]) -> Vec<Waypoint> {
        self.smooth_with_stats(path).0
    }

    /// Smooth bare positions; input headings are taken as zero.
    pub fn smooth_points(&self, points: &[Point2D]) -> Vec<Waypoint> {
        self.smooth(&waypoints_from_points(points))
    }

    /// Smooth a path and report what happened.
    pub fn smooth_with_stats(&self, path: &[Waypoint]) -> (Vec<Waypoint>, SmoothingStats) {
        let mut smoothed = path.to_vec();
        let mut stats = SmoothingStats::default();

        if smoothed.len() < 3 {
            return (smoothed, stats);
        }

        let total_weight = self.total_weight();
        if !(total_weight.is_finite() && total_weight > 0.0) {
            log::warn!(
                "Path smoothing skipped: total term weight {} is not positive",
                total_weight
            );
            return (smoothed, stats);
        }

        for _ in 0..self.max_iterations {
            for i in 1..smoothed.len() - 1 {
                if self.update_point(&mut smoothed, i, total_weight) {
                    stats.accepted_updates += 1;
                } else {
                    stats.rejected_updates += 1;
                }
            }
            stats.iterations += 1;
        }

        log::debug!(
            "Smoothed {} waypoints: {} passes, {} updates accepted, {} rejected off-grid",
            smoothed.len(),
            stats.iterations,
            stats.accepted_updates,
            stats.rejected_updates
        );

        (smoothed, stats)
    }

    /// Apply one Gauss–Seidel update to interior point `i`.
    ///
    /// Returns false if a partial correction left the map, in which case the
    /// path is untouched.
    fn update_point(&self, path: &mut [Waypoint], i: usize, total_weight: f32) -> bool {
        let xim1 = path[i - 1].position();
        let xi = path[i].position();
        let xip1 = path[i + 1].position();

        let mut correction = Point2D::ZERO;

        // Guard after every partial sum, before any scaling.
        for term in &self.terms {
            correction -= term.gradient(xim1, xi, xip1);
            if !is_on_grid(xi + correction, &self.bounds) {
                return false;
            }
        }

        let updated = xi + self.step_size * correction / total_weight;
        path[i].set_position(updated);
        path[i - 1].theta = (updated - xim1).angle();

        true
    }
}
