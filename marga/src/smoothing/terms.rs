//! Gradient correction terms.
//!
//! Each term maps a three-point stencil `(xim1, xi, xip1)` to the gradient of
//! its penalty with respect to `xi`. The smoother *subtracts* every gradient
//! from the running correction, so a term pulls the point downhill on its own
//! cost.
//!
//! The gradients follow Dolgov, Thrun, Montemerlo and Diebel, "Practical
//! search techniques in path planning for autonomous driving" (2008).

use crate::core::Point2D;

/// A pluggable gradient provider for the smoothing loop.
///
/// Terms are evaluated in insertion order; after each one the smoother checks
/// that the partially corrected point is still on the grid. The final step is
/// normalized by the sum of [`CorrectionTerm::weight`] over all terms.
pub trait CorrectionTerm: Send + Sync {
    /// Name of this term for logging/debugging
    fn name(&self) -> &str;

    /// Weight of this term, used for step normalization
    fn weight(&self) -> f32;

    /// Gradient of this term's penalty at `xi`.
    ///
    /// # Arguments
    /// * `xim1` - Previous point (already updated in the current pass)
    /// * `xi` - Point being updated
    /// * `xip1` - Next point (not yet updated in the current pass)
    fn gradient(&self, xim1: Point2D, xi: Point2D, xip1: Point2D) -> Point2D;
}

/// Gradient of the sum-of-squared-second-differences penalty.
///
/// `weight * (-4) * (xip1 - 2*xi + xim1)`. Total: no division, never NaN for
/// finite input.
#[inline]
pub fn smoothness_term(xim1: Point2D, xi: Point2D, xip1: Point2D, weight: f32) -> Point2D {
    weight * -4.0 * (xip1 - 2.0 * xi + xim1)
}

/// Gradient of the curvature penalty, active only above `kappa_max`.
///
/// Discrete curvature at `xi` is the turn angle between the incoming and
/// outgoing edges divided by the incoming edge length. Returns the zero
/// vector when either edge is degenerate, when curvature is within bound, or
/// when the computation produced NaN (turn angle at 0 or π).
pub fn curvature_term(
    xim1: Point2D,
    xi: Point2D,
    xip1: Point2D,
    weight: f32,
    kappa_max: f32,
) -> Point2D {
    let dxi = xi - xim1;
    let dxip1 = xip1 - xi;

    let abs_dxi = dxi.length();
    let abs_dxip1 = dxip1.length();

    if !(abs_dxi > 0.0 && abs_dxip1 > 0.0) {
        log::trace!(
            "Curvature term zero: degenerate edge (|dxi|={}, |dxip1|={})",
            abs_dxi,
            abs_dxip1
        );
        return Point2D::ZERO;
    }

    let dphi = (dxi.dot(&dxip1) / (abs_dxi * abs_dxip1))
        .clamp(-1.0, 1.0)
        .acos();
    let kappa = dphi / abs_dxi;

    if kappa <= kappa_max {
        return Point2D::ZERO;
    }

    let abs_dxi_inv = 1.0 / abs_dxi;
    let pdphi_pcos = -1.0 / (1.0 - dphi.cos().powi(2)).sqrt();
    let u = -abs_dxi_inv * pdphi_pcos;

    // Orthogonal complements, taken on absolute positions.
    let edge_product = abs_dxi * abs_dxip1;
    let p1 = xi.ort(&-xip1) / edge_product;
    let p2 = -xip1.ort(&xi) / edge_product;

    let s = dphi / (abs_dxi * abs_dxi);

    let ki = u * (-p1 - p2) - s;
    let kim1 = u * p2 - s;
    let kip1 = u * p1;

    let gradient = weight * (0.25 * kim1 + 0.5 * ki + 0.25 * kip1);

    if gradient.is_nan() {
        log::trace!("Curvature term zero: NaN gradient at kappa={}", kappa);
        return Point2D::ZERO;
    }

    gradient
}

/// Roughness penalty, always active.
#[derive(Clone, Debug)]
pub struct SmoothnessTerm {
    weight: f32,
}

impl SmoothnessTerm {
    /// Create a smoothness term with the given weight.
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

impl CorrectionTerm for SmoothnessTerm {
    fn name(&self) -> &str {
        "smoothness"
    }

    fn weight(&self) -> f32 {
        self.weight
    }

    fn gradient(&self, xim1: Point2D, xi: Point2D, xip1: Point2D) -> Point2D {
        smoothness_term(xim1, xi, xip1, self.weight)
    }
}

/// Curvature-bound penalty.
#[derive(Clone, Debug)]
pub struct CurvatureTerm {
    weight: f32,
    kappa_max: f32,
}

impl CurvatureTerm {
    /// Create a curvature term.
    ///
    /// # Arguments
    /// * `weight` - Term weight
    /// * `kappa_max` - Maximum allowed discrete curvature (1 / min turning radius)
    pub fn new(weight: f32, kappa_max: f32) -> Self {
        Self { weight, kappa_max }
    }

    /// Curvature threshold above which the term activates.
    pub fn kappa_max(&self) -> f32 {
        self.kappa_max
    }
}

impl CorrectionTerm for CurvatureTerm {
    fn name(&self) -> &str {
        "curvature"
    }

    fn weight(&self) -> f32 {
        self.weight
    }

    fn gradient(&self, xim1: Point2D, xi: Point2D, xip1: Point2D) -> Point2D {
        curvature_term(xim1, xi, xip1, self.weight, self.kappa_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_smoothness_straight_line_is_zero() {
        let g = smoothness_term(p(0.0, 0.0), p(1.0, 1.0), p(2.0, 2.0), 0.7);
        assert_eq!(g, Point2D::ZERO);
    }

    #[test]
    fn test_smoothness_formula() {
        // second difference = (10,5) - (10,0) + (0,0) = (0,5)
        let g = smoothness_term(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0), 1.0);
        assert_eq!(g, p(0.0, -20.0));

        let half = smoothness_term(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0), 0.5);
        assert_eq!(half, p(0.0, -10.0));
    }

    #[test]
    fn test_smoothness_correction_pulls_toward_chord() {
        let xi = p(5.0, 0.0);
        let g = smoothness_term(p(0.0, 0.0), xi, p(10.0, 10.0), 1.0);
        let moved = xi - g * 0.01;
        // chord midpoint is (5, 5)
        assert!(moved.distance(&p(5.0, 5.0)) < xi.distance(&p(5.0, 5.0)));
    }

    #[test]
    fn test_curvature_below_threshold_is_zero() {
        // 45 degree turn over an edge of length 10: kappa ~ 0.0785
        let g = curvature_term(p(0.0, 0.0), p(10.0, 0.0), p(20.0, 10.0), 1.0, 0.1);
        assert_eq!(g, Point2D::ZERO);
    }

    #[test]
    fn test_curvature_above_threshold_matches_hand_computation() {
        // 45 degree turn over an edge of length 5: kappa ~ 0.157
        let g = curvature_term(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0), 1.0, 0.1);
        assert_relative_eq!(g.x, -0.025562, epsilon = 1e-4);
        assert_relative_eq!(g.y, -0.009562, epsilon = 1e-4);
    }

    #[test]
    fn test_curvature_scales_with_weight() {
        let a = curvature_term(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0), 1.0, 0.1);
        let b = curvature_term(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0), 2.0, 0.1);
        assert!(a.length() > 0.0);
        assert!(b.length() > a.length());
        assert_relative_eq!(b.x, 2.0 * a.x, epsilon = 1e-6);
        assert_relative_eq!(b.y, 2.0 * a.y, epsilon = 1e-6);
    }

    #[test]
    fn test_curvature_degenerate_edges_are_zero() {
        let g = curvature_term(p(3.0, 3.0), p(3.0, 3.0), p(5.0, 1.0), 1.0, 0.0);
        assert_eq!(g, Point2D::ZERO);

        let g = curvature_term(p(1.0, 3.0), p(3.0, 3.0), p(3.0, 3.0), 1.0, 0.0);
        assert_eq!(g, Point2D::ZERO);
    }

    #[test]
    fn test_curvature_straight_line_is_zero() {
        let g = curvature_term(p(1.0, 1.0), p(2.0, 1.0), p(3.0, 1.0), 1.0, 0.01);
        assert_eq!(g, Point2D::ZERO);
    }

    #[test]
    fn test_curvature_reversal_nan_is_suppressed() {
        // 180 degree reversal: sqrt(1 - cos^2) = 0 -> infinite derivative
        let g = curvature_term(p(0.0, 1.0), p(4.0, 1.0), p(2.0, 1.0), 1.0, 0.01);
        assert!(!g.is_nan());
    }

    #[test]
    fn test_terms_wrap_functions() {
        let smooth = SmoothnessTerm::new(0.3);
        let curve = CurvatureTerm::new(0.4, 0.1);
        let (a, b, c) = (p(0.0, 0.0), p(5.0, 0.0), p(10.0, 5.0));

        assert_eq!(smooth.name(), "smoothness");
        assert_eq!(smooth.weight(), 0.3);
        assert_eq!(smooth.gradient(a, b, c), smoothness_term(a, b, c, 0.3));

        assert_eq!(curve.name(), "curvature");
        assert_eq!(curve.kappa_max(), 0.1);
        assert_eq!(curve.gradient(a, b, c), curvature_term(a, b, c, 0.4, 0.1));
    }
}
