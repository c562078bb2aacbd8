//! Path quality measures.

use crate::core::Waypoint;

/// Calculate total path length
pub fn path_length(path: &[Waypoint]) -> f32 {
    if path.len() < 2 {
        return 0.0;
    }

    path.windows(2)
        .map(|w| w[0].position().distance(&w[1].position()))
        .sum()
}

/// Discrete curvature at every interior point.
///
/// Turn angle between the incoming and outgoing edges divided by the
/// incoming edge length. Degenerate (zero-length) edges give 0.
pub fn discrete_curvatures(path: &[Waypoint]) -> Vec<f32> {
    path.windows(3)
        .map(|w| {
            let dxi = w[1].position() - w[0].position();
            let dxip1 = w[2].position() - w[1].position();
            let abs_dxi = dxi.length();
            let abs_dxip1 = dxip1.length();

            if abs_dxi > 0.0 && abs_dxip1 > 0.0 {
                let dphi = (dxi.dot(&dxip1) / (abs_dxi * abs_dxip1))
                    .clamp(-1.0, 1.0)
                    .acos();
                dphi / abs_dxi
            } else {
                0.0
            }
        })
        .collect()
}

/// Largest discrete curvature along the path (0 for paths under 3 points).
pub fn max_curvature(path: &[Waypoint]) -> f32 {
    discrete_curvatures(path).into_iter().fold(0.0, f32::max)
}

/// Sum of squared second differences, the quantity the smoothness term descends.
pub fn roughness(path: &[Waypoint]) -> f32 {
    path.windows(3)
        .map(|w| (w[2].position() - 2.0 * w[1].position() + w[0].position()).length_squared())
        .sum()
}
