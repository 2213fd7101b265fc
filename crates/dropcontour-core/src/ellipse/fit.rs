use nalgebra::{DMatrix, Matrix3, Vector6};

use crate::consts::MIN_FIT_POINTS;

use super::conic::ConicCoeffs;
use super::eigen::ellipse_eigenvector;
use super::EllipseFit;

/// Fit a conic constrained to be an ellipse to a set of 2D points using the
/// direct least-squares method of Fitzgibbon et al. (1999).
///
/// Needs at least five points in general position.
pub fn fit_conic_direct(points: &[[f64; 2]]) -> Option<ConicCoeffs> {
    let n = points.len();
    if n < MIN_FIT_POINTS {
        return None;
    }

    let (mean_x, mean_y, scale) = normalization_params(points);

    // Design matrix rows: [x², xy, y², x, y, 1] in normalized coordinates.
    let mut d = DMatrix::<f64>::zeros(n, 6);
    for (i, &[px, py]) in points.iter().enumerate() {
        let x = (px - mean_x) * scale;
        let y = (py - mean_y) * scale;
        d[(i, 0)] = x * x;
        d[(i, 1)] = x * y;
        d[(i, 2)] = y * y;
        d[(i, 3)] = x;
        d[(i, 4)] = y;
        d[(i, 5)] = 1.0;
    }

    let s = d.transpose() * &d;
    let s11 = s.fixed_view::<3, 3>(0, 0).into_owned();
    let s12 = s.fixed_view::<3, 3>(0, 3).into_owned();
    let s22 = s.fixed_view::<3, 3>(3, 3).into_owned();

    // Constraint 4AC − B² = 1 written as aᵀ C1 a.
    let c1 = Matrix3::new(0.0, 0.0, 2.0, 0.0, -1.0, 0.0, 2.0, 0.0, 0.0);

    let s22_inv = s22.try_inverse()?;
    let m = s11 - s12 * s22_inv * s12.transpose();
    let system = c1.try_inverse()? * m;

    let a1 = ellipse_eigenvector(&system)?;
    let a2 = -s22_inv * s12.transpose() * a1;

    let normalized = Vector6::new(a1[0], a1[1], a1[2], a2[0], a2[1], a2[2]);
    let conic = ConicCoeffs(denormalize_conic(&normalized, mean_x, mean_y, scale));

    conic.is_ellipse().then_some(conic)
}

/// Fit an ellipse and return its geometric parameters.
pub fn fit_ellipse_direct(points: &[[f64; 2]]) -> Option<EllipseFit> {
    fit_conic_direct(points)?.to_ellipse()
}

/// Centroid and the scale that brings the mean distance from it to √2.
fn normalization_params(points: &[[f64; 2]]) -> (f64, f64, f64) {
    let n = points.len() as f64;
    let mean_x: f64 = points.iter().map(|p| p[0]).sum::<f64>() / n;
    let mean_y: f64 = points.iter().map(|p| p[1]).sum::<f64>() / n;

    let mean_dist: f64 = points
        .iter()
        .map(|p| ((p[0] - mean_x).powi(2) + (p[1] - mean_y).powi(2)).sqrt())
        .sum::<f64>()
        / n;

    let scale = if mean_dist > 1e-15 {
        std::f64::consts::SQRT_2 / mean_dist
    } else {
        1.0
    };

    (mean_x, mean_y, scale)
}

/// Map conic coefficients from normalized coordinates x' = s(x − mx),
/// y' = s(y − my) back to pixel coordinates.
fn denormalize_conic(c: &Vector6<f64>, mx: f64, my: f64, s: f64) -> [f64; 6] {
    let [a_, b_, c_, d_, e_, f_] = [c[0], c[1], c[2], c[3], c[4], c[5]];
    let s2 = s * s;

    let a = a_ * s2;
    let b = b_ * s2;
    let c = c_ * s2;
    let d = -2.0 * a_ * s2 * mx - b_ * s2 * my + d_ * s;
    let e = -b_ * s2 * mx - 2.0 * c_ * s2 * my + e_ * s;
    let f =
        a_ * s2 * mx * mx + b_ * s2 * mx * my + c_ * s2 * my * my - d_ * s * mx - e_ * s * my + f_;

    [a, b, c, d, e, f]
}
