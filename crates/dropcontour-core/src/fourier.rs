//! Elliptic Fourier descriptors of closed contours (Kuhl & Giardina, 1982).

use std::f64::consts::PI;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::contour::Contour;

/// Harmonic coefficients of a closed contour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FourierDescriptors {
    /// Row `n − 1` holds `[a_n, b_n, c_n, d_n]` for harmonics `n = 1..=order`.
    pub coefficients: Array2<f64>,
    /// Mean x over the contour length.
    pub a0: f64,
    /// Mean y over the contour length.
    pub c0: f64,
}

/// Elliptic Fourier coefficients of a contour up to `order` harmonics.
///
/// The contour is closed by joining its last point to its first. Zero-length
/// steps are ignored. A contour without any extent has all-zero harmonics
/// and its first point (or the origin) as DC component.
pub fn contour_fourier_features(contour: &Contour, order: usize) -> FourierDescriptors {
    let mut coefficients = Array2::<f64>::zeros((order, 4));
    let points = contour.points();
    let Some(first) = points.first() else {
        return FourierDescriptors { coefficients, a0: 0.0, c0: 0.0 };
    };
    let (x_start, y_start) = (first.x as f64, first.y as f64);

    // Steps along the closed outline, with cumulative length at each end.
    let n = points.len();
    let mut steps: Vec<(f64, f64, f64)> = Vec::with_capacity(n);
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        let dt = (dx * dx + dy * dy).sqrt();
        if dt > 0.0 {
            steps.push((dx, dy, dt));
        }
    }

    let period: f64 = steps.iter().map(|s| s.2).sum();
    if period <= 0.0 {
        return FourierDescriptors { coefficients, a0: x_start, c0: y_start };
    }

    let mut t = Vec::with_capacity(steps.len() + 1);
    t.push(0.0);
    for s in &steps {
        t.push(t[t.len() - 1] + s.2);
    }

    for harmonic in 1..=order {
        let nf = harmonic as f64;
        let scale = period / (2.0 * nf * nf * PI * PI);
        let (mut a, mut b, mut c, mut d) = (0.0, 0.0, 0.0, 0.0);
        for (i, &(dx, dy, dt)) in steps.iter().enumerate() {
            let phi_prev = 2.0 * nf * PI * t[i] / period;
            let phi = 2.0 * nf * PI * t[i + 1] / period;
            let d_cos = phi.cos() - phi_prev.cos();
            let d_sin = phi.sin() - phi_prev.sin();
            a += dx / dt * d_cos;
            b += dx / dt * d_sin;
            c += dy / dt * d_cos;
            d += dy / dt * d_sin;
        }
        let row = harmonic - 1;
        coefficients[[row, 0]] = scale * a;
        coefficients[[row, 1]] = scale * b;
        coefficients[[row, 2]] = scale * c;
        coefficients[[row, 3]] = scale * d;
    }

    let (a0, c0) = dc_components(&steps, &t, period);
    FourierDescriptors {
        coefficients,
        a0: x_start + a0,
        c0: y_start + c0,
    }
}

/// Offset of the contour's length-weighted mean from its first point.
fn dc_components(steps: &[(f64, f64, f64)], t: &[f64], period: f64) -> (f64, f64) {
    let (mut sum_x, mut sum_y) = (0.0, 0.0);
    let (mut cum_x, mut cum_y) = (0.0, 0.0);
    for (i, &(dx, dy, dt)) in steps.iter().enumerate() {
        // On this step x(t) = xi + (dx/dt)·t, and likewise for y.
        let xi = cum_x - dx / dt * t[i];
        let delta = cum_y - dy / dt * t[i];
        let dt2 = t[i + 1] * t[i + 1] - t[i] * t[i];
        sum_x += dx / (2.0 * dt) * dt2 + xi * dt;
        sum_y += dy / (2.0 * dt) * dt2 + delta * dt;
        cum_x += dx;
        cum_y += dy;
    }
    (sum_x / period, sum_y / period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_square_dc_is_center() {
        let square = Contour::from_xy(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
        let fd = contour_fourier_features(&square, 4);
        assert_abs_diff_eq!(fd.a0, 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(fd.c0, 5.0, epsilon = 1e-9);
        assert_eq!(fd.coefficients.dim(), (4, 4));
    }

    #[test]
    fn test_single_point() {
        let fd = contour_fourier_features(&Contour::from_xy(&[(3, 4)]), 2);
        assert_eq!(fd.a0, 3.0);
        assert_eq!(fd.c0, 4.0);
        assert!(fd.coefficients.iter().all(|&v| v == 0.0));
    }
}
