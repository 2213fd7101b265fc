use nalgebra::Matrix3;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::EllipseFit;

/// General conic: A x² + B xy + C y² + D x + E y + F = 0.
/// Stored as [A, B, C, D, E, F].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConicCoeffs(pub [f64; 6]);

impl ConicCoeffs {
    /// Discriminant test B² − 4AC < 0.
    pub fn is_ellipse(&self) -> bool {
        let [a, b, c, ..] = self.0;
        b * b - 4.0 * a * c < 0.0
    }

    pub fn to_ellipse(self) -> Option<EllipseFit> {
        conic_to_ellipse(&self)
    }
}

/// Convert general conic coefficients to an [`EllipseFit`].
///
/// Returns `None` if the conic is not a proper, real ellipse.
pub fn conic_to_ellipse(c: &ConicCoeffs) -> Option<EllipseFit> {
    let [a, b, c_coeff, d, e, f] = c.0;

    let disc = b * b - 4.0 * a * c_coeff;
    if disc >= 0.0 {
        return None;
    }

    let m = Matrix3::new(
        a,
        b / 2.0,
        d / 2.0,
        b / 2.0,
        c_coeff,
        e / 2.0,
        d / 2.0,
        e / 2.0,
        f,
    );
    if m.determinant().abs() < 1e-15 {
        return None;
    }

    // Center solves 2A·cx + B·cy + D = 0 and B·cx + 2C·cy + E = 0.
    let denom = -disc;
    let cx = (b * e - 2.0 * c_coeff * d) / denom;
    let cy = (b * d - 2.0 * a * e) / denom;

    let angle = if (a - c_coeff).abs() < 1e-15 {
        if b > 0.0 {
            FRAC_PI_4
        } else if b < 0.0 {
            -FRAC_PI_4
        } else {
            0.0
        }
    } else {
        0.5 * b.atan2(a - c_coeff)
    };

    // Eigenvalues of the quadratic part give the semi-axes.
    let sum = a + c_coeff;
    let diff = ((a - c_coeff).powi(2) + b * b).sqrt();
    let lambda1 = (sum + diff) / 2.0;
    let lambda2 = (sum - diff) / 2.0;

    let f_center = a * cx * cx + b * cx * cy + c_coeff * cy * cy + d * cx + e * cy + f;
    if f_center.abs() < 1e-15 {
        return None;
    }

    let a_sq = -f_center / lambda1;
    let b_sq = -f_center / lambda2;
    if a_sq <= 0.0 || b_sq <= 0.0 {
        return None;
    }

    let (semi_a, semi_b) = (a_sq.sqrt(), b_sq.sqrt());
    let (semi_major, semi_minor, angle) = if semi_a >= semi_b {
        (semi_a, semi_b, angle)
    } else {
        (semi_b, semi_a, angle + FRAC_PI_2)
    };

    let fit = EllipseFit {
        center_x: cx,
        center_y: cy,
        major_axis: 2.0 * semi_major,
        minor_axis: 2.0 * semi_minor,
        angle: normalize_angle(angle).to_degrees(),
    };

    let finite = [fit.center_x, fit.center_y, fit.major_axis, fit.minor_axis, fit.angle]
        .iter()
        .all(|v| v.is_finite());
    finite.then_some(fit)
}

/// Fold an angle in radians into [0, π).
fn normalize_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(PI);
    // rem_euclid can round up to exactly π for tiny negative inputs.
    if folded >= PI {
        0.0
    } else {
        folded
    }
}
