//! Ellipse fitting and plausibility checks.
//!
//! Implements:
//! - Direct least-squares conic fit (Fitzgibbon et al., "Direct Least Square Fitting of Ellipses", 1999).
//! - Conversion from general conic coefficients to geometric ellipse parameters.
//! - Area/perimeter agreement between a fitted ellipse and the contour it came from.

mod conic;
mod eigen;
mod fit;
mod validate;

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub use conic::{conic_to_ellipse, ConicCoeffs};
pub use fit::{fit_conic_direct, fit_ellipse_direct};
pub use validate::{plausibility, Plausibility};

/// Best-fit ellipse of a point set.
///
/// Axes are full lengths with `major_axis >= minor_axis`. `angle` is the
/// direction of the major axis in degrees, measured from +x towards +y
/// (image rows grow downward), in [0, 180).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EllipseFit {
    pub center_x: f64,
    pub center_y: f64,
    pub major_axis: f64,
    pub minor_axis: f64,
    pub angle: f64,
}

impl EllipseFit {
    /// Enclosed area, π·a·b with semi-axes a and b.
    pub fn area(&self) -> f64 {
        PI * (self.major_axis / 2.0) * (self.minor_axis / 2.0)
    }

    /// Perimeter approximation 2π·√((a² + b²) / 2).
    pub fn perimeter(&self) -> f64 {
        let a = self.major_axis / 2.0;
        let b = self.minor_axis / 2.0;
        2.0 * PI * ((a * a + b * b) / 2.0).sqrt()
    }

    /// Product of the full axes. Only meaningful for ordering.
    pub fn ranking_key(&self) -> f64 {
        self.major_axis * self.minor_axis
    }

    /// `(center_x, center_y, major, minor, angle)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.center_x,
            self.center_y,
            self.major_axis,
            self.minor_axis,
            self.angle,
        )
    }

    /// The same ellipse with its center moved by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..*self
        }
    }

    /// `n` points evenly spaced in the ellipse parameter.
    pub fn sample_points(&self, n: usize) -> Vec<[f64; 2]> {
        let theta = self.angle.to_radians();
        let (sin_a, cos_a) = theta.sin_cos();
        let a = self.major_axis / 2.0;
        let b = self.minor_axis / 2.0;
        (0..n)
            .map(|i| {
                let t = 2.0 * PI * (i as f64) / (n as f64);
                let px = a * t.cos();
                let py = b * t.sin();
                [
                    self.center_x + cos_a * px - sin_a * py,
                    self.center_y + sin_a * px + cos_a * py,
                ]
            })
            .collect()
    }
}
