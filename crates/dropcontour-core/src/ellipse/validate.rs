use serde::{Deserialize, Serialize};

use crate::contour::Contour;

use super::EllipseFit;

/// Agreement between a fitted ellipse and the contour it was fitted to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plausibility {
    /// Ellipse area over contour area.
    pub area_ratio: f64,
    /// Ellipse perimeter over contour perimeter (open polyline length).
    pub perimeter_ratio: f64,
}

impl Plausibility {
    /// Accept when either ratio is strictly within `tolerance` of 1.0.
    pub fn is_acceptable(&self, tolerance: f64) -> bool {
        (self.area_ratio - 1.0).abs() < tolerance || (self.perimeter_ratio - 1.0).abs() < tolerance
    }
}

/// Ratios of ellipse to contour area and perimeter.
///
/// `None` when any denominator or the ellipse area is not positive, so the
/// division is never attempted.
pub fn plausibility(ellipse: &EllipseFit, contour: &Contour) -> Option<Plausibility> {
    let ellipse_area = ellipse.area();
    let contour_area = contour.area();
    let contour_perimeter = contour.arc_length(false);

    if ellipse_area <= 0.0 || contour_area <= 0.0 || contour_perimeter <= 0.0 {
        return None;
    }

    Some(Plausibility {
        area_ratio: ellipse_area / contour_area,
        perimeter_ratio: ellipse.perimeter() / contour_perimeter,
    })
}
