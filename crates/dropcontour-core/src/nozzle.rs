use imageproc::geometry::min_area_rect;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contour::{find_contours, ChainApproximation, Contour, Point, RetrievalMode};

/// Minimum-area bounding rectangle of one outer contour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NozzleRect {
    /// Corners in drawing order.
    pub corners: [Point; 4],
    /// Length of the side from corner 0 to corner 1.
    pub width: f64,
    /// Length of the side from corner 1 to corner 2.
    pub height: f64,
}

impl NozzleRect {
    /// The shorter side, i.e. the nozzle diameter for an upright nozzle.
    pub fn diameter(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// Enclose every external contour of an edge mask in a rotated rectangle.
pub fn measure_nozzle_diameter(edges: &Array2<bool>) -> Vec<NozzleRect> {
    let set = find_contours(edges, RetrievalMode::External, ChainApproximation::Simple);
    set.contours
        .iter()
        .filter(|c| !c.is_empty())
        .map(|contour| {
            let rect = enclosing_rect(contour);
            let flat: Vec<i32> = rect.corners.iter().flat_map(|p| [p.x, p.y]).collect();
            info!(corners = ?flat, width = rect.width, height = rect.height, "Rectangle found");
            rect
        })
        .collect()
}

fn enclosing_rect(contour: &Contour) -> NozzleRect {
    let corners = if contour.area() > 0.0 {
        let pts: Vec<imageproc::point::Point<i32>> = contour
            .points()
            .iter()
            .map(|p| imageproc::point::Point::new(p.x, p.y))
            .collect();
        min_area_rect(&pts).map(|p| Point::new(p.x, p.y))
    } else {
        // Collinear points: fall back to the axis-aligned box.
        let xs = contour.points().iter().map(|p| p.x);
        let ys = contour.points().iter().map(|p| p.y);
        let (x0, x1) = (xs.clone().min().unwrap_or(0), xs.max().unwrap_or(0));
        let (y0, y1) = (ys.clone().min().unwrap_or(0), ys.max().unwrap_or(0));
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    };

    NozzleRect {
        corners,
        width: distance(corners[0], corners[1]),
        height: distance(corners[1], corners[2]),
    }
}

fn distance(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upright_rectangle() {
        let mask = Array2::from_shape_fn((40, 40), |(r, c)| (5..35).contains(&r) && (10..20).contains(&c));
        let rects = measure_nozzle_diameter(&mask);
        assert_eq!(rects.len(), 1);
        let rect = &rects[0];
        assert!((rect.diameter() - 9.0).abs() < 1e-9);
        assert!((rect.width.max(rect.height) - 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_mask() {
        assert!(measure_nozzle_diameter(&Array2::from_elem((8, 8), false)).is_empty());
    }
}
