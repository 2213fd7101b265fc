//! Small geometric and intensity queries on contours.

use imageproc::drawing::BresenhamLineIter;

use crate::frame::{to_level, Frame};

use super::geometry::{get_centroid, point_polygon_test, PointLocation};
use super::{Contour, Point};

/// Whether any point of `query` touches `reference`.
///
/// With `edges_only` a point must lie exactly on the reference boundary;
/// otherwise lying inside counts as well.
pub fn contour_intersect(reference: &Contour, query: &Contour, edges_only: bool) -> bool {
    query.points().iter().any(|&p| {
        match point_polygon_test(reference.points(), p) {
            PointLocation::OnEdge => true,
            PointLocation::Inside => !edges_only,
            PointLocation::Outside => false,
        }
    })
}

/// Pixels of the 8-connected digital line from `from` to `to`, both included.
pub fn line_pixels(from: Point, to: Point) -> Vec<Point> {
    let mut pixels: Vec<Point> =
        BresenhamLineIter::new((from.x as f32, from.y as f32), (to.x as f32, to.y as f32))
            .map(|(x, y)| Point::new(x, y))
            .collect();
    // The iterator walks leftmost (or topmost) endpoint first.
    if pixels.first() != Some(&from) {
        pixels.reverse();
    }
    pixels
}

/// Darkest pixel on the line between two points.
///
/// Returns the first pixel of minimum 8-bit intensity, or `None` when every
/// pixel on the line inside the frame is at full white.
pub fn find_darkest_point(frame: &Frame, from: Point, to: Point) -> Option<Point> {
    let mut darkest = None;
    let mut min_level = u8::MAX;

    for p in line_pixels(from, to) {
        let Some(v) = pixel(frame, p) else {
            continue;
        };
        let level = to_level(v);
        if level < min_level {
            min_level = level;
            darkest = Some(p);
        }
    }

    darkest
}

/// Split a contour at the point nearest to `split_point`.
///
/// The first part holds the points before the nearest one, the second part
/// starts with it.
pub fn split_contour_at_point(contour: &Contour, split_point: Point) -> (Contour, Contour) {
    let nearest = contour
        .points()
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| {
            let dx = (p.x - split_point.x) as i64;
            let dy = (p.y - split_point.y) as i64;
            dx * dx + dy * dy
        })
        .map_or(0, |(i, _)| i);

    let (head, tail) = contour.points().split_at(nearest);
    (
        Contour::new(head.to_vec(), contour.kind()),
        Contour::new(tail.to_vec(), contour.kind()),
    )
}

/// Whether any boundary pixel is darker than the pixel at the centroid,
/// i.e. intensity drops from the inside towards the border.
pub fn check_gradient(frame: &Frame, contour: &Contour) -> bool {
    let Some(center) = get_centroid(contour).and_then(|c| pixel(frame, c)) else {
        return false;
    };

    contour
        .points()
        .iter()
        .filter_map(|&p| pixel(frame, p))
        .any(|v| v < center)
}

fn pixel(frame: &Frame, p: Point) -> Option<f32> {
    if p.x < 0 || p.y < 0 {
        return None;
    }
    frame.data.get([p.y as usize, p.x as usize]).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_line_pixels_diagonal() {
        let px = line_pixels(Point::new(0, 0), Point::new(3, 3));
        assert_eq!(px.len(), 4);
        assert_eq!(px[3], Point::new(3, 3));
    }

    #[test]
    fn test_line_pixels_start_at_from() {
        let px = line_pixels(Point::new(5, 2), Point::new(0, 0));
        assert_eq!(px.len(), 6);
        assert_eq!(px[0], Point::new(5, 2));
        assert_eq!(px[5], Point::new(0, 0));
        assert!(px.windows(2).all(|w| (w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1));
    }

    #[test]
    fn test_find_darkest_point_all_white() {
        let frame = Frame::new(Array2::from_elem((5, 5), 1.0), 8);
        assert_eq!(
            find_darkest_point(&frame, Point::new(0, 0), Point::new(4, 4)),
            None
        );
    }
}
