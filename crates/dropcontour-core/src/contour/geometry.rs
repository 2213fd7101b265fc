use super::{Contour, Point};

/// Spatial moments up to first order of a closed polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
}

/// Polygon moments via Green's theorem.
///
/// The sign follows the traversal direction; ratios such as the centroid are
/// independent of it.
pub fn moments(points: &[Point]) -> Moments {
    let n = points.len();
    let mut m = Moments::default();
    if n < 3 {
        return m;
    }

    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        let (x0, y0, x1, y1) = (p.x as f64, p.y as f64, q.x as f64, q.y as f64);
        let cross = x0 * y1 - x1 * y0;
        m.m00 += cross;
        m.m10 += (x0 + x1) * cross;
        m.m01 += (y0 + y1) * cross;
    }

    m.m00 /= 2.0;
    m.m10 /= 6.0;
    m.m01 /= 6.0;
    m
}

/// Shoelace area of a closed polygon, always non-negative.
pub fn contour_area(points: &[Point]) -> f64 {
    moments(points).m00.abs()
}

/// Length of the polyline through `points`; `closed` adds the segment from
/// the last point back to the first.
pub fn arc_length(points: &[Point], closed: bool) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    let segment = |a: &Point, b: &Point| {
        let dx = (b.x - a.x) as f64;
        let dy = (b.y - a.y) as f64;
        (dx * dx + dy * dy).sqrt()
    };

    let open: f64 = points.windows(2).map(|w| segment(&w[0], &w[1])).sum();
    if closed {
        open + segment(&points[points.len() - 1], &points[0])
    } else {
        open
    }
}

/// Area-weighted centroid, truncated to integer pixels.
///
/// A contour collapsed to a point or a line has zero area; its first point
/// is returned instead. `None` only for an empty contour.
pub fn get_centroid(contour: &Contour) -> Option<Point> {
    let first = *contour.points().first()?;
    let m = moments(contour.points());
    if m.m00 != 0.0 {
        Some(Point::new((m.m10 / m.m00) as i32, (m.m01 / m.m00) as i32))
    } else {
        Some(first)
    }
}

/// Where a point lies relative to a closed polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnEdge,
    Outside,
}

/// Locate `p` against the polygon `points` (even-odd rule, exact on edges).
pub fn point_polygon_test(points: &[Point], p: Point) -> PointLocation {
    let n = points.len();
    if n == 0 {
        return PointLocation::Outside;
    }
    if n == 1 {
        return if points[0] == p {
            PointLocation::OnEdge
        } else {
            PointLocation::Outside
        };
    }

    let mut inside = false;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];

        if on_segment(a, b, p) {
            return PointLocation::OnEdge;
        }

        if (a.y > p.y) != (b.y > p.y) {
            // x coordinate where the edge crosses the horizontal line through p
            let t = (p.y - a.y) as f64 / (b.y - a.y) as f64;
            let x_cross = a.x as f64 + t * (b.x - a.x) as f64;
            if (p.x as f64) < x_cross {
                inside = !inside;
            }
        }
    }

    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    let cross = (b.x - a.x) as i64 * (p.y - a.y) as i64 - (b.y - a.y) as i64 * (p.x - a.x) as i64;
    cross == 0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ]
    }

    #[test]
    fn test_square_area_and_length() {
        assert_relative_eq!(contour_area(&square()), 100.0);
        assert_relative_eq!(arc_length(&square(), true), 40.0);
        assert_relative_eq!(arc_length(&square(), false), 30.0);
    }

    #[test]
    fn test_area_ignores_orientation() {
        let mut pts = square();
        pts.reverse();
        assert_relative_eq!(contour_area(&pts), 100.0);
    }

    #[test]
    fn test_point_polygon_test() {
        let pts = square();
        assert_eq!(point_polygon_test(&pts, Point::new(5, 5)), PointLocation::Inside);
        assert_eq!(point_polygon_test(&pts, Point::new(10, 4)), PointLocation::OnEdge);
        assert_eq!(point_polygon_test(&pts, Point::new(0, 0)), PointLocation::OnEdge);
        assert_eq!(point_polygon_test(&pts, Point::new(11, 5)), PointLocation::Outside);
    }
}
