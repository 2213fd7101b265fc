use imageproc::contours::BorderType;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::io::image_io::mask_to_gray_image;

use super::{BorderKind, Contour, ContourSet, Hierarchy, Point};

/// Which borders to keep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetrievalMode {
    /// Every outer and hole border, with full nesting.
    #[default]
    Tree,
    /// Only top-level outer borders.
    External,
}

/// How border pixels are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainApproximation {
    /// Every border pixel.
    None,
    /// Horizontal, vertical and diagonal runs collapse to their end points.
    #[default]
    Simple,
}

/// Trace region borders of a binary mask (Suzuki–Abe border following).
///
/// Pixels outside the mask count as background.
pub fn find_contours(
    mask: &Array2<bool>,
    mode: RetrievalMode,
    approximation: ChainApproximation,
) -> ContourSet {
    let img = mask_to_gray_image(mask);
    let raw = imageproc::contours::find_contours::<i32>(&img);

    let keep: Vec<bool> = raw
        .iter()
        .map(|c| match mode {
            RetrievalMode::Tree => true,
            RetrievalMode::External => c.parent.is_none(),
        })
        .collect();

    // Position of each kept contour in the output list.
    let mut new_index = vec![None; raw.len()];
    let mut next = 0;
    for (i, &k) in keep.iter().enumerate() {
        if k {
            new_index[i] = Some(next);
            next += 1;
        }
    }

    let mut contours = Vec::with_capacity(next);
    let mut parents = Vec::with_capacity(next);
    for (i, c) in raw.into_iter().enumerate() {
        if !keep[i] {
            continue;
        }
        let points: Vec<Point> = c.points.iter().map(|p| Point::new(p.x, p.y)).collect();
        let points = match approximation {
            ChainApproximation::None => points,
            ChainApproximation::Simple => compress_runs(&points),
        };
        let kind = match c.border_type {
            BorderType::Outer => BorderKind::Outer,
            BorderType::Hole => BorderKind::Hole,
        };
        contours.push(Contour::new(points, kind));
        parents.push(c.parent.and_then(|p| new_index[p]));
    }

    ContourSet {
        contours,
        hierarchy: Hierarchy::from_parents(&parents),
    }
}

/// Drop every point whose incoming and outgoing steps point the same way.
fn compress_runs(points: &[Point]) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point, b: Point| ((b.x - a.x).signum(), (b.y - a.y).signum());

    let kept: Vec<Point> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            step(prev, cur) != step(cur, next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points[..1].to_vec()
    } else {
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compress_runs_keeps_square_corners() {
        let mut pts = Vec::new();
        for x in 0..4 {
            pts.push(Point::new(x, 0));
        }
        for y in 0..4 {
            pts.push(Point::new(4, y));
        }
        for x in (1..=4).rev() {
            pts.push(Point::new(x, 4));
        }
        for y in (1..=4).rev() {
            pts.push(Point::new(0, y));
        }
        let compressed = compress_runs(&pts);
        assert_eq!(
            compressed,
            vec![
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(4, 4),
                Point::new(0, 4)
            ]
        );
    }

    #[test]
    fn test_compress_runs_short_input_untouched() {
        let pts = vec![Point::new(1, 1), Point::new(2, 1)];
        assert_eq!(compress_runs(&pts), pts);
    }
}
