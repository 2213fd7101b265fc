use image::{GrayImage, Luma};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::consts::{DEFAULT_SPLIT_DILATE_KERNEL, DEFAULT_SPLIT_DISTANCE_THRESHOLD};
use crate::contour::{find_contours, ChainApproximation, Contour, Point, RetrievalMode};
use crate::detection::{binarize_levels, dilate, distance_transform, normalize_to_levels};
use crate::io::image_io::gray_image_to_mask;

/// Parameters for separating a merged contour into its cores.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Level of the 0..=255 normalized distance map a core pixel must exceed.
    pub distance_threshold: u8,
    /// Side of the square kernel used to grow cores back towards the border.
    pub dilate_kernel: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            distance_threshold: DEFAULT_SPLIT_DISTANCE_THRESHOLD,
            dilate_kernel: DEFAULT_SPLIT_DILATE_KERNEL,
        }
    }
}

/// Separate a contour enclosing several touching shapes.
///
/// The contour is rasterized filled into a `(height, width)` mask; pixels
/// far from the background by the normalized distance map form one core per
/// shape, and the dilated cores are traced as external contours.
pub fn split_contour(shape: (usize, usize), contour: &Contour, config: &SplitConfig) -> Vec<Contour> {
    let filled = fill_contour(shape, contour);
    if !filled.iter().any(|&v| v) {
        return Vec::new();
    }

    let distance = distance_transform(&filled);
    let levels = normalize_to_levels(&distance);
    let cores = binarize_levels(&levels, config.distance_threshold);
    let grown = dilate(&cores, config.dilate_kernel);

    let parts = find_contours(&grown, RetrievalMode::External, ChainApproximation::Simple).contours;
    trace!(points = contour.len(), parts = parts.len(), "Contour split");
    parts
}

/// Rasterize the region enclosed by a contour, border included.
pub fn fill_contour(shape: (usize, usize), contour: &Contour) -> Array2<bool> {
    let (h, w) = shape;
    let mut canvas = GrayImage::new(w as u32, h as u32);
    let white = Luma([255u8]);

    let mut poly: Vec<imageproc::point::Point<i32>> = contour
        .points()
        .iter()
        .map(|p| imageproc::point::Point::new(p.x, p.y))
        .collect();
    // The polygon filler rejects an explicitly closed ring.
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }

    if poly.len() >= 3 {
        draw_polygon_mut(&mut canvas, &poly, white);
    }
    draw_outline(&mut canvas, contour.points(), white);

    gray_image_to_mask(&canvas)
}

fn draw_outline(canvas: &mut GrayImage, points: &[Point], color: Luma<u8>) {
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        draw_line_segment_mut(canvas, (a.x as f32, a.y as f32), (b.x as f32, b.y as f32), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_includes_border() {
        let square = Contour::from_xy(&[(2, 2), (6, 2), (6, 6), (2, 6)]);
        let mask = fill_contour((10, 10), &square);
        assert_eq!(mask.iter().filter(|&&v| v).count(), 25);
        assert!(mask[[2, 2]] && mask[[6, 6]] && mask[[4, 4]]);
        assert!(!mask[[7, 4]]);
    }

    #[test]
    fn test_empty_contour_yields_nothing() {
        let empty = Contour::from_xy(&[]);
        assert!(split_contour((10, 10), &empty, &SplitConfig::default()).is_empty());
    }

    #[test]
    fn test_single_blob_stays_whole() {
        let square = Contour::from_xy(&[(5, 5), (34, 5), (34, 34), (5, 34)]);
        let parts = split_contour((40, 40), &square, &SplitConfig::default());
        assert_eq!(parts.len(), 1);
    }
}
