use image::{GrayImage, Luma};
use imageproc::distance_transform::euclidean_squared_distance_transform;
use ndarray::Array2;

/// Exact Euclidean distance from every foreground pixel to the nearest
/// background pixel; background pixels are 0.
///
/// Pixels outside the mask do not count as background, so a mask with no
/// background at all yields infinity everywhere.
pub fn distance_transform(mask: &Array2<bool>) -> Array2<f64> {
    let (h, w) = mask.dim();
    // imageproc measures distance to the nearest non-zero pixel, so the
    // background is the lit side here.
    let background = GrayImage::from_fn(w as u32, h as u32, |x, y| {
        if mask[[y as usize, x as usize]] {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });
    let squared = euclidean_squared_distance_transform(&background);
    Array2::from_shape_fn((h, w), |(row, col)| {
        squared.get_pixel(col as u32, row as u32).0[0].sqrt()
    })
}

/// Min-max normalize to [0, 255] and truncate to 8-bit levels.
///
/// Infinite entries (no background anywhere) map to 255; a constant map
/// maps to 0.
pub fn normalize_to_levels(values: &Array2<f64>) -> Array2<u8> {
    let finite = values.iter().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;

    values.mapv(|v| {
        if !v.is_finite() {
            255
        } else if range <= 0.0 {
            0
        } else {
            ((v - min) / range * 255.0) as u8
        }
    })
}
