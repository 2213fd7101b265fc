#![allow(dead_code)]

use ndarray::Array2;

/// Whether `(col, row)` lies inside an ellipse with full axes
/// `major × minor`, rotated by `angle_deg` from +x.
pub fn inside_ellipse(
    col: f64,
    row: f64,
    center: (f64, f64),
    major: f64,
    minor: f64,
    angle_deg: f64,
) -> bool {
    let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
    let dx = col - center.0;
    let dy = row - center.1;
    let u = dx * cos_a + dy * sin_a;
    let v = -dx * sin_a + dy * cos_a;
    let a = major / 2.0;
    let b = minor / 2.0;
    (u * u) / (a * a) + (v * v) / (b * b) <= 1.0
}

/// Filled ellipse on a `(h, w)` canvas.
pub fn ellipse_mask(
    shape: (usize, usize),
    center: (f64, f64),
    major: f64,
    minor: f64,
    angle_deg: f64,
) -> Array2<bool> {
    Array2::from_shape_fn(shape, |(r, c)| {
        inside_ellipse(c as f64, r as f64, center, major, minor, angle_deg)
    })
}

/// Elliptical band of the given thickness: the drawn outline of a droplet.
pub fn ellipse_ring_mask(
    shape: (usize, usize),
    center: (f64, f64),
    major: f64,
    minor: f64,
    angle_deg: f64,
    thickness: f64,
) -> Array2<bool> {
    let inner_major = major - 2.0 * thickness;
    let inner_minor = minor - 2.0 * thickness;
    Array2::from_shape_fn(shape, |(r, c)| {
        let (x, y) = (c as f64, r as f64);
        inside_ellipse(x, y, center, major, minor, angle_deg)
            && !inside_ellipse(x, y, center, inner_major, inner_minor, angle_deg)
    })
}

/// Set a disc of `radius` with a background hole of `hole_radius` at its center.
pub fn paint_disc_with_hole(
    mask: &mut Array2<bool>,
    center: (f64, f64),
    radius: f64,
    hole_radius: f64,
) {
    for ((r, c), v) in mask.indexed_iter_mut() {
        let d2 = (c as f64 - center.0).powi(2) + (r as f64 - center.1).powi(2);
        if d2 <= radius * radius && d2 > hole_radius * hole_radius {
            *v = true;
        }
    }
}

/// Axis-aligned foreground rectangle over half-open row and column ranges.
pub fn bar_mask(
    shape: (usize, usize),
    rows: std::ops::Range<usize>,
    cols: std::ops::Range<usize>,
) -> Array2<bool> {
    Array2::from_shape_fn(shape, |(r, c)| rows.contains(&r) && cols.contains(&c))
}

/// Angular distance between two line orientations, in degrees.
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(180.0);
    d.min(180.0 - d)
}
