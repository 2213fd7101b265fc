use ndarray::{Array2, Axis};
use rayon::prelude::*;

use crate::frame::Frame;

/// Minimum pixel count (h*w) to justify row-level parallelism.
const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Gaussian blur with a square `ksize × ksize` kernel, separable.
///
/// A non-positive `sigma` is derived from the kernel size as
/// `0.3·((ksize − 1)·0.5 − 1) + 0.8`. Borders reflect without repeating the
/// edge pixel.
pub fn gaussian_blur(frame: &Frame, ksize: usize, sigma: f32) -> Frame {
    let kernel = make_gaussian_kernel(ksize, sigma);
    let row_pass = convolve_axis(&frame.data, &kernel, Axis(1));
    let blurred = convolve_axis(&row_pass, &kernel, Axis(0));
    Frame::new(blurred, frame.original_bit_depth)
}

fn make_gaussian_kernel(ksize: usize, sigma: f32) -> Vec<f32> {
    let ksize = ksize.max(1) | 1;
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let radius = (ksize / 2) as f32;
    let s2 = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..ksize)
        .map(|i| {
            let x = i as f32 - radius;
            (-x * x / s2).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Reflect an out-of-range index back into `0..len` (…2 1 | 0 1 2 … n−1 | n−2…).
fn reflect_101(i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let n = len as isize;
    let period = 2 * (n - 1);
    let m = i.rem_euclid(period);
    (if m < n { m } else { period - m }) as usize
}

fn convolve_axis(data: &Array2<f32>, kernel: &[f32], axis: Axis) -> Array2<f32> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }
    let radius = (kernel.len() / 2) as isize;

    let sample = |row: usize, col: usize| -> f32 {
        kernel
            .iter()
            .enumerate()
            .map(|(ki, &kv)| {
                let offset = ki as isize - radius;
                let v = if axis == Axis(1) {
                    data[[row, reflect_101(col as isize + offset, w)]]
                } else {
                    data[[reflect_101(row as isize + offset, h), col]]
                };
                v * kv
            })
            .sum()
    };

    if h * w >= PARALLEL_PIXEL_THRESHOLD {
        let rows: Vec<Vec<f32>> = (0..h)
            .into_par_iter()
            .map(|row| (0..w).map(|col| sample(row, col)).collect())
            .collect();

        let mut result = Array2::<f32>::zeros((h, w));
        for (row, row_data) in rows.into_iter().enumerate() {
            for (col, val) in row_data.into_iter().enumerate() {
                result[[row, col]] = val;
            }
        }
        result
    } else {
        Array2::from_shape_fn((h, w), |(row, col)| sample(row, col))
    }
}
