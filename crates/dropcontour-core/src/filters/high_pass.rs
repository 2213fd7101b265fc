use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::consts::EPSILON;
use crate::frame::Frame;

/// Suppress low spatial frequencies.
///
/// The centered spectrum is zeroed inside a disc of `radius` around DC; the
/// magnitude of the inverse transform is min-max normalized to [0, 1] and
/// quantized to 8-bit steps.
pub fn high_pass_filter(frame: &Frame, radius: usize) -> Frame {
    let (h, w) = frame.data.dim();
    if h == 0 || w == 0 {
        return frame.clone();
    }

    let mut spectrum = fft2d(&frame.data);

    // DC sits at (0, 0) in the unshifted spectrum; a centered disc of radius r
    // maps to the wrap-around neighbourhood of each corner.
    let (crow, ccol) = (h / 2, w / 2);
    let r2 = (radius * radius) as isize;
    for row in 0..h {
        // Position of this row after an fftshift.
        let shifted_row = (row + crow) % h;
        let dy = shifted_row as isize - crow as isize;
        for col in 0..w {
            let shifted_col = (col + ccol) % w;
            let dx = shifted_col as isize - ccol as isize;
            if dy * dy + dx * dx <= r2 {
                spectrum[[row, col]] = Complex::new(0.0, 0.0);
            }
        }
    }

    let magnitude = ifft2d_magnitude(&spectrum);

    let (min, max) = magnitude
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    let data = magnitude.mapv(|v| {
        if range <= EPSILON {
            0.0
        } else {
            (((v - min) / range * 255.0).floor() / 255.0) as f32
        }
    });

    Frame::new(data, 8)
}

/// 2D FFT: row-wise FFT, then column-wise FFT.
fn fft2d(data: &Array2<f32>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    let mut result = data.mapv(|v| Complex::new(v as f64, 0.0));

    for mut row in result.rows_mut() {
        let mut buf: Vec<Complex<f64>> = row.to_vec();
        fft_row.process(&mut buf);
        for (dst, src) in row.iter_mut().zip(buf) {
            *dst = src;
        }
    }

    for mut col in result.columns_mut() {
        let mut buf: Vec<Complex<f64>> = col.to_vec();
        fft_col.process(&mut buf);
        for (dst, src) in col.iter_mut().zip(buf) {
            *dst = src;
        }
    }

    result
}

/// Inverse 2D FFT, returning the magnitude of each (normalized) sample.
fn ifft2d_magnitude(data: &Array2<Complex<f64>>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    let mut work = data.clone();

    for mut col in work.columns_mut() {
        let mut buf: Vec<Complex<f64>> = col.to_vec();
        ifft_col.process(&mut buf);
        for (dst, src) in col.iter_mut().zip(buf) {
            *dst = src;
        }
    }

    for mut row in work.rows_mut() {
        let mut buf: Vec<Complex<f64>> = row.to_vec();
        ifft_row.process(&mut buf);
        for (dst, src) in row.iter_mut().zip(buf) {
            *dst = src;
        }
    }

    let scale = 1.0 / (h * w) as f64;
    work.mapv(|c| c.norm() * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_frame_has_no_high_frequencies() {
        let frame = Frame::new(Array2::from_elem((32, 32), 0.7), 8);
        let out = high_pass_filter(&frame, 10);
        assert!(out.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_edges_survive() {
        let data = Array2::from_shape_fn((32, 32), |(r, c)| {
            if (12..20).contains(&r) && (12..20).contains(&c) {
                1.0
            } else {
                0.0
            }
        });
        let frame = Frame::new(data, 8);
        let out = high_pass_filter(&frame, 4);
        let max = out.data.iter().cloned().fold(0.0f32, f32::max);
        assert!((max - 1.0).abs() < 1e-6);
    }
}
