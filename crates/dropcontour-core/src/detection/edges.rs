use imageproc::edges::canny;
use ndarray::Array2;
use tracing::debug;

use crate::consts::{CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, EDGE_BLUR_SIGMA};
use crate::filters::gaussian_blur;
use crate::frame::Frame;
use crate::io::image_io::{frame_to_gray_image, gray_image_to_mask};

/// Edge mask of droplet boundaries: 5x5 Gaussian blur, then Canny hysteresis.
pub fn detect_droplet_boundary(frame: &Frame) -> Array2<bool> {
    let blurred = gaussian_blur(frame, 5, EDGE_BLUR_SIGMA);
    let edges = canny(
        &frame_to_gray_image(&blurred),
        CANNY_LOW_THRESHOLD,
        CANNY_HIGH_THRESHOLD,
    );
    let mask = gray_image_to_mask(&edges);
    debug!(
        edge_pixels = mask.iter().filter(|&&v| v).count(),
        "Droplet boundary edges detected"
    );
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_frame_has_no_edges() {
        let frame = Frame::new(Array2::from_elem((20, 20), 0.5), 8);
        let mask = detect_droplet_boundary(&frame);
        assert!(mask.iter().all(|&v| !v));
    }

    #[test]
    fn test_step_produces_edges() {
        let data = Array2::from_shape_fn((30, 30), |(_, c)| if c < 15 { 0.0 } else { 1.0 });
        let mask = detect_droplet_boundary(&Frame::new(data, 8));
        assert!(mask.iter().any(|&v| v));
        assert!(!mask[[15, 2]]);
    }
}
