use ndarray::Array2;

use crate::frame::{to_level, Frame};

/// Binarize a frame: a pixel is foreground when its 8-bit level is strictly
/// above `threshold`.
pub fn binarize(frame: &Frame, threshold: u8) -> Array2<bool> {
    frame.data.mapv(|v| to_level(v) > threshold)
}

/// Binarize 8-bit levels directly.
pub fn binarize_levels(levels: &Array2<u8>, threshold: u8) -> Array2<bool> {
    levels.mapv(|v| v > threshold)
}
