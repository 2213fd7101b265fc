use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MAX_LEVEL};

/// A single grayscale image frame.
/// Pixel values are f32 in [0.0, 1.0].
#[derive(Clone, Debug)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    /// Build a frame from 8-bit intensity levels.
    pub fn from_levels(levels: &Array2<u8>) -> Self {
        Self::new(levels.mapv(|v| v as f32 / MAX_LEVEL as f32), 8)
    }

    /// Build a frame from a binary mask (true = 1.0).
    pub fn from_mask(mask: &Array2<bool>) -> Self {
        Self::new(mask.mapv(|v| if v { 1.0 } else { 0.0 }), 8)
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Quantize to 8-bit levels (rounded).
    pub fn to_levels(&self) -> Array2<u8> {
        self.data.mapv(to_level)
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Frame {
        Frame::new(self.data.t().to_owned(), self.original_bit_depth)
    }
}

/// Quantize a [0, 1] intensity to an 8-bit level.
pub fn to_level(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * MAX_LEVEL as f32).round() as u8
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    pub fn width(&self) -> usize {
        self.red.width()
    }

    pub fn height(&self) -> usize {
        self.red.height()
    }

    /// Gray conversion with BT.601 weights.
    pub fn luminance(&self) -> Frame {
        let (h, w) = self.red.data.dim();
        let mut data = Array2::<f32>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                data[[row, col]] = LUMINANCE_R * self.red.data[[row, col]]
                    + LUMINANCE_G * self.green.data[[row, col]]
                    + LUMINANCE_B * self.blue.data[[row, col]];
            }
        }

        Frame::new(data, self.red.original_bit_depth)
    }
}
