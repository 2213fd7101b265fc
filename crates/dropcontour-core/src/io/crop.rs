use ndarray::s;
use serde::{Deserialize, Serialize};

use crate::error::{DropletError, Result};
use crate::frame::Frame;

/// A rectangle in image coordinates for cropping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CropRect {
    /// Build from half-open row and column ranges, `(start, end)`.
    pub fn from_ranges(rows: (usize, usize), cols: (usize, usize)) -> Self {
        Self {
            x: cols.0,
            y: rows.0,
            width: cols.1.saturating_sub(cols.0),
            height: rows.1.saturating_sub(rows.0),
        }
    }

    /// Validate against source dimensions.
    ///
    /// Like array slicing, a rectangle reaching past the right or bottom edge
    /// is clipped to the image. A rectangle that ends up empty is an error.
    pub fn validated(&self, src_w: usize, src_h: usize) -> Result<CropRect> {
        if self.width == 0 || self.height == 0 {
            return Err(DropletError::InvalidCrop(
                "Crop width and height must be > 0".into(),
            ));
        }

        if self.x >= src_w || self.y >= src_h {
            return Err(DropletError::InvalidCrop(format!(
                "Crop origin ({},{}) lies outside source dimensions ({src_w}x{src_h})",
                self.x, self.y
            )));
        }

        Ok(CropRect {
            x: self.x,
            y: self.y,
            width: self.width.min(src_w - self.x),
            height: self.height.min(src_h - self.y),
        })
    }
}

/// Crop a frame to the given rectangle (clipped to the frame).
pub fn crop_frame(frame: &Frame, rect: &CropRect) -> Result<Frame> {
    let r = rect.validated(frame.width(), frame.height())?;
    let data = frame
        .data
        .slice(s![r.y..r.y + r.height, r.x..r.x + r.width])
        .to_owned();
    Ok(Frame::new(data, frame.original_bit_depth))
}

/// Remove the first `x_offset` columns and `y_offset` rows (the nozzle side).
pub fn crop_and_remove_nozzle(frame: &Frame, x_offset: usize, y_offset: usize) -> Result<Frame> {
    let rect = CropRect {
        x: x_offset,
        y: y_offset,
        width: frame.width().saturating_sub(x_offset),
        height: frame.height().saturating_sub(y_offset),
    };
    crop_frame(frame, &rect)
}
