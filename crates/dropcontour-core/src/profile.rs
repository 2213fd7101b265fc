use std::path::Path;

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_BOUNDARY_X_OFFSET, DEFAULT_BOUNDARY_Y_OFFSET, DEFAULT_PROFILE_THRESHOLD, EPSILON,
    MAX_LEVEL,
};
use crate::detection::binarize;
use crate::error::Result;
use crate::frame::Frame;
use crate::io::crop::crop_and_remove_nozzle;
use crate::io::image_io::{derived_path, load_image, save_mask_png};

/// Parameters of [`gradient_labeling`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub x_offset: usize,
    pub y_offset: usize,
    pub threshold: u8,
    pub save_binarized: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            x_offset: DEFAULT_BOUNDARY_X_OFFSET,
            y_offset: DEFAULT_BOUNDARY_Y_OFFSET,
            threshold: DEFAULT_PROFILE_THRESHOLD,
            save_binarized: false,
        }
    }
}

/// Foreground profiles along both axes, each scaled by its own maximum.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelProfiles {
    /// One value per column.
    pub sum_x: Vec<f64>,
    /// One value per row.
    pub sum_y: Vec<f64>,
    pub grad_x: Vec<f64>,
    pub grad_y: Vec<f64>,
}

/// Column sums and row sums of 8-bit levels.
pub fn calculate_pixel_sum(levels: &Array2<u8>) -> (Vec<f64>, Vec<f64>) {
    let as_f64 = levels.mapv(f64::from);
    (
        as_f64.sum_axis(Axis(0)).to_vec(),
        as_f64.sum_axis(Axis(1)).to_vec(),
    )
}

/// Central differences inside, one-sided differences at both ends.
pub fn calculate_pixel_grad(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    if n < 2 {
        return vec![0.0; n];
    }
    (0..n)
        .map(|i| match i {
            0 => values[1] - values[0],
            i if i == n - 1 => values[n - 1] - values[n - 2],
            i => (values[i + 1] - values[i - 1]) / 2.0,
        })
        .collect()
}

/// Profiles of a frame after nozzle removal and binarization.
pub fn pixel_profiles(frame: &Frame, config: &ProfileConfig) -> Result<PixelProfiles> {
    Ok(profiles_of_mask(&binarized(frame, config)?))
}

/// [`pixel_profiles`] of an image file.
pub fn gradient_labeling(path: &Path, config: &ProfileConfig) -> Result<PixelProfiles> {
    let mask = binarized(&load_image(path)?, config)?;
    if config.save_binarized {
        save_mask_png(&mask, &derived_path(path, "_edges.png"))?;
    }
    Ok(profiles_of_mask(&mask))
}

fn binarized(frame: &Frame, config: &ProfileConfig) -> Result<Array2<bool>> {
    let cropped = crop_and_remove_nozzle(frame, config.x_offset, config.y_offset)?;
    Ok(binarize(&cropped, config.threshold))
}

fn profiles_of_mask(mask: &Array2<bool>) -> PixelProfiles {
    let levels = mask.mapv(|v| if v { MAX_LEVEL } else { 0 });
    let (sum_x, sum_y) = calculate_pixel_sum(&levels);
    let grad_x = calculate_pixel_grad(&sum_x);
    let grad_y = calculate_pixel_grad(&sum_y);
    debug!(columns = sum_x.len(), rows = sum_y.len(), "Pixel profiles computed");

    PixelProfiles {
        sum_x: scaled_by_max(sum_x),
        sum_y: scaled_by_max(sum_y),
        grad_x: scaled_by_max(grad_x),
        grad_y: scaled_by_max(grad_y),
    }
}

/// Divide by the maximum; a profile whose maximum is zero is left as is.
fn scaled_by_max(mut values: Vec<f64>) -> Vec<f64> {
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    if max.abs() > EPSILON {
        values.iter_mut().for_each(|v| *v /= max);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_matches_central_differences() {
        let grad = calculate_pixel_grad(&[1.0, 2.0, 4.0, 7.0, 11.0]);
        assert_eq!(grad, vec![1.0, 1.5, 2.5, 3.5, 4.0]);
    }

    #[test]
    fn test_gradient_of_short_input() {
        assert_eq!(calculate_pixel_grad(&[5.0]), vec![0.0]);
        assert!(calculate_pixel_grad(&[]).is_empty());
    }

    #[test]
    fn test_scaled_by_zero_max_is_unchanged() {
        assert_eq!(scaled_by_max(vec![0.0, -1.0]), vec![0.0, -1.0]);
    }
}
