use std::f64::consts::PI;
use std::path::Path;

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::consts::{
    DEFAULT_INTENSITY_THRESHOLD, DEFAULT_PIXEL_TO_UM, DEFAULT_VOLUME_CROP_COLS,
    DEFAULT_VOLUME_CROP_ROWS, DEFAULT_VOLUME_THRESHOLD, MAX_LEVEL,
};
use crate::detection::binarize;
use crate::error::{DropletError, Result};
use crate::io::crop::{crop_frame, CropRect};
use crate::io::image_io::load_image;

/// Parameters of the row-by-row volume scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Physical length of one pixel.
    pub pixel_to_um: f64,
    /// A column boundary is counted where the level changes by more than this.
    pub intensity_threshold: u8,
    /// Rows kept from the source image, before transposition.
    pub crop_rows: (usize, usize),
    /// Columns kept from the source image, before transposition.
    pub crop_cols: (usize, usize),
    /// Binarization level applied to the gray image.
    pub threshold: u8,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            pixel_to_um: DEFAULT_PIXEL_TO_UM,
            intensity_threshold: DEFAULT_INTENSITY_THRESHOLD,
            crop_rows: DEFAULT_VOLUME_CROP_ROWS,
            crop_cols: DEFAULT_VOLUME_CROP_COLS,
            threshold: DEFAULT_VOLUME_THRESHOLD,
        }
    }
}

impl VolumeConfig {
    /// Reject a non-positive or non-finite pixel scale.
    pub fn validate(&self) -> Result<()> {
        if !(self.pixel_to_um.is_finite() && self.pixel_to_um > 0.0) {
            return Err(DropletError::Config(format!(
                "pixel_to_um must be positive, got {}",
                self.pixel_to_um
            )));
        }
        Ok(())
    }
}

/// Droplets found by [`droplet_volume_estimation`], in scan order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeEstimate {
    pub volumes: Vec<f64>,
    pub count: usize,
    /// Widest row of each droplet.
    pub x_diameters: Vec<f64>,
    /// Gaps between consecutive background rows.
    pub y_diameters: Vec<f64>,
}

#[derive(Debug, Default)]
struct DropletAccumulator {
    volume: f64,
    max_diameter: f64,
}

impl DropletAccumulator {
    fn add_slice(&mut self, diameter: f64, volume: f64) {
        self.volume += volume;
        self.max_diameter = self.max_diameter.max(diameter);
    }
}

enum ScanState {
    Accumulating(DropletAccumulator),
    BetweenDroplets,
}

/// Stack one-pixel-thick discs, one per row, into droplet volumes.
///
/// Rows are scanned from the last to the first. A row with at least two
/// level changes is a slice of a droplet whose diameter spans the first to
/// the last change; any other row separates droplets.
pub fn droplet_volume_estimation(mask: &Array2<bool>, config: &VolumeConfig) -> VolumeEstimate {
    let scale = config.pixel_to_um;
    let mut state = ScanState::BetweenDroplets;
    let mut estimate = VolumeEstimate::default();
    let mut background_rows = Vec::new();

    for (y, row) in mask.outer_iter().enumerate().rev() {
        let changes = change_indices(row, config.intensity_threshold);

        match (changes.first(), changes.last()) {
            (Some(&first), Some(&last)) if changes.len() >= 2 => {
                let diameter = (last - first) as f64 * scale;
                let radius = diameter / 2.0;
                let slice_volume = PI * radius * radius * scale;

                match &mut state {
                    ScanState::Accumulating(acc) => acc.add_slice(diameter, slice_volume),
                    ScanState::BetweenDroplets => {
                        let mut acc = DropletAccumulator::default();
                        acc.add_slice(diameter, slice_volume);
                        state = ScanState::Accumulating(acc);
                    }
                }
            }
            _ => {
                background_rows.push(y);
                if let ScanState::Accumulating(acc) =
                    std::mem::replace(&mut state, ScanState::BetweenDroplets)
                {
                    finalize(acc, &mut estimate);
                }
            }
        }
    }

    if let ScanState::Accumulating(acc) = state {
        finalize(acc, &mut estimate);
    }

    estimate.y_diameters = background_rows
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .filter(|&gap| gap > 1)
        .map(|gap| gap as f64 * scale)
        .collect();
    estimate.count = estimate.volumes.len();

    debug!(
        droplets = estimate.count,
        background_rows = background_rows.len(),
        "Volume scan complete"
    );
    estimate
}

fn finalize(acc: DropletAccumulator, estimate: &mut VolumeEstimate) {
    if acc.volume == 0.0 || acc.max_diameter == 0.0 {
        trace!("Empty droplet discarded");
        return;
    }
    estimate.volumes.push(acc.volume);
    estimate.x_diameters.push(acc.max_diameter);
}

/// Indices `i` where the level jumps between `i` and `i + 1`.
fn change_indices(row: ArrayView1<bool>, intensity_threshold: u8) -> Vec<usize> {
    let level = |v: bool| if v { MAX_LEVEL } else { 0 };
    (0..row.len().saturating_sub(1))
        .filter(|&i| level(row[i]).abs_diff(level(row[i + 1])) > intensity_threshold)
        .collect()
}

/// Load an image, crop it, turn droplets upright, binarize, and scan.
pub fn estimate_volume_from_path(path: &Path, config: &VolumeConfig) -> Result<VolumeEstimate> {
    config.validate()?;
    let frame = load_image(path)?;
    let rect = CropRect::from_ranges(config.crop_rows, config.crop_cols);
    let cropped = crop_frame(&frame, &rect)?.transposed();
    let mask = binarize(&cropped, config.threshold);
    Ok(droplet_volume_estimation(&mask, config))
}
