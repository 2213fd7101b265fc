use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{DEFAULT_BOUNDARY_THRESHOLD, DEFAULT_BOUNDARY_X_OFFSET, DEFAULT_BOUNDARY_Y_OFFSET};
use crate::contour::Contour;
use crate::detection::binarize;
use crate::ellipse::EllipseFit;
use crate::error::Result;
use crate::frame::Frame;
use crate::io::crop::crop_and_remove_nozzle;
use crate::io::image_io::{derived_path, load_image, save_rgb};
use crate::io::overlay::{draw_contours_with_different_colors, draw_ellipses};

use super::properties::{measure_droplet_properties, DropletPropertiesConfig};

/// Parameters of [`droplet_boundary`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Columns removed from the left edge, where the nozzle sits.
    pub x_offset: usize,
    /// Rows removed from the top edge.
    pub y_offset: usize,
    pub threshold: u8,
    pub properties: DropletPropertiesConfig,
    pub save_ellipses: bool,
    pub save_contours: bool,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            x_offset: DEFAULT_BOUNDARY_X_OFFSET,
            y_offset: DEFAULT_BOUNDARY_Y_OFFSET,
            threshold: DEFAULT_BOUNDARY_THRESHOLD,
            properties: DropletPropertiesConfig::default(),
            save_ellipses: false,
            save_contours: false,
        }
    }
}

/// Ellipses in source-image coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryResult {
    pub ellipses: Vec<EllipseFit>,
    pub fit_attempts: usize,
}

/// Fit droplets in a frame after removing the nozzle strip.
pub fn droplet_boundary_in_frame(frame: &Frame, config: &BoundaryConfig) -> Result<BoundaryResult> {
    Ok(run(frame, config)?.0)
}

/// Load an image and fit the droplets in it; see [`droplet_boundary_in_frame`].
pub fn droplet_boundary(path: &Path, config: &BoundaryConfig) -> Result<BoundaryResult> {
    let frame = load_image(path)?;
    let (result, cropped, contours) = run(&frame, config)?;

    if config.save_contours {
        let overlay = draw_contours_with_different_colors(&cropped, &contours);
        save_rgb(&overlay, &derived_path(path, "_contours.jpg"))?;
    }
    if config.save_ellipses {
        let overlay = draw_ellipses(&frame, &result.ellipses);
        save_rgb(&overlay, &derived_path(path, "_ellipses.jpg"))?;
    }

    info!(
        path = %path.display(),
        ellipses = result.ellipses.len(),
        attempts = result.fit_attempts,
        "Droplet boundary measured"
    );
    Ok(result)
}

fn run(
    frame: &Frame,
    config: &BoundaryConfig,
) -> Result<(BoundaryResult, Frame, Vec<Contour>)> {
    let cropped = crop_and_remove_nozzle(frame, config.x_offset, config.y_offset)?;
    let mask = binarize(&cropped, config.threshold);
    let properties = measure_droplet_properties(&mask, &config.properties);

    let (dx, dy) = (config.x_offset as f64, config.y_offset as f64);
    let ellipses = properties
        .ellipses
        .iter()
        .map(|e| e.translated(dx, dy))
        .collect();

    let contours = properties.contours.map(|set| set.contours).unwrap_or_default();
    Ok((
        BoundaryResult {
            ellipses,
            fit_attempts: properties.fit_attempts,
        },
        cropped,
        contours,
    ))
}
