use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    DEFAULT_CLAHE_CLIP_LIMIT, DEFAULT_CLAHE_TILE_GRID, DEFAULT_FINDER_CROP_COLS,
    DEFAULT_FINDER_CROP_ROWS, DEFAULT_FINDER_MAX_AREA, DEFAULT_FINDER_MIN_CENTROID_Y,
    DEFAULT_FINDER_THRESHOLD,
};
use crate::contour::{
    find_contours, get_centroid, ChainApproximation, Contour, Hierarchy, Point, RetrievalMode,
};
use crate::detection::binarize;
use crate::error::Result;
use crate::filters::enhance_contrast;
use crate::frame::Frame;
use crate::io::crop::{crop_frame, CropRect};
use crate::io::image_io::{derived_path, load_image, save_mask_png, save_png, save_rgb};
use crate::io::overlay::draw_contours_with_different_colors;

/// Parameters of [`contour_finder`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContourFinderConfig {
    /// Half-open row range of the region of interest.
    pub crop_rows: (usize, usize),
    /// Half-open column range of the region of interest.
    pub crop_cols: (usize, usize),
    pub clip_limit: f32,
    pub tile_grid: (usize, usize),
    pub threshold: u8,
    /// Contours at least this large (px²) are discarded.
    pub max_area: f64,
    /// Contours whose centroid row is not below this line are discarded.
    pub min_centroid_y: i32,
    pub save_contrast: bool,
    pub save_binarized: bool,
    pub save_contours: bool,
}

impl Default for ContourFinderConfig {
    fn default() -> Self {
        Self {
            crop_rows: DEFAULT_FINDER_CROP_ROWS,
            crop_cols: DEFAULT_FINDER_CROP_COLS,
            clip_limit: DEFAULT_CLAHE_CLIP_LIMIT,
            tile_grid: DEFAULT_CLAHE_TILE_GRID,
            threshold: DEFAULT_FINDER_THRESHOLD,
            max_area: DEFAULT_FINDER_MAX_AREA,
            min_centroid_y: DEFAULT_FINDER_MIN_CENTROID_Y,
            save_contrast: false,
            save_binarized: false,
            save_contours: false,
        }
    }
}

/// Candidate droplet regions, largest first. The three lists are parallel.
#[derive(Clone, Debug, Default)]
pub struct ContourRegions {
    pub contours: Vec<Contour>,
    pub areas: Vec<f64>,
    pub centroids: Vec<Point>,
    /// Nesting of every traced contour, before filtering.
    pub hierarchy: Hierarchy,
}

impl ContourRegions {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }
}

/// Intermediate images of one discovery run.
struct Stages {
    cropped: Frame,
    contrast: Frame,
    binary: Array2<bool>,
    regions: ContourRegions,
}

fn discover(frame: &Frame, config: &ContourFinderConfig) -> Result<Stages> {
    let rect = CropRect::from_ranges(config.crop_rows, config.crop_cols);
    let cropped = crop_frame(frame, &rect)?;
    let contrast = enhance_contrast(&cropped, config.clip_limit, config.tile_grid);
    let binary = binarize(&contrast, config.threshold);

    let set = find_contours(&binary, RetrievalMode::Tree, ChainApproximation::Simple);

    let mut kept: Vec<(Contour, f64, Point)> = Vec::new();
    for (index, contour) in set.contours.iter().enumerate() {
        let area = contour.area();
        if area >= config.max_area {
            continue;
        }
        let Some(centroid) = get_centroid(contour) else {
            continue;
        };
        if centroid.y <= config.min_centroid_y {
            continue;
        }
        let has_child = set
            .hierarchy
            .get(index)
            .is_some_and(|node| node.first_child.is_some());
        if has_child {
            kept.push((contour.clone(), area, centroid));
        }
    }

    kept.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(
        traced = set.len(),
        kept = kept.len(),
        "Contour regions discovered"
    );

    let mut regions = ContourRegions {
        hierarchy: set.hierarchy,
        ..Default::default()
    };
    for (contour, area, centroid) in kept {
        regions.contours.push(contour);
        regions.areas.push(area);
        regions.centroids.push(centroid);
    }

    Ok(Stages {
        cropped,
        contrast,
        binary,
        regions,
    })
}

/// Find closed regions with inner structure in a frame: crop, CLAHE,
/// threshold, trace, then filter by size, position and nesting.
pub fn find_contour_regions(frame: &Frame, config: &ContourFinderConfig) -> Result<ContourRegions> {
    Ok(discover(frame, config)?.regions)
}

/// [`find_contour_regions`] on an image file, writing the requested
/// intermediate images next to it.
pub fn contour_finder(path: &Path, config: &ContourFinderConfig) -> Result<ContourRegions> {
    let frame = load_image(path)?;
    let stages = discover(&frame, config)?;

    if config.save_contrast {
        save_png(&stages.contrast, &derived_path(path, "_contrast.png"))?;
    }
    if config.save_binarized {
        save_mask_png(&stages.binary, &derived_path(path, "_binarized.png"))?;
    }
    if config.save_contours {
        let overlay = draw_contours_with_different_colors(&stages.cropped, &stages.regions.contours);
        save_rgb(&overlay, &derived_path(path, "_contours.jpg"))?;
    }

    Ok(stages.regions)
}
