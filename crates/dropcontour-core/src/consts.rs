/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f64 = 1e-12;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Highest 8-bit intensity level.
pub const MAX_LEVEL: u8 = 255;

/// Number of 8-bit intensity levels, used for histograms.
pub const LEVEL_COUNT: usize = 256;

// ---------------------------------------------------------------------------
// Contrast enhancement (CLAHE)
// ---------------------------------------------------------------------------

/// Default CLAHE clip limit, relative to the uniform bin height of a tile.
pub const DEFAULT_CLAHE_CLIP_LIMIT: f32 = 2.0;

/// Default CLAHE tile grid (columns, rows).
pub const DEFAULT_CLAHE_TILE_GRID: (usize, usize) = (8, 8);

// ---------------------------------------------------------------------------
// Contour region discovery
// ---------------------------------------------------------------------------

/// Default crop row range for contour discovery (start inclusive, end exclusive).
pub const DEFAULT_FINDER_CROP_ROWS: (usize, usize) = (400, 1100);

/// Default crop column range for contour discovery.
pub const DEFAULT_FINDER_CROP_COLS: (usize, usize) = (230, 1660);

/// Default binarization level for contour discovery.
pub const DEFAULT_FINDER_THRESHOLD: u8 = 50;

/// Contours with an area at or above this (px²) are ignored by the finder.
pub const DEFAULT_FINDER_MAX_AREA: f64 = 30_000.0;

/// Contours whose centroid row is at or above this line are ignored.
pub const DEFAULT_FINDER_MIN_CENTROID_Y: i32 = 20;

// ---------------------------------------------------------------------------
// Droplet properties and splitting
// ---------------------------------------------------------------------------

/// Minimum number of contour points for an ellipse fit.
pub const MIN_FIT_POINTS: usize = 5;

/// Maximum relative deviation of area or perimeter ratio from 1.0.
pub const DEFAULT_RATIO_TOLERANCE: f64 = 0.2;

/// Level (of the 0..=255 normalized distance map) above which a pixel is a core.
pub const DEFAULT_SPLIT_DISTANCE_THRESHOLD: u8 = 50;

/// Side length of the square dilation kernel applied to split cores.
pub const DEFAULT_SPLIT_DILATE_KERNEL: usize = 9;

// ---------------------------------------------------------------------------
// Boundary pipeline
// ---------------------------------------------------------------------------

/// Columns removed from the left edge to hide the nozzle.
pub const DEFAULT_BOUNDARY_X_OFFSET: usize = 220;

/// Rows removed from the top edge.
pub const DEFAULT_BOUNDARY_Y_OFFSET: usize = 0;

/// Binarization level used by the boundary pipeline.
pub const DEFAULT_BOUNDARY_THRESHOLD: u8 = 100;

/// Gaussian sigma equivalent to a 5x5 kernel with automatic sigma.
pub const EDGE_BLUR_SIGMA: f32 = 1.1;

/// Canny hysteresis thresholds.
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 200.0;

/// Radius of the low-frequency disc removed by the high-pass filter.
pub const DEFAULT_HIGH_PASS_RADIUS: usize = 10;

// ---------------------------------------------------------------------------
// Volume estimation
// ---------------------------------------------------------------------------

/// Physical length per pixel: 70 µm over 160 px.
pub const DEFAULT_PIXEL_TO_UM: f64 = 70.0 / 160.0;

/// Default crop row range for volume estimation, before transposition.
pub const DEFAULT_VOLUME_CROP_ROWS: (usize, usize) = (550, 1000);

/// Default crop column range for volume estimation, before transposition.
pub const DEFAULT_VOLUME_CROP_COLS: (usize, usize) = (251, 1000);

/// Binarization level used before the volume scan.
pub const DEFAULT_VOLUME_THRESHOLD: u8 = 50;

/// Change points are indices where |Δlevel| exceeds this value.
pub const DEFAULT_INTENSITY_THRESHOLD: u8 = 0;

// ---------------------------------------------------------------------------
// Profiles and descriptors
// ---------------------------------------------------------------------------

/// Binarization level for pixel-sum profiles.
pub const DEFAULT_PROFILE_THRESHOLD: u8 = 50;

/// Default elliptic Fourier descriptor order.
pub const DEFAULT_FOURIER_ORDER: usize = 10;
