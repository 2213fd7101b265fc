//! Droplet measurement: contour decomposition into ellipses, ranking,
//! region discovery and volume estimation.

pub mod boundary;
pub mod properties;
pub mod ranking;
pub mod region;
pub mod split;
pub mod volume;

pub use boundary::{droplet_boundary, droplet_boundary_in_frame, BoundaryConfig, BoundaryResult};
pub use properties::{measure_droplet_properties, DropletProperties, DropletPropertiesConfig};
pub use ranking::{ellipses_analysis, EllipseSummary, EllipseTuple};
pub use region::{contour_finder, find_contour_regions, ContourFinderConfig, ContourRegions};
pub use split::{fill_contour, split_contour, SplitConfig};
pub use volume::{droplet_volume_estimation, estimate_volume_from_path, VolumeConfig, VolumeEstimate};
