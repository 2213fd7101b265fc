pub mod distance;
pub mod edges;
pub mod morphology;
pub mod threshold;

pub use distance::{distance_transform, normalize_to_levels};
pub use edges::detect_droplet_boundary;
pub use morphology::dilate;
pub use threshold::{binarize, binarize_levels};
