pub mod clahe;
pub mod gaussian_blur;
pub mod high_pass;

pub use clahe::enhance_contrast;
pub use gaussian_blur::gaussian_blur;
pub use high_pass::high_pass_filter;
