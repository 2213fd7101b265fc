pub mod consts;
pub mod contour;
pub mod detection;
pub mod droplet;
pub mod ellipse;
pub mod error;
pub mod filters;
pub mod fourier;
pub mod frame;
pub mod io;
pub mod nozzle;
pub mod profile;
