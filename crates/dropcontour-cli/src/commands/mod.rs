pub mod config;
pub mod find;
pub mod fourier;
pub mod highpass;
pub mod measure;
pub mod nozzle;
pub mod profile;
pub mod volume;
