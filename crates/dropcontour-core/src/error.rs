use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropletError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid crop: {0}")]
    InvalidCrop(String),

    #[error("Empty image")]
    EmptyImage,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DropletError>;
