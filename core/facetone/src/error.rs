use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceToneError {
    #[error("failed to decode image: {0}")]
    DecodeError(String),

    #[error("unsupported image format")]
    UnsupportedFormat,

    #[error("image dimensions are zero")]
    ZeroDimensions,

    #[error("sampling stride must be > 0")]
    InvalidStride,

    #[error(
        "region ({x}, {y}, {width}x{height}) is empty or outside the {image_width}x{image_height} image"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
