use thiserror::Error;

/// Errors returned when the inputs to an extraction can't describe a valid image or layout.
///
/// Everything else the pipeline runs into (transparent images, too few colors, unknown color
/// names) degrades into a shorter or empty result instead of an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes but a {width}x{height} RGBA image needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("sample stride must be at least 1")]
    InvalidStride,

    #[error("image size must be finite and positive, got {width}x{height}")]
    InvalidImageSize { width: f64, height: f64 },

    #[error("container dimensions must be finite and positive, got {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
