use thiserror::Error;

/// Convenience alias used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Host-supplied configuration (style, axis, layout inputs) is unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A dataset entry or render primitive failed validation.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
