use alloc::string::String;

/// Convenience result type used across the crate.
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors raised while building bitmaps or producing masked output.
///
/// A missing raster capability is not an error; see
/// [`MaskOutput::Unmasked`](crate::MaskOutput::Unmasked).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// The output rectangle is empty or too large to allocate.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A raw pixel buffer does not match its declared dimensions.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("encode error: {0}")]
    Encode(String),

    #[error("decode error: {0}")]
    Decode(String),

    /// Encoded output was requested but the `png` feature is disabled.
    #[error("encoded output requires the `png` feature")]
    EncoderUnavailable,
}

impl MaskError {
    /// Build a [`MaskError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MaskError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "tests/unit/error.rs"]
mod tests;
