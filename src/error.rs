use alloc::string::String;

/// Errors from PNM decoding and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("maxval of zero in header")]
    ZeroMaxval,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("color model mismatch: expected {expected:?}, got {actual:?}")]
    ModelMismatch {
        expected: crate::ColorModel,
        actual: crate::ColorModel,
    },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
