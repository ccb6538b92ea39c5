//! Error types for pixkit.

use thiserror::Error;

/// Result alias for pixkit operations.
pub type PixKitResult<T> = std::result::Result<T, PixKitError>;

/// Errors that can occur when running pixkit operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixKitError {
    /// Image or kernel dimensions are zero or overflow the storage size.
    #[error("invalid dimensions: {rows}x{cols}x{chans}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        chans: usize,
    },
    /// A supplied buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// A sample access lies outside the image.
    #[error("out of bounds: ({row}, {col}) in {rows}x{cols} image")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// A region does not fit inside the image it was applied to.
    #[error(
        "invalid region: top left ({top_row}, {top_col}) extents ({ext_rows}, {ext_cols}) \
         in {rows}x{cols} image"
    )]
    InvalidRegion {
        top_row: usize,
        top_col: usize,
        ext_rows: usize,
        ext_cols: usize,
        rows: usize,
        cols: usize,
    },
    /// Filter output shape does not match the input shape and plan strides.
    #[error("dimension mismatch: {reason}")]
    DimensionMismatch { reason: &'static str },
    /// Kernel channel count does not line up with the image it is applied to.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch { expected: usize, got: usize },
    /// A plan stride of zero cannot address any output pixel.
    #[error("invalid stride: ({row}, {col})")]
    InvalidStride { row: usize, col: usize },
    /// Dither bit depth outside the supported 1..=8 range.
    #[error("invalid bit depth: {bits} (supported range 1..=8)")]
    InvalidBitDepth { bits: u32 },
    /// The bitmap codec only handles 1-, 3- and 4-channel images.
    #[error("unsupported channel count for bitmap: {chans}")]
    UnsupportedChannels { chans: usize },
    /// The requested algorithm method is not implemented.
    #[error("unsupported method: {method}")]
    UnsupportedMethod { method: &'static str },
    /// An operation that needs at least one element received none.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    /// Negative padding amounts cannot be applied.
    #[error("negative pad: before {before}, after {after}")]
    NegativePad { before: i32, after: i32 },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// A bitmap stream does not follow the expected layout.
    #[error("invalid bitmap: {reason}")]
    InvalidBitmap { reason: &'static str },
    /// Underlying file or stream I/O failed.
    #[error("i/o error: {reason}")]
    Io { reason: String },
}

impl From<std::io::Error> for PixKitError {
    fn from(err: std::io::Error) -> Self {
        PixKitError::Io {
            reason: err.to_string(),
        }
    }
}
