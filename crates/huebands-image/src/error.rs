//! Error type for image generation.

use std::collections::TryReserveError;

/// Everything that can stop an image from being generated or written.
///
/// All variants are fatal to the caller; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// A dimension's digits do not fit in `usize`.
    #[error("dimension '{token}' is too large")]
    DimensionTooLarge {
        /// The token as given on the command line.
        token: String,
    },

    /// `columns * rows * 3` does not fit in `usize`.
    #[error("image of {columns}x{rows} pixels exceeds the addressable size")]
    SizeOverflow {
        /// Image width.
        columns: usize,
        /// Image height.
        rows: usize,
    },

    /// The pixel buffer could not be reserved.
    #[error("failed to allocate {bytes} bytes for the pixel buffer")]
    Allocation {
        /// Requested buffer length.
        bytes: usize,
        /// Allocator failure.
        #[source]
        source: TryReserveError,
    },

    /// The header write transferred a different number of bytes than the
    /// header's computed length.
    #[error("header write transferred {written} bytes, expected {expected}")]
    HeaderLength {
        /// Length derived from the dimensions.
        expected: usize,
        /// Bytes actually produced.
        written: usize,
    },

    /// Writing to the output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ImageError>;
