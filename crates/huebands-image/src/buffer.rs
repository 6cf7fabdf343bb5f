//! Owned RGB pixel buffer.

use crate::color::Rgb;
use crate::dimensions::{CHANNELS, Dimensions};
use crate::error::{ImageError, Result};

/// Row-major RGB pixel storage (`columns * rows * 3` bytes).
///
/// The backing `Vec` is reserved once at its exact final size and never
/// grows afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Size of the image in pixels
    dimensions: Dimensions,
    /// Raw RGB bytes
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-filled buffer for `dimensions`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SizeOverflow`] if the byte length overflows, or
    /// [`ImageError::Allocation`] if the allocator refuses the request.
    pub fn allocate(dimensions: Dimensions) -> Result<Self> {
        let bytes = dimensions.byte_len()?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|source| ImageError::Allocation { bytes, source })?;
        data.resize(bytes, 0);
        Ok(Self { dimensions, data })
    }

    /// Size of the image in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Raw RGB bytes in row-major order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Color at `(row, col)`, or `None` outside the image.
    #[must_use]
    pub fn pixel(&self, row: usize, col: usize) -> Option<Rgb> {
        let offset = self.offset(row, col)?;
        let px = self.data.get(offset..offset + CHANNELS)?;
        Some(Rgb::new(px[0], px[1], px[2]))
    }

    /// Mutable rows, top to bottom, each `columns * 3` bytes long.
    ///
    /// Yields nothing for an empty image.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (usize, &mut [u8])> {
        let stride = self.dimensions.columns * CHANNELS;
        // Zero columns means empty data, so the substitute stride never
        // yields a chunk.
        self.data.chunks_exact_mut(stride.max(1)).enumerate()
    }

    fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.dimensions.rows || col >= self.dimensions.columns {
            return None;
        }
        Some((row * self.dimensions.columns + col) * CHANNELS)
    }
}
