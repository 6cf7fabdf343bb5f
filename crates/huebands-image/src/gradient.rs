//! Per-pixel parameter derivation and band synthesis.
//!
//! Each row is one hue (wrapping every six rows). Within a row, saturation
//! rises from 0.5 to 1.0 and value falls from 1.0 to 0.5, left to right:
//!
//! ```text
//! shift      = 0.5 * col / (cols - 1)      (0 when cols == 1)
//! saturation = 0.5 + shift
//! value      = 1.0 - shift
//! ```

use crate::buffer::PixelBuffer;
use crate::color::{Hsv, Rgb};
use crate::dimensions::{CHANNELS, Dimensions};
use crate::error::Result;

/// Baseline for saturation and value, and the full extent of the ramp.
pub const BASE: f64 = 0.5;

/// Ramp offset for column `col` of a `columns`-wide image.
///
/// A single-column image has nothing to ramp across and always gets `0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn shift(columns: usize, col: usize) -> f64 {
    if columns <= 1 {
        return 0.0;
    }
    BASE * col as f64 / (columns - 1) as f64
}

/// HSV parameters for the pixel at `(row, col)`.
#[must_use]
pub fn pixel_hsv(columns: usize, row: usize, col: usize) -> Hsv {
    let shift = shift(columns, col);
    Hsv::new(row, BASE + shift, 2.0 * BASE - shift)
}

/// Color of the pixel at `(row, col)`.
#[must_use]
pub fn pixel_color(columns: usize, row: usize, col: usize) -> Rgb {
    pixel_hsv(columns, row, col).to_rgb()
}

/// Fill `buffer` with the banded gradient, row-major.
pub fn fill(buffer: &mut PixelBuffer) {
    let columns = buffer.dimensions().columns;
    for (row, line) in buffer.rows_mut() {
        for (col, px) in line.chunks_exact_mut(CHANNELS).enumerate() {
            px.copy_from_slice(&pixel_color(columns, row, col).to_bytes());
        }
    }
}

/// Allocate and fill a buffer for `dimensions`.
///
/// # Errors
///
/// Returns an error if the buffer cannot be allocated.
pub fn synthesize(dimensions: Dimensions) -> Result<PixelBuffer> {
    let mut buffer = PixelBuffer::allocate(dimensions)?;
    fill(&mut buffer);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_endpoints() {
        assert!(shift(5, 0).abs() < f64::EPSILON);
        assert!((shift(5, 4) - 0.5).abs() < f64::EPSILON);
        assert!((shift(5, 2) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shift_single_column() {
        assert!(shift(1, 0).abs() < f64::EPSILON);
        assert!(shift(1, 0).is_finite());
    }
}
