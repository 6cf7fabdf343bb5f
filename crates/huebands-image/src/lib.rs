//! HSV band image synthesis for huebands.
//!
//! # Scope
//!
//! This crate provides:
//! - **Dimensions** - lenient parsing of width/height tokens
//! - **Color** - six-sector HSV to RGB reduction
//! - **Gradient** - per-pixel saturation/value ramp and buffer synthesis
//! - **PPM** - binary `P6` header and raster serialization
//!
//! # Pipeline
//!
//! ```text
//! args → Dimensions → PixelBuffer → P6 stream
//!                         ↑
//!                  gradient::fill
//! ```

pub mod buffer;
pub mod color;
pub mod dimensions;
pub mod error;
pub mod gradient;
pub mod ppm;

use std::io::Write;

pub use buffer::PixelBuffer;
pub use color::{Dominant, Hsv, Rgb};
pub use dimensions::{Dimensions, Leniency, parse_dimension};
pub use error::{ImageError, Result};
pub use ppm::PpmHeader;

/// Generate the banded gradient for `dimensions` and write it as PPM.
///
/// The buffer is fully populated before the first byte is written, and is
/// released on return whether or not writing succeeded.
///
/// Returns the total number of bytes written.
///
/// # Errors
///
/// Returns an error if the buffer cannot be allocated or the output fails.
pub fn render<W: Write>(dimensions: Dimensions, out: &mut W) -> Result<usize> {
    let buffer = gradient::synthesize(dimensions)?;
    ppm::write_image(out, &buffer)
}
