//! Binary PPM (`P6`) serialization.
//!
//! [PPM Format Specification](https://netpbm.sourceforge.net/doc/ppm.html)
//!
//! Output is written strictly front to back: header, then the raster. No
//! padding, no trailing newline after the raster.

use std::fmt;
use std::io::Write;

use crate::buffer::PixelBuffer;
use crate::color::MAX_VALUE;
use crate::dimensions::Dimensions;
use crate::error::{ImageError, Result};

/// [§ The PPM Format](https://netpbm.sourceforge.net/doc/ppm.html)
/// "A 'magic number' for identifying the file type. A ppm image's magic
/// number is the two characters 'P6'."
pub const MAGIC_NUMBER: &str = "P6";

/// Textual header preceding the raster.
///
/// ```text
/// P6
/// <width> <height>
/// 255
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    dimensions: Dimensions,
}

impl PpmHeader {
    /// Header for an image of `dimensions`.
    #[must_use]
    pub const fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    /// Exact encoded length in bytes, derived from the digit counts alone.
    ///
    /// Three newlines and one separating space, plus the tag and numbers.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        MAGIC_NUMBER.len()
            + decimal_len(self.dimensions.columns)
            + decimal_len(self.dimensions.rows)
            + decimal_len(usize::from(MAX_VALUE))
            + 4
    }
}

impl fmt::Display for PpmHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{MAGIC_NUMBER}\n{} {}\n{MAX_VALUE}\n",
            self.dimensions.columns, self.dimensions.rows
        )
    }
}

/// Number of decimal digits in `n`.
const fn decimal_len(n: usize) -> usize {
    match n.checked_ilog10() {
        Some(log) => log as usize + 1,
        None => 1,
    }
}

/// Write `header` in a single `write` call and verify its length.
///
/// Returns the number of bytes written. A writer that accepts only part of
/// the header is not retried; the short count is reported instead.
///
/// # Errors
///
/// Returns [`ImageError::Io`] if the writer fails, or
/// [`ImageError::HeaderLength`] if the bytes written differ from
/// [`PpmHeader::encoded_len`].
pub fn write_header<W: Write>(out: &mut W, header: &PpmHeader) -> Result<usize> {
    let text = header.to_string();
    let written = out.write(text.as_bytes())?;

    let expected = header.encoded_len();
    if written != expected {
        return Err(ImageError::HeaderLength { expected, written });
    }
    Ok(written)
}

/// Write a complete PPM image (header then raster) and flush.
///
/// Returns the total number of bytes written.
///
/// # Errors
///
/// Returns an error if any write or the final flush fails. Output may be
/// partially emitted by then.
pub fn write_image<W: Write>(out: &mut W, buffer: &PixelBuffer) -> Result<usize> {
    let header_len = write_header(out, &PpmHeader::new(buffer.dimensions()))?;
    out.write_all(buffer.as_bytes())?;
    out.flush()?;
    Ok(header_len + buffer.as_bytes().len())
}
