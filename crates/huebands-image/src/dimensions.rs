//! Image dimensions and lenient command-line parsing.
//!
//! Dimension tokens are read the way C's `strtoul(token, NULL, 10)` reads
//! them: leading whitespace and one `+` are skipped, the leading digit run
//! is the value, and anything after it is ignored. A token without leading
//! digits is `0`. Unlike `strtoul`, an out-of-range digit run is an error
//! instead of a saturated value.

use huebands_common::warning::warn_once;

use crate::error::{ImageError, Result};

/// Bytes per pixel (red, green, blue).
pub const CHANNELS: usize = 3;

/// How much of a dimension token was actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leniency {
    /// The whole token (after leading whitespace and sign) was digits.
    Exact,
    /// Characters after the leading digit run were ignored.
    TrailingIgnored,
    /// No leading digits; the value defaulted to `0`.
    NoDigits,
}

/// Parse one dimension token.
///
/// # Errors
///
/// Returns [`ImageError::DimensionTooLarge`] if the digit run overflows
/// `usize`.
pub fn parse_dimension(token: &str) -> Result<(usize, Leniency)> {
    let unsigned = token.trim_start();
    let unsigned = unsigned.strip_prefix('+').unwrap_or(unsigned);

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (digits, rest) = unsigned.split_at(digits_end);

    if digits.is_empty() {
        return Ok((0, Leniency::NoDigits));
    }

    let value = digits
        .parse::<usize>()
        .map_err(|_| ImageError::DimensionTooLarge {
            token: token.to_string(),
        })?;

    let leniency = if rest.is_empty() {
        Leniency::Exact
    } else {
        Leniency::TrailingIgnored
    };
    Ok((value, leniency))
}

/// Width and height of the generated image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width).
    pub columns: usize,
    /// Number of rows (height).
    pub rows: usize,
}

impl Dimensions {
    /// Create dimensions from already-validated values.
    #[must_use]
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Resolve dimensions from the two positional tokens.
    ///
    /// Lenient fallbacks are reported through [`warn_once`] and otherwise
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::DimensionTooLarge`] if either token overflows.
    pub fn from_args(width: &str, height: &str) -> Result<Self> {
        let columns = resolve("width", width)?;
        let rows = resolve("height", height)?;
        Ok(Self { columns, rows })
    }

    /// Number of pixels, or `None` on overflow.
    #[must_use]
    pub const fn pixel_count(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    /// Length of the pixel buffer in bytes (`columns * rows * 3`).
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::SizeOverflow`] if the length overflows `usize`.
    pub fn byte_len(&self) -> Result<usize> {
        self.pixel_count()
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or(ImageError::SizeOverflow {
                columns: self.columns,
                rows: self.rows,
            })
    }

    /// Whether the image has no pixels at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }
}

fn resolve(name: &str, token: &str) -> Result<usize> {
    let (value, leniency) = parse_dimension(token)?;
    match leniency {
        Leniency::Exact => {}
        Leniency::TrailingIgnored => warn_once(
            "args",
            &format!("ignored trailing characters in {name} '{token}', using {value}"),
        ),
        Leniency::NoDigits => warn_once(
            "args",
            &format!("{name} '{token}' is not a number, using 0"),
        ),
    }
    Ok(value)
}
