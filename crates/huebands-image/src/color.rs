//! Discretized HSV to RGB conversion.
//!
//! [HSV color model](https://en.wikipedia.org/wiki/HSL_and_HSV#HSV_to_RGB)
//!
//! Only the sector selection of the full conversion is kept: the hue picks
//! one of six sectors and the dominant channel takes the maximum intensity
//! while the other two take the minimum. There is no blending inside a
//! sector, so consecutive hues produce flat bands.

/// Highest value a channel can take.
pub const MAX_VALUE: u8 = 255;

/// Number of hue sectors.
pub const HUE_SECTORS: usize = 6;

/// An RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Build a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in output order.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A color in the reduced HSV model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue as an unbounded integer; only `hue % 6` matters.
    pub hue: usize,
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Value (brightness) in `[0, 1]`.
    pub value: f64,
}

/// Which channel carries the maximum intensity for a given sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominant {
    /// Sectors 0 and 5.
    Red,
    /// Sectors 1 and 2.
    Green,
    /// Sectors 3 and 4.
    Blue,
}

impl Dominant {
    /// Dominant channel for `hue`, after wrapping into the six sectors.
    #[must_use]
    pub const fn for_hue(hue: usize) -> Self {
        match hue % HUE_SECTORS {
            1 | 2 => Self::Green,
            3 | 4 => Self::Blue,
            _ => Self::Red,
        }
    }
}

impl Hsv {
    /// Create an HSV color.
    #[must_use]
    pub const fn new(hue: usize, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Intensity of the dominant channel: `round(255 * v)`.
    #[must_use]
    pub fn max_channel(&self) -> u8 {
        to_channel(f64::from(MAX_VALUE) * self.value)
    }

    /// Intensity of the other two channels: `round(255 * (v - s * v))`.
    #[must_use]
    pub fn min_channel(&self) -> u8 {
        to_channel(f64::from(MAX_VALUE) * (self.value - self.saturation * self.value))
    }

    /// Convert to RGB.
    #[must_use]
    pub fn to_rgb(&self) -> Rgb {
        let max = self.max_channel();
        let min = self.min_channel();
        match Dominant::for_hue(self.hue) {
            Dominant::Red => Rgb::new(max, min, min),
            Dominant::Green => Rgb::new(min, max, min),
            Dominant::Blue => Rgb::new(min, min, max),
        }
    }
}

/// Round half away from zero and clamp into a channel.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(intensity: f64) -> u8 {
    intensity.round().clamp(0.0, f64::from(MAX_VALUE)) as u8
}
