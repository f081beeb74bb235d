//! Color channel conversion.
//!
//! Host colors store channels as fractions in `[0, 1]`. Display colors use
//! whole numbers in `[0, 255]` and `#rrggbb` hex strings.

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// An opaque color with fractional channels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A color with fractional channels and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// Anything that exposes fractional color channels.
pub trait ColorChannels {
    /// Returns `(r, g, b, alpha)`; alpha is `None` for colors without one.
    fn channels(&self) -> (f64, f64, f64, Option<f64>);
}

impl ColorChannels for Rgb {
    fn channels(&self) -> (f64, f64, f64, Option<f64>) {
        (self.r, self.g, self.b, None)
    }
}

impl ColorChannels for Rgba {
    fn channels(&self) -> (f64, f64, f64, Option<f64>) {
        (self.r, self.g, self.b, Some(self.a))
    }
}

/// A color in display form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayColor {
    pub r: u32,
    pub g: u32,
    pub b: u32,
    /// Alpha, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl DisplayColor {
    /// Renders the color as `#rrggbb`, ignoring alpha.
    pub fn hex(&self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }
}

/// Converts fractional channels to display form.
///
/// Each of r/g/b is scaled by 255 and rounded to the nearest integer. Negative
/// channels saturate at zero.
pub fn convert_color<C: ColorChannels + ?Sized>(color: &C) -> DisplayColor {
    let (r, g, b, a) = color.channels();
    DisplayColor {
        r: scale_channel(r),
        g: scale_channel(g),
        b: scale_channel(b),
        a,
    }
}

fn scale_channel(value: f64) -> u32 {
    (255.0 * value).round() as u32
}

/// Renders three channels as `#rrggbb`.
///
/// Channels are not clamped: a value above 255 produces more than two digits
/// for that channel and the result is not a valid 6-digit hex color.
pub fn rgb_to_hex(r: u32, g: u32, b: u32) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Parses `#rrggbb` (the `#` is optional) back into byte channels.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ModelError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ModelError::InvalidHexColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ModelError::InvalidHexColor(hex.to_string()))
    };
    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_convert_color_scales_and_rounds() {
        let display = convert_color(&Rgb::new(1.0, 0.0, 0.5));
        assert_eq!(display.r, 255);
        assert_eq!(display.g, 0);
        assert_eq!(display.b, 128);
        assert_eq!(display.a, None);
    }

    #[test]
    fn test_convert_color_passes_alpha_through() {
        let display = convert_color(&Rgba::new(0.2, 0.4, 0.6, 0.25));
        assert_eq!((display.r, display.g, display.b), (51, 102, 153));
        assert_eq!(display.a, Some(0.25));
    }

    #[test]
    fn test_rgb_to_hex_pads_channels() {
        assert_eq!(rgb_to_hex(255, 0, 0), "#ff0000");
        assert_eq!(rgb_to_hex(1, 2, 3), "#010203");
        assert_eq!(convert_color(&Rgb::new(1.0, 1.0, 1.0)).hex(), "#ffffff");
    }

    #[test]
    fn test_rgb_to_hex_out_of_range_is_malformed() {
        let hex = rgb_to_hex(256, 0, 0);
        assert_eq!(hex, "#1000000");
        assert!(hex_to_rgb(&hex).is_err());
    }

    #[test]
    fn test_hex_to_rgb_rejects_garbage() {
        assert!(hex_to_rgb("#12345").is_err());
        assert!(hex_to_rgb("#zzzzzz").is_err());
        assert_eq!(hex_to_rgb("00ff7f").unwrap(), (0, 255, 127));
    }

    proptest! {
        #[test]
        fn hex_round_trip(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let hex = rgb_to_hex(r as u32, g as u32, b as u32);
            prop_assert_eq!(hex.len(), 7);
            prop_assert_eq!(hex_to_rgb(&hex).unwrap(), (r, g, b));
        }
    }
}
