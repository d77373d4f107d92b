//! 8-bit RGBA colors.

use std::fmt;

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from all four channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the channels as `[r, g, b, a]`.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Returns a copy with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Converts to normalized floats in `[0, 1]`.
    #[must_use]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.r),
            f32::from(self.g),
            f32::from(self.b),
            f32::from(self.a),
        ) / 255.0
    }

    /// Converts a normalized float value in `[0, 1]` to an 8-bit channel.
    ///
    /// Values are clamped and rounded to the nearest integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn channel_from_unit(value: f32) -> u8 {
        if value.is_nan() {
            return 0;
        }
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_from_unit_rounds() {
        assert_eq!(Color::channel_from_unit(1.0), 255);
        assert_eq!(Color::channel_from_unit(0.0), 0);
        assert_eq!(Color::channel_from_unit(0.75), 191);
        assert_eq!(Color::channel_from_unit(0.5), 128);
    }

    #[test]
    fn test_channel_from_unit_clamps() {
        assert_eq!(Color::channel_from_unit(-0.5), 0);
        assert_eq!(Color::channel_from_unit(3.0), 255);
        assert_eq!(Color::channel_from_unit(f32::NAN), 0);
    }

    #[test]
    fn test_display_lists_channels() {
        assert_eq!(Color::new(1, 2, 3, 4).to_string(), "1, 2, 3, 4");
    }

    #[test]
    fn test_to_vec4() {
        let v = Color::new(255, 0, 51, 255).to_vec4();
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!((v.z - 0.2).abs() < 1e-6);
        assert!((v.w - 1.0).abs() < 1e-6);
    }
}
