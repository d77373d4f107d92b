//! Texture images and UV sampling.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{PickError, Result};

/// How UV coordinates outside `[0, 1]` are mapped onto the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WrapMode {
    /// The image tiles outside `[0, 1]`: only the fractional part of the
    /// coordinate is used there.
    #[default]
    Repeat,
    /// Coordinates are clamped to the image border.
    Clamp,
}

impl WrapMode {
    /// Maps a coordinate into `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            WrapMode::Repeat if (0.0..=1.0).contains(&t) => t,
            WrapMode::Repeat => t.rem_euclid(1.0),
            WrapMode::Clamp => t.clamp(0.0, 1.0),
        }
    }
}

/// A decoded RGBA image addressed by continuous UV coordinates.
///
/// Pixels are stored row by row, row 0 at the top. UV `(0, 0)` is the
/// bottom-left corner and `(1, 1)` the top-right.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRep {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl ImageRep {
    /// Creates an image from row-major pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if expected == 0 || pixels.len() != expected {
            return Err(PickError::InvalidImage {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Creates a single-color image of the given size.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self> {
        Self::new(width, height, vec![color; width as usize * height as usize])
    }

    /// Loads an image file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        log::debug!(
            "loaded texture image {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::from_rgba_image(&image)
    }

    /// Converts an in-memory `image` buffer.
    pub fn from_rgba_image(image: &image::RgbaImage) -> Result<Self> {
        let pixels = image.pixels().map(|p| Color::from(*p)).collect();
        Self::new(image.width(), image.height(), pixels)
    }

    /// Returns the image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the pixel at column `x`, row `y` (row 0 at the top), or `None`
    /// outside the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Samples the nearest pixel at `uv`, mapping out-of-range coordinates
    /// with `wrap`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn color_at_uv(&self, uv: Vec2, wrap: WrapMode) -> Color {
        let u = wrap.apply(uv.x);
        let v = wrap.apply(uv.y);
        // NaN falls through `as u32` to 0.
        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = (((1.0 - v) * self.height as f32) as u32).min(self.height - 1);
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// A material texture: a named image.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    name: String,
    image: ImageRep,
}

impl Texture {
    /// Creates a texture from an already decoded image.
    pub fn new(name: impl Into<String>, image: ImageRep) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Loads a texture from an image file, naming it after the file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
        Ok(Self::new(name, ImageRep::open(path)?))
    }

    /// Returns the texture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the texture image.
    #[must_use]
    pub fn image_rep(&self) -> &ImageRep {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);
    const WHITE: Color = Color::WHITE;

    /// 2x2 image: top row red/green, bottom row blue/white.
    fn quad_image() -> ImageRep {
        ImageRep::new(2, 2, vec![RED, GREEN, BLUE, WHITE]).unwrap()
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let err = ImageRep::new(2, 2, vec![RED; 3]).unwrap_err();
        assert!(matches!(
            err,
            PickError::InvalidImage {
                expected: 4,
                actual: 3
            }
        ));
        assert!(ImageRep::new(0, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_v_points_up() {
        let image = quad_image();
        assert_eq!(image.color_at_uv(Vec2::new(0.25, 0.25), WrapMode::Clamp), BLUE);
        assert_eq!(image.color_at_uv(Vec2::new(0.75, 0.25), WrapMode::Clamp), WHITE);
        assert_eq!(image.color_at_uv(Vec2::new(0.25, 0.75), WrapMode::Clamp), RED);
        assert_eq!(image.color_at_uv(Vec2::new(0.75, 0.75), WrapMode::Clamp), GREEN);
    }

    #[test]
    fn test_unit_corners_stay_in_bounds() {
        let image = quad_image();
        assert_eq!(image.color_at_uv(Vec2::new(1.0, 1.0), WrapMode::Clamp), GREEN);
        assert_eq!(image.color_at_uv(Vec2::new(0.0, 0.0), WrapMode::Clamp), BLUE);
        // Repeat leaves the closed unit square alone.
        assert_eq!(image.color_at_uv(Vec2::new(1.0, 1.0), WrapMode::Repeat), GREEN);
        assert_eq!(image.color_at_uv(Vec2::new(0.0, 0.0), WrapMode::Repeat), BLUE);
        assert_eq!(image.color_at_uv(Vec2::new(1.0, 0.0), WrapMode::Repeat), WHITE);
        assert_eq!(image.color_at_uv(Vec2::new(0.0, 1.0), WrapMode::Repeat), RED);
    }

    #[test]
    fn test_repeat_wraps_past_one() {
        assert!((WrapMode::Repeat.apply(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((WrapMode::Repeat.apply(1.25) - 0.25).abs() < 1e-6);
        assert!((WrapMode::Repeat.apply(-0.25) - 0.75).abs() < 1e-6);
        assert!(WrapMode::Repeat.apply(2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_center_of_odd_image() {
        let mut pixels = vec![RED; 9];
        pixels[4] = GREEN;
        let image = ImageRep::new(3, 3, pixels).unwrap();
        assert_eq!(image.color_at_uv(Vec2::splat(0.5), WrapMode::Repeat), GREEN);
    }

    #[test]
    fn test_repeat_tiles_out_of_range() {
        let image = quad_image();
        assert_eq!(
            image.color_at_uv(Vec2::new(1.25, 0.25), WrapMode::Repeat),
            BLUE
        );
        assert_eq!(
            image.color_at_uv(Vec2::new(-0.25, 0.25), WrapMode::Repeat),
            WHITE
        );
        assert_eq!(
            image.color_at_uv(Vec2::new(0.25, 2.75), WrapMode::Repeat),
            RED
        );
    }

    #[test]
    fn test_clamp_extends_border() {
        let image = quad_image();
        assert_eq!(
            image.color_at_uv(Vec2::new(1.25, 0.25), WrapMode::Clamp),
            WHITE
        );
        assert_eq!(
            image.color_at_uv(Vec2::new(-0.25, 0.25), WrapMode::Clamp),
            BLUE
        );
        assert_eq!(
            image.color_at_uv(Vec2::new(0.25, 2.75), WrapMode::Clamp),
            RED
        );
    }

    #[test]
    fn test_from_rgba_image() {
        let mut buffer = image::RgbaImage::new(2, 1);
        buffer.put_pixel(0, 0, image::Rgba([10, 20, 30, 40]));
        buffer.put_pixel(1, 0, image::Rgba([50, 60, 70, 80]));
        let image = ImageRep::from_rgba_image(&buffer).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.pixel(1, 0), Some(Color::new(50, 60, 70, 80)));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.pixel(0, 1), None);
    }

    #[test]
    fn test_open_missing_file_is_error() {
        assert!(Texture::open("/nonexistent/texture.png").is_err());
    }
}
