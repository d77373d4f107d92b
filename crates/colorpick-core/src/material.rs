//! Face materials: flat colors and textured materials.

use std::sync::Arc;

use crate::color::Color;
use crate::texture::Texture;

/// A material's solid color together with its opacity.
///
/// The alpha channel stored in `color` is not reliable: host models routinely
/// carry a color alpha of 0 on fully opaque materials. The separate `alpha`
/// multiplier is authoritative, see [`FlatMaterial::display_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatMaterial {
    /// Stored color. The alpha channel is ignored.
    pub color: Color,
    /// Material opacity in `[0, 1]`.
    pub alpha: f32,
}

impl FlatMaterial {
    /// Creates a flat material.
    #[must_use]
    pub fn new(color: Color, alpha: f32) -> Self {
        Self { color, alpha }
    }

    /// Returns the stored RGB with alpha replaced by `round(255 * alpha)`.
    #[must_use]
    pub fn display_color(&self) -> Color {
        self.color.with_alpha(Color::channel_from_unit(self.alpha))
    }
}

/// A face material.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// A solid color with no image.
    Flat(FlatMaterial),
    /// A solid color plus an image texture. The texture wins when sampling.
    Textured {
        /// Base color, used as a fallback by hosts that cannot show images.
        base: FlatMaterial,
        /// The applied texture.
        texture: Arc<Texture>,
    },
}

impl Material {
    /// Creates an untextured material.
    #[must_use]
    pub fn flat(color: Color, alpha: f32) -> Self {
        Material::Flat(FlatMaterial::new(color, alpha))
    }

    /// Creates a textured material.
    #[must_use]
    pub fn textured(color: Color, alpha: f32, texture: Arc<Texture>) -> Self {
        Material::Textured {
            base: FlatMaterial::new(color, alpha),
            texture,
        }
    }

    /// Returns the solid color part of the material.
    #[must_use]
    pub fn base(&self) -> &FlatMaterial {
        match self {
            Material::Flat(base) | Material::Textured { base, .. } => base,
        }
    }

    /// Returns the texture, if any.
    #[must_use]
    pub fn texture(&self) -> Option<&Texture> {
        match self {
            Material::Flat(_) => None,
            Material::Textured { texture, .. } => Some(texture.as_ref()),
        }
    }
}
