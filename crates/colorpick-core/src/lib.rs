//! Core of colorpick-rs.
//!
//! This crate resolves the color under the cursor on a 3D surface:
//! - [`Picker`] builds a pick ray through a host [`View`] and finds the struck face
//! - [`resolve`] maps the hit into the face's frame and recovers its UV
//! - [`Material`] and [`Texture`] provide flat colors and image sampling
//! - [`ColorNameCache`] names palette colors for display

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod material;
pub mod options;
pub mod palette;
pub mod pick;
pub mod picker;
pub mod ray;
pub mod scene;
pub mod side;
pub mod texture;
pub mod transform;
pub mod uv;

#[cfg(test)]
mod mock;

pub use color::Color;
pub use error::{PickError, Result};
pub use material::{FlatMaterial, Material};
pub use options::PickOptions;
pub use palette::{ColorNameCache, NAMED_COLORS};
pub use pick::{resolve, resolve_in_frame, PickResult};
pub use picker::Picker;
pub use ray::Ray;
pub use scene::{Face, Instance, PathEntity, RayHit, UvHelper, View};
pub use side::FaceSide;
pub use texture::{ImageRep, Texture, WrapMode};
pub use uv::Uvq;

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
