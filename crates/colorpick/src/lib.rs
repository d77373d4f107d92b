//! colorpick-rs: resolve the texture color under the cursor on a 3D surface.
//!
//! For each pointer position the picker finds the visible face under the
//! cursor, maps the hit into the face's frame through the chain of nested
//! instances, recovers the projective UV coordinate and samples the texture.
//! Untextured faces report their flat material color.
//!
//! # Quick Start
//!
//! ```no_run
//! use colorpick::*;
//!
//! init_logging();
//!
//! let square = SceneFace::new(vec![
//!     Vec3::new(-1.0, -1.0, 0.0),
//!     Vec3::new(1.0, -1.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(-1.0, 1.0, 0.0),
//! ])
//! .with_material(Material::flat(Color::rgb(255, 0, 0), 1.0));
//! let view = SceneView::new(Camera::default(), 800, 600, Model::new().with(square));
//!
//! let mut tool = ColorPickerTool::default();
//! if let Some(pick) = tool.on_mouse_move(400.0, 300.0, &view) {
//!     println!("{}", pick.color);
//! }
//! ```

#![allow(clippy::must_use_candidate)]

pub mod tool;

pub use colorpick_core::{
    error::{PickError, Result},
    options::PickOptions,
    resolve, resolve_in_frame, Color, ColorNameCache, Face, FaceSide, FlatMaterial, ImageRep,
    Instance, Material, PathEntity, PickResult, Picker, Ray, RayHit, Texture, UvHelper, Uvq, View,
    WrapMode, NAMED_COLORS,
};
pub use colorpick_core::{Mat4, Vec2, Vec3, Vec4};
pub use colorpick_scene::{
    Camera, ComponentInstance, Edge, Entity, Model, PlanarUvHelper, Projection, SceneFace,
    SceneView, UvProjection,
};
pub use tool::{ColorPickerTool, HudText};

/// Initializes `env_logger` from `RUST_LOG`. Calling it again does nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
