//! In-memory host scene for colorpick-rs.
//!
//! Implements the host capabilities the core picks against:
//! - [`Camera`] and [`SceneView`] turn screen positions into pick rays
//! - [`Model`] holds nested [`ComponentInstance`]s of [`SceneFace`]s and [`Edge`]s
//! - [`UvProjection`] places textures on faces, affine or projective

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod model;
pub mod picking;
pub mod uv_mapping;
pub mod view;

pub use camera::{Camera, Projection};
pub use model::{ComponentInstance, Edge, Entity, Model, SceneFace};
pub use uv_mapping::{PlanarUvHelper, UvProjection};
pub use view::SceneView;
