//! Capabilities the host scene must provide for picking.
//!
//! The host owns the scene graph. During a pick the core only borrows it:
//! - [`View`] turns screen coordinates into a [`Ray`] and intersects the scene
//! - [`Instance`] exposes a placement transform
//! - [`Face`] exposes its normal, materials and a [`UvHelper`]

use glam::{Mat4, Vec3};

use crate::material::Material;
use crate::ray::Ray;
use crate::side::FaceSide;
use crate::uv::Uvq;

/// A nested container placed in its parent's frame.
pub trait Instance {
    /// Transform from this instance's local frame to its parent's frame.
    fn transformation(&self) -> Mat4;
}

/// Projective texture parameterization of a face.
pub trait UvHelper {
    /// UVQ of a local-space point for the front material.
    fn front_uvq(&self, local_point: Vec3) -> Uvq;

    /// UVQ of a local-space point for the back material.
    fn back_uvq(&self, local_point: Vec3) -> Uvq;

    /// UVQ for the given side.
    fn uvq(&self, side: FaceSide, local_point: Vec3) -> Uvq {
        match side {
            FaceSide::Front => self.front_uvq(local_point),
            FaceSide::Back => self.back_uvq(local_point),
        }
    }
}

/// A planar polygonal face.
pub trait Face {
    /// UV helper type produced by [`Face::uv_helper`].
    type UvHelper: UvHelper;

    /// Face normal in the face's local frame.
    fn normal(&self) -> Vec3;

    /// Front material.
    fn material(&self) -> Option<&Material>;

    /// Back material.
    fn back_material(&self) -> Option<&Material>;

    /// Creates a UV helper valid for the requested sides.
    fn uv_helper(&self, front: bool, back: bool) -> Self::UvHelper;

    /// Material for the given side.
    fn material_for(&self, side: FaceSide) -> Option<&Material> {
        match side {
            FaceSide::Front => self.material(),
            FaceSide::Back => self.back_material(),
        }
    }
}

/// One entry of an instance path.
#[derive(Debug)]
pub enum PathEntity<'a, I, F> {
    /// A nested instance.
    Instance(&'a I),
    /// A face.
    Face(&'a F),
    /// Any other entity kind (edges, guides, ...), named for diagnostics.
    Other(&'static str),
}

impl<I, F> PathEntity<'_, I, F> {
    /// Short name of the entity kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PathEntity::Instance(_) => "instance",
            PathEntity::Face(_) => "face",
            PathEntity::Other(kind) => kind,
        }
    }
}

impl<I, F> Clone for PathEntity<'_, I, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, F> Copy for PathEntity<'_, I, F> {}

/// Nearest intersection of a ray with the scene.
#[derive(Debug)]
pub struct RayHit<'a, I, F> {
    /// World-space hit point.
    pub point: Vec3,
    /// Root-to-leaf path: the containing instances, then the hit entity.
    pub path: Vec<PathEntity<'a, I, F>>,
}

/// The host view: camera plus scene.
pub trait View {
    /// Instance type of the host scene.
    type Instance: Instance;
    /// Face type of the host scene.
    type Face: Face;

    /// Builds a world-space ray through the screen position `(x, y)`.
    fn pick_ray(&self, x: f32, y: f32) -> Option<Ray>;

    /// Finds the nearest entity hit by `ray`.
    fn raytest(&self, ray: &Ray) -> Option<RayHit<'_, Self::Instance, Self::Face>>;
}
