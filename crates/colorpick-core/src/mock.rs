//! Minimal host scene used by unit tests.

use glam::{Mat4, Vec3};

use crate::material::Material;
use crate::ray::Ray;
use crate::scene::{Face, Instance, PathEntity, RayHit, UvHelper, View};
use crate::uv::Uvq;

pub struct MockInstance(pub Mat4);

impl Instance for MockInstance {
    fn transformation(&self) -> Mat4 {
        self.0
    }
}

#[derive(Clone, Copy)]
pub struct MockUvHelper {
    pub front: Uvq,
    pub back: Uvq,
}

impl UvHelper for MockUvHelper {
    fn front_uvq(&self, _local_point: Vec3) -> Uvq {
        self.front
    }

    fn back_uvq(&self, _local_point: Vec3) -> Uvq {
        self.back
    }
}

pub struct MockFace {
    pub normal: Vec3,
    pub front: Option<Material>,
    pub back: Option<Material>,
    pub uv: MockUvHelper,
}

impl MockFace {
    pub fn new(front: Option<Material>, back: Option<Material>) -> Self {
        Self {
            normal: Vec3::Z,
            front,
            back,
            uv: MockUvHelper {
                front: Uvq::new(0.5, 0.5, 1.0),
                back: Uvq::new(0.5, 0.5, 1.0),
            },
        }
    }
}

impl Face for MockFace {
    type UvHelper = MockUvHelper;

    fn normal(&self) -> Vec3 {
        self.normal
    }

    fn material(&self) -> Option<&Material> {
        self.front.as_ref()
    }

    fn back_material(&self) -> Option<&Material> {
        self.back.as_ref()
    }

    fn uv_helper(&self, _front: bool, _back: bool) -> MockUvHelper {
        self.uv
    }
}

/// What the mock raytest reports as the leaf entity.
pub enum Leaf {
    Face,
    Edge,
}

/// A view whose raytest always returns the same hit, or nothing.
pub struct MockView {
    pub ray: Option<Ray>,
    pub hit: Option<Vec3>,
    pub instances: Vec<MockInstance>,
    pub face: MockFace,
    pub leaf: Leaf,
}

impl MockView {
    /// Looks straight down at the face from above.
    pub fn looking_down(face: MockFace) -> Self {
        Self {
            ray: Some(Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z)),
            hit: Some(Vec3::ZERO),
            instances: Vec::new(),
            face,
            leaf: Leaf::Face,
        }
    }
}

impl View for MockView {
    type Instance = MockInstance;
    type Face = MockFace;

    fn pick_ray(&self, _x: f32, _y: f32) -> Option<Ray> {
        self.ray
    }

    fn raytest(&self, _ray: &Ray) -> Option<RayHit<'_, MockInstance, MockFace>> {
        let point = self.hit?;
        let mut path: Vec<_> = self.instances.iter().map(PathEntity::Instance).collect();
        path.push(match self.leaf {
            Leaf::Face => PathEntity::Face(&self.face),
            Leaf::Edge => PathEntity::Other("edge"),
        });
        Some(RayHit { point, path })
    }
}
