//! In-memory model: nested instances of faces and edges.

use colorpick_core::{Face, Instance, Material, PathEntity, Ray, RayHit};
use glam::{Mat4, Vec3};

use crate::picking::{ray_intersect_polygon, ray_segment_closest};
use crate::uv_mapping::{PlanarUvHelper, UvProjection};

/// A planar polygon with front and back materials.
#[derive(Debug, Clone)]
pub struct SceneFace {
    vertices: Vec<Vec3>,
    normal: Vec3,
    material: Option<Material>,
    back_material: Option<Material>,
    front_uv: UvProjection,
    back_uv: UvProjection,
    visible: bool,
}

impl SceneFace {
    /// Creates an unpainted face from vertices in the containing frame,
    /// wound counter-clockwise around the normal.
    ///
    /// The default UV placement maps the first vertex to `(0, 0)` and the
    /// first edge to the U axis, one texture repeat per unit length.
    #[must_use]
    pub fn new(vertices: Vec<Vec3>) -> Self {
        let normal = newell_normal(&vertices);
        let origin = vertices.first().copied().unwrap_or(Vec3::ZERO);
        let u_axis = vertices
            .get(1)
            .map_or(Vec3::X, |v| *v - origin)
            .normalize_or(Vec3::X);
        let v_axis = normal.cross(u_axis).normalize_or(Vec3::Y);
        let uv = UvProjection::planar(origin, u_axis, v_axis);
        Self {
            vertices,
            normal,
            material: None,
            back_material: None,
            front_uv: uv,
            back_uv: uv,
            visible: true,
        }
    }

    /// Sets the front material.
    #[must_use]
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Sets the back material.
    #[must_use]
    pub fn with_back_material(mut self, material: Material) -> Self {
        self.back_material = Some(material);
        self
    }

    /// Sets the texture placement of both sides.
    #[must_use]
    pub fn with_uv(mut self, projection: UvProjection) -> Self {
        self.front_uv = projection;
        self.back_uv = projection;
        self
    }

    /// Sets the texture placement of the back side.
    #[must_use]
    pub fn with_back_uv(mut self, projection: UvProjection) -> Self {
        self.back_uv = projection;
        self
    }

    /// Returns the polygon vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns whether the face takes part in picking.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the face.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Face for SceneFace {
    type UvHelper = PlanarUvHelper;

    fn normal(&self) -> Vec3 {
        self.normal
    }

    fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }

    fn back_material(&self) -> Option<&Material> {
        self.back_material.as_ref()
    }

    fn uv_helper(&self, front: bool, back: bool) -> PlanarUvHelper {
        PlanarUvHelper::new(
            front.then_some(self.front_uv),
            back.then_some(self.back_uv),
        )
    }
}

/// Unit normal of a polygon by Newell's method.
fn newell_normal(vertices: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for (i, current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        normal += Vec3::new(
            (current.y - next.y) * (current.z + next.z),
            (current.z - next.z) * (current.x + next.x),
            (current.x - next.x) * (current.y + next.y),
        );
    }
    normal.normalize_or_zero()
}

/// A line segment. Hit when the ray passes within the model's edge radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start point.
    pub start: Vec3,
    /// End point.
    pub end: Vec3,
}

/// A placed container of entities.
#[derive(Debug, Clone)]
pub struct ComponentInstance {
    name: String,
    transformation: Mat4,
    entities: Vec<Entity>,
    visible: bool,
}

impl ComponentInstance {
    /// Creates an empty instance placed by `transformation` in its parent.
    pub fn new(name: impl Into<String>, transformation: Mat4) -> Self {
        Self {
            name: name.into(),
            transformation,
            entities: Vec::new(),
            visible: true,
        }
    }

    /// Adds a child entity.
    #[must_use]
    pub fn with(mut self, entity: impl Into<Entity>) -> Self {
        self.entities.push(entity.into());
        self
    }

    /// Returns the instance name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the child entities.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Shows or hides the instance and everything in it.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Instance for ComponentInstance {
    fn transformation(&self) -> Mat4 {
        self.transformation
    }
}

/// Any entity of the model.
#[derive(Debug, Clone)]
pub enum Entity {
    /// A nested instance.
    Instance(ComponentInstance),
    /// A face.
    Face(SceneFace),
    /// An edge.
    Edge(Edge),
}

impl From<ComponentInstance> for Entity {
    fn from(instance: ComponentInstance) -> Self {
        Entity::Instance(instance)
    }
}

impl From<SceneFace> for Entity {
    fn from(face: SceneFace) -> Self {
        Entity::Face(face)
    }
}

impl From<Edge> for Entity {
    fn from(edge: Edge) -> Self {
        Entity::Edge(edge)
    }
}

/// Path to the nearest hit found so far.
type Candidate<'a> = (f32, Vec<PathEntity<'a, ComponentInstance, SceneFace>>);

/// The root of the entity hierarchy.
#[derive(Debug, Clone)]
pub struct Model {
    entities: Vec<Entity>,
    edge_pick_radius: f32,
}

impl Default for Model {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            edge_pick_radius: 0.01,
        }
    }
}

impl Model {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level entity.
    #[must_use]
    pub fn with(mut self, entity: impl Into<Entity>) -> Self {
        self.add(entity);
        self
    }

    /// Adds a top-level entity.
    pub fn add(&mut self, entity: impl Into<Entity>) {
        self.entities.push(entity.into());
    }

    /// Returns the top-level entities.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Sets how close a ray must pass to an edge to hit it.
    pub fn set_edge_pick_radius(&mut self, radius: f32) {
        self.edge_pick_radius = radius.max(0.0);
    }

    /// Finds the nearest visible entity along `ray`.
    ///
    /// The returned path lists the containing instances root to leaf, then
    /// the hit entity.
    #[must_use]
    pub fn raytest(&self, ray: &Ray) -> Option<RayHit<'_, ComponentInstance, SceneFace>> {
        let mut stack = Vec::new();
        let mut best: Option<Candidate<'_>> = None;
        self.visit(&self.entities, Mat4::IDENTITY, ray, &mut stack, &mut best);
        let (t, path) = best?;
        log::trace!("raytest hit at t = {t}, path depth {}", path.len());
        Some(RayHit {
            point: ray.at(t),
            path,
        })
    }

    fn visit<'a>(
        &'a self,
        entities: &'a [Entity],
        to_world: Mat4,
        ray: &Ray,
        stack: &mut Vec<&'a ComponentInstance>,
        best: &mut Option<Candidate<'a>>,
    ) {
        for entity in entities {
            let hit = match entity {
                Entity::Instance(instance) => {
                    if instance.visible {
                        stack.push(instance);
                        let child_to_world = to_world * instance.transformation;
                        self.visit(&instance.entities, child_to_world, ray, stack, best);
                        stack.pop();
                    }
                    continue;
                }
                Entity::Face(face) => {
                    if !face.visible {
                        continue;
                    }
                    let world: Vec<Vec3> = face
                        .vertices
                        .iter()
                        .map(|v| to_world.transform_point3(*v))
                        .collect();
                    ray_intersect_polygon(ray.origin, ray.direction, &world)
                        .map(|t| (t, PathEntity::Face(face)))
                }
                Entity::Edge(edge) => ray_segment_closest(
                    ray.origin,
                    ray.direction,
                    to_world.transform_point3(edge.start),
                    to_world.transform_point3(edge.end),
                )
                .filter(|(_, distance)| *distance <= self.edge_pick_radius)
                .map(|(t, _)| (t, PathEntity::Other("edge"))),
            };

            if let Some((t, leaf)) = hit {
                let is_better = best.as_ref().map_or(true, |(best_t, _)| t < *best_t);
                if is_better {
                    let mut path: Vec<_> = stack.iter().map(|i| PathEntity::Instance(*i)).collect();
                    path.push(leaf);
                    *best = Some((t, path));
                }
            }
        }
    }
}
