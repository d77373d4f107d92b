//! Screen-space picking against a host view.

use crate::error::{PickError, Result};
use crate::options::PickOptions;
use crate::pick::{self, PickResult};
use crate::scene::{Face, PathEntity, RayHit, View};
use crate::side::FaceSide;
use crate::transform;

/// Resolves the color under a screen position.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    options: PickOptions,
}

impl Picker {
    /// Creates a picker with the given options.
    #[must_use]
    pub fn new(options: PickOptions) -> Self {
        Self { options }
    }

    /// Returns the picker options.
    #[must_use]
    pub fn options(&self) -> &PickOptions {
        &self.options
    }

    /// Replaces the picker options.
    pub fn set_options(&mut self, options: PickOptions) {
        self.options = options;
    }

    /// Picks the color under `(x, y)`, or `None` when nothing usable is there.
    pub fn pick<V: View>(&self, x: f32, y: f32, view: &V) -> Option<PickResult> {
        match self.try_pick(x, y, view) {
            Ok(result) => Some(result),
            Err(err) => {
                log::debug!("no pick at ({x}, {y}): {err}");
                None
            }
        }
    }

    /// Picks the color under `(x, y)`, reporting why nothing was found.
    ///
    /// Front and back are decided in the face's local frame: the ray direction
    /// is carried through the inverse of the instance path before it is
    /// compared with the face normal. Without enclosing instances this is the
    /// plain world-space test.
    pub fn try_pick<V: View>(&self, x: f32, y: f32, view: &V) -> Result<PickResult> {
        let ray = view.pick_ray(x, y).ok_or(PickError::NoHit)?;
        let RayHit { point, mut path } = view.raytest(&ray).ok_or(PickError::NoHit)?;

        // The hit entity is last; everything before it must be an instance.
        let face = match path.pop() {
            Some(PathEntity::Face(face)) => face,
            Some(other) => return Err(PickError::NotAFace { kind: other.kind() }),
            None => return Err(PickError::NoHit),
        };
        let instances = path
            .iter()
            .map(|entity| match entity {
                PathEntity::Instance(instance) => Ok(*instance),
                other => Err(PickError::MalformedPath { kind: other.kind() }),
            })
            .collect::<Result<Vec<_>>>()?;

        // Compare in the face's frame: nested instances may rotate the face.
        let to_local = transform::world_to_frame(&instances).map_err(|err| {
            log::warn!("singular instance transform under ({x}, {y})");
            err
        })?;
        let local_direction = to_local.transform_vector3(ray.direction);
        let side = FaceSide::classify(face.normal(), local_direction);

        let material = face
            .material_for(side)
            .ok_or(PickError::NoMaterial { side })?;

        log::trace!(
            "hit {side} face at {point} through {} instance(s)",
            instances.len()
        );
        pick::resolve_in_frame(face, material, side, point, to_local, &self.options)
    }
}
