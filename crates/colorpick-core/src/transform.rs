//! Accumulation of nested instance transforms.

use glam::Mat4;

use crate::error::{PickError, Result};
use crate::scene::Instance;

/// Composes instance transforms ordered root to leaf.
///
/// For a path `[A, B]` the result is `A * B`: a point in `B`'s frame is first
/// placed by `B` inside `A`, then by `A` in the world.
#[must_use]
pub fn compose<I>(transforms: I) -> Mat4
where
    I: IntoIterator<Item = Mat4>,
{
    transforms
        .into_iter()
        .fold(Mat4::IDENTITY, |to_global, local| to_global * local)
}

/// Transform from the leaf frame of `instances` to world space.
#[must_use]
pub fn to_global<T: Instance>(instances: &[&T]) -> Mat4 {
    compose(instances.iter().map(|instance| instance.transformation()))
}

/// Inverts `to_global`, failing when it is singular.
pub fn to_local(to_global: Mat4) -> Result<Mat4> {
    let det = to_global.determinant();
    if det == 0.0 || !det.is_finite() {
        return Err(PickError::SingularTransform);
    }
    Ok(to_global.inverse())
}

/// Transform from world space into the leaf frame of `instances`.
pub fn world_to_frame<T: Instance>(instances: &[&T]) -> Result<Mat4> {
    to_local(to_global(instances))
}
