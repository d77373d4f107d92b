//! Projective UV coordinates.

use glam::{Vec2, Vec3};

use crate::error::{PickError, Result};

/// A homogeneous texture coordinate. The affine UV is `(u / q, v / q)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uvq {
    /// Homogeneous U.
    pub u: f32,
    /// Homogeneous V.
    pub v: f32,
    /// Projective divisor.
    pub q: f32,
}

impl Uvq {
    /// Creates a new UVQ triple.
    #[must_use]
    pub fn new(u: f32, v: f32, q: f32) -> Self {
        Self { u, v, q }
    }

    /// Creates an affine UVQ (`q = 1`).
    #[must_use]
    pub fn affine(uv: Vec2) -> Self {
        Self::new(uv.x, uv.y, 1.0)
    }

    /// Performs the perspective divide.
    ///
    /// `|q| <= q_epsilon` is rejected as degenerate, as is any division that
    /// does not produce finite values.
    pub fn to_uv(self, q_epsilon: f32) -> Result<Vec2> {
        if self.q.abs() <= q_epsilon {
            return Err(PickError::DegenerateUvq { q: self.q });
        }
        let uv = Vec2::new(self.u / self.q, self.v / self.q);
        if uv.is_finite() {
            Ok(uv)
        } else {
            Err(PickError::DegenerateUvq { q: self.q })
        }
    }
}

impl From<Vec3> for Uvq {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Uvq> for Vec3 {
    fn from(uvq: Uvq) -> Self {
        Vec3::new(uvq.u, uvq.v, uvq.q)
    }
}
