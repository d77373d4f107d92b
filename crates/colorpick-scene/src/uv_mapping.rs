//! Planar projective UV parameterization of faces.

use colorpick_core::{UvHelper, Uvq};
use glam::{Mat4, Vec3, Vec4};

/// Maps local-space points to homogeneous texture coordinates.
///
/// `uvq = (row0 · p, row1 · p, row3 · p)` for `p = (x, y, z, 1)`; row 2 is
/// unused. An affine placement keeps row 3 at `(0, 0, 0, 1)`, a distorted
/// (perspective) placement does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvProjection {
    matrix: Mat4,
}

impl UvProjection {
    /// Creates a projection from a full matrix.
    #[must_use]
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Affine placement: `origin` maps to UV `(0, 0)`, `origin + u_axis` to
    /// `(1, 0)` and `origin + v_axis` to `(0, 1)`. The axes should be
    /// perpendicular.
    #[must_use]
    pub fn planar(origin: Vec3, u_axis: Vec3, v_axis: Vec3) -> Self {
        let u_row = u_axis / u_axis.length_squared();
        let v_row = v_axis / v_axis.length_squared();
        let rows = Mat4::from_cols(
            u_row.extend(-u_row.dot(origin)),
            v_row.extend(-v_row.dot(origin)),
            Vec4::ZERO,
            Vec4::W,
        );
        Self::from_matrix(rows.transpose())
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    /// Projects a local-space point.
    #[must_use]
    pub fn uvq(&self, local_point: Vec3) -> Uvq {
        let h = self.matrix * local_point.extend(1.0);
        Uvq::new(h.x, h.y, h.w)
    }
}

/// UV helper over the projections of a face's two sides.
///
/// A side that was not requested reports a degenerate UVQ (`q = 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarUvHelper {
    front: Option<UvProjection>,
    back: Option<UvProjection>,
}

impl PlanarUvHelper {
    /// Creates a helper for the given sides.
    #[must_use]
    pub fn new(front: Option<UvProjection>, back: Option<UvProjection>) -> Self {
        Self { front, back }
    }
}

fn project(projection: Option<&UvProjection>, local_point: Vec3) -> Uvq {
    projection.map_or(Uvq::new(0.0, 0.0, 0.0), |p| p.uvq(local_point))
}

impl UvHelper for PlanarUvHelper {
    fn front_uvq(&self, local_point: Vec3) -> Uvq {
        project(self.front.as_ref(), local_point)
    }

    fn back_uvq(&self, local_point: Vec3) -> Uvq {
        project(self.back.as_ref(), local_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_planar_corners() {
        let projection = UvProjection::planar(
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
        );
        let uv = |p: Vec3| projection.uvq(p).to_uv(0.0).unwrap();
        assert!(uv(Vec3::new(1.0, 1.0, 0.0)).abs_diff_eq(Vec2::ZERO, 1e-6));
        assert!(uv(Vec3::new(3.0, 1.0, 0.0)).abs_diff_eq(Vec2::X, 1e-6));
        assert!(uv(Vec3::new(1.0, 5.0, 0.0)).abs_diff_eq(Vec2::Y, 1e-6));
        assert!(uv(Vec3::new(2.0, 3.0, 0.0)).abs_diff_eq(Vec2::splat(0.5), 1e-6));
    }

    #[test]
    fn test_planar_is_affine() {
        let projection = UvProjection::planar(Vec3::ZERO, Vec3::X, Vec3::Y);
        let uvq = projection.uvq(Vec3::new(0.3, 0.7, 0.0));
        assert!((uvq.q - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projective_matrix_needs_divide() {
        // q grows with x: u = x / (1 + x)
        let rows = Mat4::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::ZERO,
            Vec4::new(1.0, 0.0, 0.0, 1.0),
        );
        let projection = UvProjection::from_matrix(rows.transpose());
        let uvq = projection.uvq(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(uvq, Uvq::new(1.0, 1.0, 2.0));
        assert_eq!(uvq.to_uv(0.0).unwrap(), Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_missing_side_is_degenerate() {
        let helper = PlanarUvHelper::new(Some(UvProjection::planar(Vec3::ZERO, Vec3::X, Vec3::Y)), None);
        assert!(helper.front_uvq(Vec3::ZERO).to_uv(0.0).is_ok());
        assert!(helper.back_uvq(Vec3::ZERO).to_uv(0.0).is_err());
    }
}
