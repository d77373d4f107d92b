//! Screen rays and ray/primitive intersection.

use glam::{Vec2, Vec3, Vec4};

use crate::camera::Camera;

/// Builds a world-space ray through a pixel position (origin top-left).
///
/// Returns `(origin, direction)` with the origin on the near plane and a
/// normalized direction, or `None` for an empty viewport.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn screen_ray(
    click_pos: Vec2,
    screen_width: u32,
    screen_height: u32,
    camera: &Camera,
) -> Option<(Vec3, Vec3)> {
    if screen_width == 0 || screen_height == 0 {
        return None;
    }

    let half_width = screen_width as f32 / 2.0;
    let half_height = screen_height as f32 / 2.0;
    let ndc_x = (click_pos.x / half_width) - 1.0;
    let ndc_y = 1.0 - (click_pos.y / half_height);

    let inv_view_proj = camera.view_projection_matrix().inverse();

    // NDC depth [0, 1]
    let near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
    let far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

    if near.w.abs() < 1e-6 || far.w.abs() < 1e-6 {
        return None;
    }

    let ray_origin = near.truncate() / near.w;
    let ray_far = far.truncate() / far.w;
    let ray_dir = (ray_far - ray_origin).normalize_or_zero();
    if ray_dir.length_squared() < 1e-12 {
        return None;
    }

    Some((ray_origin, ray_dir))
}

/// Möller–Trumbore ray/triangle intersection. Returns the ray parameter.
#[must_use]
pub fn ray_intersect_triangle(
    ray_origin: Vec3,
    ray_dir: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> Option<f32> {
    let eps = 1e-6;
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let h = ray_dir.cross(edge2);
    let a = edge1.dot(h);
    if a.abs() < eps {
        return None;
    }
    let f = 1.0 / a;
    let s = ray_origin - v0;
    let u = f * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = f * ray_dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = f * edge2.dot(q);
    if t > eps {
        Some(t)
    } else {
        None
    }
}

/// Nearest ray parameter over a polygon, triangulated as a fan from the
/// first vertex.
#[must_use]
pub fn ray_intersect_polygon(ray_origin: Vec3, ray_dir: Vec3, polygon: &[Vec3]) -> Option<f32> {
    let (&first, rest) = polygon.split_first()?;
    rest.windows(2)
        .filter_map(|pair| ray_intersect_triangle(ray_origin, ray_dir, first, pair[0], pair[1]))
        .min_by(f32::total_cmp)
}

/// Closest approach between a ray and the segment `a`–`b`.
///
/// Returns the ray parameter and the distance between the ray and the
/// segment there, or `None` when the closest point lies behind the origin.
#[must_use]
pub fn ray_segment_closest(ray_origin: Vec3, ray_dir: Vec3, a: Vec3, b: Vec3) -> Option<(f32, f32)> {
    let dir_len = ray_dir.length();
    if dir_len < 1e-12 {
        return None;
    }
    let dir = ray_dir / dir_len;

    let v = b - a;
    let c = v.dot(v);
    let w0 = ray_origin - a;
    let b_dot = dir.dot(v);
    let d = dir.dot(w0);
    let e = v.dot(w0);
    let denom = c - b_dot * b_dot;

    // Segment parameter of the closest point, clamped onto the segment.
    let s = if c < 1e-12 || denom.abs() < 1e-8 {
        0.0
    } else {
        ((e - b_dot * d) / denom).clamp(0.0, 1.0)
    };
    let on_segment = a + v * s;
    let t = dir.dot(on_segment - ray_origin);
    if t < 0.0 {
        return None;
    }
    let distance = (ray_origin + dir * t).distance(on_segment);
    Some((t / dir_len, distance))
}
