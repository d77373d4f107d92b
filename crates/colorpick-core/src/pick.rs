//! Pick results and UV/color resolution for a struck face.

use glam::{Mat4, Vec2, Vec3};

use crate::color::Color;
use crate::error::Result;
use crate::material::Material;
use crate::options::PickOptions;
use crate::palette::ColorNameCache;
use crate::scene::{Face, Instance, UvHelper};
use crate::side::FaceSide;
use crate::transform;

/// The color found under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct PickResult {
    /// Resolved color.
    pub color: Color,

    /// Texture coordinate, present only for textured materials.
    pub uv: Option<Vec2>,

    /// World-space hit point, present only for textured materials.
    pub world_point: Option<Vec3>,

    /// Hit point in the face's local frame, present only for textured materials.
    pub local_point: Option<Vec3>,
}

impl PickResult {
    /// Creates a result carrying only a flat color.
    #[must_use]
    pub fn flat(color: Color) -> Self {
        Self {
            color,
            uv: None,
            world_point: None,
            local_point: None,
        }
    }

    /// Looks up the palette name of the resolved color.
    #[must_use]
    pub fn color_name<'a>(&self, names: &'a ColorNameCache) -> Option<&'a str> {
        names.name_of(self.color)
    }
}

/// Resolves the color of `material` at a world-space point on `face`.
///
/// `instances` is the path from the scene root down to the instance that
/// directly contains the face, excluding the face itself.
///
/// Untextured materials yield their flat color with alpha taken from the
/// material opacity. Textured materials are sampled at the UV recovered from
/// the face's projective parameterization.
pub fn resolve<F, I>(
    face: &F,
    material: &Material,
    side: FaceSide,
    world_point: Vec3,
    instances: &[&I],
    options: &PickOptions,
) -> Result<PickResult>
where
    F: Face,
    I: Instance,
{
    if material.texture().is_none() {
        return Ok(PickResult::flat(material.base().display_color()));
    }
    let to_local = transform::world_to_frame(instances)?;
    resolve_in_frame(face, material, side, world_point, to_local, options)
}

/// Like [`resolve`], with the world-to-face transform already inverted.
pub fn resolve_in_frame<F: Face>(
    face: &F,
    material: &Material,
    side: FaceSide,
    world_point: Vec3,
    to_local: Mat4,
    options: &PickOptions,
) -> Result<PickResult> {
    let Some(texture) = material.texture() else {
        return Ok(PickResult::flat(material.base().display_color()));
    };

    let local_point = to_local.transform_point3(world_point);
    let helper = face.uv_helper(true, true);
    let uvq = helper.uvq(side, local_point);
    let uv = uvq.to_uv(options.q_epsilon)?;

    let color = texture.image_rep().color_at_uv(uv, options.wrap_mode);
    log::trace!(
        "sampled '{}' at uv ({:.4}, {:.4}) -> {color}",
        texture.name(),
        uv.x,
        uv.y
    );

    Ok(PickResult {
        color,
        uv: Some(uv),
        world_point: Some(world_point),
        local_point: Some(local_point),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Mat4;

    use super::*;
    use crate::error::PickError;
    use crate::mock::{MockFace, MockInstance};
    use crate::texture::{ImageRep, Texture, WrapMode};
    use crate::uv::Uvq;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    /// 3x3 texture: green center, red elsewhere, blue bottom-left corner.
    fn texture() -> Arc<Texture> {
        let mut pixels = vec![RED; 9];
        pixels[4] = GREEN;
        pixels[6] = BLUE;
        Arc::new(Texture::new("test", ImageRep::new(3, 3, pixels).unwrap()))
    }

    fn textured() -> Material {
        Material::textured(Color::WHITE, 1.0, texture())
    }

    #[test]
    fn test_flat_material_uses_alpha_multiplier() {
        let material = Material::flat(Color::new(255, 0, 0, 10), 0.75);
        let face = MockFace::new(Some(material.clone()), None);
        let result = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[],
            &PickOptions::default(),
        )
        .unwrap();

        assert_eq!(result.color, Color::new(255, 0, 0, 191));
        assert!(result.uv.is_none());
        assert!(result.world_point.is_none());
    }

    #[test]
    fn test_flat_material_ignores_zero_color_alpha() {
        let material = Material::flat(Color::new(12, 34, 56, 0), 1.0);
        let face = MockFace::new(Some(material.clone()), None);
        let result = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[],
            &PickOptions::default(),
        )
        .unwrap();
        assert_eq!(result.color.a, 255);
    }

    #[test]
    fn test_textured_samples_center() {
        let material = textured();
        let face = MockFace::new(Some(material.clone()), None);
        let world = Vec3::new(0.1, 0.2, 0.0);
        let result = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            world,
            &[],
            &PickOptions::default(),
        )
        .unwrap();

        assert_eq!(result.uv, Some(Vec2::new(0.5, 0.5)));
        assert_eq!(result.color, GREEN);
        assert_eq!(result.world_point, Some(world));
        assert_eq!(result.local_point, Some(world));
    }

    #[test]
    fn test_side_selects_uvq() {
        let material = textured();
        let mut face = MockFace::new(Some(material.clone()), Some(material.clone()));
        face.uv.back = Uvq::new(0.2, 0.2, 2.0);

        let back = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Back,
            Vec3::ZERO,
            &[],
            &PickOptions::default(),
        )
        .unwrap();
        assert_eq!(back.uv, Some(Vec2::new(0.1, 0.1)));
        assert_eq!(back.color, BLUE);
    }

    #[test]
    fn test_degenerate_uvq_is_error() {
        let material = textured();
        let mut face = MockFace::new(Some(material.clone()), None);
        face.uv.front = Uvq::new(1.0, 1.0, 0.0);

        let err = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[],
            &PickOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PickError::DegenerateUvq { .. }));
    }

    #[test]
    fn test_local_point_uses_instance_chain() {
        let material = textured();
        let face = MockFace::new(Some(material.clone()), None);
        let outer = MockInstance(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        let inner = MockInstance(Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));

        let result = resolve(
            &face,
            &material,
            FaceSide::Front,
            Vec3::new(10.0, 1.0, 0.0),
            &[&outer, &inner],
            &PickOptions::default(),
        )
        .unwrap();

        let local = result.local_point.unwrap();
        assert!(local.abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_resolve_in_frame_matches_instance_path() {
        let material = textured();
        let face = MockFace::new(Some(material.clone()), None);
        let outer = MockInstance(Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0)));
        let inner = MockInstance(Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2));
        let world = Vec3::new(10.0, 1.0, 0.0);
        let options = PickOptions::default();

        let to_local = (Mat4::from_translation(Vec3::new(10.0, 0.0, 0.0))
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2))
        .inverse();
        let framed =
            resolve_in_frame(&face, &material, FaceSide::Front, world, to_local, &options)
                .unwrap();
        let pathed = resolve(
            &face,
            &material,
            FaceSide::Front,
            world,
            &[&outer, &inner],
            &options,
        )
        .unwrap();

        assert!(framed
            .local_point
            .unwrap()
            .abs_diff_eq(pathed.local_point.unwrap(), 1e-5));
        assert_eq!(framed.color, pathed.color);
    }

    #[test]
    fn test_flat_material_skips_singular_path() {
        let material = Material::flat(RED, 1.0);
        let face = MockFace::new(Some(material.clone()), None);
        let flat = MockInstance(Mat4::from_scale(Vec3::new(1.0, 1.0, 0.0)));
        let result = resolve(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[&flat],
            &PickOptions::default(),
        )
        .unwrap();
        assert_eq!(result.color, RED);
    }

    #[test]
    fn test_wrap_mode_applies_out_of_range() {
        let material = textured();
        let mut face = MockFace::new(Some(material.clone()), None);
        // u = 1.1: repeats to the left column, clamps to the right column.
        face.uv.front = Uvq::new(1.1, 0.1, 1.0);

        let repeat = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[],
            &PickOptions::default().with_wrap_mode(WrapMode::Repeat),
        )
        .unwrap();
        assert_eq!(repeat.color, BLUE);

        let clamp = resolve::<_, MockInstance>(
            &face,
            &material,
            FaceSide::Front,
            Vec3::ZERO,
            &[],
            &PickOptions::default().with_wrap_mode(WrapMode::Clamp),
        )
        .unwrap();
        assert_eq!(clamp.color, RED);
        assert_eq!(clamp.uv, repeat.uv);
    }

    #[test]
    fn test_color_name() {
        let result = PickResult::flat(RED);
        assert_eq!(result.color_name(&ColorNameCache::standard()), Some("Red"));
        let result = PickResult::flat(RED.with_alpha(10));
        assert_eq!(result.color_name(&ColorNameCache::standard()), None);
    }
}
