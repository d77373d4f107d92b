//! The host view: camera, viewport and model.

use colorpick_core::{Ray, RayHit, View};
use glam::Vec2;

use crate::camera::Camera;
use crate::model::{ComponentInstance, Model, SceneFace};
use crate::picking::screen_ray;

/// A model seen through a camera in a viewport of `width` x `height` pixels.
#[derive(Debug, Clone)]
pub struct SceneView {
    /// The viewing camera.
    pub camera: Camera,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// The viewed model.
    pub model: Model,
}

impl SceneView {
    /// Creates a view, matching the camera aspect ratio to the viewport.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(mut camera: Camera, width: u32, height: u32, model: Model) -> Self {
        if height > 0 {
            camera.set_aspect_ratio(width as f32 / height as f32);
        }
        Self {
            camera,
            width,
            height,
            model,
        }
    }

    /// Resizes the viewport.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if height > 0 {
            self.camera.set_aspect_ratio(width as f32 / height as f32);
        }
    }
}

impl View for SceneView {
    type Instance = ComponentInstance;
    type Face = SceneFace;

    fn pick_ray(&self, x: f32, y: f32) -> Option<Ray> {
        screen_ray(Vec2::new(x, y), self.width, self.height, &self.camera)
            .map(|(origin, direction)| Ray::new(origin, direction))
    }

    fn raytest(&self, ray: &Ray) -> Option<RayHit<'_, ComponentInstance, SceneFace>> {
        self.model.raytest(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_aspect_follows_viewport() {
        let mut view = SceneView::new(Camera::default(), 200, 100, Model::new());
        assert!((view.camera.aspect_ratio - 2.0).abs() < 1e-6);
        view.resize(100, 100);
        assert!((view.camera.aspect_ratio - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pick_ray_through_center() {
        let view = SceneView::new(Camera::default(), 200, 100, Model::new());
        let ray = view.pick_ray(100.0, 50.0).unwrap();
        assert!(ray.direction.abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn test_empty_viewport_has_no_ray() {
        let view = SceneView::new(Camera::default(), 0, 0, Model::new());
        assert!(view.pick_ray(0.0, 0.0).is_none());
    }
}
