//! Viewing camera used to turn pointer positions into pick rays.

use glam::{Mat4, Vec3};

/// How the camera projects the scene onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Pinhole projection with a vertical field of view in radians.
    Perspective { fov_y: f32 },
    /// Parallel projection showing `half_height` world units above and below
    /// the view axis.
    Orthographic { half_height: f32 },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y: std::f32::consts::FRAC_PI_4,
        }
    }
}

/// A camera looking at the model.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Projection.
    pub projection: Projection,
    /// Viewport width / height.
    pub aspect_ratio: f32,
    /// Near clipping distance; pick rays start on this plane.
    pub near: f32,
    /// Far clipping distance.
    pub far: f32,
}

impl Camera {
    /// Creates a perspective camera on +Z looking at the origin.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            projection: Projection::default(),
            aspect_ratio,
            near: 0.01,
            far: 1000.0,
        }
    }

    /// Places the camera at `position` looking at `target`.
    #[must_use]
    pub fn looking_at(mut self, position: Vec3, target: Vec3) -> Self {
        self.position = position;
        self.target = target;
        self
    }

    /// Switches to a parallel projection of the given half height.
    #[must_use]
    pub fn orthographic(mut self, half_height: f32) -> Self {
        self.projection = Projection::Orthographic {
            half_height: half_height.max(f32::EPSILON),
        };
        self
    }

    /// Sets the aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix (depth range `[0, 1]`).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fov_y } => {
                Mat4::perspective_rh(fov_y, self.aspect_ratio, self.near, self.far)
            }
            Projection::Orthographic { half_height } => {
                let half_width = half_height * self.aspect_ratio;
                Mat4::orthographic_rh(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.near,
                    self.far,
                )
            }
        }
    }

    /// Returns `projection * view`.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the unit viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
