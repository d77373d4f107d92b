//! Front/back side classification of a struck face.

use std::fmt;

use glam::Vec3;

/// Which side of a face a pick ray struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceSide {
    /// The side the face normal points out of.
    Front,
    /// The opposite side.
    Back,
}

impl FaceSide {
    /// Classifies the struck side from the face normal and the ray direction.
    ///
    /// The ray hits the front only when it travels against the normal
    /// (`normal · direction < 0`). A grazing ray (dot product exactly zero)
    /// counts as a back hit.
    #[must_use]
    pub fn classify(normal: Vec3, ray_direction: Vec3) -> Self {
        if normal.dot(ray_direction) < 0.0 {
            FaceSide::Front
        } else {
            FaceSide::Back
        }
    }

    /// Returns true for [`FaceSide::Front`].
    #[must_use]
    pub fn is_front(self) -> bool {
        self == FaceSide::Front
    }
}

impl fmt::Display for FaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaceSide::Front => f.write_str("front"),
            FaceSide::Back => f.write_str("back"),
        }
    }
}
