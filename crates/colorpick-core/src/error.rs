//! Error types for colorpick-rs.

use thiserror::Error;

use crate::side::FaceSide;

/// The main error type for colorpick-rs operations.
///
/// Every pick failure is recoverable: the caller simply shows nothing for
/// that pointer position. [`crate::Picker::pick`] folds these into `None`.
#[derive(Error, Debug)]
pub enum PickError {
    /// The pick ray could not be built or intersected nothing.
    #[error("nothing under the cursor")]
    NoHit,

    /// The nearest hit entity is not a planar face.
    #[error("hit entity is a {kind}, not a face")]
    NotAFace { kind: &'static str },

    /// The struck side of the face has no material assigned.
    #[error("no material on the {side} side of the face")]
    NoMaterial { side: FaceSide },

    /// The homogeneous UV divisor is zero, or the division is not finite.
    #[error("degenerate UVQ coordinate (q = {q})")]
    DegenerateUvq { q: f32 },

    /// The accumulated instance transform cannot be inverted.
    #[error("instance transform is singular")]
    SingularTransform,

    /// An entity other than an instance sits between the root and the leaf.
    #[error("instance path contains a {kind} before the leaf entity")]
    MalformedPath { kind: &'static str },

    /// Pixel buffer does not match the declared image size.
    #[error("image size mismatch: expected {expected} pixels, got {actual}")]
    InvalidImage { expected: usize, actual: usize },

    /// Texture image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for colorpick-rs operations.
pub type Result<T> = std::result::Result<T, PickError>;
