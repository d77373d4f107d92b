//! Configuration options for picking.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::texture::WrapMode;

/// Options controlling how picks are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickOptions {
    /// How UVs outside `[0, 1]` sample the texture.
    pub wrap_mode: WrapMode,

    /// UVQ divisors with `|q| <= q_epsilon` are treated as degenerate.
    pub q_epsilon: f32,

    /// Whether palette names are looked up for picked colors.
    pub resolve_color_names: bool,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            wrap_mode: WrapMode::Repeat,
            q_epsilon: 0.0,
            resolve_color_names: true,
        }
    }
}

impl PickOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the texture wrap mode.
    #[must_use]
    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    /// Sets the degenerate divisor tolerance.
    #[must_use]
    pub fn with_q_epsilon(mut self, q_epsilon: f32) -> Self {
        self.q_epsilon = q_epsilon.max(0.0);
        self
    }

    /// Enables or disables palette name lookup.
    #[must_use]
    pub fn with_color_names(mut self, enabled: bool) -> Self {
        self.resolve_color_names = enabled;
        self
    }

    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let options = Self::from_json(&text)?;
        log::debug!("loaded pick options from {}", path.as_ref().display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
