//! Interactive color picker tool.
//!
//! The host delivers pointer-move events; each one replaces the previous pick
//! (last event wins). The HUD reads the stored result when it redraws.

use std::borrow::Cow;

use colorpick_core::{ColorNameCache, PickOptions, PickResult, Picker, View};
use glam::Vec2;

/// Label strings for the heads-up display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudText {
    /// Color channels, e.g. `RGBA: 255, 0, 0, 191`.
    pub rgba: String,
    /// Quoted palette name, when the color has one.
    pub name: Option<String>,
    /// Texture coordinate with four decimals, when the material is textured.
    pub uv: Option<String>,
}

impl HudText {
    /// Formats the labels for a pick.
    #[must_use]
    pub fn new(pick: &PickResult, name: Option<&str>) -> Self {
        Self {
            rgba: format!("RGBA: {}", pick.color),
            name: name.map(|name| format!("\"{name}\"")),
            uv: pick.uv.map(|uv| format!("UV: {:.4}, {:.4}", uv.x, uv.y)),
        }
    }
}

/// Picks the color under the pointer on every move.
#[derive(Debug, Clone)]
pub struct ColorPickerTool {
    picker: Picker,
    names: Cow<'static, ColorNameCache>,
    pick: Option<PickResult>,
    hud_position: Vec2,
}

impl Default for ColorPickerTool {
    fn default() -> Self {
        Self::new(PickOptions::default())
    }
}

impl ColorPickerTool {
    /// Creates a tool using the shared palette name cache.
    #[must_use]
    pub fn new(options: PickOptions) -> Self {
        Self {
            picker: Picker::new(options),
            names: Cow::Borrowed(ColorNameCache::global()),
            pick: None,
            hud_position: Vec2::ZERO,
        }
    }

    /// Uses `names` instead of the shared palette cache.
    #[must_use]
    pub fn with_color_names(mut self, names: ColorNameCache) -> Self {
        self.names = Cow::Owned(names);
        self
    }

    /// Returns the picker.
    #[must_use]
    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Resets the tool when it becomes active.
    pub fn activate(&mut self) {
        self.pick = None;
        self.hud_position = Vec2::ZERO;
        log::debug!("color picker activated");
    }

    /// Drops the last pick when the tool is put away.
    pub fn deactivate(&mut self) {
        self.pick = None;
        log::debug!("color picker deactivated");
    }

    /// Picks at the pointer position and anchors the HUD there.
    pub fn on_mouse_move<V: View>(&mut self, x: f32, y: f32, view: &V) -> Option<&PickResult> {
        self.pick = self.picker.pick(x, y, view);
        self.hud_position = Vec2::new(x, y);
        self.pick.as_ref()
    }

    /// Returns the last pick, if the pointer was over a colored surface.
    #[must_use]
    pub fn pick_data(&self) -> Option<&PickResult> {
        self.pick.as_ref()
    }

    /// Returns the pointer position of the last move.
    #[must_use]
    pub fn hud_position(&self) -> Vec2 {
        self.hud_position
    }

    /// Returns the palette name of the last picked color.
    #[must_use]
    pub fn color_name(&self) -> Option<&str> {
        if !self.picker.options().resolve_color_names {
            return None;
        }
        self.pick.as_ref()?.color_name(&self.names)
    }

    /// Returns the HUD labels for the last pick.
    #[must_use]
    pub fn hud_text(&self) -> Option<HudText> {
        let pick = self.pick.as_ref()?;
        Some(HudText::new(pick, self.color_name()))
    }
}
