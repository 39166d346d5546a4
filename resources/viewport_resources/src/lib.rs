use {
    anchor_layout::{AnchorHost, ViewportSize},
    bevy::prelude::*,
};

/// The viewport anchored objects are laid out against.
///
/// Kept in sync with the primary window and the 2D camera by
/// `anchors::systems::sync_layout_viewport`; tests and headless apps write it
/// directly.
///
/// Anchor math works in layer coordinates with `y` growing downward, so this
/// resource exposes world positions with `y` negated.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource, Default)]
pub struct LayoutViewport {
    /// Current size in logical pixels.
    pub size: Vec2,
    /// Size the scene was designed for. Latched from the first observed
    /// window when not configured.
    pub original_size: Option<Vec2>,
    /// World position shown at the center of the viewport.
    pub camera_center: Vec2,
    /// World units per logical pixel.
    pub camera_scale: f32,
}

impl Default for LayoutViewport {
    fn default() -> Self {
        Self {
            size: Vec2::ZERO,
            original_size: None,
            camera_center: Vec2::ZERO,
            camera_scale: 1.0,
        }
    }
}

impl LayoutViewport {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            original_size: Some(size),
            ..Default::default()
        }
    }

    pub fn with_original_size(mut self, original_size: Vec2) -> Self {
        self.original_size = Some(original_size);
        self
    }

    fn scale(&self) -> f32 {
        if self.camera_scale.is_finite() && self.camera_scale > 0.0 {
            self.camera_scale
        } else {
            1.0
        }
    }
}

impl AnchorHost for LayoutViewport {
    fn viewport_size(&self) -> ViewportSize {
        ViewportSize::new(self.size.x, self.size.y)
    }

    fn original_viewport_size(&self) -> ViewportSize {
        let original = self.original_size.unwrap_or(self.size);
        ViewportSize::new(original.x, original.y)
    }

    fn to_viewport(&self, x: f32, y: f32, viewport: ViewportSize) -> (f32, f32) {
        let scale = self.scale();
        (
            (x - self.camera_center.x) / scale + viewport.width / 2.0,
            (y + self.camera_center.y) / scale + viewport.height / 2.0,
        )
    }

    fn from_viewport(&self, x: f32, y: f32, viewport: ViewportSize) -> (f32, f32) {
        let scale = self.scale();
        (
            (x - viewport.width / 2.0) * scale + self.camera_center.x,
            (y - viewport.height / 2.0) * scale - self.camera_center.y,
        )
    }
}
