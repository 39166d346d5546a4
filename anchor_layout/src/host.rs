//! The surface the anchor runtime needs from its host engine.
//!
//! Objects are described in their layer's coordinate space with `y` growing
//! downward. The host converts between that space and viewport pixels.

use crate::Axis;

/// Size of the viewport in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// An extent that can serve as a reference or target for anchoring.
    pub fn is_usable(&self, axis: Axis) -> bool {
        let extent = self.extent(axis);
        extent.is_finite() && extent > 0.0
    }
}

pub trait AnchorHost {
    /// Viewport size for the frame being simulated.
    fn viewport_size(&self) -> ViewportSize;

    /// Viewport size captured when the scene was loaded.
    fn original_viewport_size(&self) -> ViewportSize;

    /// Layer coordinates to viewport pixels, for a viewport of the given size.
    fn to_viewport(&self, x: f32, y: f32, _viewport: ViewportSize) -> (f32, f32) {
        (x, y)
    }

    /// Viewport pixels to layer coordinates, for a viewport of the given size.
    fn from_viewport(&self, x: f32, y: f32, _viewport: ViewportSize) -> (f32, f32) {
        (x, y)
    }
}

/// A positionable, resizable rectangle driven by an anchor.
///
/// `x`/`y` is the object's origin, `drawable_x`/`drawable_y` its top-left
/// corner. They differ for objects whose origin is not the top-left corner.
pub trait AnchoredObject {
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn drawable_x(&self) -> f32;
    fn drawable_y(&self) -> f32;
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
    fn set_width(&mut self, width: f32);
    fn set_height(&mut self, height: f32);
}

/// Per-axis view over an [`AnchoredObject`].
pub(crate) trait AxisAccess: AnchoredObject {
    fn position(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x(),
            Axis::Vertical => self.y(),
        }
    }

    fn drawable(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.drawable_x(),
            Axis::Vertical => self.drawable_y(),
        }
    }

    fn size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    fn set_position(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.set_x(value),
            Axis::Vertical => self.set_y(value),
        }
    }

    fn set_size(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.set_width(value),
            Axis::Vertical => self.set_height(value),
        }
    }
}

impl<T: AnchoredObject + ?Sized> AxisAccess for T {}
