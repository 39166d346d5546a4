use {anchor_layout::AnchoredObject, bevy::prelude::*};

/// A sprite seen through the anchor runtime's layer coordinates.
///
/// Values are copied out of the ECS so untouched sprites do not trip change
/// detection; [`SpriteObject::translation`] and [`SpriteObject::size`] are
/// written back by the caller when they differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteObject {
    /// World position of the sprite's origin.
    pub translation: Vec2,
    /// `Sprite::custom_size`, before the transform's scale is applied.
    pub size: Vec2,
    pub scale: Vec2,
    /// The sprite `Anchor`: origin relative to the sprite center, as a
    /// fraction of its size with `y` pointing up.
    pub origin: Vec2,
}

impl SpriteObject {
    pub fn new(translation: Vec2, size: Vec2, scale: Vec2, origin: Vec2) -> Self {
        Self {
            translation,
            size,
            scale,
            origin,
        }
    }

    fn scaled_size(&self) -> Vec2 {
        self.size * self.scale.abs()
    }

    fn center(&self) -> Vec2 {
        self.translation - self.origin * self.scaled_size()
    }
}

impl AnchoredObject for SpriteObject {
    fn x(&self) -> f32 {
        self.translation.x
    }

    fn y(&self) -> f32 {
        -self.translation.y
    }

    fn drawable_x(&self) -> f32 {
        self.center().x - self.width() / 2.0
    }

    fn drawable_y(&self) -> f32 {
        -(self.center().y + self.height() / 2.0)
    }

    fn width(&self) -> f32 {
        self.scaled_size().x
    }

    fn height(&self) -> f32 {
        self.scaled_size().y
    }

    fn set_x(&mut self, x: f32) {
        self.translation.x = x;
    }

    fn set_y(&mut self, y: f32) {
        self.translation.y = -y;
    }

    fn set_width(&mut self, width: f32) {
        let scale = self.scale.x.abs();
        if scale > 0.0 {
            self.size.x = width / scale;
        }
    }

    fn set_height(&mut self, height: f32) {
        let scale = self.scale.y.abs();
        if scale > 0.0 {
            self.size.y = height / scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_sprite_box() {
        let object = SpriteObject::new(
            Vec2::new(10.0, 20.0),
            Vec2::new(40.0, 30.0),
            Vec2::ONE,
            Vec2::ZERO,
        );
        assert_eq!(object.drawable_x(), -10.0);
        // Top edge is at world y = 35, layer y = -35.
        assert_eq!(object.drawable_y(), -35.0);
        assert_eq!((object.x(), object.y()), (10.0, -20.0));
    }

    #[test]
    fn test_top_left_origin_matches_position() {
        let object = SpriteObject::new(
            Vec2::new(-5.0, 8.0),
            Vec2::new(10.0, 10.0),
            Vec2::ONE,
            Vec2::new(-0.5, 0.5),
        );
        assert_eq!(object.drawable_x(), object.x());
        assert_eq!(object.drawable_y(), object.y());
    }

    #[test]
    fn test_size_accounts_for_scale() {
        let mut object = SpriteObject::new(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            Vec2::new(2.0, -3.0),
            Vec2::ZERO,
        );
        assert_eq!((object.width(), object.height()), (20.0, 30.0));

        object.set_width(50.0);
        object.set_height(60.0);
        assert_eq!(object.size, Vec2::new(25.0, 20.0));
    }

    #[test]
    fn test_zero_scale_keeps_size() {
        let mut object = SpriteObject::new(
            Vec2::ZERO,
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 1.0),
            Vec2::ZERO,
        );
        object.set_width(50.0);
        assert_eq!(object.size.x, 10.0);
    }
}
