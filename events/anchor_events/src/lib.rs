use {anchor_layout::AnchorProperties, bevy::prelude::*};

pub struct AnchorEventsPlugin;

impl Plugin for AnchorEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AnchorPropertiesChanged>()
            .register_type::<AnchorActivationChanged>();
    }
}

/// Anchor properties of an entity were edited (property grid, scripts).
///
/// This **Observer** event is triggered via `commands.trigger`.
///
/// # Observers
/// - `anchors::systems::on_anchor_properties_changed`: swaps the properties on the
///   entity's `AnchorBehavior` and drops its stored distances if anything changed.
#[derive(Event, Reflect, Debug, Clone)]
#[reflect(Default)]
pub struct AnchorPropertiesChanged {
    pub entity: Entity,
    pub properties: AnchorProperties,
}

impl Default for AnchorPropertiesChanged {
    fn default() -> Self {
        Self {
            entity: Entity::PLACEHOLDER,
            properties: AnchorProperties::default(),
        }
    }
}

/// Turns anchoring on or off for an entity without removing its behavior.
///
/// Reactivated behaviors measure the object again on their next step, so the
/// position it was moved to while inactive becomes the anchored one.
#[derive(Event, Reflect, Debug, Clone)]
#[reflect(Default)]
pub struct AnchorActivationChanged {
    pub entity: Entity,
    pub active: bool,
}

impl Default for AnchorActivationChanged {
    fn default() -> Self {
        Self {
            entity: Entity::PLACEHOLDER,
            active: true,
        }
    }
}
