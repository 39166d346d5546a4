use {
    anchor_layout::{
        AnchorHost, AnchorProperties, AnchorRuntime, AnchoredObject, EdgeAnchor, StepOutcome,
    },
    bevy::prelude::*,
};

pub struct AnchorComponentsPlugin;

impl Plugin for AnchorComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<AnchorBehavior>()
            .register_type::<AnchorPreset>()
            .register_type::<AnchorProperties>()
            .register_type::<EdgeAnchor>();
    }
}

/// Keeps a sprite's edges pinned to the viewport while it is resized.
///
/// The sprite needs a `custom_size`; its `Anchor` component is used as the
/// object's origin. The stored distances live in the runtime and are rebuilt
/// whenever the properties change or the behavior is reactivated.
///
/// # Usage
/// - **Per frame**: `anchors::systems::apply_anchors` calls [`AnchorBehavior::step`]
///   in `PreUpdate`, after the viewport has been synced.
/// - **Editing**: trigger `anchor_events::AnchorPropertiesChanged` instead of
///   rebuilding the component, so the runtime can decide what to reset.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component, Default)]
pub struct AnchorBehavior {
    properties: AnchorProperties,
    #[reflect(ignore)]
    runtime: AnchorRuntime,
}

impl AnchorBehavior {
    pub fn new(properties: AnchorProperties) -> Self {
        Self {
            runtime: AnchorRuntime::new(&properties),
            properties,
        }
    }

    pub fn properties(&self) -> &AnchorProperties {
        &self.properties
    }

    pub fn runtime(&self) -> &AnchorRuntime {
        &self.runtime
    }

    /// Replaces the properties. Returns `true` when something changed, in
    /// which case the next step captures fresh distances.
    pub fn set_properties(&mut self, properties: AnchorProperties) -> bool {
        let changed = self.runtime.reconfigure(&self.properties, &properties);
        self.properties = properties;
        changed
    }

    pub fn is_active(&self) -> bool {
        self.runtime.is_active()
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            self.runtime.activate();
        } else {
            self.runtime.deactivate();
        }
    }

    pub fn step<H, O>(&mut self, host: &H, object: &mut O) -> StepOutcome
    where
        H: AnchorHost + ?Sized,
        O: AnchoredObject + ?Sized,
    {
        self.runtime.step(&self.properties, host, object)
    }
}

impl From<AnchorProperties> for AnchorBehavior {
    fn from(properties: AnchorProperties) -> Self {
        Self::new(properties)
    }
}

/// Names an entry of the loaded `AnchorPresetLibrary`.
///
/// Replaced by an [`AnchorBehavior`] once the library is available.
#[derive(Component, Reflect, Debug, Clone, PartialEq, Default, Deref)]
#[reflect(Component, Default)]
pub struct AnchorPreset(pub String);

impl From<&str> for AnchorPreset {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, anchor_layout::OffsetStrategy};

    #[test]
    fn test_set_properties_reports_changes() {
        let properties = AnchorProperties::edges(
            EdgeAnchor::MinEdge,
            EdgeAnchor::None,
            EdgeAnchor::None,
            EdgeAnchor::None,
        );
        let mut behavior = AnchorBehavior::new(properties);
        assert!(!behavior.set_properties(properties));

        let legacy = properties.with_legacy_bottom_and_right_anchors(true);
        assert!(behavior.set_properties(legacy));
        assert_eq!(behavior.properties(), &legacy);
        assert_eq!(behavior.runtime().strategy(), OffsetStrategy::Legacy);
    }

    #[test]
    fn test_activation_round_trip() {
        let mut behavior = AnchorBehavior::default();
        assert!(behavior.is_active());
        behavior.set_active(false);
        assert!(!behavior.is_active());
        behavior.set_active(true);
        assert!(behavior.is_active());
    }

    #[test]
    fn test_preset_from_str() {
        let preset: AnchorPreset = "top_bar".into();
        assert_eq!(*preset, "top_bar");
    }
}
