use {
    anchor_assets::AnchorAssetsPlugin,
    anchor_components::AnchorComponentsPlugin,
    anchor_events::AnchorEventsPlugin,
    bevy::prelude::*,
    system_schedule::LayoutSchedule,
    viewport_resources::LayoutViewport,
};

pub mod object;
pub mod systems;


pub use object::SpriteObject;

/// Anchors sprites to the edges of the primary window.
///
/// Every frame, in `PreUpdate`:
/// 1. [`LayoutSchedule::SyncViewport`] copies the window and camera into [`LayoutViewport`].
/// 2. [`LayoutSchedule::ResolvePresets`] turns `AnchorPreset` markers into behaviors
///    (only with [`AnchorPresetsPlugin`]).
/// 3. [`LayoutSchedule::Anchor`] moves and resizes every `AnchorBehavior` sprite.
#[derive(Default)]
pub struct AnchorsPlugin {
    /// Size the scene was designed for. `None` latches the first window size.
    pub original_viewport: Option<Vec2>,
}

impl Plugin for AnchorsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((AnchorComponentsPlugin, AnchorEventsPlugin))
            .init_resource::<LayoutViewport>()
            .register_type::<LayoutViewport>()
            .configure_sets(
                PreUpdate,
                (
                    LayoutSchedule::SyncViewport,
                    LayoutSchedule::ResolvePresets,
                    LayoutSchedule::Anchor,
                )
                    .chain(),
            )
            .add_systems(
                PreUpdate,
                (
                    systems::sync_layout_viewport.in_set(LayoutSchedule::SyncViewport),
                    systems::apply_anchors.in_set(LayoutSchedule::Anchor),
                ),
            )
            .add_observer(systems::on_anchor_properties_changed)
            .add_observer(systems::on_anchor_activation_changed);

        if let Some(original) = self.original_viewport {
            app.world_mut()
                .resource_mut::<LayoutViewport>()
                .original_size = Some(original);
        }
    }
}

/// Loads named anchor presets and resolves `AnchorPreset` markers against them.
pub struct AnchorPresetsPlugin {
    /// Asset path of the `.anchors.ron` library.
    pub path: String,
}

impl Default for AnchorPresetsPlugin {
    fn default() -> Self {
        Self {
            path: "anchors/hud.anchors.ron".to_string(),
        }
    }
}

impl Plugin for AnchorPresetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AnchorAssetsPlugin)
            .insert_resource(AnchorPresetsSource {
                path: self.path.clone(),
            })
            .add_systems(Startup, systems::load_anchor_presets)
            .add_systems(
                PreUpdate,
                systems::resolve_anchor_presets.in_set(LayoutSchedule::ResolvePresets),
            );
    }
}

/// Where [`AnchorPresetsPlugin`] loads its library from.
#[derive(Resource, Debug, Clone)]
pub struct AnchorPresetsSource {
    pub path: String,
}
