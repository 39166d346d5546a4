use {
    crate::{AnchorPresetsSource, object::SpriteObject},
    anchor_assets::{AnchorPresetLibrary, AnchorPresets},
    anchor_components::{AnchorBehavior, AnchorPreset},
    anchor_events::{AnchorActivationChanged, AnchorPropertiesChanged},
    anchor_layout::StepOutcome,
    bevy::{prelude::*, sprite::Anchor as SpriteOrigin, window::PrimaryWindow},
    viewport_resources::LayoutViewport,
};

/// Copies the primary window size and the 2D camera into [`LayoutViewport`].
pub fn sync_layout_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Transform, With<Camera2d>>,
    mut viewport: ResMut<LayoutViewport>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let mut next = viewport.clone();
    next.size = Vec2::new(window.width(), window.height());
    if let Ok(camera) = cameras.single() {
        next.camera_center = camera.translation.truncate();
        next.camera_scale = camera.scale.x;
    }

    if next.original_size.is_none() && next.size.cmpgt(Vec2::ZERO).all() {
        info!("Original viewport size set to {}x{}", next.size.x, next.size.y);
        next.original_size = Some(next.size);
    }
    if next.size != viewport.size {
        info!("Viewport resized to {}x{}", next.size.x, next.size.y);
    }

    viewport.set_if_neq(next);
}

/// Runs one anchor step for every anchored sprite.
pub fn apply_anchors(
    viewport: Res<LayoutViewport>,
    mut query: Query<(
        Entity,
        &mut AnchorBehavior,
        &mut Transform,
        &mut Sprite,
        Option<&SpriteOrigin>,
    )>,
) {
    for (entity, mut behavior, mut transform, mut sprite, origin) in query.iter_mut() {
        let Some(size) = sprite.custom_size else {
            debug!("Anchored sprite {:?} has no custom_size, skipping", entity);
            continue;
        };

        let before = SpriteObject::new(
            transform.translation.truncate(),
            size,
            transform.scale.truncate(),
            origin.map_or(Vec2::ZERO, |origin| origin.as_vec()),
        );
        let mut object = before;

        match behavior.step(&*viewport, &mut object) {
            StepOutcome::Applied => {}
            StepOutcome::Captured => {
                debug!("Anchor distances captured for {:?}", entity);
                continue;
            }
            _ => continue,
        }

        if object.translation != before.translation {
            transform.translation.x = object.translation.x;
            transform.translation.y = object.translation.y;
        }
        if object.size != before.size {
            sprite.custom_size = Some(object.size);
        }
        trace!(
            "Anchored {:?} at {} with size {}",
            entity, object.translation, object.size
        );
    }
}

/// Swaps in edited properties; adds the behavior if the entity had none.
pub fn on_anchor_properties_changed(
    trigger: On<AnchorPropertiesChanged>,
    mut commands: Commands,
    mut behaviors: Query<&mut AnchorBehavior>,
) {
    let event = trigger.event();

    if let Ok(mut behavior) = behaviors.get_mut(event.entity) {
        if behavior.set_properties(event.properties) {
            debug!(
                "Anchor properties of {:?} changed, distances will be recaptured",
                event.entity
            );
        }
        return;
    }

    let Ok(mut entity) = commands.get_entity(event.entity) else {
        warn!(
            "Cannot update anchor properties of missing entity {:?}",
            event.entity
        );
        return;
    };
    entity.insert(AnchorBehavior::new(event.properties));
    debug!("Anchor behavior added to {:?}", event.entity);
}

pub fn on_anchor_activation_changed(
    trigger: On<AnchorActivationChanged>,
    mut behaviors: Query<&mut AnchorBehavior>,
) {
    let event = trigger.event();
    let Ok(mut behavior) = behaviors.get_mut(event.entity) else {
        warn!("Entity {:?} has no anchor behavior to toggle", event.entity);
        return;
    };

    if behavior.is_active() != event.active {
        behavior.set_active(event.active);
        debug!(
            "Anchor behavior of {:?} {}",
            event.entity,
            if event.active { "activated" } else { "deactivated" }
        );
    }
}

/// Loads the preset library unless one was provided already.
pub fn load_anchor_presets(
    source: Res<AnchorPresetsSource>,
    mut presets: ResMut<AnchorPresets>,
    asset_server: Res<AssetServer>,
) {
    if presets.library != Handle::default() {
        return;
    }
    info!("Loading anchor presets from {}", source.path);
    presets.library = asset_server.load(source.path.clone());
}

/// Replaces [`AnchorPreset`] markers with behaviors once the library is loaded.
pub fn resolve_anchor_presets(
    mut commands: Commands,
    presets: Res<AnchorPresets>,
    libraries: Res<Assets<AnchorPresetLibrary>>,
    pending: Query<(Entity, &AnchorPreset), Without<AnchorBehavior>>,
) {
    if pending.is_empty() {
        return;
    }
    let Some(library) = libraries.get(&presets.library) else {
        return;
    };

    for (entity, preset) in pending.iter() {
        let mut entity_commands = commands.entity(entity);
        entity_commands.remove::<AnchorPreset>();

        let Some(properties) = library.get(&preset.0) else {
            warn!("Unknown anchor preset '{}' on {:?}", preset.0, entity);
            continue;
        };
        entity_commands.insert(AnchorBehavior::new(*properties));
        debug!("Anchor preset '{}' applied to {:?}", preset.0, entity);
    }
}
