use {
    anchor_components::{AnchorBehavior, AnchorPreset},
    anchor_events::AnchorActivationChanged,
    anchor_layout::{AnchorProperties, EdgeAnchor},
    bevy::{prelude::*, sprite::Anchor as SpriteOrigin},
};

/// Marks the sprite Space toggles.
#[derive(Component)]
pub struct Minimap;

pub fn spawn_hud(mut commands: Commands) {
    info!("spawning HUD");

    // Positions are world coordinates for the 1280x720 design viewport.
    commands.spawn((
        Name::new("Top bar"),
        Sprite::from_color(Color::srgb(0.15, 0.18, 0.25), Vec2::new(1280.0, 40.0)),
        SpriteOrigin::TOP_LEFT,
        Transform::from_xyz(-640.0, 360.0, 1.0),
        AnchorBehavior::new(AnchorProperties::edges(
            EdgeAnchor::MinEdge,
            EdgeAnchor::MaxEdge,
            EdgeAnchor::MinEdge,
            EdgeAnchor::None,
        )),
    ));

    commands.spawn((
        Name::new("Minimap"),
        Minimap,
        Sprite::from_color(Color::srgb(0.2, 0.45, 0.3), Vec2::new(200.0, 150.0)),
        SpriteOrigin::TOP_LEFT,
        Transform::from_xyz(420.0, -190.0, 1.0),
        AnchorBehavior::new(
            AnchorProperties::edges(
                EdgeAnchor::None,
                EdgeAnchor::MaxEdge,
                EdgeAnchor::None,
                EdgeAnchor::MaxEdge,
            )
            .with_relative_to_original_window_size(false),
        ),
    ));

    commands.spawn((
        Name::new("Title"),
        Sprite::from_color(Color::srgb(0.8, 0.7, 0.3), Vec2::new(400.0, 60.0)),
        Transform::from_xyz(0.0, 280.0, 1.0),
        AnchorBehavior::new(AnchorProperties::edges(
            EdgeAnchor::Center,
            EdgeAnchor::Center,
            EdgeAnchor::MinEdge,
            EdgeAnchor::None,
        )),
    ));

    commands.spawn((
        Name::new("Side panel"),
        Sprite::from_color(Color::srgba(0.3, 0.3, 0.4, 0.8), Vec2::new(320.0, 400.0)),
        Transform::from_xyz(-400.0, 0.0, 0.0),
        AnchorBehavior::new(AnchorProperties::edges(
            EdgeAnchor::Proportional,
            EdgeAnchor::Proportional,
            EdgeAnchor::Proportional,
            EdgeAnchor::Proportional,
        )),
    ));

    // Resolved once `hud.anchors.ron` is loaded.
    commands.spawn((
        Name::new("Bottom bar"),
        Sprite::from_color(Color::srgb(0.15, 0.18, 0.25), Vec2::new(1280.0, 40.0)),
        SpriteOrigin::BOTTOM_LEFT,
        Transform::from_xyz(-640.0, -360.0, 1.0),
        AnchorPreset::from("bottom_bar"),
    ));

    commands.spawn((
        Name::new("Status"),
        Sprite::from_color(Color::srgb(0.6, 0.25, 0.25), Vec2::new(120.0, 30.0)),
        SpriteOrigin::TOP_LEFT,
        Transform::from_xyz(500.0, -280.0, 2.0),
        AnchorPreset::from("legacy_status"),
    ));
}

pub fn toggle_minimap_anchoring(
    keyboard: Res<ButtonInput<KeyCode>>,
    minimap: Query<(Entity, &AnchorBehavior), With<Minimap>>,
    mut commands: Commands,
) {
    if !keyboard.just_pressed(KeyCode::Space) {
        return;
    }
    let Ok((entity, behavior)) = minimap.single() else {
        return;
    };

    let active = !behavior.is_active();
    info!(
        "Minimap anchoring {}",
        if active { "enabled" } else { "disabled" }
    );
    commands.trigger(AnchorActivationChanged { entity, active });
}
