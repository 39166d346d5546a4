use {
    anchor_assets::{AnchorPresetLibrary, AnchorPresets},
    anchor_components::{AnchorBehavior, AnchorPreset},
    anchor_layout::{AnchorProperties, EdgeAnchor},
    anchors::*,
    bevy::{prelude::*, sprite::Anchor as SpriteOrigin},
    std::collections::HashMap,
    viewport_resources::LayoutViewport,
};

fn minimap() -> AnchorProperties {
    AnchorProperties::edges(
        EdgeAnchor::None,
        EdgeAnchor::MaxEdge,
        EdgeAnchor::None,
        EdgeAnchor::MaxEdge,
    )
}

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(AssetPlugin::default())
        .add_plugins(AnchorsPlugin::default())
        .add_plugins(AnchorPresetsPlugin::default())
        .insert_resource(LayoutViewport::new(Vec2::new(1000.0, 1000.0)));

    // Provide the library in memory so the startup loader leaves it alone.
    let library = AnchorPresetLibrary {
        presets: HashMap::from([("minimap".to_string(), minimap())]),
    };
    let handle = app
        .world_mut()
        .resource_mut::<Assets<AnchorPresetLibrary>>()
        .add(library);
    app.world_mut().resource_mut::<AnchorPresets>().library = handle;
    app
}

fn spawn_with_preset(app: &mut App, preset: &str) -> Entity {
    app.world_mut()
        .spawn((
            Sprite {
                custom_size: Some(Vec2::new(100.0, 50.0)),
                ..default()
            },
            SpriteOrigin::TOP_LEFT,
            Transform::default(),
            AnchorPreset::from(preset),
        ))
        .id()
}

#[test]
fn test_preset_becomes_behavior() {
    let mut app = setup_app();
    let entity = spawn_with_preset(&mut app, "minimap");

    app.update();

    let world = app.world();
    assert!(world.get::<AnchorPreset>(entity).is_none());
    assert_eq!(
        *world.get::<AnchorBehavior>(entity).unwrap().properties(),
        minimap()
    );
}

#[test]
fn test_unknown_preset_is_dropped() {
    let mut app = setup_app();
    let entity = spawn_with_preset(&mut app, "does_not_exist");

    app.update();

    let world = app.world();
    assert!(world.get::<AnchorPreset>(entity).is_none());
    assert!(world.get::<AnchorBehavior>(entity).is_none());
}

#[test]
fn test_preset_sprite_tracks_bottom_right_corner() {
    let mut app = setup_app();
    // Occupies viewport pixels (500, 500) to (600, 550).
    let entity = spawn_with_preset(&mut app, "minimap");

    // Preset resolved and distances captured in the same frame.
    app.update();
    app.world_mut().resource_mut::<LayoutViewport>().size = Vec2::new(1600.0, 1200.0);
    app.update();

    // 400 px from the right and 450 px from the bottom: (1100, 700) in
    // viewport pixels, which is (300, -100) in world space.
    assert_eq!(
        app.world().get::<Transform>(entity).unwrap().translation,
        Vec3::new(300.0, -100.0, 0.0)
    );
}

#[test]
fn test_anchor_measures_from_visible_edges() {
    let mut app = setup_app();
    app.world_mut().resource_mut::<LayoutViewport>().camera_center = Vec2::new(250.0, 0.0);
    let entity = spawn_with_preset(&mut app, "minimap");

    app.update();
    app.world_mut().resource_mut::<LayoutViewport>().size = Vec2::new(1600.0, 1200.0);
    app.update();

    // Visible right edge moves from world x = 750 to 1050; the sprite keeps
    // its 650 px gap to it.
    assert_eq!(
        app.world().get::<Transform>(entity).unwrap().translation,
        Vec3::new(300.0, -100.0, 0.0)
    );
}

#[test]
fn test_hud_bottom_bar_stays_on_bottom_edge() {
    let library: AnchorPresetLibrary =
        ron::from_str(include_str!("../../assets/anchors/hud.anchors.ron")).unwrap();
    assert!(!library.get("bottom_bar").unwrap().use_legacy_bottom_and_right_anchors);
    assert!(library.get("legacy_status").unwrap().use_legacy_bottom_and_right_anchors);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(AssetPlugin::default())
        .add_plugins(AnchorsPlugin::default())
        .add_plugins(AnchorPresetsPlugin::default())
        .insert_resource(LayoutViewport::new(Vec2::new(1280.0, 720.0)));
    let handle = app
        .world_mut()
        .resource_mut::<Assets<AnchorPresetLibrary>>()
        .add(library);
    app.world_mut().resource_mut::<AnchorPresets>().library = handle;

    let entity = app
        .world_mut()
        .spawn((
            Sprite {
                custom_size: Some(Vec2::new(1280.0, 40.0)),
                ..default()
            },
            SpriteOrigin::BOTTOM_LEFT,
            Transform::from_xyz(-640.0, -360.0, 0.0),
            AnchorPreset::from("bottom_bar"),
        ))
        .id();

    app.update();
    app.update();
    assert_eq!(
        app.world().get::<Transform>(entity).unwrap().translation,
        Vec3::new(-640.0, -360.0, 0.0)
    );

    app.world_mut().resource_mut::<LayoutViewport>().size = Vec2::new(1600.0, 900.0);
    app.update();

    let world = app.world();
    assert_eq!(
        world.get::<Transform>(entity).unwrap().translation,
        Vec3::new(-800.0, -450.0, 0.0)
    );
    assert_eq!(
        world.get::<Sprite>(entity).unwrap().custom_size,
        Some(Vec2::new(1600.0, 40.0))
    );
}
