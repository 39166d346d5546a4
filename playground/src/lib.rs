use {
    anchors::{AnchorPresetsPlugin, AnchorsPlugin},
    bevy::prelude::*,
};

mod systems;

/// Window size the demo HUD was laid out for.
pub const DESIGN_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);

/// Demo scene: a HUD built from anchored sprites.
///
/// Resize the window to see the edges follow; press Space to toggle
/// anchoring on the minimap.
pub struct PlaygroundPlugin;

impl Plugin for PlaygroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            AnchorsPlugin {
                original_viewport: Some(DESIGN_VIEWPORT),
            },
            AnchorPresetsPlugin::default(),
        ))
        .add_systems(Startup, (setup_camera, systems::spawn_hud))
        .add_systems(Update, systems::toggle_minimap_anchoring);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
