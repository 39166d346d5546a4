use {
    bevy::{log::LogPlugin, prelude::*},
    playground::PlaygroundPlugin,
};

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "error,anchors=debug,\
                        anchor_assets=info,\
                        playground=info"
                        .into(),
                    level: bevy::log::Level::TRACE,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        // The default 1280x720 resolution matches `DESIGN_VIEWPORT`.
                        title: "anchorage".into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(PlaygroundPlugin)
        .run();
}
