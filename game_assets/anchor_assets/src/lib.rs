use {
    anchor_layout::AnchorProperties,
    bevy::prelude::*,
    bevy_common_assets::ron::RonAssetPlugin,
    serde::{Deserialize, Serialize},
    std::collections::HashMap,
};

pub struct AnchorAssetsPlugin;

impl Plugin for AnchorAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<AnchorPresetLibrary>::new(&["anchors.ron"]))
            .init_resource::<AnchorPresets>();
    }
}

/// Named anchor configurations loaded from `.anchors.ron`.
///
/// ```ron
/// (
///     presets: {
///         "top_bar": (
///             leftEdgeAnchor: 1,
///             rightEdgeAnchor: 2,
///             topEdgeAnchor: 1,
///             useLegacyBottomAndRightAnchors: false,
///         ),
///     },
/// )
/// ```
#[derive(Asset, TypePath, Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnchorPresetLibrary {
    pub presets: HashMap<String, AnchorProperties>,
}

impl AnchorPresetLibrary {
    pub fn get(&self, name: &str) -> Option<&AnchorProperties> {
        self.presets.get(name)
    }
}

/// Handle to the preset library used by the current app.
#[derive(Resource, Default)]
pub struct AnchorPresets {
    pub library: Handle<AnchorPresetLibrary>,
}
