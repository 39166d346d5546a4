use bevy::prelude::*;

/// Ordering of the layout work done at the start of every frame.
///
/// Configured as a chain in `PreUpdate` by `AnchorsPlugin`, so systems in
/// `Update` already see anchored positions.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LayoutSchedule {
    /// Read the window and camera into `LayoutViewport`.
    SyncViewport,
    /// Turn anchor presets into behaviors.
    ResolvePresets,
    /// Move and resize anchored objects.
    Anchor,
}
