use {
    crate::AnchorDataError,
    serde::{Deserialize, Serialize},
};

/// How one edge of an object follows the viewport.
///
/// The integer values are the on-disk representation and must never change:
/// projects store each edge as a small integer.
///
/// | value | variant        | left / right edge | top / bottom edge |
/// |-------|----------------|-------------------|-------------------|
/// | 0     | `None`         | no anchor         | no anchor         |
/// | 1     | `MinEdge`      | window left       | window top        |
/// | 2     | `MaxEdge`      | window right      | window bottom     |
/// | 3     | `Proportional` | proportional      | proportional      |
/// | 4     | `Center`       | window center     | window center     |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy::reflect::Reflect))]
#[serde(try_from = "u8", into = "u8")]
pub enum EdgeAnchor {
    #[default]
    None,
    /// Keeps a fixed distance to the viewport's left (or top) edge.
    MinEdge,
    /// Keeps a fixed distance to the viewport's right (or bottom) edge.
    MaxEdge,
    /// Keeps the edge at the same fraction of the viewport extent.
    Proportional,
    /// Keeps a fixed distance to the viewport's midpoint.
    Center,
}

impl EdgeAnchor {
    pub const ALL: [EdgeAnchor; 5] = [
        EdgeAnchor::None,
        EdgeAnchor::MinEdge,
        EdgeAnchor::MaxEdge,
        EdgeAnchor::Proportional,
        EdgeAnchor::Center,
    ];

    pub fn is_anchored(self) -> bool {
        self != EdgeAnchor::None
    }

    /// Distance stored for an edge sitting at `pixel` in a viewport of `extent`.
    pub fn distance_from(self, pixel: f32, extent: f32) -> f32 {
        match self {
            EdgeAnchor::None => 0.0,
            EdgeAnchor::MinEdge => pixel,
            EdgeAnchor::MaxEdge => extent - pixel,
            EdgeAnchor::Proportional => pixel / extent,
            EdgeAnchor::Center => pixel - extent / 2.0,
        }
    }

    /// Inverse of [`EdgeAnchor::distance_from`] for a (possibly new) `extent`.
    pub fn resolve(self, distance: f32, extent: f32) -> f32 {
        match self {
            EdgeAnchor::None => 0.0,
            EdgeAnchor::MinEdge => distance,
            EdgeAnchor::MaxEdge => extent - distance,
            EdgeAnchor::Proportional => distance * extent,
            EdgeAnchor::Center => extent / 2.0 + distance,
        }
    }

    /// Editor label; horizontal and vertical edges word the fixed anchors differently.
    pub fn label(self, axis: Axis) -> &'static str {
        match (self, axis) {
            (EdgeAnchor::None, _) => "No anchor",
            (EdgeAnchor::MinEdge, Axis::Horizontal) => "Window left",
            (EdgeAnchor::MinEdge, Axis::Vertical) => "Window top",
            (EdgeAnchor::MaxEdge, Axis::Horizontal) => "Window right",
            (EdgeAnchor::MaxEdge, Axis::Vertical) => "Window bottom",
            (EdgeAnchor::Proportional, _) => "Proportional",
            (EdgeAnchor::Center, _) => "Window center",
        }
    }
}

impl TryFrom<u8> for EdgeAnchor {
    type Error = AnchorDataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EdgeAnchor::None),
            1 => Ok(EdgeAnchor::MinEdge),
            2 => Ok(EdgeAnchor::MaxEdge),
            3 => Ok(EdgeAnchor::Proportional),
            4 => Ok(EdgeAnchor::Center),
            other => Err(AnchorDataError::UnknownAnchor(other)),
        }
    }
}

impl From<EdgeAnchor> for u8 {
    fn from(anchor: EdgeAnchor) -> Self {
        match anchor {
            EdgeAnchor::None => 0,
            EdgeAnchor::MinEdge => 1,
            EdgeAnchor::MaxEdge => 2,
            EdgeAnchor::Proportional => 3,
            EdgeAnchor::Center => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}
