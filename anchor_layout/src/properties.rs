use {
    crate::{AnchorDataError, Axis, EdgeAnchor},
    serde::{Deserialize, Serialize},
};

/// Per-object anchor configuration, as stored in project files.
///
/// Field names are serialized in camelCase to stay compatible with existing
/// save data. A missing `useLegacyBottomAndRightAnchors` means the data was
/// written before the flag existed, so it defaults to the legacy formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "bevy", derive(bevy::reflect::Reflect))]
#[serde(rename_all = "camelCase")]
pub struct AnchorProperties {
    #[serde(default)]
    pub left_edge_anchor: EdgeAnchor,
    #[serde(default)]
    pub right_edge_anchor: EdgeAnchor,
    #[serde(default)]
    pub top_edge_anchor: EdgeAnchor,
    #[serde(default)]
    pub bottom_edge_anchor: EdgeAnchor,
    #[serde(default = "enabled")]
    pub relative_to_original_window_size: bool,
    #[serde(default = "enabled")]
    pub use_legacy_bottom_and_right_anchors: bool,
}

fn enabled() -> bool {
    true
}

impl Default for AnchorProperties {
    fn default() -> Self {
        Self {
            left_edge_anchor: EdgeAnchor::None,
            right_edge_anchor: EdgeAnchor::None,
            top_edge_anchor: EdgeAnchor::None,
            bottom_edge_anchor: EdgeAnchor::None,
            relative_to_original_window_size: true,
            use_legacy_bottom_and_right_anchors: false,
        }
    }
}

pub const LEFT_EDGE_ANCHOR: &str = "leftEdgeAnchor";
pub const RIGHT_EDGE_ANCHOR: &str = "rightEdgeAnchor";
pub const TOP_EDGE_ANCHOR: &str = "topEdgeAnchor";
pub const BOTTOM_EDGE_ANCHOR: &str = "bottomEdgeAnchor";
pub const RELATIVE_TO_ORIGINAL_WINDOW_SIZE: &str = "relativeToOriginalWindowSize";
pub const USE_LEGACY_BOTTOM_AND_RIGHT_ANCHORS: &str = "useLegacyBottomAndRightAnchors";

impl AnchorProperties {
    /// Convenience constructor for the four edges; flags keep their defaults.
    pub fn edges(
        left: EdgeAnchor,
        right: EdgeAnchor,
        top: EdgeAnchor,
        bottom: EdgeAnchor,
    ) -> Self {
        Self {
            left_edge_anchor: left,
            right_edge_anchor: right,
            top_edge_anchor: top,
            bottom_edge_anchor: bottom,
            ..Default::default()
        }
    }

    pub fn with_relative_to_original_window_size(mut self, relative: bool) -> Self {
        self.relative_to_original_window_size = relative;
        self
    }

    pub fn with_legacy_bottom_and_right_anchors(mut self, legacy: bool) -> Self {
        self.use_legacy_bottom_and_right_anchors = legacy;
        self
    }

    /// Near (left/top) and far (right/bottom) anchors of an axis.
    pub fn axis(&self, axis: Axis) -> (EdgeAnchor, EdgeAnchor) {
        match axis {
            Axis::Horizontal => (self.left_edge_anchor, self.right_edge_anchor),
            Axis::Vertical => (self.top_edge_anchor, self.bottom_edge_anchor),
        }
    }

    pub fn is_axis_anchored(&self, axis: Axis) -> bool {
        let (near, far) = self.axis(axis);
        near.is_anchored() || far.is_anchored()
    }

    pub fn is_anchored(&self) -> bool {
        self.is_axis_anchored(Axis::Horizontal) || self.is_axis_anchored(Axis::Vertical)
    }

    /// Applies a single edit coming from the editor's property grid.
    pub fn update_property(&mut self, name: &str, value: &str) -> Result<(), AnchorDataError> {
        match name {
            LEFT_EDGE_ANCHOR => self.left_edge_anchor = parse_anchor(name, value)?,
            RIGHT_EDGE_ANCHOR => self.right_edge_anchor = parse_anchor(name, value)?,
            TOP_EDGE_ANCHOR => self.top_edge_anchor = parse_anchor(name, value)?,
            BOTTOM_EDGE_ANCHOR => self.bottom_edge_anchor = parse_anchor(name, value)?,
            RELATIVE_TO_ORIGINAL_WINDOW_SIZE => {
                self.relative_to_original_window_size = parse_flag(name, value)?
            }
            USE_LEGACY_BOTTOM_AND_RIGHT_ANCHORS => {
                self.use_legacy_bottom_and_right_anchors = parse_flag(name, value)?
            }
            _ => return Err(AnchorDataError::UnknownProperty(name.to_string())),
        }
        Ok(())
    }

    /// Describes every property for the editor's property grid.
    pub fn descriptors(&self) -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::flag(
                RELATIVE_TO_ORIGINAL_WINDOW_SIZE,
                self.relative_to_original_window_size,
                "Anchor relatively to original window size",
                "Otherwise, objects are anchored according to the window size on the previous frame.",
            ),
            PropertyDescriptor::edge(
                LEFT_EDGE_ANCHOR,
                self.left_edge_anchor,
                Axis::Horizontal,
                "Left edge",
                "Relative to the window, the left edge of the object stays at",
            ),
            PropertyDescriptor::edge(
                RIGHT_EDGE_ANCHOR,
                self.right_edge_anchor,
                Axis::Horizontal,
                "Right edge",
                "Relative to the window, the right edge of the object stays at",
            ),
            PropertyDescriptor::edge(
                TOP_EDGE_ANCHOR,
                self.top_edge_anchor,
                Axis::Vertical,
                "Top edge",
                "Relative to the window, the top edge of the object stays at",
            ),
            PropertyDescriptor::edge(
                BOTTOM_EDGE_ANCHOR,
                self.bottom_edge_anchor,
                Axis::Vertical,
                "Bottom edge",
                "Relative to the window, the bottom edge of the object stays at",
            ),
            PropertyDescriptor::flag(
                USE_LEGACY_BOTTOM_AND_RIGHT_ANCHORS,
                self.use_legacy_bottom_and_right_anchors,
                "Use legacy right and bottom anchors",
                "Kept for projects created before right and bottom anchors took the object origin into account.",
            )
            .hidden(),
        ]
    }
}

fn parse_anchor(name: &str, value: &str) -> Result<EdgeAnchor, AnchorDataError> {
    let raw: u8 = value
        .trim()
        .parse()
        .map_err(|_| AnchorDataError::invalid_value(name, value))?;
    EdgeAnchor::try_from(raw)
}

fn parse_flag(name: &str, value: &str) -> Result<bool, AnchorDataError> {
    match value.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AnchorDataError::invalid_value(name, value)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Boolean,
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChoice {
    pub value: String,
    pub label: String,
}

/// What the editor needs to render one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: &'static str,
    /// Current value, rendered the way `update_property` parses it.
    pub value: String,
    pub property_type: PropertyType,
    pub label: String,
    pub description: String,
    pub group: String,
    pub choices: Vec<PropertyChoice>,
    pub hidden: bool,
}

impl PropertyDescriptor {
    fn flag(name: &'static str, value: bool, label: &str, description: &str) -> Self {
        Self {
            name,
            value: value.to_string(),
            property_type: PropertyType::Boolean,
            label: label.to_string(),
            description: description.to_string(),
            group: String::new(),
            choices: Vec::new(),
            hidden: false,
        }
    }

    fn edge(
        name: &'static str,
        value: EdgeAnchor,
        axis: Axis,
        label: &str,
        description: &str,
    ) -> Self {
        let group = match axis {
            Axis::Horizontal => "Horizontal anchoring",
            Axis::Vertical => "Vertical anchoring",
        };
        Self {
            name,
            value: u8::from(value).to_string(),
            property_type: PropertyType::Choice,
            label: label.to_string(),
            description: description.to_string(),
            group: group.to_string(),
            choices: EdgeAnchor::ALL
                .iter()
                .map(|anchor| PropertyChoice {
                    value: u8::from(*anchor).to_string(),
                    label: anchor.label(axis).to_string(),
                })
                .collect(),
            hidden: false,
        }
    }

    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}
