//! Anchoring of objects to the edges of a resizable viewport.
//!
//! Each object carries [`AnchorProperties`] (four independent edge rules plus
//! two compatibility flags) and an [`AnchorRuntime`] holding the distances
//! captured from its box. Every frame the host calls [`AnchorRuntime::step`]
//! with an [`AnchorHost`] for the viewport and the object as an
//! [`AnchoredObject`].

mod edge;
mod error;
mod host;
mod properties;
mod runtime;

pub use {
    edge::{Axis, EdgeAnchor},
    error::AnchorDataError,
    host::{AnchorHost, AnchoredObject, ViewportSize},
    properties::{
        AnchorProperties, BOTTOM_EDGE_ANCHOR, LEFT_EDGE_ANCHOR, PropertyChoice,
        PropertyDescriptor, PropertyType, RELATIVE_TO_ORIGINAL_WINDOW_SIZE, RIGHT_EDGE_ANCHOR,
        TOP_EDGE_ANCHOR, USE_LEGACY_BOTTOM_AND_RIGHT_ANCHORS,
    },
    runtime::{AnchorRuntime, AxisDistances, EdgeDistances, OffsetStrategy, StepOutcome},
};
