use crate::{
    AnchorHost, AnchorProperties, AnchoredObject, Axis, EdgeAnchor, ViewportSize,
    host::AxisAccess,
};

/// How resolved edges are turned back into a position and size.
///
/// Picked once from [`AnchorProperties::use_legacy_bottom_and_right_anchors`]
/// whenever the properties are loaded or edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OffsetStrategy {
    /// Right and bottom anchors account for the object's origin.
    #[default]
    Standard,
    /// Right and bottom anchors place the origin directly, as older projects expect.
    Legacy,
}

impl OffsetStrategy {
    pub fn for_properties(properties: &AnchorProperties) -> Self {
        if properties.use_legacy_bottom_and_right_anchors {
            OffsetStrategy::Legacy
        } else {
            OffsetStrategy::Standard
        }
    }

    /// Moves and resizes `object` along `axis` so its anchored edges land on
    /// `near`/`far` (layer coordinates).
    fn place<O: AnchoredObject + ?Sized>(
        self,
        axis: Axis,
        anchors: (EdgeAnchor, EdgeAnchor),
        near: f32,
        far: f32,
        object: &mut O,
    ) {
        let origin_offset = object.position(axis) - object.drawable(axis);
        let size = object.size(axis);

        match (anchors.0.is_anchored(), anchors.1.is_anchored(), self) {
            (true, true, OffsetStrategy::Standard) => {
                let new_size = (far - near).max(0.0);
                // Origins are proportional to the size of the object.
                let scaled_offset = if size != 0.0 {
                    origin_offset * new_size / size
                } else {
                    origin_offset
                };
                object.set_position(axis, near + scaled_offset);
                object.set_size(axis, new_size);
            }
            (true, true, OffsetStrategy::Legacy) => {
                object.set_size(axis, (far - near).max(0.0));
                object.set_position(axis, near);
            }
            (true, false, _) => object.set_position(axis, near + origin_offset),
            (false, true, OffsetStrategy::Standard) => {
                object.set_position(axis, far - size + origin_offset)
            }
            (false, true, OffsetStrategy::Legacy) => object.set_position(axis, far - size),
            (false, false, _) => {}
        }
    }
}

/// Stored distances for the two edges of one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDistances {
    pub near: f32,
    pub far: f32,
}

/// Distances captured from the object's box, one entry per anchorable axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeDistances {
    pub horizontal: Option<AxisDistances>,
    pub vertical: Option<AxisDistances>,
}

impl EdgeDistances {
    pub fn axis(&self, axis: Axis) -> Option<AxisDistances> {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }
}

/// What a call to [`AnchorRuntime::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Inactive,
    /// No edge is anchored.
    Unanchored,
    /// Distances were recorded; the object did not move.
    Captured,
    /// The viewport did not change since the previous step.
    Unchanged,
    /// At least one axis was repositioned.
    Applied,
    /// The viewport was degenerate on an anchored axis; nothing moved.
    Skipped,
}

/// Per-object anchor state: stored distances and the viewport they relate to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorRuntime {
    strategy: OffsetStrategy,
    distances: Option<EdgeDistances>,
    previous_viewport: Option<ViewportSize>,
    inactive: bool,
}

impl AnchorRuntime {
    pub fn new(properties: &AnchorProperties) -> Self {
        Self {
            strategy: OffsetStrategy::for_properties(properties),
            ..Default::default()
        }
    }

    pub fn strategy(&self) -> OffsetStrategy {
        self.strategy
    }

    pub fn distances(&self) -> Option<EdgeDistances> {
        self.distances
    }

    pub fn is_active(&self) -> bool {
        !self.inactive
    }

    /// Forgets the stored distances; the next step captures them again.
    pub fn invalidate(&mut self) {
        self.distances = None;
        self.previous_viewport = None;
    }

    /// Re-reads `properties` after an edit. Returns `false` when nothing
    /// relevant changed, in which case the stored distances are kept.
    pub fn reconfigure(&mut self, old: &AnchorProperties, new: &AnchorProperties) -> bool {
        if old == new {
            return false;
        }
        self.strategy = OffsetStrategy::for_properties(new);
        self.invalidate();
        true
    }

    pub fn activate(&mut self) {
        if self.inactive {
            self.inactive = false;
            self.invalidate();
        }
    }

    pub fn deactivate(&mut self) {
        self.inactive = true;
    }

    /// Runs one simulation step for `object`.
    pub fn step<H, O>(
        &mut self,
        properties: &AnchorProperties,
        host: &H,
        object: &mut O,
    ) -> StepOutcome
    where
        H: AnchorHost + ?Sized,
        O: AnchoredObject + ?Sized,
    {
        if self.inactive {
            return StepOutcome::Inactive;
        }
        if !properties.is_anchored() {
            return StepOutcome::Unanchored;
        }

        let current = host.viewport_size();
        let outcome = if properties.relative_to_original_window_size {
            let stored = self.distances;
            match stored {
                Some(distances) => self.apply(properties, &distances, host, current, object),
                None => {
                    // An unknown original size is measured against the current one.
                    let original = host.original_viewport_size();
                    let reference = if is_reference(properties, original) {
                        original
                    } else {
                        current
                    };
                    self.capture_into(properties, host, reference, object)
                }
            }
        } else {
            let previous = self.previous_viewport;
            match previous {
                None => self.capture_into(properties, host, current, object),
                Some(previous) if previous == current => StepOutcome::Unchanged,
                Some(previous) => match capture(properties, host, previous, object) {
                    Some(distances) => {
                        self.distances = Some(distances);
                        self.apply(properties, &distances, host, current, object)
                    }
                    None => StepOutcome::Skipped,
                },
            }
        };

        // A degenerate viewport is not a usable reference for the next step.
        if is_reference(properties, current) {
            self.previous_viewport = Some(current);
        }
        outcome
    }

    /// Stores fresh distances, or leaves them invalid so the next step retries.
    fn capture_into<H, O>(
        &mut self,
        properties: &AnchorProperties,
        host: &H,
        reference: ViewportSize,
        object: &O,
    ) -> StepOutcome
    where
        H: AnchorHost + ?Sized,
        O: AnchoredObject + ?Sized,
    {
        match capture(properties, host, reference, object) {
            Some(distances) => {
                self.distances = Some(distances);
                StepOutcome::Captured
            }
            None => StepOutcome::Skipped,
        }
    }

    fn apply<H, O>(
        &self,
        properties: &AnchorProperties,
        distances: &EdgeDistances,
        host: &H,
        current: ViewportSize,
        object: &mut O,
    ) -> StepOutcome
    where
        H: AnchorHost + ?Sized,
        O: AnchoredObject + ?Sized,
    {
        let usable = |axis: Axis| distances.axis(axis).filter(|_| current.is_usable(axis));
        let horizontal = usable(Axis::Horizontal);
        let vertical = usable(Axis::Vertical);
        if horizontal.is_none() && vertical.is_none() {
            return StepOutcome::Skipped;
        }

        let (left, right) = properties.axis(Axis::Horizontal);
        let (top, bottom) = properties.axis(Axis::Vertical);
        let resolve = |anchor: EdgeAnchor, distance: Option<f32>, axis: Axis| {
            distance.map_or(0.0, |d| anchor.resolve(d, current.extent(axis)))
        };

        let left_pixel = resolve(left, horizontal.map(|d| d.near), Axis::Horizontal);
        let right_pixel = resolve(right, horizontal.map(|d| d.far), Axis::Horizontal);
        let top_pixel = resolve(top, vertical.map(|d| d.near), Axis::Vertical);
        let bottom_pixel = resolve(bottom, vertical.map(|d| d.far), Axis::Vertical);

        let (left_pos, top_pos) = host.from_viewport(left_pixel, top_pixel, current);
        let (right_pos, bottom_pos) = host.from_viewport(right_pixel, bottom_pixel, current);

        if horizontal.is_some() {
            self.strategy
                .place(Axis::Horizontal, (left, right), left_pos, right_pos, object);
        }
        if vertical.is_some() {
            self.strategy
                .place(Axis::Vertical, (top, bottom), top_pos, bottom_pos, object);
        }
        StepOutcome::Applied
    }
}

/// Whether every anchored axis has a usable extent in `viewport`.
fn is_reference(properties: &AnchorProperties, viewport: ViewportSize) -> bool {
    [Axis::Horizontal, Axis::Vertical]
        .into_iter()
        .all(|axis| !properties.is_axis_anchored(axis) || viewport.is_usable(axis))
}

/// Measures the object's edges against a viewport of size `reference`.
///
/// Returns `None` when an anchored axis of `reference` is degenerate.
fn capture<H, O>(
    properties: &AnchorProperties,
    host: &H,
    reference: ViewportSize,
    object: &O,
) -> Option<EdgeDistances>
where
    H: AnchorHost + ?Sized,
    O: AnchoredObject + ?Sized,
{
    if !is_reference(properties, reference) {
        return None;
    }

    let (left_x, top_y) = (object.drawable_x(), object.drawable_y());
    let top_left = host.to_viewport(left_x, top_y, reference);
    let bottom_right = host.to_viewport(
        left_x + object.width(),
        top_y + object.height(),
        reference,
    );

    let axis_distances = |axis: Axis, near_pixel: f32, far_pixel: f32| {
        if !properties.is_axis_anchored(axis) {
            return None;
        }
        let (near, far) = properties.axis(axis);
        let extent = reference.extent(axis);
        Some(AxisDistances {
            near: near.distance_from(near_pixel, extent),
            far: far.distance_from(far_pixel, extent),
        })
    };

    Some(EdgeDistances {
        horizontal: axis_distances(Axis::Horizontal, top_left.0, bottom_right.0),
        vertical: axis_distances(Axis::Vertical, top_left.1, bottom_right.1),
    })
}
