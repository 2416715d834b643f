// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable position adjustments.
//!
//! A [`Middleware`] reads the accumulated [`MiddlewareState`] and returns an optional
//! [`MiddlewareUpdate`]. Steps run strictly in order; each one only sees what the
//! steps before it produced. Nothing here touches a surface: the pipeline is a pure
//! function of its [`MiddlewareContext`].

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::placement::{Axis, Placement, Side, compute_base_position};

/// Geometry facts shared by every step of a pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiddlewareContext {
    /// Anchor bounds in viewport coordinates.
    pub anchor: Rect,
    /// Size of the floating element.
    pub floating: Size,
    /// Visible viewport bounds.
    pub viewport: Rect,
    /// Bounds of the anchor's nearest clipping ancestor, if it has one.
    pub clipping: Option<Rect>,
}

/// Data attached by the offset step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetData {
    /// Total main-axis distance applied so far.
    pub distance: f64,
}

/// Data attached by the flip step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FlipData {
    /// Placement before the step ran.
    pub from: Placement,
    /// Whether the opposite side was taken.
    pub flipped: bool,
}

/// Data attached by the shift step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShiftData {
    /// Horizontal translation applied.
    pub x: f64,
    /// Vertical translation applied.
    pub y: f64,
}

/// Data attached by the auto placement step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AutoPlacementData {
    /// Chosen placement.
    pub placement: Placement,
    /// Area of the chosen rectangle inside the viewport.
    pub visible_area: f64,
}

/// Data attached by the size step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeData {
    /// Width available to the floating element on its side.
    pub available_width: f64,
    /// Height available to the floating element on its side.
    pub available_height: f64,
}

/// Which condition the hide step tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HideStrategy {
    /// The anchor is entirely outside the viewport.
    #[default]
    ReferenceHidden,
    /// The anchor is entirely outside its clipping ancestor.
    Escaped,
}

/// Data attached by the hide step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HideData {
    /// Strategy that produced this result.
    pub strategy: HideStrategy,
    /// Whether consumers should suppress visibility.
    pub hidden: bool,
}

/// Per-step diagnostic data accumulated over a pass.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MiddlewareData {
    /// Set by [`Offset`].
    pub offset: Option<OffsetData>,
    /// Set by [`Flip`].
    pub flip: Option<FlipData>,
    /// Set by [`Shift`].
    pub shift: Option<ShiftData>,
    /// Set by [`AutoPlacement`].
    pub auto_placement: Option<AutoPlacementData>,
    /// Set by [`AvailableSize`].
    pub size: Option<SizeData>,
    /// Set by [`Hide`].
    pub hide: Option<HideData>,
}

impl MiddlewareData {
    /// Whether a hide step asked for the element to be hidden.
    #[must_use]
    pub fn hidden(&self) -> bool {
        self.hide.is_some_and(|h| h.hidden)
    }

    fn merge(&mut self, entry: DataEntry) {
        match entry {
            DataEntry::Offset(d) => self.offset = Some(d),
            DataEntry::Flip(d) => self.flip = Some(d),
            DataEntry::Shift(d) => self.shift = Some(d),
            DataEntry::AutoPlacement(d) => self.auto_placement = Some(d),
            DataEntry::Size(d) => self.size = Some(d),
            DataEntry::Hide(d) => self.hide = Some(d),
        }
    }
}

/// One slot of [`MiddlewareData`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DataEntry {
    /// See [`OffsetData`].
    Offset(OffsetData),
    /// See [`FlipData`].
    Flip(FlipData),
    /// See [`ShiftData`].
    Shift(ShiftData),
    /// See [`AutoPlacementData`].
    AutoPlacement(AutoPlacementData),
    /// See [`SizeData`].
    Size(SizeData),
    /// See [`HideData`].
    Hide(HideData),
}

/// Accumulated result threaded through the pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiddlewareState {
    /// Left edge of the floating element.
    pub x: f64,
    /// Top edge of the floating element.
    pub y: f64,
    /// Current placement.
    pub placement: Placement,
    /// Data attached by earlier steps.
    pub data: MiddlewareData,
}

impl MiddlewareState {
    /// Initial state: the base position for `placement`.
    #[must_use]
    pub fn initial(context: &MiddlewareContext, placement: Placement) -> Self {
        let p = compute_base_position(context.anchor, context.floating, placement);
        Self {
            x: p.x,
            y: p.y,
            placement,
            data: MiddlewareData::default(),
        }
    }

    /// Top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounds of a floating element of size `floating` at this position.
    #[must_use]
    pub fn rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.position(), floating)
    }

    fn offset_distance(&self) -> f64 {
        self.data.offset.map_or(0.0, |o| o.distance)
    }

    fn apply(&mut self, update: MiddlewareUpdate) {
        if let Some(x) = update.x {
            self.x = x;
        }
        if let Some(y) = update.y {
            self.y = y;
        }
        if let Some(placement) = update.placement {
            self.placement = placement;
        }
        if let Some(entry) = update.data {
            self.data.merge(entry);
        }
    }
}

/// Partial update returned by a step. Unset fields keep their prior value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MiddlewareUpdate {
    /// New left edge.
    pub x: Option<f64>,
    /// New top edge.
    pub y: Option<f64>,
    /// New placement.
    pub placement: Option<Placement>,
    /// Data to attach.
    pub data: Option<DataEntry>,
}

impl MiddlewareUpdate {
    /// Move to `position`.
    #[must_use]
    pub fn moved_to(position: Point) -> Self {
        Self {
            x: Some(position.x),
            y: Some(position.y),
            ..Self::default()
        }
    }

    /// Attach data without moving.
    #[must_use]
    pub fn data(entry: DataEntry) -> Self {
        Self {
            data: Some(entry),
            ..Self::default()
        }
    }

    /// Also change the placement.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Also attach data.
    #[must_use]
    pub fn with_data(mut self, entry: DataEntry) -> Self {
        self.data = Some(entry);
        self
    }
}

/// A single placement adjustment step.
pub trait Middleware: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Compute an update from the current state, or `None` to leave it untouched.
    fn apply(&self, state: &MiddlewareState, context: &MiddlewareContext)
    -> Option<MiddlewareUpdate>;
}

/// Run `middleware` in order over the base position for `placement`.
#[must_use]
pub fn compute_position(
    context: &MiddlewareContext,
    placement: Placement,
    middleware: &[&dyn Middleware],
) -> MiddlewareState {
    run(context, placement, middleware.iter().copied())
}

fn run<'a>(
    context: &MiddlewareContext,
    placement: Placement,
    steps: impl Iterator<Item = &'a dyn Middleware>,
) -> MiddlewareState {
    let mut state = MiddlewareState::initial(context, placement);
    for step in steps {
        if let Some(update) = step.apply(&state, context) {
            tracing::trace!(step = step.name(), ?update, "middleware update");
            state.apply(update);
        }
    }
    state
}

/// An owned, ordered list of steps.
#[derive(Debug, Default)]
pub struct Pipeline {
    steps: SmallVec<[Box<dyn Middleware>; 6]>,
}

impl Pipeline {
    /// Create an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    #[must_use]
    pub fn with(mut self, step: impl Middleware + 'static) -> Self {
        self.push(step);
        self
    }

    /// Append a step.
    pub fn push(&mut self, step: impl Middleware + 'static) {
        self.steps.push(Box::new(step));
    }

    /// Names of the steps, in execution order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|s| s.name())
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether there are no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step over the base position for `placement`.
    #[must_use]
    pub fn compute(&self, context: &MiddlewareContext, placement: Placement) -> MiddlewareState {
        run(
            context,
            placement,
            self.steps.iter().map(|s| s.as_ref() as &dyn Middleware),
        )
    }
}

/// Base position for `placement`, pushed out by `distance` along the main axis.
fn offset_position(context: &MiddlewareContext, placement: Placement, distance: f64) -> Point {
    compute_base_position(context.anchor, context.floating, placement)
        + placement.side().outward(distance)
}

/// Translate along the main axis, away from the anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Offset {
    /// Distance in pixels. Negative values pull the element over the anchor.
    pub distance: f64,
}

impl Offset {
    /// Offset by `distance`.
    #[must_use]
    pub const fn new(distance: f64) -> Self {
        Self { distance }
    }
}

impl Middleware for Offset {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn apply(
        &self,
        state: &MiddlewareState,
        _context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        let p = state.position() + state.placement.side().outward(self.distance);
        let distance = state.offset_distance() + self.distance;
        Some(MiddlewareUpdate::moved_to(p).with_data(DataEntry::Offset(OffsetData { distance })))
    }
}

fn overflows_side(rect: Rect, side: Side, viewport: Rect) -> bool {
    match side {
        Side::Top => rect.y0 < viewport.y0,
        Side::Bottom => rect.y1 > viewport.y1,
        Side::Left => rect.x0 < viewport.x0,
        Side::Right => rect.x1 > viewport.x1,
    }
}

/// Move to the opposite side when the current side clips.
///
/// Runs at most once per pass. When the opposite side clips as well the original
/// placement is kept.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flip;

impl Middleware for Flip {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn apply(
        &self,
        state: &MiddlewareState,
        context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        if state.data.flip.is_some() {
            return None;
        }
        let from = state.placement;
        if !overflows_side(state.rect(context.floating), from.side(), context.viewport) {
            return None;
        }

        let candidate = from.opposite();
        let p = offset_position(context, candidate, state.offset_distance());
        let rect = Rect::from_origin_size(p, context.floating);
        if overflows_side(rect, candidate.side(), context.viewport) {
            return Some(MiddlewareUpdate::data(DataEntry::Flip(FlipData {
                from,
                flipped: false,
            })));
        }
        Some(
            MiddlewareUpdate::moved_to(p)
                .with_placement(candidate)
                .with_data(DataEntry::Flip(FlipData {
                    from,
                    flipped: true,
                })),
        )
    }
}

/// Slide along the cross axis to stay inside the viewport.
///
/// Where the viewport allows it, the element also keeps some cross-axis overlap
/// with the anchor: at least one pixel, or the whole anchor extent when that is
/// smaller. Staying inside the viewport wins when both cannot hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Shift;

fn shift_cross(pos: f64, extent: f64, view: (f64, f64), anchor: (f64, f64)) -> f64 {
    if extent > view.1 - view.0 {
        return view.0;
    }
    let (mut lo, mut hi) = (view.0, view.1 - extent);
    // Anchor contact only narrows the range while it stays inside the viewport.
    let overlap = extent.min(anchor.1 - anchor.0).min(1.0);
    let contact_lo = lo.max(anchor.0 - extent + overlap);
    let contact_hi = hi.min(anchor.1 - overlap);
    if contact_lo <= contact_hi {
        (lo, hi) = (contact_lo, contact_hi);
    }
    pos.max(lo).min(hi)
}

impl Middleware for Shift {
    fn name(&self) -> &'static str {
        "shift"
    }

    fn apply(
        &self,
        state: &MiddlewareState,
        context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        let (a, v, f) = (context.anchor, context.viewport, context.floating);
        let (x, y) = match state.placement.side().axis().cross() {
            Axis::X => (
                shift_cross(state.x, f.width, (v.x0, v.x1), (a.x0, a.x1)),
                state.y,
            ),
            Axis::Y => (
                state.x,
                shift_cross(state.y, f.height, (v.y0, v.y1), (a.y0, a.y1)),
            ),
        };
        let data = DataEntry::Shift(ShiftData {
            x: x - state.x,
            y: y - state.y,
        });
        Some(MiddlewareUpdate::moved_to(Point::new(x, y)).with_data(data))
    }
}

/// Pick whichever of the twelve placements leaves the most of the element visible.
///
/// Ties go to the current placement, then to the earliest in [`Placement::ALL`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoPlacement;

impl Middleware for AutoPlacement {
    fn name(&self) -> &'static str {
        "auto_placement"
    }

    fn apply(
        &self,
        state: &MiddlewareState,
        context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        let distance = state.offset_distance();
        let visible = |placement: Placement| {
            let p = offset_position(context, placement, distance);
            let area = Rect::from_origin_size(p, context.floating)
                .intersect(context.viewport)
                .area();
            (p, area)
        };

        let mut best = state.placement;
        let (mut best_pos, mut best_area) = visible(best);
        for candidate in Placement::ALL {
            if candidate == state.placement {
                continue;
            }
            let (p, area) = visible(candidate);
            if area > best_area {
                best = candidate;
                best_pos = p;
                best_area = area;
            }
        }

        Some(
            MiddlewareUpdate::moved_to(best_pos)
                .with_placement(best)
                .with_data(DataEntry::AutoPlacement(AutoPlacementData {
                    placement: best,
                    visible_area: best_area,
                })),
        )
    }
}

/// Report the space available between the anchor and the viewport edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AvailableSize;

impl Middleware for AvailableSize {
    fn name(&self) -> &'static str {
        "size"
    }

    fn apply(
        &self,
        state: &MiddlewareState,
        context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        let (a, v) = (context.anchor, context.viewport);
        let gap = state.offset_distance();
        let (available_width, available_height) = match state.placement.side() {
            Side::Top => (v.width(), a.y0 - v.y0 - gap),
            Side::Bottom => (v.width(), v.y1 - a.y1 - gap),
            Side::Left => (a.x0 - v.x0 - gap, v.height()),
            Side::Right => (v.x1 - a.x1 - gap, v.height()),
        };
        Some(MiddlewareUpdate::data(DataEntry::Size(SizeData {
            available_width: available_width.max(0.0),
            available_height: available_height.max(0.0),
        })))
    }
}

/// Flag the element as hidden without moving it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Hide {
    /// Condition to test.
    pub strategy: HideStrategy,
}

impl Hide {
    /// Hide using `strategy`.
    #[must_use]
    pub const fn new(strategy: HideStrategy) -> Self {
        Self { strategy }
    }
}

fn fully_outside(rect: Rect, bounds: Rect) -> bool {
    rect.x1 <= bounds.x0 || rect.x0 >= bounds.x1 || rect.y1 <= bounds.y0 || rect.y0 >= bounds.y1
}

impl Middleware for Hide {
    fn name(&self) -> &'static str {
        "hide"
    }

    fn apply(
        &self,
        _state: &MiddlewareState,
        context: &MiddlewareContext,
    ) -> Option<MiddlewareUpdate> {
        let bounds = match self.strategy {
            HideStrategy::ReferenceHidden => context.viewport,
            HideStrategy::Escaped => context.clipping.unwrap_or(context.viewport),
        };
        Some(MiddlewareUpdate::data(DataEntry::Hide(HideData {
            strategy: self.strategy,
            hidden: fully_outside(context.anchor, bounds),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOATING: Size = Size::new(80.0, 40.0);

    fn context(anchor: Rect) -> MiddlewareContext {
        MiddlewareContext {
            anchor,
            floating: FLOATING,
            viewport: Rect::new(0.0, 0.0, 400.0, 300.0),
            clipping: None,
        }
    }

    fn centered() -> MiddlewareContext {
        context(Rect::from_origin_size((160.0, 130.0), (60.0, 20.0)))
    }

    #[test]
    fn empty_pipeline_yields_base_position() {
        let cx = centered();
        let state = compute_position(&cx, Placement::Right, &[]);
        assert_eq!(
            state.position(),
            compute_base_position(cx.anchor, FLOATING, Placement::Right)
        );
        assert_eq!(state.data, MiddlewareData::default());
    }

    #[test]
    fn offset_moves_only_along_the_main_axis() {
        let cx = centered();
        for placement in Placement::ALL {
            let zero = compute_position(&cx, placement, &[&Offset::new(0.0)]);
            let moved = compute_position(&cx, placement, &[&Offset::new(8.0)]);
            let delta = moved.position() - zero.position();
            assert_eq!(delta, placement.side().outward(8.0), "{placement}");
            assert_eq!(moved.data.offset, Some(OffsetData { distance: 8.0 }));
        }
    }

    #[test]
    fn flip_moves_to_the_opposite_side_when_clipped() {
        // Anchor near the top edge: no room above.
        let cx = context(Rect::from_origin_size((160.0, 10.0), (60.0, 20.0)));
        let state = compute_position(&cx, Placement::Top, &[&Offset::new(4.0), &Flip]);
        assert_eq!(state.placement, Placement::Bottom);
        assert_eq!(state.y, cx.anchor.y1 + 4.0);
        assert!(state.rect(FLOATING).y1 <= cx.viewport.y1, "no residual clip");
        assert_eq!(
            state.data.flip,
            Some(FlipData {
                from: Placement::Top,
                flipped: true,
            })
        );
    }

    #[test]
    fn flip_keeps_the_original_side_when_both_clip() {
        let mut cx = context(Rect::from_origin_size((160.0, 20.0), (60.0, 20.0)));
        cx.viewport = Rect::new(0.0, 0.0, 400.0, 70.0);
        let first = compute_position(&cx, Placement::Top, &[&Flip]);
        assert_eq!(first.placement, Placement::Top);
        assert_eq!(first.data.flip.map(|f| f.flipped), Some(false));

        // Same inputs, same answer.
        let second = compute_position(&cx, Placement::Top, &[&Flip]);
        assert_eq!(first, second);
    }

    #[test]
    fn flip_runs_once_per_pass() {
        let cx = context(Rect::from_origin_size((160.0, 10.0), (60.0, 20.0)));
        let state = compute_position(&cx, Placement::Top, &[&Flip, &Flip]);
        assert_eq!(state.placement, Placement::Bottom);
    }

    #[test]
    fn flip_is_a_no_op_when_nothing_clips() {
        let cx = centered();
        let state = compute_position(&cx, Placement::Top, &[&Flip]);
        assert_eq!(state.placement, Placement::Top);
        assert_eq!(state.data.flip, None);
    }

    #[test]
    fn shift_keeps_the_element_inside_the_viewport() {
        // Anchor hugging the right edge; bottom-start would overflow to the right.
        let cx = context(Rect::from_origin_size((360.0, 100.0), (30.0, 20.0)));
        let state = compute_position(&cx, Placement::BottomStart, &[&Shift]);
        let rect = state.rect(FLOATING);
        assert!(rect.x1 <= cx.viewport.x1, "inside on the right: {rect:?}");
        assert!(rect.x0 >= cx.viewport.x0, "inside on the left: {rect:?}");
        assert_eq!(state.data.shift.map(|s| s.x), Some(320.0 - 360.0));
        assert_eq!(state.y, cx.anchor.y1, "main axis untouched");
    }

    #[test]
    fn shift_stays_inside_when_the_anchor_is_off_screen() {
        let cx = context(Rect::from_origin_size((-50.0, 100.0), (20.0, 20.0)));
        let state = compute_position(&cx, Placement::BottomEnd, &[&Shift]);
        let rect = state.rect(FLOATING);
        assert!(rect.x0 >= cx.viewport.x0, "inside on the left: {rect:?}");
        assert!(rect.x1 <= cx.viewport.x1, "inside on the right: {rect:?}");
        assert_eq!(state.x, 0.0);
    }

    #[test]
    fn shift_keeps_contact_with_a_partly_visible_anchor() {
        // Only the right 10px of the anchor are on screen.
        let cx = context(Rect::from_origin_size((-10.0, 100.0), (20.0, 20.0)));
        let state = compute_position(&cx, Placement::BottomEnd, &[&Shift]);
        let rect = state.rect(FLOATING);
        assert!(rect.x0 >= cx.viewport.x0, "inside on the left: {rect:?}");
        assert!(rect.x0 < cx.anchor.x1, "overlaps the anchor: {rect:?}");

        // Near the right edge, contact limits how far the element may slide.
        let cx = context(Rect::from_origin_size((390.0, 100.0), (20.0, 20.0)));
        let state = compute_position(&cx, Placement::BottomStart, &[&Shift]);
        let rect = state.rect(FLOATING);
        assert!(rect.x1 <= cx.viewport.x1, "inside on the right: {rect:?}");
        assert!(rect.x1 > cx.anchor.x0, "overlaps the anchor: {rect:?}");
        assert_eq!(state.x, 320.0);
    }

    #[test]
    fn shift_start_aligns_when_the_element_is_wider_than_the_viewport() {
        let mut cx = centered();
        cx.floating = Size::new(500.0, 40.0);
        let state = compute_position(&cx, Placement::Bottom, &[&Shift]);
        assert_eq!(state.x, 0.0);
    }

    #[test]
    fn auto_placement_picks_the_most_visible_candidate() {
        // Anchor in the bottom-right corner: only top/left placements fit.
        let cx = context(Rect::from_origin_size((350.0, 270.0), (40.0, 20.0)));
        let state = compute_position(&cx, Placement::BottomStart, &[&AutoPlacement]);
        let rect = state.rect(FLOATING);
        assert_eq!(rect.intersect(cx.viewport).area(), FLOATING.area());
        assert_eq!(
            state.data.auto_placement.map(|d| d.placement),
            Some(state.placement)
        );
    }

    #[test]
    fn auto_placement_prefers_the_requested_placement_on_ties() {
        let cx = centered();
        let state = compute_position(&cx, Placement::LeftEnd, &[&AutoPlacement]);
        assert_eq!(state.placement, Placement::LeftEnd);
    }

    #[test]
    fn auto_placement_keeps_the_offset() {
        // A full-width anchor near the top: only the bottom side has room.
        let cx = context(Rect::new(0.0, 10.0, 400.0, 30.0));
        let state = compute_position(
            &cx,
            Placement::Top,
            &[&Offset::new(6.0), &AutoPlacement],
        );
        assert_eq!(state.placement, Placement::Bottom);
        assert_eq!(state.y, cx.anchor.y1 + 6.0);
    }

    #[test]
    fn hide_flags_a_reference_outside_the_viewport() {
        let cx = context(Rect::from_origin_size((100.0, -40.0), (40.0, 20.0)));
        let state = compute_position(&cx, Placement::Bottom, &[&Hide::default()]);
        assert!(state.data.hidden());
        assert_eq!(
            state.position(),
            compute_base_position(cx.anchor, FLOATING, Placement::Bottom),
            "hide never moves the element"
        );

        let state = compute_position(&centered(), Placement::Bottom, &[&Hide::default()]);
        assert!(!state.data.hidden());
    }

    #[test]
    fn escaped_tests_against_the_clipping_ancestor() {
        let mut cx = centered();
        cx.clipping = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        let escaped = compute_position(
            &cx,
            Placement::Bottom,
            &[&Hide::new(HideStrategy::Escaped)],
        );
        assert!(escaped.data.hidden());

        let referenced = compute_position(&cx, Placement::Bottom, &[&Hide::default()]);
        assert!(!referenced.data.hidden());
    }

    #[test]
    fn size_reports_space_on_the_chosen_side() {
        let cx = centered();
        let state = compute_position(&cx, Placement::Bottom, &[&Offset::new(10.0), &AvailableSize]);
        assert_eq!(
            state.data.size,
            Some(SizeData {
                available_width: 400.0,
                available_height: 300.0 - 150.0 - 10.0,
            })
        );
    }

    #[test]
    fn pipeline_runs_steps_in_order() {
        let pipeline = Pipeline::new().with(Offset::new(4.0)).with(Flip).with(Shift);
        assert_eq!(
            pipeline.names().collect::<alloc::vec::Vec<_>>(),
            ["offset", "flip", "shift"]
        );
        let cx = context(Rect::from_origin_size((360.0, 10.0), (30.0, 20.0)));
        let state = pipeline.compute(&cx, Placement::TopStart);
        assert_eq!(state.placement, Placement::BottomStart);
        assert_eq!(state.y, cx.anchor.y1 + 4.0);
        assert_eq!(state.rect(FLOATING).x1, cx.viewport.x1);
    }
}
