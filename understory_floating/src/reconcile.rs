// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keep a floating element positioned while its anchor moves.
//!
//! The host owns a [`ChangeHub`] and forwards scroll, resize, layout-shift and
//! animation-frame signals to it. Each [`Tracking`] session subscribes to the
//! sources enabled in its [`TrackingOptions`]; a signal only marks the session as
//! pending. The host then calls [`Tracking::flush`] once per scheduling tick, which
//! runs at most one pass no matter how many signals arrived since the last one.
//!
//! A pass reads geometry from a [`FloatingEnv`], runs the middleware pipeline, and
//! writes a [`FloatingStyle`] back. Missing handles skip the pass quietly; the next
//! signal retries.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_floating::{
//!     ChangeHub, ChangeSource, FloatingEnv, FloatingOptions, FloatingStyle, PassOutcome,
//!     TrackingOptions, start_tracking,
//! };
//!
//! struct Env {
//!     style: Option<FloatingStyle>,
//! }
//!
//! impl FloatingEnv for Env {
//!     fn reference_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(10.0, 10.0, 50.0, 30.0))
//!     }
//!     fn floating_size(&self) -> Option<Size> {
//!         Some(Size::new(100.0, 40.0))
//!     }
//!     fn viewport(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 800.0, 600.0)
//!     }
//!     fn write_style(&mut self, style: &FloatingStyle) -> bool {
//!         self.style = Some(style.clone());
//!         true
//!     }
//! }
//!
//! let mut hub = ChangeHub::new();
//! let mut env = Env { style: None };
//! let mut tracking = start_tracking(&mut hub, &FloatingOptions::default(), TrackingOptions::default());
//!
//! // The first flush positions the element.
//! assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
//! assert_eq!(env.style.as_ref().map(|s| (s.left, s.top)), Some((10.0, 30.0)));
//!
//! // Any number of signals coalesce into one pass.
//! hub.notify(ChangeSource::AncestorScroll);
//! hub.notify(ChangeSource::AncestorResize);
//! assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
//! assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);
//!
//! tracking.cancel();
//! assert_eq!(hub.listener_count(), 0);
//! ```

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Rect, Size};

use crate::middleware::{MiddlewareContext, MiddlewareState, Pipeline};
use crate::options::FloatingOptions;
use crate::placement::Placement;

bitflags::bitflags! {
    /// Set of change sources a tracking session listens to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ChangeSources: u8 {
        /// Scrolling of any scroll container around the anchor or floating element.
        const ANCESTOR_SCROLL = 0b0000_0001;
        /// Resizing of the window or a containing block.
        const ANCESTOR_RESIZE = 0b0000_0010;
        /// Resizing of the anchor or the floating element itself.
        const ELEMENT_RESIZE  = 0b0000_0100;
        /// The anchor moved without a scroll or resize (for example, a layout shift).
        const LAYOUT_SHIFT    = 0b0000_1000;
        /// Every animation frame; useful for anchors moved by transforms.
        const ANIMATION_FRAME = 0b0001_0000;
    }
}

/// A single change signal forwarded by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeSource {
    /// See [`ChangeSources::ANCESTOR_SCROLL`].
    AncestorScroll,
    /// See [`ChangeSources::ANCESTOR_RESIZE`].
    AncestorResize,
    /// See [`ChangeSources::ELEMENT_RESIZE`].
    ElementResize,
    /// See [`ChangeSources::LAYOUT_SHIFT`].
    LayoutShift,
    /// See [`ChangeSources::ANIMATION_FRAME`].
    AnimationFrame,
}

impl ChangeSource {
    /// The flag this source corresponds to.
    #[must_use]
    pub const fn flag(self) -> ChangeSources {
        match self {
            Self::AncestorScroll => ChangeSources::ANCESTOR_SCROLL,
            Self::AncestorResize => ChangeSources::ANCESTOR_RESIZE,
            Self::ElementResize => ChangeSources::ELEMENT_RESIZE,
            Self::LayoutShift => ChangeSources::LAYOUT_SHIFT,
            Self::AnimationFrame => ChangeSources::ANIMATION_FRAME,
        }
    }
}

/// Which change sources a tracking session subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TrackingOptions {
    /// Listen to ancestor scrolling. Default `true`.
    pub ancestor_scroll: bool,
    /// Listen to ancestor resizing. Default `true`.
    pub ancestor_resize: bool,
    /// Listen to anchor and floating element resizing. Default `true`.
    pub element_resize: bool,
    /// Listen to layout shifts. Default `true`.
    pub layout_shift: bool,
    /// Check the anchor on every animation frame. Default `false`.
    pub animation_frame: bool,
}

impl Default for TrackingOptions {
    fn default() -> Self {
        Self {
            ancestor_scroll: true,
            ancestor_resize: true,
            element_resize: true,
            layout_shift: true,
            animation_frame: false,
        }
    }
}

impl TrackingOptions {
    /// Enable or disable per-frame checks.
    #[must_use]
    pub fn with_animation_frame(mut self, animation_frame: bool) -> Self {
        self.animation_frame = animation_frame;
        self
    }

    /// The enabled sources as a flag set.
    #[must_use]
    pub fn sources(&self) -> ChangeSources {
        let mut sources = ChangeSources::empty();
        sources.set(ChangeSources::ANCESTOR_SCROLL, self.ancestor_scroll);
        sources.set(ChangeSources::ANCESTOR_RESIZE, self.ancestor_resize);
        sources.set(ChangeSources::ELEMENT_RESIZE, self.element_resize);
        sources.set(ChangeSources::LAYOUT_SHIFT, self.layout_shift);
        sources.set(ChangeSources::ANIMATION_FRAME, self.animation_frame);
        sources
    }
}

/// State shared between a [`Tracking`] session and the hub.
#[derive(Debug)]
struct Subscription {
    sources: ChangeSources,
    /// Bumped on every accepted signal.
    epoch: Cell<u64>,
    frame_due: Cell<bool>,
    cancelled: Cell<bool>,
}

impl Subscription {
    fn signal(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}

/// Fan-out point for change signals.
///
/// The hub only holds weak references: dropping or cancelling a [`Tracking`]
/// unsubscribes it, and dead entries are pruned on the next notification.
#[derive(Debug, Default)]
pub struct ChangeHub {
    listeners: Vec<Weak<Subscription>>,
}

impl ChangeHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a signal to every live session listening to `source`.
    ///
    /// Returns how many sessions were scheduled.
    pub fn notify(&mut self, source: ChangeSource) -> usize {
        let flag = source.flag();
        let mut scheduled = 0;
        self.listeners.retain(|weak| {
            let Some(sub) = weak.upgrade() else {
                return false;
            };
            if sub.cancelled.get() {
                return false;
            }
            if sub.sources.contains(flag) {
                if source == ChangeSource::AnimationFrame {
                    sub.frame_due.set(true);
                } else {
                    sub.signal();
                }
                scheduled += 1;
            }
            true
        });
        scheduled
    }

    /// Shorthand for `notify(ChangeSource::AnimationFrame)`.
    pub fn frame(&mut self) -> usize {
        self.notify(ChangeSource::AnimationFrame)
    }

    /// Number of live, uncancelled sessions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|sub| !sub.cancelled.get())
            .count()
    }

    fn register(&mut self, subscription: &Rc<Subscription>) {
        self.listeners
            .retain(|weak| weak.upgrade().is_some_and(|sub| !sub.cancelled.get()));
        self.listeners.push(Rc::downgrade(subscription));
    }
}

/// The only fields a pass writes to the floating surface.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingStyle {
    /// Left offset in pixels.
    pub left: f64,
    /// Top offset in pixels.
    pub top: f64,
    /// Opaque transform string, passed through unmodified.
    pub transform: Option<String>,
}

/// Host-side view of an anchor and its floating surface.
pub trait FloatingEnv {
    /// Anchor bounds in viewport coordinates, or `None` when it is not mounted.
    fn reference_rect(&self) -> Option<Rect>;

    /// Floating element size, or `None` when it is not mounted.
    fn floating_size(&self) -> Option<Size>;

    /// Visible viewport bounds.
    fn viewport(&self) -> Rect;

    /// Bounds of the anchor's nearest clipping ancestor, if any.
    fn clipping_rect(&self) -> Option<Rect> {
        None
    }

    /// Write `style` to the floating surface.
    ///
    /// Returns `false` when the surface went away, in which case nothing is written.
    fn write_style(&mut self, style: &FloatingStyle) -> bool;
}

/// Why a pass wrote nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The anchor is not mounted.
    AnchorMissing,
    /// The floating element is not mounted.
    FloatingMissing,
    /// The surface was removed before the write.
    SurfaceDetached,
}

/// Result of [`Tracking::flush`] or [`Tracking::apply`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PassOutcome {
    /// Nothing was pending.
    Idle,
    /// A new style was written.
    Written,
    /// A newer signal superseded this pass, or the ticket came from another
    /// session; nothing was written.
    Stale,
    /// A handle was missing; nothing was written.
    Skipped(SkipReason),
    /// The session was cancelled.
    Cancelled,
}

/// Proof that a pass was started, consumed by [`Tracking::apply`].
///
/// A ticket is only accepted by the session that issued it.
#[derive(Debug)]
pub struct PassTicket {
    epoch: u64,
    session: Weak<Subscription>,
}

/// An active positioning session for one floating surface.
///
/// Cancelling is idempotent, and dropping the session cancels it.
#[derive(Debug)]
pub struct Tracking {
    subscription: Rc<Subscription>,
    pipeline: Pipeline,
    placement: Placement,
    transform: Option<String>,
    consumed: u64,
    last_anchor: Option<Rect>,
    last_state: Option<MiddlewareState>,
}

/// Start keeping a floating element positioned.
///
/// The session subscribes to `hub` and is immediately pending, so the first
/// [`Tracking::flush`] positions the element.
pub fn start_tracking(
    hub: &mut ChangeHub,
    options: &FloatingOptions,
    tracking: TrackingOptions,
) -> Tracking {
    let subscription = Rc::new(Subscription {
        sources: tracking.sources(),
        epoch: Cell::new(1),
        frame_due: Cell::new(false),
        cancelled: Cell::new(false),
    });
    hub.register(&subscription);
    tracing::debug!(
        placement = %options.placement,
        sources = ?subscription.sources,
        "floating tracking started"
    );
    Tracking {
        subscription,
        pipeline: options.pipeline(),
        placement: options.placement,
        transform: options.transform.clone(),
        consumed: 0,
        last_anchor: None,
        last_state: None,
    }
}

impl Tracking {
    /// Schedule a pass regardless of subscriptions (for example after the anchor changed).
    pub fn update(&self) {
        if !self.subscription.cancelled.get() {
            self.subscription.signal();
        }
    }

    /// Whether a pass is waiting to run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.subscription.cancelled.get() && self.subscription.epoch.get() != self.consumed
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.subscription.cancelled.get()
    }

    /// The last state that was written to the surface.
    #[must_use]
    pub fn last_state(&self) -> Option<&MiddlewareState> {
        self.last_state.as_ref()
    }

    /// Stop listening to every source. Further calls are no-ops.
    pub fn cancel(&mut self) {
        if self.subscription.cancelled.replace(true) {
            return;
        }
        self.subscription.frame_due.set(false);
        tracing::debug!(placement = %self.placement, "floating tracking cancelled");
    }

    /// Claim the pending pass, if any.
    ///
    /// The returned ticket goes stale as soon as another signal arrives.
    pub fn begin_pass(&mut self) -> Option<PassTicket> {
        if !self.is_pending() {
            return None;
        }
        let epoch = self.subscription.epoch.get();
        self.consumed = epoch;
        Some(PassTicket {
            epoch,
            session: Rc::downgrade(&self.subscription),
        })
    }

    /// Run the pipeline against the current geometry.
    pub fn compute(&self, env: &impl FloatingEnv) -> Result<MiddlewareState, SkipReason> {
        let anchor = env.reference_rect().ok_or(SkipReason::AnchorMissing)?;
        let floating = env.floating_size().ok_or(SkipReason::FloatingMissing)?;
        let context = MiddlewareContext {
            anchor,
            floating,
            viewport: env.viewport(),
            clipping: env.clipping_rect(),
        };
        Ok(self.pipeline.compute(&context, self.placement))
    }

    /// Write the result of a pass, unless a newer signal superseded it.
    pub fn apply(
        &mut self,
        ticket: PassTicket,
        state: MiddlewareState,
        env: &mut impl FloatingEnv,
    ) -> PassOutcome {
        if self.is_cancelled() {
            return PassOutcome::Cancelled;
        }
        if !core::ptr::eq(ticket.session.as_ptr(), Rc::as_ptr(&self.subscription)) {
            tracing::trace!("floating pass ticket from another session dropped");
            return PassOutcome::Stale;
        }
        if ticket.epoch != self.subscription.epoch.get() {
            tracing::trace!(epoch = ticket.epoch, "stale floating pass dropped");
            return PassOutcome::Stale;
        }
        let style = FloatingStyle {
            left: state.x,
            top: state.y,
            transform: self.transform.clone(),
        };
        if !env.write_style(&style) {
            tracing::trace!("floating surface detached; write skipped");
            return PassOutcome::Skipped(SkipReason::SurfaceDetached);
        }
        self.last_state = Some(state);
        PassOutcome::Written
    }

    /// Run the pending pass, if any, and write its result.
    ///
    /// With per-frame checks enabled, a frame signal only schedules a pass when
    /// the anchor bounds changed since the previous flush.
    pub fn flush(&mut self, env: &mut impl FloatingEnv) -> PassOutcome {
        if self.is_cancelled() {
            return PassOutcome::Cancelled;
        }
        if self.subscription.frame_due.replace(false) && env.reference_rect() != self.last_anchor
        {
            self.subscription.signal();
        }
        let Some(ticket) = self.begin_pass() else {
            return PassOutcome::Idle;
        };
        self.last_anchor = env.reference_rect();
        match self.compute(env) {
            Ok(state) => self.apply(ticket, state, env),
            Err(reason) => {
                tracing::trace!(?reason, "floating pass skipped");
                PassOutcome::Skipped(reason)
            }
        }
    }
}

impl Drop for Tracking {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::HideStrategy;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct TestEnv {
        anchor: Option<Rect>,
        floating: Option<Size>,
        viewport: Rect,
        mounted: bool,
        writes: Vec<FloatingStyle>,
    }

    impl TestEnv {
        fn new() -> Self {
            Self {
                anchor: Some(Rect::new(100.0, 100.0, 140.0, 120.0)),
                floating: Some(Size::new(80.0, 40.0)),
                viewport: Rect::new(0.0, 0.0, 400.0, 300.0),
                mounted: true,
                writes: Vec::new(),
            }
        }
    }

    impl FloatingEnv for TestEnv {
        fn reference_rect(&self) -> Option<Rect> {
            self.anchor
        }

        fn floating_size(&self) -> Option<Size> {
            self.floating
        }

        fn viewport(&self) -> Rect {
            self.viewport
        }

        fn write_style(&mut self, style: &FloatingStyle) -> bool {
            if self.mounted {
                self.writes.push(style.clone());
            }
            self.mounted
        }
    }

    fn track(hub: &mut ChangeHub) -> Tracking {
        start_tracking(hub, &FloatingOptions::default(), TrackingOptions::default())
    }

    #[test]
    fn first_flush_writes_the_initial_position() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = track(&mut hub);
        assert!(tracking.is_pending());
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
        assert_eq!(
            env.writes,
            [FloatingStyle {
                left: 100.0,
                top: 120.0,
                transform: None,
            }]
        );
    }

    #[test]
    fn signals_within_one_tick_coalesce() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = track(&mut hub);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);

        for step in 1..=5 {
            let dy = f64::from(step);
            env.anchor = Some(Rect::new(100.0, 100.0 + dy, 140.0, 120.0 + dy));
            assert_eq!(hub.notify(ChangeSource::ElementResize), 1);
        }
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);

        assert_eq!(env.writes.len(), 2, "one initial write, one coalesced write");
        assert_eq!(env.writes[1].top, 125.0, "reflects the final anchor");
    }

    #[test]
    fn superseded_pass_is_not_applied() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = track(&mut hub);

        let ticket = tracking.begin_pass().expect("initial pass is pending");
        let state = tracking.compute(&env).expect("geometry present");
        hub.notify(ChangeSource::AncestorScroll);
        assert_eq!(tracking.apply(ticket, state, &mut env), PassOutcome::Stale);
        assert!(env.writes.is_empty());

        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
        assert_eq!(env.writes.len(), 1);
    }

    #[test]
    fn ticket_is_bound_to_its_session() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut first = track(&mut hub);
        let mut second = track(&mut hub);

        // Both sessions sit at the same epoch.
        let foreign = first.begin_pass().expect("initial pass is pending");
        let own = second.begin_pass().expect("initial pass is pending");
        let state = second.compute(&env).expect("geometry present");
        assert_eq!(second.apply(foreign, state, &mut env), PassOutcome::Stale);
        assert!(env.writes.is_empty());

        assert_eq!(second.apply(own, state, &mut env), PassOutcome::Written);
        assert_eq!(env.writes.len(), 1);
    }

    #[test]
    fn closed_sessions_do_not_pile_up_in_the_hub() {
        let mut hub = ChangeHub::new();
        for _ in 0..32 {
            let mut tracking = track(&mut hub);
            tracking.cancel();
            let dropped = track(&mut hub);
            drop(dropped);
        }
        let live = track(&mut hub);
        assert_eq!(hub.listener_count(), 1);
        assert_eq!(hub.listeners.len(), 1);
        drop(live);
    }

    #[test]
    fn disabled_sources_are_ignored() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let options = TrackingOptions {
            ancestor_scroll: false,
            ..TrackingOptions::default()
        };
        let mut tracking = start_tracking(&mut hub, &FloatingOptions::default(), options);
        tracking.flush(&mut env);

        assert_eq!(hub.notify(ChangeSource::AncestorScroll), 0);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);
        assert_eq!(hub.notify(ChangeSource::AncestorResize), 1);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
    }

    #[test]
    fn missing_anchor_skips_until_the_next_signal() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        env.anchor = None;
        let mut tracking = track(&mut hub);

        assert_eq!(
            tracking.flush(&mut env),
            PassOutcome::Skipped(SkipReason::AnchorMissing)
        );
        assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);
        assert!(env.writes.is_empty());

        env.anchor = Some(Rect::new(0.0, 0.0, 10.0, 10.0));
        tracking.update();
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
    }

    #[test]
    fn detached_surface_is_skipped_silently() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        env.mounted = false;
        let mut tracking = track(&mut hub);
        assert_eq!(
            tracking.flush(&mut env),
            PassOutcome::Skipped(SkipReason::SurfaceDetached)
        );
        assert!(tracking.last_state().is_none());

        env.floating = None;
        tracking.update();
        assert_eq!(
            tracking.flush(&mut env),
            PassOutcome::Skipped(SkipReason::FloatingMissing)
        );
    }

    #[test]
    fn cancel_is_idempotent_and_unsubscribes() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = track(&mut hub);
        assert_eq!(hub.listener_count(), 1);

        tracking.cancel();
        tracking.cancel();
        assert!(tracking.is_cancelled());
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.notify(ChangeSource::AncestorScroll), 0);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Cancelled);
        assert!(env.writes.is_empty());
    }

    #[test]
    fn dropping_the_session_unsubscribes() {
        let mut hub = ChangeHub::new();
        {
            let _tracking = track(&mut hub);
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.notify(ChangeSource::LayoutShift), 0);
    }

    #[test]
    fn animation_frames_only_pass_when_the_anchor_moved() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = start_tracking(
            &mut hub,
            &FloatingOptions::default(),
            TrackingOptions::default().with_animation_frame(true),
        );
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);

        hub.frame();
        assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);

        env.anchor = Some(Rect::new(110.0, 100.0, 150.0, 120.0));
        hub.frame();
        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
        assert_eq!(env.writes.last().map(|s| s.left), Some(110.0));
    }

    #[test]
    fn frames_are_ignored_without_the_toggle() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        let mut tracking = track(&mut hub);
        tracking.flush(&mut env);
        env.anchor = Some(Rect::new(110.0, 100.0, 150.0, 120.0));
        assert_eq!(hub.frame(), 0);
        assert_eq!(tracking.flush(&mut env), PassOutcome::Idle);
    }

    #[test]
    fn transform_is_passed_through_and_hide_data_is_kept() {
        let mut hub = ChangeHub::new();
        let mut env = TestEnv::new();
        env.anchor = Some(Rect::new(100.0, -50.0, 140.0, -30.0));
        let options = FloatingOptions::default()
            .with_flip(false)
            .with_hide(Some(HideStrategy::ReferenceHidden))
            .with_transform("translate3d(0, 0, 0)");
        let mut tracking = start_tracking(&mut hub, &options, TrackingOptions::default());

        assert_eq!(tracking.flush(&mut env), PassOutcome::Written);
        assert_eq!(
            env.writes[0].transform.as_deref(),
            Some("translate3d(0, 0, 0)")
        );
        assert!(tracking.last_state().is_some_and(|s| s.data.hidden()));
    }
}
