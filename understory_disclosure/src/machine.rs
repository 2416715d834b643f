// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect executor around the pure transition function.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::focus::{FocusCandidate, first_focusable};
use crate::key::Key;
use crate::observable::{Observable, Signal};
use crate::state::{
    CloseCause, DisclosureConfig, DisclosureEvent, DisclosureState, Effect, InitialFocus,
    OpenCause, Transition, transition,
};

/// Misuse that is reported instead of silently ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ConfigurationError {
    /// An operation ran before the surface was mounted.
    #[error("disclosure surface is not mounted")]
    SurfaceNotMounted,
}

/// Host-side view of a disclosure surface, its trigger, and the focus system.
///
/// `K` identifies focusable elements.
pub trait DisclosureHost<K> {
    /// Whether the surface element exists.
    fn is_mounted(&self) -> bool;

    /// Show or hide the surface.
    fn set_visible(&mut self, visible: bool);

    /// The element that currently has focus.
    fn focused(&self) -> Option<K>;

    /// Move focus to `target`.
    fn focus(&mut self, target: K);

    /// The content container, focused when nothing inside it is focusable.
    fn container(&self) -> Option<K>;

    /// Focusable elements inside the content, as currently rendered.
    fn focus_candidates(&self) -> Vec<FocusCandidate<K>> {
        Vec::new()
    }

    /// Lock or release page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Mirror the state into `aria-expanded` on the trigger.
    fn set_expanded(&mut self, expanded: bool);

    /// Bounds of the content as currently rendered.
    fn content_bounds(&self) -> Option<Rect>;

    /// Bounds of the trigger, if there is one.
    fn trigger_bounds(&self) -> Option<Rect> {
        None
    }
}

/// Open/closed state machine that runs its own effects.
///
/// Effects the host trait does not cover ([`Effect::StartTracking`],
/// [`Effect::StopTracking`], [`Effect::ResetNavigation`], [`Effect::ClearNavigation`])
/// are left in the returned [`Transition`] for the owning component.
#[derive(Debug)]
pub struct Disclosure<K> {
    state: DisclosureState,
    config: DisclosureConfig,
    open: Signal<bool>,
    focus_origin: Option<K>,
}

impl<K: Clone> Disclosure<K> {
    /// Create a closed disclosure.
    pub fn new(config: DisclosureConfig) -> Self {
        Self {
            state: DisclosureState::Closed,
            config,
            open: Signal::new(false),
            focus_origin: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// Whether the surface is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Observable open flag for the host.
    pub fn open_state(&self) -> Observable<bool> {
        self.open.observe()
    }

    /// Active configuration.
    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    /// Open the surface. A no-op when already open.
    pub fn open(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Open(OpenCause::Programmatic), host)
    }

    /// Close the surface. A no-op when already closed.
    pub fn close(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Close(CloseCause::Programmatic), host)
    }

    /// Open when closed, close when open.
    pub fn toggle(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Programmatic), host)
    }

    /// Pointer activation of the trigger.
    pub fn trigger_click(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Pointer), host)
    }

    /// A key pressed while the trigger has focus.
    ///
    /// Enter and Space toggle; Escape closes. Other keys are ignored.
    pub fn trigger_key(
        &mut self,
        key: Key,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        match key {
            k if k.activates() => self.dispatch(DisclosureEvent::Toggle(OpenCause::Keyboard), host),
            Key::Escape => self.dispatch(DisclosureEvent::Close(CloseCause::Escape), host),
            _ => self.unchanged(host),
        }
    }

    /// A key pressed while focus is inside the content.
    ///
    /// Only Escape is handled here.
    pub fn content_key(
        &mut self,
        key: Key,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        match key {
            Key::Escape => self.dispatch(DisclosureEvent::Close(CloseCause::Escape), host),
            _ => self.unchanged(host),
        }
    }

    /// A pointer press anywhere in the page.
    ///
    /// Closes when the press lands outside the content as rendered right now.
    /// For anchored surfaces, presses on the trigger are left to
    /// [`trigger_click`](Self::trigger_click). A modal dialog's trigger sits under
    /// the backdrop, so a press there counts as a backdrop press.
    pub fn pointer_down(
        &mut self,
        position: Point,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        if !host.is_mounted() {
            return Err(ConfigurationError::SurfaceNotMounted);
        }
        // Bounds are read at event time, so content that moved or resized since
        // opening is hit-tested where it is now.
        let Some(content) = host.content_bounds() else {
            return Ok(Transition::unchanged(self.state));
        };
        let on_trigger = self.config.is_floating()
            && host.trigger_bounds().is_some_and(|r| r.contains(position));
        if !self.is_open() || content.contains(position) || on_trigger {
            return Ok(Transition::unchanged(self.state));
        }
        self.dispatch(DisclosureEvent::Close(CloseCause::Outside), host)
    }

    /// Feed an event through the transition function and run the host effects.
    pub fn dispatch(
        &mut self,
        event: DisclosureEvent,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        if !host.is_mounted() {
            tracing::warn!(?event, "disclosure used before its surface was mounted");
            return Err(ConfigurationError::SurfaceNotMounted);
        }
        let t = transition(self.state, event, &self.config);
        if !t.changed() {
            return Ok(t);
        }
        tracing::debug!(
            kind = ?self.config.kind,
            from = ?t.from,
            to = ?t.to,
            ?event,
            "disclosure transition"
        );
        self.state = t.to;
        for effect in &t.effects {
            self.run(*effect, host);
        }
        self.open.set(self.state.is_open());
        Ok(t)
    }

    fn run(&mut self, effect: Effect, host: &mut impl DisclosureHost<K>) {
        match effect {
            Effect::ShowSurface => host.set_visible(true),
            Effect::HideSurface => host.set_visible(false),
            Effect::SaveFocusOrigin => self.focus_origin = host.focused(),
            Effect::MoveFocus(InitialFocus::FirstFocusable) => {
                if let Some(target) =
                    first_focusable(&host.focus_candidates()).or_else(|| host.container())
                {
                    host.focus(target);
                }
            }
            Effect::MoveFocus(InitialFocus::Container) => {
                if let Some(target) = host.container() {
                    host.focus(target);
                }
            }
            Effect::MoveFocus(InitialFocus::None) => {}
            Effect::RestoreFocus => {
                if let Some(target) = self.focus_origin.take() {
                    host.focus(target);
                }
            }
            Effect::LockScroll => host.set_scroll_locked(true),
            Effect::UnlockScroll => host.set_scroll_locked(false),
            Effect::SyncExpanded(expanded) => host.set_expanded(expanded),
            Effect::StartTracking
            | Effect::StopTracking
            | Effect::ResetNavigation
            | Effect::ClearNavigation => {}
        }
    }

    fn unchanged(&self, host: &impl DisclosureHost<K>) -> Result<Transition, ConfigurationError> {
        if !host.is_mounted() {
            return Err(ConfigurationError::SurfaceNotMounted);
        }
        Ok(Transition::unchanged(self.state))
    }
}
