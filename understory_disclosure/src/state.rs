// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure state and transition function.
//!
//! [`transition`] maps a state and an event to the next state plus the list of
//! [`Effect`]s to run. It never performs them; see [`Disclosure`](crate::Disclosure)
//! for the executor.

use smallvec::SmallVec;

/// Visibility of a disclosure surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    /// Hidden.
    #[default]
    Closed,
    /// Shown.
    Open,
}

impl DisclosureState {
    /// Whether this is [`DisclosureState::Open`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// What asked the surface to open.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpenCause {
    /// Pointer activation of the trigger.
    Pointer,
    /// Keyboard activation of the trigger.
    Keyboard,
    /// A call from the host application.
    Programmatic,
}

/// What asked the surface to close.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CloseCause {
    /// A call from the host application.
    Programmatic,
    /// The Escape key.
    Escape,
    /// A pointer press on the backdrop or anywhere outside the content.
    Outside,
    /// The trigger was activated again.
    Toggle,
    /// An option was committed.
    Commit,
}

/// Input to [`transition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureEvent {
    /// Request to open.
    Open(OpenCause),
    /// Request to close.
    Close(CloseCause),
    /// Open when closed, close when open.
    Toggle(OpenCause),
}

/// Which primitive a disclosure drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DisclosureKind {
    /// Modal dialog.
    Dialog,
    /// Non-modal popover anchored to a trigger.
    Popover,
    /// Select listbox anchored to a trigger.
    Select,
}

/// Where focus goes when the surface opens.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitialFocus {
    /// Leave focus where it is.
    #[default]
    None,
    /// The first focusable element of the content, or the container when there is none.
    FirstFocusable,
    /// The content container itself.
    Container,
}

/// Behavior switches for one disclosure.
///
/// Use [`DisclosureConfig::dialog`], [`DisclosureConfig::popover`], or
/// [`DisclosureConfig::select`] for the standard presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DisclosureConfig {
    /// Primitive kind.
    pub kind: DisclosureKind,
    /// Focus target on open.
    pub initial_focus: InitialFocus,
    /// Lock page scrolling while open.
    pub lock_scroll: bool,
    /// Close on Escape.
    pub close_on_escape: bool,
    /// Close on a pointer press outside the content.
    pub close_on_outside: bool,
    /// Return focus to where it was before opening.
    pub restore_focus: bool,
}

impl DisclosureConfig {
    /// Modal dialog: focus moves in, page scroll is locked.
    #[must_use]
    pub const fn dialog() -> Self {
        Self {
            kind: DisclosureKind::Dialog,
            initial_focus: InitialFocus::FirstFocusable,
            lock_scroll: true,
            close_on_escape: true,
            close_on_outside: true,
            restore_focus: true,
        }
    }

    /// Popover: focus stays put, page keeps scrolling.
    #[must_use]
    pub const fn popover() -> Self {
        Self {
            kind: DisclosureKind::Popover,
            initial_focus: InitialFocus::None,
            lock_scroll: false,
            close_on_escape: true,
            close_on_outside: true,
            restore_focus: true,
        }
    }

    /// Select: like a popover, plus option navigation.
    #[must_use]
    pub const fn select() -> Self {
        Self {
            kind: DisclosureKind::Select,
            ..Self::popover()
        }
    }

    /// Override the initial focus target.
    #[must_use]
    pub const fn with_initial_focus(mut self, initial_focus: InitialFocus) -> Self {
        self.initial_focus = initial_focus;
        self
    }

    /// Whether the surface is positioned against an anchor.
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self.kind, DisclosureKind::Popover | DisclosureKind::Select)
    }

    /// Whether the surface hosts option navigation.
    #[must_use]
    pub const fn has_navigation(&self) -> bool {
        matches!(self.kind, DisclosureKind::Select)
    }
}

/// Side effect requested by a transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Make the surface visible.
    ShowSurface,
    /// Hide the surface.
    HideSurface,
    /// Remember the currently focused element.
    SaveFocusOrigin,
    /// Move focus into the content.
    MoveFocus(InitialFocus),
    /// Return focus to the remembered element.
    RestoreFocus,
    /// Lock page scrolling.
    LockScroll,
    /// Release the page scroll lock.
    UnlockScroll,
    /// Mirror the state into `aria-expanded` on the trigger.
    SyncExpanded(bool),
    /// Start positioning the surface against its anchor.
    StartTracking,
    /// Stop positioning the surface.
    StopTracking,
    /// Reset option navigation for a fresh open.
    ResetNavigation,
    /// Clear option navigation state.
    ClearNavigation,
}

/// Effects produced by one transition.
pub type Effects = SmallVec<[Effect; 8]>;

/// Result of [`transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State before the event.
    pub from: DisclosureState,
    /// State after the event.
    pub to: DisclosureState,
    /// Effects to run, in order. Empty when nothing changed.
    pub effects: Effects,
}

impl Transition {
    /// Whether the state changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.from != self.to
    }

    /// A transition that leaves `state` as is.
    #[must_use]
    pub fn unchanged(state: DisclosureState) -> Self {
        Self {
            from: state,
            to: state,
            effects: Effects::new(),
        }
    }
}

fn open_effects(config: &DisclosureConfig) -> Effects {
    let mut effects = Effects::new();
    effects.push(Effect::ShowSurface);
    if config.restore_focus {
        effects.push(Effect::SaveFocusOrigin);
    }
    if config.lock_scroll {
        effects.push(Effect::LockScroll);
    }
    if config.is_floating() {
        effects.push(Effect::StartTracking);
    }
    if config.has_navigation() {
        effects.push(Effect::ResetNavigation);
    }
    if config.initial_focus != InitialFocus::None {
        effects.push(Effect::MoveFocus(config.initial_focus));
    }
    effects.push(Effect::SyncExpanded(true));
    effects
}

fn close_effects(config: &DisclosureConfig) -> Effects {
    let mut effects = Effects::new();
    effects.push(Effect::HideSurface);
    if config.lock_scroll {
        effects.push(Effect::UnlockScroll);
    }
    if config.is_floating() {
        effects.push(Effect::StopTracking);
    }
    if config.has_navigation() {
        effects.push(Effect::ClearNavigation);
    }
    effects.push(Effect::SyncExpanded(false));
    if config.restore_focus {
        effects.push(Effect::RestoreFocus);
    }
    effects
}

/// Compute the next state and its effects.
///
/// Opening an open surface and closing a closed one produce no effects. Escape and
/// outside presses are ignored when the config disables them.
#[must_use]
pub fn transition(
    state: DisclosureState,
    event: DisclosureEvent,
    config: &DisclosureConfig,
) -> Transition {
    let event = match (state, event) {
        (DisclosureState::Closed, DisclosureEvent::Toggle(cause)) => DisclosureEvent::Open(cause),
        (DisclosureState::Open, DisclosureEvent::Toggle(_)) => {
            DisclosureEvent::Close(CloseCause::Toggle)
        }
        (_, event) => event,
    };
    match (state, event) {
        (DisclosureState::Closed, DisclosureEvent::Open(_)) => Transition {
            from: state,
            to: DisclosureState::Open,
            effects: open_effects(config),
        },
        (DisclosureState::Open, DisclosureEvent::Close(CloseCause::Escape))
            if !config.close_on_escape =>
        {
            Transition::unchanged(state)
        }
        (DisclosureState::Open, DisclosureEvent::Close(CloseCause::Outside))
            if !config.close_on_outside =>
        {
            Transition::unchanged(state)
        }
        (DisclosureState::Open, DisclosureEvent::Close(_)) => Transition {
            from: state,
            to: DisclosureState::Closed,
            effects: close_effects(config),
        },
        _ => Transition::unchanged(state),
    }
}
