// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-modal surface anchored to its trigger.

use kurbo::Point;
use understory_disclosure::{
    CloseCause, ConfigurationError, Disclosure, DisclosureConfig, DisclosureEvent, DisclosureHost,
    DisclosureState, Effect, Key, Observable, OpenCause, Transition,
};
use understory_floating::{
    ChangeHub, FloatingEnv, FloatingOptions, PassOutcome, Tracking, TrackingOptions,
    start_tracking,
};

/// ARIA role preset for the popover content.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PopoverPreset {
    /// Plain content.
    #[default]
    None,
    /// Content is a listbox.
    Listbox,
}

impl PopoverPreset {
    /// The `role` attribute for the content, if any.
    #[must_use]
    pub const fn role(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Listbox => Some("listbox"),
        }
    }
}

/// Host options for a [`Popover`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopoverOptions {
    /// Placement and middleware.
    pub floating: FloatingOptions,
    /// Which changes reposition the surface while it is open.
    pub tracking: TrackingOptions,
    /// Content role.
    pub preset: PopoverPreset,
}

impl PopoverOptions {
    /// Set [`floating`](Self::floating).
    #[must_use]
    pub fn with_floating(mut self, floating: FloatingOptions) -> Self {
        self.floating = floating;
        self
    }

    /// Set [`tracking`](Self::tracking).
    #[must_use]
    pub fn with_tracking(mut self, tracking: TrackingOptions) -> Self {
        self.tracking = tracking;
        self
    }

    /// Set [`preset`](Self::preset).
    #[must_use]
    pub fn with_preset(mut self, preset: PopoverPreset) -> Self {
        self.preset = preset;
        self
    }
}

/// A popover: a disclosure whose surface follows its anchor while open.
///
/// Opening starts a [`Tracking`] session on the host's [`ChangeHub`] and positions
/// the surface right away. Closing cancels the session.
#[derive(Debug)]
pub struct Popover<K> {
    disclosure: Disclosure<K>,
    options: PopoverOptions,
    tracking: Option<Tracking>,
}

impl<K: Clone> Popover<K> {
    /// A closed popover.
    pub fn new(options: PopoverOptions) -> Self {
        Self::with_config(DisclosureConfig::popover(), options)
    }

    pub(crate) fn with_config(config: DisclosureConfig, options: PopoverOptions) -> Self {
        Self {
            disclosure: Disclosure::new(config),
            options,
            tracking: None,
        }
    }

    /// Host options.
    pub fn options(&self) -> &PopoverOptions {
        &self.options
    }

    /// The content `role` attribute.
    pub fn role(&self) -> Option<&'static str> {
        self.options.preset.role()
    }

    /// Current state.
    pub fn state(&self) -> DisclosureState {
        self.disclosure.state()
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Observable open flag.
    pub fn open_state(&self) -> Observable<bool> {
        self.disclosure.open_state()
    }

    /// The running positioning session, while open.
    pub fn tracking(&self) -> Option<&Tracking> {
        self.tracking.as_ref()
    }

    /// Open the popover.
    pub fn open<H>(
        &mut self,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        self.dispatch(DisclosureEvent::Open(OpenCause::Programmatic), host, hub)
    }

    /// Close the popover.
    pub fn close<H>(
        &mut self,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        self.dispatch(DisclosureEvent::Close(CloseCause::Programmatic), host, hub)
    }

    /// Open when closed, close when open.
    pub fn toggle<H>(
        &mut self,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Programmatic), host, hub)
    }

    /// Pointer activation of the trigger.
    pub fn trigger_click<H>(
        &mut self,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Pointer), host, hub)
    }

    /// A key pressed while the trigger has focus.
    pub fn trigger_key<H>(
        &mut self,
        key: Key,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        let t = self.disclosure.trigger_key(key, host)?;
        Ok(self.follow(t, host, hub))
    }

    /// A key pressed inside the content.
    pub fn key<H>(
        &mut self,
        key: Key,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        let t = self.disclosure.content_key(key, host)?;
        Ok(self.follow(t, host, hub))
    }

    /// A pointer press anywhere in the page.
    pub fn pointer_down<H>(
        &mut self,
        position: Point,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        let t = self.disclosure.pointer_down(position, host)?;
        Ok(self.follow(t, host, hub))
    }

    /// Reposition the surface if a change was signalled since the last flush.
    ///
    /// Returns [`PassOutcome::Cancelled`] while closed.
    pub fn flush(&mut self, env: &mut impl FloatingEnv) -> PassOutcome {
        match &mut self.tracking {
            Some(tracking) => tracking.flush(env),
            None => PassOutcome::Cancelled,
        }
    }

    pub(crate) fn dispatch<H>(
        &mut self,
        event: DisclosureEvent,
        host: &mut H,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError>
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        let t = self.disclosure.dispatch(event, host)?;
        Ok(self.follow(t, host, hub))
    }

    /// Run the positioning effects the disclosure leaves to its owner.
    fn follow<H>(&mut self, t: Transition, host: &mut H, hub: &mut ChangeHub) -> Transition
    where
        H: DisclosureHost<K> + FloatingEnv,
    {
        for effect in &t.effects {
            match effect {
                Effect::StartTracking => {
                    let mut tracking =
                        start_tracking(hub, &self.options.floating, self.options.tracking);
                    tracking.flush(host);
                    self.tracking = Some(tracking);
                }
                Effect::StopTracking => {
                    if let Some(mut tracking) = self.tracking.take() {
                        tracking.cancel();
                    }
                }
                _ => {}
            }
        }
        t
    }
}
