// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select: a trigger showing the chosen value and a listbox popover.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use understory_disclosure::{
    CloseCause, ConfigurationError, DisclosureConfig, DisclosureEvent, DisclosureHost, Effect,
    Key, Observable, OpenCause, Transition,
};
use understory_floating::{ChangeHub, FloatingEnv, FloatingOptions, PassOutcome, TrackingOptions};
use understory_listbox::{DEFAULT_TYPEAHEAD_TIMEOUT_MS, KeyOutcome, Navigation, OptionDescriptor};

use crate::popover::{Popover, PopoverOptions, PopoverPreset};

/// Host side of a [`Select`]: a popover host that also receives listbox ARIA state.
pub trait SelectHost<K>: DisclosureHost<K> + FloatingEnv {
    /// Set `aria-activedescendant` on the listbox, or remove it.
    fn set_active_descendant(&mut self, id: Option<K>);

    /// Set `aria-selected` on one option.
    fn set_option_selected(&mut self, id: K, selected: bool);
}

/// Host options for a [`Select`].
#[derive(Clone, Debug, PartialEq)]
pub struct SelectOptions<V> {
    /// Trigger text while nothing is selected.
    pub placeholder: String,
    /// Value selected before any interaction.
    pub initial_value: Option<V>,
    /// Typeahead inactivity timeout in milliseconds.
    pub typeahead_timeout_ms: u64,
    /// Listbox placement and middleware.
    pub floating: FloatingOptions,
    /// Which changes reposition the listbox while it is open.
    pub tracking: TrackingOptions,
}

impl<V> Default for SelectOptions<V> {
    fn default() -> Self {
        Self {
            placeholder: String::new(),
            initial_value: None,
            typeahead_timeout_ms: DEFAULT_TYPEAHEAD_TIMEOUT_MS,
            floating: FloatingOptions::default(),
            tracking: TrackingOptions::default(),
        }
    }
}

impl<V> SelectOptions<V> {
    /// Set [`placeholder`](Self::placeholder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set [`initial_value`](Self::initial_value).
    #[must_use]
    pub fn with_initial_value(mut self, value: V) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// Set [`typeahead_timeout_ms`](Self::typeahead_timeout_ms).
    #[must_use]
    pub fn with_typeahead_timeout(mut self, timeout_ms: u64) -> Self {
        self.typeahead_timeout_ms = timeout_ms;
        self
    }

    /// Set [`floating`](Self::floating).
    #[must_use]
    pub fn with_floating(mut self, floating: FloatingOptions) -> Self {
        self.floating = floating;
        self
    }
}

/// A select: disclosure, anchored listbox, and option navigation wired together.
///
/// Committing an option closes the listbox and returns focus to the trigger.
#[derive(Debug)]
pub struct Select<K, V> {
    popover: Popover<K>,
    navigation: Navigation<K, V>,
    placeholder: String,
}

impl<K: Clone, V: Clone + PartialEq> Select<K, V> {
    /// A closed select over `options`.
    ///
    /// An initial value no option carries is ignored.
    pub fn new(options: Vec<OptionDescriptor<K, V>>, select: SelectOptions<V>) -> Self {
        let mut navigation =
            Navigation::new(options).with_typeahead_timeout(select.typeahead_timeout_ms);
        if let Some(value) = select.initial_value
            && !navigation.select_value(Some(value))
        {
            tracing::debug!("initial select value matches no option");
        }
        let popover = Popover::with_config(
            DisclosureConfig::select(),
            PopoverOptions::default()
                .with_floating(select.floating)
                .with_tracking(select.tracking)
                .with_preset(PopoverPreset::Listbox),
        );
        Self {
            popover,
            navigation,
            placeholder: select.placeholder,
        }
    }

    /// Whether the listbox is open.
    pub fn is_open(&self) -> bool {
        self.popover.is_open()
    }

    /// Observable open flag.
    pub fn open_state(&self) -> Observable<bool> {
        self.popover.open_state()
    }

    /// Observable committed value.
    pub fn selected(&self) -> Observable<Option<V>> {
        self.navigation.selected_state()
    }

    /// Observable active option index.
    pub fn active_index(&self) -> Observable<Option<usize>> {
        self.navigation.active_state()
    }

    /// The option navigation state.
    pub fn navigation(&self) -> &Navigation<K, V> {
        &self.navigation
    }

    /// The underlying popover.
    pub fn popover(&self) -> &Popover<K> {
        &self.popover
    }

    /// Text for the trigger: the selected option's text, or the placeholder.
    pub fn display_text(&self) -> &str {
        self.navigation
            .selected_option()
            .map_or(self.placeholder.as_str(), |o| o.text.as_str())
    }

    /// Open the listbox.
    pub fn open(
        &mut self,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Open(OpenCause::Programmatic), host, hub)
    }

    /// Close the listbox without committing.
    pub fn close(
        &mut self,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Close(CloseCause::Programmatic), host, hub)
    }

    /// Open when closed, close when open.
    pub fn toggle(
        &mut self,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Programmatic), host, hub)
    }

    /// Pointer activation of the trigger.
    pub fn trigger_click(
        &mut self,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        self.dispatch(DisclosureEvent::Toggle(OpenCause::Pointer), host, hub)
    }

    /// A key pressed on the trigger or inside the open listbox.
    ///
    /// While closed, Enter, Space and the vertical arrows open the listbox. While
    /// open, Escape closes and everything else goes to option navigation.
    pub fn key(
        &mut self,
        key: Key,
        now_ms: u64,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        if !self.is_open() {
            return match key {
                Key::Enter | Key::Space | Key::ArrowDown | Key::ArrowUp => {
                    self.dispatch(DisclosureEvent::Open(OpenCause::Keyboard), host, hub)
                }
                _ => Ok(Transition::unchanged(self.popover.state())),
            };
        }
        if key == Key::Escape {
            return self.dispatch(DisclosureEvent::Close(CloseCause::Escape), host, hub);
        }
        if !host.is_mounted() {
            return Err(ConfigurationError::SurfaceNotMounted);
        }
        match self.navigation.handle_key(key, now_ms) {
            KeyOutcome::Close => {
                self.dispatch(DisclosureEvent::Close(CloseCause::Commit), host, hub)
            }
            KeyOutcome::Handled | KeyOutcome::Ignored => {
                self.sync_aria(host);
                Ok(Transition::unchanged(self.popover.state()))
            }
        }
    }

    /// Commit the option at `index` (for example on a click) and close.
    ///
    /// Disabled and out of range options are ignored.
    pub fn choose(
        &mut self,
        index: usize,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        if !host.is_mounted() {
            return Err(ConfigurationError::SurfaceNotMounted);
        }
        if !self.is_open() || !self.navigation.set_active(Some(index)) {
            return Ok(Transition::unchanged(self.popover.state()));
        }
        let _ = self.navigation.commit();
        self.dispatch(DisclosureEvent::Close(CloseCause::Commit), host, hub)
    }

    /// Activate the option under the pointer.
    pub fn hover(&mut self, index: usize, host: &mut impl SelectHost<K>) -> bool {
        if !self.is_open() || !self.navigation.set_active(Some(index)) {
            return false;
        }
        self.sync_aria(host);
        true
    }

    /// A pointer press anywhere in the page.
    pub fn pointer_down(
        &mut self,
        position: Point,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        let t = self.popover.pointer_down(position, host, hub)?;
        Ok(self.follow(t, host))
    }

    /// Clear the typeahead buffer once its deadline has passed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        self.navigation.expire(now_ms)
    }

    /// Replace the options, keeping the active option and selection where still valid.
    pub fn set_options(
        &mut self,
        options: Vec<OptionDescriptor<K, V>>,
        host: &mut impl SelectHost<K>,
    ) {
        self.navigation.set_options(options);
        self.sync_aria(host);
    }

    /// Reposition the listbox if a change was signalled since the last flush.
    pub fn flush(&mut self, env: &mut impl FloatingEnv) -> PassOutcome {
        self.popover.flush(env)
    }

    fn dispatch(
        &mut self,
        event: DisclosureEvent,
        host: &mut impl SelectHost<K>,
        hub: &mut ChangeHub,
    ) -> Result<Transition, ConfigurationError> {
        let t = self.popover.dispatch(event, host, hub)?;
        Ok(self.follow(t, host))
    }

    /// Run the navigation effects and resync ARIA after a transition.
    fn follow(&mut self, t: Transition, host: &mut impl SelectHost<K>) -> Transition {
        for effect in &t.effects {
            if matches!(effect, Effect::ResetNavigation | Effect::ClearNavigation) {
                self.navigation.reset();
            }
        }
        if t.changed() {
            self.sync_aria(host);
        }
        t
    }

    fn sync_aria(&self, host: &mut impl SelectHost<K>) {
        let active = if self.is_open() {
            self.navigation.active_option().map(|o| o.id.clone())
        } else {
            None
        };
        host.set_active_descendant(active);
        let selected = self.navigation.selected_index();
        for (index, option) in self.navigation.options().iter().enumerate() {
            host.set_option_selected(option.id.clone(), selected == Some(index));
        }
    }
}
