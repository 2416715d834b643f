// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal dialog.

use kurbo::Point;
use understory_disclosure::{
    ConfigurationError, Disclosure, DisclosureConfig, DisclosureHost, Key, Observable, Transition,
};

/// Host options for a [`Dialog`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DialogOptions {
    /// Render the dialog over the whole viewport. Read by the host's styling.
    pub full_screen: bool,
    /// Close on Escape.
    pub close_on_escape: bool,
    /// Close on a press on the backdrop.
    pub close_on_backdrop: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            full_screen: false,
            close_on_escape: true,
            close_on_backdrop: true,
        }
    }
}

impl DialogOptions {
    /// Set [`full_screen`](Self::full_screen).
    #[must_use]
    pub fn with_full_screen(mut self, full_screen: bool) -> Self {
        self.full_screen = full_screen;
        self
    }

    /// Set [`close_on_escape`](Self::close_on_escape).
    #[must_use]
    pub fn with_close_on_escape(mut self, close_on_escape: bool) -> Self {
        self.close_on_escape = close_on_escape;
        self
    }

    /// Set [`close_on_backdrop`](Self::close_on_backdrop).
    #[must_use]
    pub fn with_close_on_backdrop(mut self, close_on_backdrop: bool) -> Self {
        self.close_on_backdrop = close_on_backdrop;
        self
    }
}

/// A modal dialog: focus moves into the content, page scroll is locked, and focus
/// returns to the opener on close.
#[derive(Debug)]
pub struct Dialog<K> {
    disclosure: Disclosure<K>,
    options: DialogOptions,
}

impl<K: Clone> Dialog<K> {
    /// A closed dialog.
    pub fn new(options: DialogOptions) -> Self {
        let config = DisclosureConfig {
            close_on_escape: options.close_on_escape,
            close_on_outside: options.close_on_backdrop,
            ..DisclosureConfig::dialog()
        };
        Self {
            disclosure: Disclosure::new(config),
            options,
        }
    }

    /// Host options.
    pub fn options(&self) -> &DialogOptions {
        &self.options
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    /// Observable open flag.
    pub fn open_state(&self) -> Observable<bool> {
        self.disclosure.open_state()
    }

    /// Open the dialog.
    pub fn open(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.open(host)
    }

    /// Close the dialog.
    pub fn close(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.close(host)
    }

    /// Open when closed, close when open.
    pub fn toggle(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.toggle(host)
    }

    /// Pointer activation of the trigger.
    pub fn trigger_click(
        &mut self,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.trigger_click(host)
    }

    /// A key pressed inside the dialog.
    pub fn key(
        &mut self,
        key: Key,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.content_key(key, host)
    }

    /// A pointer press; presses outside the content land on the backdrop.
    pub fn pointer_down(
        &mut self,
        position: Point,
        host: &mut impl DisclosureHost<K>,
    ) -> Result<Transition, ConfigurationError> {
        self.disclosure.pointer_down(position, host)
    }
}
