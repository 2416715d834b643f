// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active option, selected value and keyboard handling.

use alloc::string::String;
use alloc::vec::Vec;

use understory_disclosure::{Key, Observable, Signal};

use crate::typeahead::Typeahead;

/// One entry of a listbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDescriptor<K, V> {
    /// Element identifier, used for `aria-activedescendant`.
    pub id: K,
    /// Value committed when the option is chosen.
    pub value: V,
    /// Disabled options are skipped by every movement and by typeahead.
    pub disabled: bool,
    /// Visible label, matched by typeahead.
    pub text: String,
}

impl<K, V> OptionDescriptor<K, V> {
    /// An enabled option.
    pub fn new(id: K, value: V, text: impl Into<String>) -> Self {
        Self {
            id,
            value,
            disabled: false,
            text: text.into(),
        }
    }

    /// Mark the option as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Returned by [`Navigation::commit`]: the owner should close the listbox.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct CloseRequest;

/// How [`Navigation::handle_key`] treated a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Not a navigation key; let it propagate.
    Ignored,
    /// Consumed; the active option may have changed.
    Handled,
    /// Consumed and committed; the owner should close the listbox.
    Close,
}

/// Navigation state of one listbox.
///
/// The active index and the selected value are published as [`Observable`]s.
/// The active index only ever points at an enabled option.
///
/// ```rust
/// use understory_listbox::{Navigation, OptionDescriptor};
///
/// let mut nav = Navigation::new(vec![
///     OptionDescriptor::new("a", 'A', "Alpha"),
///     OptionDescriptor::new("b", 'B', "Beta").disabled(),
///     OptionDescriptor::new("c", 'C', "Gamma"),
/// ]);
///
/// assert_eq!(nav.move_next(), Some(0));
/// assert_eq!(nav.move_next(), Some(2));
/// assert_eq!(nav.move_next(), Some(0));
///
/// let _close = nav.commit();
/// assert_eq!(nav.selected_value(), Some('A'));
/// ```
#[derive(Debug)]
pub struct Navigation<K, V> {
    options: Vec<OptionDescriptor<K, V>>,
    active: Signal<Option<usize>>,
    selected: Signal<Option<V>>,
    typeahead: Typeahead,
}

impl<K, V: Clone + PartialEq> Navigation<K, V> {
    /// Navigation over `options` with nothing active or selected.
    pub fn new(options: Vec<OptionDescriptor<K, V>>) -> Self {
        Self {
            options,
            active: Signal::new(None),
            selected: Signal::new(None),
            typeahead: Typeahead::default(),
        }
    }

    /// Use a different typeahead inactivity timeout.
    #[must_use]
    pub fn with_typeahead_timeout(mut self, timeout_ms: u64) -> Self {
        self.typeahead = Typeahead::new(timeout_ms);
        self
    }

    /// Current options.
    pub fn options(&self) -> &[OptionDescriptor<K, V>] {
        &self.options
    }

    /// Index of the active option.
    pub fn active_index(&self) -> Option<usize> {
        self.active.get()
    }

    /// The active option.
    pub fn active_option(&self) -> Option<&OptionDescriptor<K, V>> {
        self.active.get().and_then(|i| self.options.get(i))
    }

    /// Observable active index.
    pub fn active_state(&self) -> Observable<Option<usize>> {
        self.active.observe()
    }

    /// Committed value.
    pub fn selected_value(&self) -> Option<V> {
        self.selected.get()
    }

    /// Observable committed value.
    pub fn selected_state(&self) -> Observable<Option<V>> {
        self.selected.observe()
    }

    /// Index of the first option carrying the committed value.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.get()?;
        self.options.iter().position(|o| o.value == selected)
    }

    /// The option carrying the committed value.
    pub fn selected_option(&self) -> Option<&OptionDescriptor<K, V>> {
        self.selected_index().and_then(|i| self.options.get(i))
    }

    /// Set the committed value directly, for example from an initial value.
    ///
    /// A value that no option carries is rejected and leaves the selection as is.
    pub fn select_value(&mut self, value: Option<V>) -> bool {
        if let Some(v) = &value
            && !self.options.iter().any(|o| o.value == *v)
        {
            return false;
        }
        self.selected.set(value);
        true
    }

    /// Current typeahead buffer.
    pub fn typeahead_buffer(&self) -> &str {
        self.typeahead.buffer()
    }

    /// When the typeahead buffer expires.
    pub fn typeahead_deadline(&self) -> Option<u64> {
        self.typeahead.deadline()
    }

    fn is_enabled(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| !o.disabled)
    }

    /// Make `index` active. Out of range and disabled indices are rejected.
    pub fn set_active(&mut self, index: Option<usize>) -> bool {
        if index.is_some_and(|i| !self.is_enabled(i)) {
            return false;
        }
        self.active.set(index);
        true
    }

    fn first_enabled(&self) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.is_enabled(i))
    }

    fn last_enabled(&self) -> Option<usize> {
        (0..self.options.len()).rev().find(|&i| self.is_enabled(i))
    }

    fn step(&self, forward: bool) -> Option<usize> {
        let len = self.options.len();
        let Some(from) = self.active.get() else {
            return if forward {
                self.first_enabled()
            } else {
                self.last_enabled()
            };
        };
        (1..=len)
            .map(|d| {
                if forward {
                    (from + d) % len
                } else {
                    (from + len - d) % len
                }
            })
            .find(|&i| self.is_enabled(i))
    }

    /// Activate the next enabled option, wrapping past the end.
    pub fn move_next(&mut self) -> Option<usize> {
        let next = self.step(true);
        self.active.set(next);
        next
    }

    /// Activate the previous enabled option, wrapping past the start.
    pub fn move_previous(&mut self) -> Option<usize> {
        let previous = self.step(false);
        self.active.set(previous);
        previous
    }

    /// Activate the first enabled option.
    pub fn move_first(&mut self) -> Option<usize> {
        let first = self.first_enabled();
        self.active.set(first);
        first
    }

    /// Activate the last enabled option.
    pub fn move_last(&mut self) -> Option<usize> {
        let last = self.last_enabled();
        self.active.set(last);
        last
    }

    /// Add `ch` to the typeahead buffer and activate the first enabled option
    /// whose text starts with it.
    ///
    /// Without a match the keystroke is dropped from the buffer and the active
    /// option is left alone.
    pub fn typeahead(&mut self, ch: char, now_ms: u64) -> Option<usize> {
        let mark = self.typeahead.push(ch, now_ms);
        let found = (0..self.options.len())
            .find(|&i| self.is_enabled(i) && self.typeahead.matches(&self.options[i].text));
        match found {
            Some(index) => {
                tracing::trace!(buffer = self.typeahead.buffer(), index, "typeahead match");
                self.active.set(Some(index));
            }
            None => {
                tracing::trace!(buffer = self.typeahead.buffer(), "typeahead miss");
                self.typeahead.rollback(mark);
            }
        }
        found
    }

    /// Clear the typeahead buffer if its deadline has passed.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        self.typeahead.expire(now_ms)
    }

    /// Select the active option's value and ask to close.
    ///
    /// With nothing active the selection is kept.
    pub fn commit(&mut self) -> CloseRequest {
        if let Some(option) = self.active_option() {
            let value = option.value.clone();
            tracing::debug!(index = self.active.get(), "option committed");
            self.selected.set(Some(value));
        }
        CloseRequest
    }

    /// Replace the options.
    ///
    /// The active index survives only if it still points at an enabled option,
    /// and the selection only if some option still carries it.
    pub fn set_options(&mut self, options: Vec<OptionDescriptor<K, V>>) {
        self.options = options;
        if self.active.get().is_some_and(|i| !self.is_enabled(i)) {
            self.active.set(None);
        }
        if let Some(selected) = self.selected.get()
            && !self.options.iter().any(|o| o.value == selected)
        {
            self.selected.set(None);
        }
    }

    /// Forget the active option and the typeahead buffer, keeping the selection.
    ///
    /// Owners call this whenever the listbox opens or closes.
    pub fn reset(&mut self) {
        self.active.set(None);
        self.typeahead.clear();
    }

    /// Handle a key pressed while the listbox is open.
    pub fn handle_key(&mut self, key: Key, now_ms: u64) -> KeyOutcome {
        match key {
            Key::ArrowDown => {
                self.move_next();
            }
            Key::ArrowUp => {
                self.move_previous();
            }
            Key::Home => {
                self.move_first();
            }
            Key::End => {
                self.move_last();
            }
            Key::Space => {
                self.typeahead.expire(now_ms);
                if self.typeahead.is_empty() {
                    let _ = self.commit();
                    return KeyOutcome::Close;
                }
                // Space inside a typed word is part of the word.
                self.typeahead(' ', now_ms);
            }
            Key::Enter => {
                let _ = self.commit();
                return KeyOutcome::Close;
            }
            Key::Character(ch) => {
                self.typeahead(ch, now_ms);
            }
            Key::Escape | Key::Tab => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }
}
