// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead buffer with an explicit expiry deadline.

use alloc::string::String;

/// Inactivity after which the typeahead buffer is cleared, in milliseconds.
pub const DEFAULT_TYPEAHEAD_TIMEOUT_MS: u64 = 500;

/// Lowercased characters typed in quick succession.
///
/// Time is supplied by the caller, so there is no timer to cancel: the buffer is
/// cleared by [`Typeahead::expire`] or lazily by the next [`Typeahead::push`] once
/// the deadline has passed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typeahead {
    buffer: String,
    deadline: Option<u64>,
    timeout_ms: u64,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new(DEFAULT_TYPEAHEAD_TIMEOUT_MS)
    }
}

impl Typeahead {
    /// An empty buffer that expires `timeout_ms` after the last keystroke.
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            buffer: String::new(),
            deadline: None,
            timeout_ms,
        }
    }

    /// Current buffer contents, lowercased.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Time at which the buffer expires, if it holds anything.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Configured inactivity timeout.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer if its deadline has passed. Returns whether it was cleared.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Clear the buffer and its deadline.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.deadline = None;
    }

    /// Append `ch` and push the deadline out. Returns the buffer length before the
    /// keystroke, for [`Typeahead::rollback`].
    pub fn push(&mut self, ch: char, now_ms: u64) -> usize {
        self.expire(now_ms);
        let mark = self.buffer.len();
        self.buffer.extend(ch.to_lowercase());
        self.deadline = Some(now_ms.saturating_add(self.timeout_ms));
        mark
    }

    /// Drop everything typed after `mark`.
    ///
    /// The deadline stays where the rejected keystroke put it.
    pub fn rollback(&mut self, mark: usize) {
        self.buffer.truncate(mark);
        if self.buffer.is_empty() {
            self.deadline = None;
        }
    }

    /// Whether `text` starts with the buffer, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        let mut text = text.chars().flat_map(char::to_lowercase);
        self.buffer.chars().all(|c| text.next() == Some(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_expires_after_inactivity() {
        let mut t = Typeahead::default();
        t.push('a', 1_000);
        t.push('P', 1_200);
        assert_eq!(t.buffer(), "ap");
        assert_eq!(t.deadline(), Some(1_700));

        assert!(!t.expire(1_699));
        assert!(t.expire(1_700));
        assert!(t.is_empty());
        assert_eq!(t.deadline(), None);
    }

    #[test]
    fn late_keystroke_starts_a_new_buffer() {
        let mut t = Typeahead::new(100);
        t.push('a', 0);
        t.push('b', 150);
        assert_eq!(t.buffer(), "b");
    }

    #[test]
    fn rollback_restores_the_previous_buffer() {
        let mut t = Typeahead::default();
        t.push('b', 0);
        let mark = t.push('z', 10);
        t.rollback(mark);
        assert_eq!(t.buffer(), "b");
        assert_eq!(t.deadline(), Some(510));

        let mark = t.push('q', 600);
        t.rollback(mark);
        assert!(t.is_empty());
        assert_eq!(t.deadline(), None);
    }

    #[test]
    fn matching_ignores_case() {
        let mut t = Typeahead::default();
        t.push('B', 0);
        t.push('a', 0);
        assert!(t.matches("Banana"));
        assert!(t.matches("BAND"));
        assert!(!t.matches("B"));
        assert!(!t.matches("Cherry"));
    }
}
