// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_listbox --heading-base-level=0

//! Understory Listbox: option navigation for select-style popups.
//!
//! [`Navigation`] tracks which [`OptionDescriptor`] is *active* (highlighted, mirrored
//! into `aria-activedescendant`) and which value is *selected* (committed). Disabled
//! options are never active. Movement wraps; typeahead matches option text by prefix,
//! ignoring case.
//!
//! Time is an input: [`Navigation::typeahead`] and [`Navigation::expire`] take the
//! current time in milliseconds, and the buffer's deadline is plain state. Hosts call
//! `expire` from whatever timer they already have.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_disclosure::Key;
//! use understory_listbox::{KeyOutcome, Navigation, OptionDescriptor};
//!
//! let mut nav = Navigation::new(vec![
//!     OptionDescriptor::new(1, "apple", "Apple"),
//!     OptionDescriptor::new(2, "banana", "Banana"),
//!     OptionDescriptor::new(3, "cherry", "Cherry"),
//! ]);
//!
//! assert_eq!(nav.typeahead('b', 0), Some(1));
//! // No option starts with "bz": the keystroke is dropped.
//! assert_eq!(nav.typeahead('z', 100), None);
//! assert_eq!(nav.typeahead_buffer(), "b");
//!
//! assert_eq!(nav.handle_key(Key::Enter, 200), KeyOutcome::Close);
//! assert_eq!(nav.selected_value(), Some("banana"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod navigation;
mod typeahead;

pub use navigation::{CloseRequest, KeyOutcome, Navigation, OptionDescriptor};
pub use typeahead::{DEFAULT_TYPEAHEAD_TIMEOUT_MS, Typeahead};
