// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_primitives --heading-base-level=0

//! Understory Primitives: headless dialog, popover and select.
//!
//! Each primitive wires the lower Understory crates together and nothing more:
//!
//! - [`Dialog`]: an [`understory_disclosure::Disclosure`] with modal defaults. Focus
//!   moves to the first focusable element, page scroll is locked, and Escape or a
//!   backdrop press closes it.
//! - [`Popover`]: a disclosure whose surface is positioned by
//!   [`understory_floating`]. Opening starts a tracking session on the host's
//!   [`ChangeHub`](understory_floating::ChangeHub); closing cancels it.
//! - [`Select`]: a popover hosting an [`understory_listbox::Navigation`], with
//!   `aria-activedescendant` and `aria-selected` kept in sync through a
//!   [`SelectHost`].
//!
//! Hosts implement [`DisclosureHost`](understory_disclosure::DisclosureHost) and, for
//! anchored surfaces, [`FloatingEnv`](understory_floating::FloatingEnv). Everything is
//! driven by calls from the host's event loop; nothing here owns a timer or a thread.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dialog;
mod popover;
mod select;

#[cfg(test)]
mod testing;

pub use dialog::{Dialog, DialogOptions};
pub use popover::{Popover, PopoverOptions, PopoverPreset};
pub use select::{Select, SelectHost, SelectOptions};
