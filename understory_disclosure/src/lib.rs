// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_disclosure --heading-base-level=0

//! Understory Disclosure: the open/closed machine behind dialogs, popovers and selects.
//!
//! The core is a pure function. [`transition`] takes a [`DisclosureState`], a
//! [`DisclosureEvent`] and a [`DisclosureConfig`] and returns a [`Transition`]
//! listing the [`Effect`]s to run, in order. Nothing is performed while the
//! transition is computed, so the same rules can drive any host.
//!
//! [`Disclosure`] is the executor. It keeps the state, runs the focus, scroll-lock
//! and ARIA effects through a [`DisclosureHost`], and publishes the open flag as an
//! [`Observable`]. Effects that belong to a higher layer (anchored positioning and
//! option navigation) are handed back in the returned [`Transition`].
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_disclosure::{
//!     DisclosureConfig, DisclosureEvent, DisclosureState, Effect, OpenCause, transition,
//! };
//!
//! let t = transition(
//!     DisclosureState::Closed,
//!     DisclosureEvent::Open(OpenCause::Keyboard),
//!     &DisclosureConfig::popover(),
//! );
//! assert_eq!(t.to, DisclosureState::Open);
//! assert_eq!(t.effects.first(), Some(&Effect::ShowSurface));
//! assert!(t.effects.contains(&Effect::StartTracking));
//!
//! // Opening twice is a no-op.
//! let again = transition(
//!     t.to,
//!     DisclosureEvent::Open(OpenCause::Pointer),
//!     &DisclosureConfig::popover(),
//! );
//! assert!(again.effects.is_empty());
//! ```
//!
//! ## Initial focus
//!
//! When a configuration asks for [`InitialFocus::FirstFocusable`], the executor asks the
//! host for [`FocusCandidate`]s and picks one with [`first_focusable`]: an `autofocus`
//! candidate first, then explicit order, then reading order.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod focus;
mod key;
mod machine;
mod observable;
mod state;

pub use focus::{FocusCandidate, first_focusable};
pub use key::Key;
pub use machine::{ConfigurationError, Disclosure, DisclosureHost};
pub use observable::{Observable, Signal, SubscriptionId};
pub use state::{
    CloseCause, DisclosureConfig, DisclosureEvent, DisclosureKind, DisclosureState, Effect,
    Effects, InitialFocus, OpenCause, Transition, transition,
};
