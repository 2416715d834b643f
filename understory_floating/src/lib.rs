// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_floating --heading-base-level=0

//! Understory Floating: position floating elements next to an anchor.
//!
//! Popovers, menus, listboxes and tooltips all need the same thing: a rectangle
//! placed against one side of another rectangle, kept inside the viewport, and
//! kept up to date while the page scrolls and resizes. This crate splits that job
//! into three layers:
//!
//! - **Geometry**: [`compute_base_position`] puts a floating element of a given
//!   [`kurbo::Size`] flush against an anchor [`kurbo::Rect`] for one of the twelve
//!   [`Placement`]s.
//! - **Middleware**: ordered, pure [`Middleware`] steps adjust that position:
//!   [`Offset`], [`Flip`], [`Shift`], [`AutoPlacement`], [`AvailableSize`] and [`Hide`].
//!   [`FloatingOptions::pipeline`] assembles the usual pipeline from host options.
//! - **Reconciliation**: [`start_tracking`] subscribes a [`Tracking`] session to a
//!   host-owned [`ChangeHub`]. Signals coalesce; [`Tracking::flush`] runs at most one
//!   pass and writes a [`FloatingStyle`] through the host's [`FloatingEnv`].
//!
//! The crate never touches a real document. Hosts read geometry from wherever it
//! lives (a DOM, a box tree, a terminal grid) and apply the style themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use understory_floating::{
//!     Flip, MiddlewareContext, Offset, Placement, compute_position,
//! };
//!
//! let context = MiddlewareContext {
//!     anchor: Rect::new(100.0, 4.0, 160.0, 24.0),
//!     floating: Size::new(120.0, 80.0),
//!     viewport: Rect::new(0.0, 0.0, 800.0, 600.0),
//!     clipping: None,
//! };
//!
//! // No room above the anchor, so the element flips below it.
//! let state = compute_position(&context, Placement::Top, &[&Offset::new(8.0), &Flip]);
//! assert_eq!(state.placement, Placement::Bottom);
//! assert_eq!(state.y, 24.0 + 8.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod middleware;
mod options;
mod placement;
mod reconcile;

pub use middleware::{
    AutoPlacement, AutoPlacementData, AvailableSize, DataEntry, Flip, FlipData, Hide, HideData,
    HideStrategy, Middleware, MiddlewareContext, MiddlewareData, MiddlewareState,
    MiddlewareUpdate, Offset, OffsetData, Pipeline, Shift, ShiftData, SizeData,
    compute_position,
};
pub use options::FloatingOptions;
pub use placement::{Alignment, Axis, InvalidPlacement, Placement, Side, compute_base_position};
pub use reconcile::{
    ChangeHub, ChangeSource, ChangeSources, FloatingEnv, FloatingStyle, PassOutcome, PassTicket,
    SkipReason, Tracking, TrackingOptions, start_tracking,
};
