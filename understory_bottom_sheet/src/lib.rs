// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bottom_sheet --heading-base-level=0

//! Understory Bottom Sheet: a headless controller for draggable modal sheets.
//!
//! A bottom sheet slides up over existing content, rests at one of a set of
//! discrete heights ("snap points"), can be resized by dragging, and dismisses
//! via a downward swipe, a tap outside, or a programmatic call.
//!
//! This crate owns the sizing and gesture logic and nothing else. Host
//! frameworks are responsible for:
//!
//! - Implementing [`SheetHost`]: reporting [`ScreenMetrics`] and measured
//!   geometry, applying [`LayoutUpdate`]s, running animations, and tearing the
//!   presentation down.
//! - Forwarding lifecycle calls ([`BottomSheet::load`], [`BottomSheet::appear`]),
//!   pan callbacks ([`BottomSheet::handle_pan`]), taps, and keyboard
//!   notifications.
//! - Reporting animation completion through [`BottomSheet::animation_finished`]
//!   and teardown through [`BottomSheet::teardown_finished`].
//!
//! The core concepts are:
//!
//! - [`SheetSize`]: a fixed height, half screen, or full screen, resolved by
//!   [`SheetSize::resolve`] as a pure function of [`ScreenMetrics`].
//! - [`SnapPoints`]: the configured sizes kept sorted by resolved height, with
//!   [`SnapPoints::settle`] implementing the release policy.
//! - [`drag`]: live height, rubber-band overshoot, and velocity projection.
//! - [`arbitration`]: whether a drag resizes the sheet or scrolls embedded content.
//! - [`InitialTouchPan`]: remembers where a gesture first touched down.
//! - [`BottomSheet`]: the controller tying these together.
//!
//! ## Snap policy
//!
//! When a drag ends, its release point is projected along the release velocity.
//! A drag that moved up settles on the smallest snap point taller than the
//! projection; a drag that moved down settles on the largest snap point shorter
//! than it. With snap points at 100, 300, and 600:
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use understory_bottom_sheet::{DragDirection, ScreenMetrics, SheetSize, SnapPoints};
//!
//! let metrics = ScreenMetrics::new(Size::new(400.0, 800.0), Insets::ZERO);
//! let snap = SnapPoints::new(
//!     [SheetSize::Fixed(600.0), SheetSize::Fixed(100.0), SheetSize::Fixed(300.0)],
//!     &metrics,
//! )
//! .unwrap();
//!
//! assert_eq!(snap.settle(250.0, DragDirection::Up, &metrics), Some(SheetSize::Fixed(300.0)));
//! assert_eq!(snap.settle(250.0, DragDirection::Down, &metrics), Some(SheetSize::Fixed(100.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `tracing`: emits `tracing` debug events at lifecycle and gesture transitions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod arbitration;
pub mod drag;

mod animation;
mod chrome;
mod config;
mod host;
mod keyboard;
mod pan;
mod sheet;
mod size;
mod snap;

pub use animation::{Animation, AnimationId, Curve, RESIZE_DURATION};
pub use arbitration::{Ownership, ScrollMetrics};
pub use chrome::{CornerMask, Corners, PULL_BAR_HINT, PULL_BAR_LABEL, SheetChrome};
pub use config::{Rgba, SheetConfig};
pub use host::{LayoutUpdate, SheetHost};
pub use keyboard::{KeyboardInfo, bottom_offset, overlap_height};
pub use pan::{InitialTouchPan, PanPhase, PanSample};
pub use sheet::{
    BottomSheet, Completion, DismissCallback, Presentation, SheetLayout, SheetState,
};
pub use size::{
    FULL_SCREEN_GAP, HALF_SCREEN_OFFSET, MIN_TOP_INSET, ScreenMetrics, SheetSize, resolve_height,
};
pub use snap::{DragDirection, SnapPoints};
