// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capabilities a UI toolkit provides to a [`BottomSheet`](crate::BottomSheet).

use kurbo::Rect;

use crate::animation::{Animation, AnimationId};
use crate::arbitration::ScrollMetrics;
use crate::chrome::SheetChrome;
use crate::config::Rgba;
use crate::size::ScreenMetrics;

/// A batch of layout changes for the sheet's views.
///
/// `None` fields are left as they are.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutUpdate {
    /// Height constant of the container.
    pub container_height: Option<f64>,
    /// Vertical translation of the container; positive moves it down.
    pub container_translation: Option<f64>,
    /// Offset of the container's bottom edge from the view's bottom edge.
    pub container_bottom_offset: Option<f64>,
    /// Color of the full-screen overlay behind the container.
    pub overlay: Option<Rgba>,
}

impl LayoutUpdate {
    /// Whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.container_height.is_none()
            && self.container_translation.is_none()
            && self.container_bottom_offset.is_none()
            && self.overlay.is_none()
    }
}

/// Host toolkit services used by a [`BottomSheet`](crate::BottomSheet).
///
/// All calls happen on the UI thread. Animation requests are fire-and-forget:
/// the host interpolates towards the update and later calls
/// [`BottomSheet::animation_finished`](crate::BottomSheet::animation_finished)
/// with the same id. A newer request may interrupt an older one; the host
/// should still report the older id as finished.
pub trait SheetHost {
    /// Current screen size and safe-area insets.
    fn metrics(&self) -> ScreenMetrics;

    /// The container's height as currently laid out on screen.
    fn measured_container_height(&self) -> f64;

    /// The sheet view's frame in window coordinates.
    fn view_frame_in_window(&self) -> Rect;

    /// Background of the embedded content, if it has one.
    fn content_background(&self) -> Option<Rgba> {
        None
    }

    /// Geometry of the registered embedded scroll view, if it is still alive.
    fn child_scroll(&self) -> Option<ScrollMetrics> {
        None
    }

    /// Apply `update` immediately.
    fn apply(&mut self, update: &LayoutUpdate);

    /// Animate towards `update` and report `id` when done.
    fn animate(&mut self, id: AnimationId, animation: Animation, update: &LayoutUpdate);

    /// Restyle the pull bar, handle, and corners.
    fn apply_chrome(&mut self, chrome: &SheetChrome);

    /// Install the sheet's pan recognizer and a tap recognizer over the area
    /// above the container.
    ///
    /// Pan samples go to [`BottomSheet::handle_pan`](crate::BottomSheet::handle_pan),
    /// taps to [`BottomSheet::handle_tap`](crate::BottomSheet::handle_tap). Only
    /// called for dismissable sheets; the pull bar's own tap is always routed.
    fn install_dismiss_recognizers(&mut self);

    /// Make the embedded scroll view's own pan wait for the sheet's pan to fail.
    fn scroll_requires_sheet_pan_to_fail(&mut self);

    /// Resign any active text input inside the sheet.
    fn end_editing(&mut self) {}

    /// Tear down the presentation.
    ///
    /// The host calls [`BottomSheet::teardown_finished`](crate::BottomSheet::teardown_finished)
    /// once the sheet is gone.
    fn teardown(&mut self);
}
