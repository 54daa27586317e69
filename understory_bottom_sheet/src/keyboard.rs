// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! On-screen keyboard payloads and the bottom offset that avoids them.

use kurbo::Rect;

use crate::animation::{Animation, Curve};

/// Payload of a keyboard show, hide, or frame-change notification.
///
/// Every field is optional because hosts do not always report all of them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyboardInfo {
    /// Final keyboard frame, in window coordinates.
    pub end_frame: Option<Rect>,
    /// Duration of the keyboard's own animation, in seconds.
    pub duration: Option<f64>,
    /// Curve of the keyboard's own animation.
    pub curve: Option<Curve>,
}

impl KeyboardInfo {
    /// Timing matching the keyboard: its duration (default 0) and curve (default ease-in-out).
    #[must_use]
    pub fn animation(&self) -> Animation {
        Animation::new(
            self.duration.unwrap_or(0.0),
            self.curve.unwrap_or(Curve::EaseInOut),
        )
    }
}

/// How much of the sheet view the keyboard covers.
///
/// Both rectangles are in window coordinates. The result is negative when the
/// keyboard ends below the view.
#[must_use]
pub fn overlap_height(view_in_window: Rect, keyboard: Rect) -> f64 {
    view_in_window.y1 - keyboard.y0
}

/// Offset of the container's bottom edge from the view's bottom edge.
///
/// Never positive. When `bottom_safe_area` is given, the keyboard is allowed to
/// cover that much of the sheet since content already keeps clear of it.
#[must_use]
pub fn bottom_offset(keyboard_height: f64, bottom_safe_area: Option<f64>) -> f64 {
    (-keyboard_height + bottom_safe_area.unwrap_or(0.0)).min(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_from_window_frames() {
        let view = Rect::new(0.0, 0.0, 400.0, 800.0);
        assert_eq!(overlap_height(view, Rect::new(0.0, 500.0, 400.0, 800.0)), 300.0);
        assert_eq!(overlap_height(view, Rect::new(0.0, 800.0, 400.0, 1100.0)), 0.0);
    }

    #[test]
    fn offset_lifts_container() {
        assert_eq!(bottom_offset(300.0, None), -300.0);
        assert_eq!(bottom_offset(300.0, Some(34.0)), -266.0);
        assert_eq!(bottom_offset(0.0, None), 0.0);
        // Hiding never pushes the sheet below the view.
        assert_eq!(bottom_offset(0.0, Some(34.0)), 0.0);
        assert_eq!(bottom_offset(-40.0, None), 0.0);
    }

    #[test]
    fn animation_defaults() {
        assert_eq!(
            KeyboardInfo::default().animation(),
            Animation::new(0.0, Curve::EaseInOut)
        );
        let info = KeyboardInfo {
            end_frame: None,
            duration: Some(0.25),
            curve: Some(Curve::EaseOut),
        };
        assert_eq!(info.animation(), Animation::new(0.25, Curve::EaseOut));
    }
}
