// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual treatment derived from [`SheetConfig`]: pull bar, handle, and corners.

use kurbo::Rect;

use crate::config::{Rgba, SheetConfig};
use crate::size::ScreenMetrics;

/// Accessibility label of the pull bar.
pub const PULL_BAR_LABEL: &str = "Pull bar";

/// Accessibility hint of the pull bar.
pub const PULL_BAR_HINT: &str = "Tap on this bar to dismiss the modal";

bitflags::bitflags! {
    /// Corners of a rectangular layer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CornerMask: u8 {
        /// Top-left corner.
        const TOP_LEFT     = 0b0000_0001;
        /// Top-right corner.
        const TOP_RIGHT    = 0b0000_0010;
        /// Bottom-left corner.
        const BOTTOM_LEFT  = 0b0000_0100;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 0b0000_1000;
        /// Both top corners.
        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
    }
}

/// Which corners of a layer are rounded, and by how much.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    /// Rounded corners.
    pub mask: CornerMask,
    /// Corner radius.
    pub radius: f64,
}

impl Corners {
    /// Square corners.
    pub const SQUARE: Self = Self {
        mask: CornerMask::empty(),
        radius: 0.0,
    };

    fn top(radius: f64) -> Self {
        Self {
            mask: if radius > 0.0 {
                CornerMask::TOP
            } else {
                CornerMask::empty()
            },
            radius,
        }
    }
}

/// Everything the host needs to draw the sheet's own decorations.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetChrome {
    /// Height of the pull bar strip at the top of the container.
    pub pull_bar_height: f64,
    /// Background of the pull bar.
    pub pull_bar_background: Rgba,
    /// Handle frame, relative to the pull bar.
    pub handle_rect: Rect,
    /// Handle fill.
    pub handle_color: Rgba,
    /// Handle corner radius; the handle is drawn as a capsule.
    pub handle_corner_radius: f64,
    /// Corner treatment of the container.
    pub container_corners: Corners,
    /// Corner treatment of the embedded content.
    pub content_corners: Corners,
    /// How far the embedded content extends past the container's bottom edge.
    pub content_bottom_overhang: f64,
    /// Whether the host should blur the bottom safe area.
    pub blur_bottom_safe_area: bool,
    /// Accessibility label of the pull bar.
    pub pull_bar_label: &'static str,
    /// Accessibility hint of the pull bar.
    pub pull_bar_hint: &'static str,
}

impl SheetChrome {
    /// Derive chrome for a full-width sheet.
    ///
    /// `content_background` is the embedded content's own background, painted
    /// behind the handle when [`SheetConfig::extend_background_behind_handle`] is set.
    #[must_use]
    pub fn new(
        config: &SheetConfig,
        metrics: &ScreenMetrics,
        content_background: Option<Rgba>,
    ) -> Self {
        let handle = config.handle_size;
        let width = metrics.screen.width;
        let handle_x0 = (width - handle.width) / 2.0;
        let handle_rect = Rect::new(
            handle_x0,
            config.handle_top_inset,
            handle_x0 + handle.width,
            config.handle_top_inset + handle.height,
        );

        let rounded = Corners::top(config.top_corners_radius);
        let (container_corners, content_corners, pull_bar_background) =
            if config.extend_background_behind_handle {
                (
                    rounded,
                    Corners::SQUARE,
                    content_background.unwrap_or(Rgba::CLEAR),
                )
            } else {
                (Corners::SQUARE, rounded, Rgba::CLEAR)
            };

        Self {
            pull_bar_height: config.handle_top_inset + handle.height + config.handle_bottom_inset,
            pull_bar_background,
            handle_rect,
            handle_color: config.handle_color,
            handle_corner_radius: handle.height / 2.0,
            container_corners,
            content_corners,
            content_bottom_overhang: if config.adjust_for_bottom_safe_area {
                metrics.bottom_inset()
            } else {
                0.0
            },
            blur_bottom_safe_area: config.blur_bottom_safe_area,
            pull_bar_label: PULL_BAR_LABEL,
            pull_bar_hint: PULL_BAR_HINT,
        }
    }
}
