// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance and behavior options for a bottom sheet.

use kurbo::Size;

/// A straight-alpha RGBA color with components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Create a color from components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// A gray with the given `white` level and alpha.
    #[must_use]
    pub const fn gray(white: f32, a: f32) -> Self {
        Self::new(white, white, white, a)
    }
}

/// Options controlling how a sheet looks and which interactions dismiss it.
///
/// Use [`SheetConfig::default`] and the builder methods:
///
/// ```
/// use understory_bottom_sheet::SheetConfig;
///
/// let config = SheetConfig::default()
///     .dismiss_on_pan(false)
///     .top_corners_radius(12.0);
/// assert!(!config.dismiss_on_pan);
/// assert!(config.dismiss_on_background_tap);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SheetConfig {
    /// Color of the drag handle.
    pub handle_color: Rgba,
    /// Size of the drag handle.
    pub handle_size: Size,
    /// Space between the top of the sheet and the handle.
    pub handle_top_inset: f64,
    /// Space between the handle and the content.
    pub handle_bottom_inset: f64,
    /// Duration of appear, close, and cancel animations, in seconds.
    pub animation_duration: f64,
    /// Tapping outside the sheet or on the pull bar closes it.
    pub dismiss_on_background_tap: bool,
    /// Dragging the sheet down far enough closes it.
    pub dismiss_on_pan: bool,
    /// Install the pan recognizer and the dismiss area at all.
    ///
    /// Only read when the sheet is loaded.
    pub dismissable: bool,
    /// Paint the content background behind the handle and round the whole container.
    pub extend_background_behind_handle: bool,
    /// Keep content above the bottom safe area.
    pub adjust_for_bottom_safe_area: bool,
    /// Ask the host to blur the bottom safe area behind the sheet.
    pub blur_bottom_safe_area: bool,
    /// Radius of the two top corners; zero disables rounding.
    pub top_corners_radius: f64,
    /// Color of the overlay dimming the presenting content.
    pub overlay_color: Rgba,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            handle_color: Rgba::gray(0.868, 1.0),
            handle_size: Size::new(50.0, 6.0),
            handle_top_inset: 8.0,
            handle_bottom_inset: 8.0,
            animation_duration: 0.2,
            dismiss_on_background_tap: true,
            dismiss_on_pan: true,
            dismissable: true,
            extend_background_behind_handle: false,
            adjust_for_bottom_safe_area: false,
            blur_bottom_safe_area: true,
            top_corners_radius: 3.0,
            overlay_color: Rgba::gray(0.0, 0.7),
        }
    }
}

impl SheetConfig {
    /// Set [`SheetConfig::handle_color`].
    #[must_use]
    pub fn handle_color(mut self, color: Rgba) -> Self {
        self.handle_color = color;
        self
    }

    /// Set [`SheetConfig::handle_size`].
    #[must_use]
    pub fn handle_size(mut self, size: Size) -> Self {
        self.handle_size = size;
        self
    }

    /// Set the space above and below the handle.
    #[must_use]
    pub fn handle_insets(mut self, top: f64, bottom: f64) -> Self {
        self.handle_top_inset = top;
        self.handle_bottom_inset = bottom;
        self
    }

    /// Set [`SheetConfig::animation_duration`].
    #[must_use]
    pub fn animation_duration(mut self, seconds: f64) -> Self {
        self.animation_duration = seconds;
        self
    }

    /// Set [`SheetConfig::dismiss_on_background_tap`].
    #[must_use]
    pub fn dismiss_on_background_tap(mut self, enabled: bool) -> Self {
        self.dismiss_on_background_tap = enabled;
        self
    }

    /// Set [`SheetConfig::dismiss_on_pan`].
    #[must_use]
    pub fn dismiss_on_pan(mut self, enabled: bool) -> Self {
        self.dismiss_on_pan = enabled;
        self
    }

    /// Set [`SheetConfig::dismissable`].
    #[must_use]
    pub fn dismissable(mut self, enabled: bool) -> Self {
        self.dismissable = enabled;
        self
    }

    /// Set [`SheetConfig::extend_background_behind_handle`].
    #[must_use]
    pub fn extend_background_behind_handle(mut self, enabled: bool) -> Self {
        self.extend_background_behind_handle = enabled;
        self
    }

    /// Set [`SheetConfig::adjust_for_bottom_safe_area`].
    #[must_use]
    pub fn adjust_for_bottom_safe_area(mut self, enabled: bool) -> Self {
        self.adjust_for_bottom_safe_area = enabled;
        self
    }

    /// Set [`SheetConfig::blur_bottom_safe_area`].
    #[must_use]
    pub fn blur_bottom_safe_area(mut self, enabled: bool) -> Self {
        self.blur_bottom_safe_area = enabled;
        self
    }

    /// Set [`SheetConfig::top_corners_radius`].
    #[must_use]
    pub fn top_corners_radius(mut self, radius: f64) -> Self {
        self.top_corners_radius = radius;
        self
    }

    /// Set [`SheetConfig::overlay_color`].
    #[must_use]
    pub fn overlay_color(mut self, color: Rgba) -> Self {
        self.overlay_color = color;
        self
    }
}
