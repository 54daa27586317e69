// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet size specifiers and their resolution against screen metrics.

use kurbo::{Insets, Size};

/// Smallest top inset used for layout, even on hosts that report less.
pub const MIN_TOP_INSET: f64 = 24.0;

/// Extra height added to [`SheetSize::HalfScreen`] on top of half the screen.
pub const HALF_SCREEN_OFFSET: f64 = 24.0;

/// Gap kept between the top safe-area inset and a [`SheetSize::FullScreen`] sheet.
///
/// The container's top edge is never allowed above `top_inset + FULL_SCREEN_GAP`.
pub const FULL_SCREEN_GAP: f64 = 24.0;

/// A height the sheet can rest at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetSize {
    /// An absolute height in logical pixels.
    Fixed(f64),
    /// Half the screen height plus [`HALF_SCREEN_OFFSET`].
    HalfScreen,
    /// The screen height minus the top inset and [`FULL_SCREEN_GAP`].
    FullScreen,
}

impl SheetSize {
    /// Resolve this size to a concrete height using `metrics`.
    ///
    /// This is a pure function of the size and the metrics.
    #[must_use]
    pub fn resolve(self, metrics: &ScreenMetrics) -> f64 {
        match self {
            Self::Fixed(height) => height,
            Self::HalfScreen => metrics.screen.height / 2.0 + HALF_SCREEN_OFFSET,
            Self::FullScreen => metrics.screen.height - metrics.top_inset() - FULL_SCREEN_GAP,
        }
    }
}

/// Resolve an optional size, treating `None` as zero height.
#[must_use]
pub fn resolve_height(size: Option<SheetSize>, metrics: &ScreenMetrics) -> f64 {
    size.map_or(0.0, |size| size.resolve(metrics))
}

/// Screen geometry reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenMetrics {
    /// Full screen size in logical pixels.
    pub screen: Size,
    /// Safe-area insets as reported by the host window.
    ///
    /// Use [`ScreenMetrics::top_inset`] rather than `safe_area.y0` directly; it
    /// applies the [`MIN_TOP_INSET`] floor.
    pub safe_area: Insets,
}

impl ScreenMetrics {
    /// Create metrics from a screen size and the host's safe-area insets.
    #[must_use]
    pub const fn new(screen: Size, safe_area: Insets) -> Self {
        Self { screen, safe_area }
    }

    /// Effective top inset, never smaller than [`MIN_TOP_INSET`].
    #[must_use]
    pub fn top_inset(&self) -> f64 {
        self.safe_area.y0.max(MIN_TOP_INSET)
    }

    /// Bottom safe-area inset (home indicator and similar).
    #[must_use]
    pub const fn bottom_inset(&self) -> f64 {
        self.safe_area.y1
    }

    /// Smallest y coordinate the container's top edge may reach.
    #[must_use]
    pub fn min_container_top(&self) -> f64 {
        self.top_inset() + FULL_SCREEN_GAP
    }
}

impl Default for ScreenMetrics {
    /// A 375×812 portrait phone with a notch and home indicator.
    fn default() -> Self {
        Self {
            screen: Size::new(375.0, 812.0),
            safe_area: Insets::new(0.0, 44.0, 0.0, 34.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(height: f64, top: f64) -> ScreenMetrics {
        ScreenMetrics::new(Size::new(400.0, height), Insets::new(0.0, top, 0.0, 20.0))
    }

    #[test]
    fn fixed_resolves_to_itself() {
        let m = metrics(800.0, 44.0);
        for h in [0.0, 1.5, 300.0, 10_000.0] {
            assert_eq!(SheetSize::Fixed(h).resolve(&m), h);
        }
    }

    #[test]
    fn half_screen_adds_offset() {
        let m = metrics(800.0, 44.0);
        assert_eq!(SheetSize::HalfScreen.resolve(&m), 424.0);
    }

    #[test]
    fn full_screen_subtracts_top_inset_and_gap() {
        assert_eq!(SheetSize::FullScreen.resolve(&metrics(800.0, 44.0)), 732.0);
    }

    #[test]
    fn top_inset_has_a_floor() {
        let m = metrics(800.0, 0.0);
        assert_eq!(m.top_inset(), MIN_TOP_INSET);
        assert_eq!(SheetSize::FullScreen.resolve(&m), 800.0 - 24.0 - 24.0);
        assert_eq!(m.min_container_top(), 48.0);
    }

    #[test]
    fn missing_size_is_zero() {
        assert_eq!(resolve_height(None, &metrics(800.0, 44.0)), 0.0);
        assert_eq!(
            resolve_height(Some(SheetSize::Fixed(12.0)), &metrics(800.0, 44.0)),
            12.0
        );
    }
}
