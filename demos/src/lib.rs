// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory demos.
//!
//! [`SteppedHost`] is a [`SheetHost`] that runs animations on a virtual clock,
//! so demos can drive a sheet frame by frame without a UI toolkit.

use kurbo::{Insets, Rect, Size};
use understory_bottom_sheet::{
    Animation, AnimationId, LayoutUpdate, Rgba, ScreenMetrics, ScrollMetrics, SheetChrome,
    SheetHost, SheetLayout,
};

#[derive(Clone, Copy, Debug)]
struct Running {
    id: AnimationId,
    animation: Animation,
    from: SheetLayout,
    to: LayoutUpdate,
    elapsed: f64,
}

/// A host with a virtual clock.
#[derive(Debug)]
pub struct SteppedHost {
    metrics: ScreenMetrics,
    layout: SheetLayout,
    running: Vec<Running>,
    /// Scroll view embedded in the sheet, if any.
    pub scroll: Option<ScrollMetrics>,
    /// Set when the sheet asked to be torn down.
    pub teardown_requested: bool,
    /// Number of chrome updates received.
    pub chrome_updates: usize,
}

impl SteppedHost {
    /// A 375×812 phone screen.
    pub fn phone() -> Self {
        Self {
            metrics: ScreenMetrics::new(
                Size::new(375.0, 812.0),
                Insets::new(0.0, 44.0, 0.0, 34.0),
            ),
            layout: SheetLayout {
                container_height: 0.0,
                container_translation: 0.0,
                container_bottom_offset: 0.0,
                overlay: Rgba::CLEAR,
            },
            running: Vec::new(),
            scroll: None,
            teardown_requested: false,
            chrome_updates: 0,
        }
    }

    /// Current on-screen layout.
    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Whether any animation is still running.
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    /// Advance the clock by `dt` seconds and return the animations that finished.
    pub fn advance(&mut self, dt: f64) -> Vec<AnimationId> {
        let mut finished = Vec::new();
        let mut layout = self.layout;
        self.running.retain_mut(|run| {
            run.elapsed += dt;
            let fraction = if run.animation.duration > 0.0 {
                (run.elapsed / run.animation.duration).min(1.0)
            } else {
                1.0
            };
            let t = run.animation.curve.ease(fraction);
            let lerp = |from: f64, to: Option<f64>, current: f64| {
                to.map_or(current, |to| from + (to - from) * t)
            };
            layout.container_height = lerp(
                run.from.container_height,
                run.to.container_height,
                layout.container_height,
            );
            layout.container_translation = lerp(
                run.from.container_translation,
                run.to.container_translation,
                layout.container_translation,
            );
            layout.container_bottom_offset = lerp(
                run.from.container_bottom_offset,
                run.to.container_bottom_offset,
                layout.container_bottom_offset,
            );
            if fraction >= 1.0 {
                if let Some(overlay) = run.to.overlay {
                    layout.overlay = overlay;
                }
                finished.push(run.id);
                false
            } else {
                true
            }
        });
        self.layout = layout;
        finished
    }
}

impl SheetHost for SteppedHost {
    fn metrics(&self) -> ScreenMetrics {
        self.metrics
    }

    fn measured_container_height(&self) -> f64 {
        let bottom = self.metrics.screen.height + self.layout.container_bottom_offset;
        let top = (bottom - self.layout.container_height).max(self.metrics.min_container_top());
        bottom - top
    }

    fn view_frame_in_window(&self) -> Rect {
        self.metrics.screen.to_rect()
    }

    fn content_background(&self) -> Option<Rgba> {
        Some(Rgba::WHITE)
    }

    fn child_scroll(&self) -> Option<ScrollMetrics> {
        self.scroll
    }

    fn apply(&mut self, update: &LayoutUpdate) {
        let mut layout = self.layout;
        if let Some(height) = update.container_height {
            layout.container_height = height;
        }
        if let Some(translation) = update.container_translation {
            layout.container_translation = translation;
        }
        if let Some(offset) = update.container_bottom_offset {
            layout.container_bottom_offset = offset;
        }
        if let Some(overlay) = update.overlay {
            layout.overlay = overlay;
        }
        self.layout = layout;
    }

    fn animate(&mut self, id: AnimationId, animation: Animation, update: &LayoutUpdate) {
        tracing::trace!(id = id.get(), duration = animation.duration, ?update, "animate");
        self.running.push(Running {
            id,
            animation,
            from: self.layout,
            to: *update,
            elapsed: 0.0,
        });
    }

    fn apply_chrome(&mut self, chrome: &SheetChrome) {
        tracing::trace!(pull_bar_height = chrome.pull_bar_height, "chrome");
        self.chrome_updates += 1;
    }

    fn install_dismiss_recognizers(&mut self) {
        tracing::trace!("dismiss recognizers installed");
    }

    fn scroll_requires_sheet_pan_to_fail(&mut self) {
        tracing::trace!("scroll pan waits for sheet pan");
    }

    fn end_editing(&mut self) {
        tracing::trace!("end editing");
    }

    fn teardown(&mut self) {
        self.teardown_requested = true;
    }
}
