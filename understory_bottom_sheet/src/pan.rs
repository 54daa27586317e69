// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture input: phases, samples, and the initial-touch recognizer.

use kurbo::{Point, Vec2};

/// Phase of a host pan gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// The recognizer has not yet decided.
    Possible,
    /// The gesture started with this sample.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The host cancelled the gesture.
    Cancelled,
    /// The recognizer failed.
    Failed,
}

/// One pan callback from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSample {
    /// Current phase.
    pub phase: PanPhase,
    /// Total translation since the gesture began, in the sheet's superview space.
    pub translation: Vec2,
    /// Current velocity in logical pixels per second.
    pub velocity: Vec2,
}

impl PanSample {
    /// Create a sample.
    #[must_use]
    pub const fn new(phase: PanPhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }
}

/// A pan recognizer augmentation that remembers where the gesture first touched down.
///
/// The host forwards touch-down locations to [`InitialTouchPan::touches_began`];
/// arbitration code reads them back through [`InitialTouchPan::initial_touch_location`]
/// to tell a resize drag apart from scrolling inside embedded content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InitialTouchPan {
    initial_touch: Option<Point>,
}

impl InitialTouchPan {
    /// Create a recognizer with no recorded touch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_touch: None,
        }
    }

    /// Record the first touch of a new touch sequence, in the sheet view's space.
    ///
    /// `location` is `None` if the host could not locate the touch.
    pub fn touches_began(&mut self, location: Option<Point>) {
        self.initial_touch = location;
    }

    /// Where the current gesture first touched down.
    #[must_use]
    pub const fn initial_touch_location(&self) -> Option<Point> {
        self.initial_touch
    }

    /// Forget the recorded touch.
    pub fn reset(&mut self) {
        self.initial_touch = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_latest_touch_down() {
        let mut pan = InitialTouchPan::new();
        assert_eq!(pan.initial_touch_location(), None);

        pan.touches_began(Some(Point::new(10.0, 500.0)));
        assert_eq!(pan.initial_touch_location(), Some(Point::new(10.0, 500.0)));

        pan.touches_began(Some(Point::new(20.0, 100.0)));
        assert_eq!(pan.initial_touch_location(), Some(Point::new(20.0, 100.0)));

        pan.touches_began(None);
        assert_eq!(pan.initial_touch_location(), None);
    }

    #[test]
    fn reset_clears() {
        let mut pan = InitialTouchPan::new();
        pan.touches_began(Some(Point::new(1.0, 2.0)));
        pan.reset();
        assert_eq!(pan, InitialTouchPan::default());
    }
}
