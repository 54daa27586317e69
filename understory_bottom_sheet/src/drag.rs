// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag arithmetic: live height, rubber-band overshoot, and release projection.
//!
//! Everything here is a pure function of heights and pointer coordinates. The
//! controller in [`crate::BottomSheet`] feeds it resolved heights and turns the
//! results into layout updates.

/// Factor applied to the release velocity before it is used as a distance.
pub const VELOCITY_PROJECTION: f64 = 0.2;

/// Scaled downward velocity above which a release always projects to
/// [`FLUNG_HEIGHT`].
pub const FLING_THRESHOLD: f64 = 500.0;

/// Projected height reported for a hard downward fling.
pub const FLUNG_HEIGHT: f64 = -1.0;

/// Base duration of the settle animation after a release, in seconds.
pub const SETTLE_BASE_DURATION: f64 = 0.2;

/// Seconds added to the settle animation per unit of scaled velocity.
pub const SETTLE_DURATION_PER_VELOCITY: f64 = 0.0002;

/// Height range a drag may move the container through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    /// Floor; pulling below it produces overshoot instead of a smaller height.
    pub min: f64,
    /// Ceiling.
    pub max: f64,
}

impl DragBounds {
    /// Bounds for a drag starting at `baseline` with `smallest` and `largest` snap heights.
    ///
    /// The baseline is included so a sheet that is currently outside the snap
    /// range (for example mid-animation) does not jump when the drag starts.
    #[must_use]
    pub fn new(baseline: f64, smallest: f64, largest: f64) -> Self {
        Self {
            min: baseline.min(smallest),
            max: baseline.max(largest),
        }
    }
}

/// Result of tracking the finger during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFrame {
    /// Height to give the container, within [`DragBounds`].
    pub height: f64,
    /// How far the finger has pulled past [`DragBounds::min`]. Never negative.
    pub overshoot: f64,
}

/// Track a drag from `start_y` to `current_y` over a container that was
/// `baseline` tall when the drag began.
///
/// Moving up (decreasing y) grows the sheet; moving down shrinks it.
#[must_use]
pub fn track(baseline: f64, bounds: DragBounds, start_y: f64, current_y: f64) -> DragFrame {
    let mut height = (baseline + (start_y - current_y)).max(0.0);
    let mut overshoot = 0.0;
    if height < bounds.min {
        overshoot = bounds.min - height;
        height = bounds.min;
    }
    if height > bounds.max {
        height = bounds.max;
    }
    DragFrame { height, overshoot }
}

/// Where a released drag is heading and how long the settle should take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    /// Height the sheet would reach if it kept moving, or [`FLUNG_HEIGHT`].
    pub final_height: f64,
    /// Settle animation duration in seconds.
    pub duration: f64,
}

impl Release {
    /// Project `frame` forward using the vertical release velocity (points per second).
    #[must_use]
    pub fn project(frame: DragFrame, velocity_y: f64) -> Self {
        let scaled = VELOCITY_PROJECTION * velocity_y;
        let final_height = if scaled > FLING_THRESHOLD {
            FLUNG_HEIGHT
        } else {
            frame.height - frame.overshoot - scaled
        };
        Self {
            final_height,
            duration: (scaled * SETTLE_DURATION_PER_VELOCITY).abs() + SETTLE_BASE_DURATION,
        }
    }

    /// Whether this release dismisses the sheet rather than snapping it.
    ///
    /// Only when `dismiss_on_pan` is set and the projection falls below half
    /// of the drag floor.
    #[must_use]
    pub fn dismisses(&self, bounds: DragBounds, dismiss_on_pan: bool) -> bool {
        dismiss_on_pan && self.final_height < bounds.min / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: DragBounds = DragBounds {
        min: 100.0,
        max: 600.0,
    };

    #[test]
    fn bounds_include_baseline() {
        assert_eq!(
            DragBounds::new(300.0, 100.0, 600.0),
            DragBounds {
                min: 100.0,
                max: 600.0
            }
        );
        assert_eq!(
            DragBounds::new(50.0, 100.0, 600.0),
            DragBounds {
                min: 50.0,
                max: 600.0
            }
        );
        assert_eq!(
            DragBounds::new(700.0, 100.0, 600.0),
            DragBounds {
                min: 100.0,
                max: 700.0
            }
        );
    }

    #[test]
    fn dragging_up_grows_and_down_shrinks() {
        let up = track(300.0, BOUNDS, 0.0, -50.0);
        assert_eq!(up.height, 350.0);
        assert_eq!(up.overshoot, 0.0);

        let down = track(300.0, BOUNDS, 0.0, 120.0);
        assert_eq!(down.height, 180.0);
        assert_eq!(down.overshoot, 0.0);
    }

    #[test]
    fn ceiling_clamps_without_overshoot() {
        let frame = track(300.0, BOUNDS, 0.0, -1000.0);
        assert_eq!(frame.height, 600.0);
        assert_eq!(frame.overshoot, 0.0);
    }

    #[test]
    fn floor_turns_into_overshoot() {
        let frame = track(300.0, BOUNDS, 0.0, 260.0);
        assert_eq!(frame.height, 100.0);
        assert_eq!(frame.overshoot, 60.0);

        // Live height bottoms out at zero before the overshoot is measured.
        let frame = track(300.0, BOUNDS, 0.0, 900.0);
        assert_eq!(frame.height, 100.0);
        assert_eq!(frame.overshoot, 100.0);
    }

    #[test]
    fn slow_release_projects_against_velocity() {
        let frame = DragFrame {
            height: 300.0,
            overshoot: 0.0,
        };
        let release = Release::project(frame, -1000.0);
        assert_eq!(release.final_height, 500.0);
        assert!((release.duration - 0.24).abs() < 1e-9);

        let release = Release::project(frame, 1000.0);
        assert_eq!(release.final_height, 100.0);
    }

    #[test]
    fn hard_fling_down_uses_sentinel() {
        let frame = DragFrame {
            height: 600.0,
            overshoot: 0.0,
        };
        let release = Release::project(frame, 2600.0);
        assert_eq!(release.final_height, FLUNG_HEIGHT);
        assert!(release.dismisses(BOUNDS, true));
        assert!(!release.dismisses(BOUNDS, false));
    }

    #[test]
    fn overshoot_is_subtracted_from_projection() {
        let frame = DragFrame {
            height: 100.0,
            overshoot: 70.0,
        };
        let release = Release::project(frame, 0.0);
        assert_eq!(release.final_height, 30.0);
        assert!(release.dismisses(BOUNDS, true));
    }

    #[test]
    fn half_floor_is_the_dismiss_boundary() {
        let at = Release {
            final_height: 50.0,
            duration: 0.2,
        };
        let below = Release {
            final_height: 49.9,
            duration: 0.2,
        };
        assert!(!at.dismisses(BOUNDS, true));
        assert!(below.dismisses(BOUNDS, true));
    }

    proptest! {
        #[test]
        fn overshoot_only_below_floor(
            baseline in 0.0_f64..1000.0,
            smallest in 0.0_f64..500.0,
            extra in 0.0_f64..500.0,
            start in -500.0_f64..500.0,
            current in -1500.0_f64..1500.0,
        ) {
            let bounds = DragBounds::new(baseline, smallest, smallest + extra);
            let raw = (baseline + (start - current)).max(0.0);
            let frame = track(baseline, bounds, start, current);
            prop_assert!(frame.overshoot >= 0.0);
            prop_assert!(frame.height >= bounds.min && frame.height <= bounds.max);
            if raw >= bounds.min {
                prop_assert_eq!(frame.overshoot, 0.0);
            } else {
                prop_assert!(frame.overshoot > 0.0);
            }
        }
    }
}
