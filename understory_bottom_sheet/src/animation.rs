// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation requests handed to the host.
//!
//! The sheet never runs animations itself. It describes a target
//! [`LayoutUpdate`](crate::LayoutUpdate) plus an [`Animation`] timing, tags the
//! request with an [`AnimationId`], and waits for the host to report completion
//! through [`BottomSheet::animation_finished`](crate::BottomSheet::animation_finished).
//! Hosts without a native animation system can drive the interpolation with
//! [`Curve::ease`].

/// Duration of programmatic resizes, in seconds.
pub const RESIZE_DURATION: f64 = 0.2;

/// Timing curve of an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    #[default]
    EaseOut,
    /// Starts and ends slow.
    EaseInOut,
}

impl Curve {
    /// Map a linear time `fraction` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn ease(self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
        }
    }
}

/// Evaluate a CSS-style cubic Bézier timing function with control points
/// `(x1, y1)` and `(x2, y2)`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let derivative = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson for the parameter whose x matches `fraction`.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        // Bisection fallback; x(t) is monotonic for control x in [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        t = fraction;
        for _ in 0..32 {
            let x = sample(ax, bx, cx, t);
            if (x - fraction).abs() < 1e-7 {
                break;
            }
            if x < fraction {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

/// Timing of one animation request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    /// Duration in seconds. Zero means the host may apply the change at once.
    pub duration: f64,
    /// Timing curve.
    pub curve: Curve,
}

impl Animation {
    /// Create an animation.
    #[must_use]
    pub const fn new(duration: f64, curve: Curve) -> Self {
        Self { duration, curve }
    }

    /// An ease-out animation, the sheet's default feel.
    #[must_use]
    pub const fn ease_out(duration: f64) -> Self {
        Self::new(duration, Curve::EaseOut)
    }

    /// An ease-in animation, used when the sheet leaves the screen.
    #[must_use]
    pub const fn ease_in(duration: f64) -> Self {
        Self::new(duration, Curve::EaseIn)
    }
}

/// Handle identifying an animation request until the host reports it finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub(crate) u64);

impl AnimationId {
    /// Raw value, for hosts that key their own bookkeeping by integer.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}
