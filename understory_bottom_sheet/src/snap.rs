// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered snap points and the release commit policy.

use smallvec::SmallVec;

use crate::size::{ScreenMetrics, SheetSize};

/// Overall direction of a drag, from the sign of its total translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    /// Finger moved towards the top of the screen; the sheet grows.
    Up,
    /// Finger moved towards the bottom of the screen (or not at all).
    Down,
}

impl DragDirection {
    /// Direction of a drag whose total vertical translation is `dy`.
    ///
    /// Only a strictly negative translation counts as upward.
    #[must_use]
    pub fn from_translation(dy: f64) -> Self {
        if dy < 0.0 { Self::Up } else { Self::Down }
    }
}

/// The configured heights a sheet can rest at, sorted ascending by resolved height.
///
/// Ties keep their input order.
#[derive(Clone, Debug, PartialEq)]
pub struct SnapPoints {
    sizes: SmallVec<[SheetSize; 4]>,
}

impl SnapPoints {
    /// Build a snap-point list from `sizes`, sorted against `metrics`.
    ///
    /// Returns `None` if `sizes` is empty.
    #[must_use]
    pub fn new<I>(sizes: I, metrics: &ScreenMetrics) -> Option<Self>
    where
        I: IntoIterator<Item = SheetSize>,
    {
        let mut sizes: SmallVec<[SheetSize; 4]> = sizes.into_iter().collect();
        if sizes.is_empty() {
            return None;
        }
        sizes.sort_by(|a, b| a.resolve(metrics).total_cmp(&b.resolve(metrics)));
        Some(Self { sizes })
    }

    /// The smallest snap point.
    #[must_use]
    pub fn first(&self) -> Option<SheetSize> {
        self.sizes.first().copied()
    }

    /// The largest snap point.
    #[must_use]
    pub fn last(&self) -> Option<SheetSize> {
        self.sizes.last().copied()
    }

    /// All snap points, smallest first.
    #[must_use]
    pub fn as_slice(&self) -> &[SheetSize] {
        &self.sizes
    }

    /// Number of snap points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false` for a list built through [`SnapPoints::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Pick the snap point a released drag settles on.
    ///
    /// - [`DragDirection::Up`]: the smallest point taller than `final_height`,
    ///   or the largest point if none is.
    /// - [`DragDirection::Down`]: the largest point shorter than `final_height`,
    ///   or the smallest point if none is.
    ///
    /// Returns `None` only when the list is empty.
    #[must_use]
    pub fn settle(
        &self,
        final_height: f64,
        direction: DragDirection,
        metrics: &ScreenMetrics,
    ) -> Option<SheetSize> {
        match direction {
            DragDirection::Up => {
                let fallback = self.last()?;
                Some(
                    self.sizes
                        .iter()
                        .copied()
                        .find(|size| final_height < size.resolve(metrics))
                        .unwrap_or(fallback),
                )
            }
            DragDirection::Down => {
                let fallback = self.first()?;
                Some(
                    self.sizes
                        .iter()
                        .rev()
                        .copied()
                        .find(|size| final_height > size.resolve(metrics))
                        .unwrap_or(fallback),
                )
            }
        }
    }
}

impl Default for SnapPoints {
    /// `[Fixed(300), FullScreen]`.
    fn default() -> Self {
        Self {
            sizes: SmallVec::from_slice(&[SheetSize::Fixed(300.0), SheetSize::FullScreen]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::{Insets, Size};
    use proptest::prelude::*;

    fn metrics() -> ScreenMetrics {
        ScreenMetrics::new(Size::new(400.0, 800.0), Insets::new(0.0, 44.0, 0.0, 34.0))
    }

    fn points(heights: &[f64]) -> SnapPoints {
        SnapPoints::new(heights.iter().map(|h| SheetSize::Fixed(*h)), &metrics()).unwrap()
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(SnapPoints::new([], &metrics()).is_none());
    }

    #[test]
    fn mixed_sizes_sort_by_resolved_height() {
        let snap = SnapPoints::new(
            [
                SheetSize::FullScreen,
                SheetSize::Fixed(500.0),
                SheetSize::HalfScreen,
                SheetSize::Fixed(100.0),
            ],
            &metrics(),
        )
        .unwrap();
        assert_eq!(
            snap.as_slice(),
            &[
                SheetSize::Fixed(100.0),
                SheetSize::HalfScreen,
                SheetSize::Fixed(500.0),
                SheetSize::FullScreen,
            ]
        );
        assert_eq!(snap.first(), Some(SheetSize::Fixed(100.0)));
        assert_eq!(snap.last(), Some(SheetSize::FullScreen));
    }

    #[test]
    fn upward_release_picks_smallest_taller_point() {
        let snap = points(&[600.0, 100.0, 300.0]);
        let m = metrics();
        assert_eq!(
            snap.settle(250.0, DragDirection::Up, &m),
            Some(SheetSize::Fixed(300.0))
        );
        assert_eq!(
            snap.settle(50.0, DragDirection::Up, &m),
            Some(SheetSize::Fixed(100.0))
        );
        // Nothing taller: stay at the largest.
        assert_eq!(
            snap.settle(700.0, DragDirection::Up, &m),
            Some(SheetSize::Fixed(600.0))
        );
    }

    #[test]
    fn downward_release_picks_largest_shorter_point() {
        let snap = points(&[100.0, 300.0, 600.0]);
        let m = metrics();
        assert_eq!(
            snap.settle(250.0, DragDirection::Down, &m),
            Some(SheetSize::Fixed(100.0))
        );
        assert_eq!(
            snap.settle(450.0, DragDirection::Down, &m),
            Some(SheetSize::Fixed(300.0))
        );
        // Nothing shorter: fall back to the smallest.
        assert_eq!(
            snap.settle(-1.0, DragDirection::Down, &m),
            Some(SheetSize::Fixed(100.0))
        );
    }

    #[test]
    fn exact_match_is_not_taller_or_shorter() {
        let snap = points(&[100.0, 300.0, 600.0]);
        let m = metrics();
        assert_eq!(
            snap.settle(300.0, DragDirection::Up, &m),
            Some(SheetSize::Fixed(600.0))
        );
        assert_eq!(
            snap.settle(300.0, DragDirection::Down, &m),
            Some(SheetSize::Fixed(100.0))
        );
    }

    #[test]
    fn direction_from_translation() {
        assert_eq!(DragDirection::from_translation(-0.5), DragDirection::Up);
        assert_eq!(DragDirection::from_translation(0.0), DragDirection::Down);
        assert_eq!(DragDirection::from_translation(12.0), DragDirection::Down);
    }

    proptest! {
        #[test]
        fn resolved_order_is_non_decreasing(heights in prop::collection::vec(0.0_f64..2000.0, 1..12)) {
            let m = metrics();
            let snap = points(&heights);
            let resolved: Vec<f64> = snap.as_slice().iter().map(|s| s.resolve(&m)).collect();
            prop_assert_eq!(resolved.len(), heights.len());
            prop_assert!(resolved.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
