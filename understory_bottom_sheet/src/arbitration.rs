// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deciding whether a drag resizes the sheet or scrolls embedded content.
//!
//! A sheet that embeds a scroll view has two pan recognizers competing for the
//! same touches. The sheet's pan wins when the touch starts outside the scroll
//! view. Inside it, the sheet only takes vertical drags while the content is
//! scrolled to the top, and only takes upward drags while there is a taller
//! snap point to grow into.

use kurbo::{Point, Rect, Vec2};

/// Geometry of an embedded scroll view at the moment a gesture starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Scroll view frame, in the sheet view's coordinate space.
    pub frame: Rect,
    /// Current content offset.
    pub content_offset: Vec2,
}

/// Heights the arbitration needs from the sheet, already resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetHeights {
    /// Height of the committed snap point.
    pub committed: f64,
    /// Height of the largest snap point.
    pub largest: f64,
    /// Height of a full-screen sheet.
    pub full_screen: f64,
}

/// Who gets the drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ownership {
    /// The sheet resizes; the touch started inside the scroll view.
    Sheet,
    /// The sheet resizes; the touch started outside the scroll view.
    SheetOutsideContent,
    /// The scroll view keeps the drag.
    Content,
}

impl Ownership {
    /// Whether the sheet's pan recognizer may begin.
    #[must_use]
    pub const fn sheet_begins(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// Decide who owns a drag that started at `touch` and is moving at `velocity`.
///
/// Containment is checked along the vertical axis only: a touch is inside the
/// scroll view when it lies strictly between its top and bottom edges.
#[must_use]
pub fn arbitrate(
    touch: Point,
    velocity: Vec2,
    scroll: &ScrollMetrics,
    heights: SheetHeights,
) -> Ownership {
    let y_in_scroll = touch.y - scroll.frame.y0;
    if !(y_in_scroll > 0.0 && y_in_scroll < scroll.frame.height()) {
        return Ownership::SheetOutsideContent;
    }

    if velocity.y.abs() <= velocity.x.abs() || scroll.content_offset.y != 0.0 {
        return Ownership::Content;
    }

    if velocity.y < 0.0 {
        let can_grow =
            heights.largest > heights.committed && heights.committed < heights.full_screen;
        if can_grow {
            Ownership::Sheet
        } else {
            Ownership::Content
        }
    } else {
        Ownership::Sheet
    }
}
