// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch swipe state: compare where a touch started with where it ended.
//!
//! Unlike [`DragState`](crate::drag::DragState) there is no live preview; a
//! swipe only produces a decision when the touch lifts.
//!
//! ```
//! use kurbo::Point;
//! use carousel_gesture::{Direction, Release, swipe::SwipeState};
//!
//! let mut swipe = SwipeState::default();
//! swipe.begin(Point::new(200.0, 300.0));
//! assert_eq!(
//!     swipe.finish(Point::new(120.0, 310.0), 50.0),
//!     Some(Release::Commit(Direction::Next))
//! );
//! ```

use kurbo::Point;

use crate::Release;

/// Tracks one touch from start to end.
#[derive(Debug, Clone, Default, Copy)]
pub struct SwipeState {
    start_pos: Option<Point>,
}

impl SwipeState {
    /// Records the touch-start position, replacing any unfinished swipe.
    pub fn begin(&mut self, pos: Point) {
        self.start_pos = Some(pos);
    }

    /// Finishes the swipe at `pos` and classifies it against `threshold`.
    ///
    /// Returns `None` if no touch was started.
    pub fn finish(&mut self, pos: Point, threshold: f64) -> Option<Release> {
        let start = self.start_pos.take()?;
        Some(Release::from_travel(pos.x - start.x, threshold))
    }

    /// Forgets an unfinished swipe.
    pub fn cancel(&mut self) {
        self.start_pos = None;
    }

    /// Returns `true` between [`SwipeState::begin`] and [`SwipeState::finish`].
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}
