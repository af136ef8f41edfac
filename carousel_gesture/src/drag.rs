// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: track a pointer drag and resolve it against a paging threshold.
//!
//! ## Usage
//!
//! 1) Begin with [`DragState::start`]. A start while already dragging is refused.
//! 2) On each move, call [`DragState::update`]; it returns the live horizontal
//!    travel from the start position, for drawing a provisional offset.
//! 3) Finish with [`DragState::end`] to get a [`Release`], or abandon the drag
//!    with [`DragState::abort`] (for example when the pointer leaves the strip).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use carousel_gesture::{Direction, Release, drag::DragState};
//!
//! let mut drag = DragState::default();
//!
//! assert!(drag.start(Point::new(300.0, 40.0)));
//! assert_eq!(drag.update(Point::new(240.0, 42.0)), Some(-60.0));
//!
//! assert_eq!(drag.end(50.0), Some(Release::Commit(Direction::Next)));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

use crate::Release;

/// Tracks a single pointer drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position where the drag began.
    pub start_pos: Option<Point>,
    /// Most recent pointer position during the drag.
    pub current_pos: Option<Point>,
}

impl DragState {
    /// Begins a drag at `pos`.
    ///
    /// Returns `false` and leaves state untouched if a drag is already active.
    pub fn start(&mut self, pos: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.start_pos = Some(pos);
        self.current_pos = Some(pos);
        true
    }

    /// Records a new pointer position and returns the horizontal travel since start.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<f64> {
        self.start_pos?;
        self.current_pos = Some(pos);
        self.horizontal_travel()
    }

    /// Full 2D offset from start to the current position.
    #[must_use]
    pub fn total_offset(&self) -> Option<Vec2> {
        Some(self.current_pos? - self.start_pos?)
    }

    /// Horizontal travel from start to the current position.
    #[must_use]
    pub fn horizontal_travel(&self) -> Option<f64> {
        self.total_offset().map(|offset| offset.x)
    }

    /// Ends the drag and classifies its travel against `threshold`.
    ///
    /// Returns `None` when no drag is active.
    pub fn end(&mut self, threshold: f64) -> Option<Release> {
        let travel = self.horizontal_travel()?;
        self.reset();
        Some(Release::from_travel(travel, threshold))
    }

    /// Abandons the drag without committing.
    ///
    /// Returns `true` if a drag was active.
    pub fn abort(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.reset();
        was_dragging
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    fn reset(&mut self) {
        self.start_pos = None;
        self.current_pos = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::DragState;
    use crate::{Direction, Release};

    #[test]
    fn new_drag_state_is_not_dragging() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert!(drag.current_pos.is_none());
    }

    #[test]
    fn start_records_both_positions() {
        let mut drag = DragState::default();
        let start = Point::new(10.0, 20.0);

        assert!(drag.start(start));

        assert_eq!(drag.start_pos, Some(start));
        assert_eq!(drag.current_pos, Some(start));
        assert_eq!(drag.horizontal_travel(), Some(0.0));
    }

    #[test]
    fn start_while_dragging_is_refused() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 0.0));
        drag.update(Point::new(30.0, 0.0));

        assert!(!drag.start(Point::new(500.0, 0.0)));
        assert_eq!(drag.start_pos, Some(Point::new(10.0, 0.0)));
        assert_eq!(drag.horizontal_travel(), Some(20.0));
    }

    #[test]
    fn update_returns_travel_from_start() {
        let mut drag = DragState::default();
        drag.start(Point::new(100.0, 0.0));

        assert_eq!(drag.update(Point::new(90.0, 5.0)), Some(-10.0));
        assert_eq!(drag.update(Point::new(60.0, 9.0)), Some(-40.0));
        assert_eq!(drag.total_offset(), Some(Vec2::new(-40.0, 9.0)));
    }

    #[test]
    fn update_without_drag_is_ignored() {
        let mut drag = DragState::default();

        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.current_pos.is_none());
    }

    #[test]
    fn end_without_move_snaps_back() {
        let mut drag = DragState::default();
        drag.start(Point::new(200.0, 0.0));

        assert_eq!(drag.end(50.0), Some(Release::SnapBack));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_commits_past_threshold() {
        let mut drag = DragState::default();
        drag.start(Point::new(200.0, 0.0));
        drag.update(Point::new(251.0, 0.0));

        assert_eq!(drag.end(50.0), Some(Release::Commit(Direction::Prev)));
    }

    #[test]
    fn end_without_drag_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.end(50.0), None);
    }

    #[test]
    fn abort_resets_and_reports() {
        let mut drag = DragState::default();
        assert!(!drag.abort());

        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(-300.0, 0.0));
        assert!(drag.abort());
        assert!(!drag.is_dragging());
        assert_eq!(drag.horizontal_travel(), None);
    }

    #[test]
    fn vertical_motion_does_not_count() {
        let mut drag = DragState::default();
        drag.start(Point::new(50.0, 0.0));
        drag.update(Point::new(60.0, 400.0));

        assert_eq!(drag.end(50.0), Some(Release::SnapBack));
    }
}
