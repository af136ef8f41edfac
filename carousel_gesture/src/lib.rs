// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Gesture: drag and swipe recognition for paginated strips.
//!
//! Two small state machines turn raw pointer coordinates into a paging
//! decision:
//!
//! - [`drag::DragState`]: a mouse-style drag with start, move, end and abort.
//!   While active it exposes the live horizontal offset so the host can draw a
//!   provisional position.
//! - [`swipe::SwipeState`]: a touch swipe that only looks at where the touch
//!   started and where it ended.
//!
//! Both resolve to a [`Release`]: commit one step in a [`Direction`] when the
//! horizontal travel is strictly greater than a threshold, or snap back.
//! Dragging content to the right (positive travel) reveals the previous page.
//!
//! ```rust
//! use carousel_gesture::{Direction, Release};
//!
//! assert_eq!(Release::from_travel(-51.0, 50.0), Release::Commit(Direction::Next));
//! assert_eq!(Release::from_travel(51.0, 50.0), Release::Commit(Direction::Prev));
//! assert_eq!(Release::from_travel(50.0, 50.0), Release::SnapBack);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
pub mod swipe;

/// Paging direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices.
    Next,
    /// Toward lower indices.
    Prev,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// Outcome of a finished gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// Travel crossed the threshold; page once in this direction.
    Commit(Direction),
    /// Travel stayed within the threshold; return to the committed position.
    SnapBack,
}

impl Release {
    /// Classifies horizontal travel (`end - start`) against `threshold`.
    #[must_use]
    pub fn from_travel(travel: f64, threshold: f64) -> Self {
        if travel.abs() > threshold {
            if travel > 0.0 {
                Self::Commit(Direction::Prev)
            } else {
                Self::Commit(Direction::Next)
            }
        } else {
            Self::SnapBack
        }
    }
}
