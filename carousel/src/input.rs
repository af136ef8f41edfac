// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_gesture::Direction;

/// Keys the carousel listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Left arrow: previous page.
    ArrowLeft,
    /// Right arrow: next page.
    ArrowRight,
    /// Any other key; ignored.
    Other,
}

impl NavKey {
    /// Paging direction for this key, if it pages at all.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Prev),
            Self::ArrowRight => Some(Direction::Next),
            Self::Other => None,
        }
    }
}

/// A discrete input signal from the host.
///
/// Pointer and touch coordinates are horizontal positions in any consistent
/// space; only differences between them matter.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CarouselInput {
    /// A prev/next control was clicked.
    Button(Direction),
    /// A key was pressed.
    Key(NavKey),
    /// Mouse button pressed over the strip.
    PointerDown {
        /// Pointer x.
        x: f64,
    },
    /// Pointer moved over the strip.
    PointerMove {
        /// Pointer x.
        x: f64,
    },
    /// Mouse button released.
    PointerUp,
    /// Pointer entered the carousel region.
    PointerEnter,
    /// Pointer left the carousel region.
    PointerLeave,
    /// A touch began.
    TouchStart {
        /// Touch x.
        x: f64,
    },
    /// A touch ended.
    TouchEnd {
        /// Touch x.
        x: f64,
    },
    /// The viewport was resized.
    Resize,
}
