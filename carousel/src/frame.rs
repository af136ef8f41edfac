// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output and the render-target seam.

use carousel_layout::{ItemsPerView, LayoutMetrics};

bitflags::bitflags! {
    /// Which paging controls should be shown.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Controls: u8 {
        /// The "previous" control is visible.
        const PREV = 0b0000_0001;
        /// The "next" control is visible.
        const NEXT = 0b0000_0010;
    }
}

impl Controls {
    /// Control visibility for `index` within `0..=max_index`.
    ///
    /// Both controls hide when no paging is possible.
    #[must_use]
    pub fn for_position(index: usize, max_index: usize) -> Self {
        let mut controls = Self::empty();
        if max_index == 0 {
            return controls;
        }
        controls.set(Self::PREV, index > 0);
        controls.set(Self::NEXT, index < max_index);
        controls
    }
}

/// Everything a host needs to draw the carousel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Committed index.
    pub index: usize,
    /// Highest valid index at render time.
    pub max_index: usize,
    /// Items per view at render time.
    pub items_per_view: ItemsPerView,
    /// Pixel step at render time.
    pub step: f64,
    /// Horizontal offset to draw. Differs from `committed_offset` only during a drag.
    pub offset: f64,
    /// `-index * step`.
    pub committed_offset: f64,
    /// Visible paging controls.
    pub controls: Controls,
    /// `true` when `offset` is a drag preview.
    pub provisional: bool,
}

impl Frame {
    pub(crate) fn committed(index: usize, metrics: &LayoutMetrics) -> Self {
        let committed_offset = metrics.offset_for(index);
        Self {
            index,
            max_index: metrics.max_index,
            items_per_view: metrics.items_per_view,
            step: metrics.step,
            offset: committed_offset,
            committed_offset,
            controls: Controls::for_position(index, metrics.max_index),
            provisional: false,
        }
    }

    pub(crate) fn with_drag_travel(mut self, travel: f64) -> Self {
        self.offset = self.committed_offset + travel;
        self.provisional = true;
        self
    }
}

/// The visual container a [`Carousel`](crate::Carousel) measures and draws into.
///
/// Measurements are read fresh on every render; implementations should report
/// the live layout rather than cached values.
pub trait RenderTarget {
    /// Current viewport width in pixels.
    fn viewport_width(&self) -> f64;

    /// Number of items in the strip.
    fn item_count(&self) -> usize;

    /// Rendered main-axis extent of the first item, or `None` if nothing is rendered.
    fn first_item_extent(&self) -> Option<f64>;

    /// Gap between adjacent items, or `None` if the container does not report one.
    fn item_gap(&self) -> Option<f64>;

    /// Applies a rendered frame: offset and control visibility.
    fn present(&mut self, frame: &Frame);
}
