// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test target for carousel integration tests.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use carousel::{Carousel, CarouselConfig, Direction, Frame, RenderTarget};

/// A render target with adjustable measurements that records every frame.
#[derive(Debug, Clone)]
pub(crate) struct RecordingTarget {
    pub(crate) width: f64,
    pub(crate) items: usize,
    pub(crate) item_extent: f64,
    pub(crate) gap: Option<f64>,
    pub(crate) frames: Vec<Frame>,
}

impl RecordingTarget {
    pub(crate) fn new(width: f64, items: usize) -> Self {
        Self {
            width,
            items,
            item_extent: 350.0,
            gap: Some(30.0),
            frames: Vec::new(),
        }
    }

    pub(crate) fn last(&self) -> &Frame {
        self.frames.last().expect("at least one frame")
    }
}

impl RenderTarget for RecordingTarget {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn item_count(&self) -> usize {
        self.items
    }

    fn first_item_extent(&self) -> Option<f64> {
        (self.items > 0).then_some(self.item_extent)
    }

    fn item_gap(&self) -> Option<f64> {
        self.gap
    }

    fn present(&mut self, frame: &Frame) {
        self.frames.push(*frame);
    }
}

/// Viewport widths for each default breakpoint band.
pub(crate) const ONE_UP: f64 = 400.0;
pub(crate) const TWO_UP: f64 = 900.0;
pub(crate) const THREE_UP: f64 = 1400.0;

pub(crate) fn new_carousel(width: f64, items: usize) -> Carousel<RecordingTarget> {
    Carousel::new(RecordingTarget::new(width, items), CarouselConfig::default())
}

/// Advances to `index` one accepted step at a time, waiting out each cooldown.
/// Returns the timestamp after the last cooldown.
pub(crate) fn walk_to(
    carousel: &mut Carousel<RecordingTarget>,
    index: usize,
    mut now: u64,
) -> u64 {
    while carousel.index() < index {
        assert!(carousel.advance(Direction::Next, now), "advance accepted");
        now += carousel.config().cooldown_ms;
        carousel.poll(now);
    }
    now
}
