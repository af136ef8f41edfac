// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.

use carousel::compose::{TransformStack, parallax_offset};
use carousel::{Controls, Frame, RenderTarget};

/// Decorative effects applied on top of the carousel offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Vertical drift proportional to page scroll.
    Parallax,
}

/// An in-memory strip of equally sized cards that logs every frame.
#[derive(Debug)]
pub struct LoggedStrip {
    /// Viewport width in pixels.
    pub width: f64,
    /// Card width in pixels.
    pub card_width: f64,
    /// Gap between cards in pixels.
    pub gap: f64,
    /// Per-card decorative offsets.
    pub cards: Vec<TransformStack<Effect>>,
    /// Last presented frame.
    pub last: Option<Frame>,
}

impl LoggedStrip {
    /// Creates a strip with `count` cards.
    pub fn new(width: f64, count: usize) -> Self {
        Self {
            width,
            card_width: 350.0,
            gap: 30.0,
            cards: (0..count).map(|_| TransformStack::new()).collect(),
            last: None,
        }
    }

    /// Recomputes every card's parallax drift for a page scroll of `scroll_y`.
    pub fn scroll_page(&mut self, scroll_y: f64) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.set(Effect::Parallax, parallax_offset(scroll_y, index));
        }
    }

    /// Final per-card translations: the committed strip offset plus decoration.
    pub fn card_translations(&self) -> Vec<kurbo::Vec2> {
        let offset = self.last.map_or(0.0, |frame| frame.offset);
        self.cards
            .iter()
            .map(|card| card.compose(offset).translation())
            .collect()
    }
}

impl RenderTarget for LoggedStrip {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn item_count(&self) -> usize {
        self.cards.len()
    }

    fn first_item_extent(&self) -> Option<f64> {
        (!self.cards.is_empty()).then_some(self.card_width)
    }

    fn item_gap(&self) -> Option<f64> {
        Some(self.gap)
    }

    fn present(&mut self, frame: &Frame) {
        tracing::info!(
            index = frame.index,
            max_index = frame.max_index,
            offset = frame.offset,
            provisional = frame.provisional,
            prev = frame.controls.contains(Controls::PREV),
            next = frame.controls.contains(Controls::NEXT),
            "frame"
        );
        self.last = Some(*frame);
    }
}
