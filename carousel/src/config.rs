// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use carousel_layout::{Breakpoints, StepPolicy};

/// Tunable behavior of a [`Carousel`](crate::Carousel).
///
/// All durations are in milliseconds of the host's clock. The defaults match a
/// typical card carousel: an 800ms cooldown between page changes, auto-advance
/// every six seconds, a 250ms resize debounce, and a 50px drag threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Viewport width to items-per-view table.
    pub breakpoints: Breakpoints,
    /// Step measurement fallbacks.
    pub step: StepPolicy,
    /// How long an index transition blocks further navigation.
    pub cooldown_ms: u64,
    /// Autoplay period. Always at least one.
    pub autoplay_interval_ms: u64,
    /// Quiescence window before a resize is applied.
    pub resize_debounce_ms: u64,
    /// Horizontal travel a drag or swipe must strictly exceed to page.
    pub drag_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            step: StepPolicy::default(),
            cooldown_ms: 800,
            autoplay_interval_ms: 6_000,
            resize_debounce_ms: 250,
            drag_threshold: 50.0,
        }
    }
}

impl CarouselConfig {
    /// Replaces the breakpoint table.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Replaces the step fallbacks.
    #[must_use]
    pub fn with_step_policy(mut self, step: StepPolicy) -> Self {
        self.step = step;
        self
    }

    /// Sets the navigation cooldown.
    #[must_use]
    pub fn with_cooldown_ms(mut self, ms: u64) -> Self {
        self.cooldown_ms = ms;
        self
    }

    /// Sets the autoplay period, normalized to at least one millisecond.
    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = ms.max(1);
        self
    }

    /// Sets the resize debounce window.
    #[must_use]
    pub fn with_resize_debounce_ms(mut self, ms: u64) -> Self {
        self.resize_debounce_ms = ms;
        self
    }

    /// Sets the drag/swipe threshold. Negative or NaN values become zero.
    #[must_use]
    pub fn with_drag_threshold(mut self, px: f64) -> Self {
        self.drag_threshold = if px > 0.0 { px } else { 0.0 };
        self
    }

    // Fields are public, so re-normalize before use.
    pub(crate) fn normalized(mut self) -> Self {
        self.autoplay_interval_ms = self.autoplay_interval_ms.max(1);
        let threshold = self.drag_threshold;
        self.with_drag_threshold(threshold)
    }
}
