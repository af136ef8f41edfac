// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-render layout metrics.

use crate::{Breakpoints, ItemsPerView};

/// How to turn live item measurements into a pixel step.
///
/// The step is the rendered extent of the first item plus the gap between
/// items. A missing (or unusable) first-item extent yields
/// [`StepPolicy::fallback_step`]; a missing gap yields
/// [`StepPolicy::default_gap`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepPolicy {
    /// Step used when no item is rendered.
    pub fallback_step: f64,
    /// Gap used when the container reports none.
    pub default_gap: f64,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            fallback_step: 380.0,
            default_gap: 30.0,
        }
    }
}

impl StepPolicy {
    /// Computes the step from a measured first-item extent and gap.
    ///
    /// Extents and gaps that are negative or not finite count as missing.
    #[must_use]
    pub fn step(&self, first_item_extent: Option<f64>, gap: Option<f64>) -> f64 {
        let Some(extent) = first_item_extent.filter(|e| usable(*e)) else {
            return self.fallback_step;
        };
        let gap = gap.filter(|g| usable(*g)).unwrap_or(self.default_gap);
        extent + gap
    }
}

fn usable(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Layout values derived for a single render.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutMetrics {
    /// Items visible at the current viewport width.
    pub items_per_view: ItemsPerView,
    /// Pixel distance per index unit.
    pub step: f64,
    /// Highest valid index.
    pub max_index: usize,
}

impl LayoutMetrics {
    /// Derives metrics from the current viewport and item measurements.
    #[must_use]
    pub fn compute(
        breakpoints: &Breakpoints,
        policy: &StepPolicy,
        viewport_width: f64,
        item_count: usize,
        first_item_extent: Option<f64>,
        gap: Option<f64>,
    ) -> Self {
        let items_per_view = breakpoints.items_per_view(viewport_width);
        // An empty strip has no first item, whatever the target reports.
        let first_item_extent = first_item_extent.filter(|_| item_count > 0);
        Self {
            items_per_view,
            step: policy.step(first_item_extent, gap),
            max_index: items_per_view.max_index(item_count),
        }
    }

    /// Clamps `index` into `0..=max_index`.
    #[must_use]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.max_index)
    }

    /// Horizontal offset that brings `index` to the leading edge.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f64 {
        -(index as f64) * self.step
    }

    /// Returns `true` when every item fits and no paging is possible.
    #[must_use]
    pub fn is_single_page(&self) -> bool {
        self.max_index == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutMetrics, StepPolicy};
    use crate::{Breakpoints, ItemsPerView};

    #[test]
    fn step_adds_gap_to_extent() {
        let policy = StepPolicy::default();
        assert_eq!(policy.step(Some(300.0), Some(20.0)), 320.0);
    }

    #[test]
    fn step_uses_default_gap_when_missing() {
        let policy = StepPolicy::default();
        assert_eq!(policy.step(Some(300.0), None), 330.0);
        assert_eq!(policy.step(Some(300.0), Some(f64::NAN)), 330.0);
    }

    #[test]
    fn step_falls_back_without_first_item() {
        let policy = StepPolicy {
            fallback_step: 123.0,
            default_gap: 7.0,
        };
        assert_eq!(policy.step(None, Some(20.0)), 123.0);
        assert_eq!(policy.step(Some(-1.0), Some(20.0)), 123.0);
        assert_eq!(policy.step(Some(f64::INFINITY), None), 123.0);
    }

    #[test]
    fn empty_strip_uses_fallback_and_single_page() {
        let metrics = LayoutMetrics::compute(
            &Breakpoints::default(),
            &StepPolicy::default(),
            1400.0,
            0,
            Some(350.0),
            Some(30.0),
        );
        assert_eq!(metrics.step, 380.0);
        assert_eq!(metrics.max_index, 0);
        assert!(metrics.is_single_page());
        assert_eq!(metrics.offset_for(0), 0.0);
    }

    #[test]
    fn narrow_viewport_keeps_max_index_non_negative() {
        let metrics = LayoutMetrics::compute(
            &Breakpoints::default(),
            &StepPolicy::default(),
            100.0,
            1,
            Some(90.0),
            Some(10.0),
        );
        assert_eq!(metrics.items_per_view, ItemsPerView::ONE);
        assert_eq!(metrics.max_index, 0);
    }

    #[test]
    fn clamp_and_offset() {
        let metrics = LayoutMetrics::compute(
            &Breakpoints::default(),
            &StepPolicy::default(),
            1300.0,
            5,
            Some(370.0),
            Some(30.0),
        );
        assert_eq!(metrics.max_index, 2);
        assert_eq!(metrics.clamp_index(3), 2);
        assert_eq!(metrics.clamp_index(1), 1);
        assert_eq!(metrics.offset_for(2), -800.0);
    }
}
