// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Layout: responsive pagination metrics for horizontal carousels.
//!
//! A paginated carousel shows a fractional number of items at once and shifts
//! by one item per index step. This crate derives everything the controller
//! needs to know about that geometry, fresh from live measurements:
//!
//! - [`ItemsPerView`]: an exact rational count of visible items (`1`, `3/2`, ...).
//! - [`Breakpoints`]: a step function from viewport width to [`ItemsPerView`].
//! - [`StepPolicy`]: turns a measured first-item extent and gap into a pixel
//!   step, falling back to a constant when nothing is rendered.
//! - [`LayoutMetrics`]: one render's worth of derived values, including
//!   `max_index = max(0, floor(item_count - items_per_view))` and the offset
//!   for a given index.
//!
//! Nothing here is cached. Callers recompute [`LayoutMetrics`] on every
//! layout-affecting operation since the viewport may change between calls.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_layout::{Breakpoints, LayoutMetrics, StepPolicy};
//!
//! let breakpoints = Breakpoints::default();
//! let policy = StepPolicy::default();
//!
//! // 900px wide viewport shows two items; five items leave three steps.
//! let metrics = LayoutMetrics::compute(&breakpoints, &policy, 900.0, 5, Some(350.0), Some(30.0));
//! assert_eq!(metrics.items_per_view.as_f64(), 2.0);
//! assert_eq!(metrics.max_index, 3);
//! assert_eq!(metrics.step, 380.0);
//! assert_eq!(metrics.offset_for(2), -760.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod breakpoints;
mod items_per_view;
mod metrics;

pub use breakpoints::{Breakpoint, BreakpointError, Breakpoints};
pub use items_per_view::ItemsPerView;
pub use metrics::{LayoutMetrics, StepPolicy};
