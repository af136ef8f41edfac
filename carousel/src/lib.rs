// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel: a headless navigation and layout engine for paginated carousels.
//!
//! A horizontally paginated strip of cards is driven by many input sources at
//! once: prev/next controls, arrow keys, mouse drags, touch swipes, an
//! auto-advance timer and viewport resizes. [`Carousel`] reconciles all of them
//! into at most one index change at a time and renders a deterministic
//! [`Frame`] (offset plus control visibility) after every change.
//!
//! ## Model
//!
//! - The committed index always satisfies `0 <= index <= max_index`, where
//!   `max_index = max(0, floor(item_count - items_per_view))` is re-derived on
//!   every render from live measurements (see `carousel_layout`).
//! - Every paging source funnels through [`Carousel::advance`]. An accepted
//!   advance moves the controller to [`NavState::Transitioning`] for a fixed
//!   cooldown; requests arriving in that window are dropped, not queued.
//! - Drags show a provisional offset without touching the committed index, and
//!   commit at most one page on release.
//! - Time is supplied by the host. Timers fire from [`Carousel::poll`], so a
//!   test can drive the controller on a virtual clock.
//!
//! The crate does not know about any particular UI toolkit. Hosts implement
//! [`RenderTarget`] to report measurements and apply frames, and translate
//! their native events into [`CarouselInput`].
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel::{Carousel, CarouselConfig, CarouselInput, Controls, Frame, NavKey, RenderTarget};
//!
//! struct Strip {
//!     width: f64,
//!     offset: f64,
//! }
//!
//! impl RenderTarget for Strip {
//!     fn viewport_width(&self) -> f64 { self.width }
//!     fn item_count(&self) -> usize { 5 }
//!     fn first_item_extent(&self) -> Option<f64> { Some(350.0) }
//!     fn item_gap(&self) -> Option<f64> { Some(30.0) }
//!     fn present(&mut self, frame: &Frame) { self.offset = frame.offset; }
//! }
//!
//! let mut carousel = Carousel::new(Strip { width: 900.0, offset: 0.0 }, CarouselConfig::default());
//! assert_eq!(carousel.frame().controls, Controls::NEXT);
//!
//! carousel.handle(CarouselInput::Key(NavKey::ArrowRight), 0);
//! assert_eq!(carousel.index(), 1);
//! assert_eq!(carousel.target().offset, -380.0);
//!
//! // Still cooling down: dropped.
//! carousel.handle(CarouselInput::Key(NavKey::ArrowRight), 100);
//! assert_eq!(carousel.index(), 1);
//!
//! carousel.poll(800);
//! carousel.handle(CarouselInput::Key(NavKey::ArrowRight), 900);
//! assert_eq!(carousel.index(), 2);
//! ```
//!
//! ## Logging
//!
//! State changes are reported through `tracing` at `debug`, dropped inputs and
//! timer firings at `trace`. Install a subscriber in the host to see them.
//!
//! This crate is `no_std`.

#![no_std]

mod carousel;
pub mod compose;
mod config;
mod frame;
mod input;

pub use carousel::{AutoplayState, Carousel, NavState};
pub use config::CarouselConfig;
pub use frame::{Controls, Frame, RenderTarget};
pub use input::{CarouselInput, NavKey};

pub use carousel_gesture::Direction;
pub use carousel_layout::{
    Breakpoint, BreakpointError, Breakpoints, ItemsPerView, LayoutMetrics, StepPolicy,
};
