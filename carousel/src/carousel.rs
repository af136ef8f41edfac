// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller.

use carousel_gesture::drag::DragState;
use carousel_gesture::swipe::SwipeState;
use carousel_gesture::{Direction, Release};
use carousel_layout::{ItemsPerView, LayoutMetrics};
use carousel_timing::{Timer, TimerQueue};
use kurbo::Point;

use crate::{CarouselConfig, CarouselInput, Frame, RenderTarget};

/// Navigation lock state.
///
/// Any index-changing transition moves the carousel to `Transitioning`; the
/// cooldown timer is the only way back to `Idle`. Navigation requests that
/// arrive while transitioning are dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    /// Navigation is accepted.
    Idle,
    /// A transition is in flight until the given timestamp.
    Transitioning {
        /// When the cooldown expires.
        until: u64,
    },
}

/// Auto-advance state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AutoplayState {
    /// No auto-advance.
    #[default]
    Stopped,
    /// Auto-advance timer is armed.
    Running,
    /// Paused while the pointer is over the carousel; resumes on leave.
    Suspended,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum TimerKind {
    Cooldown,
    Autoplay,
    ResizeDebounce,
}

/// Headless controller for a paginated carousel.
///
/// `Carousel` owns the committed index and every piece of transient input
/// state, and is the only writer of either. Each mutating operation ends by
/// rendering a [`Frame`] into its [`RenderTarget`].
///
/// Time is supplied by the host as a monotonic millisecond timestamp. Pending
/// timers (cooldown, autoplay, resize debounce) fire from [`Carousel::poll`];
/// hosts arm a single wake-up at [`Carousel::next_deadline`].
#[derive(Debug)]
pub struct Carousel<T> {
    target: T,
    config: CarouselConfig,
    index: usize,
    nav: NavState,
    drag: DragState,
    swipe: SwipeState,
    autoplay: AutoplayState,
    hovered: bool,
    timers: TimerQueue<TimerKind>,
    items_per_view: ItemsPerView,
    frame: Frame,
}

impl<T: RenderTarget> Carousel<T> {
    /// Creates a controller at index zero and renders the first frame.
    pub fn new(target: T, config: CarouselConfig) -> Self {
        let config = config.normalized();
        let metrics = measure(&target, &config);
        let mut carousel = Self {
            target,
            config,
            index: 0,
            nav: NavState::Idle,
            drag: DragState::default(),
            swipe: SwipeState::default(),
            autoplay: AutoplayState::Stopped,
            hovered: false,
            timers: TimerQueue::new(),
            items_per_view: metrics.items_per_view,
            frame: Frame::committed(0, &metrics),
        };
        carousel.render();
        carousel
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Shared access to the render target.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Mutable access to the render target, for feeding it new measurements.
    ///
    /// Changes take effect on the next render.
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// Consumes the controller, dropping every pending timer.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Committed index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Navigation lock state.
    #[must_use]
    pub fn nav_state(&self) -> NavState {
        self.nav
    }

    /// Returns `true` while a transition cooldown is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.nav, NavState::Transitioning { .. })
    }

    /// Returns `true` while a pointer drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Auto-advance state.
    #[must_use]
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay
    }

    /// Returns `true` while the autoplay timer is scheduled.
    #[must_use]
    pub fn is_autoplay_active(&self) -> bool {
        self.timers.is_scheduled(TimerKind::Autoplay)
    }

    /// Earliest pending timer deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Items per view at the target's current viewport width.
    #[must_use]
    pub fn items_per_view(&self) -> ItemsPerView {
        self.config
            .breakpoints
            .items_per_view(self.target.viewport_width())
    }

    /// Pixel step from the target's current measurements.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.metrics().step
    }

    /// Highest valid index from the target's current measurements.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.metrics().max_index
    }

    /// Freshly measured layout metrics.
    #[must_use]
    pub fn metrics(&self) -> LayoutMetrics {
        measure(&self.target, &self.config)
    }

    /// Re-measures, clamps the index into range, and presents a committed frame.
    pub fn render(&mut self) {
        let metrics = self.metrics();
        let clamped = metrics.clamp_index(self.index);
        if clamped != self.index {
            tracing::debug!(
                from = self.index,
                to = clamped,
                max_index = metrics.max_index,
                "index clamped"
            );
            self.index = clamped;
        }
        self.present(Frame::committed(self.index, &metrics));
    }

    /// Pages once in `direction`, unless a transition is already in flight.
    ///
    /// Returns `false` if the request was dropped by the cooldown. The lock
    /// ends at its deadline whether or not [`Carousel::poll`] has run yet. An
    /// accepted request always starts a cooldown, even at an edge where the
    /// index cannot move.
    pub fn advance(&mut self, direction: Direction, now: u64) -> bool {
        if let NavState::Transitioning { until } = self.nav {
            if now < until {
                tracing::trace!(?direction, until, "advance dropped: transition in flight");
                return false;
            }
            // The cooldown has expired but its timer has not been polled yet.
            self.timers.cancel(TimerKind::Cooldown);
            self.nav = NavState::Idle;
        }
        let max_index = self.max_index();
        let before = self.index;
        match direction {
            Direction::Next if self.index < max_index => self.index += 1,
            Direction::Prev if self.index > 0 => self.index -= 1,
            _ => {}
        }
        if self.index != before {
            tracing::debug!(?direction, index = self.index, max_index, "advanced");
        }
        let until = now.saturating_add(self.config.cooldown_ms);
        self.nav = NavState::Transitioning { until };
        self.timers.schedule(TimerKind::Cooldown, until);
        self.render();
        true
    }

    /// Returns to the first page, bypassing the cooldown.
    pub fn jump_to_start(&mut self) {
        if self.index != 0 {
            tracing::debug!(from = self.index, "jumped to start");
        }
        self.index = 0;
        self.render();
    }

    /// Begins a pointer drag at horizontal position `x`. Ignored while dragging.
    pub fn on_drag_start(&mut self, x: f64) {
        if !self.drag.start(Point::new(x, 0.0)) {
            tracing::trace!("drag start ignored: already dragging");
        }
    }

    /// Updates a drag and presents a provisional offset. Ignored when not dragging.
    pub fn on_drag_move(&mut self, x: f64) {
        let Some(travel) = self.drag.update(Point::new(x, 0.0)) else {
            return;
        };
        let metrics = self.metrics();
        let index = metrics.clamp_index(self.index);
        self.present(Frame::committed(index, &metrics).with_drag_travel(travel));
    }

    /// Ends a drag: pages once if it travelled past the threshold, else snaps back.
    pub fn on_drag_end(&mut self, now: u64) {
        let Some(release) = self.drag.end(self.config.drag_threshold) else {
            return;
        };
        self.release(release, now);
    }

    /// Abandons a drag (pointer left the carousel) and snaps back.
    pub fn on_drag_abort(&mut self) {
        if self.drag.abort() {
            tracing::trace!("drag aborted");
            self.render();
        }
    }

    /// Records a touch start at horizontal position `x`.
    pub fn on_touch_start(&mut self, x: f64) {
        self.swipe.begin(Point::new(x, 0.0));
    }

    /// Finishes a touch swipe. Short swipes change nothing.
    pub fn on_touch_end(&mut self, x: f64, now: u64) {
        let threshold = self.config.drag_threshold;
        if let Some(Release::Commit(direction)) = self.swipe.finish(Point::new(x, 0.0), threshold)
        {
            self.advance(direction, now);
        }
    }

    /// Starts (or restarts) auto-advance with a full interval from `now`.
    ///
    /// Any pending autoplay timer is cancelled first, so repeated starts leave
    /// exactly one timer. While the pointer is over the carousel, autoplay is
    /// left suspended until the pointer leaves.
    pub fn start_autoplay(&mut self, now: u64) {
        self.timers.cancel(TimerKind::Autoplay);
        if self.hovered {
            self.autoplay = AutoplayState::Suspended;
            return;
        }
        self.autoplay = AutoplayState::Running;
        self.timers.schedule(
            TimerKind::Autoplay,
            now.saturating_add(self.config.autoplay_interval_ms),
        );
        tracing::debug!("autoplay started");
    }

    /// Stops auto-advance.
    pub fn stop_autoplay(&mut self) {
        self.timers.cancel(TimerKind::Autoplay);
        if self.autoplay != AutoplayState::Stopped {
            tracing::debug!("autoplay stopped");
        }
        self.autoplay = AutoplayState::Stopped;
    }

    /// Pointer entered the carousel region: suspend autoplay.
    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        if self.autoplay == AutoplayState::Running {
            self.timers.cancel(TimerKind::Autoplay);
            self.autoplay = AutoplayState::Suspended;
            tracing::trace!("autoplay suspended");
        }
    }

    /// Pointer left the carousel region: abort any drag and resume autoplay.
    pub fn on_pointer_leave(&mut self, now: u64) {
        self.hovered = false;
        self.on_drag_abort();
        if self.autoplay == AutoplayState::Suspended {
            self.start_autoplay(now);
        }
    }

    /// Notes a viewport resize; the re-render happens once resizes go quiet.
    ///
    /// Each call pushes the pending re-render out by the debounce window.
    pub fn on_viewport_resize(&mut self, now: u64) {
        self.timers.schedule(
            TimerKind::ResizeDebounce,
            now.saturating_add(self.config.resize_debounce_ms),
        );
    }

    /// Fires every timer due at or before `now`, each at its own deadline.
    pub fn poll(&mut self, now: u64) {
        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(timer);
        }
    }

    /// Dispatches a host input.
    ///
    /// Timers already due at `now` fire first, so the input sees the same
    /// state as it would had the host woken on time.
    pub fn handle(&mut self, input: CarouselInput, now: u64) {
        self.poll(now);
        match input {
            CarouselInput::Button(direction) => {
                self.advance(direction, now);
            }
            CarouselInput::Key(key) => {
                if let Some(direction) = key.direction() {
                    self.advance(direction, now);
                }
            }
            CarouselInput::PointerDown { x } => self.on_drag_start(x),
            CarouselInput::PointerMove { x } => self.on_drag_move(x),
            CarouselInput::PointerUp => self.on_drag_end(now),
            CarouselInput::PointerEnter => self.on_pointer_enter(),
            CarouselInput::PointerLeave => self.on_pointer_leave(now),
            CarouselInput::TouchStart { x } => self.on_touch_start(x),
            CarouselInput::TouchEnd { x } => self.on_touch_end(x, now),
            CarouselInput::Resize => self.on_viewport_resize(now),
        }
    }

    /// Cancels every timer and abandons transient input state.
    ///
    /// The committed index is kept and a committed frame is presented.
    pub fn shutdown(&mut self) {
        self.timers.clear();
        self.drag.abort();
        self.swipe.cancel();
        self.autoplay = AutoplayState::Stopped;
        self.hovered = false;
        self.nav = NavState::Idle;
        tracing::debug!("carousel shut down");
        self.render();
    }

    fn release(&mut self, release: Release, now: u64) {
        match release {
            Release::Commit(direction) => {
                // A dropped commit must not leave the drag preview on screen.
                if !self.advance(direction, now) {
                    self.render();
                }
            }
            Release::SnapBack => self.render(),
        }
    }

    fn fire(&mut self, timer: Timer<TimerKind>) {
        tracing::trace!(kind = ?timer.key, deadline = timer.deadline, "timer fired");
        match timer.key {
            TimerKind::Cooldown => self.nav = NavState::Idle,
            TimerKind::Autoplay => {
                if self.autoplay != AutoplayState::Running {
                    return;
                }
                match timer.deadline.checked_add(self.config.autoplay_interval_ms) {
                    Some(next) => {
                        self.timers.schedule(TimerKind::Autoplay, next);
                    }
                    None => {
                        tracing::debug!("autoplay stopped: clock exhausted");
                        self.autoplay = AutoplayState::Stopped;
                    }
                }
                self.autoplay_tick(timer.deadline);
            }
            TimerKind::ResizeDebounce => self.apply_resize(),
        }
    }

    fn autoplay_tick(&mut self, now: u64) {
        if self.index < self.max_index() {
            self.advance(Direction::Next, now);
        } else {
            self.jump_to_start();
        }
    }

    fn apply_resize(&mut self) {
        let items_per_view = self.items_per_view();
        if items_per_view != self.items_per_view {
            tracing::debug!(
                from = self.items_per_view.as_f64(),
                to = items_per_view.as_f64(),
                "items per view changed"
            );
            self.items_per_view = items_per_view;
        }
        // Container size may change without crossing a breakpoint.
        self.render();
    }

    fn present(&mut self, frame: Frame) {
        self.frame = frame;
        self.target.present(&frame);
    }
}

fn measure<T: RenderTarget>(target: &T, config: &CarouselConfig) -> LayoutMetrics {
    LayoutMetrics::compute(
        &config.breakpoints,
        &config.step,
        target.viewport_width(),
        target.item_count(),
        target.first_item_extent(),
        target.item_gap(),
    )
}
