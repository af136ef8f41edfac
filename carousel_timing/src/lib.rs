// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel Timing: host-agnostic timer queue primitives.
//!
//! UI controllers often need a handful of named, cancellable deadlines: an
//! animation cooldown, a recurring auto-advance, a trailing-edge debounce.
//! This crate models them as plain data so the controller stays testable
//! without a real clock:
//!
//! - Time is a caller-supplied monotonic timestamp in milliseconds. Nothing
//!   here reads a wall clock.
//! - [`TimerQueue`] holds at most one pending deadline per key. Scheduling a
//!   key that is already pending replaces its deadline, which is exactly the
//!   cancel-then-reschedule step of a trailing-edge debounce.
//! - The host drains due timers with [`TimerQueue::pop_due`] and arms its own
//!   wake-up from [`TimerQueue::next_deadline`].
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_timing::TimerQueue;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, Eq)]
//! enum Kind {
//!     Cooldown,
//!     Debounce,
//! }
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(Kind::Cooldown, 800);
//! timers.schedule(Kind::Debounce, 250);
//!
//! // A second resize event pushes the debounce out.
//! timers.schedule(Kind::Debounce, 400);
//! assert_eq!(timers.next_deadline(), Some(400));
//!
//! let fired = timers.pop_due(1_000).unwrap();
//! assert_eq!(fired.key, Kind::Debounce);
//! assert_eq!(fired.deadline, 400);
//! assert_eq!(timers.pop_due(1_000).unwrap().key, Kind::Cooldown);
//! assert!(timers.pop_due(1_000).is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use smallvec::SmallVec;

/// A pending or fired timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timer<K> {
    /// Caller-chosen identity of the timer.
    pub key: K,
    /// Timestamp (milliseconds) at which the timer is due.
    pub deadline: u64,
}

#[derive(Copy, Clone, Debug)]
struct Entry<K> {
    timer: Timer<K>,
    // Schedule order, used to break deadline ties.
    seq: u64,
}

/// A small queue of named single-shot timers.
///
/// Each key has at most one pending deadline. Recurring timers are expressed
/// by re-scheduling from the fired timer's own deadline, which keeps the
/// cadence free of drift even when the host polls late.
#[derive(Clone, Debug)]
pub struct TimerQueue<K> {
    entries: SmallVec<[Entry<K>; 4]>,
    next_seq: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: SmallVec::new(),
            next_seq: 0,
        }
    }
}

impl<K: Copy + Eq> TimerQueue<K> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `key` to fire at `deadline`.
    ///
    /// Any pending deadline for the same key is replaced and returned.
    pub fn schedule(&mut self, key: K, deadline: u64) -> Option<u64> {
        let replaced = self.cancel(key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            timer: Timer { key, deadline },
            seq,
        });
        replaced
    }

    /// Cancels the pending timer for `key`, returning its deadline if one was pending.
    pub fn cancel(&mut self, key: K) -> Option<u64> {
        let pos = self.entries.iter().position(|e| e.timer.key == key)?;
        Some(self.entries.remove(pos).timer.deadline)
    }

    /// Returns the pending deadline for `key`, if any.
    #[must_use]
    pub fn deadline(&self, key: K) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.timer.key == key)
            .map(|e| e.timer.deadline)
    }

    /// Returns `true` if `key` has a pending deadline.
    #[must_use]
    pub fn is_scheduled(&self, key: K) -> bool {
        self.deadline(key).is_some()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.timer.deadline).min()
    }

    /// Removes and returns the earliest timer whose deadline is `<= now`.
    ///
    /// Timers sharing a deadline come out in the order they were scheduled.
    pub fn pop_due(&mut self, now: u64) -> Option<Timer<K>> {
        let pos = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.timer.deadline <= now)
            .min_by_key(|(_, e)| (e.timer.deadline, e.seq))
            .map(|(i, _)| i)?;
        Some(self.entries.remove(pos).timer)
    }

    /// Cancels every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates pending timers in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = Timer<K>> + '_ {
        self.entries.iter().map(|e| e.timer)
    }
}
