// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-width breakpoints mapping to items per view.

use core::fmt;

use smallvec::SmallVec;

use crate::ItemsPerView;

/// One row of a breakpoint table: viewports narrower than `below` show `items`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Breakpoint {
    /// Exclusive upper bound on the viewport width, in pixels.
    pub below: f64,
    /// Items per view for viewports in this band.
    pub items: ItemsPerView,
}

impl Breakpoint {
    /// Creates a breakpoint row.
    #[must_use]
    pub const fn new(below: f64, items: ItemsPerView) -> Self {
        Self { below, items }
    }
}

/// Error returned when a breakpoint table is malformed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BreakpointError {
    /// A width bound is NaN or infinite.
    NonFinite {
        /// Row index of the offending breakpoint.
        index: usize,
    },
    /// A width bound is not strictly greater than the one before it.
    NotAscending {
        /// Row index of the offending breakpoint.
        index: usize,
        /// The offending width bound.
        below: f64,
    },
}

impl fmt::Display for BreakpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { index } => {
                write!(f, "breakpoint {index} has a non-finite width bound")
            }
            Self::NotAscending { index, below } => write!(
                f,
                "breakpoint {index} (below {below}px) is not wider than the previous one"
            ),
        }
    }
}

impl core::error::Error for BreakpointError {}

/// Step function from viewport width to [`ItemsPerView`].
///
/// Rows are checked in ascending order; the first row whose `below` bound
/// exceeds the viewport width wins. Wider viewports use [`Breakpoints::widest`].
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    steps: SmallVec<[Breakpoint; 6]>,
    widest: ItemsPerView,
}

impl Breakpoints {
    /// Builds a table from ascending rows plus the value used past the last row.
    pub fn new(
        steps: impl IntoIterator<Item = Breakpoint>,
        widest: ItemsPerView,
    ) -> Result<Self, BreakpointError> {
        let steps: SmallVec<[Breakpoint; 6]> = steps.into_iter().collect();
        let mut previous = f64::NEG_INFINITY;
        for (index, step) in steps.iter().enumerate() {
            if !step.below.is_finite() {
                return Err(BreakpointError::NonFinite { index });
            }
            if step.below <= previous {
                return Err(BreakpointError::NotAscending {
                    index,
                    below: step.below,
                });
            }
            previous = step.below;
        }
        Ok(Self { steps, widest })
    }

    /// A table with a single band: every viewport shows `items`.
    #[must_use]
    pub fn uniform(items: ItemsPerView) -> Self {
        Self {
            steps: SmallVec::new(),
            widest: items,
        }
    }

    /// Items per view for a viewport of the given width.
    ///
    /// A NaN width falls through to [`Breakpoints::widest`].
    #[must_use]
    pub fn items_per_view(&self, viewport_width: f64) -> ItemsPerView {
        self.steps
            .iter()
            .find(|step| viewport_width < step.below)
            .map_or(self.widest, |step| step.items)
    }

    /// The bounded rows, in ascending order.
    #[must_use]
    pub fn steps(&self) -> &[Breakpoint] {
        &self.steps
    }

    /// Items per view past the last bounded row.
    #[must_use]
    pub fn widest(&self) -> ItemsPerView {
        self.widest
    }
}

impl Default for Breakpoints {
    /// Phone, large phone, tablet, small desktop, desktop.
    fn default() -> Self {
        Self {
            steps: SmallVec::from_slice(&[
                Breakpoint::new(480.0, ItemsPerView::ONE),
                Breakpoint::new(768.0, ItemsPerView::reduced(3, 2)),
                Breakpoint::new(1024.0, ItemsPerView::whole(2)),
                Breakpoint::new(1280.0, ItemsPerView::reduced(5, 2)),
            ]),
            widest: ItemsPerView::whole(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Breakpoint, BreakpointError, Breakpoints};
    use crate::ItemsPerView;

    fn ipv(numer: u32, denom: u32) -> ItemsPerView {
        ItemsPerView::new(numer, denom).unwrap()
    }

    #[test]
    fn default_table_bands() {
        let table = Breakpoints::default();
        assert_eq!(table.items_per_view(320.0), ipv(1, 1));
        assert_eq!(table.items_per_view(479.9), ipv(1, 1));
        assert_eq!(table.items_per_view(480.0), ipv(3, 2));
        assert_eq!(table.items_per_view(767.0), ipv(3, 2));
        assert_eq!(table.items_per_view(768.0), ipv(2, 1));
        assert_eq!(table.items_per_view(1023.0), ipv(2, 1));
        assert_eq!(table.items_per_view(1024.0), ipv(5, 2));
        assert_eq!(table.items_per_view(1279.0), ipv(5, 2));
        assert_eq!(table.items_per_view(1280.0), ipv(3, 1));
        assert_eq!(table.items_per_view(4096.0), ipv(3, 1));
    }

    #[test]
    fn nan_width_uses_widest_band() {
        let table = Breakpoints::default();
        assert_eq!(table.items_per_view(f64::NAN), table.widest());
    }

    #[test]
    fn new_accepts_ascending_rows() {
        let table = Breakpoints::new(
            [
                Breakpoint::new(600.0, ItemsPerView::ONE),
                Breakpoint::new(900.0, ipv(2, 1)),
            ],
            ipv(4, 1),
        )
        .unwrap();
        assert_eq!(table.steps().len(), 2);
        assert_eq!(table.items_per_view(700.0), ipv(2, 1));
        assert_eq!(table.items_per_view(900.0), ipv(4, 1));
    }

    #[test]
    fn new_rejects_unsorted_rows() {
        let err = Breakpoints::new(
            [
                Breakpoint::new(900.0, ItemsPerView::ONE),
                Breakpoint::new(600.0, ipv(2, 1)),
            ],
            ipv(3, 1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BreakpointError::NotAscending {
                index: 1,
                below: 600.0
            }
        );
    }

    #[test]
    fn new_rejects_duplicate_and_non_finite_bounds() {
        let dup = Breakpoints::new(
            [
                Breakpoint::new(600.0, ItemsPerView::ONE),
                Breakpoint::new(600.0, ipv(2, 1)),
            ],
            ipv(3, 1),
        );
        assert!(matches!(dup, Err(BreakpointError::NotAscending { index: 1, .. })));

        let inf = Breakpoints::new([Breakpoint::new(f64::INFINITY, ItemsPerView::ONE)], ipv(3, 1));
        assert_eq!(inf, Err(BreakpointError::NonFinite { index: 0 }));
    }

    #[test]
    fn uniform_ignores_width() {
        let table = Breakpoints::uniform(ipv(2, 1));
        assert_eq!(table.items_per_view(10.0), ipv(2, 1));
        assert_eq!(table.items_per_view(10_000.0), ipv(2, 1));
    }
}
