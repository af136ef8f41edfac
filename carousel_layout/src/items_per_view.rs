// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Number of items visible at once, as an exact reduced fraction.
///
/// The value is always at least one, which keeps `max_index` non-negative for
/// any item count. Keeping it rational (rather than `f64`) makes the
/// `floor(item_count - items_per_view)` bound exact and lets two views be
/// compared for equality when deciding whether a resize changed the layout
/// class.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemsPerView {
    numer: u32,
    denom: u32,
}

impl ItemsPerView {
    /// Exactly one item per view.
    pub const ONE: Self = Self::whole(1);

    /// A whole number of items per view. `n` must be at least one.
    pub(crate) const fn whole(n: u32) -> Self {
        Self { numer: n, denom: 1 }
    }

    // Callers guarantee the fraction is reduced and >= 1.
    pub(crate) const fn reduced(numer: u32, denom: u32) -> Self {
        Self { numer, denom }
    }

    /// Creates `numer / denom` items per view.
    ///
    /// Returns `None` if `denom` is zero or the value is below one.
    #[must_use]
    pub fn new(numer: u32, denom: u32) -> Option<Self> {
        if denom == 0 || numer < denom {
            return None;
        }
        let g = gcd(numer, denom);
        Some(Self {
            numer: numer / g,
            denom: denom / g,
        })
    }

    /// Numerator of the reduced fraction.
    #[must_use]
    pub fn numer(self) -> u32 {
        self.numer
    }

    /// Denominator of the reduced fraction.
    #[must_use]
    pub fn denom(self) -> u32 {
        self.denom
    }

    /// The value as a float.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.numer) / f64::from(self.denom)
    }

    /// Highest reachable index for `item_count` items:
    /// `max(0, floor(item_count - self))`.
    #[must_use]
    pub fn max_index(self, item_count: usize) -> usize {
        let denom = u64::from(self.denom);
        let scaled = (item_count as u64).saturating_mul(denom);
        let numer = u64::from(self.numer);
        if scaled <= numer {
            return 0;
        }
        usize::try_from((scaled - numer) / denom).unwrap_or(usize::MAX)
    }
}

impl Default for ItemsPerView {
    fn default() -> Self {
        Self::ONE
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
