// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the committed layout offset with decorative offsets.
//!
//! The carousel owns exactly one horizontal offset. Decorative effects (a
//! parallax drift, a hover lift) each own their own additive offset. Neither
//! writes the other's value: a [`TransformStack`] keeps one slot per effect,
//! and [`TransformStack::compose`] rebuilds the final transform from scratch
//! on every call, so repeated updates never compound.
//!
//! ```
//! use kurbo::{Affine, Vec2};
//! use carousel::compose::{TransformStack, parallax_offset};
//!
//! #[derive(Copy, Clone, PartialEq, Eq)]
//! enum Effect {
//!     Parallax,
//! }
//!
//! let mut card = TransformStack::new();
//! card.set(Effect::Parallax, parallax_offset(100.0, 0));
//! card.set(Effect::Parallax, parallax_offset(100.0, 0));
//!
//! // Offsets are replaced, not appended.
//! assert_eq!(card.compose(-380.0), Affine::translate(Vec2::new(-380.0, -50.0)));
//! ```

use kurbo::{Affine, Vec2};
use smallvec::SmallVec;

/// Per-element set of decorative offsets keyed by effect.
#[derive(Clone, Debug)]
pub struct TransformStack<K> {
    layers: SmallVec<[(K, Vec2); 4]>,
}

impl<K> Default for TransformStack<K> {
    fn default() -> Self {
        Self {
            layers: SmallVec::new(),
        }
    }
}

impl<K: Copy + Eq> TransformStack<K> {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the offset owned by `effect`, replacing its previous value.
    pub fn set(&mut self, effect: K, offset: Vec2) {
        if let Some(slot) = self.layers.iter_mut().find(|(k, _)| *k == effect) {
            slot.1 = offset;
        } else {
            self.layers.push((effect, offset));
        }
    }

    /// Removes the offset owned by `effect`.
    pub fn clear(&mut self, effect: K) -> Option<Vec2> {
        let pos = self.layers.iter().position(|(k, _)| *k == effect)?;
        Some(self.layers.remove(pos).1)
    }

    /// Returns the offset owned by `effect`.
    #[must_use]
    pub fn get(&self, effect: K) -> Option<Vec2> {
        self.layers
            .iter()
            .find(|(k, _)| *k == effect)
            .map(|(_, v)| *v)
    }

    /// Sum of all decorative offsets.
    #[must_use]
    pub fn decorative_offset(&self) -> Vec2 {
        self.layers
            .iter()
            .fold(Vec2::ZERO, |acc, (_, offset)| acc + *offset)
    }

    /// Final transform: the committed horizontal offset plus every decorative offset.
    #[must_use]
    pub fn compose(&self, committed_x: f64) -> Affine {
        Affine::translate(Vec2::new(committed_x, 0.0) + self.decorative_offset())
    }
}

/// Vertical parallax drift for the item at `item_index` after scrolling `scroll_y`.
///
/// Later items drift faster: the speed is `0.5 + 0.1 * item_index`.
#[must_use]
pub fn parallax_offset(scroll_y: f64, item_index: usize) -> Vec2 {
    let speed = 0.5 + 0.1 * item_index as f64;
    Vec2::new(0.0, -(scroll_y * speed))
}
