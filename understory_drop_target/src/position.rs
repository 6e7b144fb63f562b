// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Relative insert position flags.

bitflags::bitflags! {
    /// Where a drop lands relative to the hovered item.
    ///
    /// The bits are not mutually exclusive. [`TARGET_ITEM_CENTER`] combines
    /// with a directional bit to say "drop *into* this item" while still
    /// recording which half of the item the pointer is in.
    ///
    /// An empty set means no item was hovered (append at the end).
    ///
    /// [`TARGET_ITEM_CENTER`]: InsertPosition::TARGET_ITEM_CENTER
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct InsertPosition: u8 {
        /// Insert before the target item.
        const BEFORE_TARGET_ITEM = 0b001;
        /// Insert after the target item.
        const AFTER_TARGET_ITEM  = 0b010;
        /// Pointer is in the item's center band.
        const TARGET_ITEM_CENTER = 0b100;
    }
}

impl InsertPosition {
    /// The directional bits only.
    pub const DIRECTIONAL: Self = Self::BEFORE_TARGET_ITEM.union(Self::AFTER_TARGET_ITEM);

    /// Returns `true` if either directional bit is set.
    #[must_use]
    pub const fn is_directional(self) -> bool {
        self.intersects(Self::DIRECTIONAL)
    }

    /// Returns `true` if the pointer is in the item's center band.
    #[must_use]
    pub const fn is_center(self) -> bool {
        self.contains(Self::TARGET_ITEM_CENTER)
    }
}
