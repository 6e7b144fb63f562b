// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Banding decision table: where on a hovered item the pointer sits, and
//! what that means for the insertion point.
//!
//! The decision is a pure function of `(orientation, flow, row kind, offset,
//! extent)` so each band combination can be pinned by a test without a host.
//!
//! | orientation | flow | half   | row kind      | outside center        | in center               |
//! |-------------|------|--------|---------------|-----------------------|-------------------------|
//! | vertical    | any  | first  | any           | Before                | Before + Center         |
//! | vertical    | any  | second | flat/row      | After, +1             | After + Center, +1      |
//! | vertical    | any  | second | expanded row  | Before first child    | After + Center, +1      |
//! | horizontal  | LTR  | first  | any           | Before                | Before + Center         |
//! | horizontal  | LTR  | second | any           | After, +1             | After + Center, +1      |
//! | horizontal  | RTL  | first  | any           | After, +1             | After + Center, +1      |
//! | horizontal  | RTL  | second | any           | Before                | Before + Center         |
//!
//! Halves are taken in reading order: under right-to-left flow the offset is
//! mirrored, so the first half is the item's right half. The second half is
//! `offset > extent / 2` after mirroring, and the center band, inclusive of
//! its thresholds, is also measured on the mirrored offset.
//!
//! Whenever the center band is hit on a hierarchical row (collapsed or
//! expanded), the row's own children become the target and the drop appends
//! after the last child; this overrides the index delta.
//!
//! ```
//! use understory_drop_target::band::{decide, BandInput, Retarget, RowKind};
//! use understory_drop_target::{BandThresholds, FlowDirection, InsertPosition, Orientation};
//!
//! let decision = decide(
//!     &BandInput {
//!         orientation: Orientation::Vertical,
//!         flow: FlowDirection::LeftToRight,
//!         row: RowKind::Flat,
//!         offset: 90.0,
//!         extent: 100.0,
//!     },
//!     &BandThresholds::DEFAULT,
//! );
//! assert_eq!(decision.position, InsertPosition::AFTER_TARGET_ITEM);
//! assert_eq!(decision.index_delta, 1);
//! assert_eq!(decision.retarget, Retarget::None);
//! ```

use crate::config::BandThresholds;
use crate::position::InsertPosition;
use crate::types::{FlowDirection, Orientation};

/// What kind of item the pointer is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A plain item without children.
    Flat,
    /// A hierarchical row that is collapsed, has no children, or has no header.
    Row,
    /// A hierarchical row that is expanded and shows a header over its children.
    ExpandedRow,
}

impl RowKind {
    /// Returns `true` for hierarchical rows of either kind.
    #[must_use]
    pub const fn is_hierarchical(self) -> bool {
        matches!(self, Self::Row | Self::ExpandedRow)
    }
}

/// Where the resolver should point the target collection after banding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Retarget {
    /// Keep the hovered item's own collection.
    None,
    /// Insert at index 0 of the row's children, before its first child.
    FirstChild,
    /// Append after the last of the row's children.
    AppendToChildren,
}

/// Inputs to [`decide`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandInput {
    /// Orientation of the host owning the item.
    pub orientation: Orientation,
    /// Flow direction of the host owning the item.
    pub flow: FlowDirection,
    /// Kind of the hovered item.
    pub row: RowKind,
    /// Pointer offset into the item along the decision axis, measured from
    /// the item's top or left edge.
    pub offset: f64,
    /// Item extent along the decision axis.
    pub extent: f64,
}

/// Output of [`decide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BandDecision {
    /// Relative position bits.
    pub position: InsertPosition,
    /// Added to the hovered item's index (`0` or `1`); ignored when retargeting.
    pub index_delta: usize,
    /// Collection retargeting rule.
    pub retarget: Retarget,
}

impl BandDecision {
    const BEFORE: Self = Self {
        position: InsertPosition::BEFORE_TARGET_ITEM,
        index_delta: 0,
        retarget: Retarget::None,
    };

    const AFTER: Self = Self {
        position: InsertPosition::AFTER_TARGET_ITEM,
        index_delta: 1,
        retarget: Retarget::None,
    };

    const FIRST_CHILD: Self = Self {
        position: InsertPosition::BEFORE_TARGET_ITEM,
        index_delta: 0,
        retarget: Retarget::FirstChild,
    };
}

/// Applies the banding decision table to one hovered item.
///
/// A non-positive or non-finite extent cannot be banded and yields a plain
/// "before" decision.
#[must_use]
pub fn decide(input: &BandInput, bands: &BandThresholds) -> BandDecision {
    let BandInput {
        orientation,
        flow,
        row,
        offset,
        extent,
    } = *input;

    if !(extent.is_finite() && extent > 0.0) {
        return BandDecision::BEFORE;
    }

    let offset = match (orientation, flow) {
        (Orientation::Horizontal, FlowDirection::RightToLeft) => extent - offset,
        _ => offset,
    };
    let second_half = offset > extent / 2.0;
    let in_center = extent * bands.leading() <= offset && offset <= extent * bands.trailing();

    let mut decision = match (orientation, flow, second_half) {
        (Orientation::Vertical, _, true) if row == RowKind::ExpandedRow && !in_center => {
            BandDecision::FIRST_CHILD
        }
        (Orientation::Vertical, _, true)
        | (Orientation::Horizontal, FlowDirection::LeftToRight, true)
        | (Orientation::Horizontal, FlowDirection::RightToLeft, false) => BandDecision::AFTER,
        (Orientation::Vertical, _, false)
        | (Orientation::Horizontal, FlowDirection::LeftToRight, false)
        | (Orientation::Horizontal, FlowDirection::RightToLeft, true) => BandDecision::BEFORE,
    };

    if in_center {
        decision.position |= InsertPosition::TARGET_ITEM_CENTER;
        if row.is_hierarchical() {
            decision.retarget = Retarget::AppendToChildren;
        }
    }
    decision
}
