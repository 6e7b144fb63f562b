// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Remap a visual insert index into the unfiltered source sequence.

/// Maps `index`, a position in `view`, to the matching position in `source`.
///
/// `view` is the presented (filtered, sorted, or grouped) sequence and
/// `source` the unfiltered sequence behind it. When their lengths match the
/// index is returned unchanged. Otherwise the item occupying slot `index` is
/// looked up in `source`; when inserting past the last visual item, the last
/// item is looked up instead and the result placed right after it. If no
/// mapping is found the index falls back to itself.
///
/// The result never exceeds `source.len()`.
///
/// ```
/// use understory_drop_target::remap::unfiltered_index;
///
/// let source = ["a", "b", "c", "d", "e"];
/// // A view that filters out "b" and "d".
/// let view = ["a", "c", "e"];
/// assert_eq!(unfiltered_index(&view, &source, 1), 2);
/// assert_eq!(unfiltered_index(&view, &source, 3), 5);
/// ```
#[must_use]
pub fn unfiltered_index<T: PartialEq>(view: &[T], source: &[T], index: usize) -> usize {
    let mapped = if view.len() == source.len() {
        index
    } else if let Some(item) = view.get(index) {
        position(source, item).unwrap_or(index)
    } else if index == view.len() && !view.is_empty() {
        position(source, &view[index - 1]).map_or(index, |i| i + 1)
    } else {
        index
    };
    mapped.min(source.len())
}

fn position<T: PartialEq>(source: &[T], item: &T) -> Option<usize> {
    source.iter().position(|candidate| candidate == item)
}
