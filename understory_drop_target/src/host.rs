// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host capability: read-only queries over an externally owned visual tree.
//!
//! The resolver never owns or walks a concrete UI toolkit's tree. Instead the
//! host implements [`DropHost`] over whatever it has (a widget tree, a box
//! tree, an ECS) and the resolver asks it questions. Every query may answer
//! "not found"; the resolver treats that as a valid outcome.
//!
//! Coordinates are `kurbo` values in logical pixels. [`DropHost::bounds_in`]
//! is the single coordinate-space primitive: it places an element inside an
//! ancestor's space, and everything else (pointer-to-surface translation,
//! item-local offsets, "directly over" checks) is derived from it.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect, Size};

use crate::types::{ElementRoles, FlowDirection, Orientation, ScrollingMode};
use crate::{hit, walk};

/// A semantic group of items, as produced by a grouped collection view.
pub trait ItemGroup<T> {
    /// Returns `true` if the group holds items rather than nested groups.
    fn is_bottom_level(&self) -> bool;

    /// The first item of the group, if any.
    fn first_item(&self) -> Option<&T>;
}

/// Groups are optional; hosts without grouping can use `()`.
impl<T> ItemGroup<T> for () {
    fn is_bottom_level(&self) -> bool {
        false
    }

    fn first_item(&self) -> Option<&T> {
        None
    }
}

/// Queries the resolver needs from the host's visual tree and item hosts.
///
/// Required methods are plain lookups. Provided methods implement the
/// geometric searches on top of them; hosts with an acceleration structure
/// (for example a spatial index) can override them.
pub trait DropHost {
    /// Handle of a visual element.
    type Element: Copy + Eq + Debug;
    /// Data item presented by an items host.
    type Item: PartialEq + Debug;
    /// Group descriptor for grouped collections.
    type Group: ItemGroup<Self::Item> + Clone + Debug;

    // --- Visual tree ---

    /// Visual parent of `element`.
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// Appends the visual children of `element` to `out`, in z-order.
    fn children(&self, element: Self::Element, out: &mut Vec<Self::Element>);

    /// Deepest visible element under `point`, which is in `root`'s space.
    fn hit_test(&self, root: Self::Element, point: Point) -> Option<Self::Element>;

    /// Bounds of `element` in the coordinate space of `ancestor`.
    ///
    /// Returns `None` if `element` is not a descendant of (or equal to)
    /// `ancestor` or if its layout is unknown.
    fn bounds_in(&self, element: Self::Element, ancestor: Self::Element) -> Option<Rect>;

    /// Rendered size of `element`.
    fn render_size(&self, element: Self::Element) -> Size;

    /// Roles of `element`.
    fn roles(&self, element: Self::Element) -> ElementRoles;

    /// Whether `element` is currently visible.
    fn is_visible(&self, element: Self::Element) -> bool {
        let _ = element;
        true
    }

    // --- Drop-surface markers ---

    /// Context tag restricting which drag sources may drop onto `element`.
    fn drag_drop_context(&self, element: Self::Element) -> Option<&str> {
        let _ = element;
        None
    }

    /// Scroll region explicitly configured for the drop surface `surface`.
    fn scroll_region_for(&self, surface: Self::Element) -> Option<Self::Element> {
        let _ = surface;
        None
    }

    /// Auto-scroll axes configured for `surface`.
    fn scrolling_mode(&self, surface: Self::Element) -> Option<ScrollingMode> {
        let _ = surface;
        None
    }

    // --- Items hosts ---

    /// Items as presented by `host`, after any filtering, sorting, or grouping.
    ///
    /// The index of an item container is an index into this slice.
    fn view_items(&self, host: Self::Element) -> &[Self::Item];

    /// The unfiltered source sequence backing `host`, if one is bound.
    fn items_source(&self, host: Self::Element) -> Option<&[Self::Item]>;

    /// Position of `container` within `host`'s realized items.
    fn index_of_container(&self, host: Self::Element, container: Self::Element) -> Option<usize>;

    /// Container realized for `item` in `host`.
    fn container_from_item(&self, host: Self::Element, item: &Self::Item) -> Option<Self::Element>;

    /// Container realized for the item at `index` in `host`.
    fn container_from_index(&self, host: Self::Element, index: usize) -> Option<Self::Element>;

    /// Orientation of `host`'s items panel.
    fn orientation(&self, host: Self::Element) -> Orientation;

    /// Flow direction of `host`'s items panel.
    fn flow_direction(&self, host: Self::Element) -> FlowDirection;

    /// Group of `host` containing `point` (in `host`'s space).
    fn group_at(&self, host: Self::Element, point: Point) -> Option<Self::Group> {
        let _ = (host, point);
        None
    }

    /// Whether the hierarchical row `row` is expanded.
    fn is_expanded(&self, row: Self::Element) -> bool {
        let _ = row;
        false
    }

    /// Rendered size of the header of the hierarchical row `row`.
    fn header_size(&self, row: Self::Element) -> Option<Size> {
        let _ = row;
        None
    }

    // --- Provided searches ---

    /// The item container of `host` under `point` (in `host`'s space).
    ///
    /// See [`hit::item_container_at`].
    fn item_container_at(&self, host: Self::Element, point: Point) -> Option<Self::Element> {
        hit::item_container_at(self, host, point)
    }

    /// The item container of `host` closest to `point` along `orientation`.
    ///
    /// See [`hit::item_container_along`].
    fn item_container_along(
        &self,
        host: Self::Element,
        point: Point,
        orientation: Orientation,
    ) -> Option<Self::Element> {
        hit::item_container_along(self, host, point, orientation)
    }

    /// The items host that generated `container`.
    fn owning_host(&self, container: Self::Element) -> Option<Self::Element> {
        walk::ancestor_with(self, container, ElementRoles::ITEMS_HOST)
    }

    /// Data item `host` realized `container` for.
    fn item_from_container(
        &self,
        host: Self::Element,
        container: Self::Element,
    ) -> Option<&Self::Item> {
        let index = self.index_of_container(host, container)?;
        self.view_items(host).get(index)
    }

    /// The sequence drops into `host` are expressed against: the source if
    /// bound, else the presented items.
    fn target_collection(&self, host: Self::Element) -> &[Self::Item] {
        self.items_source(host).unwrap_or_else(|| self.view_items(host))
    }
}
