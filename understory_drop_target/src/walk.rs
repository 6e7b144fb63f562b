// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree walks over a [`DropHost`]: ancestor chains, descendant search, and
//! the drop-surface locator.
//!
//! ## Minimal example
//!
//! ```
//! use understory_drop_target::ElementRoles;
//! use understory_drop_target::walk::find_drop_surface;
//! # use understory_drop_target::{DropHost, FlowDirection, Orientation};
//! # use kurbo::{Point, Rect, Size};
//! # struct Chain;
//! # impl DropHost for Chain {
//! #     type Element = u32;
//! #     type Item = ();
//! #     type Group = ();
//! #     fn parent(&self, e: u32) -> Option<u32> { e.checked_sub(1) }
//! #     fn children(&self, _: u32, _: &mut Vec<u32>) {}
//! #     fn hit_test(&self, _: u32, _: Point) -> Option<u32> { None }
//! #     fn bounds_in(&self, _: u32, _: u32) -> Option<Rect> { None }
//! #     fn render_size(&self, _: u32) -> Size { Size::ZERO }
//! #     fn roles(&self, e: u32) -> ElementRoles {
//! #         if e == 1 { ElementRoles::DROP_SURFACE } else { ElementRoles::empty() }
//! #     }
//! #     fn view_items(&self, _: u32) -> &[()] { &[] }
//! #     fn items_source(&self, _: u32) -> Option<&[()]> { None }
//! #     fn index_of_container(&self, _: u32, _: u32) -> Option<usize> { None }
//! #     fn container_from_item(&self, _: u32, _: &()) -> Option<u32> { None }
//! #     fn container_from_index(&self, _: u32, _: usize) -> Option<u32> { None }
//! #     fn orientation(&self, _: u32) -> Orientation { Orientation::Vertical }
//! #     fn flow_direction(&self, _: u32) -> FlowDirection { FlowDirection::LeftToRight }
//! # }
//! // Element 3's parent is 2, whose parent is 1 (a drop surface), whose parent is 0.
//! assert_eq!(find_drop_surface(&Chain, 3), Some(1));
//! assert_eq!(find_drop_surface(&Chain, 0), None);
//! ```

use alloc::vec::Vec;

use crate::host::DropHost;
use crate::types::ElementRoles;

/// Iterator over the strict ancestors of an element, nearest first.
#[derive(Debug)]
pub struct Ancestors<'h, H: DropHost + ?Sized> {
    host: &'h H,
    next: Option<H::Element>,
}

impl<H: DropHost + ?Sized> Iterator for Ancestors<'_, H> {
    type Item = H::Element;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.host.parent(current);
        Some(current)
    }
}

/// Strict ancestors of `element`, nearest first.
pub fn ancestors<H: DropHost + ?Sized>(host: &H, element: H::Element) -> Ancestors<'_, H> {
    Ancestors {
        host,
        next: host.parent(element),
    }
}

/// Nearest strict ancestor of `element` having all of `roles`.
pub fn ancestor_with<H: DropHost + ?Sized>(
    host: &H,
    element: H::Element,
    roles: ElementRoles,
) -> Option<H::Element> {
    ancestors(host, element).find(|&e| host.roles(e).contains(roles))
}

/// Nearest element having all of `roles`, starting at `element` itself and
/// walking up to, but not past, `stop`.
///
/// Returns `None` if the walk reaches `stop` or the root first.
pub fn nearest_below<H: DropHost + ?Sized>(
    host: &H,
    element: H::Element,
    stop: H::Element,
    roles: ElementRoles,
) -> Option<H::Element> {
    let mut current = element;
    loop {
        if current == stop {
            return None;
        }
        if host.roles(current).contains(roles) {
            return Some(current);
        }
        current = host.parent(current)?;
    }
}

/// First strict descendant of `element` having all of `roles`, in depth-first
/// pre-order.
pub fn descendant_with<H: DropHost + ?Sized>(
    host: &H,
    element: H::Element,
    roles: ElementRoles,
) -> Option<H::Element> {
    let mut stack = Vec::new();
    let mut children = Vec::new();
    host.children(element, &mut children);
    // Push in reverse so popping visits children in their natural order.
    stack.extend(children.drain(..).rev());

    while let Some(current) = stack.pop() {
        if host.roles(current).contains(roles) {
            return Some(current);
        }
        host.children(current, &mut children);
        stack.extend(children.drain(..).rev());
    }
    None
}

/// Nearest element, inclusive of `origin`, that is a drop surface.
///
/// This is the drop-target locator: pointer notifications are raised by the
/// deepest element under the pointer, which is usually a piece of an item's
/// template rather than the surface that opted into drops.
pub fn find_drop_surface<H: DropHost + ?Sized>(host: &H, origin: H::Element) -> Option<H::Element> {
    if host.roles(origin).contains(ElementRoles::DROP_SURFACE) {
        return Some(origin);
    }
    ancestor_with(host, origin, ElementRoles::DROP_SURFACE)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size};

    use super::*;
    use crate::types::{FlowDirection, Orientation};

    /// Parent table: `parents[i]` is the parent of element `i`.
    struct Table {
        parents: Vec<Option<usize>>,
        roles: Vec<ElementRoles>,
    }

    impl DropHost for Table {
        type Element = usize;
        type Item = ();
        type Group = ();

        fn parent(&self, element: usize) -> Option<usize> {
            self.parents.get(element).copied().flatten()
        }

        fn children(&self, element: usize, out: &mut Vec<usize>) {
            out.extend(
                self.parents
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| **p == Some(element))
                    .map(|(i, _)| i),
            );
        }

        fn hit_test(&self, _root: usize, _point: Point) -> Option<usize> {
            None
        }

        fn bounds_in(&self, _element: usize, _ancestor: usize) -> Option<Rect> {
            None
        }

        fn render_size(&self, _element: usize) -> Size {
            Size::ZERO
        }

        fn roles(&self, element: usize) -> ElementRoles {
            self.roles.get(element).copied().unwrap_or_default()
        }

        fn view_items(&self, _host: usize) -> &[()] {
            &[]
        }

        fn items_source(&self, _host: usize) -> Option<&[()]> {
            None
        }

        fn index_of_container(&self, _host: usize, _container: usize) -> Option<usize> {
            None
        }

        fn container_from_item(&self, _host: usize, _item: &()) -> Option<usize> {
            None
        }

        fn container_from_index(&self, _host: usize, _index: usize) -> Option<usize> {
            None
        }

        fn orientation(&self, _host: usize) -> Orientation {
            Orientation::Vertical
        }

        fn flow_direction(&self, _host: usize) -> FlowDirection {
            FlowDirection::LeftToRight
        }
    }

    //      0
    //     / \
    //    1   2
    //   / \
    //  3   4
    fn table(roles: Vec<ElementRoles>) -> Table {
        Table {
            parents: vec![None, Some(0), Some(0), Some(1), Some(1)],
            roles,
        }
    }

    #[test]
    fn ancestors_are_nearest_first() {
        let t = table(vec![ElementRoles::empty(); 5]);
        let chain: Vec<_> = ancestors(&t, 4).collect();
        assert_eq!(chain, vec![1, 0]);
        assert_eq!(ancestors(&t, 0).next(), None);
    }

    #[test]
    fn locator_is_inclusive_of_origin() {
        let mut roles = vec![ElementRoles::empty(); 5];
        roles[3] = ElementRoles::DROP_SURFACE;
        roles[0] = ElementRoles::DROP_SURFACE;
        let t = table(roles);
        assert_eq!(find_drop_surface(&t, 3), Some(3));
        assert_eq!(find_drop_surface(&t, 4), Some(0));
    }

    #[test]
    fn locator_returns_none_without_surface() {
        let t = table(vec![ElementRoles::empty(); 5]);
        assert_eq!(find_drop_surface(&t, 4), None);
    }

    #[test]
    fn ancestor_with_is_strict() {
        let t = table(vec![ElementRoles::ITEMS_HOST; 5]);
        assert_eq!(ancestor_with(&t, 3, ElementRoles::ITEMS_HOST), Some(1));
    }

    #[test]
    fn nearest_below_stops_at_boundary() {
        let mut roles = vec![ElementRoles::empty(); 5];
        roles[0] = ElementRoles::ITEM_CONTAINER;
        roles[1] = ElementRoles::ITEM_CONTAINER;
        let t = table(roles);
        assert_eq!(nearest_below(&t, 3, 0, ElementRoles::ITEM_CONTAINER), Some(1));
        assert_eq!(nearest_below(&t, 3, 1, ElementRoles::ITEM_CONTAINER), None);
        assert_eq!(nearest_below(&t, 2, 0, ElementRoles::ITEM_CONTAINER), None);
    }

    #[test]
    fn descendant_search_is_preorder() {
        let mut roles = vec![ElementRoles::empty(); 5];
        roles[2] = ElementRoles::SCROLL_REGION;
        roles[3] = ElementRoles::SCROLL_REGION;
        let t = table(roles);
        // 1's subtree (containing 3) is visited before 2.
        assert_eq!(descendant_with(&t, 0, ElementRoles::SCROLL_REGION), Some(3));
        assert_eq!(descendant_with(&t, 3, ElementRoles::SCROLL_REGION), None);
    }
}
