// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory visual tree implementing `DropHost` for tests.

#![allow(dead_code, reason = "not every test file uses every helper")]

use kurbo::{Point, Rect, Size};
use understory_drop_target::{
    DropHost, ElementRoles, FlowDirection, ItemGroup, Orientation, ScrollingMode,
};

pub type Item = &'static str;

#[derive(Clone, Debug, PartialEq)]
pub struct TestGroup {
    pub bottom_level: bool,
    pub items: Vec<Item>,
}

impl ItemGroup<Item> for TestGroup {
    fn is_bottom_level(&self) -> bool {
        self.bottom_level
    }

    fn first_item(&self) -> Option<&Item> {
        self.items.first()
    }
}

#[derive(Debug, Default)]
struct Items {
    view: Vec<Item>,
    source: Option<Vec<Item>>,
    containers: Vec<usize>,
    orientation: Orientation,
    flow: FlowDirection,
    groups: Vec<(Rect, TestGroup)>,
}

#[derive(Debug)]
struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    /// Bounds in the parent's space.
    local: Rect,
    roles: ElementRoles,
    visible: bool,
    context: Option<&'static str>,
    expanded: bool,
    header: Option<Size>,
    scroll_region: Option<usize>,
    scrolling_mode: Option<ScrollingMode>,
    items: Option<Items>,
}

#[derive(Debug, Default)]
pub struct MockHost {
    nodes: Vec<Node>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with bounds in its parent's space.
    pub fn add(&mut self, parent: Option<usize>, local: Rect, roles: ElementRoles) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            local,
            roles,
            visible: true,
            context: None,
            expanded: false,
            header: None,
            scroll_region: None,
            scrolling_mode: None,
            items: None,
        });
        if let Some(parent) = parent {
            self.nodes[parent].children.push(id);
        }
        id
    }

    /// Makes `host` present `view`, optionally backed by an unfiltered `source`.
    pub fn set_items(&mut self, host: usize, view: Vec<Item>, source: Option<Vec<Item>>) {
        let items = self.nodes[host].items.get_or_insert_with(Items::default);
        items.view = view;
        items.source = source;
    }

    /// Registers `container` as the realized container for the next item of `host`.
    pub fn bind(&mut self, host: usize, container: usize) {
        self.nodes[host]
            .items
            .get_or_insert_with(Items::default)
            .containers
            .push(container);
    }

    pub fn set_layout(&mut self, host: usize, orientation: Orientation, flow: FlowDirection) {
        let items = self.nodes[host].items.get_or_insert_with(Items::default);
        items.orientation = orientation;
        items.flow = flow;
    }

    pub fn add_group(&mut self, host: usize, bounds: Rect, group: TestGroup) {
        self.nodes[host]
            .items
            .get_or_insert_with(Items::default)
            .groups
            .push((bounds, group));
    }

    pub fn set_context(&mut self, element: usize, context: &'static str) {
        self.nodes[element].context = Some(context);
    }

    pub fn set_visible(&mut self, element: usize, visible: bool) {
        self.nodes[element].visible = visible;
    }

    pub fn set_expanded(&mut self, row: usize, expanded: bool, header: Option<Size>) {
        self.nodes[row].expanded = expanded;
        self.nodes[row].header = header;
    }

    pub fn set_scroll_region(&mut self, surface: usize, region: usize) {
        self.nodes[surface].scroll_region = Some(region);
    }

    pub fn set_scrolling_mode(&mut self, surface: usize, mode: ScrollingMode) {
        self.nodes[surface].scrolling_mode = Some(mode);
    }

    fn items(&self, host: usize) -> Option<&Items> {
        self.nodes.get(host)?.items.as_ref()
    }

    fn hit(&self, element: usize, point: Point) -> Option<usize> {
        let node = &self.nodes[element];
        for &child in node.children.iter().rev() {
            let child_node = &self.nodes[child];
            if child_node.visible && child_node.local.contains(point) {
                let inner = point - child_node.local.origin().to_vec2();
                if let Some(hit) = self.hit(child, inner) {
                    return Some(hit);
                }
            }
        }
        Rect::from_origin_size(Point::ZERO, node.local.size())
            .contains(point)
            .then_some(element)
    }
}

impl DropHost for MockHost {
    type Element = usize;
    type Item = Item;
    type Group = TestGroup;

    fn parent(&self, element: usize) -> Option<usize> {
        self.nodes.get(element)?.parent
    }

    fn children(&self, element: usize, out: &mut Vec<usize>) {
        if let Some(node) = self.nodes.get(element) {
            out.extend_from_slice(&node.children);
        }
    }

    fn hit_test(&self, root: usize, point: Point) -> Option<usize> {
        if root >= self.nodes.len() {
            return None;
        }
        self.hit(root, point)
    }

    fn bounds_in(&self, element: usize, ancestor: usize) -> Option<Rect> {
        let size = self.nodes.get(element)?.local.size();
        let mut origin = Point::ZERO;
        let mut current = element;
        while current != ancestor {
            let node = self.nodes.get(current)?;
            origin += node.local.origin().to_vec2();
            current = node.parent?;
        }
        Some(Rect::from_origin_size(origin, size))
    }

    fn render_size(&self, element: usize) -> Size {
        self.nodes
            .get(element)
            .map_or(Size::ZERO, |node| node.local.size())
    }

    fn roles(&self, element: usize) -> ElementRoles {
        self.nodes
            .get(element)
            .map_or(ElementRoles::empty(), |node| node.roles)
    }

    fn is_visible(&self, element: usize) -> bool {
        self.nodes.get(element).is_some_and(|node| node.visible)
    }

    fn drag_drop_context(&self, element: usize) -> Option<&str> {
        self.nodes.get(element)?.context
    }

    fn scroll_region_for(&self, surface: usize) -> Option<usize> {
        self.nodes.get(surface)?.scroll_region
    }

    fn scrolling_mode(&self, surface: usize) -> Option<ScrollingMode> {
        self.nodes.get(surface)?.scrolling_mode
    }

    fn view_items(&self, host: usize) -> &[Item] {
        self.items(host).map_or(&[][..], |items| items.view.as_slice())
    }

    fn items_source(&self, host: usize) -> Option<&[Item]> {
        self.items(host)?.source.as_deref()
    }

    fn index_of_container(&self, host: usize, container: usize) -> Option<usize> {
        self.items(host)?
            .containers
            .iter()
            .position(|&c| c == container)
    }

    fn container_from_item(&self, host: usize, item: &Item) -> Option<usize> {
        let items = self.items(host)?;
        let index = items.view.iter().position(|i| i == item)?;
        items.containers.get(index).copied()
    }

    fn container_from_index(&self, host: usize, index: usize) -> Option<usize> {
        self.items(host)?.containers.get(index).copied()
    }

    fn orientation(&self, host: usize) -> Orientation {
        self.items(host).map_or_else(Orientation::default, |i| i.orientation)
    }

    fn flow_direction(&self, host: usize) -> FlowDirection {
        self.items(host).map_or_else(FlowDirection::default, |i| i.flow)
    }

    fn group_at(&self, host: usize, point: Point) -> Option<TestGroup> {
        self.items(host)?
            .groups
            .iter()
            .find(|(bounds, _)| bounds.contains(point))
            .map(|(_, group)| group.clone())
    }

    fn is_expanded(&self, row: usize) -> bool {
        self.nodes.get(row).is_some_and(|node| node.expanded)
    }

    fn header_size(&self, row: usize) -> Option<Size> {
        self.nodes.get(row)?.header
    }
}

pub const SURFACE: ElementRoles = ElementRoles::DROP_SURFACE.union(ElementRoles::ITEMS_HOST);

/// A list laid out along `orientation` with `items.len()` cells of 100×100
/// (plus a content child in each cell), and 100px of empty space after the
/// last cell. Returns the host, the surface, and the cell containers.
pub fn list(
    orientation: Orientation,
    flow: FlowDirection,
    items: &[Item],
) -> (MockHost, usize, Vec<usize>) {
    let mut host = MockHost::new();
    let n = items.len() as f64;
    let surface_bounds = match orientation {
        Orientation::Vertical => Rect::new(0.0, 0.0, 100.0, 100.0 * (n + 1.0)),
        Orientation::Horizontal => Rect::new(0.0, 0.0, 100.0 * (n + 1.0), 100.0),
    };
    let surface = host.add(None, surface_bounds, SURFACE);
    host.set_items(surface, items.to_vec(), Some(items.to_vec()));
    host.set_layout(surface, orientation, flow);

    let mut cells = Vec::new();
    for i in 0..items.len() {
        let start = 100.0 * i as f64;
        // Right-to-left: the first cell is rightmost and the free space is on the left.
        let start = match (orientation, flow) {
            (Orientation::Horizontal, FlowDirection::RightToLeft) => 100.0 * n - start,
            _ => start,
        };
        let bounds = match orientation {
            Orientation::Vertical => Rect::new(0.0, start, 100.0, start + 100.0),
            Orientation::Horizontal => Rect::new(start, 0.0, start + 100.0, 100.0),
        };
        let cell = host.add(Some(surface), bounds, ElementRoles::ITEM_CONTAINER);
        host.add(Some(cell), Rect::new(10.0, 10.0, 90.0, 90.0), ElementRoles::empty());
        host.bind(surface, cell);
        cells.push(cell);
    }
    (host, surface, cells)
}

/// A vertical list of `items` where each cell is 100px tall.
pub fn vertical(items: &[Item]) -> (MockHost, usize, Vec<usize>) {
    list(Orientation::Vertical, FlowDirection::LeftToRight, items)
}
