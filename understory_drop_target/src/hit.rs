// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometric item searches inside an items host.
//!
//! All points are in the host's coordinate space.
//!
//! - [`item_container_at`]: the container under the point, via the host's hit test.
//! - [`item_container_along`]: the closest container on a probe line through the
//!   point, for pointers resting in the gap between items.
//! - [`directly_over`]: whether a point lies inside a container's bounds.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};

use crate::host::DropHost;
use crate::types::{ElementRoles, Orientation};
use crate::walk;

/// The item container of `host` under `point`.
///
/// Hit tests the host and walks up from the deepest hit element to the first
/// [`ITEM_CONTAINER`](ElementRoles::ITEM_CONTAINER), never past `host`. In a
/// hierarchical host this is the innermost row under the point.
pub fn item_container_at<H: DropHost + ?Sized>(
    host: &H,
    items_host: H::Element,
    point: Point,
) -> Option<H::Element> {
    let hit = host.hit_test(items_host, point)?;
    let container = walk::nearest_below(host, hit, items_host, ElementRoles::ITEM_CONTAINER)?;
    host.is_visible(container).then_some(container)
}

/// The item container of `host` closest to `point` along `orientation`.
///
/// Probes with a horizontal line through `point` spanning the host's width
/// and, for flat hosts, a vertical line spanning its height. Among visible
/// containers crossed by a probe, the one whose origin is nearest to `point`
/// wins: nearest on the `orientation` axis for flat hosts, nearest in the
/// plane for hierarchical ones. Ties keep the first container in tree order.
pub fn item_container_along<H: DropHost + ?Sized>(
    host: &H,
    items_host: H::Element,
    point: Point,
    orientation: Orientation,
) -> Option<H::Element> {
    let size = host.render_size(items_host);
    let hierarchical = host.roles(items_host).contains(ElementRoles::HIERARCHICAL);
    let across = Line::new((0.0, point.y), (size.width, point.y));
    let down = Line::new((point.x, 0.0), (point.x, size.height));

    let mut closest = None;
    let mut closest_distance = f64::INFINITY;
    for container in containers_of(host, items_host) {
        if !host.is_visible(container) {
            continue;
        }
        let Some(bounds) = host.bounds_in(container, items_host) else {
            continue;
        };
        let crossed = crosses(bounds, across) || (!hierarchical && crosses(bounds, down));
        if !crossed {
            continue;
        }
        let origin = bounds.origin();
        // Squared distances keep the comparison free of `sqrt`/`abs`.
        let distance = if hierarchical {
            point.distance_squared(origin)
        } else {
            let delta = match orientation {
                Orientation::Horizontal => point.x - origin.x,
                Orientation::Vertical => point.y - origin.y,
            };
            delta * delta
        };
        if distance < closest_distance {
            closest = Some(container);
            closest_distance = distance;
        }
    }
    tracing::trace!(?closest, ?orientation, "axis probe");
    closest
}

/// Whether `point` lies within `container`'s bounds in `items_host`'s space.
pub fn directly_over<H: DropHost + ?Sized>(
    host: &H,
    container: H::Element,
    items_host: H::Element,
    point: Point,
) -> bool {
    host.bounds_in(container, items_host).is_some_and(|bounds| bounds.contains(point))
}

/// All item containers below `items_host`, in depth-first pre-order.
///
/// Descends into hierarchical rows so nested rows are candidates too; flat
/// containers are leaves of the search.
fn containers_of<H: DropHost + ?Sized>(host: &H, items_host: H::Element) -> Vec<H::Element> {
    let mut found = Vec::new();
    let mut stack = Vec::new();
    let mut children = Vec::new();
    host.children(items_host, &mut children);
    stack.extend(children.drain(..).rev());

    while let Some(current) = stack.pop() {
        let roles = host.roles(current);
        if roles.contains(ElementRoles::ITEM_CONTAINER) {
            found.push(current);
            if !roles.contains(ElementRoles::HIERARCHICAL) {
                continue;
            }
        }
        host.children(current, &mut children);
        stack.extend(children.drain(..).rev());
    }
    found
}

/// Whether an axis-aligned probe line touches `bounds`, edges included.
fn crosses(bounds: Rect, line: Line) -> bool {
    let probe = Rect::from_points(line.p0, line.p1);
    probe.x0 <= bounds.x1
        && bounds.x0 <= probe.x1
        && probe.y0 <= bounds.y1
        && bounds.y0 <= probe.y1
}
