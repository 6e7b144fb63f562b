// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The insertion-point resolver.
//!
//! ## Pipeline
//!
//! For each pointer notification, from scratch:
//!
//! 1. Locate the drop surface from the event's origin element
//!    ([`find_drop_surface`](crate::walk::find_drop_surface)).
//! 2. Resolve the scroll region and the drag-and-drop context check.
//! 3. Translate the pointer into the surface's space.
//! 4. If the surface is an items host, find the item under the pointer: direct
//!    hit, then a probe along the layout axis, then the first item of the
//!    bottom-level group under the pointer.
//! 5. Band the item along its owner's layout axis ([`band::decide`]) and
//!    apply the resulting index delta or collection retarget.
//! 6. Remap the index into the unfiltered source ([`remap::unfiltered_index`]).
//!
//! Every lookup may come back empty. A missing surface yields an empty
//! record; a missing owner, index, or item bounds degrades to "append at the
//! end of the surface's collection".

use kurbo::{Point, Size};

use crate::band::{self, BandInput, Retarget, RowKind};
use crate::config::ResolverConfig;
use crate::hit;
use crate::host::{DropHost, ItemGroup};
use crate::info::{DragInfo, DropEvent, DropInfo, contexts_compatible};
use crate::position::InsertPosition;
use crate::remap;
use crate::scroll;
use crate::types::{ElementRoles, Orientation};
use crate::walk;

/// Resolves pointer notifications into [`DropInfo`] records.
///
/// A resolver holds only configuration; it keeps no state between events and
/// can be shared freely.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Resolver {
    config: ResolverConfig,
}

/// An item container the pointer resolved to, with its owning host.
#[derive(Clone, Copy, Debug)]
struct Hovered<E> {
    container: E,
    owner: E,
    index: usize,
    /// Pointer in the container's space.
    local: Point,
}

impl Resolver {
    /// Creates a resolver with the given configuration.
    #[must_use]
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// The resolver's configuration.
    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves one pointer notification.
    ///
    /// `drag_info` describes the drag source when the drag started inside the
    /// application; it is only used for the context check and passed through.
    pub fn resolve<'h, H, D>(
        &self,
        host: &'h H,
        event: DropEvent<H::Element, D>,
        drag_info: Option<DragInfo<H::Element>>,
    ) -> DropInfo<'h, H, D>
    where
        H: DropHost + ?Sized,
    {
        let DropEvent {
            origin,
            position,
            key_states,
            data,
            kind,
        } = event;
        let mut info = DropInfo::empty(kind, data, drag_info, key_states);

        let Some(surface) = walk::find_drop_surface(host, origin) else {
            tracing::debug!(?origin, "no drop surface under pointer");
            return info;
        };
        info.visual_target = Some(surface);
        info.scroll = scroll::resolve_scroll_target(host, surface);
        let source_context = drag_info
            .and_then(|drag| drag.visual_source)
            .and_then(|source| host.drag_drop_context(source));
        info.same_context = contexts_compatible(source_context, host.drag_drop_context(surface));

        let drop_position = if origin == surface {
            position
        } else if let Some(bounds) = host.bounds_in(origin, surface) {
            position + bounds.origin().to_vec2()
        } else {
            tracing::debug!(?origin, ?surface, "origin not placeable in drop surface");
            return info;
        };
        info.drop_position = drop_position;

        let roles = host.roles(surface);
        if roles.contains(ElementRoles::TAB_HOST) && !over_tab_panel(host, surface, drop_position) {
            tracing::trace!(?surface, "pointer outside tab panel");
            return info;
        }
        if !roles.contains(ElementRoles::ITEMS_HOST) {
            info.visual_target_item = Some(surface);
            return info;
        }

        self.resolve_items(host, surface, drop_position, &mut info);
        tracing::debug!(
            ?surface,
            item = ?info.visual_target_item,
            index = info.insert_index,
            unfiltered_index = info.unfiltered_insert_index,
            position = ?info.insert_position,
            "resolved drop target"
        );
        info
    }

    fn resolve_items<'h, H, D>(
        &self,
        host: &'h H,
        surface: H::Element,
        point: Point,
        info: &mut DropInfo<'h, H, D>,
    ) where
        H: DropHost + ?Sized,
    {
        info.target_group = host.group_at(surface, point);
        info.orientation = host.orientation(surface);
        info.flow_direction = host.flow_direction(surface);

        let mut container = host.item_container_at(surface, point);
        let mut directly_over = container.is_some();

        if container.is_none() && self.config.axis_probe {
            container = host.item_container_along(surface, point, info.orientation);
            directly_over = container.is_some_and(|c| hit::directly_over(host, c, surface, point));
        }

        if container.is_none() && self.config.group_fallback {
            let first = info
                .target_group
                .as_ref()
                .filter(|group| group.is_bottom_level())
                .and_then(|group| group.first_item());
            if let Some(first) = first {
                tracing::trace!(?first, "falling back to first item of group");
                container = host.container_from_item(surface, first);
                directly_over =
                    container.is_some_and(|c| hit::directly_over(host, c, surface, point));
            }
        }

        match container.and_then(|c| locate(host, surface, c, point)) {
            Some(hovered) => self.apply_banding(host, hovered, directly_over, info),
            None => {
                let collection = host.target_collection(surface);
                info.target_collection = Some(collection);
                info.target_collection_owner = Some(surface);
                info.insert_index = collection.len();
                info.unfiltered_insert_index = collection.len();
            }
        }
    }

    fn apply_banding<'h, H, D>(
        &self,
        host: &'h H,
        hovered: Hovered<H::Element>,
        directly_over: bool,
        info: &mut DropInfo<'h, H, D>,
    ) where
        H: DropHost + ?Sized,
    {
        let Hovered {
            container,
            owner,
            index,
            local,
        } = hovered;

        info.orientation = host.orientation(owner);
        info.flow_direction = host.flow_direction(owner);

        let row = row_kind(host, container);
        // A flat item reached by snapping only contributes an index.
        let addressable = directly_over || row.is_hierarchical();
        if addressable {
            info.visual_target_item = Some(container);
            info.target_item = host.item_from_container(owner, container);
        }

        let extent = match row {
            RowKind::ExpandedRow => host
                .header_size(container)
                .unwrap_or_else(|| host.render_size(container)),
            RowKind::Flat | RowKind::Row => host.render_size(container),
        };
        let (offset, extent) = along(info.orientation, local, extent);
        let decision = band::decide(
            &BandInput {
                orientation: info.orientation,
                flow: info.flow_direction,
                row,
                offset,
                extent,
            },
            &self.config.bands,
        );
        tracing::trace!(?container, offset, extent, ?decision, "banded item");

        let (collection_owner, insert_index) = match decision.retarget {
            Retarget::None => (owner, index.saturating_add(decision.index_delta)),
            Retarget::FirstChild => {
                // An unrealized first child leaves the row itself hovered.
                if let Some(child) = host.container_from_index(container, 0) {
                    info.visual_target_item = Some(child);
                    info.target_item = host.item_from_container(container, child);
                }
                (container, 0)
            }
            Retarget::AppendToChildren => (container, host.target_collection(container).len()),
        };

        let collection = host.target_collection(collection_owner);
        let insert_index = insert_index.min(collection.len());
        info.target_collection = Some(collection);
        info.target_collection_owner = Some(collection_owner);
        info.insert_index = insert_index;
        info.insert_position = if addressable {
            decision.position
        } else {
            InsertPosition::empty()
        };

        let view = host.view_items(collection_owner);
        let source = host.items_source(collection_owner).unwrap_or(view);
        info.unfiltered_insert_index = remap::unfiltered_index(view, source, insert_index);
    }
}

/// Resolves one event with the default configuration.
///
/// Shorthand for `Resolver::default().resolve(host, event, drag_info)`.
pub fn resolve<'h, H, D>(
    host: &'h H,
    event: DropEvent<H::Element, D>,
    drag_info: Option<DragInfo<H::Element>>,
) -> DropInfo<'h, H, D>
where
    H: DropHost + ?Sized,
{
    Resolver::default().resolve(host, event, drag_info)
}

/// Places `container` relative to its owner and the pointer.
fn locate<H: DropHost + ?Sized>(
    host: &H,
    surface: H::Element,
    container: H::Element,
    point: Point,
) -> Option<Hovered<H::Element>> {
    let owner = host.owning_host(container)?;
    let index = host.index_of_container(owner, container)?;
    let bounds = host.bounds_in(container, surface)?;
    Some(Hovered {
        container,
        owner,
        index,
        local: point - bounds.origin().to_vec2(),
    })
}

fn row_kind<H: DropHost + ?Sized>(host: &H, container: H::Element) -> RowKind {
    if !host.roles(container).contains(ElementRoles::HIERARCHICAL) {
        return RowKind::Flat;
    }
    let expanded = host.is_expanded(container)
        && host.header_size(container).is_some()
        && !host.view_items(container).is_empty();
    if expanded {
        RowKind::ExpandedRow
    } else {
        RowKind::Row
    }
}

/// Pointer offset and item extent on the decision axis.
fn along(orientation: Orientation, local: Point, size: Size) -> (f64, f64) {
    match orientation {
        Orientation::Vertical => (local.y, size.height),
        Orientation::Horizontal => (local.x, size.width),
    }
}

fn over_tab_panel<H: DropHost + ?Sized>(host: &H, surface: H::Element, point: Point) -> bool {
    host.hit_test(surface, point)
        .and_then(|hit| walk::nearest_below(host, hit, surface, ElementRoles::TAB_PANEL))
        .is_some()
}
