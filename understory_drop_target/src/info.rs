// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolver inputs ([`DropEvent`], [`DragInfo`]) and the result record ([`DropInfo`]).

use alloc::string::String;
use core::fmt;

use kurbo::Point;

use crate::host::DropHost;
use crate::position::InsertPosition;
use crate::scroll::ScrollTarget;
use crate::types::{
    DragDropEffects, DropEventKind, DropTargetAdorner, FlowDirection, KeyStates, Orientation,
    ScrollingMode,
};

/// A pointer notification to resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct DropEvent<E, D> {
    /// Element that raised the notification (the deepest element under the pointer).
    pub origin: E,
    /// Pointer position in `origin`'s coordinate space.
    pub position: Point,
    /// Button and modifier state, passed through.
    pub key_states: KeyStates,
    /// Raw payload, passed through.
    pub data: D,
    /// Which notification this is.
    pub kind: DropEventKind,
}

impl<E, D> DropEvent<E, D> {
    /// Creates a [`DropEventKind::DragOver`] event with no keys pressed.
    pub fn new(origin: E, position: Point, data: D) -> Self {
        Self {
            origin,
            position,
            key_states: KeyStates::empty(),
            data,
            kind: DropEventKind::DragOver,
        }
    }

    /// Sets the key states.
    #[must_use]
    pub fn with_key_states(mut self, key_states: KeyStates) -> Self {
        self.key_states = key_states;
        self
    }

    /// Sets the notification kind.
    #[must_use]
    pub fn with_kind(mut self, kind: DropEventKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Context about the drag source, produced by the drag-initiation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragInfo<E> {
    /// Element the drag started from.
    pub visual_source: Option<E>,
    /// Index of the dragged item in its source collection, if known.
    pub source_index: Option<usize>,
    /// Effects the source allows.
    pub effects: DragDropEffects,
}

impl<E> DragInfo<E> {
    /// A drag started from `visual_source` allowing move and copy.
    pub fn new(visual_source: E) -> Self {
        Self {
            visual_source: Some(visual_source),
            source_index: None,
            effects: DragDropEffects::MOVE | DragDropEffects::COPY,
        }
    }
}

/// Whether a drag source's context tag is compatible with a target's.
///
/// Untagged sources and untagged targets are compatible with anything;
/// otherwise the tags must match exactly.
#[must_use]
pub fn contexts_compatible(source: Option<&str>, target: Option<&str>) -> bool {
    match (source, target) {
        (Some(source), Some(target)) => source == target,
        _ => true,
    }
}

/// Resolved insertion point for one pointer notification.
///
/// Built once per event by [`Resolver::resolve`](crate::Resolver::resolve).
/// Everything except the advisory feedback fields (`effects`, adorner, text
/// hints, `not_handled`) is read-only afterwards.
///
/// Item slices and items borrow from the host for `'h`.
pub struct DropInfo<'h, H: DropHost + ?Sized, D> {
    pub(crate) kind: DropEventKind,
    pub(crate) data: D,
    pub(crate) drag_info: Option<DragInfo<H::Element>>,
    pub(crate) key_states: KeyStates,
    pub(crate) drop_position: Point,
    pub(crate) visual_target: Option<H::Element>,
    pub(crate) scroll: ScrollTarget<H::Element>,
    pub(crate) visual_target_item: Option<H::Element>,
    pub(crate) target_item: Option<&'h H::Item>,
    pub(crate) target_collection: Option<&'h [H::Item]>,
    pub(crate) target_collection_owner: Option<H::Element>,
    pub(crate) insert_index: usize,
    pub(crate) unfiltered_insert_index: usize,
    pub(crate) insert_position: InsertPosition,
    pub(crate) target_group: Option<H::Group>,
    pub(crate) orientation: Orientation,
    pub(crate) flow_direction: FlowDirection,
    pub(crate) same_context: bool,
    pub(crate) effects: DragDropEffects,
    pub(crate) adorner: Option<DropTargetAdorner>,
    pub(crate) destination_text: Option<String>,
    pub(crate) effect_text: Option<String>,
    pub(crate) not_handled: bool,
}

impl<'h, H: DropHost + ?Sized, D> DropInfo<'h, H, D> {
    /// A record with no positional fields populated.
    pub(crate) fn empty(
        kind: DropEventKind,
        data: D,
        drag_info: Option<DragInfo<H::Element>>,
        key_states: KeyStates,
    ) -> Self {
        Self {
            kind,
            data,
            drag_info,
            key_states,
            drop_position: Point::ZERO,
            visual_target: None,
            scroll: ScrollTarget::default(),
            visual_target_item: None,
            target_item: None,
            target_collection: None,
            target_collection_owner: None,
            insert_index: 0,
            unfiltered_insert_index: 0,
            insert_position: InsertPosition::empty(),
            target_group: None,
            orientation: Orientation::default(),
            flow_direction: FlowDirection::default(),
            same_context: true,
            effects: DragDropEffects::empty(),
            adorner: None,
            destination_text: None,
            effect_text: None,
            not_handled: false,
        }
    }

    /// The notification this record was resolved for.
    #[must_use]
    pub fn event_kind(&self) -> DropEventKind {
        self.kind
    }

    /// The raw payload.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Consumes the record, returning the raw payload.
    #[must_use]
    pub fn into_data(self) -> D {
        self.data
    }

    /// Drag-source context, if the drag started inside the application.
    #[must_use]
    pub fn drag_info(&self) -> Option<&DragInfo<H::Element>> {
        self.drag_info.as_ref()
    }

    /// Button and modifier state at the time of the event.
    #[must_use]
    pub fn key_states(&self) -> KeyStates {
        self.key_states
    }

    /// Pointer position relative to [`visual_target`](Self::visual_target);
    /// zero when there is no target.
    #[must_use]
    pub fn drop_position(&self) -> Point {
        self.drop_position
    }

    /// The resolved drop surface.
    #[must_use]
    pub fn visual_target(&self) -> Option<H::Element> {
        self.visual_target
    }

    /// Scroll region an auto-scroller should drive.
    #[must_use]
    pub fn target_scroll_region(&self) -> Option<H::Element> {
        self.scroll.region
    }

    /// Axes the auto-scroller may use.
    #[must_use]
    pub fn target_scrolling_mode(&self) -> ScrollingMode {
        self.scroll.mode
    }

    /// Item container under the pointer.
    ///
    /// For surfaces that are not items hosts this is the surface itself. A
    /// flat item that was only snapped to (the pointer is in a gap or past the
    /// end) is not reported here; its effect shows up in
    /// [`insert_index`](Self::insert_index) alone.
    #[must_use]
    pub fn visual_target_item(&self) -> Option<H::Element> {
        self.visual_target_item
    }

    /// Data item under the pointer.
    #[must_use]
    pub fn target_item(&self) -> Option<&'h H::Item> {
        self.target_item
    }

    /// Sequence [`insert_index`](Self::insert_index) refers to.
    #[must_use]
    pub fn target_collection(&self) -> Option<&'h [H::Item]> {
        self.target_collection
    }

    /// Element owning [`target_collection`](Self::target_collection): the
    /// items host or hierarchical row whose items the drop lands among.
    #[must_use]
    pub fn target_collection_owner(&self) -> Option<H::Element> {
        self.target_collection_owner
    }

    /// Insertion index within [`target_collection`](Self::target_collection).
    #[must_use]
    pub fn insert_index(&self) -> usize {
        self.insert_index
    }

    /// [`insert_index`](Self::insert_index) expressed against the unfiltered
    /// source sequence.
    #[must_use]
    pub fn unfiltered_insert_index(&self) -> usize {
        self.unfiltered_insert_index
    }

    /// Position relative to the target item; empty when there is none.
    #[must_use]
    pub fn insert_position(&self) -> InsertPosition {
        self.insert_position
    }

    /// Group containing the drop point, for grouped collections.
    #[must_use]
    pub fn target_group(&self) -> Option<&H::Group> {
        self.target_group.as_ref()
    }

    /// Orientation of the host owning the target item.
    #[must_use]
    pub fn visual_target_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Flow direction of the host owning the target item.
    #[must_use]
    pub fn visual_target_flow_direction(&self) -> FlowDirection {
        self.flow_direction
    }

    /// Whether the drag source and this target share a drag-and-drop context.
    ///
    /// See [`contexts_compatible`].
    #[must_use]
    pub fn is_same_drag_drop_context_as_source(&self) -> bool {
        self.same_context
    }

    /// Effects advertised by drop validation.
    #[must_use]
    pub fn effects(&self) -> DragDropEffects {
        self.effects
    }

    /// Sets the effects advertised to the drag source.
    pub fn set_effects(&mut self, effects: DragDropEffects) {
        self.effects = effects;
    }

    /// Adorner the feedback layer should draw.
    #[must_use]
    pub fn drop_target_adorner(&self) -> Option<DropTargetAdorner> {
        self.adorner
    }

    /// Sets the adorner the feedback layer should draw.
    pub fn set_drop_target_adorner(&mut self, adorner: Option<DropTargetAdorner>) {
        self.adorner = adorner;
    }

    /// Destination hint shown next to the drag cursor.
    #[must_use]
    pub fn destination_text(&self) -> Option<&str> {
        self.destination_text.as_deref()
    }

    /// Sets the destination hint.
    pub fn set_destination_text(&mut self, text: Option<String>) {
        self.destination_text = text;
    }

    /// Effect hint shown next to the drag cursor.
    #[must_use]
    pub fn effect_text(&self) -> Option<&str> {
        self.effect_text.as_deref()
    }

    /// Sets the effect hint.
    pub fn set_effect_text(&mut self, text: Option<String>) {
        self.effect_text = text;
    }

    /// Whether validation declined to handle the event, letting it propagate.
    #[must_use]
    pub fn not_handled(&self) -> bool {
        self.not_handled
    }

    /// Marks the event as not handled.
    pub fn set_not_handled(&mut self, not_handled: bool) {
        self.not_handled = not_handled;
    }
}

impl<H, D> fmt::Debug for DropInfo<'_, H, D>
where
    H: DropHost + ?Sized,
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropInfo")
            .field("kind", &self.kind)
            .field("data", &self.data)
            .field("drag_info", &self.drag_info)
            .field("key_states", &self.key_states)
            .field("drop_position", &self.drop_position)
            .field("visual_target", &self.visual_target)
            .field("scroll", &self.scroll)
            .field("visual_target_item", &self.visual_target_item)
            .field("target_item", &self.target_item)
            .field("target_collection", &self.target_collection)
            .field("target_collection_owner", &self.target_collection_owner)
            .field("insert_index", &self.insert_index)
            .field("unfiltered_insert_index", &self.unfiltered_insert_index)
            .field("insert_position", &self.insert_position)
            .field("target_group", &self.target_group)
            .field("orientation", &self.orientation)
            .field("flow_direction", &self.flow_direction)
            .field("same_context", &self.same_context)
            .field("effects", &self.effects)
            .field("adorner", &self.adorner)
            .field("destination_text", &self.destination_text)
            .field("effect_text", &self.effect_text)
            .field("not_handled", &self.not_handled)
            .finish()
    }
}
