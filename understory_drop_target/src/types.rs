// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout metadata, element roles, and pass-through flag types.

/// Primary stacking axis of an items host's panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items stack top to bottom.
    #[default]
    Vertical,
    /// Items stack along the horizontal axis; see [`FlowDirection`].
    Horizontal,
}

/// Text-flow direction of an items host.
///
/// Only meaningful for [`Orientation::Horizontal`] hosts, where it decides
/// which half of an item means "before".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FlowDirection {
    /// First item on the left.
    #[default]
    LeftToRight,
    /// First item on the right.
    RightToLeft,
}

/// Axes along which an external auto-scroller may scroll the target region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScrollingMode {
    /// No auto-scrolling.
    None,
    /// Horizontal auto-scrolling only.
    Horizontal,
    /// Vertical auto-scrolling only.
    Vertical,
    /// Both axes.
    #[default]
    Both,
}

/// Which drop-target adorner the feedback layer should draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DropTargetAdorner {
    /// An insertion line between items.
    Insert,
    /// A highlight around the hovered item.
    Highlight,
}

/// The pointer notification a [`DropInfo`](crate::DropInfo) was resolved for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DropEventKind {
    /// The drag entered the element.
    DragEnter,
    /// The drag moved within the element.
    #[default]
    DragOver,
    /// The drag left the element.
    DragLeave,
    /// The payload was released over the element.
    Drop,
}

bitflags::bitflags! {
    /// Roles an element of the host's visual tree can play.
    ///
    /// Hosts report these through [`DropHost::roles`](crate::DropHost::roles);
    /// the resolver never inspects concrete element types. Roles combine: a
    /// tree row is typically `ITEM_CONTAINER | ITEMS_HOST | HIERARCHICAL`,
    /// while the tree itself is `ITEMS_HOST | HIERARCHICAL`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ElementRoles: u16 {
        /// Element accepts drops.
        const DROP_SURFACE   = 0b0000_0001;
        /// Element presents an ordered collection of items.
        const ITEMS_HOST     = 0b0000_0010;
        /// Element is the container generated for one item.
        const ITEM_CONTAINER = 0b0000_0100;
        /// Element belongs to a tree: rows may own nested child items.
        const HIERARCHICAL   = 0b0000_1000;
        /// Element scrolls its content.
        const SCROLL_REGION  = 0b0001_0000;
        /// Element is a tab host; items live in a nested tab panel.
        const TAB_HOST       = 0b0010_0000;
        /// Element is the panel laying out a tab host's headers.
        const TAB_PANEL      = 0b0100_0000;
    }
}

bitflags::bitflags! {
    /// Mouse button and modifier key state, passed through unchanged.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct KeyStates: u8 {
        /// Left mouse button pressed.
        const LEFT_MOUSE_BUTTON   = 0b0000_0001;
        /// Right mouse button pressed.
        const RIGHT_MOUSE_BUTTON  = 0b0000_0010;
        /// Shift key pressed.
        const SHIFT               = 0b0000_0100;
        /// Control key pressed.
        const CONTROL             = 0b0000_1000;
        /// Middle mouse button pressed.
        const MIDDLE_MOUSE_BUTTON = 0b0001_0000;
        /// Alt key pressed.
        const ALT                 = 0b0010_0000;
    }
}

bitflags::bitflags! {
    /// Effects a drop would have, as advertised by drop validation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct DragDropEffects: u32 {
        /// The payload is copied.
        const COPY   = 0b0001;
        /// The payload is moved.
        const MOVE   = 0b0010;
        /// The payload is linked.
        const LINK   = 0b0100;
        /// The target may scroll while hovering.
        const SCROLL = 0x8000_0000;
    }
}
