// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drop_target --heading-base-level=0

//! Understory Drop Target: headless drop-target resolution for drag and drop.
//!
//! Given a pointer position during a drag over a (possibly nested, grouped,
//! filtered) collection of items, this crate works out the exact insertion
//! point: which surface receives the drop, which item the pointer is over,
//! the index a dropped item would be inserted at, and whether that is before,
//! after, or onto the item.
//!
//! It does not decide whether a drop is allowed, draw any feedback, scroll,
//! or mutate data. Those are left to the host; this crate only answers
//! "where would it go".
//!
//! ## Host capability
//!
//! The crate never owns a visual tree. Hosts implement [`DropHost`] over
//! their own tree and item hosts: parent/child lookup, hit testing, bounds,
//! element [`ElementRoles`], and the per-host item lists. Geometric searches
//! (item under a point, nearest item along a layout axis) are provided on
//! top of those lookups and can be overridden.
//!
//! ## Resolution
//!
//! [`Resolver::resolve`] turns a [`DropEvent`] into a [`DropInfo`]:
//!
//! - [`DropInfo::visual_target`]: the nearest drop surface at or above the event origin.
//! - [`DropInfo::target_collection`] and [`DropInfo::insert_index`]: where the drop lands.
//! - [`DropInfo::insert_position`]: an [`InsertPosition`] bit set; the center bit
//!   combines with a directional bit to mean "drop into this item".
//! - [`DropInfo::unfiltered_insert_index`]: the index expressed against the
//!   unfiltered source when the host presents a filtered or sorted view.
//!
//! Items are split into bands along their owner's layout axis (25% / 75% by
//! default, see [`BandThresholds`]). The full decision table lives in
//! [`band`]. Hierarchical rows retarget into their own children: the center
//! band appends to the children, and the trailing band of an expanded row
//! inserts before its first child.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_drop_target::{
//!     DropEvent, DropHost, ElementRoles, FlowDirection, InsertPosition, Orientation, resolve,
//! };
//!
//! /// A vertical list (element 0) with three 100px rows (elements 1..=3).
//! struct List {
//!     items: Vec<&'static str>,
//! }
//!
//! impl DropHost for List {
//!     type Element = usize;
//!     type Item = &'static str;
//!     type Group = ();
//!
//!     fn parent(&self, e: usize) -> Option<usize> {
//!         (e > 0).then_some(0)
//!     }
//!     fn children(&self, e: usize, out: &mut Vec<usize>) {
//!         if e == 0 {
//!             out.extend(1..=self.items.len());
//!         }
//!     }
//!     fn hit_test(&self, _root: usize, p: Point) -> Option<usize> {
//!         let row = (p.y / 100.0) as usize;
//!         Some(if row < self.items.len() { row + 1 } else { 0 })
//!     }
//!     fn bounds_in(&self, e: usize, _ancestor: usize) -> Option<Rect> {
//!         let top = e.saturating_sub(1) as f64 * 100.0;
//!         Some(if e == 0 {
//!             Rect::new(0.0, 0.0, 200.0, 300.0)
//!         } else {
//!             Rect::new(0.0, top, 200.0, top + 100.0)
//!         })
//!     }
//!     fn render_size(&self, e: usize) -> Size {
//!         if e == 0 { Size::new(200.0, 300.0) } else { Size::new(200.0, 100.0) }
//!     }
//!     fn roles(&self, e: usize) -> ElementRoles {
//!         if e == 0 {
//!             ElementRoles::DROP_SURFACE | ElementRoles::ITEMS_HOST
//!         } else {
//!             ElementRoles::ITEM_CONTAINER
//!         }
//!     }
//!     fn view_items(&self, _host: usize) -> &[&'static str] {
//!         &self.items
//!     }
//!     fn items_source(&self, _host: usize) -> Option<&[&'static str]> {
//!         Some(&self.items)
//!     }
//!     fn index_of_container(&self, _host: usize, c: usize) -> Option<usize> {
//!         c.checked_sub(1)
//!     }
//!     fn container_from_item(&self, _host: usize, item: &&'static str) -> Option<usize> {
//!         self.items.iter().position(|i| i == item).map(|i| i + 1)
//!     }
//!     fn container_from_index(&self, _host: usize, index: usize) -> Option<usize> {
//!         (index < self.items.len()).then_some(index + 1)
//!     }
//!     fn orientation(&self, _host: usize) -> Orientation {
//!         Orientation::Vertical
//!     }
//!     fn flow_direction(&self, _host: usize) -> FlowDirection {
//!         FlowDirection::LeftToRight
//!     }
//! }
//!
//! let list = List { items: vec!["a", "b", "c"] };
//!
//! // 10px into the third row: insert before it.
//! let info = resolve(&list, DropEvent::new(3, Point::new(5.0, 10.0), ()), None);
//! assert_eq!(info.insert_index(), 2);
//! assert_eq!(info.insert_position(), InsertPosition::BEFORE_TARGET_ITEM);
//! assert_eq!(info.target_item(), Some(&"c"));
//!
//! // 90px into the third row: insert after it.
//! let info = resolve(&list, DropEvent::new(3, Point::new(5.0, 90.0), ()), None);
//! assert_eq!(info.insert_index(), 3);
//! assert_eq!(info.insert_position(), InsertPosition::AFTER_TARGET_ITEM);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards `std` to `kurbo`, `thiserror`, and `tracing`.
//! - `libm`: use `libm` for `kurbo`'s float math in `no_std` builds.
//!
//! Resolution steps are instrumented with `tracing` at `debug` and `trace`
//! level; install a subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod band;
mod config;
pub mod hit;
mod host;
mod info;
mod position;
pub mod remap;
mod resolve;
pub mod scroll;
mod types;
pub mod walk;

pub use config::{BandThresholds, ConfigError, ResolverConfig};
pub use host::{DropHost, ItemGroup};
pub use info::{DragInfo, DropEvent, DropInfo, contexts_compatible};
pub use position::InsertPosition;
pub use resolve::{Resolver, resolve};
pub use scroll::{ScrollTarget, resolve_scroll_target};
pub use types::{
    DragDropEffects, DropEventKind, DropTargetAdorner, ElementRoles, FlowDirection, KeyStates,
    Orientation, ScrollingMode,
};
