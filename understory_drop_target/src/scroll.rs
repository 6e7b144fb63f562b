// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-region resolution for auto-scrolling while hovering a drop surface.
//!
//! The result is advisory: an external auto-scroll timer reads it to decide
//! which region to scroll and along which axes.

use crate::host::DropHost;
use crate::types::{ElementRoles, ScrollingMode};
use crate::walk;

/// Scroll region and axes associated with a drop surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTarget<E> {
    /// Region to scroll, if the surface has one.
    pub region: Option<E>,
    /// Axes the region may be scrolled along.
    pub mode: ScrollingMode,
}

impl<E> Default for ScrollTarget<E> {
    fn default() -> Self {
        Self {
            region: None,
            mode: ScrollingMode::Both,
        }
    }
}

/// Resolves the scroll region for `surface`.
///
/// Preference order:
/// 1. the region explicitly configured for the surface,
/// 2. for tab hosts, the scroll region around the nested tab panel, below
///    the surface,
/// 3. the first scroll region below the surface.
///
/// The mode is the one configured for the surface, or
/// [`ScrollingMode::Both`].
pub fn resolve_scroll_target<H: DropHost + ?Sized>(
    host: &H,
    surface: H::Element,
) -> ScrollTarget<H::Element> {
    let region = host
        .scroll_region_for(surface)
        .or_else(|| {
            if !host.roles(surface).contains(ElementRoles::TAB_HOST) {
                return None;
            }
            walk::descendant_with(host, surface, ElementRoles::TAB_PANEL).and_then(|panel| {
                walk::nearest_below(host, panel, surface, ElementRoles::SCROLL_REGION)
            })
        })
        .or_else(|| walk::descendant_with(host, surface, ElementRoles::SCROLL_REGION));
    ScrollTarget {
        region,
        mode: host.scrolling_mode(surface).unwrap_or_default(),
    }
}
