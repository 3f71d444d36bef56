//! Stable item registry backing the controller's non-owning references.
//!
//! The controller never holds pointers to host widgets. Hosts register
//! containers and the items inside them, receive copyable handles, and
//! keep the registry in sync as their widget tree changes. Every
//! controller access resolves handles through here, so an item the host
//! removed mid-gesture simply stops resolving.
//!
//! The registry also answers the spatial queries a host needs to route
//! pointer events on a shared canvas, and carries a coarse dirty flag for
//! immediate-mode hosts that redraw whole frames.

use crate::geometry::{Rect, Vec2};
use crate::spatial_index::SpatialIndex;
use crate::types::{ContainerId, ItemId, ManagedItem};
use std::collections::{HashMap, HashSet};

/// A parent surface items live in.
#[derive(Debug, Clone, Copy)]
struct Container {
    bounds: Rect,
}

/// Registry of containers and the draggable items they hold.
///
/// Items stack in registration order, most recent in front; hit testing
/// respects that order.
#[derive(Default)]
pub struct ItemRegistry {
    containers: HashMap<ContainerId, Container>,
    items: HashMap<ItemId, ManagedItem>,
    /// Back-to-front stacking order of live items.
    z_order: Vec<ItemId>,
    index: SpatialIndex,
    next_container: u64,
    next_item: u64,
    dirty: bool,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // CONTAINERS
    // =========================================================================

    /// Register a parent container covering the given bounds.
    pub fn add_container(&mut self, bounds: Rect) -> ContainerId {
        self.next_container += 1;
        let id = ContainerId(self.next_container);
        self.containers.insert(id, Container { bounds });
        self.dirty = true;
        id
    }

    pub fn container_bounds(&self, container: ContainerId) -> Option<Rect> {
        self.containers.get(&container).map(|c| c.bounds)
    }

    /// Resize a container, returning whether the handle resolved.
    pub fn set_container_bounds(&mut self, container: ContainerId, bounds: Rect) -> bool {
        match self.containers.get_mut(&container) {
            Some(entry) => {
                entry.bounds = bounds;
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // ITEMS
    // =========================================================================

    /// Register an item inside a container. The container must already be
    /// registered.
    pub fn add_item(&mut self, container: ContainerId, bounds: Rect) -> ItemId {
        debug_assert!(
            self.containers.contains_key(&container),
            "add_item: unknown {container}"
        );

        self.next_item += 1;
        let id = ItemId(self.next_item);
        self.items.insert(
            id,
            ManagedItem {
                id,
                container,
                bounds,
            },
        );
        self.z_order.push(id);
        self.index.insert(id, bounds);
        self.dirty = true;
        id
    }

    /// Remove an item. Outstanding handles to it stop resolving from here
    /// on. Returns whether the item was present.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        if self.items.remove(&item).is_none() {
            return false;
        }
        self.z_order.retain(|&id| id != item);
        self.index.remove(item);
        self.dirty = true;
        true
    }

    #[inline]
    pub fn get(&self, item: ItemId) -> Option<&ManagedItem> {
        self.items.get(&item)
    }

    #[inline]
    pub fn bounds(&self, item: ItemId) -> Option<Rect> {
        self.items.get(&item).map(|i| i.bounds)
    }

    #[inline]
    pub fn container_of(&self, item: ItemId) -> Option<ContainerId> {
        self.items.get(&item).map(|i| i.container)
    }

    #[inline]
    pub fn contains(&self, item: ItemId) -> bool {
        self.items.contains_key(&item)
    }

    /// Move an item to the given bounds, returning whether the handle
    /// resolved.
    pub fn set_bounds(&mut self, item: ItemId, bounds: Rect) -> bool {
        match self.items.get_mut(&item) {
            Some(entry) => {
                entry.bounds = bounds;
                self.index.update(item, bounds);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Shift an item's bounds by a delta, returning whether the handle
    /// resolved.
    pub fn translate(&mut self, item: ItemId, delta: Vec2) -> bool {
        match self.bounds(item) {
            Some(bounds) => self.set_bounds(item, bounds.translated(delta)),
            None => false,
        }
    }

    /// Number of live items across all containers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Topmost item whose bounds contain the point, edges inclusive.
    pub fn item_at(&self, point: Vec2) -> Option<ItemId> {
        let candidates: HashSet<ItemId> = self.index.query_point(point).into_iter().collect();
        self.z_order
            .iter()
            .rev()
            .copied()
            .find(|id| candidates.contains(id))
    }

    /// All items intersecting the rectangle, back to front.
    pub fn items_in(&self, rect: &Rect) -> Vec<ItemId> {
        let hits: HashSet<ItemId> = self.index.query_rect(rect).into_iter().collect();
        self.z_order
            .iter()
            .copied()
            .filter(|id| hits.contains(id))
            .collect()
    }

    /// Items belonging to a container, back to front.
    pub fn items_in_container(&self, container: ContainerId) -> Vec<ItemId> {
        self.z_order
            .iter()
            .copied()
            .filter(|&id| self.container_of(id) == Some(container))
            .collect()
    }

    // =========================================================================
    // DIRTY TRACKING
    // =========================================================================

    /// Coarse change flag for immediate-mode hosts. Set by every mutation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Read and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
