//! R-tree spatial index over item bounds.
//!
//! Backs the registry's hit testing, reducing point queries from O(n) to
//! O(log n). The index stores plain bounding boxes; z-order resolution
//! stays in the registry.

use crate::geometry::{Rect, Vec2};
use crate::types::ItemId;
use rstar::{RTree, RTreeObject, AABB};
use std::collections::HashMap;

/// One item's bounding box as stored in the tree.
#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    item: ItemId,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl SpatialEntry {
    fn new(item: ItemId, bounds: Rect) -> Self {
        Self {
            item,
            min_x: bounds.x,
            min_y: bounds.y,
            max_x: bounds.right(),
            max_y: bounds.bottom(),
        }
    }

    #[inline]
    fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

// Identity comparison only; RTree::remove matches on this.
impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item == other.item
    }
}

/// Spatial index over registered items, one entry per live item.
pub(crate) struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub(crate) fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, item: ItemId, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&item) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item, bounds);
        self.tree.insert(entry);
        self.entries.insert(item, entry);
    }

    pub(crate) fn remove(&mut self, item: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub(crate) fn update(&mut self, item: ItemId, bounds: Rect) {
        self.insert(item, bounds);
    }

    /// All items whose bounds contain the point, edges inclusive.
    pub(crate) fn query_point(&self, point: Vec2) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([point.x, point.y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(point))
            .map(|entry| entry.item)
            .collect()
    }

    /// All items whose bounds intersect the rectangle.
    pub(crate) fn query_rect(&self, rect: &Rect) -> Vec<ItemId> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.right(), rect.bottom()]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item)
            .collect()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
