//! The selection and drag controller.
//!
//! [`DragController`] owns the selection set, the active drag session, and
//! a queue of per-item redraw requests. It holds no references to host
//! widgets; items are addressed through [`ItemRegistry`] handles resolved
//! on every access, so the host may remove items at any time between
//! events.
//!
//! ## Integration
//!
//! Forward the pointer notifications of every managed item:
//!
//! ```ignore
//! dragger.handle_pointer_down(&items, id, &event);
//! dragger.handle_pointer_drag(&mut items, &event);
//! dragger.handle_pointer_up(&items, id, &event);
//! ```
//!
//! then drain [`take_repaints`](DragController::take_repaints), consult
//! [`is_selected`](DragController::is_selected) when painting, and draw
//! [`axis_guide`](DragController::axis_guide) if one is published.
//!
//! One controller serves one container's worth of items; the selection
//! never spans containers.

use crate::config::DraggerConfig;
use crate::geometry::{Insets, Rect};
use crate::input::state::{AxisLock, DragSession};
use crate::registry::ItemRegistry;
use crate::types::{DragGuide, ItemId};
use tracing::warn;

/// Selection and group-drag state for items sharing one parent container.
#[derive(Debug, Default)]
pub struct DragController {
    pub(crate) config: DraggerConfig,
    /// Selected handles in selection order. May hold handles that no
    /// longer resolve; every iteration skips those.
    pub(crate) selection: Vec<ItemId>,
    pub(crate) session: Option<DragSession>,
    /// Whether the current gesture's pointer-down is what selected the
    /// item, which exempts it from the click-to-deselect toggle.
    pub(crate) just_selected: bool,
    pub(crate) repaints: Vec<ItemId>,
}

impl DragController {
    pub fn new(config: DraggerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    // =========================================================================
    // CONFIGURATION
    // =========================================================================

    pub fn config(&self) -> &DraggerConfig {
        &self.config
    }

    /// Replace the configuration wholesale. Takes effect from the next
    /// pointer event, mid-gesture included.
    pub fn set_config(&mut self, config: DraggerConfig) {
        self.config = config;
    }

    /// Clamp group movement to the parent container, with the offscreen
    /// slack allowed per side.
    pub fn set_constrain_to_parent(&mut self, constrain: bool, permitted_offscreen: Insets) {
        self.config.constrain_to_parent = constrain;
        self.config.permitted_offscreen = permitted_offscreen;
    }

    /// Constrain dragging to one axis while the axis-lock modifier is held.
    pub fn set_axis_lock(&mut self, lock: bool) {
        self.config.axis_lock = lock;
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    /// Whether the item is currently selected. Pure query.
    pub fn is_selected(&self, item: ItemId) -> bool {
        self.selection.contains(&item)
    }

    /// Number of selected handles, stale ones included.
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Selected handles in selection order.
    pub fn selected_items(&self) -> &[ItemId] {
        &self.selection
    }

    /// Add or remove an item from the selection. A no-op when the item is
    /// already in the requested state.
    ///
    /// Selecting an unregistered handle is ignored with a warning;
    /// deselecting one is allowed so hosts can drop stale handles. All
    /// selected items must share one container.
    pub fn set_selected(&mut self, items: &ItemRegistry, item: ItemId, selected: bool) {
        if selected && !items.contains(item) {
            warn!(%item, "ignoring selection of unregistered item");
            return;
        }
        self.debug_check_same_container(items, item);

        let already = self.is_selected(item);
        if selected && !already {
            self.selection.push(item);
        } else if !selected && already {
            self.selection.retain(|&id| id != item);
        }
    }

    /// Flip the selected state of an item.
    pub fn toggle_selection(&mut self, items: &ItemRegistry, item: ItemId) {
        self.set_selected(items, item, !self.is_selected(item));
    }

    /// Clear the selection, enqueueing a redraw for every previously
    /// selected item that still resolves.
    pub fn deselect_all(&mut self, items: &ItemRegistry) {
        for &id in &self.selection {
            if items.contains(id) {
                self.repaints.push(id);
            }
        }
        self.selection.clear();
    }

    /// Union of the selected items' live bounds, skipping handles that no
    /// longer resolve. `None` when nothing live is selected.
    pub fn selection_area(&self, items: &ItemRegistry) -> Option<Rect> {
        let mut live = self.selection.iter().filter_map(|&id| items.bounds(id));
        let first = live.next()?;
        Some(live.fold(first, |area, bounds| area.union(&bounds)))
    }

    // =========================================================================
    // GESTURE QUERIES
    // =========================================================================

    /// True once the active gesture has crossed the drag threshold.
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.moved)
    }

    /// Axis constraint currently engaged. `Free` outside a locked drag.
    pub fn axis_lock(&self) -> AxisLock {
        self.session.as_ref().map_or(AxisLock::Free, |s| s.axis_lock)
    }

    /// Union of the selected items' bounds captured when the active
    /// gesture's session opened.
    pub fn drag_start_area(&self) -> Option<Rect> {
        self.session.as_ref().map(|s| s.start_area)
    }

    /// The guide hosts draw while an axis lock is engaged, positioned at
    /// the gesture's starting pointer position.
    ///
    /// Present only during a moving drag with a lock established and
    /// guides enabled; it clears with the session on pointer-up.
    pub fn axis_guide(&self) -> Option<DragGuide> {
        if !self.config.show_axis_guides {
            return None;
        }
        let session = self.session.as_ref().filter(|s| s.moved)?;
        match session.axis_lock {
            AxisLock::Free => None,
            AxisLock::Horizontal => Some(DragGuide::Horizontal {
                y: session.start_pointer.y,
            }),
            AxisLock::Vertical => Some(DragGuide::Vertical {
                x: session.start_pointer.x,
            }),
        }
    }

    // =========================================================================
    // REDRAW REQUESTS
    // =========================================================================

    /// Drain pending per-item redraw requests.
    ///
    /// Order follows event processing and an item may appear more than
    /// once per frame. Requests made from pointer handlers may reference
    /// handles the host has since removed; skip those when painting.
    pub fn take_repaints(&mut self) -> Vec<ItemId> {
        std::mem::take(&mut self.repaints)
    }

    // -------------------------------------------------------------------------

    /// The selection must stay within one container. Mixing containers is
    /// a host bug; caught in debug builds, warned about in release.
    fn debug_check_same_container(&self, items: &ItemRegistry, item: ItemId) {
        let Some(container) = items.container_of(item) else {
            return;
        };
        let Some(existing) = self
            .selection
            .iter()
            .find_map(|&id| items.container_of(id))
        else {
            return;
        };
        debug_assert_eq!(
            existing, container,
            "selection spans containers: {existing} vs {container}"
        );
        if existing != container {
            warn!(%item, %existing, %container, "selection spans containers");
        }
    }
}
