//! Pointer-drag handling: threshold gating, bounds clamping, axis locking,
//! and group movement.
//!
//! Deltas are measured in the moving frame: the anchor item travels with
//! the pointer, so each event's delta is the pointer's offset within the
//! anchor minus the grab offset recorded at pointer-down. Whatever delta
//! survives clamping and axis locking is applied to every selected item.

use crate::constants::DRAG_THRESHOLD;
use crate::controller::DragController;
use crate::geometry::Vec2;
use crate::input::state::{constrain_to_axis, AxisLock};
use crate::profile_scope;
use crate::registry::ItemRegistry;
use crate::types::{ItemId, PointerEvent};
use tracing::{debug, trace, warn};

impl DragController {
    /// Call from a managed item's pointer-drag notification.
    ///
    /// Requires an open gesture with the button held; anything else is a
    /// host bug. Events are ignored until the gesture's travel distance
    /// crosses [`DRAG_THRESHOLD`], after which every event moves the
    /// selection.
    pub fn handle_pointer_drag(&mut self, items: &mut ItemRegistry, event: &PointerEvent) {
        profile_scope!("handle_pointer_drag");

        debug_assert!(
            event.modifiers.button_down,
            "drag event without a held button"
        );
        if !event.modifiers.button_down {
            warn!("drag event without a held button; ignored");
            return;
        }

        let (anchor, grab_offset, total, mut lock) = {
            let Some(session) = self.session.as_mut() else {
                debug_assert!(false, "drag event outside a pointer gesture");
                warn!("drag event outside a pointer gesture; ignored");
                return;
            };

            if !session.moved {
                if event.drag_distance < DRAG_THRESHOLD {
                    return;
                }
                session.moved = true;
                debug!(
                    anchor = %session.anchor,
                    distance = event.drag_distance,
                    "drag threshold crossed"
                );
            }

            (
                session.anchor,
                session.grab_offset,
                session.total_delta,
                session.axis_lock,
            )
        };

        // The host may have removed the anchor mid-gesture; without it
        // there is nothing to measure deltas against.
        let Some(anchor_bounds) = items.bounds(anchor) else {
            trace!(%anchor, "drag anchor no longer registered; event ignored");
            return;
        };

        let pointer_in_anchor = event.position - anchor_bounds.origin();
        let mut delta = pointer_in_anchor - grab_offset;

        if self.config.constrain_to_parent {
            delta = self.clamp_to_container(items, anchor, delta);
        }

        if self.config.axis_lock && event.modifiers.axis_lock {
            delta = constrain_to_axis(&mut lock, total, delta);
        } else {
            lock = AxisLock::Free;
        }

        for &id in &self.selection {
            if items.translate(id, delta) {
                self.repaints.push(id);
            }
        }
        trace!(dx = delta.x, dy = delta.y, ?lock, "drag delta applied");

        if let Some(session) = self.session.as_mut() {
            session.axis_lock = lock;
            session.total_delta = total + delta;
        }
    }

    /// Clamp a candidate delta so the selection's union box, shrunk by the
    /// permitted-offscreen insets, stays inside the anchor's container.
    /// Each side's correction is computed against the same candidate box,
    /// so opposite corrections add up.
    fn clamp_to_container(&self, items: &ItemRegistry, anchor: ItemId, mut delta: Vec2) -> Vec2 {
        let Some(limit) = items
            .container_of(anchor)
            .and_then(|c| items.container_bounds(c))
        else {
            return delta;
        };
        let Some(area) = self.selection_area(items) else {
            return delta;
        };

        let target = area
            .translated(delta)
            .shrunk(self.config.permitted_offscreen);

        if target.x < limit.x {
            delta.x += limit.x - target.x;
        }
        if target.y < limit.y {
            delta.y += limit.y - target.y;
        }
        if target.bottom() > limit.bottom() {
            delta.y -= target.bottom() - limit.bottom();
        }
        if target.right() > limit.right() {
            delta.x -= target.right() - limit.right();
        }
        delta
    }
}
