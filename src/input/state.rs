//! Drag-session state.
//!
//! A session opens on pointer-down and closes on pointer-up, whether or
//! not the gesture ever crossed the movement threshold. The axis lock is
//! a small hysteresis state machine reset at the start of every session.

use crate::constants::DRAG_THRESHOLD;
use crate::geometry::{Rect, Vec2};
use crate::types::ItemId;

/// Axis constraint engaged during a modifier-held drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// No constraint established.
    #[default]
    Free,
    /// Movement confined to the horizontal axis.
    Horizontal,
    /// Movement confined to the vertical axis.
    Vertical,
}

/// Transient state of one press-drag-release gesture.
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    /// Item under the pointer at pointer-down. All deltas are measured
    /// against it.
    pub(crate) anchor: ItemId,
    /// Pointer offset within the anchor at pointer-down.
    pub(crate) grab_offset: Vec2,
    /// Pointer position in container coordinates at pointer-down.
    pub(crate) start_pointer: Vec2,
    /// Union of the selected items' bounds when the session opened.
    pub(crate) start_area: Rect,
    /// Movement applied to the selection so far this gesture.
    pub(crate) total_delta: Vec2,
    /// Current axis constraint.
    pub(crate) axis_lock: AxisLock,
    /// Whether pointer travel has crossed the drag threshold.
    pub(crate) moved: bool,
}

impl DragSession {
    pub(crate) fn new(anchor: ItemId, grab_offset: Vec2, start_pointer: Vec2, start_area: Rect) -> Self {
        Self {
            anchor,
            grab_offset,
            start_pointer,
            start_area,
            total_delta: Vec2::ZERO,
            axis_lock: AxisLock::Free,
            moved: false,
        }
    }
}

/// Advance the axis lock for one drag event and return the constrained
/// delta. `total` is the movement already applied this gesture.
///
/// The suppressed axis gets `-total` rather than zero, so establishing or
/// flipping a lock snaps the selection back onto the locked axis.
pub(crate) fn constrain_to_axis(lock: &mut AxisLock, total: Vec2, mut delta: Vec2) -> Vec2 {
    // Positive means the gesture is mainly horizontal, negative mainly
    // vertical.
    let xy = (total.x + delta.x).abs() - (total.y + delta.y).abs();

    // Far enough along one axis re-picks the lock even when one is already
    // engaged.
    if xy > DRAG_THRESHOLD {
        *lock = AxisLock::Horizontal;
    }
    if xy < -DRAG_THRESHOLD {
        *lock = AxisLock::Vertical;
    }

    if (xy > 0.0 && *lock != AxisLock::Vertical) || *lock == AxisLock::Horizontal {
        delta.y = -total.y;
        *lock = AxisLock::Horizontal;
    } else {
        delta.x = -total.x;
        *lock = AxisLock::Vertical;
    }
    delta
}
