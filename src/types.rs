//! Core types shared by the registry and the controller.
//!
//! Handles are plain copyable ids. The controller never stores references
//! to host widgets; everything it touches goes through an [`ItemId`] or
//! [`ContainerId`] resolved against the registry at use time.

use crate::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a registered item.
///
/// Ids are never reused within a registry's lifetime, so a handle to a
/// removed item simply stops resolving instead of aliasing a newer item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub(crate) u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Stable handle to a registered parent container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContainerId(pub(crate) u64);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// A draggable item as the registry tracks it: its bounds and the
/// container it lives in. Bounds are in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManagedItem {
    pub id: ItemId,
    pub container: ContainerId,
    pub bounds: Rect,
}

/// Modifier-key and button state carried on every pointer event.
///
/// Hosts map their framework's modifiers onto these flags, classically
/// shift or command for `multi_select` and shift for `axis_lock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Pointer-down adds to the selection instead of replacing it.
    pub multi_select: bool,
    /// Dragging may be constrained to a single axis while held.
    pub axis_lock: bool,
    /// A pointer button is currently held.
    pub button_down: bool,
}

impl Modifiers {
    /// All flags clear.
    pub const NONE: Modifiers = Modifiers {
        multi_select: false,
        axis_lock: false,
        button_down: false,
    };

    /// Button held, no modifier keys. The common pointer-down state.
    #[inline]
    pub const fn button() -> Self {
        Modifiers {
            multi_select: false,
            axis_lock: false,
            button_down: true,
        }
    }

    #[inline]
    pub const fn with_multi_select(mut self) -> Self {
        self.multi_select = true;
        self
    }

    #[inline]
    pub const fn with_axis_lock(mut self) -> Self {
        self.axis_lock = true;
        self
    }
}

/// A pointer notification forwarded from a host widget.
///
/// `position` is in the coordinate space of the item's parent container.
/// `drag_distance` is the straight-line travel since the gesture's
/// pointer-down, as host frameworks report it; only drag events need it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Vec2,
    pub modifiers: Modifiers,
    pub drag_distance: f32,
}

impl PointerEvent {
    pub fn new(position: Vec2, modifiers: Modifiers) -> Self {
        Self {
            position,
            modifiers,
            drag_distance: 0.0,
        }
    }

    /// Attach the gesture travel distance, for drag events.
    pub fn with_drag_distance(mut self, distance: f32) -> Self {
        self.drag_distance = distance;
        self
    }
}

/// A transient alignment guide published while an axis lock is engaged.
///
/// Hosts draw it as a line across the container at the gesture's starting
/// pointer position. It disappears with the drag session on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGuide {
    /// Movement locked to the horizontal axis; drawn as a horizontal line.
    Horizontal { y: f32 },
    /// Movement locked to the vertical axis; drawn as a vertical line.
    Vertical { x: f32 },
}
