//! Pointer-up handling: click-toggle semantics and session teardown.

use crate::controller::DragController;
use crate::profile_scope;
use crate::registry::ItemRegistry;
use crate::types::{ItemId, PointerEvent};
use tracing::debug;

impl DragController {
    /// Call from a managed item's pointer-up notification.
    ///
    /// A click that never crossed the drag threshold toggles an
    /// already-selected item back off, unless this same gesture is what
    /// selected it. A release after actual movement leaves the selection
    /// untouched.
    pub fn handle_pointer_up(&mut self, items: &ItemRegistry, item: ItemId, _event: &PointerEvent) {
        profile_scope!("handle_pointer_up");

        if self.is_dragging() {
            debug!(%item, "drag session finished");
        } else if !self.just_selected && self.is_selected(item) {
            self.set_selected(items, item, false);
        }

        self.just_selected = false;
        self.repaints.push(item);
        // Dropping the session also clears any published axis guide.
        self.session = None;
    }
}
