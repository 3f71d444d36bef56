//! Pointer-down handling: selection updates and drag-session start.

use crate::controller::DragController;
use crate::input::state::DragSession;
use crate::profile_scope;
use crate::registry::ItemRegistry;
use crate::types::{ItemId, PointerEvent};
use tracing::{debug, warn};

impl DragController {
    /// Call from a managed item's pointer-down notification.
    ///
    /// An unselected item becomes selected, replacing the selection unless
    /// the multi-select modifier is held. A drag session then opens
    /// anchored at the item, whether or not it was selected before, so any
    /// press can turn into a group drag.
    pub fn handle_pointer_down(&mut self, items: &ItemRegistry, item: ItemId, event: &PointerEvent) {
        profile_scope!("handle_pointer_down");
        debug_assert!(
            event.modifiers.button_down,
            "pointer-down event without a held button"
        );

        if !self.is_selected(item) {
            if !event.modifiers.multi_select {
                self.deselect_all(items);
            }
            self.set_selected(items, item, true);
            self.just_selected = true;
        }

        self.start_session(items, item, event);
        self.repaints.push(item);
    }

    fn start_session(&mut self, items: &ItemRegistry, item: ItemId, event: &PointerEvent) {
        let Some(bounds) = items.bounds(item) else {
            warn!(%item, "pointer-down on unregistered item; no drag session");
            return;
        };

        let grab_offset = event.position - bounds.origin();
        let start_area = self.selection_area(items).unwrap_or(bounds);
        self.session = Some(DragSession::new(item, grab_offset, event.position, start_area));
        debug!(%item, "drag session opened");
    }
}
