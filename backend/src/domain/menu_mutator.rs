use log::{debug, info, warn};
use shared::Partition;

use crate::domain::menu_registry::MenuRegistry;

/// Pin, drag and visibility commands issued from the sidebar and the menu
/// management table.
///
/// Unlike the registry API, every command here tolerates unknown ids: the
/// view may still hold a reference to an entry that was deleted, so those
/// commands are logged and dropped.
pub struct MenuMutator<'a> {
    registry: &'a mut MenuRegistry,
}

impl<'a> MenuMutator<'a> {
    pub fn new(registry: &'a mut MenuRegistry) -> Self {
        Self { registry }
    }

    /// Flip the pin state without touching `order`
    pub fn toggle_pin(&mut self, id: &str) {
        match self.registry.entry_mut(id) {
            Some(entry) => {
                entry.is_pinned = !entry.is_pinned;
                debug!("Toggled pin on '{}' to {}", id, entry.is_pinned);
            }
            None => warn!("Ignoring pin toggle for unknown menu entry '{}'", id),
        }
    }

    pub fn pin(&mut self, id: &str) {
        self.move_to_partition(id, Partition::Pinned);
    }

    pub fn unpin(&mut self, id: &str) {
        self.move_to_partition(id, Partition::Unpinned);
    }

    /// Drop an entry onto a sidebar section.
    ///
    /// The entry is appended after everything else in the menu; dropping it on
    /// the section it already lives in changes nothing.
    pub fn move_to_partition(&mut self, id: &str, target: Partition) {
        match self.registry.get(id) {
            None => {
                warn!("Ignoring drop of unknown menu entry '{}'", id);
                return;
            }
            Some(entry) if entry.partition() == target => {
                debug!("Menu entry '{}' already in {:?} section", id, target);
                return;
            }
            Some(_) => {}
        }

        let next_order = match self.registry.max_order().checked_add(1) {
            Some(order) => order,
            None => {
                self.registry.renumber_orders();
                self.registry.max_order() + 1
            }
        };
        let Some(entry) = self.registry.entry_mut(id) else {
            return;
        };

        entry.is_pinned = target.is_pinned();
        entry.order = next_order;
        info!("Moved menu entry '{}' to {:?} section with order {}", id, target, next_order);
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) {
        if self.registry.set_visible(id, visible).is_err() {
            warn!("Ignoring visibility change for unknown menu entry '{}'", id);
        }
    }

    pub fn toggle_visibility(&mut self, id: &str) {
        match self.registry.entry_mut(id) {
            Some(entry) => {
                entry.is_visible = !entry.is_visible;
                debug!("Toggled visibility on '{}' to {}", id, entry.is_visible);
            }
            None => warn!("Ignoring visibility toggle for unknown menu entry '{}'", id),
        }
    }

    pub fn delete(&mut self, id: &str) {
        // the registry already logs unknown ids
        let _ = self.registry.delete(id);
    }
}
