//! # Sidebar Filter
//!
//! Derives what the sidebar shows from the menu registry and the active role.
//!
//! The derivation runs on every read with no cache, so a role switch or a
//! registry edit is reflected by the next call:
//!
//! 1. drop admin-only entries unless the role is admin
//! 2. drop hidden entries
//! 3. split into pinned and unpinned, each ascending by `order`
//!
//! Management screens skip the first two steps and see every entry.

use shared::{MenuEntry, SidebarView};

use crate::domain::menu_registry::MenuRegistry;
use crate::domain::role_context::RoleContext;

pub struct SidebarFilter;

impl SidebarFilter {
    /// Entries for the sidebar, partitioned by pin state
    pub fn sidebar(registry: &MenuRegistry, role: &RoleContext) -> SidebarView {
        let role = role.role();
        let (pinned, unpinned): (Vec<MenuEntry>, Vec<MenuEntry>) = registry
            .list()
            .into_iter()
            .filter(|entry| entry.is_accessible_to(role))
            .filter(|entry| entry.is_visible)
            .partition(|entry| entry.is_pinned);

        SidebarView { pinned, unpinned }
    }

    /// Every entry for the menu management table, ascending by `order`.
    ///
    /// Hidden and admin-only entries are included so they can be edited.
    pub fn management_entries(registry: &MenuRegistry) -> Vec<MenuEntry> {
        registry.list()
    }
}
