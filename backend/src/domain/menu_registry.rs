use log::{debug, info, warn};
use shared::MenuEntry;

use crate::domain::commands::menu::{CreateMenuEntryCommand, UpdateMenuEntryCommand};
use crate::domain::models::{default_menu_entries, MenuError};

/// Registry of every menu entry keyed by route id.
///
/// Entries are kept in insertion order so that a stable sort on `order`
/// breaks ties by insertion.
#[derive(Debug, Clone)]
pub struct MenuRegistry {
    entries: Vec<MenuEntry>,
    next_generated_id: u64,
}

impl MenuRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_generated_id: 1,
        }
    }

    /// Create a registry seeded with the default menu
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.entries = default_menu_entries();
        registry
    }

    /// Create a registry from existing entries, rejecting duplicate ids
    pub fn with_entries(entries: Vec<MenuEntry>) -> Result<Self, MenuError> {
        let mut registry = Self::new();
        for entry in entries {
            if registry.contains(&entry.id) {
                return Err(MenuError::DuplicateId(entry.id));
            }
            registry.entries.push(entry);
        }
        Ok(registry)
    }

    /// Create a new entry at the end of the menu
    pub fn create(&mut self, command: CreateMenuEntryCommand) -> Result<MenuEntry, MenuError> {
        let label = command.label.trim();
        if label.is_empty() {
            return Err(MenuError::EmptyLabel);
        }

        let id = match command.route {
            Some(route) => {
                let route = route.trim();
                if route.is_empty() {
                    return Err(MenuError::EmptyRoute);
                }
                if self.contains(route) {
                    return Err(MenuError::DuplicateId(route.to_string()));
                }
                route.to_string()
            }
            None => self.generate_id(),
        };

        let entry = MenuEntry {
            id,
            label: label.to_string(),
            icon: command.icon,
            is_pinned: command.is_pinned,
            is_visible: command.is_visible,
            admin_only: command.admin_only,
            order: self.entries.len() as u32 + 1,
        };
        self.entries.push(entry.clone());

        info!("Created menu entry '{}' with order {}", entry.id, entry.order);
        Ok(entry)
    }

    /// Apply a partial update to an existing entry
    pub fn update(&mut self, id: &str, command: UpdateMenuEntryCommand) -> Result<MenuEntry, MenuError> {
        let index = self.position(id).ok_or_else(|| MenuError::NotFound(id.to_string()))?;

        let label = match command.label {
            Some(label) => {
                let label = label.trim().to_string();
                if label.is_empty() {
                    return Err(MenuError::EmptyLabel);
                }
                Some(label)
            }
            None => None,
        };

        let new_id = match command.route {
            Some(route) => {
                let route = route.trim().to_string();
                if route.is_empty() {
                    return Err(MenuError::EmptyRoute);
                }
                if route != id && self.contains(&route) {
                    return Err(MenuError::DuplicateId(route));
                }
                Some(route)
            }
            None => None,
        };

        let entry = &mut self.entries[index];
        if let Some(new_id) = new_id {
            if new_id != entry.id {
                info!("Renaming menu entry '{}' to '{}'", entry.id, new_id);
            }
            entry.id = new_id;
        }
        if let Some(label) = label {
            entry.label = label;
        }
        if let Some(icon) = command.icon {
            entry.icon = icon;
        }
        if let Some(is_pinned) = command.is_pinned {
            entry.is_pinned = is_pinned;
        }
        if let Some(is_visible) = command.is_visible {
            entry.is_visible = is_visible;
        }
        if let Some(admin_only) = command.admin_only {
            entry.admin_only = admin_only;
        }
        if let Some(order) = command.order {
            entry.order = order;
        }

        info!("Updated menu entry '{}'", entry.id);
        Ok(entry.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), MenuError> {
        let index = self.position(id).ok_or_else(|| {
            warn!("Cannot delete unknown menu entry '{}'", id);
            MenuError::NotFound(id.to_string())
        })?;
        self.entries.remove(index);
        info!("Deleted menu entry '{}'", id);
        Ok(())
    }

    pub fn set_pinned(&mut self, id: &str, pinned: bool) -> Result<(), MenuError> {
        let entry = self.entry_mut(id).ok_or_else(|| MenuError::NotFound(id.to_string()))?;
        entry.is_pinned = pinned;
        debug!("Menu entry '{}' pinned={}", id, pinned);
        Ok(())
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> Result<(), MenuError> {
        let entry = self.entry_mut(id).ok_or_else(|| MenuError::NotFound(id.to_string()))?;
        entry.is_visible = visible;
        debug!("Menu entry '{}' visible={}", id, visible);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// All entries sorted ascending by `order`, ties in insertion order
    pub fn list(&self) -> Vec<MenuEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by_key(|entry| entry.order);
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest order key in use, 0 for an empty registry
    pub fn max_order(&self) -> u32 {
        self.entries.iter().map(|entry| entry.order).max().unwrap_or(0)
    }

    /// Reassign orders as 1..=n, keeping the current list order
    pub fn renumber_orders(&mut self) {
        self.entries.sort_by_key(|entry| entry.order);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.order = index as u32 + 1;
        }
        info!("Renumbered {} menu entries", self.entries.len());
    }

    pub(crate) fn entry_mut(&mut self, id: &str) -> Option<&mut MenuEntry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Monotonic id generator that never reuses an id still in the registry
    fn generate_id(&mut self) -> String {
        loop {
            let candidate = format!("custom-{}", self.next_generated_id);
            self.next_generated_id += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MenuIcon;

    fn create_command(label: &str, route: Option<&str>) -> CreateMenuEntryCommand {
        CreateMenuEntryCommand {
            label: label.to_string(),
            icon: MenuIcon::FileText,
            route: route.map(str::to_string),
            is_pinned: false,
            is_visible: true,
            admin_only: false,
        }
    }

    #[test]
    fn test_create_assigns_order_after_count() {
        let mut registry = MenuRegistry::with_defaults();
        let entry = registry.create(create_command("  Budgets ", Some("budgets"))).unwrap();

        assert_eq!(entry.id, "budgets");
        assert_eq!(entry.label, "Budgets");
        assert_eq!(entry.order, 9);
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.get("budgets"), Some(&entry));
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let mut registry = MenuRegistry::new();
        let first = registry.create(create_command("First", None)).unwrap();
        let second = registry.create(create_command("Second", None)).unwrap();
        assert_eq!(first.id, "custom-1");
        assert_eq!(second.id, "custom-2");

        registry.delete("custom-1").unwrap();
        let third = registry.create(create_command("Third", None)).unwrap();
        assert_eq!(third.id, "custom-3");
    }

    #[test]
    fn test_generated_id_skips_taken_routes() {
        let mut registry = MenuRegistry::new();
        registry.create(create_command("Taken", Some("custom-1"))).unwrap();
        let generated = registry.create(create_command("Fresh", None)).unwrap();
        assert_eq!(generated.id, "custom-2");
    }

    #[test]
    fn test_create_rejects_duplicate_route() {
        let mut registry = MenuRegistry::with_defaults();
        let result = registry.create(create_command("Another dashboard", Some("dashboard")));
        assert_eq!(result, Err(MenuError::DuplicateId("dashboard".to_string())));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_create_validation() {
        let mut registry = MenuRegistry::new();
        assert_eq!(registry.create(create_command("   ", None)), Err(MenuError::EmptyLabel));
        assert_eq!(registry.create(create_command("Label", Some(" "))), Err(MenuError::EmptyRoute));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_patches_fields() {
        let mut registry = MenuRegistry::with_defaults();
        let command = UpdateMenuEntryCommand {
            label: Some("Statements".to_string()),
            icon: Some(MenuIcon::FileText),
            admin_only: Some(true),
            order: Some(42),
            ..Default::default()
        };

        let updated = registry.update("reports", command).unwrap();
        assert_eq!(updated.label, "Statements");
        assert_eq!(updated.icon, MenuIcon::FileText);
        assert!(updated.admin_only);
        assert_eq!(updated.order, 42);
        assert!(updated.is_visible);
        assert!(!updated.is_pinned);
    }

    #[test]
    fn test_update_renames_route() {
        let mut registry = MenuRegistry::with_defaults();
        let command = UpdateMenuEntryCommand {
            route: Some("statements".to_string()),
            ..Default::default()
        };
        registry.update("reports", command).unwrap();
        assert!(registry.get("reports").is_none());
        assert!(registry.get("statements").is_some());

        let clash = UpdateMenuEntryCommand {
            route: Some("cards".to_string()),
            ..Default::default()
        };
        assert_eq!(
            registry.update("statements", clash),
            Err(MenuError::DuplicateId("cards".to_string()))
        );
    }

    #[test]
    fn test_update_unknown_entry() {
        let mut registry = MenuRegistry::with_defaults();
        let result = registry.update("missing", UpdateMenuEntryCommand::default());
        assert_eq!(result, Err(MenuError::NotFound("missing".to_string())));
    }

    #[test]
    fn test_update_rejects_empty_label() {
        let mut registry = MenuRegistry::with_defaults();
        let command = UpdateMenuEntryCommand {
            label: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(registry.update("reports", command), Err(MenuError::EmptyLabel));
        assert_eq!(registry.get("reports").unwrap().label, "Reports");
    }

    #[test]
    fn test_delete() {
        let mut registry = MenuRegistry::with_defaults();
        registry.delete("cards").unwrap();
        assert!(!registry.contains("cards"));
        assert_eq!(registry.len(), 7);

        assert_eq!(registry.delete("cards"), Err(MenuError::NotFound("cards".to_string())));
        assert_eq!(registry.len(), 7);
    }

    #[test]
    fn test_set_pinned_and_visible() {
        let mut registry = MenuRegistry::with_defaults();
        registry.set_pinned("reports", true).unwrap();
        registry.set_visible("reports", false).unwrap();

        let reports = registry.get("reports").unwrap();
        assert!(reports.is_pinned);
        assert!(!reports.is_visible);
        assert_eq!(reports.order, 7);

        assert!(registry.set_pinned("missing", true).is_err());
        assert!(registry.set_visible("missing", true).is_err());
    }

    #[test]
    fn test_list_sorts_by_order_stably() {
        let mut registry = MenuRegistry::new();
        registry.create(create_command("A", Some("a"))).unwrap();
        registry.create(create_command("B", Some("b"))).unwrap();
        registry.create(create_command("C", Some("c"))).unwrap();

        let command = UpdateMenuEntryCommand {
            order: Some(1),
            ..Default::default()
        };
        registry.update("c", command).unwrap();

        let ids: Vec<String> = registry.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_with_entries_rejects_duplicates() {
        let mut entries = default_menu_entries();
        entries.push(entries[0].clone());
        let result = MenuRegistry::with_entries(entries);
        assert_eq!(result.err(), Some(MenuError::DuplicateId("dashboard".to_string())));
    }

    #[test]
    fn test_renumber_orders_keeps_list_order() {
        let mut registry = MenuRegistry::with_defaults();
        let command = UpdateMenuEntryCommand {
            order: Some(u32::MAX),
            ..Default::default()
        };
        registry.update("dashboard", command).unwrap();
        let before: Vec<String> = registry.list().into_iter().map(|e| e.id).collect();

        registry.renumber_orders();

        let after = registry.list();
        let ids: Vec<String> = after.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, before);
        assert_eq!(after.iter().map(|e| e.order).collect::<Vec<u32>>(), (1..=8).collect::<Vec<u32>>());
        assert_eq!(registry.max_order(), 8);
    }

    #[test]
    fn test_max_order() {
        let mut registry = MenuRegistry::new();
        assert_eq!(registry.max_order(), 0);
        registry.create(create_command("A", None)).unwrap();
        assert_eq!(registry.max_order(), 1);
        assert_eq!(MenuRegistry::with_defaults().max_order(), 8);
    }
}
