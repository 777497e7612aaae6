use shared::{MenuEntry, MenuIcon};

/// Errors raised by the menu registry's direct API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Menu entry not found: {0}")]
    NotFound(String),
    #[error("Menu entry already exists: {0}")]
    DuplicateId(String),
    #[error("Menu label cannot be empty")]
    EmptyLabel,
    #[error("Menu route cannot be empty")]
    EmptyRoute,
}

/// Menu entries every session starts with
pub fn default_menu_entries() -> Vec<MenuEntry> {
    let seed = [
        ("dashboard", "Dashboard", MenuIcon::Home, true, false),
        ("transactions", "Transactions", MenuIcon::DollarSign, true, false),
        ("categories", "Categories", MenuIcon::Tag, true, false),
        ("users", "User Registration", MenuIcon::Users, false, true),
        ("user-management", "Manage Users", MenuIcon::UserCog, false, true),
        ("menu-management", "Manage Menus", MenuIcon::Menu, false, true),
        ("reports", "Reports", MenuIcon::BarChart3, false, false),
        ("cards", "Cards", MenuIcon::CreditCard, false, false),
    ];

    seed.into_iter()
        .enumerate()
        .map(|(index, (id, label, icon, is_pinned, admin_only))| MenuEntry {
            id: id.to_string(),
            label: label.to_string(),
            icon,
            is_pinned,
            is_visible: true,
            admin_only,
            order: index as u32 + 1,
        })
        .collect()
}
