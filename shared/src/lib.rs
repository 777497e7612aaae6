use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Session-wide authorization level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular user, cannot see admin-only menu entries
    Normal,
    /// Administrator, sees every menu entry
    #[default]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Normal => "normal",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Human-readable name for the settings screen badge
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Normal => "User",
            Role::Admin => "Administrator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Role::Normal),
            "admin" => Ok(Role::Admin),
            other => Err(format!("Invalid role: {}", other)),
        }
    }
}

/// Glyph shown next to a menu entry.
///
/// The host view layer maps each variant to a concrete icon. Unknown names
/// resolve to `Menu` so that stale stored entries still render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MenuIcon {
    Home,
    Users,
    Tag,
    DollarSign,
    BarChart3,
    CreditCard,
    UserCog,
    #[default]
    Menu,
    Settings,
    FileText,
}

impl MenuIcon {
    /// Every icon offered by the menu management picker, in picker order
    pub fn all() -> &'static [MenuIcon] {
        &[
            MenuIcon::Home,
            MenuIcon::Users,
            MenuIcon::Tag,
            MenuIcon::DollarSign,
            MenuIcon::BarChart3,
            MenuIcon::CreditCard,
            MenuIcon::UserCog,
            MenuIcon::Menu,
            MenuIcon::Settings,
            MenuIcon::FileText,
        ]
    }

    /// Stable identifier used in storage and over the wire
    pub fn name(&self) -> &'static str {
        match self {
            MenuIcon::Home => "Home",
            MenuIcon::Users => "Users",
            MenuIcon::Tag => "Tag",
            MenuIcon::DollarSign => "DollarSign",
            MenuIcon::BarChart3 => "BarChart3",
            MenuIcon::CreditCard => "CreditCard",
            MenuIcon::UserCog => "UserCog",
            MenuIcon::Menu => "Menu",
            MenuIcon::Settings => "Settings",
            MenuIcon::FileText => "FileText",
        }
    }

    /// Label shown in the icon picker
    pub fn display_label(&self) -> &'static str {
        match self {
            MenuIcon::Home => "Home",
            MenuIcon::Users => "Users",
            MenuIcon::Tag => "Tag",
            MenuIcon::DollarSign => "Money",
            MenuIcon::BarChart3 => "Chart",
            MenuIcon::CreditCard => "Card",
            MenuIcon::UserCog => "Manage Users",
            MenuIcon::Menu => "Menu",
            MenuIcon::Settings => "Settings",
            MenuIcon::FileText => "Report",
        }
    }

    /// Resolve an icon by name, falling back to `Menu` for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|icon| icon.name() == name)
            .unwrap_or(MenuIcon::Menu)
    }
}

impl From<String> for MenuIcon {
    fn from(name: String) -> Self {
        MenuIcon::from_name(&name)
    }
}

impl From<MenuIcon> for String {
    fn from(icon: MenuIcon) -> Self {
        icon.name().to_string()
    }
}

/// A single navigable destination with display and access-control metadata.
///
/// `id` doubles as the route identifier handed to the page router and is
/// unique across the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
    pub icon: MenuIcon,
    pub is_pinned: bool,
    /// Independent of pin state; hidden entries never reach the sidebar
    pub is_visible: bool,
    pub admin_only: bool,
    /// Sort key within a partition, not necessarily contiguous
    pub order: u32,
}

impl MenuEntry {
    pub fn partition(&self) -> Partition {
        Partition::for_pinned(self.is_pinned)
    }

    /// Whether the given role may see this entry at all
    pub fn is_accessible_to(&self, role: Role) -> bool {
        !self.admin_only || role.is_admin()
    }
}

/// Sidebar section an entry is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    Pinned,
    Unpinned,
}

impl Partition {
    pub fn for_pinned(is_pinned: bool) -> Self {
        if is_pinned {
            Partition::Pinned
        } else {
            Partition::Unpinned
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Partition::Pinned)
    }
}

/// Derived sidebar content for the current role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidebarView {
    pub pinned: Vec<MenuEntry>,
    pub unpinned: Vec<MenuEntry>,
}

impl SidebarView {
    /// The "not used" section and its separator are only drawn when non-empty
    pub fn show_unpinned_section(&self) -> bool {
        !self.unpinned.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.iter().any(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pinned entries first, then unpinned, each in display order
    pub fn iter(&self) -> impl Iterator<Item = &MenuEntry> {
        self.pinned.iter().chain(self.unpinned.iter())
    }
}

/// Every page the host view layer knows how to mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    UserRegistration,
    UserManagement,
    MenuManagement,
    Categories,
    Transactions,
    Reports,
    Cards,
    Settings,
    Login,
    CreateAccount,
    ForgotPassword,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Dashboard,
        Page::UserRegistration,
        Page::UserManagement,
        Page::MenuManagement,
        Page::Categories,
        Page::Transactions,
        Page::Reports,
        Page::Cards,
        Page::Settings,
        Page::Login,
        Page::CreateAccount,
        Page::ForgotPassword,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::UserRegistration => "users",
            Page::UserManagement => "user-management",
            Page::MenuManagement => "menu-management",
            Page::Categories => "categories",
            Page::Transactions => "transactions",
            Page::Reports => "reports",
            Page::Cards => "cards",
            Page::Settings => "config",
            Page::Login => "login",
            Page::CreateAccount => "create-account",
            Page::ForgotPassword => "forgot-password",
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|page| page.route() == route)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::UserRegistration => "User Registration",
            Page::UserManagement => "Manage Users",
            Page::MenuManagement => "Manage Menus",
            Page::Categories => "Categories",
            Page::Transactions => "Transactions",
            Page::Reports => "Reports",
            Page::Cards => "Cards",
            Page::Settings => "Settings",
            Page::Login => "Login",
            Page::CreateAccount => "Create Account",
            Page::ForgotPassword => "Forgot Password",
        }
    }

    /// Authentication pages take over the whole window
    pub fn layout(&self) -> PageLayout {
        match self {
            Page::Login | Page::CreateAccount | Page::ForgotPassword => PageLayout::FullScreen,
            _ => PageLayout::Shell,
        }
    }
}

/// How the host view layer frames a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLayout {
    /// Header, sidebar and main content area
    Shell,
    /// Page fills the window with no header or sidebar
    FullScreen,
}

/// What the host view layer should mount for a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub page: Page,
    /// Canonical route of `page`, not necessarily the route that was requested
    pub route: String,
    pub title: String,
    pub layout: PageLayout,
}

impl From<Page> for ViewDescriptor {
    fn from(page: Page) -> Self {
        Self {
            page,
            route: page.route().to_string(),
            title: page.title().to_string(),
            layout: page.layout(),
        }
    }
}

/// Colour scheme of the whole application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored theme value; anything other than "dark"/"light" is None
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Request to create a new menu entry from the management screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMenuEntryRequest {
    /// Display name (required)
    pub label: String,
    pub icon: MenuIcon,
    /// Route identifier; a fresh one is generated when absent
    pub route: Option<String>,
    pub is_pinned: bool,
    pub is_visible: bool,
    pub admin_only: bool,
}

impl Default for CreateMenuEntryRequest {
    fn default() -> Self {
        Self {
            label: String::new(),
            icon: MenuIcon::default(),
            route: None,
            is_pinned: false,
            is_visible: true,
            admin_only: false,
        }
    }
}

/// Partial update of a menu entry; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenuEntryRequest {
    pub label: Option<String>,
    pub icon: Option<MenuIcon>,
    /// Renames the entry's route identifier
    pub route: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_visible: Option<bool>,
    pub admin_only: Option<bool>,
    pub order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntryResponse {
    pub entry: MenuEntry,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuListResponse {
    pub entries: Vec<MenuEntry>,
}
