//! # Fin Backend
//!
//! Navigation, authorization and preference logic for the Fin personal
//! finance application.
//!
//! The crate is UI-agnostic: a host view layer reads the derived sidebar and
//! the active view from [`AppState`], and forwards clicks, drags and settings
//! changes back as plain method calls.
//!
//! ## Architecture
//!
//! ```text
//! Host view layer
//!     ↓
//! AppState (session)
//!     ↓
//! Domain (role context, menu registry, sidebar filter, router, theme)
//!     ↓
//! Storage (preferences)
//! ```
//!
//! All operations are synchronous. Each mutation completes before the next
//! read, so a reader never sees a half-applied change.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use shared::{
    CreateMenuEntryRequest, MenuEntryResponse, MenuListResponse, Role, SidebarView, ThemeMode,
    UpdateMenuEntryRequest, ViewDescriptor,
};
use std::sync::Arc;

pub use config::BackendConfig;
pub use domain::*;
pub use storage::*;

/// Everything a running session holds
pub struct AppState {
    pub role_context: RoleContext,
    pub menu_registry: MenuRegistry,
    pub page_router: PageRouter,
    pub theme_service: ThemeService,
    sidebar_collapsed: bool,
}

impl AppState {
    /// Seed a session with the default menu and the configured role and route
    pub fn new(config: &BackendConfig, storage: Arc<dyn PreferenceStorage>) -> Result<Self> {
        let theme_service = ThemeService::load(storage, config.system_prefers_dark)?;

        Ok(Self {
            role_context: RoleContext::new(config.initial_role),
            menu_registry: MenuRegistry::with_defaults(),
            page_router: PageRouter::new(config.initial_route.clone()),
            theme_service,
            sidebar_collapsed: false,
        })
    }

    /// Sidebar content for the current role
    pub fn sidebar(&self) -> SidebarView {
        SidebarFilter::sidebar(&self.menu_registry, &self.role_context)
    }

    /// Every entry for the menu management table, hidden ones included
    pub fn management_menu(&self) -> MenuListResponse {
        MenuListResponse {
            entries: SidebarFilter::management_entries(&self.menu_registry),
        }
    }

    pub fn role(&self) -> Role {
        self.role_context.role()
    }

    pub fn set_role(&mut self, role: Role) {
        self.role_context.set_role(role);
    }

    pub fn select_page(&mut self, route: &str) {
        self.page_router.select(route);
    }

    pub fn active_view(&self) -> ViewDescriptor {
        self.page_router.active_view()
    }

    pub fn create_menu_entry(&mut self, request: CreateMenuEntryRequest) -> Result<MenuEntryResponse, MenuError> {
        let entry = self.menu_registry.create(request.into())?;
        Ok(MenuEntryResponse {
            entry,
            success_message: "Menu created successfully".to_string(),
        })
    }

    pub fn update_menu_entry(
        &mut self,
        id: &str,
        request: UpdateMenuEntryRequest,
    ) -> Result<MenuEntryResponse, MenuError> {
        let entry = self.menu_registry.update(id, request.into())?;
        Ok(MenuEntryResponse {
            entry,
            success_message: "Menu updated successfully".to_string(),
        })
    }

    pub fn delete_menu_entry(&mut self, id: &str) -> Result<(), MenuError> {
        self.menu_registry.delete(id)
    }

    /// Pin, drag and visibility commands that ignore stale ids
    pub fn menu_mutator(&mut self) -> MenuMutator<'_> {
        MenuMutator::new(&mut self.menu_registry)
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme_service.mode()
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        self.theme_service.toggle()
    }

    pub fn is_sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_sidebar_collapsed(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

/// Build a session backed by `preferences.yaml` in the configured data directory
pub fn initialize_backend(config: &BackendConfig) -> Result<AppState> {
    info!("Setting up preference storage");
    let connection = FileConnection::new(&config.data_directory)?;
    let storage = Arc::new(YamlPreferenceRepository::new(connection));

    info!("Setting up session state");
    let app_state = AppState::new(config, storage)?;

    info!(
        "Session ready: role={}, route={}, theme={}",
        app_state.role(),
        app_state.page_router.current(),
        app_state.theme().as_str()
    );
    Ok(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{MenuEntry, MenuIcon, Page};
    use tempfile::TempDir;

    fn setup_state(role: Role) -> AppState {
        let mut config = BackendConfig::new("unused");
        config.initial_role = role;
        AppState::new(&config, Arc::new(InMemoryPreferenceStore::new())).unwrap()
    }

    fn entry(id: &str, order: u32, is_pinned: bool, admin_only: bool) -> MenuEntry {
        MenuEntry {
            id: id.to_string(),
            label: id.to_string(),
            icon: MenuIcon::Home,
            is_pinned,
            is_visible: true,
            admin_only,
            order,
        }
    }

    fn two_entry_state() -> AppState {
        let mut state = setup_state(Role::Normal);
        state.menu_registry = MenuRegistry::with_entries(vec![
            entry("dashboard", 1, true, false),
            entry("user-management", 5, false, true),
        ])
        .unwrap();
        state
    }

    #[test]
    fn test_normal_role_sees_only_dashboard() {
        let state = two_entry_state();
        let sidebar = state.sidebar();

        let pinned: Vec<&str> = sidebar.pinned.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(pinned, vec!["dashboard"]);
        assert!(sidebar.unpinned.is_empty());
    }

    #[test]
    fn test_role_switch_reveals_admin_entry_immediately() {
        let mut state = two_entry_state();
        assert!(!state.sidebar().contains("user-management"));

        state.set_role(Role::Admin);
        let sidebar = state.sidebar();
        let unpinned: Vec<&str> = sidebar.unpinned.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unpinned, vec!["user-management"]);
    }

    #[test]
    fn test_delete_unknown_entry_strict_vs_tolerant() {
        let mut state = setup_state(Role::Admin);
        let before = state.menu_registry.list();

        let result = state.delete_menu_entry("unknown-id");
        assert_eq!(result, Err(MenuError::NotFound("unknown-id".to_string())));

        state.menu_mutator().delete("unknown-id");
        assert_eq!(state.menu_registry.list(), before);
    }

    #[test]
    fn test_created_entry_reaches_sidebar_and_falls_back_to_dashboard() {
        let mut state = setup_state(Role::Admin);
        let response = state
            .create_menu_entry(CreateMenuEntryRequest {
                label: "Budgets".to_string(),
                icon: MenuIcon::FileText,
                route: Some("budgets".to_string()),
                is_pinned: true,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.success_message, "Menu created successfully");
        assert_eq!(state.sidebar().pinned.last().map(|e| e.id.as_str()), Some("budgets"));

        state.select_page("budgets");
        assert_eq!(state.active_view().page, Page::Dashboard);
    }

    #[test]
    fn test_update_and_hide_entry() {
        let mut state = setup_state(Role::Admin);
        let response = state
            .update_menu_entry(
                "reports",
                UpdateMenuEntryRequest {
                    is_visible: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(!response.entry.is_visible);
        assert!(!state.sidebar().contains("reports"));
        assert!(state.management_menu().entries.iter().any(|e| e.id == "reports"));
    }

    #[test]
    fn test_management_menu_lists_every_entry() {
        let mut state = setup_state(Role::Normal);
        state.menu_mutator().set_visible("cards", false);

        let entries = state.management_menu().entries;
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().any(|e| e.id == "user-management"));
        assert!(entries.iter().any(|e| e.id == "cards"));
        assert_eq!(state.sidebar().len(), 4);
    }

    #[test]
    fn test_drag_between_sections() {
        let mut state = setup_state(Role::Admin);
        state.menu_mutator().pin("cards");
        state.menu_mutator().unpin("dashboard");

        let sidebar = state.sidebar();
        assert_eq!(sidebar.pinned.last().map(|e| e.id.as_str()), Some("cards"));
        assert_eq!(sidebar.unpinned.last().map(|e| e.id.as_str()), Some("dashboard"));
    }

    #[test]
    fn test_navigation_and_layout() {
        let mut state = setup_state(Role::Admin);
        assert_eq!(state.active_view().page, Page::Dashboard);

        state.select_page("login");
        assert_eq!(state.active_view().layout, shared::PageLayout::FullScreen);
        assert!(state.page_router.is_active("login"));
    }

    #[test]
    fn test_sidebar_collapse_toggle() {
        let mut state = setup_state(Role::Admin);
        assert!(!state.is_sidebar_collapsed());
        state.toggle_sidebar_collapsed();
        assert!(state.is_sidebar_collapsed());
    }

    #[test]
    fn test_initialize_backend_persists_theme() {
        let temp_dir = TempDir::new().unwrap();
        let config = BackendConfig::new(temp_dir.path().join("fin"));

        let mut state = initialize_backend(&config).unwrap();
        assert_eq!(state.theme(), ThemeMode::Light);
        assert_eq!(state.toggle_theme().unwrap(), ThemeMode::Dark);

        let restarted = initialize_backend(&config).unwrap();
        assert_eq!(restarted.theme(), ThemeMode::Dark);
        assert_eq!(restarted.role(), Role::Admin);
    }
}
