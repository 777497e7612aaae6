//! # Domain Module
//!
//! Navigation and authorization logic for the Fin application, independent of
//! any view layer or storage mechanism.
//!
//! ## Module Organization
//!
//! - **role_context**: the session's active role (`normal` or `admin`)
//! - **menu_registry**: CRUD over menu entries with strict not-found errors
//! - **sidebar_filter**: role and visibility filtering, pinned/unpinned split
//! - **menu_mutator**: pin, drag and visibility commands that ignore stale ids
//! - **page_router**: active route and route-to-page mapping
//! - **theme_service**: the persisted light/dark flag
//!
//! ## Rules
//!
//! - Menu entry ids are unique and double as route identifiers
//! - Admin-only entries are never shown to a normal user
//! - Sidebar content is derived on every read, never cached
//! - Unknown routes render the dashboard

pub mod commands;
pub mod menu_mutator;
pub mod menu_registry;
pub mod models;
pub mod page_router;
pub mod role_context;
pub mod sidebar_filter;
pub mod theme_service;

pub use menu_mutator::MenuMutator;
pub use menu_registry::MenuRegistry;
pub use models::MenuError;
pub use page_router::PageRouter;
pub use role_context::RoleContext;
pub use sidebar_filter::SidebarFilter;
pub use theme_service::ThemeService;
