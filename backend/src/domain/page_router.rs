//! # Page Router
//!
//! Tracks the selected route and maps routes to the page the host view layer
//! should mount.
//!
//! Any route without a known page, including custom entries created from the
//! menu management screen, renders the dashboard.

use log::{debug, info};
use shared::{Page, ViewDescriptor};

pub const DEFAULT_ROUTE: &str = "dashboard";

#[derive(Debug, Clone)]
pub struct PageRouter {
    current: String,
}

impl PageRouter {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            current: initial_route.into(),
        }
    }

    /// Make `route` the active route; unknown routes are accepted as-is
    pub fn select(&mut self, route: impl Into<String>) {
        let route = route.into();
        info!("📄 Navigating from '{}' to '{}'", self.current, route);
        self.current = route;
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Whether a sidebar entry should be highlighted
    pub fn is_active(&self, route: &str) -> bool {
        self.current == route
    }

    /// View for `route`, falling back to the dashboard for unknown routes
    pub fn render(route: &str) -> ViewDescriptor {
        let page = Page::from_route(route).unwrap_or_else(|| {
            debug!("No page registered for route '{}', rendering dashboard", route);
            Page::Dashboard
        });
        ViewDescriptor::from(page)
    }

    /// View for the active route
    pub fn active_view(&self) -> ViewDescriptor {
        Self::render(&self.current)
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTE)
    }
}
