//! Domain-level command types.
//!
//! The menu registry works on these internal commands. Host layers build them
//! from the public DTOs in the `shared` crate through the `From` impls below.

pub mod menu {
    use shared::{CreateMenuEntryRequest, MenuIcon, UpdateMenuEntryRequest};

    /// Input for creating a new menu entry.
    #[derive(Debug, Clone)]
    pub struct CreateMenuEntryCommand {
        pub label: String,
        pub icon: MenuIcon,
        pub route: Option<String>,
        pub is_pinned: bool,
        pub is_visible: bool,
        pub admin_only: bool,
    }

    /// Partial update of an existing menu entry.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateMenuEntryCommand {
        pub label: Option<String>,
        pub icon: Option<MenuIcon>,
        pub route: Option<String>,
        pub is_pinned: Option<bool>,
        pub is_visible: Option<bool>,
        pub admin_only: Option<bool>,
        pub order: Option<u32>,
    }

    impl From<CreateMenuEntryRequest> for CreateMenuEntryCommand {
        fn from(request: CreateMenuEntryRequest) -> Self {
            Self {
                label: request.label,
                icon: request.icon,
                route: request.route,
                is_pinned: request.is_pinned,
                is_visible: request.is_visible,
                admin_only: request.admin_only,
            }
        }
    }

    impl From<UpdateMenuEntryRequest> for UpdateMenuEntryCommand {
        fn from(request: UpdateMenuEntryRequest) -> Self {
            Self {
                label: request.label,
                icon: request.icon,
                route: request.route,
                is_pinned: request.is_pinned,
                is_visible: request.is_visible,
                admin_only: request.admin_only,
                order: request.order,
            }
        }
    }
}
