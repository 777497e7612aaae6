use log::info;
use shared::Role;

/// Holds the active role for the session.
///
/// Consumers receive the context by reference and derive from it on every
/// read, so a role switch is visible to the very next query.
#[derive(Debug, Clone, Default)]
pub struct RoleContext {
    role: Role,
}

impl RoleContext {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        if self.role != role {
            info!("Switching role from {} to {}", self.role, role);
        }
        self.role = role;
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
