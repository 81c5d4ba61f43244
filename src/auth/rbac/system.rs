//! RBAC registry core functionality

use crate::config::RbacConfig;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::role::Role;

/// RBAC registry and decision engine
///
/// Owns the name-to-role mapping. All mutation goes through `&mut self`;
/// callers sharing one registry across threads wrap it in their own lock.
#[derive(Debug, Default)]
pub struct Rbac {
    /// Registered roles in registration order
    pub(super) roles: Vec<Role>,
    /// Role name to position in `roles`
    pub(super) index: HashMap<String, usize>,
    /// Auto-create unknown parent roles referenced by name
    pub(super) create_missing_roles: bool,
}

impl Rbac {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry configured from `config`
    pub fn with_config(config: &RbacConfig) -> Self {
        debug!(
            "Creating RBAC registry (create_missing_roles: {})",
            config.create_missing_roles
        );
        Self {
            create_missing_roles: config.create_missing_roles,
            ..Self::default()
        }
    }

    /// Whether unknown parent names are auto-created by `add_role`
    pub fn create_missing_roles(&self) -> bool {
        self.create_missing_roles
    }

    /// Only affects subsequent `add_role` calls
    pub fn set_create_missing_roles(&mut self, create_missing_roles: bool) -> &mut Self {
        self.create_missing_roles = create_missing_roles;
        self
    }

    /// All registered roles in registration order
    pub fn get_roles(&self) -> Vec<Role> {
        self.roles.clone()
    }

    /// Names of all registered roles in registration order
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(Role::name).collect()
    }

    /// Number of registered roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether no role has been registered yet
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Register `role` under its name, replacing a different handle of the same name
    pub(super) fn register(&mut self, role: Role) {
        match self.index.get(role.name()) {
            Some(&position) => {
                if !self.roles[position].ptr_eq(&role) {
                    warn!(
                        "Replacing registered role '{}' with a different role handle",
                        role.name()
                    );
                    self.roles[position] = role;
                }
            }
            None => {
                debug!("Registering role '{}'", role.name());
                self.index.insert(role.name().to_string(), self.roles.len());
                self.roles.push(role);
            }
        }
    }

    /// Registered handle for `name`, if any
    pub(super) fn lookup(&self, name: &str) -> Option<&Role> {
        self.index.get(name).map(|&position| &self.roles[position])
    }
}
