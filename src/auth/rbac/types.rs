//! RBAC type definitions

use super::role::Role;

/// A reference to a role, either by registry name or by handle
#[derive(Debug, Clone)]
pub enum RoleRef {
    /// Role looked up (or created) by name in the registry
    Name(String),
    /// Role handle used as-is
    Role(Role),
}

impl RoleRef {
    /// Name of the referenced role
    pub fn name(&self) -> &str {
        match self {
            RoleRef::Name(name) => name,
            RoleRef::Role(role) => role.name(),
        }
    }
}

impl From<&str> for RoleRef {
    fn from(name: &str) -> Self {
        RoleRef::Name(name.to_string())
    }
}

impl From<String> for RoleRef {
    fn from(name: String) -> Self {
        RoleRef::Name(name)
    }
}

impl From<&String> for RoleRef {
    fn from(name: &String) -> Self {
        RoleRef::Name(name.clone())
    }
}

impl From<Role> for RoleRef {
    fn from(role: Role) -> Self {
        RoleRef::Role(role)
    }
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        RoleRef::Role(role.clone())
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Roles on the inheritance walk that own the permission directly
    pub granted_by_roles: Vec<String>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<String>,
}
