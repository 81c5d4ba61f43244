//! Helper methods for RBAC operations

use crate::utils::error::{RbacError, Result};

use super::role::Role;
use super::system::Rbac;
use super::types::RoleRef;

/// Reject names that cannot become registry keys
pub(super) fn validate_role_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RbacError::invalid_role(
            "role name must not be empty or whitespace",
        ));
    }
    Ok(())
}

pub(super) trait RbacHelpers {
    /// Resolve a role argument for a query: names must be registered,
    /// handles are used as-is
    fn resolve_role(&self, role: RoleRef) -> Result<Role>;
}

impl RbacHelpers for Rbac {
    fn resolve_role(&self, role: RoleRef) -> Result<Role> {
        match role {
            RoleRef::Name(name) => self.get_role(&name),
            RoleRef::Role(role) => Ok(role),
        }
    }
}
