//! Permission checking methods

use crate::utils::error::Result;
use tracing::debug;

use super::assertion::Assertion;
use super::helpers::RbacHelpers;
use super::role::Role;
use super::system::Rbac;
use super::types::{PermissionCheck, RoleRef};

impl Rbac {
    /// Decide whether `role` is granted `permission`
    ///
    /// A name is resolved through the registry and fails with `UnknownRole`
    /// if absent; a handle is used as-is, registered or not. The hierarchy is
    /// checked first and the assertion is consulted only when the hierarchy
    /// grants, so the assertion can veto but never widen access.
    pub fn is_granted<R: Into<RoleRef>>(
        &self,
        role: R,
        permission: &str,
        assertion: Option<&dyn Assertion>,
    ) -> Result<bool> {
        let role = self.resolve_role(role.into())?;
        Ok(self.decide(&role, permission, assertion))
    }

    /// Check that every permission in `permissions` is granted
    pub fn is_granted_all<R, S>(
        &self,
        role: R,
        permissions: &[S],
        assertion: Option<&dyn Assertion>,
    ) -> Result<bool>
    where
        R: Into<RoleRef>,
        S: AsRef<str>,
    {
        let role = self.resolve_role(role.into())?;
        Ok(permissions
            .iter()
            .all(|permission| self.decide(&role, permission.as_ref(), assertion)))
    }

    /// Check that at least one permission in `permissions` is granted
    pub fn is_granted_any<R, S>(
        &self,
        role: R,
        permissions: &[S],
        assertion: Option<&dyn Assertion>,
    ) -> Result<bool>
    where
        R: Into<RoleRef>,
        S: AsRef<str>,
    {
        let role = self.resolve_role(role.into())?;
        Ok(permissions
            .iter()
            .any(|permission| self.decide(&role, permission.as_ref(), assertion)))
    }

    /// Detailed permission check
    pub fn check_permission_detailed<R: Into<RoleRef>>(
        &self,
        role: R,
        permission: &str,
        assertion: Option<&dyn Assertion>,
    ) -> Result<PermissionCheck> {
        let role = self.resolve_role(role.into())?;
        let sources = role.permission_sources(permission);

        if sources.is_empty() {
            return Ok(PermissionCheck {
                granted: false,
                granted_by_roles: vec![],
                denial_reason: Some(format!("Missing permission: {}", permission)),
            });
        }

        if let Some(assertion) = assertion {
            if !assertion.assert(self, &role, permission) {
                return Ok(PermissionCheck {
                    granted: false,
                    granted_by_roles: vec![],
                    denial_reason: Some(format!("Assertion denied: {}", permission)),
                });
            }
        }

        Ok(PermissionCheck {
            granted: true,
            granted_by_roles: sources.iter().map(|r| r.name().to_string()).collect(),
            denial_reason: None,
        })
    }

    fn decide(&self, role: &Role, permission: &str, assertion: Option<&dyn Assertion>) -> bool {
        if !role.has_permission(permission) {
            debug!("Denied '{}' to role '{}': not granted", permission, role.name());
            return false;
        }

        let granted = match assertion {
            Some(assertion) => assertion.assert(self, role, permission),
            None => true,
        };

        if granted {
            debug!("Granted '{}' to role '{}'", permission, role.name());
        } else {
            debug!("Denied '{}' to role '{}': assertion failed", permission, role.name());
        }
        granted
    }
}
