//! Role management methods

use crate::utils::error::{RbacError, Result};
use tracing::debug;

use super::helpers::validate_role_name;
use super::role::Role;
use super::system::Rbac;
use super::types::RoleRef;

impl Rbac {
    /// Get role by name
    pub fn get_role(&self, name: &str) -> Result<Role> {
        self.lookup(name)
            .cloned()
            .ok_or_else(|| RbacError::unknown_role(name))
    }

    /// Check whether a role is registered
    ///
    /// A name matches any role registered under it. A handle matches only if
    /// it is the very handle registered under its name: another role that
    /// happens to share the name is not a member. Names that could never be
    /// registered, such as `""`, are simply not members.
    pub fn has_role<R: Into<RoleRef>>(&self, role: R) -> bool {
        match role.into() {
            RoleRef::Name(name) => self.index.contains_key(&name),
            RoleRef::Role(role) => self
                .lookup(role.name())
                .is_some_and(|registered| registered.ptr_eq(&role)),
        }
    }

    /// Add a role without parents
    ///
    /// A name that is already registered reuses the registered role, so adding
    /// the same name twice is idempotent. Returns the registered handle.
    ///
    /// A role whose name is empty or whitespace cannot be registered and fails
    /// with `InvalidRole`.
    pub fn add_role<R: Into<RoleRef>>(&mut self, role: R) -> Result<Role> {
        self.add_role_with_parents(role, Vec::<RoleRef>::new())
    }

    /// Add a role and make it inherit from `parents`
    ///
    /// Parent names that are not registered are auto-created when
    /// `create_missing_roles` is on and rejected with `UnknownRole` otherwise.
    /// Parent handles are linked as given and registered only when
    /// `create_missing_roles` is on and their name is still free.
    ///
    /// Every parent is resolved and checked before anything is linked or
    /// registered, so a failed call leaves the registry untouched.
    pub fn add_role_with_parents<R, I, P>(&mut self, role: R, parents: I) -> Result<Role>
    where
        R: Into<RoleRef>,
        I: IntoIterator<Item = P>,
        P: Into<RoleRef>,
    {
        let role = self.resolve_new_role(role.into())?;

        let mut resolved: Vec<(Role, bool)> = Vec::new();
        for parent in parents {
            let parent = self.resolve_parent(parent.into(), &role, &resolved)?;
            if parent.0.ptr_eq(&role) || parent.0.has_ancestor(&role) {
                return Err(RbacError::circular_inheritance(format!(
                    "role '{}' cannot inherit from '{}'",
                    role.name(),
                    parent.0.name()
                )));
            }
            resolved.push(parent);
        }

        for (parent, register) in &resolved {
            if *register {
                self.register(parent.clone());
            }
            role.add_parent(parent)?;
        }
        self.register(role.clone());

        debug!(
            "Added role '{}' with {} parent(s)",
            role.name(),
            resolved.len()
        );
        Ok(role)
    }

    /// Role that `add_role` will register: a registered role reused by name,
    /// a fresh role for an unknown name, or the given handle
    fn resolve_new_role(&self, role: RoleRef) -> Result<Role> {
        validate_role_name(role.name())?;

        Ok(match role {
            RoleRef::Name(name) => match self.lookup(&name) {
                Some(existing) => existing.clone(),
                None => Role::new(name),
            },
            RoleRef::Role(role) => role,
        })
    }

    /// Resolve one parent reference to a handle and whether it must be registered
    fn resolve_parent(
        &self,
        parent: RoleRef,
        child: &Role,
        pending: &[(Role, bool)],
    ) -> Result<(Role, bool)> {
        match parent {
            RoleRef::Name(name) => {
                validate_role_name(&name)?;
                if let Some(existing) = self.lookup(&name) {
                    return Ok((existing.clone(), false));
                }
                if name == child.name() {
                    return Ok((child.clone(), false));
                }
                if let Some((created, _)) = pending.iter().find(|(p, _)| p.name() == name) {
                    return Ok((created.clone(), false));
                }
                if self.create_missing_roles {
                    debug!("Creating missing parent role '{}'", name);
                    Ok((Role::new(name), true))
                } else {
                    Err(RbacError::unknown_role(name))
                }
            }
            RoleRef::Role(role) => {
                let register = self.create_missing_roles
                    && self.lookup(role.name()).is_none()
                    && !pending.iter().any(|(p, _)| p.name() == role.name());
                if register {
                    validate_role_name(role.name())?;
                }
                Ok((role, register))
            }
        }
    }
}
