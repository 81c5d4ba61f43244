//! Role entity and the inheritance graph between roles
//!
//! A [`Role`] is a cheap, clonable handle: clones share the same underlying
//! node, so identity is preserved across the registry, assertions and the
//! caller. Parent links are strong handles, child links are weak
//! back-references, so the graph never owns itself.

use parking_lot::{Mutex, RwLock, const_mutex};
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Weak};
use tracing::debug;

use crate::utils::error::{RbacError, Result};

/// Serialises every `add_parent` so the cycle check and the link it guards
/// happen as one step
static LINK_LOCK: Mutex<()> = const_mutex(());

/// Capability set every role-like entity exposes to the engine
pub trait RoleInterface {
    /// Role name
    fn name(&self) -> &str;

    /// Whether the role or any of its ancestors owns the permission
    fn has_permission(&self, permission: &str) -> bool;

    /// Direct parents in declaration order
    fn parents(&self) -> Vec<Role>;

    /// Inherit from `parent`
    fn add_parent(&self, parent: &Role) -> Result<()>;
}

#[derive(Default)]
struct RoleState {
    permissions: HashSet<String>,
    parents: Vec<Role>,
    children: Vec<Weak<RoleNode>>,
}

struct RoleNode {
    name: String,
    state: RwLock<RoleState>,
}

/// Role definition
#[derive(Clone)]
pub struct Role {
    node: Arc<RoleNode>,
}

impl Role {
    /// Create a standalone role with no permissions and no parents
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            node: Arc::new(RoleNode {
                name: name.into(),
                state: RwLock::new(RoleState::default()),
            }),
        }
    }

    /// Create a role owning the given permissions
    pub fn with_permissions<S, I, P>(name: S, permissions: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let role = Self::new(name);
        for permission in permissions {
            role.add_permission(permission);
        }
        role
    }

    /// Role name
    pub fn name(&self) -> &str {
        &self.node.name
    }

    /// Add a permission owned directly by this role
    pub fn add_permission<S: Into<String>>(&self, permission: S) {
        self.node.state.write().permissions.insert(permission.into());
    }

    /// Permissions owned directly by this role, sorted
    pub fn permissions(&self) -> Vec<String> {
        let mut permissions: Vec<String> =
            self.node.state.read().permissions.iter().cloned().collect();
        permissions.sort();
        permissions
    }

    /// Permissions owned by this role or inherited from any ancestor, sorted
    pub fn all_permissions(&self) -> Vec<String> {
        let mut collected = HashSet::new();
        self.walk(|role| {
            collected.extend(role.node.state.read().permissions.iter().cloned());
            false
        });
        let mut permissions: Vec<String> = collected.into_iter().collect();
        permissions.sort();
        permissions
    }

    /// Whether this role owns the permission itself, ignoring ancestors
    pub fn owns_permission(&self, permission: &str) -> bool {
        self.node.state.read().permissions.contains(permission)
    }

    /// Check if the role or any ancestor has a permission
    ///
    /// The role itself is checked first, then each parent in declaration
    /// order, depth-first. Every ancestor is visited once, so diamond-shaped
    /// hierarchies are walked without repetition.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.walk(|role| role.owns_permission(permission))
    }

    /// Roles on the inheritance walk that own `permission` directly, in walk order
    pub fn permission_sources(&self, permission: &str) -> Vec<Role> {
        let mut sources = Vec::new();
        self.walk(|role| {
            if role.owns_permission(permission) {
                sources.push(role.clone());
            }
            false
        });
        sources
    }

    /// Direct parents in declaration order
    pub fn parents(&self) -> Vec<Role> {
        self.node.state.read().parents.clone()
    }

    /// Direct children in the order they were linked
    ///
    /// Children that have since been dropped by every owner are skipped.
    pub fn children(&self) -> Vec<Role> {
        self.node
            .state
            .read()
            .children
            .iter()
            .filter_map(Weak::upgrade)
            .map(|node| Role { node })
            .collect()
    }

    /// Whether `other` is a parent of this role, directly or transitively
    pub fn has_ancestor(&self, other: &Role) -> bool {
        !self.ptr_eq(other) && self.walk(|role| role.ptr_eq(other))
    }

    /// Whether `other` inherits from this role, directly or transitively
    pub fn has_descendant(&self, other: &Role) -> bool {
        other.has_ancestor(self)
    }

    /// Inherit from `parent`
    ///
    /// Links both directions under the write locks of both roles. Linking a
    /// parent that is already linked is a no-op. Fails without touching
    /// either role when the link would make a role its own ancestor, also
    /// when other threads are linking the same roles concurrently.
    pub fn add_parent(&self, parent: &Role) -> Result<()> {
        let _link = LINK_LOCK.lock();

        if self.ptr_eq(parent) {
            return Err(RbacError::circular_inheritance(format!(
                "role '{}' cannot inherit from itself",
                self.name()
            )));
        }
        if parent.has_ancestor(self) {
            return Err(RbacError::circular_inheritance(format!(
                "role '{}' already inherits from '{}'",
                parent.name(),
                self.name()
            )));
        }

        // Only one link is in progress at a time, so the lock order is free
        let mut own = self.node.state.write();
        let mut theirs = parent.node.state.write();

        if own.parents.iter().any(|existing| existing.ptr_eq(parent)) {
            return Ok(());
        }

        own.parents.push(parent.clone());
        theirs.children.push(Arc::downgrade(&self.node));

        debug!("Role '{}' now inherits from '{}'", self.name(), parent.name());
        Ok(())
    }

    /// Whether both handles point at the same role
    pub fn ptr_eq(&self, other: &Role) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    fn id(&self) -> usize {
        Arc::as_ptr(&self.node) as usize
    }

    /// Depth-first walk over the role and its ancestors, each visited once.
    /// Stops as soon as `visitor` returns true and reports whether it did.
    fn walk<F>(&self, mut visitor: F) -> bool
    where
        F: FnMut(&Role) -> bool,
    {
        let mut visited = HashSet::new();
        self.walk_from(&mut visited, &mut visitor)
    }

    fn walk_from<F>(&self, visited: &mut HashSet<usize>, visitor: &mut F) -> bool
    where
        F: FnMut(&Role) -> bool,
    {
        if !visited.insert(self.id()) {
            return false;
        }
        if visitor(self) {
            return true;
        }
        // Parents are cloned out so no lock is held while recursing
        self.parents()
            .iter()
            .any(|parent| parent.walk_from(visited, visitor))
    }
}

impl RoleInterface for Role {
    fn name(&self) -> &str {
        Role::name(self)
    }

    fn has_permission(&self, permission: &str) -> bool {
        Role::has_permission(self, permission)
    }

    fn parents(&self) -> Vec<Role> {
        Role::parents(self)
    }

    fn add_parent(&self, parent: &Role) -> Result<()> {
        Role::add_parent(self, parent)
    }
}

/// Roles compare by identity: two roles built with the same name are distinct
impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Role {}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parents: Vec<String> = self.parents().iter().map(|p| p.name().to_string()).collect();
        let children: Vec<String> = self
            .children()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        f.debug_struct("Role")
            .field("name", &self.name())
            .field("permissions", &self.permissions())
            .field("parents", &parents)
            .field("children", &children)
            .finish()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
