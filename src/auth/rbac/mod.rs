//! Role-Based Access Control (RBAC) engine
//!
//! This module provides the role hierarchy, the role registry and the
//! permission decision procedure with its assertion hook.

mod assertion;
mod helpers;
mod permissions;
mod role;
mod roles;
mod system;
mod types;

// Re-export public types and structs
#[cfg(test)]
pub use assertion::MockAssertion;
pub use assertion::{AggregateMode, Assertion, AssertionAggregate};
pub use role::{Role, RoleInterface};
pub use system::Rbac;
pub use types::{PermissionCheck, RoleRef};
