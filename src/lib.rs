//! # rbac-engine
//!
//! An in-memory role-based access control engine.
//!
//! Roles hold permissions and inherit the permissions of their parents. The
//! [`Rbac`] registry names roles, links them into a hierarchy and answers
//! "is this role granted this permission?", optionally letting a
//! caller-supplied [`Assertion`] veto a grant the hierarchy allows.
//!
//! ## Quick Start
//!
//! ```rust
//! use rbac_engine::{Rbac, Role};
//!
//! fn main() -> rbac_engine::Result<()> {
//!     let mut rbac = Rbac::new();
//!
//!     let viewer = rbac.add_role("viewer")?;
//!     viewer.add_permission("post.view");
//!
//!     let editor = rbac.add_role_with_parents("editor", ["viewer"])?;
//!     editor.add_permission("post.edit");
//!
//!     assert!(rbac.is_granted("editor", "post.view", None)?);
//!     assert!(!rbac.is_granted("viewer", "post.edit", None)?);
//!
//!     // Only the author may edit
//!     let is_author = |_: &Rbac, role: &Role, _: &str| role.name() == "editor";
//!     assert!(rbac.is_granted("editor", "post.edit", Some(&is_author))?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AggregateMode, Assertion, AssertionAggregate, PermissionCheck, Rbac, Role, RoleInterface,
    RoleRef,
};
pub use config::RbacConfig;
pub use utils::error::{RbacError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
