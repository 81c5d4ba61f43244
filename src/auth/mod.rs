//! Authorization
//!
//! This module hosts the role-based access control engine.

pub mod rbac;
