//! Configuration data models
//!
//! This module defines all configuration structures used by the engine.

pub mod rbac;

// Re-export all configuration types
pub use rbac::*;
