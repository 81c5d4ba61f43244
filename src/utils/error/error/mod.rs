//! Error handling for the RBAC engine
//!
//! This module defines all error types used throughout the engine.

mod helpers;
mod types;

pub use types::{RbacError, Result};
