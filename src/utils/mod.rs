//! Utility modules for the RBAC engine
//!
//! ## Module Organization
//!
//! - **error**: Error type and error classification
//! - **logging**: `tracing` subscriber setup for embedding applications

pub mod error;
pub mod logging;

// Re-export commonly used types from each module for convenience
pub use error::{ErrorCategory, ErrorUtils, RbacError, Result};
pub use logging::{LogLevel, LoggingUtils};
