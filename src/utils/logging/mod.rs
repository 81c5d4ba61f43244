//! Logging utilities
//!
//! The engine logs through `tracing`; this module only helps embedding
//! applications and tests install a subscriber.

pub mod types;
pub mod utils;


pub use types::LogLevel;
pub use utils::LoggingUtils;
