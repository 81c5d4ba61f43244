//! Error types for the RBAC engine

use thiserror::Error;

/// Result type alias for the RBAC engine
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the RBAC engine
#[derive(Error, Debug)]
pub enum RbacError {
    /// The argument meant to denote a role is not a usable role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// A role name was referenced that the registry does not know
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Linking the roles would make a role its own ancestor
    #[error("Circular inheritance: {0}")]
    CircularInheritance(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
