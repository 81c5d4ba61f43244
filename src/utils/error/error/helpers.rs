//! Helper functions for creating specific error types

use super::types::RbacError;

/// Helper functions for creating specific errors
impl RbacError {
    pub fn invalid_role<S: Into<String>>(message: S) -> Self {
        Self::InvalidRole(message.into())
    }

    pub fn unknown_role<S: Into<String>>(name: S) -> Self {
        Self::UnknownRole(name.into())
    }

    pub fn circular_inheritance<S: Into<String>>(message: S) -> Self {
        Self::CircularInheritance(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }
}

impl RbacError {
    /// Whether the error was raised for an argument that does not denote a role
    pub fn is_invalid_role(&self) -> bool {
        matches!(self, Self::InvalidRole(_))
    }

    /// Whether the error was raised for a role name missing from the registry
    pub fn is_unknown_role(&self) -> bool {
        matches!(self, Self::UnknownRole(_))
    }

    pub fn is_circular_inheritance(&self) -> bool {
        matches!(self, Self::CircularInheritance(_))
    }
}
