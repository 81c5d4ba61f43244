use super::error::RbacError;

/// Coarse classification of engine errors
///
/// Every error the engine raises is fatal to the operation that raised it;
/// the category only tells the embedding application who has to fix it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Misuse of the API: bad role arguments or graph shapes
    Caller,
    /// Malformed or inconsistent configuration
    Configuration,
    /// Failure reading configuration from disk
    Io,
}

pub struct ErrorUtils;

impl ErrorUtils {
    pub fn categorize(error: &RbacError) -> ErrorCategory {
        match error {
            RbacError::InvalidRole(_)
            | RbacError::UnknownRole(_)
            | RbacError::CircularInheritance(_) => ErrorCategory::Caller,
            RbacError::Config(_) | RbacError::Yaml(_) | RbacError::Serialization(_) => {
                ErrorCategory::Configuration
            }
            RbacError::Io(_) => ErrorCategory::Io,
        }
    }

    /// Short machine-readable code for an error, suitable for structured logs
    pub fn error_code(error: &RbacError) -> &'static str {
        match error {
            RbacError::InvalidRole(_) => "INVALID_ROLE",
            RbacError::UnknownRole(_) => "UNKNOWN_ROLE",
            RbacError::CircularInheritance(_) => "CIRCULAR_INHERITANCE",
            RbacError::Config(_) => "CONFIG_ERROR",
            RbacError::Io(_) => "IO_ERROR",
            RbacError::Yaml(_) => "YAML_ERROR",
            RbacError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
