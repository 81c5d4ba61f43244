//! RBAC engine configuration

use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RbacConfig {
    /// Auto-create parent roles referenced by name but not yet registered
    #[serde(default)]
    pub create_missing_roles: bool,
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.create_missing_roles {
            self.create_missing_roles = other.create_missing_roles;
        }
        self
    }
}
