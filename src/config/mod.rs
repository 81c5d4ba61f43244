//! Configuration management for the RBAC engine
//!
//! This module handles loading and serialising engine configuration. Role
//! definitions are never loaded from configuration; only engine behaviour is.

pub mod models;

pub use models::*;

use crate::utils::error::{RbacError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding `create_missing_roles`
pub const CREATE_MISSING_ROLES_ENV: &str = "RBAC_CREATE_MISSING_ROLES";

impl RbacConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading RBAC configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)?;

        let config = Self::from_yaml_str(&content)?;

        debug!("RBAC configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading RBAC configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(CREATE_MISSING_ROLES_ENV) {
            config.create_missing_roles = value.trim().parse().map_err(|e| {
                RbacError::Config(format!(
                    "Invalid {} value '{}': {}",
                    CREATE_MISSING_ROLES_ENV, value, e
                ))
            })?;
        }

        Ok(config)
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
