//! Configuration integration tests
//!
//! Tests for building registries from configuration files.

#[cfg(test)]
mod tests {
    use rbac_engine::utils::{ErrorCategory, ErrorUtils};
    use rbac_engine::{Rbac, RbacConfig, RbacError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_registry_from_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "create_missing_roles: true").unwrap();

        let config = RbacConfig::from_file(file.path()).unwrap();
        let mut rbac = Rbac::with_config(&config);

        assert!(rbac.create_missing_roles());
        rbac.add_role_with_parents("child", ["auto-parent"]).unwrap();
        assert!(rbac.has_role("auto-parent"));
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{}}").unwrap();

        let config = RbacConfig::from_file(file.path()).unwrap();
        assert_eq!(config, RbacConfig::default());
        assert!(!Rbac::with_config(&config).create_missing_roles());
    }

    #[test]
    fn test_malformed_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "create_missing_roles: [unterminated").unwrap();

        let err = RbacConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, RbacError::Yaml(_)));
        assert!(err.to_string().starts_with("YAML error"));
    }

    #[test]
    fn test_config_round_trip_through_file() {
        let config = RbacConfig {
            create_missing_roles: true,
        };

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(config.to_yaml().unwrap().as_bytes()).unwrap();

        assert_eq!(RbacConfig::from_file(file.path()).unwrap(), config);
    }

    #[test]
    fn test_file_config_merged_with_lookup() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "create_missing_roles: false").unwrap();

        let from_file = RbacConfig::from_file(file.path()).unwrap();
        let from_env = RbacConfig::from_lookup(|key| {
            (key == "RBAC_CREATE_MISSING_ROLES").then(|| "true".to_string())
        })
        .unwrap();

        assert!(from_file.merge(from_env).create_missing_roles);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        let err = RbacConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RbacError::Io(_)));
        assert_eq!(ErrorUtils::categorize(&err), ErrorCategory::Io);
        assert_eq!(ErrorUtils::error_code(&err), "IO_ERROR");
    }
}
