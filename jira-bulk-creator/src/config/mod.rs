//! Tracker configuration loading.
//!
//! The configuration file is read once before any task is processed. It may
//! be JSON (the default) or TOML (when the file ends in `.toml`):
//!
//! ```text
//! {
//!   "jira_url": "https://acme.atlassian.net",
//!   "api_token": "...",
//!   "user_email": "me@acme.io",
//!   "project_key": "ACME"
//! }
//! ```

mod error;
mod tracker;

pub use error::ConfigError;
pub use tracker::{ConfigOverrides, TrackerConfig};

use std::path::Path;
use tracker::RawTrackerConfig;
use tracing::{debug, info};

/// Loads and validates the tracker configuration.
///
/// Values in `overrides` replace those read from the file. If the file does
/// not exist but `overrides` supplies every field, the file is not required.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, unreadable, malformed, or
/// if any required field is absent or empty after merging.
pub fn load_tracker_config(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<TrackerConfig, ConfigError> {
    if !path.exists() {
        if overrides.is_complete() {
            debug!(path = %path.display(), "Configuration file absent, using overrides only");
            let raw = overrides.apply(RawTrackerConfig::default());
            return TrackerConfig::validate(raw, "<overrides>");
        }
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    info!(path = %path.display(), "Loading tracker configuration");
    let content = read_file(path)?;
    let raw: RawTrackerConfig = if is_toml(path) {
        toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?
    };

    TrackerConfig::validate(overrides.apply(raw), &path.display().to_string())
}

/// Reads a whole file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID_JSON: &str = r#"{
        "jira_url": "https://acme.atlassian.net",
        "api_token": "secret",
        "user_email": "me@acme.io",
        "project_key": "ACME"
    }"#;

    #[test]
    fn can_load_json_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, VALID_JSON).unwrap();

        let config = load_tracker_config(&path, &ConfigOverrides::default()).unwrap();

        assert_eq!(config.base_url(), "https://acme.atlassian.net");
        assert_eq!(config.api_token(), "secret");
        assert_eq!(config.user_email(), "me@acme.io");
        assert_eq!(config.project_key(), "ACME");
    }

    #[test]
    fn can_load_toml_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
jira_url = "https://acme.atlassian.net"
api_token = "secret"
user_email = "me@acme.io"
project_key = "ACME"
"#,
        )
        .unwrap();

        let config = load_tracker_config(&path, &ConfigOverrides::default()).unwrap();
        assert_eq!(config.project_key(), "ACME");
    }

    #[test]
    fn load_config_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let result = load_tracker_config(&path, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn load_config_without_file_uses_complete_overrides() {
        let temp = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            jira_url: Some("https://ops.example".to_string()),
            api_token: Some("token".to_string()),
            user_email: Some("ops@example.com".to_string()),
            project_key: Some("OPS".to_string()),
        };

        let config = load_tracker_config(&temp.path().join("absent.json"), &overrides).unwrap();
        assert_eq!(config.base_url(), "https://ops.example");
    }

    #[test]
    fn load_config_malformed_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, "{ \"jira_url\": ").unwrap();

        let result = load_tracker_config(&path, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }

    #[test]
    fn load_config_malformed_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "jira_url = \"https://acme.atlassian.net").unwrap();

        let result = load_tracker_config(&path, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn load_config_unreadable_path() {
        let temp = TempDir::new().unwrap();

        // A directory exists but cannot be read as a file.
        let result = load_tracker_config(temp.path(), &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }

    #[test]
    fn load_config_missing_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{ "jira_url": "https://acme.atlassian.net", "api_token": "secret", "user_email": "me@acme.io" }"#,
        )
        .unwrap();

        let result = load_tracker_config(&path, &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn empty_override_keeps_file_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, VALID_JSON).unwrap();
        let overrides = ConfigOverrides {
            project_key: Some(String::new()),
            api_token: Some("  ".to_string()),
            ..Default::default()
        };

        let config = load_tracker_config(&path, &overrides).unwrap();
        assert_eq!(config.project_key(), "ACME");
        assert_eq!(config.api_token(), "secret");
    }

    #[test]
    fn overrides_fill_missing_field() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(
            &path,
            r#"{ "jira_url": "https://acme.atlassian.net", "user_email": "me@acme.io", "project_key": "ACME" }"#,
        )
        .unwrap();
        let overrides = ConfigOverrides {
            api_token: Some("from-env".to_string()),
            ..Default::default()
        };

        let config = load_tracker_config(&path, &overrides).unwrap();
        assert_eq!(config.api_token(), "from-env");
    }
}
