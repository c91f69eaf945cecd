//! Persisted settings: per-host credentials and the enterprise API prefix
//!
//! Settings are read-only from the core's perspective and are passed
//! explicitly into the classifier and credential resolver, so tests can
//! construct them deterministically instead of reading ambient state.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// A username/secret pair for one host
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostCredentials {
    /// Account name
    #[serde(default)]
    pub username: Option<String>,
    /// Password or personal access token
    #[serde(default)]
    pub password: Option<String>,
}

/// Full settings bundle
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Credentials for the public host (github.com)
    #[serde(default)]
    pub github: HostCredentials,
    /// Credentials for the enterprise host
    #[serde(default)]
    pub ghe: HostCredentials,
    /// Enterprise API prefix, including trailing slash
    /// (e.g. `https://ghe.example.com/api/v3/`); unset when no enterprise
    /// host is configured
    #[serde(default)]
    pub ghe_api_prefix: Option<String>,
}

impl Settings {
    /// Load from environment variables
    ///
    /// Unset and empty variables are treated the same: absent.
    pub fn from_env() -> Self {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }

        Self {
            github: HostCredentials {
                username: var("PRLABEL_GITHUB_USERNAME"),
                password: var("PRLABEL_GITHUB_PASSWORD"),
            },
            ghe: HostCredentials {
                username: var("PRLABEL_GHE_USERNAME"),
                password: var("PRLABEL_GHE_PASSWORD"),
            },
            ghe_api_prefix: var("PRLABEL_GHE_API_PREFIX"),
        }
    }

    /// Load from a YAML settings file
    ///
    /// YAML format:
    /// ```yaml
    /// github:
    ///   username: alice
    ///   password: hunter2
    /// ghe:
    ///   username: alice
    ///   password: hunter2
    /// ghe_api_prefix: https://ghe.example.com/api/v3/
    /// ```
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let settings: Settings = serde_yaml::from_str(&raw)?;
        Ok(settings)
    }

    /// The configured enterprise prefix, with empty strings normalized away
    #[inline]
    pub fn ghe_api_prefix(&self) -> Option<&str> {
        self.ghe_api_prefix.as_deref().filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings_are_empty() {
        let settings = Settings::default();
        assert!(settings.github.username.is_none());
        assert!(settings.ghe.password.is_none());
        assert!(settings.ghe_api_prefix().is_none());
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "github:\n  username: alice\n  password: hunter2\nghe_api_prefix: https://ghe.example.com/api/v3/"
        )
        .unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.github.username.as_deref(), Some("alice"));
        assert_eq!(settings.github.password.as_deref(), Some("hunter2"));
        assert!(settings.ghe.username.is_none());
        assert_eq!(
            settings.ghe_api_prefix(),
            Some("https://ghe.example.com/api/v3/")
        );
    }

    #[test]
    fn test_from_missing_file_is_config_error() {
        let err = Settings::from_file(Path::new("/nonexistent/prlabel.yml")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
    }

    #[test]
    fn test_env_and_yaml_loading_agree() {
        // Save original env vars
        let saved: Vec<(&str, Option<String>)> = [
            "PRLABEL_GITHUB_USERNAME",
            "PRLABEL_GITHUB_PASSWORD",
            "PRLABEL_GHE_USERNAME",
            "PRLABEL_GHE_PASSWORD",
            "PRLABEL_GHE_API_PREFIX",
        ]
        .into_iter()
        .map(|name| (name, std::env::var(name).ok()))
        .collect();

        std::env::set_var("PRLABEL_GITHUB_USERNAME", "alice");
        std::env::set_var("PRLABEL_GITHUB_PASSWORD", "hunter2");
        std::env::remove_var("PRLABEL_GHE_USERNAME");
        std::env::set_var("PRLABEL_GHE_PASSWORD", "");
        std::env::set_var("PRLABEL_GHE_API_PREFIX", "https://ghe.example.com/api/v3/");

        let from_env = Settings::from_env();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "github:\n  username: alice\n  password: hunter2\nghe_api_prefix: https://ghe.example.com/api/v3/"
        )
        .unwrap();
        let from_yaml = Settings::from_file(file.path()).unwrap();

        assert_eq!(from_env.github.username, from_yaml.github.username);
        assert_eq!(from_env.github.password, from_yaml.github.password);
        assert_eq!(from_env.ghe.username, from_yaml.ghe.username);
        // Empty env var normalizes to absent, same as the unset YAML key
        assert_eq!(from_env.ghe.password, from_yaml.ghe.password);
        assert_eq!(from_env.ghe_api_prefix(), from_yaml.ghe_api_prefix());

        // Restore original env vars
        for (name, value) in saved {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
    }

    #[test]
    fn test_empty_prefix_normalized_to_none() {
        let settings = Settings {
            ghe_api_prefix: Some(String::new()),
            ..Default::default()
        };
        assert!(settings.ghe_api_prefix().is_none());
    }
}
