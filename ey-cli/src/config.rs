//! Configuration module
//!
//! Two layers of configuration feed each command:
//! - runtime settings (API URL, token) from flags and environment variables,
//!   carried in [`Context`]
//! - per-project defaults from an `ey.toml` file found by walking up from the
//!   working directory, carried in [`EyConfig`]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Deserialize;

use crate::error::CliError;
use ey_client::CloudClient;

/// Name of the per-project config file
const CONFIG_FILE: &str = "ey.toml";

/// Runtime context passed into every command handler
#[derive(Debug, Clone)]
pub struct Context {
    /// URL of the Cloud API
    pub api_url: String,
    /// API token, if one was provided
    pub api_token: Option<String>,
    /// Per-project defaults loaded from ey.toml
    pub config: EyConfig,
    /// Directory the CLI was invoked from
    pub cwd: PathBuf,
}

impl Context {
    /// Build an authenticated API client, or fail if no token was provided
    pub fn client(&self) -> Result<CloudClient, CliError> {
        let token = self.api_token.as_deref().ok_or(CliError::MissingToken)?;
        Ok(CloudClient::new(&self.api_url, token))
    }
}

/// Per-project defaults stored in `ey.toml`
///
/// ```toml
/// default_environment = "production"
///
/// [environments.production]
/// branch = "main"
/// migrate = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EyConfig {
    /// Environment to act on when none is named and the app has several
    pub default_environment: Option<String>,
    /// Per-environment deploy defaults, keyed by environment name
    #[serde(default)]
    pub environments: HashMap<String, EnvDefaults>,
}

/// Deploy defaults for one environment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvDefaults {
    /// Default branch to deploy; an explicit --ref needs --force to override it
    pub branch: Option<String>,
    /// Whether deploys run migrations by default
    #[serde(default)]
    pub migrate: bool,
    pub migration_command: Option<String>,
}

impl EyConfig {
    /// Load the config file closest to `start`, walking up parent directories
    ///
    /// A missing file is not an error; it yields the defaults.
    pub fn load(start: &Path) -> Result<Self> {
        let Some(path) = Self::find_file(start) else {
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn find_file(start: &Path) -> Option<PathBuf> {
        let mut dir = Some(start);
        while let Some(d) = dir {
            let candidate = d.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
            dir = d.parent();
        }
        None
    }

    /// Configured default environment name, if any
    pub fn default_environment(&self) -> Option<&str> {
        self.default_environment.as_deref()
    }

    /// Configured default deploy branch for an environment, if any
    pub fn default_branch(&self, environment: &str) -> Option<&str> {
        self.environments
            .get(environment)
            .and_then(|e| e.branch.as_deref())
    }

    /// Configured migration defaults for an environment
    pub fn migrate_defaults(&self, environment: &str) -> (bool, Option<&str>) {
        match self.environments.get(environment) {
            Some(e) => (e.migrate, e.migration_command.as_deref()),
            None => (false, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: EyConfig = toml::from_str(
            r#"
            default_environment = "production"

            [environments.production]
            branch = "main"
            migrate = true
            migration_command = "rake db:migrate"

            [environments.staging]
            branch = "develop"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_environment(), Some("production"));
        assert_eq!(config.default_branch("production"), Some("main"));
        assert_eq!(
            config.migrate_defaults("production"),
            (true, Some("rake db:migrate"))
        );
        assert_eq!(config.migrate_defaults("staging"), (false, None));
        assert_eq!(config.default_branch("unknown"), None);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: EyConfig = toml::from_str("").unwrap();
        assert!(config.default_environment().is_none());
        assert!(config.environments.is_empty());
    }

    #[test]
    fn test_load_walks_up_to_parent_directory() {
        let base = std::env::temp_dir().join(format!("ey-config-test-{}", std::process::id()));
        let nested = base.join("app").join("src");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(base.join(CONFIG_FILE), "default_environment = \"staging\"").unwrap();

        let config = EyConfig::load(&nested).unwrap();
        assert_eq!(config.default_environment(), Some("staging"));

        std::fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = EyConfig::load(Path::new("/nonexistent/path/for/ey")).unwrap();
        assert!(config.default_environment().is_none());
    }
}
