//! Configuration management for the Discourse logout CLI.

use anyhow::{Context, Result};
use discourse_logout::{config::keys, ConfigRepository, HttpForumClient, LogoutDiscourseUser};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::logging::TracingLogger;

/// Default configuration file name, looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "discourse-logout.toml";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub http: HttpSettings,
}

/// `[services]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default)]
    pub discourse: DiscourseConfig,
}

/// `[services.discourse]` table. Every value is a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscourseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub api: DiscourseApiConfig,
}

/// `[services.discourse.api]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscourseApiConfig {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub user: String,
}

/// `[http]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Connection timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
    /// Read timeout in seconds.
    pub read_timeout_secs: Option<u64>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub api_user: Option<String>,
}

impl Config {
    /// Replace file values with any override that is set.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        let discourse = &mut self.services.discourse;
        if let Some(url) = overrides.url {
            discourse.url = url;
        }
        if let Some(key) = overrides.api_key {
            discourse.api.key = key;
        }
        if let Some(user) = overrides.api_user {
            discourse.api.user = user;
        }
        self
    }
}

impl ConfigRepository for Config {
    fn get(&self, key: &str) -> Option<String> {
        let discourse = &self.services.discourse;
        let value = match key {
            keys::URL => &discourse.url,
            keys::API_KEY => &discourse.api.key,
            keys::API_USER => &discourse.api.user,
            _ => return None,
        };
        Some(value.clone())
    }
}

/// Get the configuration file path.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let exe_path = env::current_exe().context("Could not determine executable path")?;
    let exe_dir = exe_path
        .parent()
        .context("Could not determine executable directory")?;

    Ok(exe_dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from file. A missing file yields the default config.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content).context("Failed to parse config file")
}

/// Build the logout listener from the current configuration.
pub fn build_listener(config: Config) -> Result<LogoutDiscourseUser> {
    let mut builder = HttpForumClient::builder();

    if let Some(secs) = config.http.connect_timeout_secs {
        builder = builder.connect_timeout(Duration::from_secs(secs));
    }
    if let Some(secs) = config.http.read_timeout_secs {
        builder = builder.read_timeout(Duration::from_secs(secs));
    }

    let client = builder.build().context("Failed to build HTTP client")?;

    Ok(LogoutDiscourseUser::new(
        Arc::new(client),
        Arc::new(config),
        Arc::new(TracingLogger),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use discourse_logout::DiscourseSettings;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"
[services.discourse]
url = "https://a.example,https://b.example"

[services.discourse.api]
key = "k1,k2"
user = "system,system"

[http]
connect_timeout_secs = 3
"#;

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.services.discourse.api.key, "k1,k2");
        assert_eq!(config.http.connect_timeout_secs, Some(3));
        assert_eq!(config.http.read_timeout_secs, None);

        let settings = DiscourseSettings::from_repository(&config);
        assert_eq!(settings.tenants().len(), 2);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.get(keys::URL), Some(String::new()));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[services.discourse\nurl = 1").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config: Config = toml::from_str(SAMPLE).unwrap();
        let config = config.with_overrides(Overrides {
            url: Some("https://c.example".into()),
            api_key: None,
            api_user: Some("admin".into()),
        });

        assert_eq!(config.get(keys::URL).as_deref(), Some("https://c.example"));
        assert_eq!(config.get(keys::API_KEY).as_deref(), Some("k1,k2"));
        assert_eq!(config.get(keys::API_USER).as_deref(), Some("admin"));
        assert_eq!(config.get("services.other"), None);
    }

    #[test]
    fn test_explicit_path() {
        let path = config_path(Some(Path::new("/etc/discourse-logout.toml"))).unwrap();
        assert_eq!(path, PathBuf::from("/etc/discourse-logout.toml"));
    }
}
