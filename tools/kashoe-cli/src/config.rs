//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["kashoe.toml", ".kashoe.toml", "kashoe.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Backend connection.
    #[serde(default)]
    pub api: ApiConfig,

    /// Seeding defaults.
    #[serde(default)]
    pub seed: SeedConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Replace the backend URL when an override is given.
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Scheme and host of the backend, without the `/api` prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Seeding configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedConfig {
    /// Fixture file used when `--file` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

/// Generate a default kashoe.toml config file.
pub fn generate_default_config(base_url: &str) -> String {
    format!(
        r#"# Kashoe CLI configuration

[api]
base_url = "{base_url}"
timeout_secs = {timeout}

[seed]
# file = "fixtures/seed.toml"
"#,
        base_url = base_url,
        timeout = default_timeout_secs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = CliConfig::parse("kashoe.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8001");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_toml_and_json() {
        let toml = "[api]\nbase_url = \"https://club.example\"\ntimeout_secs = 3\n";
        let config = CliConfig::parse("kashoe.toml", toml).unwrap();
        assert_eq!(config.api.base_url, "https://club.example");
        assert_eq!(config.api.timeout_secs, 3);

        let json = r#"{"api": {"base_url": "https://club.example"}, "seed": {"file": "s.toml"}}"#;
        let config = CliConfig::parse("kashoe.json", json).unwrap();
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.seed.file.as_deref(), Some("s.toml"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let err = CliConfig::parse("broken.toml", "[api\n").unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }

    #[test]
    fn test_api_url_override() {
        let config = CliConfig::default().with_api_url(Some("https://api.example/"));
        assert_eq!(config.api.base_url, "https://api.example");

        let config = CliConfig::default().with_api_url(Some("  "));
        assert_eq!(config.api.base_url, "http://localhost:8001");

        let config = CliConfig::default().with_api_url(None);
        assert_eq!(config.api.base_url, "http://localhost:8001");
    }

    #[test]
    fn test_generated_config_parses() {
        let text = generate_default_config("http://localhost:8001");
        let config = CliConfig::parse("kashoe.toml", &text).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("kashoe-cli-test-{}.toml", std::process::id()));
        let path = path.to_string_lossy().to_string();

        let config = CliConfig::default().with_api_url(Some("https://saved.example"));
        config.save(&path).unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
