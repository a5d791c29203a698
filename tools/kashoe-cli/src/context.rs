//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use kashoe_data::ClubApi;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, overrides applied.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file, then apply the `--api-url` override.
    pub fn load(config_path: Option<&str>, api_url: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };
        let config = config.with_api_url(api_url);

        tracing::debug!(base_url = %config.api.base_url, "loaded cli config");

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let path = find_config_path(start)?;
        match CliConfig::load(path.to_str()?) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                None
            }
        }
    }

    /// API client for the configured backend.
    pub fn api(&self) -> ClubApi {
        ClubApi::new(&self.config.api.base_url).with_timeout(self.config.api.timeout())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Nearest config file at or above `start`.
pub fn find_config_path(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("kashoe-cli-ctx-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_find_config_walks_up() {
        let root = scratch_dir("walk");
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join("kashoe.toml"), "[api]\nbase_url = \"https://up.example\"\n").unwrap();

        let found = find_config_path(&nested).unwrap();
        assert_eq!(found, root.join("kashoe.toml"));

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.api.base_url, "https://up.example");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_find_config_prefers_toml() {
        let root = scratch_dir("prefer");
        std::fs::write(root.join("kashoe.json"), r#"{"api": {"base_url": "https://json.example"}}"#).unwrap();
        std::fs::write(root.join("kashoe.toml"), "[api]\nbase_url = \"https://toml.example\"\n").unwrap();

        let config = Context::find_config(&root).unwrap();
        assert_eq!(config.api.base_url, "https://toml.example");

        std::fs::remove_dir_all(&root).unwrap();
    }
}
