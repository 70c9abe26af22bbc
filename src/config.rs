//! Configuration for the linter CLI
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (openapi-lint.toml)
//! - Environment variables (OPENAPI_LINT_*)
//!
//! ## Example config file (openapi-lint.toml):
//! ```toml
//! [files]
//! suffixes = ["yaml", "yml"]
//!
//! [output]
//! format = "pretty"
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the linter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// File selection settings
    #[serde(default)]
    pub files: FilesConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// File selection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// File suffixes treated as OpenAPI documents
    #[serde(default = "default_suffixes")]
    pub suffixes: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format for issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

fn default_suffixes() -> Vec<String> {
    vec!["yaml".to_string()]
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self { suffixes: default_suffixes() }
    }
}

impl LintConfig {
    /// Load from `openapi-lint.toml` (optional) with `OPENAPI_LINT_*`
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("openapi-lint.toml")
    }

    /// Load from a specific file path (optional) plus environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(Environment::with_prefix("OPENAPI_LINT").separator("__"))
            .build()?;
        config.try_deserialize()
    }

    /// Write the configuration as pretty TOML.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Configured suffixes with blank entries filtered out; falls back to
    /// the defaults when nothing usable remains.
    pub fn suffixes(&self) -> Vec<String> {
        let cleaned: Vec<String> = self
            .files
            .suffixes
            .iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if cleaned.is_empty() {
            default_suffixes()
        } else {
            cleaned
        }
    }
}
