//! Error types for the linter

use thiserror::Error;

/// Result type for linter operations
pub type Result<T> = std::result::Result<T, LintError>;

/// Linter errors
#[derive(Error, Debug)]
pub enum LintError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("Cannot determine OpenAPI dialect: {0}")]
    UnknownDialect(String),
}
