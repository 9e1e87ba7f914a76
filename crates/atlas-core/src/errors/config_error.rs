//! Configuration errors.

use super::error_code::{self, AtlasErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl AtlasErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
