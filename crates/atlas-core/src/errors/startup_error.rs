//! Errors raised while building a view graph: an invalid config or a
//! failed dataset load.

use super::config_error::ConfigError;
use super::error_code::AtlasErrorCode;
use super::load_error::DataLoadError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] DataLoadError),
}

impl AtlasErrorCode for StartupError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::Load(err) => err.error_code(),
        }
    }
}

pub type StartupResult<T> = Result<T, StartupError>;
