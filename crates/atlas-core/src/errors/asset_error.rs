//! Static image asset errors.

use super::error_code::{self, AtlasErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Image asset {id} not found at {path}")]
    NotFound { id: String, path: String },

    #[error("I/O error reading asset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AtlasErrorCode for AssetError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::ASSET_NOT_FOUND,
            Self::Io { .. } => error_code::ASSET_IO,
        }
    }
}
