//! Resolution of image identifiers to displayable assets.

use std::io;
use std::path::{Path, PathBuf};

use atlas_core::config::WordcloudConfig;
use atlas_core::AssetError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::views::ImageId;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Turns an `ImageId` into image bytes.
pub trait ImageAssetResolver {
    fn resolve(&self, id: &ImageId) -> Result<Vec<u8>, AssetError>;

    /// The asset as an inline `data:` URI.
    fn data_uri(&self, id: &ImageId) -> Result<String, AssetError> {
        let bytes = self.resolve(id)?;
        Ok(format!("{PNG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)))
    }
}

/// Reads assets from a directory, one file per identifier.
#[derive(Debug, Clone)]
pub struct FsImageResolver {
    root: PathBuf,
}

impl FsImageResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &WordcloudConfig) -> Self {
        Self::new(config.asset_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ImageAssetResolver for FsImageResolver {
    fn resolve(&self, id: &ImageId) -> Result<Vec<u8>, AssetError> {
        let path = self.root.join(id.as_str());
        std::fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AssetError::NotFound {
                    id: id.to_string(),
                    path: path.display().to_string(),
                }
            } else {
                AssetError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::{AtlasErrorCode, Stance};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn data_uri_encodes_file_bytes() {
        let dir = TempDir::new().unwrap();
        let id = ImageId::wordcloud(Stance::Believer, 2009);
        std::fs::write(dir.path().join(id.as_str()), b"\x89PNG").unwrap();

        let resolver = FsImageResolver::new(dir.path());
        assert_eq!(resolver.resolve(&id).unwrap(), b"\x89PNG");
        assert_eq!(resolver.data_uri(&id).unwrap(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn missing_asset_is_not_found() {
        let dir = TempDir::new().unwrap();
        let resolver = FsImageResolver::new(dir.path());
        let err = resolver
            .resolve(&ImageId::wordcloud(Stance::Denier, 2018))
            .unwrap_err();
        assert!(matches!(err, AssetError::NotFound { ref id, .. } if id == "new_wordcloud_denier_2018.png"));
        assert_eq!(err.error_code(), "ASSET_NOT_FOUND");
    }
}
