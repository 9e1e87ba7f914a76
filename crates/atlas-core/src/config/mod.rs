pub mod cache_config;
pub mod logging_config;
pub mod map_config;
pub mod selection_config;
pub mod sources_config;
pub mod wordcloud_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use cache_config::CacheConfig;
pub use logging_config::LoggingConfig;
pub use map_config::MapConfig;
pub use selection_config::SelectionConfig;
pub use sources_config::SourcesConfig;
pub use wordcloud_config::WordcloudConfig;

use crate::errors::{ConfigError, ConfigResult};

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtlasConfig {
    pub sources: SourcesConfig,
    pub selection: SelectionConfig,
    pub map: MapConfig,
    pub cache: CacheConfig,
    pub wordcloud: WordcloudConfig,
    pub logging: LoggingConfig,
}

impl AtlasConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), "loaded atlas config");
        Ok(config)
    }

    /// Reject values that would make the engine misbehave.
    pub fn validate(&self) -> ConfigResult<()> {
        self.selection.validate()?;
        self.map.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}
