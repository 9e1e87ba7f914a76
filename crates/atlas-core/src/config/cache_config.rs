//! Aggregation memoization settings.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Memoize aggregation results keyed by (dataset, group key, filters).
    pub enabled: bool,
    /// Maximum number of memoized results.
    pub capacity: u64,
}

impl CacheConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.enabled && self.capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "cache.capacity".to_string(),
                reason: "must be positive when the cache is enabled".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
