//! Choropleth settings.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COLOR_MAX, DEFAULT_COLOR_MIN};
use crate::errors::{ConfigError, ConfigResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Lower end of the fixed color domain.
    pub color_min: f64,
    /// Upper end of the fixed color domain.
    pub color_max: f64,
}

impl MapConfig {
    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if !self.color_min.is_finite() || !self.color_max.is_finite() || self.color_min >= self.color_max {
            return Err(ConfigError::Invalid {
                field: "map.color_min".to_string(),
                reason: format!("color domain [{}, {}] is empty", self.color_min, self.color_max),
            });
        }
        Ok(())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            color_min: DEFAULT_COLOR_MIN,
            color_max: DEFAULT_COLOR_MAX,
        }
    }
}
