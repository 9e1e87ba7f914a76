//! Domain of the year selection.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_YEAR_MAX, DEFAULT_YEAR_MIN};
use crate::errors::{ConfigError, ConfigResult};
use crate::types::time::YearDomain;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub year_min: i32,
    pub year_max: i32,
}

impl SelectionConfig {
    pub fn year_domain(&self) -> YearDomain {
        YearDomain::new(self.year_min, self.year_max)
    }

    pub(crate) fn validate(&self) -> ConfigResult<()> {
        if self.year_min > self.year_max {
            return Err(ConfigError::Invalid {
                field: "selection.year_min".to_string(),
                reason: format!("{} is after year_max {}", self.year_min, self.year_max),
            });
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            year_min: DEFAULT_YEAR_MIN,
            year_max: DEFAULT_YEAR_MAX,
        }
    }
}
