//! Word-cloud image naming.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordcloudConfig {
    /// Directory holding the pre-rendered images.
    pub asset_dir: PathBuf,
    /// Year shown for the early era; also its asset year.
    pub early_year: i32,
    /// Year shown for the late era.
    pub late_year: i32,
    /// Year embedded in the late-era asset file name.
    pub late_asset_year: i32,
}

impl Default for WordcloudConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("images"),
            early_year: 2009,
            late_year: 2019,
            late_asset_year: 2018,
        }
    }
}
