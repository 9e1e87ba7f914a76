//! Locations of the source tables.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Record-level tables, concatenated in order (one export per stance).
    pub stance_tables: Vec<PathBuf>,
    pub county_table: PathBuf,
    pub event_table: PathBuf,
    /// `code,name` directory. The built-in US state FIPS table is used when unset.
    pub region_table: Option<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            stance_tables: vec![
                PathBuf::from("sources/believer_twitter.csv"),
                PathBuf::from("sources/denier_twitter.csv"),
                PathBuf::from("sources/neutral_twitter.csv"),
            ],
            county_table: PathBuf::from("sources/twitter_year_county.csv"),
            event_table: PathBuf::from("sources/average_sentiments_data.csv"),
            region_table: None,
        }
    }
}
