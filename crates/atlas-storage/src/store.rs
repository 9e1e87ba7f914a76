//! DatasetStore: the three normalized tables held in memory.
//!
//! Built once by `load` (or `from_parts`), never mutated afterwards. All
//! accessors are pure functions of the loaded tables and their arguments.

use std::path::PathBuf;

use atlas_core::config::SourcesConfig;
use atlas_core::constants::tables as table_names;
use atlas_core::errors::LoadResult;
use atlas_core::{
    CountySentimentRecord, DataLoadError, EventSentimentPair, FxHashMap, RegionName,
    SentimentRecord, Stance,
};
use tracing::info;

use crate::directory::RegionDirectory;
use crate::fingerprint::DatasetFingerprint;
use crate::reader::check_sentiment;
use crate::tables;

/// Where the source tables live.
#[derive(Debug, Clone)]
pub struct DatasetSources {
    /// Record-level tables, concatenated in order.
    pub stance_tables: Vec<PathBuf>,
    pub county_table: PathBuf,
    pub event_table: PathBuf,
    /// Optional `code,name` directory; the US state directory otherwise.
    pub region_table: Option<PathBuf>,
}

impl From<&SourcesConfig> for DatasetSources {
    fn from(config: &SourcesConfig) -> Self {
        Self {
            stance_tables: config.stance_tables.clone(),
            county_table: config.county_table.clone(),
            event_table: config.event_table.clone(),
            region_table: config.region_table.clone(),
        }
    }
}

/// Immutable in-memory store of the normalized datasets.
#[derive(Debug)]
pub struct DatasetStore {
    directory: RegionDirectory,
    records: Vec<SentimentRecord>,
    county: Vec<CountySentimentRecord>,
    /// Region → positions in `county`, in table order.
    county_index: FxHashMap<RegionName, Vec<usize>>,
    /// Regions with county rows, in first-appearance order.
    county_regions: Vec<RegionName>,
    events: Vec<EventSentimentPair>,
    default_region: RegionName,
    fingerprint: DatasetFingerprint,
}

impl DatasetStore {
    /// Load and normalize every source table. Any failure aborts the load.
    pub fn load(sources: &DatasetSources) -> LoadResult<Self> {
        let directory = match &sources.region_table {
            Some(path) => RegionDirectory::from_csv(path)?,
            None => RegionDirectory::us_states(),
        };

        if sources.stance_tables.is_empty() {
            return Err(DataLoadError::MissingTable {
                table: table_names::STANCE.to_string(),
                path: "<none configured>".to_string(),
            });
        }
        let mut records = Vec::new();
        for path in &sources.stance_tables {
            records.extend(tables::load_stance_records(path, &directory)?);
        }

        let county = tables::load_county_records(&sources.county_table, &directory)?;
        let events = tables::load_event_pairs(&sources.event_table)?;

        let store = Self::assemble(directory, records, county, events)?;
        info!(
            records = store.records.len(),
            county_rows = store.county.len(),
            events = store.events.len(),
            regions = store.directory.len(),
            fingerprint = %store.fingerprint,
            "dataset store loaded"
        );
        Ok(store)
    }

    /// Build a store from records that are already normalized.
    ///
    /// The same invariants as `load` are enforced: every record's region
    /// code must canonicalize to its stored name, county regions must be
    /// directory names, and every sentiment must lie in [-1, 1]. Line
    /// numbers in errors are 1-based record positions.
    pub fn from_parts(
        directory: RegionDirectory,
        records: Vec<SentimentRecord>,
        county: Vec<CountySentimentRecord>,
        events: Vec<EventSentimentPair>,
    ) -> LoadResult<Self> {
        for (i, r) in records.iter().enumerate() {
            let line = (i + 1) as u64;
            let canonical = directory
                .canonicalize(&r.region_code)
                .map_err(|source| DataLoadError::UnknownRegion {
                    table: table_names::STANCE.to_string(),
                    line,
                    source,
                })?;
            if canonical != r.region_name {
                return Err(DataLoadError::MalformedRow {
                    table: table_names::STANCE.to_string(),
                    line,
                    column: "region_name".to_string(),
                    reason: format!(
                        "{} is not the canonical name of code {} ({})",
                        r.region_name, r.region_code, canonical
                    ),
                });
            }
            check_sentiment(table_names::STANCE, line, r.sentiment)?;
        }
        for (i, r) in county.iter().enumerate() {
            let line = (i + 1) as u64;
            if !directory.contains_name(r.region_name.as_str()) {
                return Err(DataLoadError::UnknownRegion {
                    table: table_names::COUNTY.to_string(),
                    line,
                    source: atlas_core::UnknownRegionError::Name(r.region_name.to_string()),
                });
            }
            check_sentiment(table_names::COUNTY, line, r.sentiment)?;
        }
        for (i, e) in events.iter().enumerate() {
            let line = (i + 1) as u64;
            check_sentiment(table_names::EVENTS, line, e.sentiment_before)?;
            check_sentiment(table_names::EVENTS, line, e.sentiment_after)?;
        }

        Self::assemble(directory, records, county, events)
    }

    fn assemble(
        directory: RegionDirectory,
        records: Vec<SentimentRecord>,
        county: Vec<CountySentimentRecord>,
        events: Vec<EventSentimentPair>,
    ) -> LoadResult<Self> {
        let mut county_index: FxHashMap<RegionName, Vec<usize>> = FxHashMap::default();
        let mut county_regions = Vec::new();
        for (i, r) in county.iter().enumerate() {
            let positions = county_index.entry(r.region_name.clone()).or_insert_with(|| {
                county_regions.push(r.region_name.clone());
                Vec::new()
            });
            positions.push(i);
        }

        // County regions are directory names, so this is only `None` for an
        // empty directory.
        let default_region = county_regions
            .first()
            .or_else(|| directory.names().first())
            .cloned()
            .ok_or(DataLoadError::EmptyDirectory)?;

        let fingerprint = DatasetFingerprint::compute(&records, &county, &events);
        Ok(Self {
            directory,
            records,
            county,
            county_index,
            county_regions,
            events,
            default_region,
            fingerprint,
        })
    }

    /// Records matching the optional stance and year, in table order.
    pub fn records_for(
        &self,
        stance: Option<Stance>,
        year: Option<i32>,
    ) -> impl Iterator<Item = &SentimentRecord> + '_ {
        self.records.iter().filter(move |r| {
            stance.map_or(true, |s| r.stance == s) && year.map_or(true, |y| r.year == y)
        })
    }

    /// Every record-level row.
    pub fn records(&self) -> &[SentimentRecord] {
        &self.records
    }

    /// County rows of one region, in table order. Empty for regions without rows.
    pub fn county_records_for<'a>(
        &'a self,
        region: &str,
    ) -> impl Iterator<Item = &'a CountySentimentRecord> + 'a {
        self.county_index
            .get(region)
            .map(|positions| positions.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&i| &self.county[i])
    }

    pub fn county_records(&self) -> &[CountySentimentRecord] {
        &self.county
    }

    pub fn event_pairs(&self) -> &[EventSentimentPair] {
        &self.events
    }

    pub fn directory(&self) -> &RegionDirectory {
        &self.directory
    }

    /// Regions that have county rows, in first-appearance order.
    pub fn county_regions(&self) -> &[RegionName] {
        &self.county_regions
    }

    /// Default region selection: the first county region, or the first
    /// directory name when the county table is empty.
    pub fn default_region(&self) -> &RegionName {
        &self.default_region
    }

    pub fn fingerprint(&self) -> DatasetFingerprint {
        self.fingerprint
    }
}
