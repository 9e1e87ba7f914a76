//! Per-table loaders: raw rows → normalized records.

use std::path::Path;

use atlas_core::constants::{columns, tables};
use atlas_core::errors::LoadResult;
use atlas_core::{
    CountySentimentRecord, DataLoadError, EventSentimentPair, RegionCode, SentimentRecord, Stance,
    YearMonth,
};

use crate::directory::RegionDirectory;
use crate::reader::{read_table, Row};

/// Load one stance table, normalizing each raw state code through `directory`.
pub fn load_stance_records(path: &Path, directory: &RegionDirectory) -> LoadResult<Vec<SentimentRecord>> {
    read_table(tables::STANCE, path, columns::STANCE_TABLE, |row| {
        let raw_stance = row.non_empty(columns::STANCE)?;
        let stance = Stance::parse_str(raw_stance)
            .ok_or_else(|| row.malformed(columns::STANCE, &format!("unknown stance {raw_stance:?}")))?;
        let region_code = RegionCode::new(row.non_empty(columns::STATE_CODE)?);
        let region_name = directory
            .canonicalize(&region_code)
            .map_err(|source| unknown_region(row, source))?;

        Ok(SentimentRecord {
            stance,
            region_code,
            region_name,
            year: row.integer(columns::YEAR)?,
            sentiment: row.sentiment(columns::SENTIMENT)?,
        })
    })
}

/// Load the county table. State names must be canonical directory names.
pub fn load_county_records(
    path: &Path,
    directory: &RegionDirectory,
) -> LoadResult<Vec<CountySentimentRecord>> {
    read_table(tables::COUNTY, path, columns::COUNTY_TABLE, |row| {
        let region_name = directory
            .resolve_name(row.non_empty(columns::STATE_NAME)?)
            .map_err(|source| unknown_region(row, source))?;

        Ok(CountySentimentRecord {
            region_name,
            county_name: row.non_empty(columns::COUNTY_NAME)?.to_string(),
            year: row.integer(columns::YEAR)?,
            sentiment: row.sentiment(columns::SENTIMENT)?,
        })
    })
}

/// Load the disaster before/after table.
pub fn load_event_pairs(path: &Path) -> LoadResult<Vec<EventSentimentPair>> {
    read_table(tables::EVENTS, path, columns::EVENT_TABLE, |row| {
        let raw_date = row.non_empty(columns::DECLARATION_DATE)?;
        let year_month = YearMonth::parse_str(raw_date).ok_or_else(|| {
            row.malformed(columns::DECLARATION_DATE, &format!("not a date: {raw_date:?}"))
        })?;

        Ok(EventSentimentPair {
            event_id: row.non_empty(columns::EVENT_ID)?.to_string(),
            declaration_title: row.text(columns::DECLARATION_TITLE).to_string(),
            year_month,
            sentiment_before: row.sentiment(columns::SENTIMENT_BEFORE)?,
            sentiment_after: row.sentiment(columns::SENTIMENT_AFTER)?,
        })
    })
}

/// Load a `code,name` region directory.
pub fn load_region_directory(path: &Path) -> LoadResult<RegionDirectory> {
    let pairs = read_table(tables::REGIONS, path, columns::REGION_TABLE, |row| {
        Ok((
            row.line(),
            row.text(columns::REGION_CODE).to_string(),
            row.text(columns::REGION_NAME).to_string(),
        ))
    })?;

    let mut directory = RegionDirectory::empty();
    for (line, code, name) in &pairs {
        directory.insert(code, name, *line)?;
    }
    Ok(directory)
}

fn unknown_region(row: &Row<'_>, source: atlas_core::UnknownRegionError) -> DataLoadError {
    DataLoadError::UnknownRegion {
        table: row.table().to_string(),
        line: row.line(),
        source,
    }
}
