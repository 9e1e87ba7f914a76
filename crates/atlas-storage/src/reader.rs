//! CSV table reading with header validation.
//!
//! Headers are checked up front: a missing required column fails the whole
//! table before any row is parsed. Rows are handed to the caller as `Row`
//! views that know their table and line for error reporting.

use std::path::Path;

use atlas_core::constants::{SENTIMENT_MAX, SENTIMENT_MIN};
use atlas_core::errors::LoadResult;
use atlas_core::{DataLoadError, FxHashMap};
use csv::StringRecord;

/// One data row of a table.
pub struct Row<'a> {
    table: &'static str,
    line: u64,
    record: &'a StringRecord,
    columns: &'a FxHashMap<&'static str, usize>,
}

impl<'a> Row<'a> {
    pub fn table(&self) -> &'static str {
        self.table
    }

    /// 1-based line in the source file.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Raw trimmed text of a required column.
    pub fn text(&self, column: &'static str) -> &'a str {
        self.columns
            .get(column)
            .and_then(|&i| self.record.get(i))
            .map(str::trim)
            .unwrap_or("")
    }

    pub fn non_empty(&self, column: &'static str) -> LoadResult<&'a str> {
        let value = self.text(column);
        if value.is_empty() {
            return Err(self.malformed(column, "empty value"));
        }
        Ok(value)
    }

    /// Integer column. Accepts `2010` and the `2010.0` form float exports use.
    pub fn integer(&self, column: &'static str) -> LoadResult<i32> {
        let value = self.non_empty(column)?;
        if let Ok(n) = value.parse::<i32>() {
            return Ok(n);
        }
        match value.parse::<f64>() {
            Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= i32::MAX as f64 => Ok(f as i32),
            _ => Err(self.malformed(column, &format!("not an integer: {value:?}"))),
        }
    }

    pub fn float(&self, column: &'static str) -> LoadResult<f64> {
        let value = self.non_empty(column)?;
        value
            .parse::<f64>()
            .map_err(|_| self.malformed(column, &format!("not a number: {value:?}")))
    }

    /// Sentiment column: a number in [-1, 1]. NaN is out of range.
    pub fn sentiment(&self, column: &'static str) -> LoadResult<f64> {
        let value = self.float(column)?;
        check_sentiment(self.table, self.line, value)?;
        Ok(value)
    }

    pub fn malformed(&self, column: &str, reason: &str) -> DataLoadError {
        DataLoadError::MalformedRow {
            table: self.table.to_string(),
            line: self.line,
            column: column.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Fail unless `value` lies in [-1, 1].
pub fn check_sentiment(table: &str, line: u64, value: f64) -> LoadResult<()> {
    if !(SENTIMENT_MIN..=SENTIMENT_MAX).contains(&value) {
        return Err(DataLoadError::SentimentOutOfRange {
            table: table.to_string(),
            line,
            value,
        });
    }
    Ok(())
}

/// Read every row of `path`, handing each to `parse`.
///
/// Fails with `MissingTable` if the file does not exist and with
/// `MissingColumn` if any of `required` is absent from the header.
pub fn read_table<T>(
    table: &'static str,
    path: &Path,
    required: &[&'static str],
    mut parse: impl FnMut(&Row<'_>) -> LoadResult<T>,
) -> LoadResult<Vec<T>> {
    if !path.is_file() {
        return Err(DataLoadError::MissingTable {
            table: table.to_string(),
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(table, path, e))?;

    let headers = reader.headers().map_err(|e| csv_error(table, path, e))?.clone();
    let mut columns: FxHashMap<&'static str, usize> = FxHashMap::default();
    for &column in required {
        let index = headers
            .iter()
            .position(|h| h.trim().trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| DataLoadError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            })?;
        columns.insert(column, index);
    }

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    // Header is line 1.
    let mut line = 1u64;
    loop {
        let more = reader
            .read_record(&mut record)
            .map_err(|e| csv_error(table, path, e))?;
        if !more {
            break;
        }
        line = record.position().map(|p| p.line()).unwrap_or(line + 1);
        let row = Row {
            table,
            line,
            record: &record,
            columns: &columns,
        };
        rows.push(parse(&row)?);
    }

    tracing::debug!(table, path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

fn csv_error(table: &str, path: &Path, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => DataLoadError::Io {
            path: path.display().to_string(),
            source,
        },
        _ => DataLoadError::MalformedRow {
            table: table.to_string(),
            line,
            column: String::new(),
            reason,
        },
    }
}
