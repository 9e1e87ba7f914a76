//! Load-time errors. All of them are fatal: there is no partial load.

use super::error_code::{self, AtlasErrorCode};

/// A geographic identifier that the region directory does not know.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnknownRegionError {
    #[error("Unknown region code: {0}")]
    Code(String),

    #[error("Unknown region name: {0}")]
    Name(String),
}

impl AtlasErrorCode for UnknownRegionError {
    fn error_code(&self) -> &'static str {
        error_code::UNKNOWN_REGION
    }
}

/// Errors raised while reading and normalizing source tables.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Required table {table} not found at {path}")]
    MissingTable { table: String, path: String },

    #[error("Required column {column} missing from table {table}")]
    MissingColumn { table: String, column: String },

    #[error("Malformed row in {table} at line {line}, column {column}: {reason}")]
    MalformedRow {
        table: String,
        line: u64,
        column: String,
        reason: String,
    },

    #[error("Sentiment {value} out of [-1, 1] in {table} at line {line}")]
    SentimentOutOfRange { table: String, line: u64, value: f64 },

    #[error("Duplicate region {kind} in directory: {value}")]
    DuplicateRegion { kind: String, value: String },

    #[error("Region directory is empty")]
    EmptyDirectory,

    #[error("Unknown region in {table} at line {line}: {source}")]
    UnknownRegion {
        table: String,
        line: u64,
        #[source]
        source: UnknownRegionError,
    },

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AtlasErrorCode for DataLoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTable { .. } => error_code::DATA_LOAD_MISSING_TABLE,
            Self::MissingColumn { .. } => error_code::DATA_LOAD_MISSING_COLUMN,
            Self::MalformedRow { .. } => error_code::DATA_LOAD_MALFORMED_ROW,
            Self::SentimentOutOfRange { .. } => error_code::DATA_LOAD_SENTIMENT_RANGE,
            Self::DuplicateRegion { .. } => error_code::DATA_LOAD_DUPLICATE_REGION,
            Self::EmptyDirectory => error_code::DATA_LOAD_EMPTY_DIRECTORY,
            Self::UnknownRegion { source, .. } => source.error_code(),
            Self::Io { .. } => error_code::DATA_LOAD_IO,
        }
    }
}

pub type LoadResult<T> = Result<T, DataLoadError>;
