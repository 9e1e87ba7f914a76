//! Stable error codes reported across the presentation boundary.

/// Every Atlas error exposes a stable, machine-readable code.
pub trait AtlasErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const DATA_LOAD_MISSING_TABLE: &str = "DATA_LOAD_MISSING_TABLE";
pub const DATA_LOAD_MISSING_COLUMN: &str = "DATA_LOAD_MISSING_COLUMN";
pub const DATA_LOAD_MALFORMED_ROW: &str = "DATA_LOAD_MALFORMED_ROW";
pub const DATA_LOAD_SENTIMENT_RANGE: &str = "DATA_LOAD_SENTIMENT_RANGE";
pub const DATA_LOAD_DUPLICATE_REGION: &str = "DATA_LOAD_DUPLICATE_REGION";
pub const DATA_LOAD_EMPTY_DIRECTORY: &str = "DATA_LOAD_EMPTY_DIRECTORY";
pub const DATA_LOAD_IO: &str = "DATA_LOAD_IO";
pub const UNKNOWN_REGION: &str = "UNKNOWN_REGION";
pub const INVALID_SELECTION_YEAR: &str = "INVALID_SELECTION_YEAR";
pub const INVALID_SELECTION_STANCE: &str = "INVALID_SELECTION_STANCE";
pub const INVALID_SELECTION_REGION: &str = "INVALID_SELECTION_REGION";
pub const CONFIG_IO: &str = "CONFIG_IO";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const ASSET_NOT_FOUND: &str = "ASSET_NOT_FOUND";
pub const ASSET_IO: &str = "ASSET_IO";
