//! Selection-time errors. Recoverable: the offending event is rejected and
//! the previous selection and views stay in place.

use super::error_code::{self, AtlasErrorCode};
use super::load_error::UnknownRegionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSelectionError {
    #[error("Year {year} outside selectable range [{min}, {max}]")]
    YearOutOfRange { year: i64, min: i32, max: i32 },

    #[error("Unrecognized stance for {field}: {value:?}")]
    UnknownStance { field: &'static str, value: String },

    #[error("Invalid region selection: {0}")]
    UnknownRegion(#[from] UnknownRegionError),
}

impl AtlasErrorCode for InvalidSelectionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::YearOutOfRange { .. } => error_code::INVALID_SELECTION_YEAR,
            Self::UnknownStance { .. } => error_code::INVALID_SELECTION_STANCE,
            Self::UnknownRegion(_) => error_code::INVALID_SELECTION_REGION,
        }
    }
}

pub type SelectionResult<T> = Result<T, InvalidSelectionError>;
