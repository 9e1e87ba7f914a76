//! Error taxonomy.
//!
//! Load-time errors (`DataLoadError`, `UnknownRegionError`) abort startup.
//! Selection-time errors (`InvalidSelectionError`) reject a single input
//! event. An empty aggregation group is not an error: it is an absent key.

pub mod asset_error;
pub mod config_error;
pub mod error_code;
pub mod load_error;
pub mod selection_error;
pub mod startup_error;

pub use asset_error::AssetError;
pub use config_error::{ConfigError, ConfigResult};
pub use load_error::{DataLoadError, LoadResult, UnknownRegionError};
pub use selection_error::{InvalidSelectionError, SelectionResult};
pub use startup_error::{StartupError, StartupResult};
