//! # atlas-core
//!
//! Foundation crate for the Atlas sentiment engine.
//! Defines the domain types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::AtlasConfig;
pub use errors::error_code::AtlasErrorCode;
pub use errors::{
    AssetError, ConfigError, DataLoadError, InvalidSelectionError, StartupError, UnknownRegionError,
};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::records::{CountySentimentRecord, EventSentimentPair, SentimentRecord};
pub use types::region::{RegionCode, RegionName};
pub use types::stance::Stance;
pub use types::time::{Year, YearDomain, YearMonth};
