//! Grouped mean aggregation.
//!
//! `aggregate` is a pure function of its inputs. `AggregationEngine` binds it
//! to a `DatasetStore` and routes calls through the optional memo cache.

pub mod cache;
pub mod engine;
pub mod types;

pub use cache::AggregationCache;
pub use engine::{aggregate, AggregationEngine};
pub use types::{Aggregatable, Dataset, Filters, GroupKey, GroupStats, GroupedMeans};
