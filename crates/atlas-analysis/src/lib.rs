//! # atlas-analysis
//!
//! Aggregation engine and view binding graph.
//!
//! - `aggregation`: grouped means over filtered records, optionally memoized
//! - `views`: selection state, the field → view dependency table, and the
//!   dispatcher that recomputes and emits only the affected views
//! - `assets`: resolution of word-cloud image identifiers

pub mod aggregation;
pub mod assets;
pub mod views;

pub use aggregation::{AggregationCache, AggregationEngine, Filters, GroupKey, GroupStats, GroupedMeans};
pub use assets::{FsImageResolver, ImageAssetResolver};
pub use views::{
    DependencyTable, InputChange, InputField, RecordingSink, Selection, Session, ViewGraph,
    ViewName, ViewPayload, ViewSink, ViewUpdate,
};
