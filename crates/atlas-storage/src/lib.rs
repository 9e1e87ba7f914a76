//! # atlas-storage
//!
//! Loads the three source tables, normalizes raw region codes through the
//! region directory, and holds the result in an immutable in-memory store.
//! Everything here is read-only after `DatasetStore::load` returns, so the
//! store can be shared across sessions behind an `Arc` without locking.

pub mod directory;
pub mod fingerprint;
pub mod reader;
pub mod store;
pub mod tables;

pub use directory::RegionDirectory;
pub use fingerprint::DatasetFingerprint;
pub use store::{DatasetSources, DatasetStore};
