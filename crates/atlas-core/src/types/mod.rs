//! Domain types shared by storage and analysis.

pub mod collections;
pub mod records;
pub mod region;
pub mod stance;
pub mod time;
