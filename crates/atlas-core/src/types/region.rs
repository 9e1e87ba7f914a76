//! Geographic identifiers.
//!
//! `RegionCode` is the raw identifier found in source tables (a state FIPS
//! code). `RegionName` is the canonical name every lookup, aggregation, and
//! map feature is keyed on.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// A normalized raw region code.
///
/// Numeric codes are zero-padded to two digits so that `6`, `06` and `6.0`
/// (as exported by spreadsheet tools) all compare equal. Other codes are
/// trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RegionCode(String);

impl RegionCode {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Ok(n) = trimmed.parse::<u32>() {
            return Self(format!("{n:02}"));
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                return Self(format!("{:02}", f as u32));
            }
        }
        Self(trimmed.to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical region name.
///
/// Cheap to clone (shared `Arc<str>`). Outside the region directory, obtain
/// values through `RegionDirectory::resolve_name` or `canonicalize` rather
/// than constructing them from arbitrary strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionName(Arc<str>);

impl RegionName {
    pub fn canonical(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RegionName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RegionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for RegionName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
