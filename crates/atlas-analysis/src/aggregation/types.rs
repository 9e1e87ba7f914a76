//! Aggregation inputs and outputs.

use std::collections::BTreeMap;

use atlas_core::{CountySentimentRecord, SentimentRecord, Stance};
use serde::Serialize;

/// The field records are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    RegionName,
    CountyName,
}

/// Which store table an aggregation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Records,
    County,
}

/// Exact-match predicates. `None` means the field is unconstrained.
///
/// A record that does not carry a constrained field never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Filters {
    pub stance: Option<Stance>,
    pub year: Option<i32>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stance(mut self, stance: Stance) -> Self {
        self.stance = Some(stance);
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn matches<R: Aggregatable + ?Sized>(&self, record: &R) -> bool {
        let stance_ok = match self.stance {
            Some(wanted) => record.stance() == Some(wanted),
            None => true,
        };
        let year_ok = match self.year {
            Some(wanted) => record.year() == Some(wanted),
            None => true,
        };
        stance_ok && year_ok
    }
}

/// Read access to the fields aggregation filters and groups on.
pub trait Aggregatable {
    fn stance(&self) -> Option<Stance>;
    fn year(&self) -> Option<i32>;
    fn sentiment(&self) -> f64;
    /// Value of the grouping field, `None` when the record lacks it.
    fn group_value(&self, key: GroupKey) -> Option<&str>;
}

impl Aggregatable for SentimentRecord {
    fn stance(&self) -> Option<Stance> {
        Some(self.stance)
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn sentiment(&self) -> f64 {
        self.sentiment
    }

    fn group_value(&self, key: GroupKey) -> Option<&str> {
        match key {
            GroupKey::RegionName => Some(self.region_name.as_str()),
            GroupKey::CountyName => None,
        }
    }
}

impl Aggregatable for CountySentimentRecord {
    fn stance(&self) -> Option<Stance> {
        None
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn sentiment(&self) -> f64 {
        self.sentiment
    }

    fn group_value(&self, key: GroupKey) -> Option<&str> {
        match key {
            GroupKey::RegionName => Some(self.region_name.as_str()),
            GroupKey::CountyName => Some(self.county_name.as_str()),
        }
    }
}

/// Mean and sample size of one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupStats {
    pub mean: f64,
    pub count: usize,
}

/// Group value → stats, ordered by group value. Groups without matching
/// records are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GroupedMeans {
    groups: BTreeMap<String, GroupStats>,
}

impl GroupedMeans {
    pub(crate) fn from_groups(groups: BTreeMap<String, GroupStats>) -> Self {
        Self { groups }
    }

    pub fn get(&self, group: &str) -> Option<&GroupStats> {
        self.groups.get(group)
    }

    pub fn mean(&self, group: &str) -> Option<f64> {
        self.groups.get(group).map(|s| s.mean)
    }

    /// Group value → mean, dropping the counts.
    pub fn means(&self) -> BTreeMap<String, f64> {
        self.groups.iter().map(|(k, s)| (k.clone(), s.mean)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupStats)> {
        self.groups.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
