//! Content fingerprint of a loaded dataset.
//!
//! Identifies a `DatasetStore` in aggregation memo keys. Two stores loaded
//! from identical tables share a fingerprint; any differing row changes it.

use std::fmt;

use atlas_core::{CountySentimentRecord, EventSentimentPair, SentimentRecord};
use xxhash_rust::xxh3::Xxh3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetFingerprint(u64);

impl DatasetFingerprint {
    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn compute(
        records: &[SentimentRecord],
        county: &[CountySentimentRecord],
        events: &[EventSentimentPair],
    ) -> Self {
        let mut hasher = Xxh3::new();

        hasher.update(&(records.len() as u64).to_le_bytes());
        for r in records {
            hash_str(&mut hasher, r.stance.name());
            hash_str(&mut hasher, r.region_code.as_str());
            hash_str(&mut hasher, r.region_name.as_str());
            hasher.update(&r.year.to_le_bytes());
            hasher.update(&r.sentiment.to_bits().to_le_bytes());
        }

        hasher.update(&(county.len() as u64).to_le_bytes());
        for r in county {
            hash_str(&mut hasher, r.region_name.as_str());
            hash_str(&mut hasher, &r.county_name);
            hasher.update(&r.year.to_le_bytes());
            hasher.update(&r.sentiment.to_bits().to_le_bytes());
        }

        hasher.update(&(events.len() as u64).to_le_bytes());
        for e in events {
            hash_str(&mut hasher, &e.event_id);
            hash_str(&mut hasher, &e.declaration_title);
            hasher.update(&e.year_month.year.to_le_bytes());
            hasher.update(&[e.year_month.month]);
            hasher.update(&e.sentiment_before.to_bits().to_le_bytes());
            hasher.update(&e.sentiment_after.to_bits().to_le_bytes());
        }

        Self(hasher.digest())
    }
}

/// Length-prefixed so that adjacent fields cannot run into each other.
fn hash_str(hasher: &mut Xxh3, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

impl fmt::Display for DatasetFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
