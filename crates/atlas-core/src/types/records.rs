//! Immutable rows of the three source datasets.

use serde::Serialize;

use super::region::{RegionCode, RegionName};
use super::stance::Stance;
use super::time::YearMonth;

/// Record-level sentiment for one stance, state, and year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentRecord {
    pub stance: Stance,
    pub region_code: RegionCode,
    /// Canonical name filled in by the normalizer at load time.
    pub region_name: RegionName,
    pub year: i32,
    pub sentiment: f64,
}

/// County-level sentiment for one county and year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountySentimentRecord {
    pub region_name: RegionName,
    pub county_name: String,
    pub year: i32,
    pub sentiment: f64,
}

/// Average sentiment before and after a disaster declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSentimentPair {
    pub event_id: String,
    pub declaration_title: String,
    pub year_month: YearMonth,
    pub sentiment_before: f64,
    pub sentiment_after: f64,
}
