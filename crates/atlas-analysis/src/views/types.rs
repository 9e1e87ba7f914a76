//! Selection state and the boundary events that change it.

use std::fmt;

use atlas_core::{RegionName, Stance, Year};
use serde::Serialize;

/// A user-controllable selection field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Stance,
    Year,
    Region,
    WordcloudStance,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[Self::Stance, Self::Year, Self::Region, Self::WordcloudStance]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stance => "stance",
            Self::Year => "year",
            Self::Region => "region",
            Self::WordcloudStance => "wordcloud_stance",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewName {
    Map,
    CountyTimeseries,
    Wordcloud,
    EventComparison,
}

impl ViewName {
    pub fn all() -> &'static [ViewName] {
        &[Self::Map, Self::CountyTimeseries, Self::Wordcloud, Self::EventComparison]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Map => "map_view",
            Self::CountyTimeseries => "county_timeseries_view",
            Self::Wordcloud => "wordcloud_view",
            Self::EventComparison => "event_comparison_view",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An input-change event as it arrives from the presentation layer.
/// Values are unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputChange {
    Stance(String),
    Year(i64),
    Region(String),
    WordcloudStance(String),
}

impl InputChange {
    pub fn field(&self) -> InputField {
        match self {
            Self::Stance(_) => InputField::Stance,
            Self::Year(_) => InputField::Year,
            Self::Region(_) => InputField::Region,
            Self::WordcloudStance(_) => InputField::WordcloudStance,
        }
    }
}

/// An `InputChange` whose value passed domain validation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ValidatedChange {
    Stance(Stance),
    Year(Year),
    Region(RegionName),
    WordcloudStance(Stance),
}

/// Current value of every input field for one session.
///
/// Only the view graph's dispatcher changes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    stance: Stance,
    year: Year,
    region: RegionName,
    wordcloud_stance: Stance,
}

impl Selection {
    pub(crate) fn new(stance: Stance, year: Year, region: RegionName, wordcloud_stance: Stance) -> Self {
        Self {
            stance,
            year,
            region,
            wordcloud_stance,
        }
    }

    pub fn stance(&self) -> Stance {
        self.stance
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn region(&self) -> &RegionName {
        &self.region
    }

    pub fn wordcloud_stance(&self) -> Stance {
        self.wordcloud_stance
    }

    pub(crate) fn apply(&mut self, change: ValidatedChange) {
        match change {
            ValidatedChange::Stance(stance) => self.stance = stance,
            ValidatedChange::Year(year) => self.year = year,
            ValidatedChange::Region(region) => self.region = region,
            ValidatedChange::WordcloudStance(stance) => self.wordcloud_stance = stance,
        }
    }
}
