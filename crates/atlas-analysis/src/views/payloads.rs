//! View payloads handed to the presentation layer.

use std::collections::BTreeMap;
use std::fmt;

use atlas_core::config::WordcloudConfig;
use atlas_core::{EventSentimentPair, RegionName, Stance, Year, YearMonth};
use serde::Serialize;

use super::types::ViewName;

/// Fixed color scale bounds of the choropleth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDomain {
    pub min: f64,
    pub max: f64,
}

/// Mean sentiment per region for one stance and year. Regions without
/// records are absent; the presentation layer renders them as no-data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub stance: Stance,
    pub year: Year,
    pub color_domain: ColorDomain,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub sentiment: f64,
}

/// One county's rows, ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountySeries {
    pub county: String,
    pub points: Vec<SeriesPoint>,
}

/// County series of one region, ordered by county name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyTimeseriesView {
    pub region: RegionName,
    pub series: Vec<CountySeries>,
}

/// Opaque identifier of a pre-rendered image asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageId(String);

impl ImageId {
    /// `new_wordcloud_{stance}_{year}.png`
    pub fn wordcloud(stance: Stance, asset_year: i32) -> Self {
        Self(format!("new_wordcloud_{}_{}.png", stance.name(), asset_year))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordcloudImage {
    /// Year shown next to the image.
    pub label_year: i32,
    pub image: ImageId,
}

/// Early and late word clouds of one stance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordcloudView {
    pub stance: Stance,
    pub early: WordcloudImage,
    pub late: WordcloudImage,
}

impl WordcloudView {
    pub fn lookup(stance: Stance, config: &WordcloudConfig) -> Self {
        Self {
            stance,
            early: WordcloudImage {
                label_year: config.early_year,
                image: ImageId::wordcloud(stance, config.early_year),
            },
            late: WordcloudImage {
                label_year: config.late_year,
                image: ImageId::wordcloud(stance, config.late_asset_year),
            },
        }
    }

    pub fn images(&self) -> [&ImageId; 2] {
        [&self.early.image, &self.late.image]
    }
}

/// One side of a disaster event's before/after comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPoint {
    pub year_month: YearMonth,
    pub event_id: String,
    pub declaration_title: String,
    pub sentiment: f64,
}

/// Average sentiment before and after each disaster declaration, as two
/// scatter series ordered by (year_month, event_id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventComparisonView {
    pub before: Vec<EventPoint>,
    pub after: Vec<EventPoint>,
}

impl EventComparisonView {
    pub fn from_pairs(pairs: &[EventSentimentPair]) -> Self {
        let mut ordered: Vec<&EventSentimentPair> = pairs.iter().collect();
        ordered.sort_by(|a, b| {
            a.year_month
                .cmp(&b.year_month)
                .then_with(|| a.event_id.cmp(&b.event_id))
        });

        let point = |pair: &EventSentimentPair, sentiment: f64| EventPoint {
            year_month: pair.year_month,
            event_id: pair.event_id.clone(),
            declaration_title: pair.declaration_title.clone(),
            sentiment,
        };
        Self {
            before: ordered.iter().map(|p| point(*p, p.sentiment_before)).collect(),
            after: ordered.iter().map(|p| point(*p, p.sentiment_after)).collect(),
        }
    }
}

/// Any view's payload, tagged with the view it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", content = "payload", rename_all = "snake_case")]
pub enum ViewPayload {
    Map(MapView),
    CountyTimeseries(CountyTimeseriesView),
    Wordcloud(WordcloudView),
    EventComparison(EventComparisonView),
}

impl ViewPayload {
    pub fn view(&self) -> ViewName {
        match self {
            Self::Map(_) => ViewName::Map,
            Self::CountyTimeseries(_) => ViewName::CountyTimeseries,
            Self::Wordcloud(_) => ViewName::Wordcloud,
            Self::EventComparison(_) => ViewName::EventComparison,
        }
    }
}
