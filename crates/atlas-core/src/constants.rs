//! Constants shared across the workspace.

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "ATLAS_LOG";

/// First selectable year.
pub const DEFAULT_YEAR_MIN: i32 = 2009;
/// Last selectable year.
pub const DEFAULT_YEAR_MAX: i32 = 2019;

/// Choropleth color domain used by the map view.
pub const DEFAULT_COLOR_MIN: f64 = -0.3;
pub const DEFAULT_COLOR_MAX: f64 = 0.3;

/// Bounds every sentiment score must respect.
pub const SENTIMENT_MIN: f64 = -1.0;
pub const SENTIMENT_MAX: f64 = 1.0;

/// Default number of memoized aggregation results.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Table names used in load errors and logs.
pub mod tables {
    pub const STANCE: &str = "stance_sentiment";
    pub const COUNTY: &str = "county_sentiment";
    pub const EVENTS: &str = "event_sentiment";
    pub const REGIONS: &str = "region_directory";
}

/// Required header names of each source table.
pub mod columns {
    pub const STANCE: &str = "stance";
    pub const STATE_CODE: &str = "state";
    pub const YEAR: &str = "year";
    pub const SENTIMENT: &str = "sentiment";

    pub const STATE_NAME: &str = "state_name";
    pub const COUNTY_NAME: &str = "county_name";

    pub const EVENT_ID: &str = "disasterNumber";
    pub const DECLARATION_TITLE: &str = "declarationTitle";
    pub const DECLARATION_DATE: &str = "declarationDate";
    pub const SENTIMENT_BEFORE: &str = "Avg_Sentiment_Before";
    pub const SENTIMENT_AFTER: &str = "Avg_Sentiment_After";

    pub const REGION_CODE: &str = "code";
    pub const REGION_NAME: &str = "name";

    pub const STANCE_TABLE: &[&str] = &[STANCE, STATE_CODE, YEAR, SENTIMENT];
    pub const COUNTY_TABLE: &[&str] = &[STATE_NAME, COUNTY_NAME, YEAR, SENTIMENT];
    pub const EVENT_TABLE: &[&str] = &[
        EVENT_ID,
        DECLARATION_TITLE,
        DECLARATION_DATE,
        SENTIMENT_BEFORE,
        SENTIMENT_AFTER,
    ];
    pub const REGION_TABLE: &[&str] = &[REGION_CODE, REGION_NAME];
}
