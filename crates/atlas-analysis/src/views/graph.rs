//! View binding graph: validates input changes, commits them to the
//! session's selection, and recomputes the dependent views.
//!
//! One `ViewGraph` is shared by every session. Sessions own their
//! selection and the last payload of each view; `dispatch` is the only way
//! to change either.

use std::collections::BTreeMap;
use std::sync::Arc;

use atlas_core::config::{MapConfig, WordcloudConfig};
use atlas_core::errors::{ConfigResult, SelectionResult, StartupResult};
use atlas_core::{AtlasConfig, InvalidSelectionError, Stance, YearDomain};
use atlas_storage::{DatasetSources, DatasetStore};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::dependencies::DependencyTable;
use super::payloads::{
    ColorDomain, CountySeries, CountyTimeseriesView, EventComparisonView, MapView, SeriesPoint,
    ViewPayload, WordcloudView,
};
use super::sink::ViewSink;
use super::types::{InputChange, InputField, Selection, ValidatedChange, ViewName};
use crate::aggregation::{AggregationEngine, Filters};

/// Views recomputed by one accepted input change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewUpdate {
    pub field: InputField,
    pub payloads: Vec<ViewPayload>,
}

impl ViewUpdate {
    pub fn views(&self) -> Vec<ViewName> {
        self.payloads.iter().map(ViewPayload::view).collect()
    }
}

/// Per-session state: the selection and the last payload of every view.
#[derive(Debug, Clone)]
pub struct Session {
    selection: Selection,
    map: MapView,
    county_timeseries: CountyTimeseriesView,
    wordcloud: WordcloudView,
    event_comparison: EventComparisonView,
}

impl Session {
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn map_view(&self) -> &MapView {
        &self.map
    }

    pub fn county_timeseries_view(&self) -> &CountyTimeseriesView {
        &self.county_timeseries
    }

    pub fn wordcloud_view(&self) -> &WordcloudView {
        &self.wordcloud
    }

    pub fn event_comparison_view(&self) -> &EventComparisonView {
        &self.event_comparison
    }

    /// Current payload of `view`.
    pub fn payload(&self, view: ViewName) -> ViewPayload {
        match view {
            ViewName::Map => ViewPayload::Map(self.map.clone()),
            ViewName::CountyTimeseries => ViewPayload::CountyTimeseries(self.county_timeseries.clone()),
            ViewName::Wordcloud => ViewPayload::Wordcloud(self.wordcloud.clone()),
            ViewName::EventComparison => ViewPayload::EventComparison(self.event_comparison.clone()),
        }
    }

    fn store(&mut self, payload: ViewPayload) {
        match payload {
            ViewPayload::Map(v) => self.map = v,
            ViewPayload::CountyTimeseries(v) => self.county_timeseries = v,
            ViewPayload::Wordcloud(v) => self.wordcloud = v,
            ViewPayload::EventComparison(v) => self.event_comparison = v,
        }
    }
}

/// Shared, read-only dispatcher over one dataset.
pub struct ViewGraph {
    store: Arc<DatasetStore>,
    engine: AggregationEngine,
    dependencies: DependencyTable,
    year_domain: YearDomain,
    map: MapConfig,
    wordcloud: WordcloudConfig,
    event_comparison: EventComparisonView,
}

impl ViewGraph {
    /// Build a graph over an already loaded store.
    ///
    /// The config is validated first, so the default selection always lies
    /// inside the configured year domain.
    pub fn new(store: Arc<DatasetStore>, config: &AtlasConfig) -> ConfigResult<Self> {
        config.validate()?;
        let event_comparison = EventComparisonView::from_pairs(store.event_pairs());
        Ok(Self {
            engine: AggregationEngine::new(&config.cache),
            dependencies: DependencyTable::standard(),
            year_domain: config.selection.year_domain(),
            map: config.map.clone(),
            wordcloud: config.wordcloud.clone(),
            event_comparison,
            store,
        })
    }

    /// Validate the config, load the configured sources and build a graph
    /// over them.
    pub fn from_config(config: &AtlasConfig) -> StartupResult<Self> {
        config.validate()?;
        let store = DatasetStore::load(&DatasetSources::from(&config.sources))?;
        Ok(Self::new(Arc::new(store), config)?)
    }

    pub fn store(&self) -> &Arc<DatasetStore> {
        &self.store
    }

    pub fn engine(&self) -> &AggregationEngine {
        &self.engine
    }

    pub fn dependencies(&self) -> &DependencyTable {
        &self.dependencies
    }

    pub fn year_domain(&self) -> YearDomain {
        self.year_domain
    }

    /// Start a session with the default selection and every view rendered.
    ///
    /// Defaults: believer, the first selectable year, the first region with
    /// county data, and neutral word clouds.
    pub fn open_session(&self) -> Session {
        let selection = Selection::new(
            Stance::Believer,
            self.year_domain.first(),
            self.store.default_region().clone(),
            Stance::Neutral,
        );
        let session = Session {
            map: self.map_view(&selection),
            county_timeseries: self.county_timeseries_view(&selection),
            wordcloud: self.wordcloud_view(&selection),
            event_comparison: self.event_comparison.clone(),
            selection,
        };
        info!(
            stance = %session.selection.stance(),
            year = %session.selection.year(),
            region = %session.selection.region(),
            "session opened"
        );
        session
    }

    /// Apply one input change.
    ///
    /// The change is validated first; on failure the session is untouched,
    /// nothing is emitted and the error is returned. Otherwise every view
    /// that depends on the changed field is recomputed against the new
    /// selection, the selection and views are committed together, and the
    /// payloads are emitted to `sink`.
    pub fn dispatch(
        &self,
        session: &mut Session,
        change: InputChange,
        sink: &mut dyn ViewSink,
    ) -> SelectionResult<ViewUpdate> {
        let field = change.field();
        let validated = self.validate(change).map_err(|err| {
            warn!(field = %field, error = %err, "input change rejected");
            err
        })?;

        let mut next = session.selection.clone();
        next.apply(validated);

        let payloads: Vec<ViewPayload> = self
            .dependencies
            .dependents(field)
            .iter()
            .map(|view| self.render(*view, &next))
            .collect();

        session.selection = next;
        for payload in &payloads {
            session.store(payload.clone());
            sink.emit(payload);
        }
        debug!(field = %field, views = payloads.len(), "views recomputed");

        Ok(ViewUpdate { field, payloads })
    }

    /// Compute `view` for an arbitrary selection.
    pub fn render(&self, view: ViewName, selection: &Selection) -> ViewPayload {
        debug!(view = %view, "rendering view");
        match view {
            ViewName::Map => ViewPayload::Map(self.map_view(selection)),
            ViewName::CountyTimeseries => ViewPayload::CountyTimeseries(self.county_timeseries_view(selection)),
            ViewName::Wordcloud => ViewPayload::Wordcloud(self.wordcloud_view(selection)),
            ViewName::EventComparison => ViewPayload::EventComparison(self.event_comparison.clone()),
        }
    }

    fn validate(&self, change: InputChange) -> SelectionResult<ValidatedChange> {
        match change {
            InputChange::Stance(raw) => parse_stance(InputField::Stance, raw).map(ValidatedChange::Stance),
            InputChange::Year(raw) => self.year_domain.validate(raw).map(ValidatedChange::Year),
            InputChange::Region(raw) => {
                let region = self.store.directory().resolve_name(&raw)?;
                Ok(ValidatedChange::Region(region))
            }
            InputChange::WordcloudStance(raw) => {
                parse_stance(InputField::WordcloudStance, raw).map(ValidatedChange::WordcloudStance)
            }
        }
    }

    fn map_view(&self, selection: &Selection) -> MapView {
        let filters = Filters::new()
            .stance(selection.stance())
            .year(selection.year().value());
        let means = self.engine.region_means(&self.store, filters);
        MapView {
            stance: selection.stance(),
            year: selection.year(),
            color_domain: ColorDomain {
                min: self.map.color_min,
                max: self.map.color_max,
            },
            values: means.means(),
        }
    }

    fn county_timeseries_view(&self, selection: &Selection) -> CountyTimeseriesView {
        let region = selection.region();
        let mut by_county: BTreeMap<&str, Vec<SeriesPoint>> = BTreeMap::new();
        for row in self.store.county_records_for(region.as_str()) {
            by_county.entry(row.county_name.as_str()).or_default().push(SeriesPoint {
                year: row.year,
                sentiment: row.sentiment,
            });
        }

        let series = by_county
            .into_iter()
            .map(|(county, mut points)| {
                // Stable, so same-year rows keep table order.
                points.sort_by_key(|p| p.year);
                CountySeries {
                    county: county.to_string(),
                    points,
                }
            })
            .collect();

        CountyTimeseriesView {
            region: region.clone(),
            series,
        }
    }

    fn wordcloud_view(&self, selection: &Selection) -> WordcloudView {
        WordcloudView::lookup(selection.wordcloud_stance(), &self.wordcloud)
    }
}

fn parse_stance(field: InputField, raw: String) -> SelectionResult<Stance> {
    Stance::parse_str(&raw).ok_or(InvalidSelectionError::UnknownStance {
        field: field.name(),
        value: raw,
    })
}
