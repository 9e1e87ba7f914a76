//! View binding graph: defaults, dependency-scoped recomputation, atomic
//! rejection, and payload determinism.

use std::sync::Arc;

use atlas_analysis::views::ViewPayload;
use atlas_analysis::{InputChange, InputField, RecordingSink, ViewGraph, ViewName};
use atlas_core::{
    AtlasConfig, AtlasErrorCode, ConfigError, CountySentimentRecord, EventSentimentPair, InvalidSelectionError,
    RegionCode, RegionName, SentimentRecord, Stance, UnknownRegionError, YearMonth,
};
use atlas_storage::{DatasetStore, RegionDirectory};

// ─── Helpers ───────────────────────────────────────────────────────────────

fn record(stance: Stance, code: &str, name: &str, year: i32, sentiment: f64) -> SentimentRecord {
    SentimentRecord {
        stance,
        region_code: RegionCode::new(code),
        region_name: RegionName::canonical(name),
        year,
        sentiment,
    }
}

fn county(region: &str, county: &str, year: i32, sentiment: f64) -> CountySentimentRecord {
    CountySentimentRecord {
        region_name: RegionName::canonical(region),
        county_name: county.to_string(),
        year,
        sentiment,
    }
}

fn event(id: &str, title: &str, year: i32, month: u8, before: f64, after: f64) -> EventSentimentPair {
    EventSentimentPair {
        event_id: id.to_string(),
        declaration_title: title.to_string(),
        year_month: YearMonth::new(year, month).unwrap(),
        sentiment_before: before,
        sentiment_after: after,
    }
}

fn fixture_store() -> DatasetStore {
    DatasetStore::from_parts(
        RegionDirectory::us_states(),
        vec![
            record(Stance::Believer, "06", "California", 2010, 0.4),
            record(Stance::Believer, "06", "California", 2010, 0.2),
            record(Stance::Believer, "36", "New York", 2010, -0.1),
            record(Stance::Believer, "36", "New York", 2011, 0.25),
            record(Stance::Denier, "48", "Texas", 2010, -0.3),
            record(Stance::Neutral, "06", "California", 2015, 0.1),
        ],
        vec![
            county("Texas", "Travis", 2012, 0.1),
            county("Texas", "Harris", 2010, -0.2),
            county("Texas", "Travis", 2010, 0.05),
            county("California", "Alameda", 2011, 0.3),
        ],
        vec![
            event("4337", "HURRICANE IRMA", 2017, 9, 0.05, -0.11),
            event("4332", "HURRICANE HARVEY", 2017, 8, 0.12, -0.08),
        ],
    )
    .unwrap()
}

fn fixture_graph() -> ViewGraph {
    ViewGraph::new(Arc::new(fixture_store()), &AtlasConfig::default()).unwrap()
}

fn json(payload: &impl serde::Serialize) -> String {
    serde_json::to_string(payload).unwrap()
}

// ─── Session defaults ──────────────────────────────────────────────────────

#[test]
fn open_session_uses_defaults() {
    let graph = fixture_graph();
    let session = graph.open_session();
    let selection = session.selection();

    assert_eq!(selection.stance(), Stance::Believer);
    assert_eq!(selection.year().value(), 2009);
    assert_eq!(selection.region().as_str(), "Texas");
    assert_eq!(selection.wordcloud_stance(), Stance::Neutral);

    // No believer rows for 2009: every region is absent, none is zero.
    assert!(session.map_view().values.is_empty());
    assert_eq!(session.map_view().color_domain.min, -0.3);
    assert_eq!(session.map_view().color_domain.max, 0.3);

    let wordcloud = session.wordcloud_view();
    assert_eq!(wordcloud.early.image.as_str(), "new_wordcloud_neutral_2009.png");
    assert_eq!(wordcloud.late.image.as_str(), "new_wordcloud_neutral_2018.png");
}

#[test]
fn county_series_are_ordered() {
    let graph = fixture_graph();
    let session = graph.open_session();
    let view = session.county_timeseries_view();

    assert_eq!(view.region.as_str(), "Texas");
    let counties: Vec<&str> = view.series.iter().map(|s| s.county.as_str()).collect();
    assert_eq!(counties, vec!["Harris", "Travis"]);

    let travis_years: Vec<i32> = view.series[1].points.iter().map(|p| p.year).collect();
    assert_eq!(travis_years, vec![2010, 2012]);
    assert_eq!(view.series[1].points[0].sentiment, 0.05);
}

#[test]
fn event_comparison_is_rendered_at_open() {
    let graph = fixture_graph();
    let session = graph.open_session();
    let view = session.event_comparison_view();

    assert_eq!(view.before.len(), 2);
    assert_eq!(view.before[0].event_id, "4332");
    assert_eq!(view.before[0].sentiment, 0.12);
    assert_eq!(view.after[1].declaration_title, "HURRICANE IRMA");
    assert_eq!(view.after[1].year_month.to_string(), "2017-09");
}

// ─── Dispatch ──────────────────────────────────────────────────────────────

#[test]
fn year_change_recomputes_only_the_map() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let county_before = session.county_timeseries_view().clone();
    let mut sink = RecordingSink::new();

    let update = graph
        .dispatch(&mut session, InputChange::Year(2010), &mut sink)
        .unwrap();

    assert_eq!(update.field, InputField::Year);
    assert_eq!(update.views(), vec![ViewName::Map]);
    assert_eq!(sink.views(), vec![ViewName::Map]);

    let values = &session.map_view().values;
    assert_eq!(values.len(), 2);
    assert!((values["California"] - 0.3).abs() < 1e-12);
    assert_eq!(values["New York"], -0.1);
    assert!(!values.contains_key("Texas"));

    assert_eq!(session.county_timeseries_view(), &county_before);
}

#[test]
fn stance_change_is_case_insensitive() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    graph
        .dispatch(&mut session, InputChange::Stance("  DENIER ".to_string()), &mut sink)
        .unwrap();

    assert_eq!(session.selection().stance(), Stance::Denier);
    let values = &session.map_view().values;
    assert_eq!(values.len(), 1);
    assert_eq!(values["Texas"], -0.3);
}

#[test]
fn out_of_range_year_is_rejected_and_nothing_changes() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();
    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    sink.take();

    let selection_before = session.selection().clone();
    let map_before = session.map_view().clone();

    let err = graph
        .dispatch(&mut session, InputChange::Year(2020), &mut sink)
        .unwrap_err();

    assert_eq!(err, InvalidSelectionError::YearOutOfRange { year: 2020, min: 2009, max: 2019 });
    assert_eq!(err.error_code(), "INVALID_SELECTION_YEAR");
    assert_eq!(session.selection(), &selection_before);
    assert_eq!(session.map_view(), &map_before);
    assert!(sink.emitted().is_empty());
}

#[test]
fn unknown_stance_is_rejected() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    let err = graph
        .dispatch(&mut session, InputChange::WordcloudStance("skeptic".to_string()), &mut sink)
        .unwrap_err();

    assert_eq!(
        err,
        InvalidSelectionError::UnknownStance {
            field: "wordcloud_stance",
            value: "skeptic".to_string()
        }
    );
    assert_eq!(session.selection().wordcloud_stance(), Stance::Neutral);
    assert!(sink.emitted().is_empty());
}

#[test]
fn region_without_county_rows_gives_empty_series() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    let update = graph
        .dispatch(&mut session, InputChange::Region("Wyoming".to_string()), &mut sink)
        .unwrap();

    assert_eq!(update.views(), vec![ViewName::CountyTimeseries]);
    let view = session.county_timeseries_view();
    assert_eq!(view.region.as_str(), "Wyoming");
    assert!(view.series.is_empty());
}

#[test]
fn region_names_resolve_case_insensitively() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    graph
        .dispatch(&mut session, InputChange::Region("california".to_string()), &mut sink)
        .unwrap();
    assert_eq!(session.selection().region().as_str(), "California");
    assert_eq!(session.county_timeseries_view().series[0].county, "Alameda");
}

#[test]
fn unknown_region_is_a_selection_error() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    let err = graph
        .dispatch(&mut session, InputChange::Region("Atlantis".to_string()), &mut sink)
        .unwrap_err();

    assert_eq!(
        err,
        InvalidSelectionError::UnknownRegion(UnknownRegionError::Name("Atlantis".to_string()))
    );
    assert_eq!(err.error_code(), "INVALID_SELECTION_REGION");
    assert_eq!(session.selection().region().as_str(), "Texas");
}

#[test]
fn wordcloud_change_leaves_other_views_alone() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();
    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    sink.take();

    let map_before = json(session.map_view());
    let county_before = json(session.county_timeseries_view());

    let update = graph
        .dispatch(&mut session, InputChange::WordcloudStance("believer".to_string()), &mut sink)
        .unwrap();

    assert_eq!(update.views(), vec![ViewName::Wordcloud]);
    assert_eq!(json(session.map_view()), map_before);
    assert_eq!(json(session.county_timeseries_view()), county_before);
    assert_eq!(
        session.wordcloud_view().early.image.as_str(),
        "new_wordcloud_believer_2009.png"
    );
}

#[test]
fn reissued_selection_gives_identical_payloads() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    let first = json(&session.payload(ViewName::Map));

    graph.dispatch(&mut session, InputChange::Year(2011), &mut sink).unwrap();
    assert_ne!(json(&session.payload(ViewName::Map)), first);

    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    assert_eq!(json(&session.payload(ViewName::Map)), first);

    // A fresh graph without memoization agrees bit for bit.
    let mut config = AtlasConfig::default();
    config.cache.enabled = false;
    let uncached = ViewGraph::new(Arc::new(fixture_store()), &config).unwrap();
    let mut other = uncached.open_session();
    uncached.dispatch(&mut other, InputChange::Year(2010), &mut sink).unwrap();
    assert_eq!(json(&other.payload(ViewName::Map)), first);
}

#[test]
fn sessions_are_independent() {
    let graph = fixture_graph();
    let mut a = graph.open_session();
    let b = graph.open_session();
    let mut sink = RecordingSink::new();

    graph.dispatch(&mut a, InputChange::Year(2011), &mut sink).unwrap();
    assert_eq!(a.selection().year().value(), 2011);
    assert_eq!(b.selection().year().value(), 2009);
}

#[test]
fn emitted_payloads_match_session_state() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    match &sink.emitted()[0] {
        ViewPayload::Map(map) => assert_eq!(map, session.map_view()),
        other => panic!("unexpected payload {:?}", other.view()),
    }
}

#[test]
fn payload_json_is_tagged_by_view() {
    let graph = fixture_graph();
    let session = graph.open_session();
    let value: serde_json::Value = serde_json::to_value(session.payload(ViewName::Wordcloud)).unwrap();

    assert_eq!(value["view"], "wordcloud");
    assert_eq!(value["payload"]["stance"], "neutral");
    assert_eq!(value["payload"]["late"]["label_year"], 2019);
}

// ─── Memoization ───────────────────────────────────────────────────────────

#[test]
fn repeated_aggregations_hit_the_cache() {
    let graph = fixture_graph();
    let mut session = graph.open_session();
    let mut sink = RecordingSink::new();

    for year in [2010, 2011, 2010, 2011] {
        graph.dispatch(&mut session, InputChange::Year(year), &mut sink).unwrap();
    }

    let cache = graph.engine().cache().unwrap();
    // 2009 at open, then 2010 and 2011 once each.
    assert_eq!(cache.miss_count(), 3);
    assert_eq!(cache.hit_count(), 2);
    assert!((cache.hit_rate() - 0.4).abs() < 1e-12);
    assert_eq!(cache.entry_count(), 3);

    cache.clear();
    assert_eq!(cache.entry_count(), 0);
    graph.dispatch(&mut session, InputChange::Year(2010), &mut sink).unwrap();
    assert_eq!(cache.miss_count(), 4);
    assert_eq!(cache.hit_count(), 2);
}

#[test]
fn fresh_cache_has_zero_hit_rate() {
    let graph = fixture_graph();
    assert_eq!(graph.engine().cache().unwrap().hit_rate(), 0.0);
}

#[test]
fn disabled_cache_is_absent() {
    let mut config = AtlasConfig::default();
    config.cache.enabled = false;
    let graph = ViewGraph::new(Arc::new(fixture_store()), &config).unwrap();
    assert!(graph.engine().cache().is_none());
}

#[test]
fn inverted_year_domain_is_rejected_at_construction() {
    let mut config = AtlasConfig::default();
    config.selection.year_min = 2019;
    config.selection.year_max = 2009;

    let err = ViewGraph::new(Arc::new(fixture_store()), &config).err().unwrap();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert_eq!(err.error_code(), "CONFIG_INVALID");
}

#[test]
fn graph_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ViewGraph>();
}
