//! Aggregation benchmarks: raw grouped means, and map views with and
//! without memoization.

use std::sync::Arc;

use atlas_analysis::aggregation::aggregate;
use atlas_analysis::{Filters, GroupKey, InputChange, RecordingSink, ViewGraph};
use atlas_core::{AtlasConfig, RegionCode, SentimentRecord, Stance};
use atlas_storage::{DatasetStore, RegionDirectory};
use criterion::{criterion_group, criterion_main, Criterion};

/// Synthetic records spread over every state, stance and year.
fn generate_records(directory: &RegionDirectory, count: usize) -> Vec<SentimentRecord> {
    let names = directory.names();
    (0..count)
        .map(|i| {
            let name = &names[i % names.len()];
            let code: &RegionCode = directory.code_for(name.as_str()).expect("directory name has a code");
            SentimentRecord {
                stance: Stance::all()[i % 3],
                region_code: code.clone(),
                region_name: name.clone(),
                year: 2009 + (i % 11) as i32,
                sentiment: ((i * 7919) % 2001) as f64 / 1000.0 - 1.0,
            }
        })
        .collect()
}

fn generate_store(count: usize) -> DatasetStore {
    let directory = RegionDirectory::us_states();
    let records = generate_records(&directory, count);
    DatasetStore::from_parts(directory, records, Vec::new(), Vec::new()).expect("synthetic store is valid")
}

fn aggregate_benchmark(c: &mut Criterion) {
    let directory = RegionDirectory::us_states();
    let records = generate_records(&directory, 100_000);
    let filters = Filters::new().stance(Stance::Believer).year(2015);

    c.bench_function("aggregate_100k_filtered", |b| {
        b.iter(|| std::hint::black_box(aggregate(&records, GroupKey::RegionName, &filters)));
    });

    c.bench_function("aggregate_100k_unfiltered", |b| {
        b.iter(|| std::hint::black_box(aggregate(&records, GroupKey::RegionName, &Filters::new())));
    });
}

fn map_view_benchmark(c: &mut Criterion) {
    let store = Arc::new(generate_store(100_000));

    let cached = ViewGraph::new(Arc::clone(&store), &AtlasConfig::default()).expect("default config is valid");
    let mut config = AtlasConfig::default();
    config.cache.enabled = false;
    let uncached = ViewGraph::new(store, &config).expect("config is valid");

    for (label, graph) in [("map_view_year_toggle_cached", &cached), ("map_view_year_toggle_uncached", &uncached)] {
        let mut session = graph.open_session();
        let mut sink = RecordingSink::new();
        c.bench_function(label, |b| {
            b.iter(|| {
                for year in [2012, 2013] {
                    let update = graph
                        .dispatch(&mut session, InputChange::Year(year), &mut sink)
                        .expect("year in domain");
                    std::hint::black_box(update);
                }
                sink.take();
            });
        });
    }
}

criterion_group!(benches, aggregate_benchmark, map_view_benchmark);
criterion_main!(benches);
