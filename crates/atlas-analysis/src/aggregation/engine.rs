//! Deterministic grouped means.

use std::collections::BTreeMap;
use std::sync::Arc;

use atlas_core::config::CacheConfig;
use atlas_core::FxHashMap;
use atlas_storage::DatasetStore;
use tracing::debug;

use super::cache::{AggregationCache, AggregationKey};
use super::types::{Aggregatable, Dataset, Filters, GroupKey, GroupStats, GroupedMeans};

/// Mean sentiment per group over the records that match `filters`.
///
/// The result does not depend on input order: each group's values are
/// sorted with `f64::total_cmp` and summed in that order, and the output is
/// keyed by an ordered map. Records without the grouping field are skipped.
pub fn aggregate<'a, R, I>(records: I, group_key: GroupKey, filters: &Filters) -> GroupedMeans
where
    R: Aggregatable + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut values: FxHashMap<&'a str, Vec<f64>> = FxHashMap::default();
    for record in records {
        if !filters.matches(record) {
            continue;
        }
        let Some(group) = record.group_value(group_key) else {
            continue;
        };
        values.entry(group).or_default().push(record.sentiment());
    }

    let groups = values
        .into_iter()
        .map(|(group, mut samples)| {
            samples.sort_by(f64::total_cmp);
            // Every sample lies in [-1, 1] and rounding is monotone, so the
            // sum stays within [-n, n] and the mean within [-1, 1].
            let sum: f64 = samples.iter().sum();
            let stats = GroupStats {
                mean: sum / samples.len() as f64,
                count: samples.len(),
            };
            (group.to_string(), stats)
        })
        .collect::<BTreeMap<_, _>>();

    GroupedMeans::from_groups(groups)
}

/// Runs aggregations against a store, memoizing when a cache is configured.
#[derive(Default)]
pub struct AggregationEngine {
    cache: Option<AggregationCache>,
}

impl AggregationEngine {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            cache: config.enabled.then(|| AggregationCache::new(config.capacity)),
        }
    }

    /// An engine that recomputes on every call.
    pub fn uncached() -> Self {
        Self { cache: None }
    }

    pub fn cache(&self) -> Option<&AggregationCache> {
        self.cache.as_ref()
    }

    /// Aggregate one store table.
    pub fn aggregate_store(
        &self,
        store: &DatasetStore,
        dataset: Dataset,
        group_key: GroupKey,
        filters: Filters,
    ) -> Arc<GroupedMeans> {
        let Some(cache) = &self.cache else {
            return Arc::new(compute(store, dataset, group_key, &filters));
        };

        let key = AggregationKey {
            dataset_id: store.fingerprint(),
            dataset,
            group_key,
            filters,
        };
        if let Some(hit) = cache.get(&key) {
            debug!(?dataset, ?group_key, ?filters, "aggregation cache hit");
            return hit;
        }
        let result = Arc::new(compute(store, dataset, group_key, &filters));
        cache.insert(key, Arc::clone(&result));
        result
    }

    /// Region means of record-level rows for one stance and year.
    pub fn region_means(&self, store: &DatasetStore, filters: Filters) -> Arc<GroupedMeans> {
        self.aggregate_store(store, Dataset::Records, GroupKey::RegionName, filters)
    }
}

fn compute(store: &DatasetStore, dataset: Dataset, group_key: GroupKey, filters: &Filters) -> GroupedMeans {
    match dataset {
        Dataset::Records => aggregate(store.records_for(filters.stance, filters.year), group_key, filters),
        Dataset::County => aggregate(store.county_records(), group_key, filters),
    }
}

#[cfg(test)]
mod tests {
    use atlas_core::{CountySentimentRecord, RegionCode, RegionName, SentimentRecord, Stance};
    use atlas_storage::RegionDirectory;

    use super::*;

    fn county(region: &str, county: &str, year: i32, sentiment: f64) -> CountySentimentRecord {
        CountySentimentRecord {
            region_name: RegionName::canonical(region),
            county_name: county.to_string(),
            year,
            sentiment,
        }
    }

    fn county_store() -> DatasetStore {
        DatasetStore::from_parts(
            RegionDirectory::us_states(),
            Vec::new(),
            vec![
                county("Texas", "Travis", 2010, 0.1),
                county("Texas", "Travis", 2010, 0.3),
                county("Texas", "Harris", 2011, -0.2),
                county("California", "Alameda", 2010, 0.5),
            ],
            Vec::new(),
        )
        .unwrap()
    }

    fn record(stance: Stance, code: &str, name: &str, year: i32, sentiment: f64) -> SentimentRecord {
        SentimentRecord {
            stance,
            region_code: RegionCode::new(code),
            region_name: RegionName::canonical(name),
            year,
            sentiment,
        }
    }

    #[test]
    fn groups_by_region_and_averages() {
        let records = vec![
            record(Stance::Believer, "06", "CA", 2010, 0.4),
            record(Stance::Believer, "06", "CA", 2010, 0.2),
            record(Stance::Believer, "36", "NY", 2010, -0.1),
        ];
        let filters = Filters::new().stance(Stance::Believer).year(2010);
        let means = aggregate(&records, GroupKey::RegionName, &filters);

        assert_eq!(means.len(), 2);
        assert!((means.mean("CA").unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(means.mean("NY"), Some(-0.1));
        assert_eq!(means.get("CA").unwrap().count, 2);
    }

    #[test]
    fn unmatched_groups_are_absent() {
        let records = vec![
            record(Stance::Believer, "06", "CA", 2010, 0.4),
            record(Stance::Denier, "36", "NY", 2010, -0.1),
        ];
        let means = aggregate(&records, GroupKey::RegionName, &Filters::new().stance(Stance::Believer));
        assert_eq!(means.mean("NY"), None);
        assert_eq!(means.len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let records: Vec<SentimentRecord> = Vec::new();
        assert!(aggregate(&records, GroupKey::RegionName, &Filters::new()).is_empty());
    }

    #[test]
    fn records_without_group_field_are_skipped() {
        let records = vec![record(Stance::Believer, "06", "CA", 2010, 0.4)];
        assert!(aggregate(&records, GroupKey::CountyName, &Filters::new()).is_empty());
    }

    #[test]
    fn county_rows_group_by_county_name() {
        let store = county_store();
        let engine = AggregationEngine::uncached();

        let all = engine.aggregate_store(&store, Dataset::County, GroupKey::CountyName, Filters::new());
        assert_eq!(all.len(), 3);
        assert!((all.mean("Travis").unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(all.get("Travis").unwrap().count, 2);
        assert_eq!(all.mean("Harris"), Some(-0.2));

        let in_2010 = engine.aggregate_store(&store, Dataset::County, GroupKey::CountyName, Filters::new().year(2010));
        let counties: Vec<&str> = in_2010.iter().map(|(name, _)| name).collect();
        assert_eq!(counties, vec!["Alameda", "Travis"]);

        let by_region = engine.aggregate_store(&store, Dataset::County, GroupKey::RegionName, Filters::new());
        assert!((by_region.mean("Texas").unwrap() - 0.2 / 3.0).abs() < 1e-12);
        assert_eq!(by_region.mean("California"), Some(0.5));
    }

    #[test]
    fn stance_filter_never_matches_county_rows() {
        let store = county_store();
        let engine = AggregationEngine::uncached();

        let means = engine.aggregate_store(
            &store,
            Dataset::County,
            GroupKey::CountyName,
            Filters::new().stance(Stance::Believer).year(2010),
        );
        assert!(means.is_empty());
        assert!(aggregate(store.county_records(), GroupKey::CountyName, &Filters::new().stance(Stance::Neutral)).is_empty());
    }

    #[test]
    fn cached_county_aggregation_is_reused() {
        let store = county_store();
        let engine = AggregationEngine::new(&CacheConfig::default());
        let filters = Filters::new().year(2010);

        let first = engine.aggregate_store(&store, Dataset::County, GroupKey::CountyName, filters);
        let second = engine.aggregate_store(&store, Dataset::County, GroupKey::CountyName, filters);
        assert!(Arc::ptr_eq(&first, &second));

        // Same filters on the other table are a separate entry.
        let records = engine.aggregate_store(&store, Dataset::Records, GroupKey::CountyName, filters);
        assert!(records.is_empty());

        let cache = engine.cache().unwrap();
        assert_eq!(cache.hit_count(), 1);
        assert_eq!(cache.miss_count(), 2);
    }

    #[test]
    fn order_does_not_change_bits() {
        let values = [0.1, 0.7, -0.3, 0.2, 1e-9, -0.55, 0.33];
        let forward: Vec<_> = values
            .iter()
            .map(|v| record(Stance::Neutral, "06", "CA", 2015, *v))
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        let a = aggregate(&forward, GroupKey::RegionName, &Filters::new());
        let b = aggregate(&reversed, GroupKey::RegionName, &Filters::new());
        assert_eq!(a.mean("CA").unwrap().to_bits(), b.mean("CA").unwrap().to_bits());
    }
}
