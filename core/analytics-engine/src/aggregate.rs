//! FILENAME: core/analytics-engine/src/aggregate.rs
//! PURPOSE: Grouping records by a categorical dimension and reducing to sums.
//! CONTEXT: One accumulation algorithm serves every dimension: a single
//! pass folds each record's measures into its group's `MeasureSums`, with
//! groups kept in first-encounter order so ties sort stably; a second pass
//! resolves the selected metric and sorts. Every chart-facing breakdown is
//! a thin specialization of this loop rather than its own copy.

use crate::metric::MeasureSums;
use model::{
    category_color, region_color, segment_color, ship_mode_color, subcategory_color,
    ChartDatum, Metric, StateEntry, SubcategoryEntry, TransactionRecord, COLOR_FALLBACK_GRAY,
};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// One aggregation group: its key, a passthrough attribute captured from
/// the first record seen for the key (state for cities, region for states,
/// parent category for subcategories), and the accumulated sums.
#[derive(Debug, Clone)]
pub(crate) struct Group {
    pub key: String,
    pub tag: String,
    pub sums: MeasureSums,
}

/// Single-pass grouped accumulation. `key_fn` extracts the grouping
/// dimension, `tag_fn` the passthrough attribute (empty closure result for
/// dimensions without one). Returns groups in first-encounter order.
pub(crate) fn group_by<'a>(
    records: &'a [TransactionRecord],
    key_fn: impl Fn(&'a TransactionRecord) -> &'a str,
    tag_fn: impl Fn(&'a TransactionRecord) -> &'a str,
) -> Vec<Group> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<Group> = Vec::new();

    for record in records {
        let key = key_fn(record);
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                key: key.to_string(),
                tag: tag_fn(record).to_string(),
                sums: MeasureSums::default(),
            });
            groups.len() - 1
        });
        groups[slot].sums.add(record);
    }

    groups
}

/// Stable descending sort by `f64`; ties keep their existing order.
pub(crate) fn sort_desc_by<T>(items: &mut [T], value_fn: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| {
        value_fn(b)
            .partial_cmp(&value_fn(a))
            .unwrap_or(Ordering::Equal)
    });
}

/// Groups by `key_fn`, resolves the selected metric per group, annotates
/// with `color_fn`, and sorts descending by value (stable on ties).
fn breakdown<'a>(
    records: &'a [TransactionRecord],
    metric: Metric,
    key_fn: impl Fn(&'a TransactionRecord) -> &'a str,
    color_fn: impl Fn(&str) -> Option<&'static str>,
) -> Vec<ChartDatum> {
    let mut data: Vec<ChartDatum> = group_by(records, key_fn, |_| "")
        .into_iter()
        .map(|group| {
            let color = color_fn(&group.key).unwrap_or(COLOR_FALLBACK_GRAY);
            ChartDatum {
                value: group.sums.resolve(metric),
                name: group.key,
                color: Some(color.to_string()),
            }
        })
        .collect();
    sort_desc_by(&mut data, |d| d.value);
    data
}

/// Per-category totals for the selected metric, descending by value.
pub fn aggregate_by_category(records: &[TransactionRecord], metric: Metric) -> Vec<ChartDatum> {
    breakdown(records, metric, |r| &r.category, category_color)
}

/// Per-segment totals for the selected metric, descending by value.
pub fn aggregate_by_segment(records: &[TransactionRecord], metric: Metric) -> Vec<ChartDatum> {
    breakdown(records, metric, |r| &r.segment, segment_color)
}

/// Per-region totals for the selected metric, descending by value.
pub fn aggregate_by_region(records: &[TransactionRecord], metric: Metric) -> Vec<ChartDatum> {
    breakdown(records, metric, |r| &r.region, region_color)
}

/// Per-ship-mode totals for the selected metric, descending by value.
pub fn aggregate_by_ship_mode(records: &[TransactionRecord], metric: Metric) -> Vec<ChartDatum> {
    breakdown(records, metric, |r| &r.ship_mode, ship_mode_color)
}

/// Per-city groups with the state passthrough, in first-encounter order.
/// The ranking selector resolves and sorts these; city names are assumed
/// unique per state in this dataset, so the first row's state stands for
/// the whole group.
pub(crate) fn city_groups(records: &[TransactionRecord]) -> Vec<Group> {
    group_by(records, |r| &r.city, |r| &r.state)
}

/// Per-state sums for the choropleth map. Raw measures are retained
/// instead of being collapsed to one metric: the map toggles between all
/// four metrics (margin included) without re-aggregating. No sort
/// contract; groups come out in first-encounter order.
pub fn aggregate_by_state(records: &[TransactionRecord]) -> Vec<StateEntry> {
    group_by(records, |r| &r.state, |r| &r.region)
        .into_iter()
        .map(|group| StateEntry {
            state: group.key,
            region: group.tag,
            sales: group.sums.sales,
            profit: group.sums.profit,
            quantity: group.sums.quantity,
        })
        .collect()
}

/// Per-subcategory sums plus derived margin, tagged with the parent
/// category. Sorted descending by PROFIT regardless of the active metric
/// selector; callers must not assume the sort tracks their metric here.
pub fn aggregate_by_subcategory(records: &[TransactionRecord]) -> Vec<SubcategoryEntry> {
    let mut entries: Vec<SubcategoryEntry> = group_by(records, |r| &r.subcategory, |r| &r.category)
        .into_iter()
        .map(|group| SubcategoryEntry {
            color: subcategory_color(&group.key).to_string(),
            sales: group.sums.sales,
            profit: group.sums.profit,
            quantity: group.sums.quantity,
            profit_margin: group.sums.profit_margin(),
            subcategory: group.key,
            category: group.tag,
        })
        .collect();
    sort_desc_by(&mut entries, |e| e.profit);
    entries
}
