//! FILENAME: core/analytics-engine/src/rank.rs
//! PURPOSE: Top-N / bottom-N city ranking.
//! CONTEXT: Aggregates by city, resolves the selected metric, sorts by the
//! requested direction, and truncates. No tie-break beyond the stable
//! first-encounter order the aggregation already provides.

use crate::aggregate::{city_groups, sort_desc_by};
use model::{CityEntry, Metric, TransactionRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ranking direction for the city chart toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankMode {
    Top,
    Bottom,
}

/// Ranks cities by the resolved metric value: descending for `Top`,
/// ascending for `Bottom`, truncated to `limit` entries. A `limit`
/// exceeding the number of distinct cities returns all of them.
pub fn rank_cities(
    records: &[TransactionRecord],
    metric: Metric,
    mode: RankMode,
    limit: usize,
) -> Vec<CityEntry> {
    let mut entries: Vec<CityEntry> = city_groups(records)
        .into_iter()
        .map(|group| CityEntry {
            value: group.sums.resolve(metric),
            city: group.key,
            state: group.tag,
        })
        .collect();

    match mode {
        RankMode::Top => sort_desc_by(&mut entries, |e| e.value),
        RankMode::Bottom => entries.sort_by(|a, b| {
            a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal)
        }),
    }

    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::test_support::record;

    fn city(name: &str, state: &str, profit: f64) -> TransactionRecord {
        let mut r = record("West", "Consumer", "Technology", 100.0, profit, 1);
        r.city = name.to_string();
        r.state = state.to_string();
        r
    }

    fn cities() -> Vec<TransactionRecord> {
        vec![
            city("A", "California", 50.0),
            city("B", "Oregon", -20.0),
            city("C", "Nevada", 30.0),
            city("D", "Utah", 10.0),
        ]
    }

    #[test]
    fn test_top_ranking() {
        let top = rank_cities(&cities(), Metric::Profit, RankMode::Top, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].city, "A");
        assert_eq!(top[0].value, 50.0);
        assert_eq!(top[0].state, "California");
        assert_eq!(top[1].city, "C");
    }

    #[test]
    fn test_bottom_ranking() {
        let bottom = rank_cities(&cities(), Metric::Profit, RankMode::Bottom, 2);
        assert_eq!(bottom[0].city, "B");
        assert_eq!(bottom[1].city, "D");
    }

    #[test]
    fn test_top_and_bottom_disjoint_with_enough_cities() {
        let top = rank_cities(&cities(), Metric::Profit, RankMode::Top, 2);
        let bottom = rank_cities(&cities(), Metric::Profit, RankMode::Bottom, 2);
        for t in &top {
            assert!(bottom.iter().all(|b| b.city != t.city));
        }
    }

    #[test]
    fn test_limit_exceeding_city_count_returns_all() {
        let all = rank_cities(&cities(), Metric::Profit, RankMode::Top, 100);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_multiple_rows_per_city_aggregate_first() {
        let records = vec![
            city("A", "California", 10.0),
            city("A", "California", 15.0),
            city("B", "Oregon", 20.0),
        ];
        let top = rank_cities(&records, Metric::Profit, RankMode::Top, 5);
        assert_eq!(top[0].city, "A");
        assert_eq!(top[0].value, 25.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_cities(&[], Metric::Sales, RankMode::Top, 5).is_empty());
    }
}
