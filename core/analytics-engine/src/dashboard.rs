//! FILENAME: core/analytics-engine/src/dashboard.rs
//! PURPOSE: The one-call pipeline the application re-runs per selector change.
//! CONTEXT: Filters the dataset once, then computes every view the
//! dashboard renders. Holds no state and provides no caching; callers may
//! invoke it redundantly and may cache the result keyed on (dataset,
//! criteria, metric) themselves.

use crate::aggregate::{
    aggregate_by_category, aggregate_by_region, aggregate_by_segment, aggregate_by_ship_mode,
    aggregate_by_state, aggregate_by_subcategory,
};
use crate::discount::{bucket_by_discount, stacked_shares, subcategory_discount_profiles};
use crate::filter::FilterCriteria;
use crate::rank::{rank_cities, RankMode};
use crate::scorecard::scorecard;
use model::{
    ChartDatum, CityEntry, DiscountBucket, DiscountShare, Metric, Scorecard, StateEntry,
    SubcategoryDiscountProfile, SubcategoryEntry, TransactionRecord,
};
use serde::{Deserialize, Serialize};

/// How many cities the top/bottom ranking shows.
const CITY_RANK_LIMIT: usize = 5;

/// Every derived view for one (criteria, metric) selection, ready for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub scorecard: Scorecard,
    pub by_category: Vec<ChartDatum>,
    pub by_segment: Vec<ChartDatum>,
    pub by_region: Vec<ChartDatum>,
    pub by_ship_mode: Vec<ChartDatum>,
    pub top_cities: Vec<CityEntry>,
    pub bottom_cities: Vec<CityEntry>,
    pub state_map: Vec<StateEntry>,
    pub subcategories: Vec<SubcategoryEntry>,
    pub discount_buckets: Vec<DiscountBucket>,
    pub discount_shares: Vec<DiscountShare>,
    pub discount_profiles: Vec<SubcategoryDiscountProfile>,
}

impl DashboardView {
    /// Runs filter → every aggregation against the full dataset.
    /// `records` is the unfiltered baseline the scorecard compares against.
    pub fn compute(
        records: &[TransactionRecord],
        criteria: &FilterCriteria,
        metric: Metric,
    ) -> DashboardView {
        let filtered = criteria.apply(records);
        let discount_buckets = bucket_by_discount(&filtered);
        let discount_shares = stacked_shares(&discount_buckets);

        DashboardView {
            scorecard: scorecard(&filtered, &criteria.region, records),
            by_category: aggregate_by_category(&filtered, metric),
            by_segment: aggregate_by_segment(&filtered, metric),
            by_region: aggregate_by_region(&filtered, metric),
            by_ship_mode: aggregate_by_ship_mode(&filtered, metric),
            top_cities: rank_cities(&filtered, metric, RankMode::Top, CITY_RANK_LIMIT),
            bottom_cities: rank_cities(&filtered, metric, RankMode::Bottom, CITY_RANK_LIMIT),
            state_map: aggregate_by_state(&filtered),
            subcategories: aggregate_by_subcategory(&filtered),
            discount_profiles: subcategory_discount_profiles(&filtered, metric),
            discount_buckets,
            discount_shares,
        }
    }
}
