//! FILENAME: core/analytics-engine/src/lib.rs
//! PURPOSE: The aggregation/derivation core of the retail dashboard.
//! CONTEXT: Pure functions from a slice of transaction records to the
//! summarized views the presentation layer renders. No component here holds
//! mutable state, performs I/O, or caches anything: the enclosing
//! application re-invokes the full pipeline on every selector change and
//! the engine tolerates redundant calls by construction.
//!
//! Layers:
//! - `filter`: region/segment/drill-down predicates (what subset we look at)
//! - `metric`: the shared measure accumulator and metric resolver
//! - `aggregate`: grouping by categorical dimensions
//! - `scorecard`: portfolio totals and comparative deltas
//! - `discount`: discount-level bucketing and distribution statistics
//! - `rank`: top/bottom-N city selection
//! - `dashboard`: one-call pipeline bundling every view

pub mod aggregate;
pub mod dashboard;
pub mod discount;
pub mod filter;
pub mod metric;
pub mod rank;
pub mod scorecard;

pub use aggregate::{
    aggregate_by_category, aggregate_by_region, aggregate_by_segment, aggregate_by_ship_mode,
    aggregate_by_state, aggregate_by_subcategory,
};
pub use dashboard::DashboardView;
pub use discount::{bucket_by_discount, stacked_shares, subcategory_discount_profiles};
pub use filter::{filter_by_region, filter_by_segment, DrillField, DrillFilter, FilterCriteria};
pub use metric::{row_value, MeasureSums};
pub use rank::{rank_cities, RankMode};
pub use scorecard::scorecard;
