//! FILENAME: core/analytics-engine/src/discount.rs
//! PURPOSE: Discount-level bucketing and per-subcategory discount statistics.
//! CONTEXT: Two independent aggregations feed the discount views: buckets
//! keyed by the discount rate rounded to 2 decimals (line/stacked charts),
//! and per-subcategory distribution statistics over the raw discount lists
//! (scatter/bubble charts). Both are single-pass accumulations in the same
//! style as `aggregate`, keyed on a rounded f64 via its string form.

use crate::metric::MeasureSums;
use model::{
    subcategory_color, DiscountBucket, DiscountShare, Metric, SubcategoryDiscountProfile,
    TransactionRecord,
};
use rustc_hash::FxHashMap;

/// Rounds a discount rate to 2 decimal places (the bucket key resolution).
///
/// Every member of a bucket rounds to the bucket key, so the running mean
/// of member discounts equals the key up to the rounding error the key
/// itself removes; the key therefore stands in for the bucket's average
/// discount.
fn round_discount(discount: f64) -> f64 {
    (discount * 100.0).round() / 100.0
}

/// Groups records by rounded discount level and reduces each bucket to its
/// measure sums, derived margin, and transaction count. Sorted ascending
/// by discount.
pub fn bucket_by_discount(records: &[TransactionRecord]) -> Vec<DiscountBucket> {
    // f64 is not hashable; the 2-decimal string form is exact at this
    // resolution and doubles as a stable key.
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut buckets: Vec<(f64, MeasureSums, usize)> = Vec::new();

    for record in records {
        let discount = round_discount(record.discount);
        let slot = *index
            .entry(format!("{:.2}", discount))
            .or_insert_with(|| {
                buckets.push((discount, MeasureSums::default(), 0));
                buckets.len() - 1
            });
        buckets[slot].1.add(record);
        buckets[slot].2 += 1;
    }

    let mut result: Vec<DiscountBucket> = buckets
        .into_iter()
        .map(|(discount, sums, count)| DiscountBucket {
            discount,
            sales: sums.sales,
            profit: sums.profit,
            quantity: sums.quantity,
            profit_margin: sums.profit_margin(),
            count,
        })
        .collect();
    result.sort_by(|a, b| a.discount.partial_cmp(&b.discount).unwrap_or(std::cmp::Ordering::Equal));
    result
}

/// Proportional shares for the 100%-stacked view: each bucket's series
/// share of `|profit| + |sales| + quantity + |margin|` as a percentage.
/// An all-zero bucket yields exactly 25% per series; that is a deliberate
/// degenerate-case policy, not an approximation.
pub fn stacked_shares(buckets: &[DiscountBucket]) -> Vec<DiscountShare> {
    buckets
        .iter()
        .map(|bucket| {
            let abs_profit = bucket.profit.abs();
            let abs_sales = bucket.sales.abs();
            let quantity = bucket.quantity;
            let abs_margin = bucket.profit_margin.abs();
            let total = abs_profit + abs_sales + quantity + abs_margin;

            if total == 0.0 {
                return DiscountShare {
                    sales: 25.0,
                    profit: 25.0,
                    quantity: 25.0,
                    profit_margin: 25.0,
                };
            }

            DiscountShare {
                sales: abs_sales / total * 100.0,
                profit: abs_profit / total * 100.0,
                quantity: quantity / total * 100.0,
                profit_margin: abs_margin / total * 100.0,
            }
        })
        .collect()
}

/// Arithmetic mean; 0 for an empty list.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median over an ascending sort; even-length lists average the two
/// central values. 0 for an empty list.
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Mode after rounding to 2 decimals. Ties break to the value whose count
/// reached the maximum first in scan order, which for equal frequencies is
/// the first such value encountered. 0 for an empty list.
fn mode(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut freq: FxHashMap<String, usize> = FxHashMap::default();
    let mut max_count = 0;
    let mut mode_value = round_discount(values[0]);

    for &value in values {
        let rounded = round_discount(value);
        let count = freq.entry(format!("{:.2}", rounded)).or_insert(0);
        *count += 1;
        if *count > max_count {
            max_count = *count;
            mode_value = rounded;
        }
    }

    mode_value
}

/// Minimum of a list; 0 for an empty list.
fn min_of(values: &[f64]) -> f64 {
    match values.iter().copied().reduce(f64::min) {
        Some(v) => v,
        None => 0.0,
    }
}

/// Maximum of a list; 0 for an empty list.
fn max_of(values: &[f64]) -> f64 {
    match values.iter().copied().reduce(f64::max) {
        Some(v) => v,
        None => 0.0,
    }
}

/// Per-subcategory discount distribution: the full per-row discount list
/// reduced to mean/min/max/mode/median, alongside the subcategory's
/// measure sums and the resolved value for the selected metric. Both mode
/// and median are carried because the two scatter variants in the product
/// use different central-tendency statistics.
pub fn subcategory_discount_profiles(
    records: &[TransactionRecord],
    metric: Metric,
) -> Vec<SubcategoryDiscountProfile> {
    struct Acc {
        category: String,
        sums: MeasureSums,
        discounts: Vec<f64>,
    }

    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(String, Acc)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.subcategory.as_str()).or_insert_with(|| {
            groups.push((
                record.subcategory.clone(),
                Acc {
                    category: record.category.clone(),
                    sums: MeasureSums::default(),
                    discounts: Vec::new(),
                },
            ));
            groups.len() - 1
        });
        groups[slot].1.sums.add(record);
        groups[slot].1.discounts.push(record.discount);
    }

    groups
        .into_iter()
        .map(|(subcategory, acc)| SubcategoryDiscountProfile {
            color: subcategory_color(&subcategory).to_string(),
            mean_discount: mean(&acc.discounts),
            min_discount: min_of(&acc.discounts),
            max_discount: max_of(&acc.discounts),
            mode_discount: mode(&acc.discounts),
            median_discount: median(&acc.discounts),
            sales: acc.sums.sales,
            profit: acc.sums.profit,
            quantity: acc.sums.quantity,
            metric_value: acc.sums.resolve(metric),
            subcategory,
            category: acc.category,
        })
        .collect()
}
