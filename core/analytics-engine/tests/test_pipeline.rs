//! FILENAME: core/analytics-engine/tests/test_pipeline.rs
//! PURPOSE: End-to-end tests for the filter → aggregate → derive pipeline.
//! CONTEXT: Exercises the engine the way the dashboard shell does: build a
//! dataset, apply selector state, compute every view, and check the numbers
//! the charts would render.

use analytics_engine::{
    aggregate_by_category, bucket_by_discount, rank_cities, scorecard, stacked_shares,
    subcategory_discount_profiles, DashboardView, DrillField, DrillFilter, FilterCriteria,
    RankMode,
};
use model::{Metric, TransactionRecord};

/// Dataset-row builder for the scenarios below.
#[allow(clippy::too_many_arguments)]
fn row(
    region: &str,
    segment: &str,
    city: &str,
    state: &str,
    category: &str,
    subcategory: &str,
    sales: f64,
    profit: f64,
    quantity: u32,
    discount: f64,
) -> TransactionRecord {
    TransactionRecord {
        row_id: 1,
        order_id: "US-2017-100001".to_string(),
        order_date: "03/11/2017".to_string(),
        ship_date: "07/11/2017".to_string(),
        ship_mode: "Standard Class".to_string(),
        customer_id: "BF-11020".to_string(),
        customer_name: "Pipeline Test".to_string(),
        segment: segment.to_string(),
        country: "United States".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        postal_code: "10001".to_string(),
        region: region.to_string(),
        product_id: "OFF-PA-1002".to_string(),
        category: category.to_string(),
        subcategory: subcategory.to_string(),
        product_name: "Pipeline Product".to_string(),
        sales,
        quantity,
        discount,
        profit,
    }
}

fn two_region_dataset() -> Vec<TransactionRecord> {
    vec![
        row("West", "Consumer", "Los Angeles", "California", "Technology", "Phones", 100.0, 20.0, 2, 0.0),
        row("East", "Corporate", "New York City", "New York", "Furniture", "Chairs", 200.0, -10.0, 1, 0.2),
    ]
}

#[test]
fn test_category_breakdown_end_to_end() {
    let records = two_region_dataset();
    let data = aggregate_by_category(&records, Metric::Profit);
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].name, "Technology");
    assert_eq!(data[0].value, 20.0);
    assert_eq!(data[1].name, "Furniture");
    assert_eq!(data[1].value, -10.0);
}

#[test]
fn test_scorecard_end_to_end() {
    let records = two_region_dataset();
    let card = scorecard(&records, "all", &records);
    assert_eq!(card.total_sales, 300.0);
    assert_eq!(card.total_quantity, 3.0);
    assert_eq!(card.total_profit, 10.0);
    assert!((card.profit_margin - 10.0 / 300.0 * 100.0).abs() < 1e-12);
    assert!(card.sales_comparison.is_none());
    assert!(card.margin_comparison.is_none());
}

#[test]
fn test_filters_compose_as_and_with_all_no_op() {
    let records = vec![
        row("West", "Consumer", "Seattle", "Washington", "Technology", "Phones", 10.0, 1.0, 1, 0.0),
        row("West", "Consumer", "Portland", "Oregon", "Technology", "Phones", 20.0, 2.0, 1, 0.0),
        row("East", "Consumer", "Seattle", "Washington", "Technology", "Phones", 30.0, 3.0, 1, 0.0),
    ];

    let criteria = FilterCriteria {
        region: "West".to_string(),
        segment: "all".to_string(),
        drill: Some(DrillFilter::new(DrillField::City, "Seattle")),
    };
    let filtered = criteria.apply(&records);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].sales, 10.0);

    // The sentinel at every stage leaves the dataset untouched.
    let unrestricted = FilterCriteria::default().apply(&records);
    assert_eq!(unrestricted, records);
}

#[test]
fn test_partition_property_over_full_view() {
    let records = vec![
        row("West", "Consumer", "A", "California", "Technology", "Phones", 11.5, 2.0, 1, 0.0),
        row("South", "Corporate", "B", "Texas", "Office Supplies", "Paper", 7.25, 1.0, 2, 0.1),
        row("Central", "Home Office", "C", "Ohio", "Furniture", "Tables", 93.0, -4.0, 3, 0.45),
        row("East", "Consumer", "D", "Maine", "Furniture", "Chairs", 18.0, 6.0, 1, 0.0),
    ];
    let total: f64 = records.iter().map(|r| r.sales).sum();
    let view = DashboardView::compute(&records, &FilterCriteria::default(), Metric::Sales);

    for breakdown in [&view.by_category, &view.by_segment, &view.by_region, &view.by_ship_mode] {
        let sum: f64 = breakdown.iter().map(|d| d.value).sum();
        assert!((sum - total).abs() < 1e-9);
    }
    let state_sum: f64 = view.state_map.iter().map(|s| s.sales).sum();
    assert!((state_sum - total).abs() < 1e-9);
    let bucket_sum: f64 = view.discount_buckets.iter().map(|b| b.sales).sum();
    assert!((bucket_sum - total).abs() < 1e-9);
}

#[test]
fn test_drilldown_changes_scorecard_comparisons() {
    let records = two_region_dataset();
    let criteria = FilterCriteria {
        region: "West".to_string(),
        segment: "all".to_string(),
        drill: None,
    };
    let view = DashboardView::compute(&records, &criteria, Metric::Profit);
    assert_eq!(view.scorecard.total_sales, 100.0);
    assert!((view.scorecard.sales_comparison.unwrap() - 100.0 / 3.0).abs() < 1e-9);
    // marginComparison == filteredMargin - baselineMargin exactly.
    let expected = 20.0 / 100.0 * 100.0 - 10.0 / 300.0 * 100.0;
    assert!((view.scorecard.margin_comparison.unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_top_bottom_rankings_disjoint_with_ten_cities() {
    let mut records = Vec::new();
    for i in 0..10 {
        records.push(row(
            "West",
            "Consumer",
            &format!("City{}", i),
            "California",
            "Technology",
            "Phones",
            100.0,
            i as f64 * 10.0,
            1,
            0.0,
        ));
    }
    let top = rank_cities(&records, Metric::Profit, RankMode::Top, 5);
    let bottom = rank_cities(&records, Metric::Profit, RankMode::Bottom, 5);
    assert_eq!(top.len(), 5);
    assert_eq!(bottom.len(), 5);
    for t in &top {
        assert!(bottom.iter().all(|b| b.city != t.city));
    }
}

#[test]
fn test_discount_series_over_filtered_view() {
    let records = vec![
        row("West", "Consumer", "A", "California", "Technology", "Phones", 100.0, 10.0, 1, 0.0),
        row("West", "Consumer", "A", "California", "Technology", "Phones", 50.0, 5.0, 1, 0.2),
        row("East", "Consumer", "B", "New York", "Technology", "Phones", 999.0, 99.0, 9, 0.8),
    ];
    let criteria = FilterCriteria {
        region: "West".to_string(),
        ..FilterCriteria::default()
    };
    let filtered = criteria.apply(&records);

    let buckets = bucket_by_discount(&filtered);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].discount, 0.0);
    assert_eq!(buckets[1].discount, 0.2);
    // The East row's 0.8 bucket never appears in the filtered view.
    assert!(buckets.iter().all(|b| b.discount != 0.8));

    let shares = stacked_shares(&buckets);
    for share in shares {
        let total = share.sales + share.profit + share.quantity + share.profit_margin;
        assert!((total - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_subcategory_profiles_both_statistics() {
    let records = vec![
        row("West", "Consumer", "A", "California", "Technology", "Phones", 10.0, 1.0, 1, 0.0),
        row("West", "Consumer", "A", "California", "Technology", "Phones", 10.0, 1.0, 1, 0.1),
        row("West", "Consumer", "A", "California", "Technology", "Phones", 10.0, 1.0, 1, 0.1),
        row("West", "Consumer", "A", "California", "Technology", "Phones", 10.0, 1.0, 1, 0.2),
    ];
    let profiles = subcategory_discount_profiles(&records, Metric::Sales);
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].median_discount, 0.1);
    assert_eq!(profiles[0].mode_discount, 0.1);
    assert_eq!(profiles[0].metric_value, 40.0);
}

#[test]
fn test_view_serializes_for_the_presentation_layer() {
    let records = two_region_dataset();
    let view = DashboardView::compute(&records, &FilterCriteria::default(), Metric::Profit);
    let json = serde_json::to_value(&view).unwrap();
    assert!(json["by_category"].is_array());
    assert!(json["scorecard"]["total_sales"].is_number());
    // No comparison requested: the field must be absent, not null/zero.
    assert!(json["scorecard"].get("sales_comparison").is_none());
}
