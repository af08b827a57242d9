//! FILENAME: core/model/src/view.rs
//! PURPOSE: Output data contracts handed to the presentation layer.
//! CONTEXT: These structures carry raw, unformatted numbers only; any
//! currency or percentage string formatting happens at the rendering edge
//! (see `number_format`). Every struct here is a freshly computed value
//! object with no identity or lifecycle of its own.

use serde::{Deserialize, Serialize};

/// One bar/slice of a dimensional breakdown (category, segment, region,
/// ship mode). The color is cosmetic and may be absent for keys outside
/// the static lookup tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One ranked city with its resolved metric value. `state` disambiguates
/// the city name in the tooltip; city names are unique per state in this
/// dataset, so the state of any row sharing the city is representative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEntry {
    pub city: String,
    pub value: f64,
    pub state: String,
}

/// Per-state sums for the choropleth map. Raw measures are retained
/// (not collapsed to one metric) because the map derives whichever metric
/// is toggled on demand, margin included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    pub state: String,
    pub region: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
}

/// Per-subcategory sums plus the derived margin, tagged with the parent
/// category and its color for the combo chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryEntry {
    pub subcategory: String,
    pub category: String,
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
    pub profit_margin: f64,
    pub color: String,
}

/// Portfolio-level totals for the current filtered view.
///
/// The comparison fields are populated only when the view is a proper
/// sub-selection (a concrete region rather than the "all" sentinel). They
/// are serialized as absent, not zero, so the scorecard can distinguish
/// "no comparison requested" from "comparison happens to be zero".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub total_sales: f64,
    pub total_quantity: f64,
    pub total_profit: f64,
    pub profit_margin: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_comparison: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_comparison: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profit_comparison: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_comparison: Option<f64>,
}

/// One discount level (rounded to 2 decimals) with its accumulated
/// measures, derived margin, and transaction count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountBucket {
    pub discount: f64,
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
    pub profit_margin: f64,
    pub count: usize,
}

/// Proportional shares of one discount bucket for the 100%-stacked view.
/// The four fields are percentages of the bucket's combined magnitude and
/// sum to 100 (each exactly 25 for the all-zero bucket).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountShare {
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
    pub profit_margin: f64,
}

/// Discount distribution statistics for one subcategory, plus the
/// subcategory's resolved metric value for the scatter/bubble views.
/// Both mode and median are carried; the two scatter variants in the
/// product use different central-tendency statistics and are not
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryDiscountProfile {
    pub subcategory: String,
    pub category: String,
    pub mean_discount: f64,
    pub min_discount: f64,
    pub max_discount: f64,
    pub mode_discount: f64,
    pub median_discount: f64,
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
    pub metric_value: f64,
    pub color: String,
}
