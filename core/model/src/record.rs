//! FILENAME: core/model/src/record.rs
//! PURPOSE: The transaction record and the metric selector.
//! CONTEXT: One `TransactionRecord` is one order line from the retail
//! export. Records are immutable once built; every derived structure in the
//! analytics crate is freshly computed from a slice of them. The numeric
//! measures are guaranteed well-formed by the ingest crate; nothing here
//! re-validates them.

use serde::{Deserialize, Serialize};

/// One order line. Categorical fields are plain case-sensitive strings
/// compared by exact equality; the postal code stays a string so drill-down
/// comparison never depends on numeric formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub row_id: u32,
    pub order_id: String,
    pub order_date: String,
    pub ship_date: String,
    pub ship_mode: String,
    pub customer_id: String,
    pub customer_name: String,
    pub segment: String,
    pub country: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub region: String,
    pub product_id: String,
    pub category: String,
    pub subcategory: String,
    pub product_name: String,

    /// Currency amount, expected non-negative but not enforced.
    pub sales: f64,
    /// Unit count for the line.
    pub quantity: u32,
    /// Fractional discount rate in [0, 1].
    pub discount: f64,
    /// Signed currency amount; loss-making lines are negative.
    pub profit: f64,
}

/// The four selectable derived quantities that drive most views.
///
/// `ProfitMargin` is never a stored field: it is `100 * profit / sales`
/// computed from SUMMED sales and profit at whatever grouping granularity
/// is in play, and exactly 0 when the sales sum is 0. Averaging per-row
/// margins would weight every line equally regardless of size and is
/// never done anywhere in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Sales,
    Profit,
    Quantity,
    ProfitMargin,
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Profit
    }
}

impl Metric {
    /// Display label for chart titles and legends.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Sales => "Sales",
            Metric::Profit => "Profit",
            Metric::Quantity => "Quantity",
            Metric::ProfitMargin => "Profit Margin",
        }
    }
}
