//! FILENAME: core/ingest/src/csv_reader.rs
//! PURPOSE: Reads the retail transaction export into typed records.
//! CONTEXT: The export is a header-row CSV with the standard column names
//! ("Row ID" … "Profit"). Parsing is lenient about row content and strict
//! about structure: a missing required column fails the whole load, while
//! a row whose sales/quantity/profit fail numeric coercion is dropped and
//! counted. A malformed discount coerces to 0.0 rather than dropping the
//! row; every other field rides through as an opaque string.

use crate::error::IngestError;
use model::TransactionRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One raw CSV row before numeric coercion. Field names bind to the
/// export's exact header strings.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Row ID")]
    row_id: String,
    #[serde(rename = "Order ID")]
    order_id: String,
    #[serde(rename = "Order Date")]
    order_date: String,
    #[serde(rename = "Ship Date")]
    ship_date: String,
    #[serde(rename = "Ship Mode")]
    ship_mode: String,
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Customer Name")]
    customer_name: String,
    #[serde(rename = "Segment")]
    segment: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "Postal Code")]
    postal_code: String,
    #[serde(rename = "Region")]
    region: String,
    #[serde(rename = "Product ID")]
    product_id: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Sub-Category")]
    subcategory: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Sales")]
    sales: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Discount")]
    discount: String,
    #[serde(rename = "Profit")]
    profit: String,
}

/// Columns that must exist for the load to proceed at all.
const REQUIRED_COLUMNS: [&str; 21] = [
    "Row ID",
    "Order ID",
    "Order Date",
    "Ship Date",
    "Ship Mode",
    "Customer ID",
    "Customer Name",
    "Segment",
    "Country",
    "City",
    "State",
    "Postal Code",
    "Region",
    "Product ID",
    "Category",
    "Sub-Category",
    "Product Name",
    "Sales",
    "Quantity",
    "Discount",
    "Profit",
];

/// Loads the CSV at `path`, dropping rows with non-numeric
/// sales/quantity/profit.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, IngestError> {
    let file = File::open(path.as_ref())?;
    let records = read_records(file)?;
    log::info!(
        "loaded {} rows from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Reads and coerces records from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TransactionRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(IngestError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for raw in csv_reader.deserialize::<RawRow>() {
        let raw = raw?;
        match coerce_row(raw) {
            Some(record) => records.push(record),
            None => {
                dropped += 1;
            }
        }
    }

    if dropped > 0 {
        log::warn!("dropped {} rows with non-numeric measures", dropped);
    }

    Ok(records)
}

/// Coerces one raw row; `None` when a required measure is non-numeric.
fn coerce_row(raw: RawRow) -> Option<TransactionRecord> {
    let sales = parse_currency(&raw.sales)?;
    let quantity = parse_quantity(&raw.quantity)?;
    let profit = parse_currency(&raw.profit)?;

    // A non-numeric discount would poison every downstream bucket key,
    // so it coerces to 0.0 instead of costing the row.
    let discount = match parse_currency(&raw.discount) {
        Some(d) => d,
        None => {
            log::debug!("row {}: unparsable discount {:?}, using 0", raw.row_id, raw.discount);
            0.0
        }
    };

    Some(TransactionRecord {
        // Row ids are opaque; an unparsable one becomes 0 rather than
        // costing the row.
        row_id: raw.row_id.trim().parse().unwrap_or(0),
        order_id: raw.order_id,
        order_date: raw.order_date,
        ship_date: raw.ship_date,
        ship_mode: raw.ship_mode,
        customer_id: raw.customer_id,
        customer_name: raw.customer_name,
        segment: raw.segment,
        country: raw.country,
        city: raw.city,
        state: raw.state,
        postal_code: raw.postal_code,
        region: raw.region,
        product_id: raw.product_id,
        category: raw.category,
        subcategory: raw.subcategory,
        product_name: raw.product_name,
        sales,
        quantity,
        discount,
        profit,
    })
}

/// Parses a currency/rate field; `None` on parse failure or NaN.
fn parse_currency(text: &str) -> Option<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Some(value),
        _ => None,
    }
}

/// Parses a unit count. Accepts a plain integer or an integral-valued
/// float ("3" or "3.0"); anything negative or non-numeric drops the row.
fn parse_quantity(text: &str) -> Option<u32> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<u32>() {
        return Some(value);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value.trunc() as u32),
        _ => None,
    }
}
