//! FILENAME: core/analytics-engine/src/filter.rs
//! PURPOSE: Record filtering by region, segment, and geographic drill-down.
//! CONTEXT: Filtering is a conjunction of equality tests. The sentinel
//! value `"all"` (or an empty selector) means "no restriction" on that
//! field and is never matched literally. An unmatched concrete value
//! yields an empty result, not an error. Input order is preserved.

use model::TransactionRecord;
use serde::{Deserialize, Serialize};

/// Sentinel selector value meaning "no restriction".
pub const ALL: &str = "all";

/// The single field a map drill-down click restricts on, layered on top of
/// the region/segment selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrillField {
    Region,
    State,
    City,
    PostalCode,
}

/// A drill-down restriction: exact string equality on one geographic field.
/// Postal codes compare as strings so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillFilter {
    pub field: DrillField,
    pub value: String,
}

impl DrillFilter {
    pub fn new(field: DrillField, value: impl Into<String>) -> Self {
        DrillFilter {
            field,
            value: value.into(),
        }
    }

    fn matches(&self, record: &TransactionRecord) -> bool {
        let field_value = match self.field {
            DrillField::Region => &record.region,
            DrillField::State => &record.state,
            DrillField::City => &record.city,
            DrillField::PostalCode => &record.postal_code,
        };
        *field_value == self.value
    }
}

/// The full filter state of the dashboard: region and segment selectors
/// plus an optional drill-down. Active criteria combine with logical AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub region: String,
    pub segment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drill: Option<DrillFilter>,
}

impl Default for FilterCriteria {
    /// The unrestricted view: both selectors at the "all" sentinel.
    fn default() -> Self {
        FilterCriteria {
            region: ALL.to_string(),
            segment: ALL.to_string(),
            drill: None,
        }
    }
}

impl FilterCriteria {
    /// True when no criterion restricts anything (every aggregate equals
    /// its baseline).
    pub fn is_unrestricted(&self) -> bool {
        is_all(&self.region) && is_all(&self.segment) && self.drill.is_none()
    }

    /// Applies all active criteria, preserving record order.
    pub fn apply(&self, records: &[TransactionRecord]) -> Vec<TransactionRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }

    fn matches(&self, record: &TransactionRecord) -> bool {
        if !is_all(&self.region) && record.region != self.region {
            return false;
        }
        if !is_all(&self.segment) && record.segment != self.segment {
            return false;
        }
        if let Some(drill) = &self.drill {
            if !drill.matches(record) {
                return false;
            }
        }
        true
    }
}

/// Whether a selector value is the "no restriction" sentinel.
pub(crate) fn is_all(value: &str) -> bool {
    value == ALL || value.is_empty()
}

/// Single-axis region filter. `"all"` or empty returns the input unchanged.
pub fn filter_by_region(records: &[TransactionRecord], region: &str) -> Vec<TransactionRecord> {
    if is_all(region) {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.region == region)
        .cloned()
        .collect()
}

/// Single-axis segment filter. `"all"` or empty returns the input unchanged.
pub fn filter_by_segment(records: &[TransactionRecord], segment: &str) -> Vec<TransactionRecord> {
    if is_all(segment) {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| r.segment == segment)
        .cloned()
        .collect()
}
