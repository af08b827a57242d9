//! FILENAME: core/model/src/lib.rs
//! PURPOSE: Shared data model for the retail analytics workspace.
//! CONTEXT: Re-exports the record/metric types, the view structures handed
//! to the presentation layer, the static lookup tables, and the number
//! formatting helpers. The analytics and ingest crates depend on this crate
//! only; they never depend on each other.

pub mod constants;
pub mod number_format;
pub mod record;
pub mod view;

// Re-export commonly used types at the crate root
pub use constants::{
    category_color, region_color, segment_color, ship_mode_color, state_region,
    subcategory_category, subcategory_color, COLOR_FALLBACK_GRAY,
};
pub use number_format::{format_axis_value, format_full_value, format_metric_value};
pub use record::{Metric, TransactionRecord};
pub use view::{
    ChartDatum, CityEntry, DiscountBucket, DiscountShare, Scorecard, StateEntry,
    SubcategoryDiscountProfile, SubcategoryEntry,
};
