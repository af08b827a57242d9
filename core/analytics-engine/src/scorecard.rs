//! FILENAME: core/analytics-engine/src/scorecard.rs
//! PURPOSE: Portfolio-level totals and comparative deltas for the scorecard.
//! CONTEXT: Totals always come from the filtered view. Comparisons against
//! the unfiltered baseline are populated only when a concrete region is
//! selected; with the "all" sentinel they are absent (None), which the
//! presentation layer must keep distinct from a comparison of zero.

use crate::filter::is_all;
use crate::metric::MeasureSums;
use model::{Scorecard, TransactionRecord};

/// Computes the scorecard for `filtered` and, when `selected_region` is a
/// concrete region, the comparison fields against `baseline` (the full
/// unfiltered dataset).
///
/// Sales and quantity comparisons are share-of-total percentages
/// (`filtered / baseline * 100`, 0 when the baseline sum is 0). The profit
/// comparison divides by the baseline profit guarded only against exactly
/// zero; a negative baseline with a positive filtered subset therefore
/// yields a sign-flipped share. That is the shipped product behavior and
/// is deliberately not special-cased. The margin comparison is a
/// percentage-POINT delta, not a ratio.
pub fn scorecard(
    filtered: &[TransactionRecord],
    selected_region: &str,
    baseline: &[TransactionRecord],
) -> Scorecard {
    let totals = MeasureSums::of(filtered);
    let profit_margin = totals.profit_margin();

    let mut card = Scorecard {
        total_sales: totals.sales,
        total_quantity: totals.quantity,
        total_profit: totals.profit,
        profit_margin,
        sales_comparison: None,
        quantity_comparison: None,
        profit_comparison: None,
        margin_comparison: None,
    };

    if is_all(selected_region) {
        return card;
    }

    let base = MeasureSums::of(baseline);
    let base_margin = base.profit_margin();

    card.sales_comparison = Some(if base.sales > 0.0 {
        totals.sales / base.sales * 100.0
    } else {
        0.0
    });
    card.quantity_comparison = Some(if base.quantity > 0.0 {
        totals.quantity / base.quantity * 100.0
    } else {
        0.0
    });
    card.profit_comparison = Some(if base.profit != 0.0 {
        totals.profit / base.profit * 100.0
    } else {
        0.0
    });
    card.margin_comparison = Some(profit_margin - base_margin);

    card
}
