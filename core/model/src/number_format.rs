//! FILENAME: core/model/src/number_format.rs
//! PURPOSE: Metric-aware display formatting for scorecards, axes, and tooltips.
//! CONTEXT: The analytics crate only ever produces raw numbers; these
//! helpers turn them into display strings at the rendering edge. Three
//! granularities exist: scorecard values (moderate abbreviation), axis
//! labels (coarse abbreviation), and tooltip values (no abbreviation).
//! Abbreviation thresholds key on the absolute value so negative profits
//! format symmetrically with positive ones.

use crate::record::Metric;

/// Format a value for scorecard and chart-label display.
/// Margin renders as a one-decimal percentage, quantity with thousands
/// grouping, currency abbreviated to `$1.23M` / `$4.5K` / `$67`.
pub fn format_metric_value(value: f64, metric: Metric) -> String {
    match metric {
        Metric::ProfitMargin => format!("{:.1}%", value),
        Metric::Quantity => add_thousands_separator(&format!("{:.0}", value)),
        Metric::Sales | Metric::Profit => {
            if value.abs() >= 1_000_000.0 {
                format!("${:.2}M", value / 1_000_000.0)
            } else if value.abs() >= 1_000.0 {
                format!("${:.1}K", value / 1_000.0)
            } else {
                format!("${:.0}", value)
            }
        }
    }
}

/// Format a value for chart axis tick labels (coarser than
/// `format_metric_value` so ticks stay short).
pub fn format_axis_value(value: f64, metric: Metric) -> String {
    match metric {
        Metric::ProfitMargin => format!("{:.0}%", value),
        Metric::Quantity => {
            if value.abs() >= 1_000.0 {
                format!("{:.1}K", value / 1_000.0)
            } else {
                format!("{:.0}", value)
            }
        }
        Metric::Sales | Metric::Profit => {
            if value.abs() >= 1_000_000.0 {
                format!("${:.1}M", value / 1_000_000.0)
            } else if value.abs() >= 1_000.0 {
                format!("${:.0}K", value / 1_000.0)
            } else {
                format!("${:.0}", value)
            }
        }
    }
}

/// Format a value without abbreviation (tooltips). Currency keeps two
/// decimals and thousands grouping; margin keeps two decimals.
pub fn format_full_value(value: f64, metric: Metric) -> String {
    match metric {
        Metric::ProfitMargin => format!("{:.2}%", value),
        Metric::Quantity => add_thousands_separator(&format!("{:.0}", value)),
        Metric::Sales | Metric::Profit => {
            format!("${}", add_thousands_separator(&format!("{:.2}", value)))
        }
    }
}

/// Inserts comma thousands separators into a plain numeric string,
/// preserving any leading sign and decimal part.
fn add_thousands_separator(num_str: &str) -> String {
    let (sign, unsigned) = match num_str.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", num_str),
    };

    let (int_part, dec_part) = match unsigned.find('.') {
        Some(pos) => (&unsigned[..pos], &unsigned[pos..]),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, dec_part)
}
