//! FILENAME: core/analytics-engine/src/metric.rs
//! PURPOSE: The shared measure accumulator and metric resolver.
//! CONTEXT: Every aggregation in this crate accumulates the same three
//! sums (sales, profit, quantity) and resolves the selected metric through
//! `MeasureSums::resolve`, so profit margin has one definition everywhere:
//! `100 * summed_profit / summed_sales`, and exactly 0 when the sales sum
//! is 0. Margin is never derived by averaging per-row ratios.

use model::{Metric, TransactionRecord};

/// Running sums of the three raw measures for one aggregation group.
/// Created fresh per aggregation call and discarded after the output list
/// is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeasureSums {
    pub sales: f64,
    pub profit: f64,
    pub quantity: f64,
}

impl MeasureSums {
    /// Folds one record into the sums.
    pub fn add(&mut self, record: &TransactionRecord) {
        self.sales += record.sales;
        self.profit += record.profit;
        self.quantity += record.quantity as f64;
    }

    /// Sums over a full record slice.
    pub fn of(records: &[TransactionRecord]) -> Self {
        let mut sums = MeasureSums::default();
        for record in records {
            sums.add(record);
        }
        sums
    }

    /// Profit margin of the group as a percentage of summed sales,
    /// 0 when the sales sum is 0 regardless of the profit sign.
    pub fn profit_margin(&self) -> f64 {
        if self.sales > 0.0 {
            self.profit / self.sales * 100.0
        } else {
            0.0
        }
    }

    /// Resolves the selected metric from the group sums.
    pub fn resolve(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Sales => self.sales,
            Metric::Profit => self.profit,
            Metric::Quantity => self.quantity,
            Metric::ProfitMargin => self.profit_margin(),
        }
    }
}

/// Resolves the selected metric for a single record. Only meaningful for
/// single-row granularity; group values go through `MeasureSums::resolve`.
pub fn row_value(record: &TransactionRecord, metric: Metric) -> f64 {
    match metric {
        Metric::Sales => record.sales,
        Metric::Profit => record.profit,
        Metric::Quantity => record.quantity as f64,
        Metric::ProfitMargin => {
            if record.sales > 0.0 {
                record.profit / record.sales * 100.0
            } else {
                0.0
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::record;
    use super::*;

    #[test]
    fn test_sums_accumulate() {
        let records = vec![
            record("West", "Consumer", "Technology", 100.0, 20.0, 2),
            record("East", "Corporate", "Furniture", 200.0, -10.0, 1),
        ];
        let sums = MeasureSums::of(&records);
        assert_eq!(sums.sales, 300.0);
        assert_eq!(sums.profit, 10.0);
        assert_eq!(sums.quantity, 3.0);
    }

    #[test]
    fn test_margin_zero_guard() {
        let sums = MeasureSums {
            sales: 0.0,
            profit: -500.0,
            quantity: 10.0,
        };
        // Exactly zero, never NaN or infinity, regardless of profit sign.
        assert_eq!(sums.resolve(Metric::ProfitMargin), 0.0);

        let sums = MeasureSums {
            sales: 0.0,
            profit: 500.0,
            quantity: 10.0,
        };
        assert_eq!(sums.profit_margin(), 0.0);
    }

    #[test]
    fn test_margin_from_sums() {
        let sums = MeasureSums {
            sales: 300.0,
            profit: 10.0,
            quantity: 3.0,
        };
        let margin = sums.resolve(Metric::ProfitMargin);
        assert!((margin - 10.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_resolve_plain_metrics() {
        let sums = MeasureSums {
            sales: 300.0,
            profit: 10.0,
            quantity: 3.0,
        };
        assert_eq!(sums.resolve(Metric::Sales), 300.0);
        assert_eq!(sums.resolve(Metric::Profit), 10.0);
        assert_eq!(sums.resolve(Metric::Quantity), 3.0);
    }

    #[test]
    fn test_row_value_margin_guard() {
        let mut r = record("West", "Consumer", "Technology", 0.0, 5.0, 1);
        assert_eq!(row_value(&r, Metric::ProfitMargin), 0.0);
        r.sales = 50.0;
        assert_eq!(row_value(&r, Metric::ProfitMargin), 10.0);
    }
}
