//! Chart series construction for the analysis screen.
//!
//! Flattens a period report into the bar list the chart widget consumes.
//! Each bucket becomes two adjacent bars: income first carrying the axis
//! label, then expense with an empty label so the pair shares one tick.

use shared::{ChartBarPoint, PeriodReport};

/// Bar fill for income bars
pub const INCOME_BAR_COLOR: &str = "#00D699";
/// Bar fill for expense bars
pub const EXPENSE_BAR_COLOR: &str = "#006DFF";

/// Service that prepares chart-ready series from period reports
#[derive(Clone)]
pub struct ChartService;

impl ChartService {
    /// Create a new ChartService instance
    pub fn new() -> Self {
        Self
    }

    /// Build the paired income/expense bar series for a report
    pub fn bar_series(&self, report: &PeriodReport) -> Vec<ChartBarPoint> {
        let mut points = Vec::with_capacity(report.buckets.len() * 2);
        for bucket in &report.buckets {
            points.push(ChartBarPoint {
                value: bucket.income_total,
                label: bucket.label.clone(),
                front_color: INCOME_BAR_COLOR.to_string(),
            });
            points.push(ChartBarPoint {
                value: bucket.expense_total,
                label: String::new(),
                front_color: EXPENSE_BAR_COLOR.to_string(),
            });
        }
        points
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Period, PeriodBucket};

    fn report_with_buckets(buckets: Vec<PeriodBucket>) -> PeriodReport {
        PeriodReport {
            period: Period::Daily,
            total_income: buckets.iter().map(|bucket| bucket.income_total).sum(),
            total_expense: buckets.iter().map(|bucket| bucket.expense_total).sum(),
            buckets,
        }
    }

    #[test]
    fn test_bar_series_pairs_income_and_expense() {
        let service = ChartService::new();
        let report = report_with_buckets(vec![
            PeriodBucket {
                label: "Mon".to_string(),
                income_total: 100.0,
                expense_total: 40.0,
            },
            PeriodBucket {
                label: "Tue".to_string(),
                income_total: 0.0,
                expense_total: 12.5,
            },
        ]);

        let series = service.bar_series(&report);

        assert_eq!(series.len(), 4);

        assert_eq!(series[0].value, 100.0);
        assert_eq!(series[0].label, "Mon");
        assert_eq!(series[0].front_color, INCOME_BAR_COLOR);

        // The expense bar leans on the income bar's label
        assert_eq!(series[1].value, 40.0);
        assert_eq!(series[1].label, "");
        assert_eq!(series[1].front_color, EXPENSE_BAR_COLOR);

        assert_eq!(series[2].label, "Tue");
        assert_eq!(series[3].value, 12.5);
    }

    #[test]
    fn test_bar_series_empty_report() {
        let service = ChartService::new();
        let report = report_with_buckets(Vec::new());

        assert!(service.bar_series(&report).is_empty());
    }
}
