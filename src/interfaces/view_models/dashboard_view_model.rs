use crate::application::ml::SalesPredictor;
use crate::domain::formatting::format_currency;
use crate::domain::ml::SalesFeatures;
use crate::domain::sales::{DailySales, MonthlySales};
use chrono::{Datelike, NaiveDate};
use tracing::{error, info};

/// Values held by the sidebar input widgets.
///
/// Widget ranges enforce the domains; this struct does not re-check them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarInputs {
    pub quantity: u32,
    pub profit: f64,
    pub discount: f64,
    pub month: u32,
    pub day: u32,
    pub day_of_week: u32,
}

impl Default for SidebarInputs {
    fn default() -> Self {
        Self {
            quantity: 50,
            profit: 500.0,
            discount: 0.1,
            month: 1,
            day: 15,
            day_of_week: 0,
        }
    }
}

impl SidebarInputs {
    pub fn to_features(&self) -> SalesFeatures {
        SalesFeatures::new(
            self.quantity as f64,
            self.profit,
            self.discount,
            self.month as f64,
            self.day as f64,
            self.day_of_week as f64,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Success(f64),
    Failure(String),
}

impl PredictionOutcome {
    pub fn message(&self) -> String {
        match self {
            PredictionOutcome::Success(value) => {
                format!("Predicted Sales: {}", format_currency(*value))
            }
            PredictionOutcome::Failure(reason) => format!("Prediction failed: {}", reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Success(_))
    }
}

/// State behind the Predict tab: current inputs and the last result shown.
#[derive(Debug, Default)]
pub struct PredictionPanel {
    pub inputs: SidebarInputs,
    pub last_outcome: Option<PredictionOutcome>,
}

impl PredictionPanel {
    /// Runs one prediction for the current inputs and keeps the outcome for display.
    pub fn run(&mut self, predictor: &SalesPredictor) -> &PredictionOutcome {
        let features = self.inputs.to_features();
        let outcome = match predictor.predict(&features) {
            Ok(value) => {
                info!("Predicted sales {:.2} for {:?}", value, features);
                PredictionOutcome::Success(value)
            }
            Err(e) => {
                error!("Sales prediction failed: {}", e);
                PredictionOutcome::Failure(e.to_string())
            }
        };
        self.last_outcome.insert(outcome)
    }
}

pub struct TrendsViewModel;

impl TrendsViewModel {
    /// Daily points with the date encoded as days since 0001-01-01 on the x axis.
    pub fn daily_points(daily: &[DailySales]) -> Vec<[f64; 2]> {
        daily
            .iter()
            .map(|d| [d.date.num_days_from_ce() as f64, d.sales])
            .collect()
    }

    pub fn date_axis_label(x: f64) -> String {
        if !x.is_finite() {
            return String::new();
        }
        NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Bars are placed at x = 0, 1, 2, ... in table order.
    pub fn monthly_bars(monthly: &[MonthlySales]) -> Vec<(f64, f64)> {
        monthly
            .iter()
            .enumerate()
            .map(|(i, m)| (i as f64, m.sales))
            .collect()
    }

    /// Label for a bar position; empty between bars and outside the table.
    pub fn month_axis_label(monthly: &[MonthlySales], x: f64) -> String {
        if !x.is_finite() {
            return String::new();
        }
        let idx = x.round();
        if (x - idx).abs() > 1e-6 || idx < 0.0 {
            return String::new();
        }
        monthly
            .get(idx as usize)
            .map(|m| m.year_month.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PredictionError;
    use crate::domain::ports::SalesModel;
    use std::sync::Arc;

    struct EchoQuantity;

    impl SalesModel for EchoQuantity {
        fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
            Ok(rows.iter().map(|r| r[0] * 10.0).collect())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    struct Unloaded;

    impl SalesModel for Unloaded {
        fn predict_batch(&self, _rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
            Err(PredictionError::ModelInvocation {
                reason: "no model loaded".to_string(),
            })
        }

        fn name(&self) -> &str {
            "unloaded"
        }

        fn is_loaded(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_sidebar_defaults() {
        let features = SidebarInputs::default().to_features();
        assert_eq!(features, SalesFeatures::default());
    }

    #[test]
    fn test_panel_records_success() {
        let predictor = SalesPredictor::new(Arc::new(EchoQuantity));
        let mut panel = PredictionPanel::default();
        panel.inputs.quantity = 123;

        let outcome = panel.run(&predictor).clone();
        assert_eq!(outcome, PredictionOutcome::Success(1230.0));
        assert_eq!(outcome.message(), "Predicted Sales: $1,230.00");
        assert_eq!(panel.last_outcome, Some(outcome));
    }

    #[test]
    fn test_panel_records_failure() {
        let predictor = SalesPredictor::new(Arc::new(Unloaded));
        let mut panel = PredictionPanel::default();

        let outcome = panel.run(&predictor);
        assert!(!outcome.is_success());
        assert!(outcome.message().contains("no model loaded"));
    }

    #[test]
    fn test_daily_points_roundtrip_axis_label() {
        let daily = vec![DailySales {
            date: NaiveDate::from_ymd_opt(2017, 12, 30).unwrap(),
            sales: 713.79,
        }];

        let points = TrendsViewModel::daily_points(&daily);
        assert_eq!(points[0][1], 713.79);
        assert_eq!(TrendsViewModel::date_axis_label(points[0][0]), "2017-12-30");
    }

    #[test]
    fn test_month_axis_labels() {
        let monthly = vec![
            MonthlySales {
                year_month: "2014-01".to_string(),
                sales: 14236.9,
            },
            MonthlySales {
                year_month: "2014-02".to_string(),
                sales: 4519.9,
            },
        ];

        assert_eq!(TrendsViewModel::monthly_bars(&monthly)[1], (1.0, 4519.9));
        assert_eq!(TrendsViewModel::month_axis_label(&monthly, 1.0), "2014-02");
        assert_eq!(TrendsViewModel::month_axis_label(&monthly, 0.5), "");
        assert_eq!(TrendsViewModel::month_axis_label(&monthly, 2.0), "");
        assert_eq!(TrendsViewModel::month_axis_label(&monthly, -1.0), "");
    }

    #[test]
    fn test_non_finite_marks_have_no_label() {
        let monthly = vec![MonthlySales {
            year_month: "2014-01".to_string(),
            sales: 14236.9,
        }];

        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(TrendsViewModel::month_axis_label(&monthly, x), "");
            assert_eq!(TrendsViewModel::date_axis_label(x), "");
        }
    }
}
