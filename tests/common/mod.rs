#![allow(dead_code)]

use salescast::application::ml::{ModelArtifact, SalesRegressor};
use salescast::domain::errors::PredictionError;
use salescast::domain::ml::FEATURE_NAMES;
use salescast::domain::ports::SalesModel;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegressionParameters;
use std::path::Path;
use std::sync::Mutex;

/// Ground-truth linear relation the fixture model is fitted on.
pub fn true_sales(row: &[f64]) -> f64 {
    25.0 + 2.0 * row[0] + 0.5 * row[1] - 100.0 * row[2] + 3.0 * row[3] + 1.5 * row[4]
        - 4.0 * row[5]
}

/// Synthetic training rows spanning every feature's domain.
pub fn training_rows() -> Vec<Vec<f64>> {
    (0..60)
        .map(|i: usize| {
            vec![
                (1 + (i * 37) % 200) as f64,
                ((i * i * 13) % 900) as f64 - 300.0,
                ((i * 7) % 11) as f64 / 10.0,
                (1 + (i * 5) % 12) as f64,
                (1 + (i * 11) % 31) as f64,
                ((i * 3) % 7) as f64,
            ]
        })
        .collect()
}

pub fn fitted_artifact() -> ModelArtifact {
    let x = training_rows();
    let y: Vec<f64> = x.iter().map(|row| true_sales(row)).collect();
    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let model = SalesRegressor::fit(&matrix, &y, LinearRegressionParameters::default()).unwrap();
    ModelArtifact::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect(), model)
}

/// Writes the three dashboard tables and a fitted model artifact into `dir`.
pub fn write_fixture_data(dir: &Path) {
    std::fs::write(
        dir.join("dashboard_summary.csv"),
        "Metric,Value\n\
         Total Sales,2297200.8603\n\
         Total Profit,286397.0217\n\
         Total Orders,5009\n\
         Average Order Value,458.6146\n",
    )
    .unwrap();

    std::fs::write(
        dir.join("daily_sales_data.csv"),
        "Order_Date,Sales\n\
         2014-01-06,2573.82\n\
         2014-01-03,16.448\n\
         2014-01-04,288.06\n",
    )
    .unwrap();

    std::fs::write(
        dir.join("monthly_sales_trend.csv"),
        "Year_Month,Monthly_Sales\n\
         2014-01,14236.895\n\
         2014-02,4519.892\n\
         2014-03,55691.009\n",
    )
    .unwrap();

    fitted_artifact()
        .save(&dir.join("sales_model.json"))
        .unwrap();
}

/// Records every batch it receives and answers with a fixed value per row.
pub struct RecordingModel {
    pub answer: f64,
    pub seen: Mutex<Vec<Vec<Vec<f64>>>>,
}

impl RecordingModel {
    pub fn new(answer: f64) -> Self {
        Self {
            answer,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn batches(&self) -> Vec<Vec<Vec<f64>>> {
        self.seen.lock().unwrap().clone()
    }
}

impl SalesModel for RecordingModel {
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
        self.seen.lock().unwrap().push(rows.to_vec());
        Ok(vec![self.answer; rows.len()])
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// Always fails, as a stale or broken model would.
pub struct FailingModel;

impl SalesModel for FailingModel {
    fn predict_batch(&self, _rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
        Err(PredictionError::ModelInvocation {
            reason: "model rejected input shape".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}
