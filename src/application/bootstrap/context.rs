use std::sync::Arc;
use tracing::{info, warn};

use crate::application::ml::{SalesPredictor, SmartcoreSalesModel};
use crate::config::DataEnvConfig;
use crate::domain::errors::DataLoadError;
use crate::domain::ports::SalesModel;
use crate::domain::sales::{DailySales, KpiSummary, MonthlySales, SummaryRow};
use crate::infrastructure::csv_tables;

/// Everything the dashboard reads, loaded once at startup and never reloaded.
pub struct DashboardContext {
    pub predictor: SalesPredictor,
    pub kpis: KpiSummary,
    pub summary: Vec<SummaryRow>,
    pub daily: Vec<DailySales>,
    pub monthly: Vec<MonthlySales>,
}

impl DashboardContext {
    /// Loads the tables and the smartcore model named in `config`.
    ///
    /// Table failures are fatal. A missing model only disables predictions.
    pub fn load(config: &DataEnvConfig) -> Result<Self, DataLoadError> {
        let model = SmartcoreSalesModel::new(config.model_path.clone());
        if !model.is_loaded() {
            warn!("Dashboard starting without a sales model; the Predict tab will report errors");
        }
        Self::with_model(config, Arc::new(model))
    }

    /// Loads the tables from `config` and serves predictions from `model`.
    pub fn with_model(
        config: &DataEnvConfig,
        model: Arc<dyn SalesModel>,
    ) -> Result<Self, DataLoadError> {
        let summary = csv_tables::load_summary(&config.summary_path)?;

        let mut daily = csv_tables::load_daily(&config.daily_path)?;
        daily.sort_by_key(|d| d.date);
        let monthly = csv_tables::load_monthly(&config.monthly_path)?;

        info!(
            model = model.name(),
            daily_rows = daily.len(),
            monthly_rows = monthly.len(),
            "Dashboard context ready"
        );

        Ok(Self {
            predictor: SalesPredictor::new(model),
            kpis: summary.kpis,
            summary: summary.rows,
            daily,
            monthly,
        })
    }
}
