use crate::domain::errors::PredictionError;
use crate::domain::ml::SalesFeatures;
use crate::domain::ports::SalesModel;
use std::sync::Arc;
use tracing::debug;

/// Turns the six dashboard inputs into a single-row batch and asks the model for one scalar.
///
/// Stateless apart from the shared, read-only model: the same inputs against the
/// same model always yield the same answer.
#[derive(Clone)]
pub struct SalesPredictor {
    model: Arc<dyn SalesModel>,
}

impl SalesPredictor {
    pub fn new(model: Arc<dyn SalesModel>) -> Self {
        Self { model }
    }

    pub fn predict(&self, features: &SalesFeatures) -> Result<f64, PredictionError> {
        let batch = vec![features.to_vector()];
        debug!(model = self.model.name(), row = ?batch[0], "Requesting sales prediction");

        let predictions = self.model.predict_batch(&batch)?;

        let value = predictions
            .first()
            .copied()
            .ok_or_else(|| PredictionError::Format {
                reason: "model returned an empty batch".to_string(),
            })?;

        if !value.is_finite() {
            return Err(PredictionError::Format {
                reason: format!("model returned non-finite value {}", value),
            });
        }

        Ok(value)
    }

    /// Positional form of [`SalesPredictor::predict`], in feature order.
    pub fn predict_values(
        &self,
        quantity: f64,
        profit: f64,
        discount: f64,
        month: f64,
        day: f64,
        day_of_week: f64,
    ) -> Result<f64, PredictionError> {
        self.predict(&SalesFeatures::new(
            quantity,
            profit,
            discount,
            month,
            day,
            day_of_week,
        ))
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_loaded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedModel(Vec<f64>);

    impl SalesModel for FixedModel {
        fn predict_batch(&self, _rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_first_element_is_returned() {
        let predictor = SalesPredictor::new(Arc::new(FixedModel(vec![42.0, 7.0])));
        let result = predictor.predict(&SalesFeatures::default());
        assert_eq!(result, Ok(42.0));
    }

    #[test]
    fn test_empty_batch_is_format_error() {
        let predictor = SalesPredictor::new(Arc::new(FixedModel(vec![])));
        let result = predictor.predict(&SalesFeatures::default());
        assert!(matches!(result, Err(PredictionError::Format { .. })));
    }

    #[test]
    fn test_nan_is_format_error() {
        let predictor = SalesPredictor::new(Arc::new(FixedModel(vec![f64::NAN])));
        let result = predictor.predict_values(50.0, 500.0, 0.1, 6.0, 15.0, 2.0);
        assert!(matches!(result, Err(PredictionError::Format { .. })));
    }

    #[test]
    fn test_negative_profit_passes_through() {
        let predictor = SalesPredictor::new(Arc::new(FixedModel(vec![-3.5])));
        let result = predictor.predict_values(10.0, -9999.0, 0.0, 1.0, 1.0, 0.0);
        assert_eq!(result, Ok(-3.5));
    }
}
