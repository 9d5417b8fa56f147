use crate::domain::errors::PredictionError;

/// A fitted regression model, seen from the outside.
///
/// Takes a batch of fixed-width numeric rows and returns one scalar per row.
/// Implementations are read-only after construction and shared across every
/// prediction made by the process.
pub trait SalesModel: Send + Sync {
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Whether the model is ready to serve predictions
    fn is_loaded(&self) -> bool {
        true
    }
}
