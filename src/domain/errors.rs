use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning dashboard inputs into a sales prediction
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Model invocation failed: {reason}")]
    ModelInvocation { reason: String },

    #[error("Prediction result is not a scalar: {reason}")]
    Format { reason: String },
}

/// Errors related to loading the model artifact and the precomputed tables
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Unparseable date '{value}' in {path:?}")]
    InvalidDate { path: PathBuf, value: String },

    #[error("KPI summary {path:?} has {found} rows, expected at least {expected}")]
    MissingKpiRows {
        path: PathBuf,
        expected: usize,
        found: usize,
    },

    #[error("Invalid model artifact {path:?}: {reason}")]
    ModelArtifact { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_error_formatting() {
        let error = PredictionError::ModelInvocation {
            reason: "expected 6 features, got 5".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.starts_with("Model invocation failed"));
        assert!(msg.contains("expected 6 features"));
    }

    #[test]
    fn test_missing_kpi_rows_formatting() {
        let error = DataLoadError::MissingKpiRows {
            path: PathBuf::from("dashboard_summary.csv"),
            expected: 4,
            found: 2,
        };

        let msg = error.to_string();
        assert!(msg.contains("dashboard_summary.csv"));
        assert!(msg.contains("2 rows"));
        assert!(msg.contains("at least 4"));
    }
}
