use crate::domain::errors::{DataLoadError, PredictionError};
use crate::domain::ml::FEATURE_NAMES;
use crate::domain::ports::SalesModel;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

pub type SalesRegressor = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// On-disk form of a fitted sales model: the regressor plus the column order it was fitted on.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub model: SalesRegressor,
}

impl ModelArtifact {
    pub fn new(feature_names: Vec<String>, model: SalesRegressor) -> Self {
        Self {
            feature_names,
            model,
        }
    }

    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: Self = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DataLoadError::ModelArtifact {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        artifact
            .check_width()
            .map_err(|reason| DataLoadError::ModelArtifact {
                path: path.to_path_buf(),
                reason,
            })?;
        Ok(artifact)
    }

    pub fn save(&self, path: &Path) -> Result<(), DataLoadError> {
        let file = File::create(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|e| DataLoadError::ModelArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        writer.flush().map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    /// Number of input columns the regressor was actually fitted on.
    pub fn fitted_width(&self) -> usize {
        // Coefficients are a single column or row, one entry per input.
        let (rows, cols) = self.model.coefficients().shape();
        rows * cols
    }

    /// The recorded names must describe the regressor's inputs one-to-one;
    /// smartcore panics on a width mismatch inside `predict`.
    pub fn check_width(&self) -> Result<(), String> {
        let fitted = self.fitted_width();
        if fitted == self.feature_count() {
            Ok(())
        } else {
            Err(format!(
                "artifact lists {} feature names but the regressor was fitted on {} columns",
                self.feature_count(),
                fitted
            ))
        }
    }

    /// True when the recorded training order equals the order rows are built in.
    pub fn matches_feature_order(&self) -> bool {
        self.feature_names.iter().map(String::as_str).eq(FEATURE_NAMES.iter().copied())
    }
}

/// Linear regression model served from a JSON artifact.
///
/// A missing or unreadable artifact leaves the model unloaded: the dashboard still
/// starts, and every prediction fails with a model invocation error.
pub struct SmartcoreSalesModel {
    artifact: Option<ModelArtifact>,
    model_path: PathBuf,
}

impl SmartcoreSalesModel {
    pub fn new(model_path: PathBuf) -> Self {
        let mut model = Self {
            artifact: None,
            model_path,
        };
        model.load_model();
        model
    }

    /// Serves an in-memory artifact. An inconsistent artifact is refused and the
    /// model stays unloaded, exactly as for a bad file.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        let artifact = match artifact.check_width() {
            Ok(()) => {
                warn_on_feature_order(&artifact);
                Some(artifact)
            }
            Err(reason) => {
                error!("Refusing sales model: {}", reason);
                None
            }
        };
        Self {
            artifact,
            model_path: PathBuf::from("<memory>"),
        }
    }

    fn load_model(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "Sales model file not found at {:?}. Predictions will be unavailable.",
                self.model_path
            );
            return;
        }

        match ModelArtifact::load(&self.model_path) {
            Ok(artifact) => {
                info!("Successfully loaded sales model from {:?}", self.model_path);
                warn_on_feature_order(&artifact);
                self.artifact = Some(artifact);
            }
            Err(e) => {
                error!("Failed to load sales model: {}", e);
            }
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

fn warn_on_feature_order(artifact: &ModelArtifact) {
    if !artifact.matches_feature_order() {
        warn!(
            expected = ?FEATURE_NAMES,
            found = ?artifact.feature_names,
            "Model artifact was fitted on a different feature order; predictions may be meaningless"
        );
    }
}

impl SalesModel for SmartcoreSalesModel {
    fn predict_batch(&self, rows: &[Vec<f64>]) -> Result<Vec<f64>, PredictionError> {
        let artifact = self
            .artifact
            .as_ref()
            .ok_or_else(|| PredictionError::ModelInvocation {
                reason: format!("no model loaded from {:?}", self.model_path),
            })?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let expected = artifact.feature_count();
        if let Some(bad) = rows.iter().find(|row| row.len() != expected) {
            return Err(PredictionError::ModelInvocation {
                reason: format!("expected {} features per row, got {}", expected, bad.len()),
            });
        }

        let input_matrix =
            DenseMatrix::from_2d_vec(&rows.to_vec()).map_err(|e| PredictionError::ModelInvocation {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        artifact
            .model
            .predict(&input_matrix)
            .map_err(|e| PredictionError::ModelInvocation {
                reason: format!("Prediction failed: {}", e),
            })
    }

    fn name(&self) -> &str {
        "SmartCore Linear Regression"
    }

    fn is_loaded(&self) -> bool {
        self.artifact.is_some()
    }
}
