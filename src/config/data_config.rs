//! Data source configuration parsing from environment variables.
//!
//! This module resolves where the model artifact and the three dashboard tables live.

use std::path::{Path, PathBuf};

/// Data source environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DataEnvConfig {
    pub data_dir: PathBuf,
    pub model_path: PathBuf,
    pub summary_path: PathBuf,
    pub daily_path: PathBuf,
    pub monthly_path: PathBuf,
}

impl Default for DataEnvConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DataEnvConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| ".".to_string()));

        let resolve = |key: &str, default: &str| -> PathBuf {
            let file = PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()));
            resolve_under(&data_dir, file)
        };

        Self {
            model_path: resolve("MODEL_PATH", "sales_model.json"),
            summary_path: resolve("SUMMARY_CSV", "dashboard_summary.csv"),
            daily_path: resolve("DAILY_CSV", "daily_sales_data.csv"),
            monthly_path: resolve("MONTHLY_CSV", "monthly_sales_trend.csv"),
            data_dir,
        }
    }
}

/// Relative paths are taken relative to `dir`; absolute paths are kept.
fn resolve_under(dir: &Path, file: PathBuf) -> PathBuf {
    if file.is_absolute() {
        file
    } else {
        dir.join(file)
    }
}
