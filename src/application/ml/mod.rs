pub mod predictor;
pub mod smartcore_predictor;

pub use predictor::SalesPredictor;
pub use smartcore_predictor::{ModelArtifact, SalesRegressor, SmartcoreSalesModel};
