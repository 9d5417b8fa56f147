pub mod feature_registry;

pub use feature_registry::{FEATURE_COUNT, FEATURE_NAMES, SalesFeatures};
