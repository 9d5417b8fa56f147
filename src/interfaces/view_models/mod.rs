pub mod dashboard_view_model;
pub mod log_feed;

pub use dashboard_view_model::{PredictionOutcome, PredictionPanel, SidebarInputs, TrendsViewModel};
pub use log_feed::LogFeed;
