pub mod context;

pub use context::DashboardContext;
