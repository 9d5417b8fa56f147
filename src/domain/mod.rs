// Sales tables and KPI cards
pub mod sales;

// Feature registry for the sales model
pub mod ml;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;

// Currency and count formatting
pub mod formatting;
