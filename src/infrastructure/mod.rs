pub mod csv_tables;

pub use csv_tables::{load_daily, load_monthly, load_summary};
