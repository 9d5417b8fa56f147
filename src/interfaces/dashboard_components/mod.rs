pub mod data_table;
pub mod kpi_view;
pub mod log_panel;
pub mod predict_view;
pub mod sidebar;
pub mod trends_view;
