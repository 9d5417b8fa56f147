use crate::domain::formatting::format_grouped;
use crate::interfaces::components::metrics::render_kpi_card;
use crate::interfaces::dashboard::SalesDashboard;
use crate::interfaces::dashboard_components::data_table::render_data_table;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the KPI tab: four metric cards plus the optional summary table
pub fn render_kpi_view(ui: &mut egui::Ui, dashboard: &mut SalesDashboard) {
    ui.label(egui::RichText::new("Key Metrics").size(18.0).strong());
    ui.add_space(10.0);

    let cards = dashboard.context.kpis.cards();
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards.iter()) {
            column.push_id(card.title, |ui| render_kpi_card(ui, card));
        }
    });

    ui.add_space(DesignSystem::SPACING_LARGE);
    ui.separator();
    ui.checkbox(&mut dashboard.show_summary_table, "Show KPI Summary Table");

    if dashboard.show_summary_table {
        let rows = dashboard
            .context
            .summary
            .iter()
            .map(|r| vec![r.metric.clone(), format_grouped(r.value, 2)]);
        render_data_table(ui, "kpi_summary_table", &["Metric", "Value"], rows);
    }
}
