use crate::application::bootstrap::DashboardContext;
use crate::interfaces::dashboard_components::{
    kpi_view::render_kpi_view, log_panel::render_log_panel, predict_view::render_predict_view,
    sidebar::render_sidebar, trends_view::render_trends_view,
};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::{LogFeed, PredictionPanel};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Kpis,
    Trends,
    Predict,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Kpis,
        DashboardTab::Trends,
        DashboardTab::Predict,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Kpis => "📊 KPIs",
            DashboardTab::Trends => "📈 Sales Trends",
            DashboardTab::Predict => "🤖 Predict Sales",
        }
    }
}

/// Bullet points listed under the dashboard title.
pub const HEADER_BULLETS: [&str; 3] = [
    "Historical daily and monthly sales trends",
    "Key performance indicators",
    "Predict sales for a given day using Linear Regression",
];

/// The desktop dashboard: three tabs over a read-only [`DashboardContext`].
pub struct SalesDashboard {
    pub context: DashboardContext,
    pub panel: PredictionPanel,
    pub log_feed: Option<LogFeed>,
    pub selected_tab: DashboardTab,
    pub show_summary_table: bool,
    pub show_daily_table: bool,
    pub show_monthly_table: bool,
}

impl SalesDashboard {
    pub fn new(context: DashboardContext, log_feed: Option<LogFeed>) -> Self {
        Self {
            context,
            panel: PredictionPanel::default(),
            log_feed,
            selected_tab: DashboardTab::default(),
            show_summary_table: false,
            show_daily_table: false,
            show_monthly_table: false,
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.heading(
            egui::RichText::new("🛒 Sales Forecasting Dashboard")
                .size(28.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(egui::RichText::new("This dashboard shows:").color(DesignSystem::TEXT_SECONDARY));
        for bullet in HEADER_BULLETS {
            ui.label(
                egui::RichText::new(format!("• {}", bullet))
                    .strong()
                    .color(DesignSystem::TEXT_SECONDARY),
            );
        }
        ui.add_space(DesignSystem::SPACING_MEDIUM);

        ui.horizontal(|ui| {
            for tab in DashboardTab::ALL {
                let selected = self.selected_tab == tab;
                let text = egui::RichText::new(tab.label()).size(14.0).strong();
                if ui.selectable_label(selected, text).clicked() {
                    self.selected_tab = tab;
                }
                ui.add_space(DesignSystem::SPACING_SMALL);
            }
        });
        ui.separator();
        ui.add_space(DesignSystem::SPACING_SMALL);
    }
}

impl eframe::App for SalesDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(feed) = self.log_feed.as_mut() {
            feed.drain();
        }

        egui::SidePanel::left("input_panel")
            .default_width(260.0)
            .min_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                render_sidebar(ui, &mut self.panel.inputs);
            });

        if let Some(feed) = self.log_feed.as_ref() {
            egui::TopBottomPanel::bottom("log_panel")
                .resizable(true)
                .default_height(120.0)
                .show(ctx, |ui| {
                    render_log_panel(ui, feed);
                });
        }

        egui::CentralPanel::default()
            .frame(DesignSystem::main_frame())
            .show(ctx, |ui| {
                self.render_header(ui);

                egui::ScrollArea::vertical()
                    .id_salt("tab_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.selected_tab {
                        DashboardTab::Kpis => render_kpi_view(ui, self),
                        DashboardTab::Trends => render_trends_view(ui, self),
                        DashboardTab::Predict => render_predict_view(ui, self),
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_in_display_order() {
        let labels: Vec<_> = DashboardTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["📊 KPIs", "📈 Sales Trends", "🤖 Predict Sales"]);
        assert_eq!(DashboardTab::default(), DashboardTab::Kpis);
    }

    #[test]
    fn test_header_describes_given_day_prediction() {
        assert_eq!(
            HEADER_BULLETS[2],
            "Predict sales for a given day using Linear Regression"
        );
    }
}
