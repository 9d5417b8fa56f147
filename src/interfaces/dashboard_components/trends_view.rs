use crate::domain::formatting::format_grouped;
use crate::interfaces::dashboard::SalesDashboard;
use crate::interfaces::dashboard_components::data_table::render_data_table;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::TrendsViewModel;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

/// Renders the Sales Trends tab
pub fn render_trends_view(ui: &mut egui::Ui, dashboard: &mut SalesDashboard) {
    // --- SECTION 1: DAILY SALES ---
    ui.label(egui::RichText::new("Daily Sales Trend").size(18.0).strong());
    ui.add_space(10.0);

    let daily_points = TrendsViewModel::daily_points(&dashboard.context.daily);
    if daily_points.is_empty() {
        render_empty_hint(ui, "No daily sales data.");
    } else {
        let line = Line::new("Sales ($)", PlotPoints::from(daily_points))
            .color(DesignSystem::CHART_LINE)
            .width(1.5);

        Plot::new("daily_sales_plot")
            .height(280.0)
            .show_grid([true, true])
            .legend(Legend::default())
            .x_axis_label("Date")
            .y_axis_label("Sales ($)")
            .x_axis_formatter(|mark, _range| TrendsViewModel::date_axis_label(mark.value))
            .show(ui, |plot_ui| {
                plot_ui.line(line);
            });
    }

    ui.add_space(30.0);

    // --- SECTION 2: MONTHLY SALES ---
    ui.label(egui::RichText::new("Monthly Sales Trend").size(18.0).strong());
    ui.add_space(10.0);

    let monthly = dashboard.context.monthly.clone();
    if monthly.is_empty() {
        render_empty_hint(ui, "No monthly sales data.");
    } else {
        let bars: Vec<Bar> = TrendsViewModel::monthly_bars(&monthly)
            .into_iter()
            .zip(monthly.iter())
            .map(|((x, height), m)| Bar::new(x, height).name(&m.year_month).width(0.8))
            .collect();
        let chart = BarChart::new("Sales ($)", bars).color(DesignSystem::CHART_BAR);

        Plot::new("monthly_sales_plot")
            .height(280.0)
            .show_grid([false, true])
            .legend(Legend::default())
            .x_axis_label("Month")
            .y_axis_label("Sales ($)")
            .x_axis_formatter(move |mark, _range| {
                TrendsViewModel::month_axis_label(&monthly, mark.value)
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(chart);
            });
    }

    ui.add_space(DesignSystem::SPACING_LARGE);
    ui.separator();

    // --- SECTION 3: RAW DATA ---
    ui.checkbox(&mut dashboard.show_daily_table, "Show Raw Daily Data");
    if dashboard.show_daily_table {
        let rows = dashboard.context.daily.iter().map(|d| {
            vec![
                d.date.format("%Y-%m-%d").to_string(),
                format_grouped(d.sales, 2),
            ]
        });
        render_data_table(ui, "raw_daily_table", &["Order_Date", "Sales"], rows);
    }

    ui.checkbox(&mut dashboard.show_monthly_table, "Show Raw Monthly Data");
    if dashboard.show_monthly_table {
        let rows = dashboard
            .context
            .monthly
            .iter()
            .map(|m| vec![m.year_month.clone(), format_grouped(m.sales, 2)]);
        render_data_table(
            ui,
            "raw_monthly_table",
            &["Year_Month", "Monthly_Sales"],
            rows,
        );
    }
}

fn render_empty_hint(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .italics()
            .color(DesignSystem::TEXT_MUTED),
    );
}
