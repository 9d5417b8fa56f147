use crate::domain::ml::FEATURE_NAMES;
use crate::interfaces::dashboard::SalesDashboard;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders the Predict Sales tab: trigger button and result on the left, model notes on the right
pub fn render_predict_view(ui: &mut egui::Ui, dashboard: &mut SalesDashboard) {
    ui.label(egui::RichText::new("Predict Daily Sales").size(18.0).strong());
    ui.add_space(10.0);

    ui.columns(2, |cols| {
        // --- Prediction ---
        cols[0].vertical(|ui| {
            let button = egui::Button::new(
                egui::RichText::new("Predict Sales")
                    .size(15.0)
                    .strong()
                    .color(DesignSystem::TEXT_ON_ACCENT),
            )
            .fill(DesignSystem::ACCENT_PRIMARY)
            .min_size(egui::vec2(160.0, 36.0));

            if ui.add(button).clicked() {
                dashboard.panel.run(&dashboard.context.predictor);
            }

            ui.add_space(DesignSystem::SPACING_MEDIUM);

            if let Some(outcome) = &dashboard.panel.last_outcome {
                let color = if outcome.is_success() {
                    DesignSystem::SUCCESS
                } else {
                    DesignSystem::DANGER
                };
                DesignSystem::banner_frame(color).show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(outcome.message())
                            .size(16.0)
                            .strong()
                            .color(color),
                    );
                });
            }
        });

        // --- Model info ---
        cols[1].vertical(|ui| {
            DesignSystem::banner_frame(DesignSystem::INFO).show(ui, |ui| {
                ui.label(
                    egui::RichText::new(
                        "This prediction uses a linear regression model trained on historical sales data.",
                    )
                    .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("Features: {}", FEATURE_NAMES.join(", ")))
                        .size(11.0)
                        .color(DesignSystem::TEXT_SECONDARY),
                );

                let predictor = &dashboard.context.predictor;
                let (status, color) = if predictor.is_ready() {
                    (format!("● {} loaded", predictor.model_name()), DesignSystem::SUCCESS)
                } else {
                    ("● Model not loaded".to_string(), DesignSystem::DANGER)
                };
                ui.label(egui::RichText::new(status).size(11.0).color(color));
            });
        });
    });
}
