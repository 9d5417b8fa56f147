use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::LogFeed;
use eframe::egui;

/// Renders forwarded log lines, newest at the bottom
pub fn render_log_panel(ui: &mut egui::Ui, feed: &LogFeed) {
    ui.label(
        egui::RichText::new("System Logs")
            .size(12.0)
            .strong()
            .color(DesignSystem::TEXT_SECONDARY),
    );

    egui::ScrollArea::vertical()
        .id_salt("log_scroll")
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for line in feed.lines() {
                let color = if line.contains("ERROR") {
                    DesignSystem::DANGER
                } else if line.contains("WARN") {
                    egui::Color32::from_rgb(255, 212, 59)
                } else {
                    DesignSystem::TEXT_MUTED
                };
                ui.label(egui::RichText::new(line).monospace().size(11.0).color(color));
            }
        });
}
