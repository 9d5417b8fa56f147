use crate::domain::sales::KpiCard;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Direction of a KPI change indicator such as `+5%` or `-2%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaTone {
    Up,
    Down,
}

impl DeltaTone {
    pub fn of(delta: &str) -> Self {
        if delta.trim_start().starts_with('-') {
            DeltaTone::Down
        } else {
            DeltaTone::Up
        }
    }

    pub fn color(self) -> egui::Color32 {
        match self {
            DeltaTone::Up => DesignSystem::SUCCESS,
            DeltaTone::Down => DesignSystem::DANGER,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            DeltaTone::Up => "↑",
            DeltaTone::Down => "↓",
        }
    }
}

/// Border accent for a KPI tile: cards with a delta are outlined in the trend's colour.
pub fn kpi_accent(card: &KpiCard) -> Option<egui::Color32> {
    card.delta.map(|d| DeltaTone::of(d).color())
}

/// Renders one KPI card: title, big value, optional delta pill and icon
pub fn render_kpi_card(ui: &mut egui::Ui, card: &KpiCard) {
    DesignSystem::kpi_frame(kpi_accent(card)).show(ui, |ui| {
        ui.set_min_height(100.0);
        ui.label(
            egui::RichText::new(card.title.to_uppercase())
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY)
                .strong(),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&card.value)
                        .size(26.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );

                if let Some(delta) = card.delta {
                    ui.add_space(4.0);
                    render_delta_pill(ui, delta);
                }
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(card.icon)
                        .size(24.0)
                        .color(DesignSystem::TEXT_MUTED),
                );
            });
        });
    });
}

/// A small pill showing a change indicator such as `+5%`
pub fn render_delta_pill(ui: &mut egui::Ui, text: &str) {
    let tone = DeltaTone::of(text);
    let color = tone.color();

    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(format!("{} {}", tone.arrow(), text))
                    .size(12.0)
                    .strong()
                    .color(color),
            );
        });
}
