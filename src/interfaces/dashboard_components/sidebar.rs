use crate::domain::ml::feature_registry::weekday_label;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::SidebarInputs;
use eframe::egui;

/// Renders the six prediction inputs. Widget ranges are the only bound checks on them.
pub fn render_sidebar(ui: &mut egui::Ui, inputs: &mut SidebarInputs) {
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.heading(egui::RichText::new("Input Features for Prediction").size(16.0).strong());
    ui.separator();
    ui.add_space(DesignSystem::SPACING_SMALL);

    field(ui, "Quantity", |ui| {
        ui.add(egui::Slider::new(&mut inputs.quantity, 1..=200));
    });

    field(ui, "Profit", |ui| {
        ui.add(egui::DragValue::new(&mut inputs.profit).speed(5.0).prefix("$"));
    });

    field(ui, "Discount", |ui| {
        ui.add(egui::Slider::new(&mut inputs.discount, 0.0..=1.0).step_by(0.01));
    });

    field(ui, "Month", |ui| {
        egui::ComboBox::from_id_salt("month_select")
            .selected_text(inputs.month.to_string())
            .show_ui(ui, |ui| {
                for month in 1..=12u32 {
                    ui.selectable_value(&mut inputs.month, month, month.to_string());
                }
            });
    });

    field(ui, "Day", |ui| {
        ui.add(egui::DragValue::new(&mut inputs.day).range(1..=31));
    });

    field(ui, "Day of Week", |ui| {
        egui::ComboBox::from_id_salt("day_of_week_select")
            .selected_text(format!(
                "{} ({})",
                inputs.day_of_week,
                weekday_label(inputs.day_of_week)
            ))
            .show_ui(ui, |ui| {
                for dow in 0..7u32 {
                    ui.selectable_value(
                        &mut inputs.day_of_week,
                        dow,
                        format!("{} ({})", dow, weekday_label(dow)),
                    );
                }
            });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    if ui.button("Reset to defaults").clicked() {
        *inputs = SidebarInputs::default();
    }
}

fn field(ui: &mut egui::Ui, label: &str, add_widget: impl FnOnce(&mut egui::Ui)) {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(DesignSystem::TEXT_SECONDARY),
    );
    add_widget(ui);
    ui.add_space(DesignSystem::SPACING_SMALL);
}
