use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Renders a striped, scrollable raw-data table
pub fn render_data_table<I>(ui: &mut egui::Ui, id: &str, headers: &[&str], rows: I)
where
    I: Iterator<Item = Vec<String>>,
{
    ui.add_space(DesignSystem::SPACING_SMALL);
    DesignSystem::table_frame().show(ui, |ui| {
        egui::ScrollArea::vertical()
            .id_salt(format!("{}_scroll", id))
            .max_height(260.0)
            .show(ui, |ui| {
                egui::Grid::new(id)
                    .striped(true)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        ui.strong("#");
                        for header in headers {
                            ui.strong(*header);
                        }
                        ui.end_row();

                        for (i, row) in rows.enumerate() {
                            ui.label(
                                egui::RichText::new(i.to_string()).color(DesignSystem::TEXT_MUTED),
                            );
                            for cell in row {
                                ui.label(cell);
                            }
                            ui.end_row();
                        }
                    });
            });
    });
}
