use eframe::egui;

/// Palette and frames for the sales dashboard: a dark report look with a coral
/// accent, tuned for wide charts and a narrow input sidebar.
pub struct DesignSystem;

impl DesignSystem {
    // --- Colors ---

    pub const BG_WINDOW: egui::Color32 = egui::Color32::from_rgb(14, 17, 23); // #0E1117
    pub const BG_PANEL: egui::Color32 = egui::Color32::from_rgb(38, 39, 48); // #262730
    pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(26, 28, 36);
    pub const BG_INPUT: egui::Color32 = egui::Color32::from_rgb(19, 21, 28);

    pub const ACCENT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(255, 75, 75); // #FF4B4B
    pub const CHART_LINE: egui::Color32 = egui::Color32::from_rgb(31, 119, 180); // #1F77B4
    pub const CHART_BAR: egui::Color32 = egui::Color32::from_rgb(99, 110, 250); // #636EFA

    pub const SUCCESS: egui::Color32 = egui::Color32::from_rgb(33, 195, 84); // #21C354
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(255, 43, 43);
    pub const INFO: egui::Color32 = egui::Color32::from_rgb(28, 131, 225); // #1C83E1

    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(250, 250, 250);
    pub const TEXT_ON_ACCENT: egui::Color32 = egui::Color32::WHITE;
    pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_gray(170);
    pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_gray(110);

    pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(55, 58, 70);

    // --- Metrics ---

    pub const ROUNDING: f32 = 6.0;

    pub const SPACING_SMALL: f32 = 8.0;
    pub const SPACING_MEDIUM: f32 = 16.0;
    pub const SPACING_LARGE: f32 = 24.0;

    /// Sidebar sliders span the panel instead of egui's 100px default.
    pub const SLIDER_WIDTH: f32 = 170.0;

    // --- Styles ---

    /// Full style applied once at startup: dark visuals plus the dashboard's spacing.
    pub fn style() -> egui::Style {
        let mut style = egui::Style {
            visuals: egui::Visuals::dark(),
            ..Default::default()
        };

        let visuals = &mut style.visuals;
        visuals.window_fill = Self::BG_WINDOW;
        visuals.panel_fill = Self::BG_PANEL;
        visuals.extreme_bg_color = Self::BG_INPUT;
        visuals.faint_bg_color = Self::BG_CARD;
        visuals.hyperlink_color = Self::INFO;

        visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, Self::BORDER_SUBTLE);
        visuals.widgets.inactive.bg_fill = Self::BG_INPUT;
        visuals.widgets.inactive.weak_bg_fill = Self::BG_INPUT;
        visuals.widgets.active.bg_fill = Self::ACCENT_PRIMARY;

        // Selected tabs and slider rails carry the accent
        visuals.selection.bg_fill = Self::ACCENT_PRIMARY.linear_multiply(0.35);
        visuals.selection.stroke = egui::Stroke::new(1.0, Self::ACCENT_PRIMARY);
        visuals.slider_trailing_fill = true;

        style.spacing.slider_width = Self::SLIDER_WIDTH;
        style.spacing.item_spacing = egui::vec2(10.0, 8.0);
        style.spacing.button_padding = egui::vec2(10.0, 5.0);

        style
    }

    /// KPI tile frame; a trend accent tints the border and drops a matching glow.
    pub fn kpi_frame(accent: Option<egui::Color32>) -> egui::Frame {
        let frame = egui::Frame::NONE
            .fill(Self::BG_CARD)
            .corner_radius(Self::ROUNDING)
            .inner_margin(egui::Margin::symmetric(16, 12));

        match accent {
            Some(color) => frame
                .stroke(egui::Stroke::new(1.5, color.linear_multiply(0.8)))
                .shadow(egui::epaint::Shadow {
                    offset: [0, 3],
                    blur: 12,
                    spread: 0,
                    color: color.linear_multiply(0.12),
                }),
            None => frame.stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE)),
        }
    }

    /// Flat frame around raw-data tables
    pub fn table_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_INPUT)
            .corner_radius(Self::ROUNDING)
            .stroke(egui::Stroke::new(1.0, Self::BORDER_SUBTLE))
            .inner_margin(egui::Margin::same(10))
    }

    /// Central panel frame
    pub fn main_frame() -> egui::Frame {
        egui::Frame::NONE
            .fill(Self::BG_WINDOW)
            .inner_margin(egui::Margin::same(Self::SPACING_LARGE as i8))
    }

    /// Tinted banner used for prediction results and notes
    pub fn banner_frame(color: egui::Color32) -> egui::Frame {
        egui::Frame::NONE
            .fill(color.linear_multiply(0.12))
            .corner_radius(Self::ROUNDING)
            .stroke(egui::Stroke::new(1.0, color.linear_multiply(0.6)))
            .inner_margin(egui::Margin::symmetric(12, 10))
    }
}
