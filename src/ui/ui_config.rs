use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub error: Color32,
    pub subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub icon_size: f32,
    pub row_height: f32,
    pub header_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::LIGHT_GRAY,
        heading: Color32::YELLOW,
        central_panel: Color32::from_rgb(18, 20, 28),
        side_panel: Color32::from_rgb(25, 25, 25),
        positive: Color32::from_rgb(24, 198, 131),
        negative: Color32::from_rgb(244, 67, 54),
        error: Color32::from_rgb(244, 67, 54),
        subdued: Color32::GRAY,
    },
    icon_size: 24.0,
    row_height: 32.0,
    header_height: 24.0,
};

impl UiConfig {
    /// Frame for the header bar
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the footer (Tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for the table area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }
}
