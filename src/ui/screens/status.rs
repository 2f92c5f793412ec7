use {
    crate::{
        app::ViewState,
        ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
    },
    eframe::egui::{RichText, Ui},
};

/// Loading / error line shown instead of the table.
/// Returns `false` when the table should be drawn.
pub(crate) fn render_status(ui: &mut Ui, state: &ViewState) -> bool {
    if state.is_loading() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.spinner();
            ui.add_space(8.0);
            ui.label(RichText::new(&UI_TEXT.status_loading).color(UI_CONFIG.colors.label));
        });
        return true;
    }
    if let Some(message) = state.error_message() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label_error(message);
        });
        return true;
    }
    false
}
