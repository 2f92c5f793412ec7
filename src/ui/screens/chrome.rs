use {
    crate::{
        ui::{UI_CONFIG, UI_TEXT},
        utils::current_year,
    },
    eframe::egui::{Context, RichText, TopBottomPanel},
};

pub(crate) fn render_header(ctx: &Context) {
    TopBottomPanel::top("header")
        .frame(UI_CONFIG.top_panel_frame())
        .show(ctx, |ui| {
            ui.heading(
                RichText::new(&UI_TEXT.app_title)
                    .size(24.0)
                    .strong()
                    .color(UI_CONFIG.colors.heading),
            );
        });
}

pub(crate) fn footer_text(year: i32) -> String {
    format!("© {} {}", year, UI_TEXT.footer_rights)
}

pub(crate) fn render_footer(ctx: &Context) {
    TopBottomPanel::bottom("footer")
        .frame(UI_CONFIG.bottom_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(footer_text(current_year()))
                        .small()
                        .color(UI_CONFIG.colors.subdued),
                );
            });
        });
}
