use {
    crate::{
        app::ViewState,
        domain::Asset,
        ui::{
            UI_CONFIG, UI_TEXT,
            icon::{IconSlots, render_icon},
            styles::{ChangeColor, UiStyleExt},
        },
        utils::{ChangeClass, epoch_ms_to_time_string, format_change_pct, format_currency},
    },
    eframe::egui::{Align, Button, Layout, RichText, ScrollArea, Ui},
    egui_extras::{Column, TableBuilder},
};

/// Text of one table row, ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    pub rank: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub change: String,
    pub change_class: ChangeClass,
}

impl AssetRow {
    pub fn from_asset(asset: &Asset) -> Self {
        let change = asset.change_percent_24h();
        Self {
            rank: asset.rank.clone(),
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            price: format!("${}", format_currency(asset.price_usd(), 2)),
            market_cap: format!("${}", format_currency(asset.market_cap_usd(), 0)),
            change: format_change_pct(change),
            change_class: ChangeClass::of(change),
        }
    }
}

/// "Showing 50 of 100 assets as of 06:13:20 UTC"
pub fn summary_line(state: &ViewState) -> String {
    let mut line = format!(
        "{} {} {} {} {}",
        UI_TEXT.label_showing,
        state.visible().len(),
        UI_TEXT.label_of,
        state.all().len(),
        UI_TEXT.label_assets
    );
    if let Some(time) = state.timestamp().and_then(epoch_ms_to_time_string) {
        line.push_str(&format!(" {} {}", UI_TEXT.label_as_of, time));
    }
    line
}

/// Table of the visible window plus the "Load More" trigger.
/// Returns `true` when the user asked for the next page.
pub(crate) fn render_asset_table(ui: &mut Ui, state: &ViewState, icons: &mut IconSlots) -> bool {
    let mut load_more = false;

    ui.label_subdued(summary_line(state));
    ui.add_space(6.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .cell_layout(Layout::left_to_right(Align::Center))
                .column(Column::exact(40.0))
                .column(Column::exact(UI_CONFIG.icon_size + 16.0))
                .column(Column::auto().at_least(140.0))
                .column(Column::auto().at_least(70.0))
                .column(Column::auto().at_least(120.0))
                .column(Column::auto().at_least(150.0))
                .column(Column::remainder().at_least(90.0))
                .header(UI_CONFIG.header_height, |mut header| {
                    for title in [
                        &UI_TEXT.col_rank,
                        &UI_TEXT.col_icon,
                        &UI_TEXT.col_name,
                        &UI_TEXT.col_symbol,
                        &UI_TEXT.col_price,
                        &UI_TEXT.col_market_cap,
                        &UI_TEXT.col_change,
                    ] {
                        header.col(|ui| {
                            ui.label(RichText::new(title).strong().color(UI_CONFIG.colors.heading));
                        });
                    }
                })
                .body(|mut body| {
                    for asset in state.visible() {
                        let row_text = AssetRow::from_asset(asset);
                        body.row(UI_CONFIG.row_height, |mut row| {
                            row.col(|ui| {
                                ui.label(&row_text.rank);
                            });
                            row.col(|ui| {
                                render_icon(ui, icons.slot_for(asset), &asset.symbol);
                            });
                            row.col(|ui| {
                                ui.label(RichText::new(&row_text.name).strong());
                            });
                            row.col(|ui| {
                                ui.label(&row_text.symbol);
                            });
                            row.col(|ui| {
                                ui.monospace(&row_text.price);
                            });
                            row.col(|ui| {
                                ui.monospace(&row_text.market_cap);
                            });
                            row.col(|ui| {
                                ui.label(
                                    RichText::new(&row_text.change)
                                        .monospace()
                                        .color(row_text.change_class.color()),
                                );
                            });
                        });
                    }
                });

            if state.has_more() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    let button = Button::new(ui.button_text_primary(&UI_TEXT.label_load_more))
                        .fill(UI_CONFIG.colors.side_panel);
                    if ui.add(button).clicked() {
                        load_more = true;
                    }
                });
                ui.add_space(12.0);
            }
        });

    load_more
}
