use std::collections::HashMap;

use eframe::egui::{Image, Ui, Vec2, load::SizeHint};

use crate::{
    config::{COINCAP, DF},
    domain::Asset,
    ui::{UI_CONFIG, UI_TEXT, styles::UiStyleExt},
};

/// Icon URL for a ticker symbol, e.g. `BTC` -> `.../icons/btc@2x.png`.
pub fn icon_url(symbol: &str) -> String {
    format!(
        "{}/{}@2x.png",
        COINCAP.endpoints.icon_base_url,
        symbol.to_lowercase()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IconStage {
    Primary,
    Placeholder,
    Broken,
}

/// Image source of one table row's icon.
///
/// The first load error swaps to the placeholder. After that the error
/// handler is disarmed: a failing placeholder just marks the slot broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlot {
    src: String,
    stage: IconStage,
}

impl IconSlot {
    pub fn for_symbol(symbol: &str) -> Self {
        Self {
            src: icon_url(symbol),
            stage: IconStage::Primary,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_broken(&self) -> bool {
        self.stage == IconStage::Broken
    }

    /// Report a load error. Returns `true` only for the single source swap.
    pub fn on_error(&mut self) -> bool {
        match self.stage {
            IconStage::Primary => {
                self.src = COINCAP.endpoints.icon_placeholder_url.to_string();
                self.stage = IconStage::Placeholder;
                true
            }
            IconStage::Placeholder | IconStage::Broken => {
                self.stage = IconStage::Broken;
                false
            }
        }
    }
}

/// Icon slots keyed by asset id, one per rendered row.
#[derive(Debug, Default)]
pub struct IconSlots(HashMap<String, IconSlot>);

impl IconSlots {
    pub fn slot_for(&mut self, asset: &Asset) -> &mut IconSlot {
        self.0
            .entry(asset.id.clone())
            .or_insert_with(|| IconSlot::for_symbol(&asset.symbol))
    }
}

pub(crate) fn alt_text(symbol: &str) -> String {
    format!("{} {}", symbol, UI_TEXT.label_icon_suffix)
}

pub(crate) fn render_icon(ui: &mut Ui, slot: &mut IconSlot, symbol: &str) {
    let alt = alt_text(symbol);
    if slot.is_broken() {
        ui.label_subdued(alt);
        return;
    }

    if let Err(err) = ui.ctx().try_load_image(slot.src(), SizeHint::default()) {
        if DF.log_icons {
            log::info!("Icon {} failed: {}", slot.src(), err);
        }
        slot.on_error();
        ui.ctx().request_repaint();
        return;
    }

    ui.add(Image::new(slot.src().to_owned()).fit_to_exact_size(Vec2::splat(UI_CONFIG.icon_size)))
        .on_hover_text(alt);
}
