mod asset_table;
mod icon;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub use asset_table::{AssetRow, summary_line};
pub use icon::{IconSlot, IconSlots, icon_url};
pub use styles::ChangeColor;
pub use ui_config::{UI_CONFIG, UI_TEXT, UiConfig};

pub(crate) use asset_table::render_asset_table;
pub(crate) use screens::{render_footer, render_header, render_status};
