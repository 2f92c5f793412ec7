use std::sync::LazyLock;

pub struct UiText {
    pub app_title: String,

    // --- Status ---
    pub status_loading: String,

    // --- Table headers ---
    pub col_rank: String,
    pub col_icon: String,
    pub col_name: String,
    pub col_symbol: String,
    pub col_price: String,
    pub col_market_cap: String,
    pub col_change: String,

    pub label_load_more: String,
    pub label_showing: String,
    pub label_of: String,
    pub label_assets: String,
    pub label_as_of: String,
    pub label_icon_suffix: String,

    pub footer_rights: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "CoinCap Clone".to_string(),

    status_loading: "Loading cryptocurrencies...".to_string(),

    col_rank: "#".to_string(),
    col_icon: "Icon".to_string(),
    col_name: "Name".to_string(),
    col_symbol: "Symbol".to_string(),
    col_price: "Price (USD)".to_string(),
    col_market_cap: "Market Cap".to_string(),
    col_change: "Change (24h)".to_string(),

    label_load_more: "Load More".to_string(),
    label_showing: "Showing".to_string(),
    label_of: "of".to_string(),
    label_assets: "assets".to_string(),
    label_as_of: "as of".to_string(),
    label_icon_suffix: "icon".to_string(),

    footer_rights: "CoinCap Clone. All rights reserved.".to_string(),
});
