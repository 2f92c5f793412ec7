/// Per-request HTTP client settings. No retries: a failed fetch stays failed.
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// Endpoints of the upstream API and its image host.
pub struct Endpoints {
    /// Full asset collection. No paging on the server side.
    pub assets_url: &'static str,
    /// Icon host; icons live at `{icon_base_url}/{symbol}@2x.png`.
    pub icon_base_url: &'static str,
    /// Loaded once when an icon fails.
    pub icon_placeholder_url: &'static str,
}

/// Local disclosure window.
pub struct Paging {
    pub page_size: usize,
}

pub struct CoinCapConfig {
    pub endpoints: Endpoints,
    pub paging: Paging,
    pub client: ClientDefaults,
}

pub const COINCAP: CoinCapConfig = CoinCapConfig {
    endpoints: Endpoints {
        assets_url: "https://api.coincap.io/v2/assets",
        icon_base_url: "https://assets.coincap.io/assets/icons",
        icon_placeholder_url: "https://via.placeholder.com/24",
    },
    paging: Paging { page_size: 50 },
    client: ClientDefaults { timeout_ms: 10_000 },
};

/// Runtime settings for the asset client, seeded from [`COINCAP`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinCapApiConfig {
    pub assets_url: String,
    pub timeout_ms: u64,
}

impl Default for CoinCapApiConfig {
    fn default() -> Self {
        Self {
            assets_url: COINCAP.endpoints.assets_url.to_string(),
            timeout_ms: COINCAP.client.timeout_ms,
        }
    }
}
