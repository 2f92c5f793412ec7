use {
    anyhow::Result,
    async_trait::async_trait,
    reqwest::{Client, header::ACCEPT},
};

use crate::{
    config::CoinCapApiConfig,
    domain::{AssetsResponse, FetchFailure},
};

/// `Send + Sync` natively; browser futures and handles are neither.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSendSync for T {}

/// Abstract interface for fetching the asset collection.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait AssetSource: MaybeSendSync {
    /// Fetch the full collection in one request.
    async fn fetch_assets(&self) -> Result<AssetsResponse, FetchFailure>;
}

pub struct CoinCapProvider {
    client: Client,
    config: CoinCapApiConfig,
}

impl CoinCapProvider {
    pub fn new(config: CoinCapApiConfig) -> Result<Self> {
        let builder = Client::builder();
        // The browser owns request timeouts on wasm.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(config.timeout_ms));
        let client = builder.build()?;
        Ok(Self { client, config })
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl AssetSource for CoinCapProvider {
    async fn fetch_assets(&self) -> Result<AssetsResponse, FetchFailure> {
        log::info!("Fetching assets from {}", self.config.assets_url);

        let response = self
            .client
            .get(&self.config.assets_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}
