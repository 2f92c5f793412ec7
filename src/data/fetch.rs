// Mount-time fetch: runs the one request off the UI thread and hands the
// result back over a channel the UI drains each frame.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc::{self, Receiver, TryRecvError},
};

use crate::{
    config::DF,
    data::AssetSource,
    domain::{AssetsResponse, FetchFailure},
    utils::AppInstant,
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

pub type FetchResult = Result<AssetsResponse, FetchFailure>;

/// Shared flag telling an in-flight fetch that nobody wants its result.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Receiving end of a spawned fetch. Dropping it cancels the fetch.
pub struct FetchHandle {
    rx: Receiver<FetchResult>,
    token: CancelToken,
}

impl FetchHandle {
    /// Non-blocking. `Some` exactly when the fetch has finished.
    ///
    /// A worker that died without answering counts as a network failure.
    pub fn try_take(&self) -> Option<FetchResult> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(FetchFailure::Network(
                "fetch task ended without a result".to_string(),
            ))),
        }
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Run one fetch. Returns `None` if the token was cancelled meanwhile.
pub async fn run_fetch(source: &dyn AssetSource, token: &CancelToken) -> Option<FetchResult> {
    let start = AppInstant::now();
    let result = source.fetch_assets().await;

    if token.is_cancelled() {
        log::info!("View closed before the asset fetch finished; discarding result");
        return None;
    }

    match &result {
        Ok(resp) => {
            if DF.log_fetch {
                log::info!(
                    "Fetched {} assets in {}ms",
                    resp.data.len(),
                    start.elapsed().as_millis()
                );
            }
        }
        Err(e) => log::error!("Error fetching cryptocurrencies: {}", e),
    }
    Some(result)
}

/// Start the one fetch. `on_done` runs after a result has been delivered.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_fetch(
    source: Arc<dyn AssetSource>,
    on_done: impl Fn() + Send + 'static,
) -> FetchHandle {
    let (tx, rx) = mpsc::channel();
    let token = CancelToken::new();
    let worker_token = token.clone();

    let spawned = thread::Builder::new()
        .name("asset-fetch".to_string())
        .spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create fetch runtime: {}", e);
                    return; // drops tx; the handle reports a failure
                }
            };
            rt.block_on(async move {
                if let Some(result) = run_fetch(source.as_ref(), &worker_token).await {
                    if tx.send(result).is_ok() {
                        on_done();
                    }
                }
            });
        });

    if let Err(e) = spawned {
        log::error!("Failed to spawn fetch thread: {}", e);
    }

    FetchHandle { rx, token }
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_fetch(source: Arc<dyn AssetSource>, on_done: impl Fn() + 'static) -> FetchHandle {
    let (tx, rx) = mpsc::channel();
    let token = CancelToken::new();
    let worker_token = token.clone();

    wasm_bindgen_futures::spawn_local(async move {
        if let Some(result) = run_fetch(source.as_ref(), &worker_token).await {
            if tx.send(result).is_ok() {
                on_done();
            }
        }
    });

    FetchHandle { rx, token }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Asset;
    use async_trait::async_trait;

    struct Fixed(usize);

    #[async_trait]
    impl AssetSource for Fixed {
        async fn fetch_assets(&self) -> Result<AssetsResponse, FetchFailure> {
            let data = (0..self.0)
                .map(|i| Asset {
                    id: i.to_string(),
                    rank: (i + 1).to_string(),
                    name: format!("Coin {}", i),
                    symbol: format!("C{}", i),
                    price_usd: "1".into(),
                    market_cap_usd: "1".into(),
                    change_percent_24_hr: "0".into(),
                })
                .collect();
            Ok(AssetsResponse {
                data,
                timestamp: None,
            })
        }
    }

    #[tokio::test]
    async fn live_token_delivers_result() {
        let token = CancelToken::new();
        let result = run_fetch(&Fixed(3), &token).await;
        assert_eq!(result.unwrap().unwrap().data.len(), 3);
    }

    #[tokio::test]
    async fn cancelled_token_discards_late_result() {
        let token = CancelToken::new();
        token.cancel();
        assert!(run_fetch(&Fixed(3), &token).await.is_none());
    }

    #[test]
    fn dropping_the_handle_cancels() {
        let (_tx, rx) = mpsc::channel::<FetchResult>();
        let token = CancelToken::new();
        let observer = token.clone();
        drop(FetchHandle { rx, token });
        assert!(observer.is_cancelled());
    }

    #[test]
    fn dead_worker_reads_as_failure() {
        let (tx, rx) = mpsc::channel::<FetchResult>();
        drop(tx);
        let handle = FetchHandle {
            rx,
            token: CancelToken::new(),
        };
        assert!(matches!(
            handle.try_take(),
            Some(Err(FetchFailure::Network(_)))
        ));
    }
}
