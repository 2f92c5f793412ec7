mod fetch;
mod provider;

pub use {
    fetch::{CancelToken, FetchHandle, FetchResult, run_fetch, spawn_fetch},
    provider::{AssetSource, CoinCapProvider, MaybeSendSync},
};
