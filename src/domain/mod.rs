// Domain types and value objects
mod asset;
mod error;

pub use asset::{Asset, AssetsResponse};
pub use error::{FETCH_FAILED_MESSAGE, FetchFailure};
