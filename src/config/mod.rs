//! Configuration module for the asset view.

mod coincap;
mod debug;

pub use coincap::{COINCAP, CoinCapApiConfig};
pub use debug::DF;
