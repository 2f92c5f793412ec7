// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binary and tests)
pub use app::{Action, App, Store, ViewState};
pub use config::CoinCapApiConfig;
pub use data::{AssetSource, CoinCapProvider};
pub use domain::{Asset, AssetsResponse, FetchFailure};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Asset collection endpoint (defaults to the public CoinCap API)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    pub fn api_config(&self) -> CoinCapApiConfig {
        let defaults = CoinCapApiConfig::default();
        CoinCapApiConfig {
            assets_url: self.api_url.clone().unwrap_or(defaults.assets_url),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults_to_public_endpoint() {
        let cli = Cli::parse_from(["coincap-view"]);
        assert_eq!(cli.api_config(), CoinCapApiConfig::default());
        assert_eq!(
            cli.api_config().assets_url,
            "https://api.coincap.io/v2/assets"
        );
    }

    #[test]
    fn cli_overrides_endpoint_and_timeout() {
        let cli = Cli::parse_from([
            "coincap-view",
            "--api-url",
            "http://localhost:8080/v2/assets",
            "--timeout-ms",
            "2500",
        ]);
        let config = cli.api_config();
        assert_eq!(config.assets_url, "http://localhost:8080/v2/assets");
        assert_eq!(config.timeout_ms, 2500);
    }
}
