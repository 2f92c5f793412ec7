use serde::{Deserialize, Deserializer};

use crate::utils::parse_float;

/// One cryptocurrency's market snapshot as returned by the upstream API.
///
/// Numeric fields stay as the strings that arrived on the wire. They are only
/// parsed when a row is rendered, so a malformed value degrades to `NaN` in
/// that one cell instead of rejecting the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rank: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub price_usd: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub market_cap_usd: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub change_percent_24_hr: String,
}

impl Asset {
    pub fn price_usd(&self) -> f64 {
        parse_float(&self.price_usd)
    }

    pub fn market_cap_usd(&self) -> f64 {
        parse_float(&self.market_cap_usd)
    }

    pub fn change_percent_24h(&self) -> f64 {
        parse_float(&self.change_percent_24_hr)
    }
}

/// Envelope of `GET /v2/assets`.
#[derive(Debug, Deserialize)]
pub struct AssetsResponse {
    pub data: Vec<Asset>,
    /// Server time of the snapshot, epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
}

// CoinCap sends `null` for unknown market cap / change on thin markets.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
