use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use crate::domain::trade::SlippagePercentage;
use crate::infrastructure::api_clients::swap_quote_client::DEFAULT_SWAP_API_URL;
use crate::infrastructure::api_clients::token_price_client::DEFAULT_PRICES_API_URL;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DATABASE_PATH: &str = "tokens.db";

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCfg {
    #[serde(default = "default_swap_url")]
    pub swap_url: String,
    #[serde(default = "default_prices_url")]
    pub prices_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiCfg {
    fn default() -> Self {
        Self {
            swap_url: default_swap_url(),
            prices_url: default_prices_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TradeCfg {
    pub gas_price: Option<f64>,
    pub slippage_percentage: Option<SlippagePercentage>,
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseCfg {
    #[serde(default = "default_database_path")]
    pub path: String,
}

impl Default for DatabaseCfg {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiCfg,
    #[serde(default)]
    pub trade: TradeCfg,
    #[serde(default)]
    pub database: DatabaseCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).context("parse Config.toml")?;
        Ok(cfg)
    }
}

fn default_swap_url() -> String {
    DEFAULT_SWAP_API_URL.to_string()
}

fn default_prices_url() -> String {
    DEFAULT_PRICES_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_database_path() -> String {
    DEFAULT_DATABASE_PATH.to_string()
}
