use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use crate::domain::price::PriceTable;
use crate::shared::errors::PriceError;
use crate::shared::utils::parse_decimal;
use super::PriceApiClient;

pub const DEFAULT_PRICES_API_URL: &str = "https://token-prices.sushi.com";

/// Token price service client
pub struct TokenPriceApiClient {
    http_client: Client,
    base_url: String,
}

impl TokenPriceApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PriceError> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PriceApiClient for TokenPriceApiClient {
    async fn get_prices(&self, chain_id: u64) -> Result<PriceTable, PriceError> {
        let url = format!("{}/v1/{}", self.base_url, chain_id);
        debug!("Fetching token prices from: {}", url);

        let response = self.http_client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(PriceError::Status(response.status().as_u16()));
        }

        let body: HashMap<String, Value> = response
            .json()
            .await
            .map_err(|e| PriceError::InvalidData(e.to_string()))?;

        let mut table = PriceTable::new();
        for (address, value) in body {
            let price = match &value {
                Value::Number(n) => parse_decimal(&n.to_string()),
                Value::String(s) => parse_decimal(s),
                _ => None,
            };
            match price {
                Some(price) => table.insert(&address, price),
                None => warn!("Skipping non-numeric price for {}: {}", address, value),
            }
        }

        debug!("Loaded {} prices for chain {}", table.len(), chain_id);
        Ok(table)
    }
}
