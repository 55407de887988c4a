// src/app.rs
use anyhow::{anyhow, Context, Result};
use num_bigint::BigInt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::application::trade_query::{FetchOutcome, TradeQuery};
use crate::config::Config;
use crate::domain::chain::ChainRegistry;
use crate::domain::price::PriceTable;
use crate::domain::trade::{SlippagePercentage, TradeIntent, DEFAULT_GAS_PRICE};
use crate::infrastructure::api_clients::{
    PriceApiClient, SwapQuoteApiClient, TokenPriceApiClient,
};
use crate::infrastructure::database::{NewToken, TokenStore};
use crate::report::TradeReport;
use crate::shared::errors::IntentError;
use crate::shared::types::Token;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub swap_url: String,
    pub prices_url: String,
    pub timeout_ms: u64,
    pub gas_price: f64,
    pub slippage_percentage: SlippagePercentage,
    pub recipient: Option<String>,
    pub database_path: String,
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Self {
        Self {
            swap_url: cfg.api.swap_url,
            prices_url: cfg.api.prices_url,
            timeout_ms: cfg.api.timeout_ms,
            gas_price: cfg.trade.gas_price.unwrap_or(DEFAULT_GAS_PRICE),
            slippage_percentage: cfg.trade.slippage_percentage.unwrap_or_default(),
            recipient: cfg.trade.recipient,
            database_path: cfg.database.path,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// One quote request as given on the command line
#[derive(Debug, Clone)]
pub struct QuoteParams {
    pub chain_id: u64,
    pub from: String,
    pub from_decimals: u8,
    pub to: String,
    pub to_decimals: u8,
    pub amount: String,
    pub block_number: Option<u64>,
    pub with_prices: bool,
}

/// "native" selects the chain's native currency, anything else is a contract address
pub fn resolve_token(chain_id: u64, token: &str, decimals: u8) -> Result<Token, IntentError> {
    if token.eq_ignore_ascii_case("native") {
        return ChainRegistry::native_currency(chain_id)
            .map(|native| native.token())
            .ok_or(IntentError::UnknownChain(chain_id));
    }
    Token::new(chain_id, token, decimals, None)
}

pub fn build_intent(app_cfg: &AppCfg, params: &QuoteParams) -> Result<TradeIntent, IntentError> {
    let from_token = resolve_token(params.chain_id, &params.from, params.from_decimals)?;
    let to_token = resolve_token(params.chain_id, &params.to, params.to_decimals)?;
    let amount = params
        .amount
        .trim()
        .parse::<BigInt>()
        .map_err(|_| IntentError::InvalidAmount(params.amount.clone()))?;

    let mut intent = TradeIntent::new(params.chain_id, from_token, to_token, Some(amount))
        .with_gas_price(app_cfg.gas_price)
        .with_slippage(app_cfg.slippage_percentage.clone());
    if let Some(recipient) = &app_cfg.recipient {
        intent = intent.with_recipient(recipient)?;
    }
    if let Some(block_number) = params.block_number {
        intent = intent.with_block_number(block_number);
    }
    Ok(intent)
}

pub async fn run_quote(app_cfg: &AppCfg, params: QuoteParams) -> Result<()> {
    info!("Requesting quote on chain {}", params.chain_id);
    if !ChainRegistry::is_chain_supported(params.chain_id) {
        warn!("Chain {} has no registered native currency; gas cost will not be reported", params.chain_id);
    }

    let intent = build_intent(app_cfg, &params)?;
    let quote_client = Arc::new(SwapQuoteApiClient::new(&app_cfg.swap_url, app_cfg.timeout())?);
    let query = TradeQuery::new(quote_client);

    let prices_future = async {
        if !params.with_prices {
            return None;
        }
        let client = match TokenPriceApiClient::new(&app_cfg.prices_url, app_cfg.timeout()) {
            Ok(client) => client,
            Err(e) => {
                warn!("Price client unavailable: {}", e);
                return None;
            }
        };
        match client.get_prices(intent.chain_id).await {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Prices unavailable, gas cost will not be reported: {}", e);
                None
            }
        }
    };

    let (outcome, prices): (_, Option<PriceTable>) = tokio::join!(query.fetch(&intent), prices_future);

    match outcome.context("quote request failed")? {
        FetchOutcome::Fresh(_) => {}
        FetchOutcome::Disabled => return Err(anyhow!("trade intent is incomplete; check amount and gas price")),
        FetchOutcome::Superseded => return Err(anyhow!("quote superseded by a newer request")),
    }

    let stale = query.data(&intent).await.map(|d| d.is_previous).unwrap_or(false);
    let projection = query.trade(&intent, prices.as_ref()).await;
    let report = TradeReport::new(&intent, &projection, stale);
    println!("{}", report.to_json()?);
    Ok(())
}

pub fn run_load_tokens(app_cfg: &AppCfg, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("read {}", file.display()))?;
    let tokens: Vec<NewToken> = serde_json::from_str(&content)
        .with_context(|| format!("parse token list {}", file.display()))?;
    info!("Loading {} tokens into {}", tokens.len(), app_cfg.database_path);

    let store = TokenStore::open(&app_cfg.database_path)?;
    let created = store.create_tokens(&tokens)?;
    info!("Token store now holds {} tokens ({} new)", store.count()?, created);
    Ok(())
}
