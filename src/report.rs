// src/report.rs
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::trade::{TradeIntent, TradeProjection, WriteArgs};
use crate::shared::types::Amount;

/// Decimal places shown for the execution price
const PRICE_PLACES: u32 = 6;

#[derive(Debug, Serialize)]
pub struct TradeReport {
    pub chain_id: u64,
    pub from_token: String,
    pub to_token: String,
    pub slippage_percentage: String,

    pub amount_in: Option<AmountDetails>,
    pub amount_out: Option<AmountDetails>,
    pub min_amount_out: Option<AmountDetails>,
    pub swap_price: Option<String>,
    pub price_impact: Option<f64>,
    pub gas_spent: Option<String>,
    pub route: Vec<String>,
    pub write_args: Option<WriteArgs>,

    /// Projection built from an earlier amount of the same pair
    pub stale: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AmountDetails {
    pub token: String,
    pub raw: String,
    pub formatted: String,
}

impl From<&Amount> for AmountDetails {
    fn from(amount: &Amount) -> Self {
        Self {
            token: amount.token.symbol_or_address().to_string(),
            raw: amount.raw.to_string(),
            formatted: amount.to_exact(),
        }
    }
}

impl TradeReport {
    pub fn new(intent: &TradeIntent, projection: &TradeProjection, stale: bool) -> Self {
        Self {
            chain_id: intent.chain_id,
            from_token: intent.from_token.symbol_or_address().to_string(),
            to_token: intent.to_token.symbol_or_address().to_string(),
            slippage_percentage: intent.slippage_percentage.as_str().to_string(),
            amount_in: projection.amount_in.as_ref().map(AmountDetails::from),
            amount_out: projection.amount_out.as_ref().map(AmountDetails::from),
            min_amount_out: projection.min_amount_out.as_ref().map(AmountDetails::from),
            swap_price: projection.swap_price.as_ref().map(|p| p.to_fixed(PRICE_PLACES)),
            price_impact: projection.price_impact,
            gas_spent: projection.gas_spent.clone(),
            route: projection.route.clone(),
            write_args: projection.write_args.clone(),
            stale,
            timestamp: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
