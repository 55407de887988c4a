//! Trade projection - user-facing summary derived from a raw route result

use num_bigint::BigInt;

use crate::domain::chain::ChainRegistry;
use crate::domain::price::PriceTable;
use crate::domain::trade::intent::{SlippagePercentage, TradeIntent};
use crate::domain::trade::route::{RawRouteResult, WriteArgs};
use crate::math::{calculate_min_out, gas_spent_to_native_raw, native_value};
use crate::shared::types::{Amount, Price, Token};
use crate::shared::utils::to_fixed;

/// Derived trade summary. Either every field is set, or none are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TradeProjection {
    pub swap_price: Option<Price>,
    pub price_impact: Option<f64>,
    pub amount_in: Option<Amount>,
    pub amount_out: Option<Amount>,
    pub min_amount_out: Option<Amount>,
    /// Gas cost in quote currency, two decimals
    pub gas_spent: Option<String>,
    pub route: Vec<String>,
    pub write_args: Option<WriteArgs>,
}

impl TradeProjection {
    /// The all-absent projection
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.amount_in.is_none() && self.amount_out.is_none()
    }
}

/// Inputs whose change must produce a fresh projection.
///
/// Holds the price snapshot itself; a refreshed table with identical entries
/// compares equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionKey {
    pub amount: Option<BigInt>,
    pub chain_id: u64,
    pub from_token: Token,
    pub to_token: Token,
    pub slippage_percentage: SlippagePercentage,
    pub prices: Option<PriceTable>,
}

pub fn projection_key(intent: &TradeIntent, prices: Option<&PriceTable>) -> ProjectionKey {
    ProjectionKey {
        amount: intent.amount.clone(),
        chain_id: intent.chain_id,
        from_token: intent.from_token.clone(),
        to_token: intent.to_token.clone(),
        slippage_percentage: intent.slippage_percentage.clone(),
        prices: prices.cloned(),
    }
}

/// Derive the trade summary. Pure; no I/O.
pub fn project(raw: Option<&RawRouteResult>, intent: &TradeIntent, prices: Option<&PriceTable>) -> TradeProjection {
    let Some(raw) = raw else {
        return TradeProjection::empty();
    };
    if intent.amount.is_none() {
        return TradeProjection::empty();
    }

    let best = &raw.best_route;
    let amount_in = Amount::from_raw(intent.from_token.clone(), best.amount_in_bn.clone());
    let amount_out = Amount::from_raw(intent.to_token.clone(), best.amount_out_bn.clone());

    let swap_price = if amount_out.is_positive() {
        Price::from_amounts(&amount_in, &amount_out)
    } else {
        None
    };

    let min_amount_out = Amount::from_raw(
        intent.to_token.clone(),
        calculate_min_out(&amount_out.raw, intent.slippage_percentage.basis_points()),
    );

    TradeProjection {
        swap_price,
        price_impact: Some(best.price_impact),
        gas_spent: gas_spent_value(raw, intent.chain_id, prices),
        route: raw.current_route_human_array.clone(),
        write_args: raw.write_args(),
        amount_in: Some(amount_in),
        amount_out: Some(amount_out),
        min_amount_out: Some(min_amount_out),
    }
}

/// Gas cost valued at the native currency's price; `None` without a price for it
fn gas_spent_value(raw: &RawRouteResult, chain_id: u64, prices: Option<&PriceTable>) -> Option<String> {
    let native = ChainRegistry::native_currency(chain_id)?;
    let unit_price = prices?.get(native.wrapped_address)?;
    let native_raw = gas_spent_to_native_raw(&raw.best_route.gas_spent);
    Some(to_fixed(&native_value(&native_raw, native.decimals, unit_price), 2))
}
