//! Quote request construction

use crate::domain::chain::ChainRegistry;
use crate::domain::trade::intent::{format_gas_price, TradeIntent};
use crate::shared::errors::QuoteError;
use crate::shared::types::Token;

/// Resolved query parameters for the quoting service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub chain_id: u64,
    pub from_token_id: String,
    pub to_token_id: String,
    /// Integer quotient in smallest units
    pub amount: String,
    pub gas_price: String,
    pub recipient: Option<String>,
}

impl QuoteRequest {
    /// Build the request for an intent, or `None` while the intent is not ready
    pub fn from_intent(intent: &TradeIntent) -> Result<Option<Self>, QuoteError> {
        if !intent.is_ready() {
            return Ok(None);
        }
        let Some(amount) = intent.amount.as_ref() else {
            return Ok(None);
        };

        Ok(Some(Self {
            chain_id: intent.chain_id,
            from_token_id: resolve_token_id(intent.chain_id, &intent.from_token)?,
            to_token_id: resolve_token_id(intent.chain_id, &intent.to_token)?,
            amount: amount.to_string(),
            gas_price: format_gas_price(intent.gas_price),
            recipient: intent.recipient.clone(),
        }))
    }

    /// Query string pairs in wire order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("chainId", self.chain_id.to_string()),
            ("fromTokenId", self.from_token_id.clone()),
            ("toTokenId", self.to_token_id.clone()),
            ("amount", self.amount.clone()),
            ("gasPrice", self.gas_price.clone()),
        ];
        if let Some(recipient) = &self.recipient {
            pairs.push(("to", recipient.clone()));
        }
        pairs
    }
}

/// Native currencies are addressed by the chain's currency id, everything else by contract
fn resolve_token_id(chain_id: u64, token: &Token) -> Result<String, QuoteError> {
    if token.is_native {
        ChainRegistry::native_currency_id(chain_id)
            .map(str::to_string)
            .ok_or(QuoteError::UnsupportedChain(chain_id))
    } else {
        Ok(token.wrapped_address().to_string())
    }
}
