//! Trade intent - what the user wants to swap

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::math::{slippage_tolerance_bps, BASIS_POINTS};
use crate::shared::errors::IntentError;
use crate::shared::types::Token;
use crate::shared::utils::{normalize_address, parse_decimal};

/// Gas price used when the caller does not supply one
pub const DEFAULT_GAS_PRICE: f64 = 50.0;

/// Slippage used when the caller does not supply one
pub const DEFAULT_SLIPPAGE_PERCENTAGE: &str = "0.5";

/// Slippage tolerance as a percentage string ("0.5" is 0.5%).
///
/// Keeps the caller's text and the truncated basis points derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct SlippagePercentage {
    text: String,
    bps: u32,
}

impl SlippagePercentage {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// floor(percentage * 100)
    pub fn basis_points(&self) -> u32 {
        self.bps
    }
}

impl FromStr for SlippagePercentage {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || IntentError::InvalidSlippage(s.to_string());
        let percentage: BigRational = parse_decimal(s).ok_or_else(invalid)?;
        if percentage.is_negative() {
            return Err(invalid());
        }
        let bps = slippage_tolerance_bps(&percentage)
            .to_u32()
            .filter(|bps| *bps <= BASIS_POINTS)
            .ok_or_else(invalid)?;
        Ok(Self {
            text: s.trim().to_string(),
            bps,
        })
    }
}

impl TryFrom<String> for SlippagePercentage {
    type Error = IntentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Default for SlippagePercentage {
    fn default() -> Self {
        Self {
            text: DEFAULT_SLIPPAGE_PERCENTAGE.to_string(),
            bps: 50,
        }
    }
}

impl fmt::Display for SlippagePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.text)
    }
}

/// Immutable description of a desired swap
#[derive(Debug, Clone, PartialEq)]
pub struct TradeIntent {
    pub chain_id: u64,
    pub from_token: Token,
    pub to_token: Token,
    /// Smallest units of `from_token`
    pub amount: Option<BigInt>,
    pub gas_price: f64,
    pub slippage_percentage: SlippagePercentage,
    pub recipient: Option<String>,
    pub block_number: Option<u64>,
}

impl TradeIntent {
    pub fn new(chain_id: u64, from_token: Token, to_token: Token, amount: Option<BigInt>) -> Self {
        Self {
            chain_id,
            from_token,
            to_token,
            amount,
            gas_price: DEFAULT_GAS_PRICE,
            slippage_percentage: SlippagePercentage::default(),
            recipient: None,
            block_number: None,
        }
    }

    pub fn with_gas_price(mut self, gas_price: f64) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn with_slippage(mut self, slippage_percentage: SlippagePercentage) -> Self {
        self.slippage_percentage = slippage_percentage;
        self
    }

    pub fn with_recipient(mut self, recipient: &str) -> Result<Self, IntentError> {
        let recipient = normalize_address(recipient)
            .ok_or_else(|| IntentError::InvalidAddress(recipient.to_string()))?;
        self.recipient = Some(recipient);
        Ok(self)
    }

    pub fn with_block_number(mut self, block_number: u64) -> Self {
        self.block_number = Some(block_number);
        self
    }

    /// Whether a quote request can be issued for this intent
    pub fn is_ready(&self) -> bool {
        self.chain_id != 0
            && self.amount.is_some()
            && self.gas_price.is_finite()
            && self.gas_price > 0.0
    }

    /// Cache key covering every field that goes into the quote request
    pub fn query_key(&self) -> TradeKey {
        TradeKey {
            chain_id: self.chain_id,
            from_token: self.from_token.clone(),
            to_token: self.to_token.clone(),
            amount: self.amount.clone(),
            gas_price: format_gas_price(self.gas_price),
            block_number: self.block_number,
            recipient: self.recipient.clone(),
        }
    }
}

/// Identity of a quote request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeKey {
    pub chain_id: u64,
    pub from_token: Token,
    pub to_token: Token,
    pub amount: Option<BigInt>,
    pub gas_price: String,
    pub block_number: Option<u64>,
    pub recipient: Option<String>,
}

impl TradeKey {
    /// Same chain and token pair, possibly different amount or gas price
    pub fn same_pair(&self, other: &TradeKey) -> bool {
        self.chain_id == other.chain_id
            && self.from_token == other.from_token
            && self.to_token == other.to_token
    }
}

/// Gas price as sent on the wire ("50", "1.5")
pub fn format_gas_price(gas_price: f64) -> String {
    format!("{}", gas_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chain::ChainRegistry;

    fn usdc() -> Token {
        Token::new(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6, Some("USDC".to_string())).unwrap()
    }

    fn eth() -> Token {
        ChainRegistry::native_currency(1).unwrap().token()
    }

    #[test]
    fn test_slippage_parsing() {
        let slippage: SlippagePercentage = "0.5".parse().unwrap();
        assert_eq!(slippage.basis_points(), 50);
        assert_eq!(slippage.as_str(), "0.5");

        assert_eq!("0.29".parse::<SlippagePercentage>().unwrap().basis_points(), 29);
        assert_eq!("0.555".parse::<SlippagePercentage>().unwrap().basis_points(), 55);
        assert_eq!("0".parse::<SlippagePercentage>().unwrap().basis_points(), 0);
        assert_eq!("100".parse::<SlippagePercentage>().unwrap().basis_points(), 10_000);

        assert!("abc".parse::<SlippagePercentage>().is_err());
        assert!("-1".parse::<SlippagePercentage>().is_err());
        assert!("100.01".parse::<SlippagePercentage>().is_err());
    }

    #[test]
    fn test_slippage_exponent_input() {
        assert_eq!("5e-1".parse::<SlippagePercentage>().unwrap().basis_points(), 50);
        assert_eq!("1e-256".parse::<SlippagePercentage>().unwrap().basis_points(), 0);

        for bad in ["1e99999", "1e999999999", "1.5e-2147483648", "1e-257", "1e3", ""] {
            assert_eq!(
                bad.parse::<SlippagePercentage>(),
                Err(IntentError::InvalidSlippage(bad.to_string())),
                "{} accepted",
                bad
            );
        }
    }

    #[test]
    fn test_default_slippage_matches_parsed() {
        let parsed: SlippagePercentage = DEFAULT_SLIPPAGE_PERCENTAGE.parse().unwrap();
        assert_eq!(SlippagePercentage::default(), parsed);
    }

    #[test]
    fn test_intent_readiness() {
        let intent = TradeIntent::new(1, eth(), usdc(), Some(BigInt::from(1_000u32)));
        assert!(intent.is_ready());
        assert_eq!(intent.gas_price, DEFAULT_GAS_PRICE);

        let no_amount = TradeIntent::new(1, eth(), usdc(), None);
        assert!(!no_amount.is_ready());

        let no_gas = intent.clone().with_gas_price(0.0);
        assert!(!no_gas.is_ready());

        let no_chain = TradeIntent::new(0, eth(), usdc(), Some(BigInt::from(1u8)));
        assert!(!no_chain.is_ready());
    }

    #[test]
    fn test_query_key_tracks_request_fields() {
        let intent = TradeIntent::new(1, eth(), usdc(), Some(BigInt::from(1_000u32)));
        let same = intent.clone().with_slippage("1".parse().unwrap());
        assert_eq!(intent.query_key(), same.query_key());

        let other_amount = TradeIntent::new(1, eth(), usdc(), Some(BigInt::from(2_000u32)));
        assert_ne!(intent.query_key(), other_amount.query_key());
        assert!(intent.query_key().same_pair(&other_amount.query_key()));

        let flipped = TradeIntent::new(1, usdc(), eth(), Some(BigInt::from(1_000u32)));
        assert!(!intent.query_key().same_pair(&flipped.query_key()));

        let pinned = intent.clone().with_block_number(19_000_000);
        assert_ne!(intent.query_key(), pinned.query_key());
    }

    #[test]
    fn test_recipient_validation() {
        let intent = TradeIntent::new(1, eth(), usdc(), None);
        assert!(intent.clone().with_recipient("0x1234").is_err());
        let intent = intent
            .with_recipient("0x000000000000000000000000000000000000dEaD")
            .unwrap();
        assert_eq!(
            intent.recipient.as_deref(),
            Some("0x000000000000000000000000000000000000dead")
        );
    }

    #[test]
    fn test_format_gas_price() {
        assert_eq!(format_gas_price(50.0), "50");
        assert_eq!(format_gas_price(1.5), "1.5");
    }
}
