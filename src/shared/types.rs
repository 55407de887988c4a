//! Common types used across the application

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;
use serde::{Deserialize, Serialize};

use crate::shared::errors::IntentError;
use crate::shared::utils::{normalize_address, pow10, ratio, to_fixed};

/// Token representation.
///
/// For a chain's native currency `address` holds the wrapped-native
/// contract and `is_native` is set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
    pub symbol: Option<String>,
    pub is_native: bool,
}

impl Token {
    pub fn new(chain_id: u64, address: &str, decimals: u8, symbol: Option<String>) -> Result<Self, IntentError> {
        let address = normalize_address(address)
            .ok_or_else(|| IntentError::InvalidAddress(address.to_string()))?;
        Ok(Self {
            chain_id,
            address,
            decimals,
            symbol,
            is_native: false,
        })
    }

    /// Wrapped-token address, the key prices are published under
    pub fn wrapped_address(&self) -> &str {
        &self.address
    }

    pub fn symbol_or_address(&self) -> &str {
        self.symbol.as_deref().unwrap_or(&self.address)
    }
}

/// Amount of a token in its smallest unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub token: Token,
    pub raw: BigInt,
}

impl Amount {
    pub fn from_raw(token: Token, raw: impl Into<BigInt>) -> Self {
        Self { token, raw: raw.into() }
    }

    pub fn is_positive(&self) -> bool {
        self.raw.is_positive()
    }

    /// raw / 10^decimals
    pub fn as_fraction(&self) -> BigRational {
        BigRational::new(self.raw.clone(), pow10(self.token.decimals as u32))
    }

    pub fn to_fixed(&self, places: u32) -> String {
        to_fixed(&self.as_fraction(), places)
    }

    /// Full-precision human-readable value
    pub fn to_exact(&self) -> String {
        self.to_fixed(self.token.decimals as u32)
    }
}

/// Price of `base_token` in `quote_token`, kept as the exact ratio of raw units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub base_token: Token,
    pub quote_token: Token,
    pub raw_ratio: BigRational,
}

impl Price {
    /// quote / base, `None` when the base amount is zero
    pub fn from_amounts(base: &Amount, quote: &Amount) -> Option<Self> {
        Some(Self {
            base_token: base.token.clone(),
            quote_token: quote.token.clone(),
            raw_ratio: ratio(&quote.raw, &base.raw)?,
        })
    }

    /// Ratio rescaled to whole tokens on both sides
    pub fn adjusted(&self) -> BigRational {
        &self.raw_ratio * BigRational::new(
            pow10(self.base_token.decimals as u32),
            pow10(self.quote_token.decimals as u32),
        )
    }

    pub fn to_fixed(&self, places: u32) -> String {
        to_fixed(&self.adjusted(), places)
    }
}
