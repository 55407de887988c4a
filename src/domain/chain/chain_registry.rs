//! Native currency registry for supported EVM chains

use crate::shared::types::Token;

/// Native currency of a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeCurrency {
    pub chain_id: u64,
    /// Identifier the quoting service expects in place of a contract address
    pub id: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub wrapped_address: &'static str,
}

impl NativeCurrency {
    /// Token descriptor for the native currency
    pub fn token(&self) -> Token {
        Token {
            chain_id: self.chain_id,
            address: self.wrapped_address.to_string(),
            decimals: self.decimals,
            symbol: Some(self.symbol.to_string()),
            is_native: true,
        }
    }
}

const NATIVE_CURRENCIES: &[NativeCurrency] = &[
    NativeCurrency {
        chain_id: 1,
        id: "ETH",
        symbol: "ETH",
        decimals: 18,
        wrapped_address: "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2",
    },
    NativeCurrency {
        chain_id: 10,
        id: "ETH",
        symbol: "ETH",
        decimals: 18,
        wrapped_address: "0x4200000000000000000000000000000000000006",
    },
    NativeCurrency {
        chain_id: 56,
        id: "BNB",
        symbol: "BNB",
        decimals: 18,
        wrapped_address: "0xbb4cdb9cbd36b01bd1cbaebf2de08d9173bc095c",
    },
    NativeCurrency {
        chain_id: 100,
        id: "XDAI",
        symbol: "xDAI",
        decimals: 18,
        wrapped_address: "0xe91d153e0b41518a2ce8dd3d7944fa863463a97d",
    },
    NativeCurrency {
        chain_id: 137,
        id: "MATIC",
        symbol: "MATIC",
        decimals: 18,
        wrapped_address: "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270",
    },
    NativeCurrency {
        chain_id: 250,
        id: "FTM",
        symbol: "FTM",
        decimals: 18,
        wrapped_address: "0x21be370d5312f44cb42ce377bc9b8a0cef1a4c83",
    },
    NativeCurrency {
        chain_id: 42161,
        id: "ETH",
        symbol: "ETH",
        decimals: 18,
        wrapped_address: "0x82af49447d8a07e3bd95bd0d56f35241523fbab1",
    },
    NativeCurrency {
        chain_id: 43114,
        id: "AVAX",
        symbol: "AVAX",
        decimals: 18,
        wrapped_address: "0xb31f66aa3c1e785363f0875a1b74e27b85fd66c7",
    },
];

/// Static chain registry
pub struct ChainRegistry;

impl ChainRegistry {
    /// Get all supported chains
    pub fn get_all_native_currencies() -> &'static [NativeCurrency] {
        NATIVE_CURRENCIES
    }

    /// Native currency for a chain
    pub fn native_currency(chain_id: u64) -> Option<&'static NativeCurrency> {
        NATIVE_CURRENCIES.iter().find(|native| native.chain_id == chain_id)
    }

    /// Quoting-service id of the chain's native currency ("ETH", "MATIC", ...)
    pub fn native_currency_id(chain_id: u64) -> Option<&'static str> {
        Self::native_currency(chain_id).map(|native| native.id)
    }

    /// Wrapped-native token address for a chain
    pub fn wrapped_native_address(chain_id: u64) -> Option<&'static str> {
        Self::native_currency(chain_id).map(|native| native.wrapped_address)
    }

    /// Check if chain is supported
    pub fn is_chain_supported(chain_id: u64) -> bool {
        Self::native_currency(chain_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::normalize_address;

    #[test]
    fn test_native_currency_lookup() {
        assert_eq!(ChainRegistry::native_currency_id(1), Some("ETH"));
        assert_eq!(ChainRegistry::native_currency_id(137), Some("MATIC"));
        assert_eq!(ChainRegistry::native_currency_id(424242), None);
        assert!(!ChainRegistry::is_chain_supported(0));
    }

    #[test]
    fn test_wrapped_addresses_are_normalized() {
        for native in ChainRegistry::get_all_native_currencies() {
            assert_eq!(
                normalize_address(native.wrapped_address).as_deref(),
                Some(native.wrapped_address),
                "chain {}",
                native.chain_id
            );
        }
    }

    #[test]
    fn test_native_token_descriptor() {
        let eth = ChainRegistry::native_currency(1).unwrap().token();
        assert!(eth.is_native);
        assert_eq!(eth.decimals, 18);
        assert_eq!(eth.wrapped_address(), "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
    }
}
