pub mod swap_quote_client;
pub mod token_price_client;

pub use swap_quote_client::SwapQuoteApiClient;
pub use token_price_client::TokenPriceApiClient;

use async_trait::async_trait;

use crate::domain::price::PriceTable;
use crate::domain::trade::{QuoteRequest, RawRouteResult};
use crate::shared::errors::{PriceError, QuoteError};

/// Client for the route-quoting service
#[async_trait]
pub trait QuoteApiClient: Send + Sync {
    /// Fetch and validate the best route for a request
    async fn get_route(&self, request: &QuoteRequest) -> Result<RawRouteResult, QuoteError>;
}

/// Client for per-chain token prices
#[async_trait]
pub trait PriceApiClient: Send + Sync {
    /// Current unit prices for a chain, keyed by token address
    async fn get_prices(&self, chain_id: u64) -> Result<PriceTable, PriceError>;
}
