//! Trade domain - intents, quote requests, route results and projections

mod intent;
mod projection;
mod request;
mod route;

pub use intent::{
    format_gas_price, SlippagePercentage, TradeIntent, TradeKey, DEFAULT_GAS_PRICE,
    DEFAULT_SLIPPAGE_PERCENTAGE,
};
pub use projection::{project, projection_key, ProjectionKey, TradeProjection};
pub use request::QuoteRequest;
pub use route::{BestRoute, RawRouteResult, RouteProcessorParams, WriteArgs};
