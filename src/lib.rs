//! Swapquote - route quotes and trade projections for EVM swaps
//! Built with Domain-Driven Design principles

pub mod domain;
pub mod infrastructure;
pub mod application;
pub mod shared;

pub mod app;
pub mod config;
pub mod math;
pub mod report;

// Re-export main types for convenience
pub use application::TradeQuery;
pub use domain::chain::ChainRegistry;
pub use domain::price::PriceTable;
pub use domain::trade::{project, RawRouteResult, TradeIntent, TradeProjection};
pub use infrastructure::database::TokenStore;
