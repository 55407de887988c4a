//! Application layer - use cases and services

pub mod commands;
pub mod trade_query;

pub use commands::{Cli, Commands};
pub use trade_query::{FetchOutcome, QueryData, TradeQuery};
