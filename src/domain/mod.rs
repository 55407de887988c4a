//! Domain layer - core business logic and entities

pub mod chain;
pub mod price;
pub mod trade;
