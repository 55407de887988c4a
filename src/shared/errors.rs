//! Error handling for the application

use thiserror::Error;

/// Quote-related errors
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Quote request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Quote service returned status {0}")]
    Status(u16),

    #[error("Quote response failed validation: {0}")]
    Validation(String),

    #[error("No native currency registered for chain {0}")]
    UnsupportedChain(u64),
}

/// Price-related errors
#[derive(Error, Debug)]
pub enum PriceError {
    #[error("Price request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Price service returned status {0}")]
    Status(u16),

    #[error("Invalid price data: {0}")]
    InvalidData(String),
}

/// Trade intent construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    #[error("Invalid token address: {0}")]
    InvalidAddress(String),

    #[error("Invalid slippage percentage: {0}")]
    InvalidSlippage(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Chain {0} has no native currency")]
    UnknownChain(u64),
}

/// Token store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,
}
