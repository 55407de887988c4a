//! Chain domain - native currencies and their wrapped tokens

mod chain_registry;

pub use chain_registry::{ChainRegistry, NativeCurrency};
