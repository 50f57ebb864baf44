//! LST price reporter for Zilliqa 2.0 delegation proxies
//!
//! Resolves a list of staking pools, asks each delegation proxy for its
//! liquid staking token and exchange rate, reads the token's metadata and
//! renders the results as a table or as JSON.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod contracts;
pub mod probe;
pub mod app;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export commonly used items
pub use config::{Cli, Config, OutputMode, PoolSource};
pub use errors::{AppError, AppResult, CallError, CallResult};
pub use network::ContractCaller;
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
