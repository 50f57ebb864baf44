//! Recoverable failures of a single contract read

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallError {
    #[error("{method} call to {contract} failed: {message}")]
    Rpc {
        contract: Address,
        method: &'static str,
        message: String,
    },

    #[error("{method} on {contract} returned undecodable data: {message}")]
    Decode {
        contract: Address,
        method: &'static str,
        message: String,
    },

    #[error("{method} on {contract} returned the zero address")]
    ZeroAddress {
        contract: Address,
        method: &'static str,
    },

    #[error("{method} on {contract} returned {value}, outside the decimal range")]
    OutOfRange {
        contract: Address,
        method: &'static str,
        value: String,
    },
}

pub type CallResult<T> = Result<T, CallError>;
