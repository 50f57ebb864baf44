//! Read-only views on delegation proxies and LST tokens

pub mod abi;
pub mod delegation;
pub mod token;

pub use abi::*;
pub use delegation::*;
pub use token::*;
