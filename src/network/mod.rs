//! RPC connection and raw contract calls

pub mod caller;
pub mod providers;

pub use caller::*;
pub use providers::*;
