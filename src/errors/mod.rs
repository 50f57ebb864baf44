//! Error types for fatal run failures and recoverable contract reads

pub mod app_error;
pub mod call_error;

pub use app_error::*;
pub use call_error::*;
