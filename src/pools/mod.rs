//! Pool list resolution

pub mod resolver;

pub use resolver::*;
