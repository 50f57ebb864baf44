//! Core data types and structures

pub mod pools;
pub mod report;
pub mod token;

pub use pools::*;
pub use report::*;
pub use token::*;
