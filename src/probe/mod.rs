//! Per-pool probing pipeline

pub mod pipeline;

pub use pipeline::*;
