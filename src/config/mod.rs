//! Configuration management for the LST price reporter

pub mod settings;

pub use settings::*;
