//! Configuration module for datacheck
//!
//! Provides CLI arguments and runtime settings for a validation run.

mod settings;

pub use settings::*;
