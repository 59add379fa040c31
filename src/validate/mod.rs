//! Data directory validation
//!
//! Checks every file listed in the hash list and fails on the first
//! mismatch.

mod validator;

pub use validator::*;
