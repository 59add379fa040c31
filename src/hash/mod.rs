//! Hash computation module
//!
//! Streaming file hashing with SHA-1 (default), SHA-256 and BLAKE3.

mod integrity;

pub use integrity::*;
