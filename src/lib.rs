//! # datacheck - Data Integrity Check
//!
//! Verifies that the files of a data directory still match the hashes
//! recorded in `group-01/hash_list.txt`.
//!
//! The manifest holds one `<sha1 hex> <relative path>` record per line.
//! Every listed file is hashed in manifest order and the run stops at the
//! first file whose digest differs from the recorded one.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! datacheck::validate(Path::new("data")).unwrap();
//! ```
//!
//! ## Custom Settings
//!
//! ```no_run
//! use datacheck::config::{HashAlgorithm, ValidatorConfig};
//! use datacheck::validate::Validator;
//!
//! let config = ValidatorConfig::new("data").with_algorithm(HashAlgorithm::Sha256);
//! let summary = Validator::new(config).run().unwrap();
//!
//! println!("Checked {} files", summary.files_checked);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod validate;

// Re-export commonly used types
pub use config::{HashAlgorithm, ValidatorConfig};
pub use error::{DataCheckError, Result};
pub use hash::compute_hash;
pub use validate::{validate, ValidationSummary, Validator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
