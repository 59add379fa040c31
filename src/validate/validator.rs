//! Hash list validation
//!
//! Walks the manifest in file order, hashes each listed file relative to
//! the data directory, and stops at the first digest that differs.

use crate::config::ValidatorConfig;
use crate::error::{DataCheckError, Result};
use crate::hash::hash_file_with_buffer;
use crate::manifest::{HashList, ManifestEntry};
use std::path::Path;
use std::time::{Duration, Instant};

/// Outcome of a successful validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Manifest entries checked
    pub files_checked: u64,
    /// Bytes hashed across all files
    pub bytes_hashed: u64,
    /// Wall-clock time of the run
    pub duration: Duration,
}

/// Validates a data directory against its hash list
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator for the given settings
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Load the manifest and check every entry
    pub fn run(&self) -> Result<ValidationSummary> {
        let manifest_path = self.config.manifest_path();
        tracing::debug!("Reading manifest {:?}", manifest_path);

        let list = HashList::load(&manifest_path)?;
        self.check_all(&list)
    }

    /// Check entries in order, failing on the first mismatch
    pub fn check_all(&self, list: &HashList) -> Result<ValidationSummary> {
        let start = Instant::now();
        let mut summary = ValidationSummary::default();

        for entry in list {
            summary.bytes_hashed += self.check_entry(entry)?;
            summary.files_checked += 1;
        }

        summary.duration = start.elapsed();
        tracing::info!(
            "Validated {} files ({} bytes, {}) in {:.2?}",
            summary.files_checked,
            summary.bytes_hashed,
            self.config.algorithm,
            summary.duration
        );

        Ok(summary)
    }

    /// Hash one listed file and compare with its recorded digest.
    /// Returns the number of bytes hashed.
    pub fn check_entry(&self, entry: &ManifestEntry) -> Result<u64> {
        let path = self.config.resolve(&entry.path);
        let actual = hash_file_with_buffer(&path, self.config.algorithm, self.config.buffer_size)?;

        if !actual.matches(&entry.expected_hash) {
            tracing::debug!(
                "Hash mismatch on manifest line {}: {}",
                entry.line,
                entry.path
            );
            return Err(DataCheckError::hash_mismatch(
                path,
                entry.expected_hash.clone(),
                actual.hash,
            ));
        }

        tracing::debug!("OK {} ({} bytes)", entry.path, actual.size);
        Ok(actual.size)
    }
}

/// Validate `data_dir` against `group-01/hash_list.txt` using SHA-1
pub fn validate(data_dir: &Path) -> Result<()> {
    Validator::new(ValidatorConfig::new(data_dir)).run()?;
    Ok(())
}
