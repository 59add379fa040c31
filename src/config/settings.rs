//! Configuration settings for datacheck
//!
//! Defines the CLI arguments and the runtime settings for a validation run.

use crate::error::{DataCheckError, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Manifest location relative to the data directory
pub const DEFAULT_MANIFEST: &str = "group-01/hash_list.txt";

/// Read buffer used when streaming files through the hasher
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// datacheck - verify data files against a recorded hash list
#[derive(Parser, Debug, Clone)]
#[command(name = "datacheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Verify data files against the hashes in group-01/hash_list.txt")]
#[command(long_about = r#"
datacheck reads <DATA_DIR>/group-01/hash_list.txt, where every line is
'<hex hash> <path relative to DATA_DIR>', recomputes the hash of each listed
file and stops at the first file whose content does not match.

Success is silent and exits with status 0.

Examples:
  datacheck data                   # SHA-1 (default)
  datacheck data --algorithm sha256
  RUST_LOG=debug datacheck data    # log every checked file to stderr
"#)]
pub struct CliArgs {
    /// Data directory containing group-01/hash_list.txt
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Hash algorithm the recorded digests were produced with
    #[arg(short = 'a', long, value_enum, default_value = "sha1")]
    pub algorithm: HashAlgorithm,

    /// Verbose logging to stderr (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl CliArgs {
    /// Default tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Hash algorithm of the recorded digests
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    /// SHA-1 - the algorithm hash_list.txt is written with
    #[default]
    #[value(name = "sha1")]
    Sha1,
    /// SHA-256
    #[value(name = "sha256")]
    Sha256,
    /// BLAKE3
    #[value(name = "blake3")]
    Blake3,
}

impl HashAlgorithm {
    /// Length of the hex digest in characters
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Sha256 | Self::Blake3 => 64,
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Blake3 => "BLAKE3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for a single validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Root that manifest paths are relative to
    pub data_dir: PathBuf,
    /// Manifest path, relative to `data_dir` unless absolute
    pub manifest: PathBuf,
    /// Algorithm the recorded digests were produced with
    pub algorithm: HashAlgorithm,
    /// Read buffer size for hashing
    pub buffer_size: usize,
}

impl ValidatorConfig {
    /// Defaults for validating `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            algorithm: HashAlgorithm::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Build from parsed CLI arguments
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let data_dir = args.data_dir.clone().ok_or_else(|| {
            DataCheckError::Usage("Please give data directory on command line".to_string())
        })?;

        Ok(Self {
            algorithm: args.algorithm,
            ..Self::new(data_dir)
        })
    }

    /// Use a different hash algorithm
    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Full path of the manifest file
    pub fn manifest_path(&self) -> PathBuf {
        self.data_dir.join(&self.manifest)
    }

    /// Resolve a manifest entry path against the data directory
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.data_dir.join(relative)
    }
}
