//! datacheck CLI - verify a data directory against its hash list
//!
//! Silent on success; prints the error to stderr and exits 1 otherwise.

use clap::Parser;
use datacheck::config::{CliArgs, ValidatorConfig};
use datacheck::error::Result;
use datacheck::validate::Validator;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Logs go to stderr so stdout stays empty
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = ValidatorConfig::from_cli(args)?;
    Validator::new(config).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use datacheck::error::DataCheckError;
    use tempfile::TempDir;

    const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

    fn data_dir(content: &[u8]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let manifest = ValidatorConfig::new(dir.path()).manifest_path();
        std::fs::create_dir_all(manifest.parent().unwrap()).unwrap();
        std::fs::write(manifest, format!("{} empty.txt\n", SHA1_EMPTY)).unwrap();
        std::fs::write(dir.path().join("empty.txt"), content).unwrap();
        dir
    }

    fn run_with(argv: &[&str]) -> Result<()> {
        let args = CliArgs::try_parse_from(argv).unwrap();
        run(&args)
    }

    #[test]
    fn test_run_success() {
        let dir = data_dir(b"");
        run_with(&["datacheck", dir.path().to_str().unwrap()]).unwrap();
    }

    #[test]
    fn test_run_mismatch() {
        let dir = data_dir(b"a");
        let err = run_with(&["datacheck", dir.path().to_str().unwrap()]).unwrap_err();
        assert!(matches!(err, DataCheckError::HashMismatch { .. }));
    }

    #[test]
    fn test_run_missing_manifest() {
        let dir = TempDir::new().unwrap();
        let err = run_with(&["datacheck", dir.path().to_str().unwrap()]).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_run_missing_argument() {
        let err = run_with(&["datacheck"]).unwrap_err();
        assert!(matches!(err, DataCheckError::Usage(_)));
    }
}
