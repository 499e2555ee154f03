//! Test-vector coverage auditor.
//!
//! Compares the files a test run accessed against every file in the
//! test-vector directory and fails if any vector was silently skipped.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use coverage::audit::{AuditOutcome, run_audit};
use coverage::exit_codes;
use coverage::io::config::AuditConfig;
use coverage::logging;

#[derive(Parser)]
#[command(
    name = "coverage",
    version,
    about = "Check that every test vector was accessed by a test run"
)]
struct Cli {
    /// File listing accessed vector paths, one per line (optionally double-quoted).
    accessed_log: PathBuf,
    /// Root of the test-vector tree to audit.
    vectors_dir: PathBuf,
}

fn main() {
    logging::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            // Keep usage errors off the MISSED exit code.
            let _ = err.print();
            std::process::exit(exit_codes::INVALID);
        }
    };
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config = AuditConfig::builtin()?;
    debug!(
        accessed_log = %cli.accessed_log.display(),
        vectors_dir = %cli.vectors_dir.display(),
        "starting audit"
    );
    let outcome = run_audit(&cli.accessed_log, &cli.vectors_dir, &config, |path| {
        println!("{path}");
    })?;
    match outcome {
        AuditOutcome::Clean { .. } => {
            println!("{}", outcome.summary());
            Ok(exit_codes::OK)
        }
        AuditOutcome::Missed { .. } => {
            eprintln!("{}", outcome.summary());
            Ok(exit_codes::MISSED)
        }
    }
}
