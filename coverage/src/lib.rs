//! Test-vector coverage auditor.
//!
//! Checks that every file under a test-vector directory was read by a test
//! run, given a log of accessed paths. Files that were neither accessed nor
//! intentionally excluded are reported as missed.
//!
//! - **[`core`]**: Pure logic (normalization, exclusions, reconciliation).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting helpers (access log, directory walk, config).
//!
//! [`audit`] wires the two together for the CLI.

pub mod audit;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
