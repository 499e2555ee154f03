//! Deterministic, pure logic for coverage reconciliation.
//!
//! Core modules are free of I/O side effects. They operate on in-memory
//! paths and return deterministic outputs suitable for tests.

pub mod accessed;
pub mod exclusions;
pub mod path;
pub mod reconcile;
