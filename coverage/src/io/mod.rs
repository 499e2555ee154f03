//! I/O helpers for the coverage audit.

pub mod access_log;
pub mod config;
pub mod walk;
