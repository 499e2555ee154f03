//! Stable exit codes for the coverage CLI.

/// Every vector was accessed or intentionally excluded.
pub const OK: i32 = 0;
/// Invalid input: unreadable files, walk failure, or a path without the root marker.
pub const INVALID: i32 = 1;
/// One or more vectors were neither accessed nor excluded.
pub const MISSED: i32 = 2;
