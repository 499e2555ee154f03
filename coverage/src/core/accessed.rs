//! Set of canonical paths that a test run reported as accessed.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::core::path::{NormalizeError, normalize};

/// Access log line that could not be turned into a canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("access log line {line}")]
pub struct AccessLogError {
    /// 1-based line number in the access log.
    pub line: usize,
    #[source]
    pub source: NormalizeError,
}

/// Canonical paths accessed during a test run.
///
/// Duplicate log lines collapse into one entry; they are not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessedSet {
    paths: BTreeSet<String>,
}

impl AccessedSet {
    /// Build the set from raw access log lines.
    ///
    /// Each line is trimmed and one pair of surrounding double quotes removed
    /// before normalization. Lines that are blank after trimming are skipped.
    pub fn from_lines<I, S>(lines: I, marker: &str) -> Result<Self, AccessLogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = BTreeSet::new();
        for (index, raw) in lines.into_iter().enumerate() {
            let line = index + 1;
            let raw = raw.as_ref();
            if raw.trim().is_empty() {
                debug!(line, "skipping blank access log line");
                continue;
            }
            let canonical = normalize(strip_line(raw), marker)
                .map_err(|source| AccessLogError { line, source })?;
            if !paths.insert(canonical.to_string()) {
                debug!(line, path = canonical, "duplicate access log entry");
            }
        }
        Ok(Self { paths })
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.paths.contains(canonical)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl FromIterator<String> for AccessedSet {
    /// Collect already-canonical paths.
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}

/// Trim whitespace, then drop a single pair of surrounding double quotes.
///
/// An unbalanced quote at either end is kept, so the line then fails to match
/// any vector instead of being silently repaired.
pub fn strip_line(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(trimmed)
}
