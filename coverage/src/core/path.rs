//! Canonical path derivation relative to the vectors root marker.

use thiserror::Error;

/// Failure to derive a canonical path from a raw path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("path '{path}' does not contain root marker '{marker}'")]
    MissingRootMarker { path: String, marker: String },
    #[error("path '{path}' contains root marker '{marker}' more than once")]
    RepeatedRootMarker { path: String, marker: String },
}

/// Return the part of `path` that follows `marker`.
///
/// The marker must occur exactly once. No other rewriting is done: case and
/// separators are kept as given, so callers must feed paths in a consistent
/// form.
pub fn normalize<'a>(path: &'a str, marker: &str) -> Result<&'a str, NormalizeError> {
    let Some(start) = path.find(marker) else {
        return Err(NormalizeError::MissingRootMarker {
            path: path.to_string(),
            marker: marker.to_string(),
        });
    };
    let rest = &path[start + marker.len()..];
    if rest.contains(marker) {
        return Err(NormalizeError::RepeatedRootMarker {
            path: path.to_string(),
            marker: marker.to_string(),
        });
    }
    Ok(rest)
}
