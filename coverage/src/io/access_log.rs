//! Reading the access log written by the test harness.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::accessed::AccessedSet;

/// Read `path` and build the accessed set, one path per line.
pub fn load_accessed(path: &Path, marker: &str) -> Result<AccessedSet> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read access log {}", path.display()))?;
    let accessed = AccessedSet::from_lines(contents.lines(), marker)
        .with_context(|| format!("parse access log {}", path.display()))?;
    info!(path = %path.display(), accessed = accessed.len(), "access log loaded");
    Ok(accessed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MARKER: &str = "eth2.0-spec-tests/";

    #[test]
    fn loads_quoted_lines_from_disk() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = temp.path().join("accessed_files.txt");
        fs::write(
            &log,
            "\"/ci/eth2.0-spec-tests/tests/a/1.yaml\"\n/ci/eth2.0-spec-tests/tests/a/2.yaml\n",
        )
        .expect("write log");

        let accessed = load_accessed(&log, MARKER).expect("load");
        assert_eq!(accessed.len(), 2);
        assert!(accessed.contains("tests/a/1.yaml"));
        assert!(accessed.contains("tests/a/2.yaml"));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = temp.path().join("accessed_files.txt");
        fs::write(&log, "/ci/eth2.0-spec-tests/a.yaml\r\n/ci/eth2.0-spec-tests/b.yaml\r\n")
            .expect("write log");

        let accessed = load_accessed(&log, MARKER).expect("load");
        assert!(accessed.contains("a.yaml"));
        assert!(accessed.contains("b.yaml"));
    }

    #[test]
    fn missing_log_is_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_accessed(&temp.path().join("missing.txt"), MARKER).expect_err("should fail");
        assert!(err.to_string().contains("read access log"));
    }

    #[test]
    fn line_without_marker_names_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = temp.path().join("accessed_files.txt");
        fs::write(&log, "/ci/eth2.0-spec-tests/a.yaml\n/somewhere/else.yaml\n").expect("write log");

        let err = load_accessed(&log, MARKER).expect_err("should fail");
        let chain = format!("{:#}", err);
        assert!(chain.contains("access log line 2"), "{chain}");
        assert!(chain.contains("does not contain root marker"), "{chain}");
    }
}
