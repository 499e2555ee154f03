//! Test-only helpers for building vector trees and access logs on disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

/// Root marker used by the builtin configuration.
pub const ROOT_MARKER_DIR: &str = "eth2.0-spec-tests";

/// Temporary directory holding `<tmp>/eth2.0-spec-tests/...` and access logs.
pub struct VectorTree {
    temp: TempDir,
    vectors_dir: PathBuf,
}

impl VectorTree {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        let vectors_dir = temp.path().join(ROOT_MARKER_DIR);
        fs::create_dir_all(&vectors_dir)
            .with_context(|| format!("create {}", vectors_dir.display()))?;
        Ok(Self { temp, vectors_dir })
    }

    /// Temporary directory containing the vectors directory.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// The `eth2.0-spec-tests` directory to audit.
    pub fn vectors_dir(&self) -> &Path {
        &self.vectors_dir
    }

    /// Create an empty vector file at `canonical` under the vectors directory.
    pub fn add_file(&self, canonical: &str) -> Result<PathBuf> {
        let path = self.vectors_dir.join(canonical);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        fs::write(&path, "").with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    /// Write an access log listing `canonical` paths as absolute paths.
    ///
    /// With `quoted`, each line is wrapped in double quotes the way the
    /// harness writes them.
    pub fn write_access_log(&self, canonical: &[&str], quoted: bool) -> Result<PathBuf> {
        let mut contents = String::new();
        for path in canonical {
            let full = self.vectors_dir.join(path);
            if quoted {
                contents.push_str(&format!("\"{}\"\n", full.display()));
            } else {
                contents.push_str(&format!("{}\n", full.display()));
            }
        }
        let log = self.temp.path().join("accessed_files.txt");
        fs::write(&log, contents).with_context(|| format!("write {}", log.display()))?;
        Ok(log)
    }
}
