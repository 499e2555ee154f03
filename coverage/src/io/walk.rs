//! Recursive enumeration of files under the vectors directory.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use walkdir::{DirEntry, WalkDir};

/// Call `visit` with the path of every file under `root`.
///
/// Entries are visited in file-name order so output is deterministic.
/// Symlinked directories are not descended into. Symlinks to files, and
/// dangling symlinks, are reported like regular files.
/// Stops at the first error returned by `visit` or the walk itself.
pub fn for_each_file<F>(root: &Path, mut visit: F) -> Result<usize>
where
    F: FnMut(&str) -> Result<()>,
{
    if !root.is_dir() {
        return Err(anyhow!("vectors directory {} is not a directory", root.display()));
    }
    let mut visited = 0;
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();
    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", root.display()))?;
        if !is_file_like(&entry) {
            continue;
        }
        let path = entry
            .path()
            .to_str()
            .with_context(|| format!("non UTF-8 path {}", entry.path().display()))?;
        visit(path)?;
        visited += 1;
    }
    Ok(visited)
}

fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn visits_nested_files_only() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        fs::create_dir_all(root.join("b/c")).expect("mkdir");
        fs::create_dir_all(root.join("empty")).expect("mkdir");
        fs::write(root.join("a.yaml"), "").expect("write");
        fs::write(root.join("b/c/d.ssz"), "").expect("write");

        let mut seen = Vec::new();
        let count = for_each_file(root, |path| {
            let rel = Path::new(path).strip_prefix(root).expect("under root");
            seen.push(rel.to_string_lossy().into_owned());
            Ok(())
        })
        .expect("walk");

        assert_eq!(count, 2);
        assert_eq!(seen, vec!["a.yaml", "b/c/d.ssz"]);
    }

    fn walk_relative(root: &Path) -> Vec<String> {
        let mut seen = Vec::new();
        for_each_file(root, |path| {
            let rel = Path::new(path).strip_prefix(root).expect("under root");
            seen.push(rel.to_string_lossy().into_owned());
            Ok(())
        })
        .expect("walk");
        seen
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_visited() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("vectors");
        fs::create_dir_all(root.join("a")).expect("mkdir");
        let target = temp.path().join("target.yaml");
        fs::write(&target, "").expect("write");
        std::os::unix::fs::symlink(&target, root.join("a/link.yaml")).expect("symlink");

        assert_eq!(walk_relative(&root), vec!["a/link.yaml"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_visited() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path();
        std::os::unix::fs::symlink(root.join("gone.yaml"), root.join("dangling.yaml"))
            .expect("symlink");

        assert_eq!(walk_relative(root), vec!["dangling.yaml"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directory_is_not_descended() {
        let temp = tempfile::tempdir().expect("tempdir");
        let root = temp.path().join("vectors");
        let outside = temp.path().join("outside");
        fs::create_dir_all(&root).expect("mkdir");
        fs::create_dir_all(&outside).expect("mkdir");
        fs::write(outside.join("1.yaml"), "").expect("write");
        fs::write(root.join("2.yaml"), "").expect("write");
        std::os::unix::fs::symlink(&outside, root.join("linked")).expect("symlink");

        assert_eq!(walk_relative(&root), vec!["2.yaml"]);
    }

    #[test]
    fn empty_directory_visits_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let count = for_each_file(temp.path(), |_| Ok(())).expect("walk");
        assert_eq!(count, 0);
    }

    #[test]
    fn missing_root_is_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = for_each_file(&temp.path().join("missing"), |_| Ok(())).expect_err("should fail");
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn visitor_error_stops_walk() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a"), "").expect("write");
        fs::write(temp.path().join("b"), "").expect("write");

        let mut calls = 0;
        let err = for_each_file(temp.path(), |_| {
            calls += 1;
            Err(anyhow!("stop"))
        })
        .expect_err("should fail");
        assert_eq!(err.to_string(), "stop");
        assert_eq!(calls, 1);
    }
}
