// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, warn};
use version_stamp_ports::filesystem::{SourceEnumerator, SourceScanPlan};
use version_stamp_shared_kernel::Result;

/// Filesystem adapter implementing the `SourceEnumerator` port with a plain
/// recursive walk.
///
/// Every ignore mechanism of the `ignore` crate is switched off: hidden
/// files, `.gitignore` and friends all count towards the checksum. Directory
/// symlinks are listed but not descended into.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkSourceEnumerator;

impl WalkSourceEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl SourceEnumerator for WalkSourceEnumerator {
    fn collect(&self, plan: &SourceScanPlan) -> Result<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(&plan.root);
        builder.standard_filters(false).follow_links(false);

        let mut found = Vec::new();
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("walk error: {err}");
                    continue;
                }
            };
            // The root itself is never a candidate, even if it is a file.
            if entry.depth() == 0 || entry.file_type().is_some_and(|ft| ft.is_dir()) {
                continue;
            }
            let path = entry.into_path();
            if path.to_string_lossy().ends_with(plan.extension.as_str()) && is_live_file(&path) {
                found.push(path);
            }
        }
        debug!("found {} '{}' files under {}", found.len(), plan.extension, plan.root.display());
        Ok(found)
    }
}

// Entries can vanish between listing and inspection; those are skipped.
// Symlinks are resolved here, so a link to a directory or a dangling link
// does not qualify.
fn is_live_file(path: &Path) -> bool {
    std::fs::metadata(path).map(|md| !md.is_dir()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    fn plan(root: &Path) -> SourceScanPlan {
        SourceScanPlan { root: root.to_path_buf(), extension: ".java".to_string() }
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn collects_matching_files_recursively() {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("Top.java"), "x").unwrap();
        fs::write(dir.path().join("a/b/Deep.java"), "y").unwrap();
        fs::write(dir.path().join("a/notes.txt"), "z").unwrap();

        let found = sorted(WalkSourceEnumerator::new().collect(&plan(dir.path())).unwrap());

        assert_eq!(found, vec![dir.path().join("Top.java"), dir.path().join("a/b/Deep.java")]);
    }

    #[test]
    fn hidden_and_ignored_files_are_included() {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".gitignore"), "*.java\n").unwrap();
        fs::write(dir.path().join(".hidden/Secret.java"), "x").unwrap();
        fs::write(dir.path().join("Ignored.java"), "y").unwrap();

        let found = WalkSourceEnumerator::new().collect(&plan(dir.path())).unwrap();

        assert_eq!(found.len(), 2);
    }

    #[test]
    fn directories_with_matching_names_are_skipped() {
        let dir = tempdir().expect("temp dir");
        fs::create_dir_all(dir.path().join("pkg.java")).unwrap();
        fs::write(dir.path().join("pkg.java/Inner.java"), "x").unwrap();

        let found = WalkSourceEnumerator::new().collect(&plan(dir.path())).unwrap();

        assert_eq!(found, vec![dir.path().join("pkg.java/Inner.java")]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempdir().expect("temp dir");
        let found = WalkSourceEnumerator::new().collect(&plan(&dir.path().join("absent"))).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn suffix_is_configurable() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("lib.rs"), "x").unwrap();
        fs::write(dir.path().join("Main.java"), "y").unwrap();

        let plan = SourceScanPlan { root: dir.path().to_path_buf(), extension: ".rs".to_string() };
        let found = WalkSourceEnumerator::new().collect(&plan).unwrap();

        assert_eq!(found, vec![dir.path().join("lib.rs")]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlinks_are_skipped() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("Real.java"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path().join("Nowhere.java"), dir.path().join("Broken.java")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("Real.java"), dir.path().join("Alias.java")).unwrap();

        let found = sorted(WalkSourceEnumerator::new().collect(&plan(dir.path())).unwrap());

        assert_eq!(found, vec![dir.path().join("Alias.java"), dir.path().join("Real.java")]);
    }
}
