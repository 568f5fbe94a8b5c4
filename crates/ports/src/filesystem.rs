// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use version_stamp_shared_kernel::Result;

/// Input parameters controlling source enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceScanPlan {
    /// Directory walked recursively.
    pub root: PathBuf,
    /// Suffix a file name must end with, e.g. `.java`.
    pub extension: String,
}

/// Port for enumerating qualifying source files.
///
/// Order of the returned paths is unspecified; callers sort.
pub trait SourceEnumerator {
    fn collect(&self, plan: &SourceScanPlan) -> Result<Vec<PathBuf>>;
}
