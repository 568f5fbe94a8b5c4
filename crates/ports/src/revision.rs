// crates/ports/src/revision.rs
use std::path::Path;

use version_stamp_shared_kernel::RevisionResult;

/// Read-only revision-control queries against a working tree.
pub trait RevisionControl {
    /// Identifier of the checked-out revision.
    fn revision(&self, dir: &Path) -> RevisionResult<String>;

    /// Name of the checked-out branch.
    fn branch(&self, dir: &Path) -> RevisionResult<String>;
}
