// crates/ports/src/output.rs
use std::path::Path;

use version_stamp_shared_kernel::Result;

/// Port for persisting the generated file.
pub trait ArtifactWriter {
    /// Replace `path` with `contents`, creating missing parent directories.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}
