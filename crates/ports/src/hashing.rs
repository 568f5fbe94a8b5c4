// crates/ports/src/hashing.rs
use std::path::Path;

use version_stamp_shared_kernel::{HexDigest, Result};

pub trait ContentHasher {
    /// Digest of a file's raw bytes.
    fn hash_file(&self, path: &Path) -> Result<HexDigest>;

    /// Digest of an in-memory buffer.
    fn hash_bytes(&self, data: &[u8]) -> HexDigest;
}
