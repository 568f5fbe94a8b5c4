// crates/infra/src/hashing.rs
use std::{
    io::{ErrorKind, Read},
    path::Path,
};

use sha2::{Digest, Sha512};
use version_stamp_ports::hashing::ContentHasher;
use version_stamp_shared_kernel::{HexDigest, InfrastructureError, Result};

use crate::persistence::FileReader;

/// Read size used when streaming file contents into the digest.
pub const DEFAULT_BLOCK_SIZE: usize = 64 * 1024;

/// SHA-512 over raw bytes, fed in fixed-size blocks so memory stays bounded
/// regardless of file size.
#[derive(Debug, Clone, Copy)]
pub struct Sha512Hasher {
    block_size: usize,
}

impl Default for Sha512Hasher {
    fn default() -> Self {
        Self { block_size: DEFAULT_BLOCK_SIZE }
    }
}

impl Sha512Hasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_size(block_size: usize) -> Self {
        Self { block_size: block_size.max(1) }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Digest everything `reader` yields.
    pub fn digest_reader<R: Read>(&self, mut reader: R) -> std::io::Result<HexDigest> {
        let mut hasher = Sha512::new();
        let mut buf = vec![0u8; self.block_size];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(HexDigest::new(format!("{:x}", hasher.finalize())))
    }
}

impl ContentHasher for Sha512Hasher {
    fn hash_file(&self, path: &Path) -> Result<HexDigest> {
        let file = FileReader::open(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        let digest = self
            .digest_reader(file)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(digest)
    }

    fn hash_bytes(&self, data: &[u8]) -> HexDigest {
        HexDigest::new(format!("{:x}", Sha512::digest(data)))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    const EMPTY_SHA512: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
                                47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    #[test]
    fn empty_input_matches_known_vector() {
        let hasher = Sha512Hasher::new();
        assert_eq!(hasher.hash_bytes(b"").as_str(), EMPTY_SHA512);
        assert_eq!(hasher.digest_reader(&b""[..]).unwrap().as_str(), EMPTY_SHA512);
    }

    #[test]
    fn digest_is_128_lowercase_hex_chars() {
        let digest = Sha512Hasher::new().hash_bytes(b"x");
        assert_eq!(digest.as_str().len(), 128);
        assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn block_size_is_never_zero() {
        assert_eq!(Sha512Hasher::with_block_size(0).block_size(), 1);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().expect("temp dir");
        let err = Sha512Hasher::new().hash_file(&dir.path().join("Gone.java")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
