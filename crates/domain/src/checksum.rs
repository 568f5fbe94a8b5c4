// crates/domain/src/checksum.rs
use std::path::PathBuf;

use version_stamp_shared_kernel::HexDigest;

use crate::source_files::SourceFile;

/// Concatenated per-file digest lines, in sorted file order.
///
/// Each line is `"{hex-digest}  {path}\n"` (two spaces, the layout of
/// `sha512sum`). The aggregate checksum is taken over the UTF-8 bytes of the
/// whole manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumManifest {
    text: String,
    entries: usize,
}

impl ChecksumManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, digest: &HexDigest, file: &SourceFile) {
        self.text.push_str(digest.as_str());
        self.text.push_str("  ");
        self.text.push_str(file.as_str());
        self.text.push('\n');
        self.entries += 1;
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }
}

/// Result of checksumming a source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChecksum {
    pub file_count: usize,
    pub scan_root: PathBuf,
    pub digest: HexDigest,
}

impl SourceChecksum {
    /// The summary printed after hashing.
    pub fn report(&self) -> String {
        format!(
            "hash of the {}\n\t file from: {}\n\t is {}",
            self.file_count,
            self.scan_root.display(),
            self.digest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_two_space_separator_and_newline() {
        let mut manifest = ChecksumManifest::new();
        let a = SourceFile::new(PathBuf::from("src/../A.java")).unwrap();
        let b = SourceFile::new(PathBuf::from("src/../B.java")).unwrap();
        manifest.push(&HexDigest::new("aa"), &a);
        manifest.push(&HexDigest::new("bb"), &b);

        assert_eq!(manifest.as_str(), "aa  src/../A.java\nbb  src/../B.java\n");
        assert_eq!(manifest.len(), 2);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn report_spans_three_lines() {
        let checksum = SourceChecksum {
            file_count: 2,
            scan_root: PathBuf::from("src/.."),
            digest: HexDigest::new("cafe"),
        };
        assert_eq!(checksum.report(), "hash of the 2\n\t file from: src/..\n\t is cafe");
    }
}
