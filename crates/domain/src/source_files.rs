// crates/domain/src/source_files.rs
use std::path::{Path, PathBuf};

use version_stamp_shared_kernel::{DomainError, DomainResult};

/// Number of trailing characters ignored by the ordering key.
const SORT_KEY_SUFFIX_CHARS: usize = 4;

/// Ordering key of a path: the string minus its last four characters.
///
/// This is `"java"` for the default suffix, which keeps the dot in the key.
/// The width is fixed and does not follow the configured extension: the
/// published checksums depend on this exact order.
pub fn sort_key(path: &str) -> &str {
    match path.char_indices().rev().nth(SORT_KEY_SUFFIX_CHARS - 1) {
        Some((idx, _)) => &path[..idx],
        None => "",
    }
}

/// A qualifying source file found during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Wrap a discovered path. Paths that are not valid UTF-8 are rejected
    /// because the checksum manifest is defined over UTF-8 text.
    pub fn new(path: PathBuf) -> DomainResult<Self> {
        let text = path
            .to_str()
            .map(str::to_owned)
            .ok_or_else(|| DomainError::NonUtf8Path { path: path.clone() })?;
        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn sort_key(&self) -> &str {
        sort_key(&self.text)
    }
}

/// Source files in checksum order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedFileList {
    files: Vec<SourceFile>,
}

impl SortedFileList {
    /// Sort by [`sort_key`], ascending. The sort is stable so identical keys
    /// keep discovery order.
    pub fn new(mut files: Vec<SourceFile>) -> Self {
        files.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
        Self { files }
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a SortedFileList {
    type Item = &'a SourceFile;
    type IntoIter = std::slice::Iter<'a, SourceFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
