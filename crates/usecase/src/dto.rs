// crates/usecase/src/dto.rs
use std::path::PathBuf;

use version_stamp_domain::{BuildMetadata, SourceChecksum};

/// Metadata and rendered file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedStamp {
    pub metadata: BuildMetadata,
    pub checksum: SourceChecksum,
    pub output_path: PathBuf,
    pub contents: String,
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampOutcome {
    pub metadata: BuildMetadata,
    pub checksum: SourceChecksum,
    pub output_path: PathBuf,
}

impl From<PreparedStamp> for StampOutcome {
    fn from(prepared: PreparedStamp) -> Self {
        Self { metadata: prepared.metadata, checksum: prepared.checksum, output_path: prepared.output_path }
    }
}
