//! # Domain
//!
//! Pure model of a version stamp: the metadata record, the ordering of the
//! scanned source files, the checksum manifest and the generated
//! `package-info.java` template. Nothing in here touches the filesystem or
//! spawns processes.

#![allow(clippy::multiple_crate_versions)]

pub mod checksum;
pub mod metadata;
pub mod source_files;
pub mod template;

pub use checksum::{ChecksumManifest, SourceChecksum};
pub use metadata::{BuildMetadata, RevisionInfo, UNKNOWN, UNKNOWN_URL};
pub use source_files::{SortedFileList, SourceFile};
