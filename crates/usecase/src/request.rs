// crates/usecase/src/request.rs
use std::path::PathBuf;

use derive_builder::Builder;
use version_stamp_domain::template::default_output_path;
use version_stamp_shared_kernel::{DomainError, path::scan_root_of};

/// Suffix of the files that take part in the source checksum.
pub const DEFAULT_EXTENSION: &str = ".java";

/// Input of a single stamping run.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct StampRequest {
    pub version: String,
    pub short_version: String,
    pub source_root: PathBuf,
    #[builder(default = "DEFAULT_EXTENSION.to_string()")]
    pub extension: String,
    /// Overrides the conventional location under `target/gen`.
    #[builder(default, setter(strip_option))]
    pub output_path: Option<PathBuf>,
}

impl StampRequest {
    pub fn builder() -> StampRequestBuilder {
        StampRequestBuilder::default()
    }

    /// Directory walked for source files.
    pub fn scan_root(&self) -> PathBuf {
        scan_root_of(&self.source_root)
    }

    /// Where the generated file is written.
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path.clone().unwrap_or_else(|| default_output_path(&self.source_root))
    }
}

impl StampRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(root) = &self.source_root
            && root.as_os_str().is_empty()
        {
            return Err("source root must not be empty".to_string());
        }
        if let Some(ext) = &self.extension
            && ext.is_empty()
        {
            return Err("extension must not be empty".to_string());
        }
        Ok(())
    }
}

impl From<StampRequestBuilderError> for DomainError {
    fn from(err: StampRequestBuilderError) -> Self {
        DomainError::InvalidRequest { reason: err.to_string() }
    }
}
