// crates/usecase/src/orchestrator.rs
use std::path::Path;

use log::{debug, info};
use version_stamp_domain::{
    BuildMetadata, ChecksumManifest, RevisionInfo, SortedFileList, SourceChecksum, SourceFile,
    metadata::format_build_date, template::render_package_info,
};
use version_stamp_ports::{
    filesystem::{SourceEnumerator, SourceScanPlan},
    hashing::ContentHasher,
    host::HostEnvironment,
    output::ArtifactWriter,
    revision::RevisionControl,
};
use version_stamp_shared_kernel::{
    ErrorContext, Result,
    path::{logical_absolute, to_forward_slashes},
};

use crate::{
    dto::{PreparedStamp, StampOutcome},
    request::StampRequest,
};

/// Computes build metadata for a source tree and writes `package-info.java`.
pub struct StampVersion<'a> {
    enumerator: &'a dyn SourceEnumerator,
    hasher: &'a dyn ContentHasher,
    revision_control: &'a dyn RevisionControl,
    host: &'a dyn HostEnvironment,
    writer: &'a dyn ArtifactWriter,
}

impl<'a> StampVersion<'a> {
    pub fn new(
        enumerator: &'a dyn SourceEnumerator,
        hasher: &'a dyn ContentHasher,
        revision_control: &'a dyn RevisionControl,
        host: &'a dyn HostEnvironment,
        writer: &'a dyn ArtifactWriter,
    ) -> Self {
        Self { enumerator, hasher, revision_control, host, writer }
    }

    /// Prepare and write in one go.
    pub fn run(&self, request: &StampRequest) -> Result<StampOutcome> {
        let prepared = self.prepare(request)?;
        self.write(&prepared)?;
        Ok(prepared.into())
    }

    /// Gather metadata, checksum the sources and render the file, without
    /// touching the output location.
    pub fn prepare(&self, request: &StampRequest) -> Result<PreparedStamp> {
        let user = self.host.user();
        let date = format_build_date(&self.host.now());
        let revision = self.revision_info(&request.source_root);

        let plan = SourceScanPlan { root: request.scan_root(), extension: request.extension.clone() };
        let checksum = self.checksum(&plan)?;

        let metadata = BuildMetadata::new(
            &request.version,
            &request.short_version,
            revision,
            &user,
            &date,
            checksum.digest.as_str(),
        );
        let contents = render_package_info(&metadata);
        Ok(PreparedStamp { metadata, checksum, output_path: request.resolved_output_path(), contents })
    }

    /// Replace the output file with the prepared contents.
    pub fn write(&self, prepared: &PreparedStamp) -> Result<()> {
        self.writer
            .write(&prepared.output_path, prepared.contents.as_bytes())
            .with_context(|| format!("writing {}", prepared.output_path.display()))?;
        info!("wrote {}", prepared.output_path.display());
        Ok(())
    }

    /// Revision, branch and URL of `source_root`, or the sentinel triple.
    ///
    /// A failed revision query is not an error. The branch is only queried
    /// once the revision is known.
    pub fn revision_info(&self, source_root: &Path) -> RevisionInfo {
        let revision = match self.revision_control.revision(source_root) {
            Ok(revision) => revision,
            Err(err) => {
                info!("revision control unavailable, using sentinel values: {err}");
                return RevisionInfo::unknown();
            }
        };
        let branch = self
            .revision_control
            .branch(source_root)
            .inspect_err(|err| debug!("branch query failed: {err}"))
            .ok();
        let source_path = to_forward_slashes(&logical_absolute(source_root));
        RevisionInfo::from_repository(&revision, branch.as_deref(), &self.host.hostname(), &source_path)
    }

    /// Aggregate SHA-512 over every qualifying file below `plan.root`.
    pub fn checksum(&self, plan: &SourceScanPlan) -> Result<SourceChecksum> {
        let files = self
            .enumerator
            .collect(plan)?
            .into_iter()
            .map(SourceFile::new)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let sorted = SortedFileList::new(files);

        let mut manifest = ChecksumManifest::new();
        for file in &sorted {
            let digest = self.hasher.hash_file(file.path())?;
            manifest.push(&digest, file);
        }

        let digest = self.hasher.hash_bytes(manifest.as_bytes());
        debug!("aggregate over {} files: {digest}", manifest.len());
        Ok(SourceChecksum { file_count: sorted.len(), scan_root: plan.root.clone(), digest })
    }
}
