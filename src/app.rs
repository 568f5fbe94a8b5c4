// src/app.rs
use version_stamp_infra::{AtomicFileWriter, GitCli, Sha512Hasher, SystemHost, WalkSourceEnumerator};
use version_stamp_shared_kernel::Result;
use version_stamp_usecase::{StampOutcome, StampRequest, StampVersion};

use crate::cli::Args;

/// Run one stamping pass with the system adapters.
///
/// The checksum summary goes to stdout before the file is written, so it is
/// visible even when the write fails.
pub fn run(args: Args) -> Result<StampOutcome> {
    let request = StampRequest::try_from(args)?;

    let enumerator = WalkSourceEnumerator::new();
    let hasher = Sha512Hasher::new();
    let git = GitCli::new();
    let host = SystemHost::new();
    let writer = AtomicFileWriter::new();
    let stamper = StampVersion::new(&enumerator, &hasher, &git, &host, &writer);

    let prepared = stamper.prepare(&request)?;
    println!("{}", prepared.checksum.report());
    stamper.write(&prepared)?;
    Ok(prepared.into())
}
