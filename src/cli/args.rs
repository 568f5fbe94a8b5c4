// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use version_stamp_shared_kernel::DomainError;
use version_stamp_usecase::{DEFAULT_EXTENSION, StampRequest};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "version_stamp",
    version = crate::VERSION,
    about = "Generate package-info.java carrying version, revision and source checksum"
)]
pub struct Args {
    /// Full version string, e.g. 2.5.0-SNAPSHOT
    #[arg(value_name = "VERSION")]
    pub full_version: String,

    /// Short version string, e.g. 2.5
    #[arg(value_name = "SHORT_VERSION")]
    pub short_version: String,

    /// Source root; its parent directory is scanned and the output is written below it
    #[arg(value_name = "SOURCE_ROOT", value_hint = ValueHint::DirPath)]
    pub source_root: PathBuf,

    /// Suffix of the files included in the source checksum
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Write the generated file here instead of SOURCE_ROOT/target/gen/...
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl TryFrom<Args> for StampRequest {
    type Error = DomainError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut builder = StampRequest::builder();
        builder
            .version(args.full_version)
            .short_version(args.short_version)
            .source_root(args.source_root)
            .extension(args.extension);
        if let Some(output) = args.output {
            builder.output_path(output);
        }
        Ok(builder.build()?)
    }
}
