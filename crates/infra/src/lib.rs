// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod git;
pub mod hashing;
pub mod host;
pub mod persistence;

pub use filesystem::WalkSourceEnumerator;
pub use git::GitCli;
pub use hashing::{DEFAULT_BLOCK_SIZE, Sha512Hasher};
pub use host::SystemHost;
pub use persistence::AtomicFileWriter;
