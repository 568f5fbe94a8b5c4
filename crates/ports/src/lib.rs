//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`filesystem`]: source tree enumeration
//! - [`hashing`]: streaming content digests
//! - [`revision`]: revision-control queries
//! - [`host`]: user name, host name and wall clock
//! - [`output`]: writing the generated artifact
//!
//! The use case layer only sees these traits, so tests can swap any of them
//! for a stub.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod hashing;
pub mod host;
pub mod output;
pub mod revision;
