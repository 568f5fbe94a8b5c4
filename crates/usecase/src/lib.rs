//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`request`]: validated input of a stamping run
//! - [`orchestrator`]: gather metadata, checksum the sources, write the artifact
//! - [`dto`]: results handed back to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod request;

pub use dto::{PreparedStamp, StampOutcome};
pub use orchestrator::StampVersion;
pub use request::{DEFAULT_EXTENSION, StampRequest, StampRequestBuilder};
