// crates/shared-kernel/src/value_objects/mod.rs
pub mod digest;

pub use digest::HexDigest;
