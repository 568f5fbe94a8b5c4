// crates/ports/src/host.rs
use chrono::{DateTime, Local};

/// Facts about the machine and moment of the build.
pub trait HostEnvironment {
    fn user(&self) -> String;
    fn hostname(&self) -> String;
    fn now(&self) -> DateTime<Local>;
}
