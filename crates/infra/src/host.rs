// crates/infra/src/host.rs
use chrono::{DateTime, Local};
use version_stamp_ports::host::HostEnvironment;

/// Reads user, host name and time from the running system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    pub fn new() -> Self {
        Self
    }
}

impl HostEnvironment for SystemHost {
    fn user(&self) -> String {
        whoami::username()
    }

    fn hostname(&self) -> String {
        hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
