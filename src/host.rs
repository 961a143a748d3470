//! Host and process identity.
//!
//! The built-in handlers derive their response bodies from data behind
//! the [`HostInfo`] trait: who the process runs as, where, on what OS,
//! and for how long. Everything degrades gracefully: missing data
//! becomes a placeholder in the reply, never a dispatch failure.

use std::time::{Duration, Instant};

/// Read access to host and process identity data.
pub trait HostInfo: Send + Sync {
    /// Time since the process started, if known.
    fn uptime(&self) -> Option<Duration>;

    /// Name of the OS user the process runs as.
    fn username(&self) -> &str;

    /// Host name of the machine.
    fn hostname(&self) -> &str;

    /// OS family name (e.g. `linux`).
    fn os_name(&self) -> &str;

    /// OS release string (e.g. a kernel version).
    fn os_release(&self) -> &str;

    /// Runtime identification (language and toolchain version).
    fn runtime(&self) -> &str;

    /// Name of the software answering CTCP requests.
    fn software_name(&self) -> &str;

    /// Version of the software answering CTCP requests.
    fn software_version(&self) -> &str;

    /// Text of the most recent OS-level error, or `None` when the
    /// host reports no outstanding error.
    fn last_os_error(&self) -> Option<String>;
}

/// [`HostInfo`] backed by the running process and operating system.
///
/// Identity data is gathered once at construction; uptime counts from
/// that moment, so build this when the process starts.
#[derive(Debug)]
pub struct SystemHost {
    started: Instant,
    username: String,
    hostname: String,
    os_release: String,
}

impl SystemHost {
    /// Gather host identity for the current process.
    pub fn new() -> Self {
        let username = std::env::var("USER")
            .or_else(|_| std::env::var("LOGNAME"))
            .unwrap_or_else(|_| "unknown".to_owned());
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "localhost".to_owned());
        let os_release = std::fs::read_to_string("/proc/sys/kernel/osrelease")
            .map(|s| s.trim().to_owned())
            .unwrap_or_else(|_| "unknown".to_owned());

        Self {
            started: Instant::now(),
            username,
            hostname,
            os_release,
        }
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostInfo for SystemHost {
    fn uptime(&self) -> Option<Duration> {
        Some(self.started.elapsed())
    }

    fn username(&self) -> &str {
        &self.username
    }

    fn hostname(&self) -> &str {
        &self.hostname
    }

    fn os_name(&self) -> &str {
        std::env::consts::OS
    }

    fn os_release(&self) -> &str {
        &self.os_release
    }

    fn runtime(&self) -> &str {
        concat!("Rust ", env!("CARGO_PKG_RUST_VERSION"))
    }

    fn software_name(&self) -> &str {
        env!("CARGO_PKG_NAME")
    }

    fn software_version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn last_os_error(&self) -> Option<String> {
        let err = std::io::Error::last_os_error();
        match err.raw_os_error() {
            Some(0) | None => None,
            Some(_) => Some(err.to_string()),
        }
    }
}
