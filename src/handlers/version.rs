//! VERSION response generator.
//!
//! Answers with a slash-separated identification string: software name
//! and version, runtime, OS name and release.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// Handler for CTCP VERSION requests.
pub struct VersionHandler;

impl CtcpHandler for VersionHandler {
    fn respond(&self, _request: &CtcpRequest, host: &dyn HostInfo) -> Option<String> {
        Some(format!(
            "{} {} / {} / {} {}",
            host.software_name(),
            host.software_version(),
            host.runtime(),
            host.os_name(),
            host.os_release()
        ))
    }
}
