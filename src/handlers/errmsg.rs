//! ERRMSG response generator.
//!
//! Reports the most recent OS-level error seen by the process, or
//! "No error" when the host has none to report.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// Reply body when the host reports no outstanding error.
const NO_ERROR: &str = "No error";

/// Handler for CTCP ERRMSG requests.
pub struct ErrmsgHandler;

impl CtcpHandler for ErrmsgHandler {
    fn respond(&self, _request: &CtcpRequest, host: &dyn HostInfo) -> Option<String> {
        Some(host.last_os_error().unwrap_or_else(|| NO_ERROR.to_owned()))
    }
}
