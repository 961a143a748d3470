//! TIME response generator.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// Handler for CTCP TIME requests.
///
/// Answers with the current local time in RFC 2822 form, e.g.
/// `Tue, 15 Jun 2021 14:30:00 +0000`.
pub struct TimeHandler;

impl CtcpHandler for TimeHandler {
    fn respond(&self, _request: &CtcpRequest, _host: &dyn HostInfo) -> Option<String> {
        Some(chrono::Local::now().to_rfc2822())
    }
}
