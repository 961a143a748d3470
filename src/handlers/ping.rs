//! PING response generator.
//!
//! Echoes the request payload back verbatim so the requester can
//! measure round-trip latency. An empty payload still gets a reply
//! with an empty body.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// Handler for CTCP PING requests.
pub struct PingHandler;

impl CtcpHandler for PingHandler {
    fn respond(&self, request: &CtcpRequest, _host: &dyn HostInfo) -> Option<String> {
        Some(request.text.clone())
    }
}
