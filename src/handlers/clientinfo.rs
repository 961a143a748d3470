//! CLIENTINFO response generator.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// URL advertised by default in CLIENTINFO replies.
pub const DEFAULT_HOMEPAGE_URL: &str = "https://sid3.xyz/slirc/";

/// Handler for CTCP CLIENTINFO requests.
///
/// Returns a fixed URL pointing at the project's home page.
pub struct ClientinfoHandler {
    url: String,
}

impl ClientinfoHandler {
    /// Create a handler advertising `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for ClientinfoHandler {
    fn default() -> Self {
        Self::new(DEFAULT_HOMEPAGE_URL)
    }
}

impl CtcpHandler for ClientinfoHandler {
    fn respond(&self, _request: &CtcpRequest, _host: &dyn HostInfo) -> Option<String> {
        Some(self.url.clone())
    }
}
