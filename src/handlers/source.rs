//! SOURCE response generator.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;

/// URL advertised by default in SOURCE replies.
pub const DEFAULT_SOURCE_URL: &str = "https://github.com/sid3xyz/slirc-ctcp";

/// Handler for CTCP SOURCE requests.
///
/// Returns a fixed URL pointing at the project's source code.
pub struct SourceHandler {
    url: String,
}

impl SourceHandler {
    /// Create a handler advertising `url`.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for SourceHandler {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_URL)
    }
}

impl CtcpHandler for SourceHandler {
    fn respond(&self, _request: &CtcpRequest, _host: &dyn HostInfo) -> Option<String> {
        Some(self.url.clone())
    }
}
