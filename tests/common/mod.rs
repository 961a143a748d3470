//! Integration test common infrastructure.
//!
//! Provides collaborator doubles: a fixed-identity host and sinks that
//! record or refuse replies.

// Not every test binary uses every double.
#![allow(dead_code)]

use async_trait::async_trait;
use slirc_ctcp::ctcp::CtcpReply;
use slirc_ctcp::error::ResponderError;
use slirc_ctcp::host::HostInfo;
use slirc_ctcp::sink::ReplySink;
use std::sync::Mutex;
use std::time::Duration;

/// Host double with fixed identity data.
pub struct StubHost {
    pub uptime: Option<Duration>,
    pub last_error: Option<String>,
}

impl Default for StubHost {
    fn default() -> Self {
        Self {
            uptime: Some(Duration::from_secs(3723)),
            last_error: None,
        }
    }
}

impl HostInfo for StubHost {
    fn uptime(&self) -> Option<Duration> {
        self.uptime
    }

    fn username(&self) -> &str {
        "ircbot"
    }

    fn hostname(&self) -> &str {
        "straylight"
    }

    fn os_name(&self) -> &str {
        "linux"
    }

    fn os_release(&self) -> &str {
        "6.1.0"
    }

    fn runtime(&self) -> &str {
        "Rust 1.70"
    }

    fn software_name(&self) -> &str {
        "slirc-ctcp"
    }

    fn software_version(&self) -> &str {
        "0.1.0"
    }

    fn last_os_error(&self) -> Option<String> {
        self.last_error.clone()
    }
}

/// Sink that records every reply it is given.
#[derive(Default)]
pub struct CollectingSink {
    pub sent: Mutex<Vec<CtcpReply>>,
}

impl CollectingSink {
    pub fn replies(&self) -> Vec<CtcpReply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for CollectingSink {
    async fn send(&self, reply: &CtcpReply) -> Result<(), ResponderError> {
        self.sent.lock().unwrap().push(reply.clone());
        Ok(())
    }
}

/// Sink that always fails, as if the connection writer went away.
pub struct ClosedSink;

#[async_trait]
impl ReplySink for ClosedSink {
    async fn send(&self, _reply: &CtcpReply) -> Result<(), ResponderError> {
        Err(ResponderError::Sink("connection closed".to_owned()))
    }
}
