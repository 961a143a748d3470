//! Outbound reply delivery.
//!
//! The responder hands finished replies to a [`ReplySink`]; what sits
//! behind it (a connection writer task, a test buffer) is the caller's
//! business. Send failures propagate to the dispatch caller unchanged.

use crate::ctcp::CtcpReply;
use crate::error::ResponderError;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Destination for outgoing CTCP replies.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Deliver one reply. Called at most once per dispatched request.
    async fn send(&self, reply: &CtcpReply) -> Result<(), ResponderError>;
}

/// Sink that writes wire-encoded notice lines into an outgoing mpsc
/// channel, one line per reply.
///
/// The receiving end is typically the connection's writer task.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    /// Wrap an outgoing line channel.
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl ReplySink for ChannelSink {
    async fn send(&self, reply: &CtcpReply) -> Result<(), ResponderError> {
        self.tx.send(reply.to_wire()).await?;
        Ok(())
    }
}
