//! The CTCP dispatcher.
//!
//! One [`CtcpResponder`] serves one connection. For each incoming
//! request it applies, in strict order: the channel visibility gate,
//! the configured per-type override, and the built-in handler table.
//! At most one reply leaves through the sink per request.

use crate::config::{override_key, ConfigStore, Scope, ALLOW_CHAN_CTCP};
use crate::ctcp::{CtcpReply, CtcpRequest};
use crate::error::ResponderError;
use crate::handlers::{ProjectLinks, Registry};
use crate::host::HostInfo;
use crate::sink::ReplySink;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Responds to CTCP requests on behalf of one connection.
pub struct CtcpResponder {
    config: Arc<dyn ConfigStore>,
    host: Arc<dyn HostInfo>,
    sink: Arc<dyn ReplySink>,
    registry: Registry,
}

impl CtcpResponder {
    /// Create a responder with the default built-in handler table.
    pub fn new(
        config: Arc<dyn ConfigStore>,
        host: Arc<dyn HostInfo>,
        sink: Arc<dyn ReplySink>,
    ) -> Self {
        Self::with_links(config, host, sink, ProjectLinks::default())
    }

    /// Create a responder advertising custom project URLs in SOURCE
    /// and CLIENTINFO replies.
    pub fn with_links(
        config: Arc<dyn ConfigStore>,
        host: Arc<dyn HostInfo>,
        sink: Arc<dyn ReplySink>,
        links: ProjectLinks,
    ) -> Self {
        Self {
            config,
            host,
            sink,
            registry: Registry::new(links),
        }
    }

    /// Dispatch one CTCP request.
    ///
    /// Returns the reply that was sent, or `None` when the request was
    /// dropped: channel CTCP disabled, type explicitly ignored by an
    /// empty override, or type unknown with no override. A sink
    /// failure propagates unchanged; nothing is retried.
    pub async fn handle(
        &self,
        request: &CtcpRequest,
    ) -> Result<Option<CtcpReply>, ResponderError> {
        // Visibility gate. A disallowed channel request is dropped
        // before the override or the handler table is looked at.
        let (target, scope) = match request.channel.as_deref() {
            Some(channel) => {
                if !self
                    .config
                    .get_bool(ALLOW_CHAN_CTCP, Scope::Channel(channel), true)
                {
                    debug!(kind = %request.kind, %channel, "channel CTCP disabled, dropping request");
                    return Ok(None);
                }
                (channel, Scope::Channel(channel))
            }
            None => (request.sender.as_str(), Scope::Global),
        };

        let token = request.kind.token();

        // Operator override first; the built-in table is only a
        // fallback for unconfigured types.
        let body = match self.config.get_str(&override_key(token), scope) {
            Some(over) if over.is_empty() => {
                debug!(kind = %request.kind, "type explicitly ignored by configuration");
                return Ok(None);
            }
            Some(over) => Some(over),
            None => self
                .registry
                .get(&request.kind)
                .and_then(|handler| handler.respond(request, self.host.as_ref())),
        };

        let Some(body) = body else {
            debug!(kind = %request.kind, "no override and no built-in response, ignoring");
            return Ok(None);
        };

        let reply = CtcpReply::new(target, format!("{token} {body}"));
        self.sink.send(&reply).await?;
        debug!(kind = %request.kind, target = %reply.target, "sent CTCP reply");
        Ok(Some(reply))
    }

    /// Consume decoded CTCP requests from `events` until the channel
    /// closes, dispatching each one.
    ///
    /// Returns `Ok(())` when the upstream event source goes away; a
    /// sink failure ends the loop with that error.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<CtcpRequest>,
    ) -> Result<(), ResponderError> {
        while let Some(request) = events.recv().await {
            self.handle(&request).await?;
        }
        debug!("CTCP event channel closed, responder stopping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfig;
    use crate::ctcp::CtcpKind;
    use crate::handlers::testing::FixedHost;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<CtcpReply>>,
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send(&self, reply: &CtcpReply) -> Result<(), ResponderError> {
            self.sent.lock().unwrap().push(reply.clone());
            Ok(())
        }
    }

    fn responder_with(config: MemoryConfig) -> (CtcpResponder, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let responder = CtcpResponder::new(
            Arc::new(config),
            Arc::new(FixedHost::default()),
            sink.clone(),
        );
        (responder, sink)
    }

    #[tokio::test]
    async fn test_gate_precedes_override_resolution() {
        // Even a configured override is never consulted once the
        // channel gate is closed.
        let mut config = MemoryConfig::new();
        config.set_channel("#quiet", "allow_chan_ctcp", "false");
        config.set_channel("#quiet", "ctcp_PING", "pong");
        let (responder, sink) = responder_with(config);

        let request = CtcpRequest::channel(CtcpKind::Ping, "alice", "#quiet", "x");
        let reply = responder.handle(&request).await.unwrap();
        assert!(reply.is_none());
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_private_requests_bypass_gate() {
        let mut config = MemoryConfig::new();
        config.set_global("allow_chan_ctcp", "false");
        let (responder, sink) = responder_with(config);

        let request = CtcpRequest::private(CtcpKind::Ping, "alice", "x");
        let reply = responder.handle(&request).await.unwrap().unwrap();
        assert_eq!(reply.target, "alice");
        assert_eq!(reply.text, "PING x");
        assert_eq!(sink.sent.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_override_skips_builtin() {
        let mut config = MemoryConfig::new();
        config.set_global("ctcp_VERSION", "mybot 2.1");
        let (responder, _sink) = responder_with(config);

        let request = CtcpRequest::private(CtcpKind::Version, "alice", "");
        let reply = responder.handle(&request).await.unwrap().unwrap();
        assert_eq!(reply.text, "VERSION mybot 2.1");
    }

    #[tokio::test]
    async fn test_one_send_per_request() {
        let (responder, sink) = responder_with(MemoryConfig::new());

        let request = CtcpRequest::private(CtcpKind::Ping, "alice", "abc");
        responder.handle(&request).await.unwrap();
        responder.handle(&request).await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], sent[1]);
    }
}
