//! Error types for the responder.
//!
//! Most "failures" in CTCP dispatch are not errors at all: a missing
//! configuration key falls through to the built-in table, an unknown
//! type is silently ignored, missing host data degrades to a
//! placeholder. The only propagated failure is the reply sink refusing
//! a send; the responder has no retry or buffering policy of its own.

use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur while dispatching a CTCP request.
#[derive(Debug, Error)]
pub enum ResponderError {
    /// The outgoing reply channel is gone (connection writer dropped).
    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<String>),

    /// Failure reported by a custom reply sink.
    #[error("sink error: {0}")]
    Sink(String),
}
