//! # slirc-ctcp
//!
//! A CTCP (Client-To-Client Protocol) auto-responder for IRC bots and
//! clients. Decoded CTCP requests go in, at most one CTCP reply comes
//! out, formatted per the wire convention (`\x01`-delimited payload in
//! a NOTICE).
//!
//! ## Features
//!
//! - Dispatch with strict precedence: channel visibility policy, then
//!   per-type configured overrides, then the built-in handler table
//! - Built-in responses for the standard query set: FINGER, VERSION,
//!   SOURCE, CLIENTINFO, ERRMSG, PING, TIME
//! - Operator overrides per CTCP type, including explicit ignore
//!   (empty override) and per-channel settings
//! - Collaborators behind traits: configuration store, host identity,
//!   reply sink
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_ctcp::config::MemoryConfig;
//! use slirc_ctcp::host::SystemHost;
//! use slirc_ctcp::sink::ChannelSink;
//! use slirc_ctcp::{CtcpKind, CtcpRequest, CtcpResponder};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let (tx, mut rx) = tokio::sync::mpsc::channel(8);
//! let responder = CtcpResponder::new(
//!     Arc::new(MemoryConfig::new()),
//!     Arc::new(SystemHost::new()),
//!     Arc::new(ChannelSink::new(tx)),
//! );
//!
//! let request = CtcpRequest::private(CtcpKind::Ping, "alice", "12345");
//! let reply = responder.handle(&request).await.unwrap().unwrap();
//! assert_eq!(reply.text, "PING 12345");
//! assert_eq!(
//!     rx.recv().await.unwrap(),
//!     "NOTICE alice :\u{1}PING 12345\u{1}"
//! );
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod ctcp;
pub mod error;
pub mod handlers;
pub mod host;
pub mod responder;
pub mod sink;

pub use ctcp::{CtcpKind, CtcpReply, CtcpRequest};
pub use error::ResponderError;
pub use responder::CtcpResponder;
