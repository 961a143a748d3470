//! CTCP request and reply types.
//!
//! CTCP messages are embedded within PRIVMSG and NOTICE commands using
//! the `\x01` delimiter character. Requests arrive here already decoded
//! by the upstream event layer; this module defines the request shape
//! the responder consumes and the reply shape it produces.
//!
//! # Reference
//! - CTCP specification: <https://modern.ircdocs.horse/ctcp.html>

use std::fmt;

/// The CTCP delimiter character (`\x01`).
pub(crate) const CTCP_DELIM: char = '\x01';

/// CTCP query types the responder knows about.
///
/// Token matching is exact: CTCP types are case-sensitive on the wire,
/// so `version` does not resolve to [`CtcpKind::Version`] but to
/// `Unknown("version")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CtcpKind {
    /// FINGER - requests user and uptime information (legacy).
    Finger,
    /// VERSION - requests software version information.
    Version,
    /// SOURCE - requests source code location.
    Source,
    /// CLIENTINFO - requests client information.
    Clientinfo,
    /// ERRMSG - requests the last error seen by the client.
    Errmsg,
    /// PING - measures round-trip latency.
    Ping,
    /// TIME - requests local time.
    Time,
    /// Any other CTCP type, kept verbatim.
    Unknown(String),
}

impl CtcpKind {
    /// Resolve a CTCP type token. Matching is exact; unrecognized
    /// tokens (including case variants) become [`CtcpKind::Unknown`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "FINGER" => Self::Finger,
            "VERSION" => Self::Version,
            "SOURCE" => Self::Source,
            "CLIENTINFO" => Self::Clientinfo,
            "ERRMSG" => Self::Errmsg,
            "PING" => Self::Ping,
            "TIME" => Self::Time,
            _ => Self::Unknown(token.to_owned()),
        }
    }

    /// Returns the wire token of this CTCP type.
    pub fn token(&self) -> &str {
        match self {
            Self::Finger => "FINGER",
            Self::Version => "VERSION",
            Self::Source => "SOURCE",
            Self::Clientinfo => "CLIENTINFO",
            Self::Errmsg => "ERRMSG",
            Self::Ping => "PING",
            Self::Time => "TIME",
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for CtcpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A decoded CTCP request, as delivered by the upstream event layer.
///
/// Invariant: `channel` is `Some` if and only if the request arrived
/// via a channel message; a private request carries `None`. The
/// [`CtcpRequest::private`] and [`CtcpRequest::channel`] constructors
/// uphold this by shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtcpRequest {
    /// The CTCP query type.
    pub kind: CtcpKind,
    /// Nick of the requesting user.
    pub sender: String,
    /// Channel the request was addressed to, if any.
    pub channel: Option<String>,
    /// Free-form payload following the type token (may be empty).
    pub text: String,
}

impl CtcpRequest {
    /// Create a request received as a private message.
    pub fn private(
        kind: CtcpKind,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            sender: sender.into(),
            channel: None,
            text: text.into(),
        }
    }

    /// Create a request received via a channel message.
    pub fn channel(
        kind: CtcpKind,
        sender: impl Into<String>,
        channel: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            sender: sender.into(),
            channel: Some(channel.into()),
            text: text.into(),
        }
    }
}

/// An outgoing CTCP reply.
///
/// `text` is the full reply payload, `<TYPE> <body>`. The wire form
/// wraps it in CTCP delimiters and sends it as a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CtcpReply {
    /// Recipient: the channel for allowed channel requests, otherwise
    /// the requesting user.
    pub target: String,
    /// Reply payload, `<TYPE> <body>`.
    pub text: String,
}

impl CtcpReply {
    /// Create a reply.
    pub fn new(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }

    /// Encode the literal notice line carrying this reply.
    pub fn to_wire(&self) -> String {
        format!(
            "NOTICE {} :{}{}{}",
            self.target, CTCP_DELIM, self.text, CTCP_DELIM
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_known() {
        assert_eq!(CtcpKind::from_token("PING"), CtcpKind::Ping);
        assert_eq!(CtcpKind::from_token("VERSION"), CtcpKind::Version);
        assert_eq!(CtcpKind::from_token("CLIENTINFO"), CtcpKind::Clientinfo);
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        assert_eq!(
            CtcpKind::from_token("version"),
            CtcpKind::Unknown("version".to_owned())
        );
        assert_eq!(
            CtcpKind::from_token("Ping"),
            CtcpKind::Unknown("Ping".to_owned())
        );
    }

    #[test]
    fn test_token_roundtrip() {
        for token in [
            "FINGER",
            "VERSION",
            "SOURCE",
            "CLIENTINFO",
            "ERRMSG",
            "PING",
            "TIME",
            "SLOTS",
        ] {
            assert_eq!(CtcpKind::from_token(token).token(), token);
        }
    }

    #[test]
    fn test_request_constructors_uphold_invariant() {
        let private = CtcpRequest::private(CtcpKind::Ping, "alice", "x");
        assert_eq!(private.channel, None);

        let chan = CtcpRequest::channel(CtcpKind::Ping, "alice", "#rust", "x");
        assert_eq!(chan.channel.as_deref(), Some("#rust"));
        assert_eq!(chan.sender, "alice");
    }

    #[test]
    fn test_reply_wire_encoding() {
        let reply = CtcpReply::new("alice", "PING 12345");
        assert_eq!(reply.to_wire(), "NOTICE alice :\x01PING 12345\x01");
    }

    #[test]
    fn test_reply_wire_encoding_channel_target() {
        let reply = CtcpReply::new("#rust", "SOURCE https://example.org/");
        assert_eq!(
            reply.to_wire(),
            "NOTICE #rust :\x01SOURCE https://example.org/\x01"
        );
    }
}
