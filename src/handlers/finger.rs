//! FINGER response generator.
//!
//! Answers with the process identity and a humanized uptime:
//! `ircbot@straylight (started 2 hours 3 minutes ago)`.

use super::CtcpHandler;
use crate::ctcp::CtcpRequest;
use crate::host::HostInfo;
use std::time::Duration;

/// Placeholder used when process uptime is unknown.
const UNKNOWN_UPTIME: &str = "???";

/// Handler for CTCP FINGER requests.
pub struct FingerHandler;

impl CtcpHandler for FingerHandler {
    fn respond(&self, _request: &CtcpRequest, host: &dyn HostInfo) -> Option<String> {
        let uptime = match host.uptime() {
            Some(elapsed) => humanize(elapsed),
            None => UNKNOWN_UPTIME.to_owned(),
        };
        Some(format!(
            "{}@{} (started {} ago)",
            host.username(),
            host.hostname(),
            uptime
        ))
    }
}

/// Render a duration with its non-zero units, largest first:
/// `1 day 2 hours 3 minutes 4 seconds`.
fn humanize(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    let mut parts = Vec::new();
    for (value, unit) in [
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
        (seconds, "second"),
    ] {
        if value > 0 {
            let plural = if value == 1 { "" } else { "s" };
            parts.push(format!("{value} {unit}{plural}"));
        }
    }
    if parts.is_empty() {
        return "0 seconds".to_owned();
    }
    parts.join(" ")
}
