//! TOML-backed configuration store.
//!
//! ```toml
//! allow_chan_ctcp = true
//!
//! [ctcp]
//! VERSION = "mybot 2.1"
//! USERINFO = ""            # explicitly ignore USERINFO
//!
//! [channels."#quiet"]
//! allow_chan_ctcp = false
//!
//! [channels."#rust"]
//! ctcp.PING = ""           # ignore PING in #rust only
//! ```

use super::store::{ConfigStore, Scope};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Responder configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponderConfig {
    /// Whether channel-addressed requests are answered (default true).
    pub allow_chan_ctcp: Option<bool>,
    /// Per-type override bodies, keyed by CTCP type token.
    #[serde(default)]
    pub ctcp: HashMap<String, String>,
    /// Per-channel overlays.
    #[serde(default)]
    pub channels: HashMap<String, ChannelOverrides>,
}

/// Settings overriding the global ones for a single channel.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelOverrides {
    /// Whether requests addressed to this channel are answered.
    pub allow_chan_ctcp: Option<bool>,
    /// Per-type override bodies for this channel.
    #[serde(default)]
    pub ctcp: HashMap<String, String>,
}

impl ResponderConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ResponderConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Translate a flat key into the typed fields.
fn lookup(
    key: &str,
    allow_chan_ctcp: Option<bool>,
    ctcp: &HashMap<String, String>,
) -> Option<String> {
    if let Some(token) = key.strip_prefix(super::CTCP_KEY_PREFIX) {
        return ctcp.get(token).cloned();
    }
    if key == super::ALLOW_CHAN_CTCP {
        return allow_chan_ctcp.map(|b| b.to_string());
    }
    None
}

impl ConfigStore for ResponderConfig {
    fn get_str(&self, key: &str, scope: Scope<'_>) -> Option<String> {
        if let Scope::Channel(channel) = scope {
            if let Some(overlay) = self.channels.get(channel) {
                if let Some(value) = lookup(key, overlay.allow_chan_ctcp, &overlay.ctcp) {
                    return Some(value);
                }
            }
        }
        lookup(key, self.allow_chan_ctcp, &self.ctcp)
    }
}
