//! Configuration lookup for the responder.
//!
//! The responder reads two families of keys through the [`ConfigStore`]
//! trait:
//! - `allow_chan_ctcp`: whether channel-addressed requests get replies
//!   at all (default `true`)
//! - `ctcp_<TYPE>`: a per-type override body; an empty value means
//!   "ignore this type", which is distinct from the key being absent
//!
//! Lookups are scoped: channel-addressed requests resolve in the
//! channel's scope (falling back to global), private requests resolve
//! globally.
//!
//! Two stores are provided: [`MemoryConfig`] for programmatic setup and
//! tests, and [`ResponderConfig`] loaded from a TOML file.

mod file;
mod memory;
mod store;

pub use file::{ChannelOverrides, ConfigError, ResponderConfig};
pub use memory::MemoryConfig;
pub use store::{ConfigStore, Scope};

/// Key controlling whether channel-addressed requests are answered.
pub const ALLOW_CHAN_CTCP: &str = "allow_chan_ctcp";

/// Prefix of per-type override keys (`ctcp_VERSION`, `ctcp_PING`, ...).
pub const CTCP_KEY_PREFIX: &str = "ctcp_";

/// Build the override key for a CTCP type token.
pub fn override_key(token: &str) -> String {
    format!("{CTCP_KEY_PREFIX}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_key() {
        assert_eq!(override_key("VERSION"), "ctcp_VERSION");
        assert_eq!(override_key("SLOTS"), "ctcp_SLOTS");
    }
}
