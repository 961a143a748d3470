//! In-memory configuration store.

use super::store::{ConfigStore, Scope};
use std::collections::HashMap;

/// A map-backed [`ConfigStore`].
///
/// Channel scopes overlay the global scope: a key missing from the
/// channel's map falls back to the global map.
#[derive(Debug, Default, Clone)]
pub struct MemoryConfig {
    global: HashMap<String, String>,
    channels: HashMap<String, HashMap<String, String>>,
}

impl MemoryConfig {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key in the global scope.
    pub fn set_global(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.global.insert(key.into(), value.into());
    }

    /// Set a key in a channel's scope.
    pub fn set_channel(
        &mut self,
        channel: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.channels
            .entry(channel.into())
            .or_default()
            .insert(key.into(), value.into());
    }
}

impl ConfigStore for MemoryConfig {
    fn get_str(&self, key: &str, scope: Scope<'_>) -> Option<String> {
        if let Scope::Channel(channel) = scope {
            if let Some(value) = self.channels.get(channel).and_then(|m| m.get(key)) {
                return Some(value.clone());
            }
        }
        self.global.get(key).cloned()
    }
}
