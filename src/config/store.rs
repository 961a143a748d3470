//! The configuration store trait and lookup scope.

/// Lookup scope for configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Global settings. Private requests resolve here.
    Global,
    /// Channel-specific settings, overlaid on global.
    Channel(&'a str),
}

/// Read access to the operator's configuration.
///
/// Implementations must distinguish an absent key from a key set to
/// the empty string: the responder treats the former as "use the
/// built-in handler" and the latter as "ignore this request".
pub trait ConfigStore: Send + Sync {
    /// Look up a string key. `None` means the key is absent.
    fn get_str(&self, key: &str, scope: Scope<'_>) -> Option<String>;

    /// Look up a boolean key, falling back to `default` when the key
    /// is absent or its value does not parse as a boolean.
    fn get_bool(&self, key: &str, scope: Scope<'_>, default: bool) -> bool {
        self.get_str(key, scope)
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or(default)
    }
}

/// Parse the usual spellings of a boolean config value.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
