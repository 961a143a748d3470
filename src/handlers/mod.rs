//! Built-in CTCP response generators.
//!
//! Each supported query type has a handler in its own submodule. The
//! [`Registry`] maps [`CtcpKind`] to a boxed handler; it is built once
//! and never mutated afterwards. Handlers are pure with respect to
//! responder state: they only read the request and [`HostInfo`] data,
//! so each is testable on its own, without the dispatcher.

mod clientinfo;
mod errmsg;
mod finger;
mod ping;
mod source;
mod time;
mod version;

pub use clientinfo::{ClientinfoHandler, DEFAULT_HOMEPAGE_URL};
pub use errmsg::ErrmsgHandler;
pub use finger::FingerHandler;
pub use ping::PingHandler;
pub use source::{SourceHandler, DEFAULT_SOURCE_URL};
pub use time::TimeHandler;
pub use version::VersionHandler;

use crate::ctcp::{CtcpKind, CtcpRequest};
use crate::host::HostInfo;
use std::collections::HashMap;

/// A response generator for one CTCP query type.
pub trait CtcpHandler: Send + Sync {
    /// Produce the reply body for `request`, or `None` for no reply.
    fn respond(&self, request: &CtcpRequest, host: &dyn HostInfo) -> Option<String>;
}

/// Project URLs advertised by the SOURCE and CLIENTINFO handlers.
#[derive(Debug, Clone)]
pub struct ProjectLinks {
    /// Where the source code lives.
    pub source: String,
    /// The project's home page.
    pub homepage: String,
}

impl Default for ProjectLinks {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE_URL.to_owned(),
            homepage: DEFAULT_HOMEPAGE_URL.to_owned(),
        }
    }
}

/// Registry of built-in handlers, keyed by CTCP type.
pub struct Registry {
    handlers: HashMap<CtcpKind, Box<dyn CtcpHandler>>,
}

impl Registry {
    /// Create a registry with all built-in handlers registered.
    pub fn new(links: ProjectLinks) -> Self {
        let mut handlers: HashMap<CtcpKind, Box<dyn CtcpHandler>> = HashMap::new();

        handlers.insert(CtcpKind::Finger, Box::new(FingerHandler));
        handlers.insert(CtcpKind::Version, Box::new(VersionHandler));
        handlers.insert(CtcpKind::Source, Box::new(SourceHandler::new(links.source)));
        handlers.insert(
            CtcpKind::Clientinfo,
            Box::new(ClientinfoHandler::new(links.homepage)),
        );
        handlers.insert(CtcpKind::Errmsg, Box::new(ErrmsgHandler));
        handlers.insert(CtcpKind::Ping, Box::new(PingHandler));
        handlers.insert(CtcpKind::Time, Box::new(TimeHandler));

        Self { handlers }
    }

    /// Look up the handler for a CTCP type.
    pub fn get(&self, kind: &CtcpKind) -> Option<&dyn CtcpHandler> {
        self.handlers.get(kind).map(|h| h.as_ref())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(ProjectLinks::default())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixed host data for handler unit tests.

    use crate::host::HostInfo;
    use std::time::Duration;

    pub(crate) struct FixedHost {
        pub uptime: Option<Duration>,
        pub last_error: Option<String>,
    }

    impl Default for FixedHost {
        fn default() -> Self {
            Self {
                uptime: Some(Duration::from_secs(93_784)),
                last_error: None,
            }
        }
    }

    impl HostInfo for FixedHost {
        fn uptime(&self) -> Option<Duration> {
            self.uptime
        }

        fn username(&self) -> &str {
            "ircbot"
        }

        fn hostname(&self) -> &str {
            "straylight"
        }

        fn os_name(&self) -> &str {
            "linux"
        }

        fn os_release(&self) -> &str {
            "6.1.0"
        }

        fn runtime(&self) -> &str {
            "Rust 1.70"
        }

        fn software_name(&self) -> &str {
            "slirc-ctcp"
        }

        fn software_version(&self) -> &str {
            "0.1.0"
        }

        fn last_os_error(&self) -> Option<String> {
            self.last_error.clone()
        }
    }
}
