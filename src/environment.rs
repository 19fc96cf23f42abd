//! Environment Resolver
//!
//! Picks the backend origin for the current page location. Local hosts and
//! the usual static-server ports talk to the development backend, everything
//! else talks to production.

use serde::Deserialize;

/// Origin of the development backend
pub const LOCAL_ORIGIN: &str = "http://localhost:3001";

/// Origin of the deployed backend
pub const PRODUCTION_ORIGIN: &str = "https://your-genealina-backend.herokuapp.com";

/// Hostnames that always resolve to the local origin
pub const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", ""];

/// Ports used by local static servers (live-server, dev servers)
pub const DEV_PORTS: [&str; 3] = ["3000", "5500", "5501"];

/// Where the page is being served from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub hostname: String,
    /// Empty when the page uses the scheme's default port
    pub port: String,
}

impl Location {
    pub fn new(hostname: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.into(),
        }
    }
}

/// The local/production origin pair and the rule that chooses between them
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_local_origin")]
    pub local_origin: String,

    #[serde(default = "default_production_origin")]
    pub production_origin: String,

    #[serde(default = "default_local_hosts")]
    pub local_hosts: Vec<String>,

    #[serde(default = "default_dev_ports")]
    pub dev_ports: Vec<String>,
}

fn default_local_origin() -> String {
    LOCAL_ORIGIN.to_string()
}

fn default_production_origin() -> String {
    PRODUCTION_ORIGIN.to_string()
}

fn default_local_hosts() -> Vec<String> {
    LOCAL_HOSTS.iter().map(|h| h.to_string()).collect()
}

fn default_dev_ports() -> Vec<String> {
    DEV_PORTS.iter().map(|p| p.to_string()).collect()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            local_origin: default_local_origin(),
            production_origin: default_production_origin(),
            local_hosts: default_local_hosts(),
            dev_ports: default_dev_ports(),
        }
    }
}

impl Endpoints {
    /// Whether the location counts as local development
    pub fn is_local(&self, location: &Location) -> bool {
        self.local_hosts.iter().any(|h| *h == location.hostname)
            || self.dev_ports.iter().any(|p| *p == location.port)
    }

    /// Origin to use for requests issued from `location`
    pub fn resolve(&self, location: &Location) -> &str {
        if self.is_local(location) {
            &self.local_origin
        } else {
            &self.production_origin
        }
    }
}

/// Resolve against the compiled-in origin pair
pub fn resolve_origin(hostname: &str, port: &str) -> &'static str {
    if LOCAL_HOSTS.contains(&hostname) || DEV_PORTS.contains(&port) {
        LOCAL_ORIGIN
    } else {
        PRODUCTION_ORIGIN
    }
}
