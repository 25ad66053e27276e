use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration. Loadable from a TOML file; every field has a
/// development-friendly default except the token secret, which has no safe
/// default at all.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Shared secret for bearer-token verification. When absent the server
    /// runs with [`crate::auth::AllowAllAuth`] and says so loudly.
    pub token_secret: Option<String>,
    /// Default validity window for tokens minted by the CLI.
    pub token_ttl_secs: u64,
    /// Permit GET routes without credentials.
    pub allow_anonymous_read: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8470".parse().unwrap(),
            token_secret: None,
            token_ttl_secs: 15 * 60,
            allow_anonymous_read: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| ServerError::Config(e.to_string()))
    }
}
