//! Server settings read from the environment.

use std::net::SocketAddr;

/// Environment variable holding the listen address.
pub const ADDR_ENV: &str = "DEEPAUTH_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_addr_var(std::env::var(ADDR_ENV).ok().as_deref())
    }

    /// Parse an optional address value; missing or malformed values fall
    /// back to [`DEFAULT_ADDR`].
    pub fn from_addr_var(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().parse() {
            Ok(addr) => Self { addr },
            Err(e) => {
                tracing::warn!(value = raw, error = %e, "{ADDR_ENV} is not a socket address; using {DEFAULT_ADDR}");
                Self::default()
            }
        }
    }
}
