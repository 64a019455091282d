//! API server configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default listening port of the facade.
pub const DEFAULT_LISTEN_PORT: u16 = 30203;

/// Listen address configuration for the API server.
///
/// Loaded from an external configuration source by the process entry
/// point and passed in explicitly before the server starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bind address.
    pub listen_host: IpAddr,
    /// Bind port.
    pub listen_port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            listen_port: DEFAULT_LISTEN_PORT,
        }
    }
}

impl ApiConfig {
    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        Ok(())
    }

    /// The socket address to bind.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_host, self.listen_port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Port 0 would bind an ephemeral port nobody can be told about.
    #[error("listen_port cannot be 0")]
    InvalidPort,
}
