//! Runtime configuration for the server binary

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

/// Bind configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl ServerConfig {
    /// Read `CARNET_ADDR` (e.g. `127.0.0.1:8080`); defaults when unset.
    pub fn from_env() -> Result<Self> {
        match env::var("CARNET_ADDR") {
            Ok(raw) => {
                let bind_addr = raw
                    .parse()
                    .with_context(|| format!("invalid CARNET_ADDR '{}'", raw))?;
                Ok(Self { bind_addr })
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_port_3000() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_addr_parses() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        assert_eq!(ServerConfig { bind_addr: addr }.bind_addr.port(), 8080);
    }
}
