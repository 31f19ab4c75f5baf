//! Configuration for the quiz service.
//!
//! Environment variables only affect where the server binds; core scoring
//! behavior is never configurable.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

/// Main configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig::from_env()?,
        })
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`INTROSPECT_HOST`, default 127.0.0.1).
    pub host: IpAddr,
    /// Port to bind (`INTROSPECT_PORT`, default 8900).
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = match std::env::var("INTROSPECT_HOST") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INTROSPECT_HOST".to_string(),
                message: format!("not an IP address: {raw}"),
            })?,
            Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match std::env::var("INTROSPECT_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "INTROSPECT_PORT".to_string(),
                message: format!("not a port number: {raw}"),
            })?,
            Err(_) => 8900,
        };

        Ok(Self { host, port })
    }

    /// Socket address the server should bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addr_combines_host_and_port() {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8900,
        };
        assert_eq!(config.addr().to_string(), "127.0.0.1:8900");
    }
}
