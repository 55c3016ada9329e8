//! Server configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
pub const DEFAULT_PORT: u16 = 5000;

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Verbose logging and per-request trace spans
    pub debug: bool,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            debug: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_loopback_5000_debug() {
        let config = ServerConfig::default();
        assert_eq!(config.addr(), "127.0.0.1:5000".parse().unwrap());
        assert!(config.debug);
    }

    #[test]
    fn test_addr_uses_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            debug: false,
        };
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }
}
