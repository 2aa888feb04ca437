//! Gateway configuration from the environment.

use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayConfig {
    pub port: u16,
}

impl GatewayConfig {
    /// `CUP_GATEWAY_PORT`, then `PORT`, then [`DEFAULT_PORT`].
    pub fn from_env() -> Self {
        let raw = std::env::var("CUP_GATEWAY_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok();
        Self::from_port_var(raw.as_deref())
    }

    fn from_port_var(raw: Option<&str>) -> Self {
        let port = match raw {
            None => DEFAULT_PORT,
            Some(value) => value.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid port {:?}, using {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
        };
        Self { port }
    }

    /// All interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(GatewayConfig::from_port_var(None).port, 8050);
        assert_eq!(GatewayConfig::default(), GatewayConfig::from_port_var(None));
    }

    #[test]
    fn test_port_from_var() {
        assert_eq!(GatewayConfig::from_port_var(Some("10000")).port, 10000);
    }

    #[test]
    fn test_invalid_port_falls_back() {
        assert_eq!(GatewayConfig::from_port_var(Some("eighty")).port, DEFAULT_PORT);
        assert_eq!(GatewayConfig::from_port_var(Some("70000")).port, DEFAULT_PORT);
    }

    #[test]
    fn test_binds_all_interfaces() {
        let addr = GatewayConfig { port: 8050 }.bind_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:8050");
    }
}
